use dictionary::Word;

/// Snapshot of the shared lookup state the pages render from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    pub data_word: Word,
    pub word_loading: bool,
    pub fetching_error: Option<u16>,
}

impl LookupState {
    /// Whether some word is already loaded. Note that this does not say
    /// *which* word; the store holds at most one result at a time and is
    /// cleared on the way back home.
    pub fn has_word(&self) -> bool {
        !self.data_word.word.is_empty()
    }
}

/// Requests a page may issue. Their effects are only observable through
/// later [`LookupState`] snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchWord(String),
    ClearStore,
}

/// Seam through which pages issue commands without touching the store.
pub trait Dispatch {
    fn dispatch(&mut self, command: Command);
}

/// Records dispatched commands until the shell loop drains and runs them.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.commands.drain(..)
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Dispatch for CommandQueue {
    fn dispatch(&mut self, command: Command) {
        self.commands.push(command);
    }
}

/// State transitions produced while running commands.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    FetchStarted,
    FetchFinished(Word),
    FetchFailed(u16),
    Cleared,
}

#[derive(Debug, Default)]
pub struct Store {
    state: LookupState,
}

impl Store {
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::FetchStarted => {
                self.state.word_loading = true;
                self.state.fetching_error = None;
            }
            StoreEvent::FetchFinished(word) => {
                self.state.word_loading = false;
                self.state.fetching_error = None;
                self.state.data_word = word;
            }
            StoreEvent::FetchFailed(code) => {
                self.state.word_loading = false;
                self.state.fetching_error = Some(code);
            }
            StoreEvent::Cleared => {
                self.state = LookupState::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_word(word: &str) -> Word {
        Word {
            word: word.to_owned(),
            ..Word::default()
        }
    }

    #[test]
    fn fetch_started_sets_loading_and_clears_error() {
        let mut store = Store::default();
        store.apply(StoreEvent::FetchFailed(500));
        store.apply(StoreEvent::FetchStarted);
        assert!(store.state().word_loading);
        assert_eq!(store.state().fetching_error, None);
    }

    #[test]
    fn fetch_finished_replaces_the_word() {
        let mut store = Store::default();
        store.apply(StoreEvent::FetchStarted);
        store.apply(StoreEvent::FetchFinished(loaded_word("hello")));
        assert!(!store.state().word_loading);
        assert_eq!(store.state().fetching_error, None);
        assert_eq!(store.state().data_word.word, "hello");
        assert!(store.state().has_word());
    }

    #[test]
    fn fetch_failed_keeps_the_previous_word() {
        let mut store = Store::default();
        store.apply(StoreEvent::FetchFinished(loaded_word("hello")));
        store.apply(StoreEvent::FetchStarted);
        store.apply(StoreEvent::FetchFailed(404));
        assert_eq!(store.state().fetching_error, Some(404));
        assert_eq!(store.state().data_word.word, "hello");
    }

    #[test]
    fn cleared_resets_everything() {
        let mut store = Store::default();
        store.apply(StoreEvent::FetchFinished(loaded_word("hello")));
        store.apply(StoreEvent::FetchFailed(502));
        store.apply(StoreEvent::Cleared);
        assert_eq!(store.state(), &LookupState::default());
        assert!(!store.state().has_word());
    }

    #[test]
    fn command_queue_records_in_order() {
        let mut queue = CommandQueue::default();
        queue.dispatch(Command::FetchWord("hello".to_owned()));
        queue.dispatch(Command::ClearStore);
        let commands = queue.drain().collect::<Vec<Command>>();
        assert_eq!(
            commands,
            vec![Command::FetchWord("hello".to_owned()), Command::ClearStore]
        );
        assert!(queue.is_empty());
    }
}
