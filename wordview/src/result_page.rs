use dictionary::Word;

use crate::store::{Command, Dispatch, LookupState};

/// The page shown for a looked up word. It never mutates the store itself;
/// it reads snapshots and requests fetches through [`Dispatch`].
#[derive(Debug)]
pub struct ResultPage {
    word_key: String,
}

/// What the result page shows for a given state snapshot, first match wins:
/// loading, then a 404, then any other error, then the loaded word.
#[derive(Debug, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    NotFound,
    Error,
    Content(&'a Word),
    Empty,
}

impl ResultPage {
    pub fn mount(
        word_key: &str,
        state: &LookupState,
        dispatch: &mut impl Dispatch,
    ) -> Self {
        let page = Self {
            word_key: word_key.to_owned(),
        };
        page.request_missing_word(state, dispatch);
        page
    }

    /// Point the page at another word key. A key that did not change issues
    /// nothing.
    pub fn navigate(
        &mut self,
        word_key: &str,
        state: &LookupState,
        dispatch: &mut impl Dispatch,
    ) {
        if self.word_key == word_key {
            return;
        }
        self.word_key = word_key.to_owned();
        self.request_missing_word(state, dispatch);
    }

    // The guard only asks whether *any* word is loaded, not whether it is the
    // one this page points at; a stale result suppresses the refetch until
    // the store is cleared. Matches the store holding a single result.
    fn request_missing_word(&self, state: &LookupState, dispatch: &mut impl Dispatch) {
        if !state.has_word() {
            dispatch.dispatch(Command::FetchWord(self.word_key.clone()));
        }
    }

    pub fn view<'a>(&self, state: &'a LookupState) -> ResultView<'a> {
        if state.word_loading {
            return ResultView::Loading;
        }
        match state.fetching_error {
            Some(404) => return ResultView::NotFound,
            Some(_) => return ResultView::Error,
            None => {}
        }
        if state.has_word() {
            ResultView::Content(&state.data_word)
        } else {
            ResultView::Empty
        }
    }
}
