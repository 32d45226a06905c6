use dictionary::Dictionary;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::content::{return_home, Content};
use crate::result_page::{ResultPage, ResultView};
use crate::store::{Command, CommandQueue, LookupState, Store, StoreEvent};
use crate::utilities::input;
use crate::views::{ErrorMessage, NotFoundPage, Spinner};

mod config;
mod content;
mod result_page;
mod store;
mod utilities;
mod views;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Result(String),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = Config::from_env();
    let dictionary = match config.api_base_url {
        Some(url) => Dictionary::with_base_url(url),
        None => Dictionary::new(),
    };

    let mut store = Store::default();
    let mut page: Option<ResultPage> = None;
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        let Some(command) = command_parts.next() else {
            continue;
        };
        match command {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                break;
            }
            "home" => {
                let mut queue = CommandQueue::default();
                let route = return_home(&mut queue);
                debug!(?route, "leaving the result page");
                run_commands(&dictionary, &mut store, None, &mut queue).await;
                page = None;
            }
            "define" | "find" => {
                let word = command_parts.collect::<Vec<&str>>().join(" ");
                if word.is_empty() {
                    println!("Which word? Try 'define hello'.");
                    continue;
                }
                page = Some(open_result(&dictionary, &mut store, page.take(), &word).await);
            }
            // Anything else is treated as a word to look up.
            first => {
                let word = Some(first)
                    .into_iter()
                    .chain(command_parts)
                    .collect::<Vec<&str>>()
                    .join(" ");
                page = Some(open_result(&dictionary, &mut store, page.take(), &word).await);
            }
        }
    }
    Ok(())
}

/// Navigate to the result page for a word key, mounting it if there is none
/// yet, and run whatever commands the page issued.
async fn open_result(
    dictionary: &Dictionary,
    store: &mut Store,
    page: Option<ResultPage>,
    word_key: &str,
) -> ResultPage {
    let route = Route::Result(word_key.to_owned());
    debug!(?route, "navigating");
    let mut queue = CommandQueue::default();
    let page = match page {
        Some(mut page) => {
            page.navigate(word_key, store.state(), &mut queue);
            page
        }
        None => ResultPage::mount(word_key, store.state(), &mut queue),
    };
    if queue.is_empty() {
        render(&page, store.state());
    } else {
        run_commands(dictionary, store, Some(&page), &mut queue).await;
    }
    page
}

async fn run_commands(
    dictionary: &Dictionary,
    store: &mut Store,
    page: Option<&ResultPage>,
    queue: &mut CommandQueue,
) {
    let commands = queue.drain().collect::<Vec<Command>>();
    for command in commands {
        match command {
            Command::FetchWord(word) => {
                debug!(%word, "fetching definition");
                store.apply(StoreEvent::FetchStarted);
                if let Some(page) = page {
                    render(page, store.state());
                }
                let event = match dictionary.get_definition(&word).await {
                    Ok(word) => StoreEvent::FetchFinished(word),
                    Err(error) => {
                        warn!(%error, "lookup failed");
                        StoreEvent::FetchFailed(error.status_code())
                    }
                };
                store.apply(event);
                if let Some(page) = page {
                    render(page, store.state());
                }
            }
            Command::ClearStore => {
                store.apply(StoreEvent::Cleared);
            }
        }
    }
}

fn render(page: &ResultPage, state: &LookupState) {
    match page.view(state) {
        ResultView::Loading => println!("{}", Spinner),
        ResultView::NotFound => println!("{}", NotFoundPage),
        ResultView::Error => println!("{}", ErrorMessage),
        ResultView::Content(word) => print!("{}", Content::build(word)),
        ResultView::Empty => {}
    }
}
