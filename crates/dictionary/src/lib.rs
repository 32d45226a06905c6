use dictionary_api::{get_definition, DICTIONARY_API_URL};
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary api: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to decode the dictionary api response: {0}")]
    Deserialize(reqwest::Error),
    #[error("no entry found for '{0}'")]
    NotFound(String),
    #[error("the dictionary api returned status {0}")]
    Status(u16),
}

impl DictionaryError {
    /// Http-like status code for this error, 404 only for a missing word.
    pub fn status_code(&self) -> u16 {
        match self {
            DictionaryError::NotFound(_) => 404,
            DictionaryError::Status(code) => *code,
            DictionaryError::Fetch(error) | DictionaryError::Deserialize(error) => error
                .status()
                .map(|status| status.as_u16())
                .unwrap_or(500),
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL.to_owned())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
