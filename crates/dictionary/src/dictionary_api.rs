// https://dictionaryapi.dev/ - free, no api key, returns an array of entries
// for a word (one per etymology); only the first entry is used.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{DictionaryError, Phonetic, Word, WordDefinition, WordMeaning};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let res = client
        .get(format!("{base_url}/{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    match res.status() {
        status if status.is_success() => {}
        StatusCode::NOT_FOUND => {
            return Err(DictionaryError::NotFound(word.to_owned()));
        }
        status => {
            return Err(DictionaryError::Status(status.as_u16()));
        }
    }
    let entries = res
        .json::<Vec<ApiWord>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    first_entry(entries).ok_or_else(|| DictionaryError::NotFound(word.to_owned()))
}

fn first_entry(entries: Vec<ApiWord>) -> Option<Word> {
    entries.into_iter().next().map(ApiWord::into_word)
}

#[derive(Deserialize)]
struct ApiWord {
    word: String,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

impl ApiWord {
    fn into_word(self) -> Word {
        Word {
            word: self.word,
            phonetics: self
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            meanings: self
                .meanings
                .into_iter()
                .map(|meaning| WordMeaning {
                    part_of_speech: meaning.part_of_speech,
                    definitions: meaning
                        .definitions
                        .into_iter()
                        .map(|definition| WordDefinition {
                            definition: definition.definition,
                            example: definition.example,
                            synonyms: definition.synonyms,
                            antonyms: definition.antonyms,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_ENTRY: &str = r#"[{
        "word": "hello",
        "phonetic": "/həˈləʊ/",
        "phonetics": [
            {"text": "/həˈləʊ/", "audio": ""},
            {"text": "/hɛˈləʊ/", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3"},
            {}
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [
                    {
                        "definition": "\"Hello!\" or an equivalent greeting.",
                        "synonyms": ["greeting"],
                        "antonyms": []
                    }
                ]
            },
            {
                "partOfSpeech": "interjection",
                "definitions": [
                    {
                        "definition": "A greeting used when answering the telephone.",
                        "example": "Hello? How may I help you?",
                        "synonyms": [],
                        "antonyms": ["bye", "goodbye"]
                    }
                ]
            }
        ],
        "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
    }]"#;

    #[test]
    fn decodes_an_api_entry() {
        let entries: Vec<ApiWord> = serde_json::from_str(HELLO_ENTRY).unwrap();
        let word = first_entry(entries).unwrap();
        assert_eq!(word.word, "hello");
        assert_eq!(word.phonetics.len(), 3);
        assert_eq!(word.phonetics[0].text.as_deref(), Some("/həˈləʊ/"));
        assert_eq!(word.phonetics[0].audio_url(), None);
        assert!(word.phonetics[1]
            .audio_url()
            .is_some_and(|audio| audio.ends_with("hello-uk.mp3")));
        assert_eq!(word.phonetics[2], Phonetic::default());
        assert_eq!(word.meanings.len(), 2);
        assert_eq!(word.meanings[0].part_of_speech, "noun");
        assert_eq!(
            word.meanings[0].definitions[0].synonyms,
            vec!["greeting".to_owned()]
        );
        assert_eq!(
            word.meanings[1].definitions[0].example.as_deref(),
            Some("Hello? How may I help you?")
        );
        assert_eq!(
            word.meanings[1].definitions[0].antonyms,
            vec!["bye".to_owned(), "goodbye".to_owned()]
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let entries: Vec<ApiWord> =
            serde_json::from_str(r#"[{"word": "terse", "meanings": [{"partOfSpeech": "adjective"}]}]"#)
                .unwrap();
        let word = first_entry(entries).unwrap();
        assert!(word.phonetics.is_empty());
        assert_eq!(word.meanings[0].part_of_speech, "adjective");
        assert!(word.meanings[0].definitions.is_empty());
    }

    #[test]
    fn empty_entry_array_is_no_word() {
        assert_eq!(first_entry(Vec::new()), None);
    }
}
