use std::fmt;

use dictionary::Word;

use crate::store::{Command, Dispatch};
use crate::Route;

/// Pure projection of a looked up [`Word`] into what the result page prints.
/// Building it never touches the network or the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub word: String,
    pub phonetics: Vec<PhoneticLine>,
    pub meanings: Vec<MeaningBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhoneticLine {
    pub text: Option<String>,
    /// Present only when the entry carries a non-empty recording url.
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeaningBlock {
    pub part_of_speech: String,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl Content {
    pub fn build(word: &Word) -> Self {
        let phonetics = word
            .phonetics
            .iter()
            .map(|phonetic| PhoneticLine {
                text: phonetic.text.clone(),
                audio: phonetic.audio_url().map(str::to_owned),
            })
            .collect();
        let meanings = word
            .meanings
            .iter()
            .map(|meaning| {
                // Only the first definition of a meaning is shown. A meaning
                // without definitions still gets its part of speech line.
                let definition = meaning.definitions.first();
                MeaningBlock {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definition: definition
                        .and_then(|definition| definition.definition.clone())
                        .filter(|text| !text.is_empty()),
                    example: definition
                        .and_then(|definition| definition.example.clone())
                        .filter(|text| !text.is_empty()),
                    synonyms: definition
                        .map(|definition| definition.synonyms.clone())
                        .unwrap_or_default(),
                    antonyms: definition
                        .map(|definition| definition.antonyms.clone())
                        .unwrap_or_default(),
                }
            })
            .collect();
        Self {
            word: word.word.clone(),
            phonetics,
            meanings,
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Showing definition for '{}':", self.word)?;
        writeln!(f, "  Phonetics:")?;
        for phonetic in &self.phonetics {
            let text = phonetic.text.as_deref().unwrap_or("");
            match &phonetic.audio {
                Some(audio) => writeln!(f, "    {text} (audio: {audio})")?,
                None => writeln!(f, "    {text}")?,
            }
        }
        writeln!(f, "  Meanings:")?;
        for meaning in &self.meanings {
            writeln!(f, "    {}:", meaning.part_of_speech)?;
            if let Some(definition) = &meaning.definition {
                writeln!(f, "        {definition}")?;
            }
            if let Some(example) = &meaning.example {
                writeln!(f, "          example: {example}")?;
            }
            if !meaning.synonyms.is_empty() {
                writeln!(f, "          synonyms: {}", meaning.synonyms.join(", "))?;
            }
            if !meaning.antonyms.is_empty() {
                writeln!(f, "          antonyms: {}", meaning.antonyms.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Leave the result page: clear the store, then go home. The clear must not
/// be skipped, otherwise the next lookup shows the previous word.
pub fn return_home(dispatch: &mut impl Dispatch) -> Route {
    dispatch.dispatch(Command::ClearStore);
    Route::Home
}
