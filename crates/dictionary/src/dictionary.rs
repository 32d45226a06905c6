/// A single dictionary entry as shown to the user.
///
/// The default value (empty `word`) stands for "nothing looked up yet".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    /// Url of a pronunciation recording. The api frequently sends an empty
    /// string here, which means there is no recording.
    pub audio: Option<String>,
}

impl Phonetic {
    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_deref().filter(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<WordDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordDefinition {
    pub definition: Option<String>,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}
