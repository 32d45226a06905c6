use std::env;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Overrides the dictionary api base url, mainly for pointing the app at
    /// a local stub.
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("WORDVIEW_API_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        }
    }
}
