use reqwest::Url;
use tracing::debug;

/// Query-string view of the current location.
///
/// Writes replace the current entry in place; they never trigger navigation
/// or a reload.
pub trait LocationStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Location backed by an in-memory URL
#[derive(Debug, Clone, PartialEq)]
pub struct UrlLocation {
    url: Url,
    /// Number of in-place writes, for observing that no navigation happened
    replacements: usize,
}

impl UrlLocation {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            replacements: 0,
        }
    }

    pub fn parse(url: &str) -> Result<Self, String> {
        Url::parse(url)
            .map(Self::new)
            .map_err(|e| format!("Invalid location '{}': {}", url, e))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl LocationStore for UrlLocation {
    fn get(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self.url.query_pairs().into_owned().collect();

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
        // Collapse repeated occurrences of the key
        let mut seen = false;
        pairs.retain(|(k, _)| {
            if k != key {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });

        self.url.query_pairs_mut().clear().extend_pairs(pairs);
        self.replacements += 1;
        debug!("Location replaced: {}", self.url);
    }
}
