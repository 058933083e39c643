use crate::config::DEFAULT_PROFILE_HOST;

/// Turns a raw handle or profile URL into the account identifier used for
/// lookups. An empty result means there is nothing to analyze.
#[derive(Debug, Clone)]
pub struct IdentifierExtractor {
    host: String,
}

impl IdentifierExtractor {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn extract(&self, raw: &str) -> String {
        let input = raw.trim();
        if input.is_empty() {
            return String::new();
        }

        match input.find(&self.host) {
            Some(pos) => {
                let rest = &input[pos + self.host.len()..];
                // Only "<host>/<segment>" names an account
                rest.strip_prefix('/')
                    .and_then(|path| path.split(['/', '?', '#']).next())
                    .unwrap_or_default()
                    .to_string()
            }
            None => input.to_string(),
        }
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_HOST)
    }
}

/// Whether `identifier` can be used as a single URL path segment.
pub fn is_account_segment(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '?', '#', '\\'])
}

pub fn extract_identifier(raw: &str) -> String {
    IdentifierExtractor::default().extract(raw)
}
