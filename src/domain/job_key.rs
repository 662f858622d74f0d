use std::fmt;

/// Opaque identifier correlating an upload with its eventual result.
///
/// Keys are random hex followed by the upload's extension, e.g. `a1b2c3d4e5f6a7b8.wav`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey(String);

impl JobKey {
    pub fn new(random_hex: &str, extension_hint: &str) -> Self {
        Self(format!("{}{}", random_hex, extension_hint))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
