//! Generated-key retrieval requests.

/// How a write statement asks for generated keys to be returned.
///
/// The request is captured at dispatch time and forwarded verbatim to every
/// physical statement, so the backing driver decides what a generated key is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRetrieval {
    /// No generated keys requested.
    None,
    /// Driver-level flag: true to return generated keys, false to skip them.
    Auto(bool),
    /// Return the columns at these 1-based positions as generated keys.
    Indexes(Vec<u32>),
    /// Return the named columns as generated keys.
    Names(Vec<String>),
}

impl KeyRetrieval {
    /// Returns true if the request asks for any keys at all.
    pub fn wants_keys(&self) -> bool {
        match self {
            KeyRetrieval::None => false,
            KeyRetrieval::Auto(enabled) => *enabled,
            KeyRetrieval::Indexes(indexes) => !indexes.is_empty(),
            KeyRetrieval::Names(names) => !names.is_empty(),
        }
    }
}

impl Default for KeyRetrieval {
    fn default() -> Self {
        KeyRetrieval::None
    }
}
