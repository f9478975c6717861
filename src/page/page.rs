/// Raw page markup together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub source_url: String,
    pub html: String,
}

impl Page {
    /// Ingest raw bytes into a Page.
    ///
    /// Bytes that are not UTF-8 (legacy single-byte encodings) become U+FFFD;
    /// everything else is kept as-is.
    pub fn ingest(source_url: impl Into<String>, raw_content: &[u8]) -> Self {
        Page {
            source_url: source_url.into(),
            html: String::from_utf8_lossy(raw_content).into_owned(),
        }
    }
}
