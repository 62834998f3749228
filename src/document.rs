use std::path::Path;

/// A single input document: an identifier and its raw text.
/// The identifier is opaque to the pipeline (usually a file path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Human-facing short identifier used as the similarity matrix key
    #[inline]
    pub fn label(&self) -> &str {
        label_of(&self.id)
    }
}

/// Base file name of an identifier, or the identifier itself when it has
/// no file name component (e.g. `".."`, `""`).
pub fn label_of(id: &str) -> &str {
    Path::new(id)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_base_file_name() {
        let doc = Document::new("vault/daily/2024-01-01.md", "text");
        assert_eq!(doc.label(), "2024-01-01.md");
        assert_eq!(label_of("A.md"), "A.md");
    }

    #[test]
    fn label_falls_back_to_identifier() {
        assert_eq!(label_of(""), "");
        assert_eq!(label_of(".."), "..");
    }
}
