//! Document source - discovers text files below a root directory and reads them

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    config::DEFAULT_EXTENSIONS,
    document::Document,
    error::{Result, SimilarityError},
};

/// Where documents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Directory walked recursively
    pub root: PathBuf,
    /// Extensions to include, without the leading dot, matched case-insensitively
    pub extensions: Vec<String>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl SourceConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|want| want.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

/// Recursively collect every matching file below the root, sorted by path.
/// Entries that cannot be visited are logged and skipped.
pub fn collect_paths(config: &SourceConfig) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(SimilarityError::SourceNotFound(config.root.clone()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(&config.root).follow_links(config.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            // the root itself
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && config.matches(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    debug!("[source] {} files match under {}", paths.len(), config.root.display());
    Ok(paths)
}

/// Read every matching file as a `Document` whose identifier is its path.
/// Files that cannot be read as UTF-8 text are logged and omitted.
pub fn read_documents(config: &SourceConfig) -> Result<Vec<Document>> {
    let paths = collect_paths(config)?;
    let total = paths.len();

    let documents: Vec<Document> = paths
        .into_iter()
        .filter_map(|path| match fs::read_to_string(&path) {
            Ok(text) => Some(Document::new(path.to_string_lossy(), text)),
            Err(e) => {
                warn!("omitting {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    info!(
        "[stage] loaded {} documents ({} omitted) from {}",
        documents.len(),
        total - documents.len(),
        config.root.display()
    );
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_normalized() {
        let config = SourceConfig::new(".").with_extensions([".MD", "txt", ""]);
        assert_eq!(config.extensions, vec!["md", "txt"]);
        assert!(config.matches(Path::new("a/b/Note.Md")));
        assert!(config.matches(Path::new("x.txt")));
        assert!(!config.matches(Path::new("x.rs")));
        assert!(!config.matches(Path::new("md")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let config = SourceConfig::new("/definitely/not/here/note-similarity");
        assert!(matches!(
            collect_paths(&config),
            Err(SimilarityError::SourceNotFound(_))
        ));
    }
}
