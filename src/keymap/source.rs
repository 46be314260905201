//! Where override text comes from
//!
//! The table never does file I/O itself; it asks a [`BindingSource`] for the
//! raw override text and parses whatever comes back.

use std::path::PathBuf;

use crate::platform::PlatformError;

/// Supplier of user override text
pub trait BindingSource {
    /// Raw override text, or `None` when there are no overrides
    fn read_overrides(&self) -> Result<Option<String>, PlatformError>;

    /// Short human-readable description for log lines
    fn describe(&self) -> String;
}

/// Overrides read from a file on disk; a missing file means no overrides
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl BindingSource for FileSource {
    fn read_overrides(&self) -> Result<Option<String>, PlatformError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlatformError::Io {
                context: format!("reading {}", self.path.display()),
                source: e,
            }),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory overrides, used by tests and the CLI
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: Option<String>,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A source with no overrides at all
    pub fn empty() -> Self {
        Self { text: None }
    }

    /// Replace the text returned by the next read
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}

impl BindingSource for StaticSource {
    fn read_overrides(&self) -> Result<Option<String>, PlatformError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_no_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("bindings"));
        assert_eq!(source.read_overrides().unwrap(), None);
    }

    #[test]
    fn test_file_source_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindings");
        std::fs::write(&path, "h right\n").unwrap();
        let source = FileSource::new(&path);
        assert_eq!(source.read_overrides().unwrap().as_deref(), Some("h right\n"));
    }

    #[test]
    fn test_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(source.read_overrides().is_err());
    }

    #[test]
    fn test_static_source() {
        assert_eq!(StaticSource::empty().read_overrides().unwrap(), None);
        let mut source = StaticSource::new("q end");
        source.set("q quit");
        assert_eq!(source.read_overrides().unwrap().as_deref(), Some("q quit"));
    }
}
