//! Bindings file watching
//!
//! Uses the `notify` crate with debouncing to detect edits to the bindings
//! file and post [`Msg::BindingsChanged`] to the runtime.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEventKind, Debouncer};

use crate::messages::Msg;

/// Watches the directory holding the bindings file
///
/// Editors often save by replacing the file, so the parent directory is
/// watched and events are filtered by file name.
pub struct BindingsWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    path: PathBuf,
}

impl BindingsWatcher {
    /// Start watching `path`, posting to `tx` on every debounced change
    pub fn new(path: PathBuf, tx: Sender<Msg>) -> Result<Self, notify::Error> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name: Option<OsString> = path.file_name().map(ToOwned::to_owned);

        let mut debouncer = new_debouncer(
            Duration::from_millis(300),
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let touched = events.iter().any(|event| {
                        !matches!(event.kind, DebouncedEventKind::AnyContinuous)
                            && event.path.file_name() == file_name.as_deref()
                    });
                    if touched && tx.send(Msg::BindingsChanged).is_err() {
                        tracing::debug!("Runtime gone, dropping bindings change");
                    }
                }
                Err(e) => {
                    tracing::warn!("Bindings watcher error: {:?}", e);
                }
            },
        )?;

        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching bindings file: {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            path,
        })
    }

    /// The bindings file being watched
    pub fn path(&self) -> &Path {
        &self.path
    }
}
