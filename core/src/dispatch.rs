//! Upload dispatch: one independent transfer per selected file.
//!
//! The dispatcher is generic over where progress is recorded
//! ([`ProgressSink`]) and how bytes are moved ([`UploadTransport`]), so the
//! browser wiring and the tests share the same control flow.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClientResult;
use crate::store::ProgressStore;
use crate::task::{TaskKey, UploadEvent};

/// A file picked by the user, with its platform handle.
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }
}

/// Destination of upload lifecycle events.
///
/// Cloned into every transfer's callbacks.
pub trait ProgressSink: Clone + 'static {
    /// Track a new file. `None` when the sink is gone.
    fn begin(&self, name: &str, size: u64) -> Option<TaskKey>;

    /// Record an event for a tracked file.
    fn apply(&self, key: &TaskKey, event: UploadEvent);
}

impl ProgressSink for Rc<RefCell<ProgressStore>> {
    fn begin(&self, name: &str, size: u64) -> Option<TaskKey> {
        Some(self.borrow_mut().begin(name, size))
    }

    fn apply(&self, key: &TaskKey, event: UploadEvent) {
        self.borrow_mut().apply(key, event);
    }
}

/// Moves one file to the server, reporting into a sink.
pub trait UploadTransport {
    type File;

    /// Begin the transfer. Events arrive later through `sink`.
    ///
    /// An `Err` means the request could not be issued at all.
    fn start<S: ProgressSink>(&self, key: TaskKey, file: Self::File, sink: S) -> ClientResult<()>;
}

/// Register every file in `sink` and start exactly one transfer for each.
///
/// Returns the keys in selection order. An empty selection does nothing.
pub fn dispatch<T, S>(transport: &T, sink: &S, files: Vec<SelectedFile<T::File>>) -> Vec<TaskKey>
where
    T: UploadTransport,
    S: ProgressSink,
{
    if files.is_empty() {
        return Vec::new();
    }

    log::info!("📤 Uploading {} file(s)", files.len());

    let mut keys = Vec::with_capacity(files.len());
    for file in files {
        let Some(key) = sink.begin(&file.name, file.size) else {
            log::warn!("Progress store gone, dropping upload of {}", file.name);
            continue;
        };

        log::info!("Starting upload of {} ({} bytes) as {}", file.name, file.size, key);
        match transport.start(key.clone(), file.handle, sink.clone()) {
            Ok(()) => sink.apply(&key, UploadEvent::Started),
            Err(e) => {
                log::warn!("Could not start upload of {}: {}", file.name, e);
                sink.apply(&key, UploadEvent::TransportFailed);
            }
        }
        keys.push(key);
    }
    keys
}

/// Map a browser progress event onto a lifecycle event.
pub fn progress_event(length_computable: bool, loaded: f64, total: f64) -> UploadEvent {
    let loaded = loaded.max(0.0) as u64;
    let total = if length_computable && total > 0.0 {
        Some(total as u64)
    } else {
        None
    };
    UploadEvent::Progress { loaded, total }
}
