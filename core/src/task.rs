//! Per-file upload state machine.
//!
//! Each selected file becomes an [`UploadTask`]. Its [`UploadState`] moves
//! only in response to [`UploadEvent`]s coming from that file's transfer:
//!
//! ```text
//! Pending ──Started/Progress──▶ InProgress(p) ──Completed(200)──▶ Succeeded
//!    │                              │
//!    └────Completed(!200)/TransportFailed────────────────────────▶ Failed
//! ```
//!
//! Terminal states ignore every further event.

use std::fmt;

/// HTTP status treated as a successful upload.
pub const SUCCESS_STATUS: u16 = 200;

// =============================================================================
// Identity
// =============================================================================

/// Synthetic identifier assigned when a file is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Key under which a task is tracked in the progress store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Unique per selected file.
    Id(TaskId),
    /// Legacy keying by file name; same-named files alias.
    Name(String),
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKey::Id(id) => write!(f, "{}", id),
            TaskKey::Name(name) => write!(f, "name:{}", name),
        }
    }
}

// =============================================================================
// State & Events
// =============================================================================

/// Why an upload ended in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The server answered with a non-200 status.
    Rejected(u16),
    /// No response was received.
    Transport,
}

/// Lifecycle state of one upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadState {
    /// Selected, request not yet sent.
    Pending,
    /// Request sent; `percent` is in `[0, 100]`.
    InProgress { percent: f64 },
    /// Server answered 200.
    Succeeded,
    /// Server rejected the upload or the transfer broke.
    Failed(FailureReason),
}

impl UploadState {
    /// Whether no further transitions can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadState::Succeeded | UploadState::Failed(_))
    }

    /// CSS modifier for rendering.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadState::Pending => "upload-pending",
            UploadState::InProgress { .. } => "upload-in-progress",
            UploadState::Succeeded => "upload-succeeded",
            UploadState::Failed(_) => "upload-failed",
        }
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadState::Pending => write!(f, "Pending"),
            UploadState::InProgress { .. } => write!(f, "Uploading"),
            UploadState::Succeeded => write!(f, "Upload successful"),
            UploadState::Failed(FailureReason::Rejected(status)) => {
                write!(f, "Upload failed: {}", status)
            }
            UploadState::Failed(FailureReason::Transport) => write!(f, "Upload failed"),
        }
    }
}

/// Something that happened to one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    /// The request was handed to the network stack.
    Started,
    /// Bytes sent so far; `total` is `None` when the size is not computable.
    Progress { loaded: u64, total: Option<u64> },
    /// A response arrived with this HTTP status.
    Completed { status: u16 },
    /// The request failed without a response.
    TransportFailed,
}

// =============================================================================
// Upload Task
// =============================================================================

/// One file's upload attempt and its tracked progress.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTask {
    pub key: TaskKey,
    pub name: String,
    /// Size of the selected file in bytes.
    pub size: u64,
    /// Bytes reported sent, never decreasing.
    pub bytes_transferred: u64,
    /// Request body size reported by progress events.
    pub total_bytes: Option<u64>,
    pub state: UploadState,
}

impl UploadTask {
    /// A freshly selected file, not yet sent.
    pub fn new(key: TaskKey, name: impl Into<String>, size: u64) -> Self {
        Self {
            key,
            name: name.into(),
            size,
            bytes_transferred: 0,
            total_bytes: None,
            state: UploadState::Pending,
        }
    }

    /// Apply a lifecycle event. Returns `false` if the event was ignored.
    pub fn apply(&mut self, event: UploadEvent) -> bool {
        if self.state.is_terminal() {
            log::debug!("Ignoring {:?} for finished upload {}", event, self.key);
            return false;
        }

        match event {
            UploadEvent::Started => match self.state {
                UploadState::Pending => {
                    self.state = UploadState::InProgress { percent: 0.0 };
                    true
                }
                _ => false,
            },
            UploadEvent::Progress { loaded, total } => self.record_progress(loaded, total),
            UploadEvent::Completed { status } => {
                self.state = if status == SUCCESS_STATUS {
                    if let Some(total) = self.total_bytes {
                        self.bytes_transferred = total;
                    }
                    UploadState::Succeeded
                } else {
                    UploadState::Failed(FailureReason::Rejected(status))
                };
                true
            }
            UploadEvent::TransportFailed => {
                self.state = UploadState::Failed(FailureReason::Transport);
                true
            }
        }
    }

    fn record_progress(&mut self, loaded: u64, total: Option<u64>) -> bool {
        let total = match total {
            Some(total) if total > 0 => total,
            _ => return false,
        };

        let loaded = loaded.min(total);
        self.total_bytes = Some(total);
        self.bytes_transferred = self.bytes_transferred.max(loaded);

        let percent = percentage(loaded, total);
        let previous = match self.state {
            UploadState::InProgress { percent } => percent,
            _ => 0.0,
        };
        self.state = UploadState::InProgress {
            percent: previous.max(percent),
        };
        true
    }

    /// Percentage shown on the progress bar.
    pub fn percent(&self) -> f64 {
        match self.state {
            UploadState::Pending => 0.0,
            UploadState::InProgress { percent } => percent,
            UploadState::Succeeded => 100.0,
            UploadState::Failed(_) => match self.total_bytes {
                Some(total) => percentage(self.bytes_transferred, total),
                None => 0.0,
            },
        }
    }

    /// Text shown next to the progress bar.
    pub fn status_text(&self) -> String {
        self.state.to_string()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// `loaded / total * 100`, clamped to `[0, 100]`.
fn percentage(loaded: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (loaded as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> UploadTask {
        UploadTask::new(TaskKey::Id(TaskId(0)), "report.pdf", 1000)
    }

    fn progress(loaded: u64, total: u64) -> UploadEvent {
        UploadEvent::Progress {
            loaded,
            total: Some(total),
        }
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = task();
        assert_eq!(task.state, UploadState::Pending);
        assert_eq!(task.percent(), 0.0);
        assert_eq!(task.status_text(), "Pending");
    }

    #[test]
    fn test_success_status_text() {
        let mut task = task();
        task.apply(UploadEvent::Started);
        task.apply(progress(1200, 1200));
        task.apply(UploadEvent::Completed { status: 200 });
        assert_eq!(task.status_text(), "Upload successful");
        assert_eq!(task.percent(), 100.0);
    }

    #[test]
    fn test_rejected_status_text() {
        let mut task = task();
        task.apply(UploadEvent::Started);
        task.apply(UploadEvent::Completed { status: 500 });
        assert_eq!(task.status_text(), "Upload failed: 500");
        assert_eq!(task.state, UploadState::Failed(FailureReason::Rejected(500)));
    }

    #[test]
    fn test_transport_failure_status_text() {
        let mut task = task();
        task.apply(UploadEvent::Started);
        task.apply(progress(300, 1200));
        task.apply(UploadEvent::TransportFailed);
        assert_eq!(task.status_text(), "Upload failed");
        assert_eq!(task.percent(), 25.0);
    }

    #[test]
    fn test_percent_monotonic_and_bounded() {
        let mut task = task();
        task.apply(UploadEvent::Started);

        let mut last = task.percent();
        for (loaded, total) in [(100, 1000), (50, 1000), (700, 1000), (2000, 1000), (900, 1000)] {
            task.apply(progress(loaded, total));
            let now = task.percent();
            assert!(now >= last, "{} dropped below {}", now, last);
            assert!((0.0..=100.0).contains(&now));
            last = now;
        }
        assert_eq!(last, 100.0);
        assert_eq!(task.bytes_transferred, 1000);
    }

    #[test]
    fn test_unknown_total_reports_nothing() {
        let mut task = task();
        task.apply(UploadEvent::Started);
        assert!(!task.apply(UploadEvent::Progress { loaded: 10, total: None }));
        assert!(!task.apply(UploadEvent::Progress { loaded: 10, total: Some(0) }));
        assert_eq!(task.state, UploadState::InProgress { percent: 0.0 });
        assert_eq!(task.total_bytes, None);
    }

    #[test]
    fn test_progress_before_started() {
        let mut task = task();
        task.apply(progress(500, 1000));
        assert_eq!(task.state, UploadState::InProgress { percent: 50.0 });
        // A late Started must not reset progress.
        assert!(!task.apply(UploadEvent::Started));
        assert_eq!(task.percent(), 50.0);
    }

    #[test]
    fn test_terminal_ignores_events() {
        let mut task = task();
        task.apply(UploadEvent::Completed { status: 200 });
        assert!(!task.apply(UploadEvent::TransportFailed));
        assert!(!task.apply(UploadEvent::Completed { status: 500 }));
        assert!(!task.apply(progress(1, 1000)));
        assert_eq!(task.status_text(), "Upload successful");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(TaskKey::Id(TaskId(7)).to_string(), "task-7");
        assert_eq!(TaskKey::Name("a.txt".into()).to_string(), "name:a.txt");
    }
}
