//! Reporter that records events instead of printing them.

use confsync_core::{FailureKind, Reporter, SyncReport, Warning};

/// One event delivered to [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Warn(Warning),
    Success(SyncReport),
    Fail { kind: FailureKind, message: String },
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<&Warning> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Warn(warning) => Some(warning),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<FailureKind> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Fail { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn succeeded(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, ReportEvent::Success(_)))
    }
}

impl Reporter for RecordingReporter {
    fn on_warn(&mut self, warning: &Warning) {
        self.events.push(ReportEvent::Warn(warning.clone()));
    }

    fn on_success(&mut self, report: &SyncReport) {
        self.events.push(ReportEvent::Success(report.clone()));
    }

    fn on_fail(&mut self, error: &confsync_core::Error) {
        self.events.push(ReportEvent::Fail {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}
