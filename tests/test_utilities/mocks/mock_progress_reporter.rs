use dependency_license_report::prelude::*;
use std::sync::{Arc, Mutex};

/// One call made against the reporter, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        detail: Option<String>,
    },
    Warning(String),
    Completion(String),
}

impl ReportedEvent {
    /// Single-line rendering used by assertions, e.g. `Progress: 1/2 - runtime: g:n:v`
    pub fn render(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Progress {
                current,
                total,
                detail: Some(detail),
            } => format!("Progress: {}/{} - {}", current, total, detail),
            Self::Progress { current, total, .. } => format!("Progress: {}/{}", current, total),
            Self::Warning(message) => format!("Error: {}", message),
            Self::Completion(message) => format!("Completed: {}", message),
        }
    }
}

/// Records everything the use case reports; clones share one event log so
/// a test can hand a clone to the use case and inspect the original.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// All events rendered with [`ReportedEvent::render`]
    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(ReportedEvent::render).collect()
    }

    /// Text of every warning or error, without the prefix
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ReportedEvent::Progress {
            current,
            total,
            detail: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ReportedEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ReportedEvent::Completion(message.to_string()));
    }
}
