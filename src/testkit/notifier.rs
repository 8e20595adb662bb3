//! Notifier that records events for assertions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::outbound::notifier::{Event, Notifier};

/// Thread-safe event collector. Clones share the same event list, so one
/// clone can be registered while another is kept for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Event kinds in emission order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(Event::kind).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
