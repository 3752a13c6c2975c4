use std::sync::{Arc, Mutex};

/// Cross-cutting notifications published by pipelines for decoupled UI
/// listeners (toasts and the like).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Submission {
        submission: bool,
        auto_dismiss: bool,
        message: String,
    },
}

/// Small fan-out pub/sub channel. Subscribers that dropped their receiver are
/// pruned on the next publish.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<flume::Sender<AppEvent>>>>,
}

impl EventBus {
    pub fn subscribe(&self) -> flume::Receiver<AppEvent> {
        let (tx, rx) = flume::unbounded();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    pub fn publish(&self, event: AppEvent) {
        log::trace!("publish {event:?}");
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }
}
