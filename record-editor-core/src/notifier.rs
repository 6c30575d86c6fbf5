//! Change notification from edit forms to the lists that opened them

use std::sync::Arc;

use async_trait::async_trait;

/// Reacts to a successful commit made in a form.
#[async_trait]
pub trait DataChangeListener: Send + Sync {
    async fn on_data_changed(&self);
}

/// Ordered listener registry owned by one form.
///
/// Listeners are only appended while the dialog is open and are called in
/// subscription order on broadcast.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Arc<dyn DataChangeListener>>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. `None` is ignored, and so is a listener that is already registered.
    pub fn subscribe(&mut self, listener: Option<Arc<dyn DataChangeListener>>) {
        let Some(listener) = listener else {
            return;
        };
        if self
            .listeners
            .iter()
            .any(|l| std::ptr::addr_eq(Arc::as_ptr(l), Arc::as_ptr(&listener)))
        {
            log::debug!("Listener already subscribed, skipping");
            return;
        }
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every listener once, in subscription order.
    pub async fn broadcast(&self) {
        log::debug!("Broadcasting data change to {} listener(s)", self.listeners.len());
        for listener in &self.listeners {
            listener.on_data_changed().await;
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingListener;

    #[tokio::test]
    async fn broadcast_runs_in_subscription_order() {
        let log = RecordingListener::shared_log();
        let first = Arc::new(RecordingListener::new("first", &log));
        let second = Arc::new(RecordingListener::new("second", &log));

        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(Some(first));
        notifier.subscribe(Some(second));
        notifier.broadcast().await;

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn ignores_absent_and_duplicate_listeners() {
        let log = RecordingListener::shared_log();
        let listener: Arc<dyn DataChangeListener> =
            Arc::new(RecordingListener::new("only", &log));

        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(None);
        notifier.subscribe(Some(Arc::clone(&listener)));
        notifier.subscribe(Some(listener));
        assert_eq!(notifier.len(), 1);

        notifier.broadcast().await;
        assert_eq!(*log.lock().unwrap(), vec!["only"]);
    }

    #[tokio::test]
    async fn empty_broadcast_is_noop() {
        let notifier = ChangeNotifier::new();
        assert!(notifier.is_empty());
        notifier.broadcast().await;
    }
}
