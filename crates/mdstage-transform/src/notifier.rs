//! Change notification channel for watch infrastructure.

use std::path::Path;
use std::sync::Mutex;

type UpdateCallback = Box<dyn Fn(&Path) + Send>;

/// Publish channel for metadata-change notifications.
///
/// Watch infrastructure subscribes to learn when a file's metadata changed
/// in a way its rendered output does not reflect, and reacts by forcing a
/// full reload of that file.
///
/// One instance is expected to live for the whole process and be shared (via
/// `Arc`) by every transformer; it is an explicit constructor argument rather
/// than a hidden global so tests can run against isolated instances.
/// Publishing is synchronous and fire-and-forget: subscribers run in
/// registration order before [`notify_update`](Self::notify_update) returns,
/// and there is no acknowledgment or queueing.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Mutex<Vec<UpdateCallback>>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for `update` events.
    ///
    /// Subscribers are never removed; they live as long as the notifier.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Path) + Send + 'static,
    {
        self.subscribers.lock().unwrap().push(Box::new(callback));
    }

    /// Publish an `update` event carrying the changed file's identity.
    pub fn notify_update(&self, file: &Path) {
        tracing::debug!(file = %file.display(), "publishing update event");
        for subscriber in self.subscribers.lock().unwrap().iter() {
            subscriber(file);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.subscribers.lock().map(|s| s.len()).unwrap_or(0);
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_notify_without_subscribers_is_noop() {
        let notifier = ChangeNotifier::new();
        notifier.notify_update(Path::new("/docs/guide.md"));
    }

    #[test]
    fn test_subscriber_receives_file_identity() {
        let notifier = ChangeNotifier::new();
        let received = Arc::new(Mutex::new(Vec::<PathBuf>::new()));

        let sink = Arc::clone(&received);
        notifier.subscribe(move |file| sink.lock().unwrap().push(file.to_path_buf()));

        notifier.notify_update(Path::new("/docs/guide.md"));

        assert_eq!(
            *received.lock().unwrap(),
            vec![PathBuf::from("/docs/guide.md")],
        );
    }

    #[test]
    fn test_subscribers_invoked_in_registration_order() {
        let notifier = ChangeNotifier::new();
        let order = Arc::new(Mutex::new(Vec::<u8>::new()));

        for id in 0..3 {
            let sink = Arc::clone(&order);
            notifier.subscribe(move |_| sink.lock().unwrap().push(id));
        }

        notifier.notify_update(Path::new("/docs/guide.md"));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_every_publish_reaches_all_subscribers() {
        let notifier = ChangeNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let count = Arc::clone(&count);
            notifier.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        notifier.notify_update(Path::new("/a.md"));
        notifier.notify_update(Path::new("/b.md"));
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }
}
