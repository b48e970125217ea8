use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::types::{Notification, NotificationKind};
use super::Notifier;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// User-facing notifications, shown until dismissed
#[derive(Clone, Default)]
pub struct Toasts {
    entries: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
    listener: Arc<Mutex<Option<Listener>>>,
}

impl Toasts {
    /// Called whenever a toast is added, so the UI can re-render
    pub fn set_listener(&self, listener: Listener) {
        if let Ok(mut current) = self.listener.lock() {
            *current = Some(listener);
        }
    }

    pub fn current(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn dismiss(&self, id: u64) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|n| n.id != id);
        }
    }
}

impl Notifier for Toasts {
    fn notify(&self, kind: NotificationKind, message: &str) {
        log::info!("[{kind}] {message}");
        match self.entries.lock() {
            Ok(mut entries) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                entries.push(Notification {
                    id,
                    kind,
                    message: message.to_string(),
                });
            }
            Err(e) => {
                log::error!("Could not store notification: {e:?}");
                return;
            }
        }
        let listener = self.listener.lock().ok().and_then(|l| l.clone());
        if let Some(listener) = listener {
            listener()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn notify_and_dismiss() {
        let toasts = Toasts::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let cloned = calls.clone();
        toasts.set_listener(Arc::new(move || {
            cloned.fetch_add(1, Ordering::SeqCst);
        }));

        toasts.notify(NotificationKind::Info, "one");
        toasts.notify(NotificationKind::Error, "two");
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let current = toasts.current();
        assert_eq!(current.len(), 2);
        assert_eq!(current[1].kind, NotificationKind::Error);

        toasts.dismiss(current[0].id);
        let current = toasts.current();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].message, "two");
    }
}
