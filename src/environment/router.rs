use std::sync::{Arc, Mutex};

use super::store::Subscriber;
use super::types::AppEvent;
use super::Navigator;

/// Keeps the current location. Rendering is up to the shell.
#[derive(Clone)]
pub struct Router {
    path: Arc<Mutex<String>>,
    subscriber: Arc<Mutex<Option<Subscriber>>>,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: Arc::new(Mutex::new(initial.into())),
            subscriber: Default::default(),
        }
    }

    pub fn set_subscriber(&self, subscriber: Subscriber) {
        if let Ok(mut current) = self.subscriber.lock() {
            *current = Some(subscriber);
        }
    }

    pub fn current(&self) -> String {
        self.path
            .lock()
            .map(|path| path.clone())
            .unwrap_or_default()
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        log::debug!("navigate to {path}");
        match self.path.lock() {
            Ok(mut current) => *current = path.to_string(),
            Err(e) => {
                log::error!("Could not navigate: {e:?}");
                return;
            }
        }
        let subscriber = self.subscriber.lock().ok().and_then(|s| s.clone());
        if let Some(subscriber) = subscriber {
            subscriber(AppEvent::Navigated(path.to_string()))
        }
    }
}
