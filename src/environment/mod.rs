pub mod platform;
pub mod router;
pub mod storage;
pub mod store;
pub mod toasts;
pub mod types;

use std::sync::Arc;

use navicula::types::EnvironmentType;

pub use router::Router;
pub use storage::FormConfig;
pub use store::AppStore;
pub use toasts::Toasts;

use types::{NotificationKind, PostRecord, SessionUser, StoreAction};

/// Who is signed in, and whether their token is still good
pub trait Session {
    fn user(&self) -> Option<SessionUser>;
    fn is_token_valid(&self) -> bool;
}

/// The centralized client-side store. Dispatching is fire-and-forget.
pub trait Store {
    fn dispatch(&self, action: StoreAction);
    fn edit_post(&self) -> Option<PostRecord>;
    fn loading(&self) -> bool;
}

pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone)]
pub struct Environment {
    pub session: Arc<dyn Session>,
    pub store: Arc<dyn Store>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub config: FormConfig,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("config", &self.config)
            .finish()
    }
}

impl Environment {
    /// Wire the in-process collaborators together. The store serves as
    /// session provider, too.
    pub fn new(store: AppStore, toasts: Toasts, router: Router, config: FormConfig) -> Self {
        let store = Arc::new(store);
        Self {
            session: store.clone(),
            store,
            notifier: Arc::new(toasts),
            navigator: Arc::new(router),
            config,
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: &str) {
        self.notifier.notify(kind, message)
    }
}
