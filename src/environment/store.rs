use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use super::types::{AppEvent, PostRecord, SessionUser, StoreAction};
use super::{Session, Store};

pub type Subscriber = Arc<dyn Fn(AppEvent) + Send + Sync>;

#[derive(Default, Debug)]
struct StoreState {
    /// Newest first
    posts: Vec<PostRecord>,
    /// The currently loaded listing page
    page: Vec<PostRecord>,
    current_page: usize,
    number_of_pages: usize,
    last_id: u64,
    edit_post: Option<PostRecord>,
    loading: bool,
    user: Option<SessionUser>,
    token_expires: Option<DateTime<Utc>>,
}

/// In-memory store holding the posts listing, the edit target, the loading
/// flag and the signed-in user. Every change is broadcast to subscribers as
/// an `AppEvent`.
#[derive(Clone)]
pub struct AppStore {
    state: Arc<Mutex<StoreState>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    page_size: usize,
}

impl AppStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: Default::default(),
            subscribers: Default::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn subscribe(&self, subscriber: Subscriber) {
        match self.subscribers.lock() {
            Ok(mut subscribers) => subscribers.push(subscriber),
            Err(e) => log::error!("Could not subscribe to store: {e:?}"),
        }
    }

    pub fn sign_in(&self, user: SessionUser, token_expires: DateTime<Utc>) {
        let changed = self.mutate(|state| {
            state.user = Some(user.clone());
            state.token_expires = Some(token_expires);
            vec![AppEvent::UserChanged(Some(user))]
        });
        self.emit(changed);
    }

    /// The currently loaded listing page
    pub fn posts(&self) -> Vec<PostRecord> {
        self.read(|state| state.page.clone()).unwrap_or_default()
    }

    pub fn all_posts(&self) -> Vec<PostRecord> {
        self.read(|state| state.posts.clone()).unwrap_or_default()
    }

    /// `(current, total)`, both 1-based
    pub fn pagination(&self) -> (usize, usize) {
        self.read(|state| (state.current_page, state.number_of_pages))
            .unwrap_or((1, 1))
    }

    fn read<T>(&self, action: impl FnOnce(&StoreState) -> T) -> Result<T, String> {
        let state = self
            .state
            .lock()
            .map_err(|e| format!("Store Data Error: {e:?}"))?;
        Ok(action(&state))
    }

    fn mutate(&self, action: impl FnOnce(&mut StoreState) -> Vec<AppEvent>) -> Vec<AppEvent> {
        match self.state.lock() {
            Ok(mut state) => action(&mut state),
            Err(e) => {
                log::error!("Store Data Error: {e:?}");
                Vec::new()
            }
        }
    }

    /// Called without holding the state lock so subscribers may read the store
    fn emit(&self, events: Vec<AppEvent>) {
        if events.is_empty() {
            return;
        }
        let subscribers = match self.subscribers.lock() {
            Ok(subscribers) => subscribers.clone(),
            Err(e) => {
                log::error!("Could not read store subscribers: {e:?}");
                return;
            }
        };
        for event in events {
            for subscriber in subscribers.iter() {
                subscriber(event.clone());
            }
        }
    }

    fn apply(&self, state: &mut StoreState, action: StoreAction) -> Vec<AppEvent> {
        match action {
            StoreAction::CreatePost(post) => {
                state.last_id += 1;
                let record = post.into_record(state.last_id.to_string());
                state.posts.insert(0, record);
                Vec::new()
            }
            StoreAction::UpdatePost { post, id } => {
                match state.posts.iter_mut().find(|p| p.id == id) {
                    Some(existing) => *existing = post.into_record(id),
                    None => log::warn!("Update for unknown post {id}"),
                }
                Vec::new()
            }
            StoreAction::GetPosts(page) => {
                let total = state.posts.len().div_ceil(self.page_size).max(1);
                let page = page.clamp(1, total);
                state.page = state
                    .posts
                    .iter()
                    .skip((page - 1) * self.page_size)
                    .take(self.page_size)
                    .cloned()
                    .collect();
                state.current_page = page;
                state.number_of_pages = total;
                vec![AppEvent::PostsRefreshed(page)]
            }
            StoreAction::SetLoading(loading) => {
                state.loading = loading;
                vec![AppEvent::LoadingChanged(loading)]
            }
            StoreAction::SetEditPost(post) => {
                state.edit_post = post.clone();
                vec![AppEvent::EditTargetChanged(post)]
            }
            StoreAction::LogUserOut => {
                state.user = None;
                state.token_expires = None;
                vec![AppEvent::UserChanged(None)]
            }
        }
    }
}

impl Store for AppStore {
    fn dispatch(&self, action: StoreAction) {
        log::debug!("dispatch {action:?}");
        let events = self.mutate(|state| self.apply(state, action));
        self.emit(events);
    }

    fn edit_post(&self) -> Option<PostRecord> {
        self.read(|state| state.edit_post.clone()).ok().flatten()
    }

    fn loading(&self) -> bool {
        self.read(|state| state.loading).unwrap_or_default()
    }
}

impl Session for AppStore {
    fn user(&self) -> Option<SessionUser> {
        self.read(|state| state.user.clone()).ok().flatten()
    }

    fn is_token_valid(&self) -> bool {
        self.read(|state| {
            state
                .token_expires
                .map(|expires| Utc::now() < expires)
                .unwrap_or_default()
        })
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::OutgoingPost;
    use chrono::Duration;

    fn post(title: &str) -> OutgoingPost {
        OutgoingPost {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn recorded(store: &AppStore) -> Arc<Mutex<Vec<AppEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let cloned = events.clone();
        store.subscribe(Arc::new(move |event| cloned.lock().unwrap().push(event)));
        events
    }

    #[test]
    fn create_then_refresh_shows_newest_first() {
        let store = AppStore::new(8);
        store.dispatch(StoreAction::CreatePost(post("first")));
        store.dispatch(StoreAction::CreatePost(post("second")));
        assert!(store.posts().is_empty());

        store.dispatch(StoreAction::GetPosts(1));
        let titles: Vec<_> = store.posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(store.posts()[0].id, "2");
    }

    #[test]
    fn update_replaces_by_id() {
        let store = AppStore::new(8);
        store.dispatch(StoreAction::CreatePost(post("old")));
        store.dispatch(StoreAction::UpdatePost {
            post: post("new"),
            id: "1".to_string(),
        });
        store.dispatch(StoreAction::UpdatePost {
            post: post("ghost"),
            id: "99".to_string(),
        });
        let all = store.all_posts();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "new");
        assert_eq!(all[0].id, "1");
    }

    #[test]
    fn pages_are_clamped() {
        let store = AppStore::new(2);
        for i in 0..5 {
            store.dispatch(StoreAction::CreatePost(post(&i.to_string())));
        }
        store.dispatch(StoreAction::GetPosts(3));
        assert_eq!(store.pagination(), (3, 3));
        assert_eq!(store.posts().len(), 1);

        store.dispatch(StoreAction::GetPosts(10));
        assert_eq!(store.pagination(), (3, 3));

        store.dispatch(StoreAction::GetPosts(0));
        assert_eq!(store.pagination(), (1, 3));
        assert_eq!(store.posts().len(), 2);
    }

    #[test]
    fn token_validity_follows_expiry() {
        let store = AppStore::new(8);
        assert!(!store.is_token_valid());
        assert!(store.user().is_none());

        store.sign_in(SessionUser::new("u1", "N"), Utc::now() + Duration::hours(1));
        assert!(store.is_token_valid());

        store.sign_in(SessionUser::new("u1", "N"), Utc::now() - Duration::seconds(1));
        assert!(!store.is_token_valid());
        assert!(store.user().is_some());

        store.dispatch(StoreAction::LogUserOut);
        assert!(store.user().is_none());
        assert!(!store.is_token_valid());
    }

    #[test]
    fn subscribers_see_changes() {
        let store = AppStore::new(8);
        let events = recorded(&store);
        let record = PostRecord {
            id: "7".to_string(),
            ..Default::default()
        };

        store.dispatch(StoreAction::SetLoading(true));
        store.dispatch(StoreAction::SetEditPost(Some(record.clone())));
        store.dispatch(StoreAction::CreatePost(post("quiet")));
        store.dispatch(StoreAction::GetPosts(1));
        store.dispatch(StoreAction::LogUserOut);

        assert!(store.loading());
        assert_eq!(store.edit_post(), Some(record.clone()));
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                AppEvent::LoadingChanged(true),
                AppEvent::EditTargetChanged(Some(record)),
                AppEvent::PostsRefreshed(1),
                AppEvent::UserChanged(None),
            ]
        );
    }

    #[test]
    fn subscribers_may_read_the_store() {
        let store = AppStore::new(8);
        let seen = Arc::new(Mutex::new(None));
        let (cloned_store, cloned_seen) = (store.clone(), seen.clone());
        store.subscribe(Arc::new(move |_| {
            *cloned_seen.lock().unwrap() = Some(cloned_store.loading());
        }));
        store.dispatch(StoreAction::SetLoading(true));
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }
}
