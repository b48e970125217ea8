#![allow(non_snake_case)]

use std::path::{Path, PathBuf};

use chrono::Utc;
use navicula::Effect;

use crate::environment::platform;
use crate::environment::types::{
    AppEvent, NotificationKind, OutgoingPost, PostRecord, SessionUser, StoreAction,
};
use crate::environment::Environment;
use crate::error::FormError;
use crate::loc;

use super::gate::{ensure_session, ensure_user, report};
use super::state::{Draft, Field, Mode};
use super::{PostFormAction, State};

pub type ViewStore<'a> = navicula::ViewStore<'a, super::PostFormReducer>;

/// What a successful submission dispatched
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Submitted {
    Created,
    Updated(String),
}

/// Work the reducer hands to navicula after a step
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Followup {
    PickFile,
    ReadImage(u64, PathBuf),
}

pub fn reduce<'a>(
    _context: &'a impl navicula::types::MessageContext<PostFormAction, PostFormAction, PostFormAction>,
    action: PostFormAction,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, PostFormAction> {
    log::trace!("{action:?}");

    match apply(state, environment, action) {
        None => Effect::NONE,
        Some(Followup::PickFile) => {
            let Some(path) = platform::open_file_dialog("~", &environment.config.image_extensions) else {
                return Effect::NONE
            };
            Effect::action(PostFormAction::ImageSelected(path))
        }
        Some(Followup::ReadImage(generation, path)) => Effect::future(
            async move { platform::read_image_data_url(path).await },
            move |result| PostFormAction::ImageRead(generation, result),
        ),
    }
}

/// Run one action against the state. Failures are reported here.
pub fn apply(
    state: &mut State,
    environment: &Environment,
    action: PostFormAction,
) -> Option<Followup> {
    let result = match action {
        PostFormAction::Mount => match mount(state, environment) {
            Some(target) => hydrate(state, environment, Some(target)),
            None => Ok(()),
        },
        PostFormAction::AppEvent(event) => handle_event(state, environment, event),
        PostFormAction::UpdateField(field, value) => {
            update_field(state, environment, field, value)
        }
        PostFormAction::UpdateTagText(text) => {
            state.tags.pending = text;
            Ok(())
        }
        PostFormAction::AddTag => {
            if state.tags.add_pending() {
                state.tags.merge_into(&mut state.draft);
            }
            Ok(())
        }
        PostFormAction::RemoveTag(index) => {
            if state.tags.remove(index) {
                state.tags.merge_into(&mut state.draft);
            }
            Ok(())
        }
        PostFormAction::FileDialog => return Some(Followup::PickFile),
        PostFormAction::ImageSelected(path) => match begin_image_read(state, environment, &path) {
            Ok(generation) => return Some(Followup::ReadImage(generation, path)),
            Err(e) => Err(e),
        },
        PostFormAction::ImageRead(generation, result) => {
            commit_image(state, generation, result).map(|_| ())
        }
        PostFormAction::Submit => submit(state, environment).map(|_| ()),
        PostFormAction::Clear => {
            clear(state);
            Ok(())
        }
        PostFormAction::Cancel => {
            cancel(state, environment);
            Ok(())
        }
    };
    if let Err(e) = result {
        report(environment, &e);
    }
    None
}

/// Pull the current user, loading flag and edit target from the environment.
/// Returns the edit target, if any, so it can be hydrated.
pub fn mount(state: &mut State, environment: &Environment) -> Option<PostRecord> {
    state.user = environment.session.user();
    state.loading = environment.store.loading();
    environment.store.edit_post()
}

fn handle_event(
    state: &mut State,
    environment: &Environment,
    event: AppEvent,
) -> Result<(), FormError> {
    match event {
        AppEvent::EditTargetChanged(target) => return hydrate(state, environment, target),
        AppEvent::LoadingChanged(loading) => state.loading = loading,
        AppEvent::UserChanged(user) => state.user = user,
        AppEvent::PostsRefreshed(page) => log::debug!("posts page {page} refreshed"),
        AppEvent::Navigated(path) => log::debug!("navigated to {path}"),
    }
    Ok(())
}

/// Follow the edit target. A cleared target empties the form.
pub fn hydrate(
    state: &mut State,
    environment: &Environment,
    target: Option<PostRecord>,
) -> Result<(), FormError> {
    let Some(target) = target else {
        state.mode = Mode::Create;
        state.reset();
        return Ok(());
    };
    ensure_session(environment)?;
    state.mode = Mode::Edit;
    state.draft = Draft::from_record(&target);
    state.tags.set(target.tags);
    state.image_name = None;
    // a read started before hydration must not replace the target's image
    state.image_generation += 1;
    Ok(())
}

pub fn update_field(
    state: &mut State,
    environment: &Environment,
    field: Field,
    value: String,
) -> Result<(), FormError> {
    ensure_session(environment)?;
    match field {
        Field::Title => {
            let limit = environment.config.title_max_length;
            state.draft.title = if value.chars().count() > limit {
                value.chars().take(limit).collect()
            } else {
                value
            };
        }
        Field::Message => state.draft.message = value,
    }
    Ok(())
}

/// Validate a selected file and claim a new read generation for it
pub fn begin_image_read(
    state: &mut State,
    environment: &Environment,
    path: &Path,
) -> Result<u64, FormError> {
    if !platform::is_image(path, &environment.config.image_extensions) {
        return Err(FormError::InvalidImage);
    }
    state.image_generation += 1;
    state.image_name = path
        .file_name()
        .and_then(|e| e.to_str().map(|e| e.to_string()));
    Ok(state.image_generation)
}

/// Store a finished read. Returns whether the image was taken; reads that
/// were superseded are dropped.
pub fn commit_image(
    state: &mut State,
    generation: u64,
    result: Result<String, String>,
) -> Result<bool, FormError> {
    if generation != state.image_generation {
        log::debug!(
            "Dropping image read {generation}, current is {}",
            state.image_generation
        );
        return Ok(false);
    }
    match result {
        Ok(data_url) => {
            state.draft.image = data_url;
            Ok(true)
        }
        Err(e) => {
            state.image_name = None;
            Err(FormError::ImageRead(e))
        }
    }
}

pub fn submit(state: &mut State, environment: &Environment) -> Result<Submitted, FormError> {
    let user = ensure_user(environment)?;
    ensure_complete(&state.draft)?;
    let store = &environment.store;

    store.dispatch(StoreAction::SetLoading(true));

    let draft = std::mem::take(&mut state.draft);
    state.reset();

    let post = outgoing_post(draft, &user);

    let submitted = match store.edit_post() {
        Some(target) => {
            store.dispatch(StoreAction::UpdatePost {
                post,
                id: target.id.clone(),
            });
            store.dispatch(StoreAction::SetEditPost(None));
            environment.notify(NotificationKind::Success, loc!("Edited Successfully!"));
            Submitted::Updated(target.id)
        }
        None => {
            store.dispatch(StoreAction::CreatePost(post));
            environment.notify(NotificationKind::Success, loc!("Posted Successfully!"));
            Submitted::Created
        }
    };
    state.mode = Mode::Create;

    store.dispatch(StoreAction::GetPosts(environment.config.refresh_page));
    environment.navigator.navigate(&environment.config.listing_path);
    store.dispatch(StoreAction::SetLoading(false));

    Ok(submitted)
}

/// Title and message are required
fn ensure_complete(draft: &Draft) -> Result<(), FormError> {
    if draft.title.trim().is_empty() {
        return Err(FormError::Required(Field::Title));
    }
    if draft.message.trim().is_empty() {
        return Err(FormError::Required(Field::Message));
    }
    Ok(())
}

fn outgoing_post(draft: Draft, user: &SessionUser) -> OutgoingPost {
    OutgoingPost {
        title: draft.title,
        message: draft.message,
        tags: draft.tags,
        selected_file: draft.image,
        name: user.name.clone(),
        creator: user.id.clone(),
        created_at: OutgoingPost::timestamp(Utc::now()),
    }
}

pub fn clear(state: &mut State) {
    state.reset();
}

pub fn cancel(state: &mut State, environment: &Environment) {
    environment.store.dispatch(StoreAction::SetEditPost(None));
    state.mode = Mode::Create;
    state.reset();
}
