use crate::environment::types::{SessionUser, StoreAction};
use crate::environment::Environment;
use crate::error::FormError;

/// Checked anew before every mutating action, never cached
pub fn ensure_session(environment: &Environment) -> Result<(), FormError> {
    if environment.session.is_token_valid() {
        Ok(())
    } else {
        Err(FormError::SessionExpired)
    }
}

pub fn ensure_user(environment: &Environment) -> Result<SessionUser, FormError> {
    let user = environment.session.user().ok_or(FormError::NotLoggedIn)?;
    ensure_session(environment)?;
    Ok(user)
}

/// Tell the user what went wrong. An expired session also signs out.
pub fn report(environment: &Environment, error: &FormError) {
    log::warn!("{error}");
    environment.notify(error.kind(), &error.to_string());
    if *error == FormError::SessionExpired {
        environment.store.dispatch(StoreAction::LogUserOut);
    }
}
