use thiserror::Error;

use crate::components::post_form::Field;
use crate::environment::types::NotificationKind;

/// Everything the post form can refuse to do. None of these are fatal, they
/// all end up as a notification.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("Not Valid Image")]
    InvalidImage,
    #[error("Session Expired!")]
    SessionExpired,
    #[error("You are not Logged In!")]
    NotLoggedIn,
    #[error("Could not load image: {0}")]
    ImageRead(String),
    #[error("{0} is required")]
    Required(Field),
}

impl FormError {
    pub fn kind(&self) -> NotificationKind {
        match self {
            FormError::SessionExpired => NotificationKind::Info,
            _ => NotificationKind::Error,
        }
    }
}
