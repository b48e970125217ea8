#![allow(non_snake_case)]

mod app;
mod components;
mod environment;
mod error;
mod style;
mod widgets;

pub use app::run;
pub use components::post_form::{Draft, Field, Mode, PostFormAction, Submitted};
pub use environment::types::{OutgoingPost, PostRecord, SessionUser, StoreAction};
pub use environment::{
    AppStore, Environment, FormConfig, Navigator, Notifier, Router, Session, Store, Toasts,
};
pub use error::FormError;

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
