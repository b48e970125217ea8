use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

// Session Types

/// The signed-in identity as exposed by the session provider
#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl SessionUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// Post Types

/// A post as held by the store. Doubles as the edit target of the form.
#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    /// A data url, or empty if the post has no image
    #[serde(default)]
    pub selected_file: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub created_at: String,
}

/// The payload that is handed to the store on submission
#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingPost {
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    pub selected_file: String,
    pub name: String,
    pub creator: String,
    pub created_at: String,
}

impl OutgoingPost {
    pub fn timestamp(now: DateTime<Utc>) -> String {
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn into_record(self, id: String) -> PostRecord {
        PostRecord {
            id,
            title: self.title,
            message: self.message,
            tags: self.tags,
            selected_file: self.selected_file,
            name: self.name,
            creator: self.creator,
            created_at: self.created_at,
        }
    }
}

// Store Types

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreAction {
    CreatePost(OutgoingPost),
    UpdatePost { post: OutgoingPost, id: String },
    /// Refresh the given (1-based) page of the listing
    GetPosts(usize),
    SetLoading(bool),
    SetEditPost(Option<PostRecord>),
    LogUserOut,
}

// Notification Types

#[derive(IntoStaticStr, Display, Debug, Clone, Copy, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
    Success,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

// Events

/// Changes in the app-wide collaborators the form has to learn about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppEvent {
    EditTargetChanged(Option<PostRecord>),
    LoadingChanged(bool),
    UserChanged(Option<SessionUser>),
    PostsRefreshed(usize),
    Navigated(String),
}
