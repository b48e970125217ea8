use crate::environment::types::{PostRecord, SessionUser};

use super::tags::TagInput;

/// The post that is being composed or edited
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Draft {
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    /// A data url, empty if there is no image
    pub image: String,
}

impl Draft {
    pub fn from_record(record: &PostRecord) -> Self {
        Self {
            title: record.title.clone(),
            message: record.message.clone(),
            tags: record.tags.clone(),
            image: record.selected_file.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Create,
    Edit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum Field {
    Title,
    Message,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    pub draft: Draft,
    pub tags: TagInput,
    pub mode: Mode,
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Bumped for every image selection and every reset. Only the read
    /// started under the current generation may set the image.
    pub image_generation: u64,
    pub image_name: Option<String>,
}

impl State {
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    pub fn is_disabled(&self) -> bool {
        self.user.is_none()
    }

    /// Empty the draft and the tag input
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.tags.clear();
        self.image_name = None;
        self.image_generation += 1;
    }
}
