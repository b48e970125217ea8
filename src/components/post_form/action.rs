use std::path::PathBuf;

use crate::environment::types::AppEvent;

use super::state::Field;

#[derive(Clone, Debug)]
pub enum PostFormAction {
    Mount,
    AppEvent(AppEvent),
    UpdateField(Field, String),
    UpdateTagText(String),
    AddTag,
    RemoveTag(usize),
    FileDialog,
    ImageSelected(PathBuf),
    ImageRead(u64, Result<String, String>),
    Submit,
    Clear,
    Cancel,
}
