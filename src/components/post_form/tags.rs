use super::state::Draft;

/// State of the tag input widget: the text being typed and the tags so far
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagInput {
    pub pending: String,
    pub tags: Vec<String>,
}

impl TagInput {
    /// Turn the pending text into a tag. Blank and duplicate tags are
    /// dropped.
    pub fn add_pending(&mut self) -> bool {
        let tag = self.pending.trim().to_string();
        self.pending.clear();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.tags.len() {
            return false;
        }
        self.tags.remove(index);
        true
    }

    pub fn set(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.pending.clear();
    }

    pub fn clear(&mut self) {
        self.set(Vec::new());
    }

    /// Copy the tags into the draft. An empty list never propagates, so
    /// removing the last tag keeps the draft's previous tags.
    pub fn merge_into(&self, draft: &mut Draft) {
        if !self.tags.is_empty() {
            draft.tags = self.tags.clone();
        }
    }
}
