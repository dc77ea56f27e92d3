//! Focus state for the form views

/// Which field of the mounted form has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormViewState {
    pub active_field: usize,
    /// Store revision the view last synced against
    pub synced_revision: u64,
}

impl FormViewState {
    pub fn next_field(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.active_field = (self.active_field + 1) % count;
    }

    pub fn prev_field(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.active_field == 0 || self.active_field >= count {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Reset focus when the store changed underneath the view
    pub fn sync(&mut self, revision: u64, count: usize) {
        if self.synced_revision != revision {
            self.synced_revision = revision;
            self.active_field = 0;
        }
        if self.active_field >= count {
            self.active_field = count.saturating_sub(1);
        }
    }
}
