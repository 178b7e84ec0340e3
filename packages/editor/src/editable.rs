//! # Editable Field
//!
//! UI primitive binding one string value to an inline editing control.
//!
//! The field never owns the edit-mode flag: the page supplies it on every
//! render via [`EditableField::set_editing`]. While editing, keystrokes only
//! touch the local draft; the external store is mutated exactly once, when
//! [`EditableField::blur`] hands the draft back for commit. Escape reverts
//! the draft and the store is never touched.
//!
//! ```text
//! Viewing ──set_editing(true)──▶ EditingClean ──input──▶ EditingDirty
//!    ▲                               ▲                        │
//!    │                               └───────cancel───────────┤
//!    └─────────set_editing(false)  ◀──────── blur (commit) ───┘
//! ```

/// Where the field sits in its edit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Read-only text
    Viewing,
    /// Editable, draft equals the external value
    EditingClean,
    /// Editable, draft differs from the external value
    EditingDirty,
}

/// Inline text-editing control for one store-backed string value
#[derive(Debug, Clone)]
pub struct EditableField {
    /// Last known external (committed) value
    value: String,
    /// Local draft, only meaningful while editing
    draft: String,
    placeholder: String,
    editing: bool,
    focused: bool,
}

impl EditableField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            draft: value.clone(),
            value,
            placeholder: "Click to edit...".to_string(),
            editing: false,
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn state(&self) -> FieldState {
        if !self.editing {
            FieldState::Viewing
        } else if self.draft == self.value {
            FieldState::EditingClean
        } else {
            FieldState::EditingDirty
        }
    }

    /// Edit-mode flag, supplied by the owning page on every render. Only a
    /// change of mode takes effect: entering edit mode seeds the draft from
    /// the external value, leaving it discards the draft.
    pub fn set_editing(&mut self, editing: bool) {
        if editing == self.editing {
            return;
        }
        self.editing = editing;
        self.focused = false;
        self.draft = self.value.clone();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus(&mut self) {
        if self.editing {
            self.focused = true;
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the draft (one keystroke's worth of change). Does not notify
    /// the store.
    pub fn input(&mut self, text: impl Into<String>) {
        if self.editing {
            self.focused = true;
            self.draft = text.into();
        }
    }

    /// Loss of focus: hands the draft back for commit. Returns `None` when
    /// not editing or not focused, so the owner invokes its commit path
    /// exactly once per completed edit.
    pub fn blur(&mut self) -> Option<String> {
        if !self.editing || !self.focused {
            return None;
        }
        self.focused = false;
        self.value = self.draft.clone();
        Some(self.draft.clone())
    }

    /// Explicit cancel (escape): revert the draft, release focus, commit
    /// nothing.
    pub fn cancel(&mut self) {
        if self.editing {
            self.draft = self.value.clone();
            self.focused = false;
        }
    }

    /// Resynchronize with the external value (e.g. after a reset). Ignored
    /// while focused so typing is never clobbered.
    pub fn sync(&mut self, external: &str) {
        if self.focused {
            return;
        }
        self.value = external.to_string();
        self.draft = self.value.clone();
    }

    /// Current draft, the content of the editing control
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// View-mode text: the value, or the placeholder when the value is empty
    pub fn display(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_viewing() {
        let field = EditableField::new("Hello");
        assert_eq!(field.state(), FieldState::Viewing);
        assert_eq!(field.display(), "Hello");
    }

    #[test]
    fn test_input_dirties_draft_without_committing() {
        let mut field = EditableField::new("Hello");
        field.set_editing(true);
        assert_eq!(field.state(), FieldState::EditingClean);

        field.input("Hel");
        assert_eq!(field.state(), FieldState::EditingDirty);
        assert_eq!(field.draft(), "Hel");
        // View value untouched until blur
        assert_eq!(field.display(), "Hello");
    }

    #[test]
    fn test_blur_commits_once() {
        let mut field = EditableField::new("Hello");
        field.set_editing(true);
        field.input("World");

        assert_eq!(field.blur(), Some("World".to_string()));
        // Second blur without a new focus commits nothing
        assert_eq!(field.blur(), None);
    }

    #[test]
    fn test_blur_while_viewing_commits_nothing() {
        let mut field = EditableField::new("Hello");
        assert_eq!(field.blur(), None);
    }

    #[test]
    fn test_cancel_reverts_draft() {
        let mut field = EditableField::new("Hello");
        field.set_editing(true);
        field.input("scratch that");

        field.cancel();
        assert_eq!(field.draft(), "Hello");
        assert_eq!(field.state(), FieldState::EditingClean);
        assert_eq!(field.blur(), None);
    }

    #[test]
    fn test_empty_string_is_a_valid_commit() {
        let mut field = EditableField::new("Hello");
        field.set_editing(true);
        field.input("");

        assert_eq!(field.blur(), Some(String::new()));
        field.set_editing(false);
        // Placeholder only shows in view mode with an empty value
        assert_eq!(field.display(), "Click to edit...");
    }

    #[test]
    fn test_sync_resynchronizes_when_not_focused() {
        let mut field = EditableField::new("Hello");
        field.sync("Reset value");
        assert_eq!(field.display(), "Reset value");

        field.set_editing(true);
        field.input("typing...");
        // Focused: external changes do not clobber the draft
        field.sync("Server value");
        assert_eq!(field.draft(), "typing...");
    }
}
