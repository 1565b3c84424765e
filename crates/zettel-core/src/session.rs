//! Editor session state machine.
//!
//! One `EditorSession` lives for the lifetime of the client window. It owns
//! the two pieces of controller state the UI must agree on: which zettel is
//! active and whether the edit pane is showing. The render tree is a pure
//! render target; it never stores either.
//!
//! Network calls are fire-and-forget, so overlapping responses can land in
//! arrival order. Every `begin_*` operation bumps a generation counter and
//! hands out a [`RequestToken`]; a response may only be applied while
//! [`EditorSession::accepts`] still holds for its token. Issuing any newer
//! request invalidates all in-flight responses.

use crate::models::ZettelId;

/// Which pane is visible and what the primary action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Rendered view pane is visible; the primary button reads "Edit".
    Viewing,
    /// Raw-text edit pane is visible; the primary button reads "Save".
    Editing,
}

/// Proof that a response belongs to the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Controller state: active zettel, edit mode, and in-flight generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    selected: Option<ZettelId>,
    mode: EditMode,
    generation: u64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Fresh session: sentinel selection, viewing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            mode: EditMode::Viewing,
            generation: 0,
        }
    }

    /// The zettel the action buttons are bound to, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<ZettelId> {
        self.selected
    }

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing)
    }

    /// Whether a response carrying `token` is still current.
    #[must_use]
    pub const fn accepts(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    fn issue(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    /// Start selecting a zettel.
    ///
    /// Leaving edit mode here silently discards the edit buffer. The
    /// selection itself is only rebound by
    /// [`commit_select`](Self::commit_select) once the fetch succeeds; a
    /// failed fetch leaves the buttons on the previously selected zettel.
    pub fn begin_select(&mut self, _id: ZettelId) -> RequestToken {
        self.mode = EditMode::Viewing;
        self.issue()
    }

    /// Bind the selection after a successful fetch.
    ///
    /// Returns `false` (and changes nothing) when a newer request has
    /// already invalidated `token`.
    pub fn commit_select(&mut self, id: ZettelId, token: RequestToken) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// `Viewing -> Editing`. Refused when nothing is selected or when
    /// already editing.
    ///
    /// Entering edit mode invalidates every in-flight response: a fetch
    /// issued before the user started editing must not land in the edit
    /// buffer mid-edit.
    pub fn begin_edit(&mut self) -> bool {
        if self.selected.is_none() || self.is_editing() {
            return false;
        }
        self.mode = EditMode::Editing;
        let _ = self.issue();
        true
    }

    /// Start saving the edit buffer for the active zettel.
    ///
    /// Transitions back to `Viewing` immediately; the token guards applying
    /// the store's authoritative post-save content. `None` when not editing
    /// or when the selection is the sentinel.
    pub fn begin_save(&mut self) -> Option<(ZettelId, RequestToken)> {
        if !self.is_editing() {
            return None;
        }
        let id = self.selected?;
        self.mode = EditMode::Viewing;
        Some((id, self.issue()))
    }

    /// Abandon the edit buffer and re-fetch the stored copy.
    ///
    /// Forces `Viewing`; `None` when not editing.
    pub fn begin_discard(&mut self) -> Option<(ZettelId, RequestToken)> {
        if !self.is_editing() {
            return None;
        }
        let id = self.selected?;
        self.mode = EditMode::Viewing;
        Some((id, self.issue()))
    }

    /// Start deleting the active zettel.
    ///
    /// `None` when the selection is the sentinel: no network call is made
    /// and no state changes.
    pub fn begin_delete(&mut self) -> Option<(ZettelId, RequestToken)> {
        let id = self.selected?;
        Some((id, self.issue()))
    }

    /// Apply a delete outcome. Forces `Viewing` whether the store confirmed
    /// the delete or not; the selection is cleared only on success.
    pub fn complete_delete(&mut self, token: RequestToken, deleted: bool) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.mode = EditMode::Viewing;
        if deleted {
            self.selected = None;
        }
        true
    }

    /// Start creating a new zettel (the store picks the id).
    pub fn begin_create(&mut self) -> RequestToken {
        self.issue()
    }

    /// Bind a freshly created zettel and enter edit mode so the user can
    /// immediately type into it.
    pub fn commit_create(&mut self, id: ZettelId, token: RequestToken) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.selected = Some(id);
        self.mode = EditMode::Editing;
        true
    }

    /// Back to the initial state, invalidating every in-flight response.
    ///
    /// List reloads (apply/clear filter) call this.
    pub fn reset(&mut self) {
        self.selected = None;
        self.mode = EditMode::Viewing;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: i64) -> ZettelId {
        ZettelId::new(raw)
    }

    #[test]
    fn starts_viewing_with_sentinel_selection() {
        let session = EditorSession::new();
        assert_eq!(session.selected(), None);
        assert_eq!(session.mode(), EditMode::Viewing);
    }

    #[test]
    fn selection_binds_to_last_successful_fetch() {
        let mut session = EditorSession::new();

        let first = session.begin_select(id(1));
        assert!(session.commit_select(id(1), first));
        assert_eq!(session.selected(), Some(id(1)));

        // A failed fetch never commits: buttons keep the previous binding.
        let _failed = session.begin_select(id(2));
        assert_eq!(session.selected(), Some(id(1)));

        let third = session.begin_select(id(3));
        assert!(session.commit_select(id(3), third));
        assert_eq!(session.selected(), Some(id(3)));
    }

    #[test]
    fn stale_select_response_is_discarded() {
        let mut session = EditorSession::new();

        let slow = session.begin_select(id(1));
        let fast = session.begin_select(id(2));

        assert!(session.commit_select(id(2), fast));
        // The response for zettel 1 arrives late and must not rebind.
        assert!(!session.commit_select(id(1), slow));
        assert_eq!(session.selected(), Some(id(2)));
    }

    #[test]
    fn entering_edit_mode_invalidates_inflight_select() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(1));
        session.commit_select(id(1), token);

        // A fetch for zettel 2 is still in flight when the user starts
        // editing zettel 1; its late response must not rebind the
        // selection or land in the edit buffer mid-edit.
        let slow = session.begin_select(id(2));
        assert!(session.begin_edit());

        assert!(!session.accepts(slow));
        assert!(!session.commit_select(id(2), slow));
        assert_eq!(session.selected(), Some(id(1)));
        assert_eq!(session.mode(), EditMode::Editing);
    }

    #[test]
    fn toggle_twice_returns_to_viewing() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(5));
        session.commit_select(id(5), token);

        assert!(session.begin_edit());
        assert_eq!(session.mode(), EditMode::Editing);

        let (save_id, _token) = session.begin_save().unwrap();
        assert_eq!(save_id, id(5));
        assert_eq!(session.mode(), EditMode::Viewing);
    }

    #[test]
    fn edit_refused_without_selection() {
        let mut session = EditorSession::new();
        assert!(!session.begin_edit());
        assert_eq!(session.mode(), EditMode::Viewing);
        assert!(session.begin_save().is_none());
    }

    #[test]
    fn delete_with_sentinel_selection_is_a_no_op() {
        let mut session = EditorSession::new();
        let before = session.clone();
        assert!(session.begin_delete().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn successful_delete_clears_selection_and_forces_viewing() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(9));
        session.commit_select(id(9), token);
        session.begin_edit();

        let (delete_id, token) = session.begin_delete().unwrap();
        assert_eq!(delete_id, id(9));
        assert!(session.complete_delete(token, true));
        assert_eq!(session.selected(), None);
        assert_eq!(session.mode(), EditMode::Viewing);
    }

    #[test]
    fn failed_delete_keeps_selection_but_leaves_edit_mode() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(9));
        session.commit_select(id(9), token);
        session.begin_edit();

        let (_, token) = session.begin_delete().unwrap();
        assert!(session.complete_delete(token, false));
        assert_eq!(session.selected(), Some(id(9)));
        assert_eq!(session.mode(), EditMode::Viewing);
    }

    #[test]
    fn create_binds_new_id_and_enters_editing() {
        let mut session = EditorSession::new();
        let token = session.begin_create();
        assert!(session.commit_create(id(77), token));
        assert_eq!(session.selected(), Some(id(77)));
        assert_eq!(session.mode(), EditMode::Editing);
    }

    #[test]
    fn selecting_while_editing_discards_edit_mode() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(1));
        session.commit_select(id(1), token);
        session.begin_edit();

        let token = session.begin_select(id(2));
        assert_eq!(session.mode(), EditMode::Viewing);
        assert!(session.commit_select(id(2), token));
    }

    #[test]
    fn discard_only_works_while_editing() {
        let mut session = EditorSession::new();
        assert!(session.begin_discard().is_none());

        let token = session.begin_select(id(4));
        session.commit_select(id(4), token);
        assert!(session.begin_discard().is_none());

        session.begin_edit();
        let (discard_id, _token) = session.begin_discard().unwrap();
        assert_eq!(discard_id, id(4));
        assert_eq!(session.mode(), EditMode::Viewing);
    }

    #[test]
    fn reset_invalidates_in_flight_responses() {
        let mut session = EditorSession::new();
        let token = session.begin_select(id(1));
        session.reset();
        assert!(!session.commit_select(id(1), token));
        assert_eq!(session.selected(), None);
        assert_eq!(session.mode(), EditMode::Viewing);
    }
}
