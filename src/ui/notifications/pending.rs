// SPDX-License-Identifier: MPL-2.0
//! Pending deferred actions and their resolution guard.

use std::fmt;

/// Lifecycle of a deferred action.
///
/// `Pending` is the only non-terminal state; every other state is reached at
/// most once and is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingState {
    /// Waiting for the undo window to elapse.
    Pending,
    /// The window elapsed and the confirm callback ran.
    Confirmed,
    /// The user cancelled and the undo callback ran.
    Undone,
    /// The notification was removed some other way; nothing ran.
    Suppressed,
}

type Callback<M> = Box<dyn FnOnce() -> M>;

/// Callbacks guarding a destructive operation behind an undo window.
pub(crate) struct PendingAction<M> {
    on_confirm: Option<Callback<M>>,
    on_undo: Option<Callback<M>>,
    state: PendingState,
}

impl<M> PendingAction<M> {
    pub(crate) fn new<U, C>(on_undo: U, on_confirm: C) -> Self
    where
        U: FnOnce() -> M + 'static,
        C: FnOnce() -> M + 'static,
    {
        Self {
            on_confirm: Some(Box::new(on_confirm)),
            on_undo: Some(Box::new(on_undo)),
            state: PendingState::Pending,
        }
    }

    pub(crate) fn state(&self) -> PendingState {
        self.state
    }

    /// Runs the confirm callback if the action is still pending.
    pub(crate) fn confirm(&mut self) -> Option<M> {
        if !self.settle(PendingState::Confirmed) {
            return None;
        }
        self.on_undo = None;
        self.on_confirm.take().map(|f| f())
    }

    /// Runs the undo callback if the action is still pending.
    pub(crate) fn undo(&mut self) -> Option<M> {
        if !self.settle(PendingState::Undone) {
            return None;
        }
        self.on_confirm = None;
        self.on_undo.take().map(|f| f())
    }

    /// Drops both callbacks without running either.
    ///
    /// Returns `false` when the action had already been resolved.
    pub(crate) fn suppress(&mut self) -> bool {
        if !self.settle(PendingState::Suppressed) {
            return false;
        }
        self.on_confirm = None;
        self.on_undo = None;
        true
    }

    /// Leaves `Pending` for `to`. Only the first call succeeds.
    fn settle(&mut self, to: PendingState) -> bool {
        if self.state != PendingState::Pending {
            return false;
        }
        self.state = to;
        true
    }
}

impl<M> fmt::Debug for PendingAction<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAction")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted() -> (Rc<Cell<u32>>, Rc<Cell<u32>>, PendingAction<()>) {
        let undos = Rc::new(Cell::new(0));
        let confirms = Rc::new(Cell::new(0));
        let (u, c) = (undos.clone(), confirms.clone());
        let action = PendingAction::new(
            move || u.set(u.get() + 1),
            move || c.set(c.get() + 1),
        );
        (undos, confirms, action)
    }

    #[test]
    fn confirm_runs_once_and_blocks_undo() {
        let (undos, confirms, mut action) = counted();

        assert!(action.confirm().is_some());
        assert!(action.confirm().is_none());
        assert!(action.undo().is_none());

        assert_eq!(confirms.get(), 1);
        assert_eq!(undos.get(), 0);
        assert_eq!(action.state(), PendingState::Confirmed);
    }

    #[test]
    fn undo_runs_once_and_blocks_confirm() {
        let (undos, confirms, mut action) = counted();

        assert!(action.undo().is_some());
        assert!(action.undo().is_none());
        assert!(action.confirm().is_none());

        assert_eq!(undos.get(), 1);
        assert_eq!(confirms.get(), 0);
        assert_eq!(action.state(), PendingState::Undone);
    }

    #[test]
    fn suppress_runs_nothing() {
        let (undos, confirms, mut action) = counted();

        assert!(action.suppress());
        assert!(!action.suppress());
        assert!(action.confirm().is_none());
        assert!(action.undo().is_none());

        assert_eq!(undos.get() + confirms.get(), 0);
        assert_eq!(action.state(), PendingState::Suppressed);
    }

    #[test]
    fn callbacks_return_values() {
        let mut action = PendingAction::new(|| "restore", || "commit");
        assert_eq!(action.confirm(), Some("commit"));
    }
}
