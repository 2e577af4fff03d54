use std::{collections::VecDeque, mem};

use twofold_core::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    Slide(Direction),
    NewGame,
    Quit,
}

/// Pending actions, handled strictly in request order.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: VecDeque<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn take_all(&mut self) -> VecDeque<Action> {
        mem::take(&mut self.actions)
    }
}
