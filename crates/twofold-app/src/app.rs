//! Twofold terminal application state.
//!
//! The application owns one [`Session`] and drives it from queued
//! [`Action`]s. Rendering is separate; see [`crate::render`].

use twofold_game::{Session, TurnOutcome};
use twofold_spawn::GameSeed;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug)]
pub struct TwofoldApp {
    session: Session,
    last_outcome: Option<TurnOutcome>,
    quit_requested: bool,
}

impl TwofoldApp {
    #[must_use]
    pub fn new(session: Session) -> Self {
        log::info!("starting game with seed {}", session.seed());
        Self {
            session,
            last_outcome: None,
            quit_requested: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Outcome of the most recent slide, cleared by a new game.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn handle_all(&mut self, action_queue: &mut ActionRequestQueue) {
        for action in action_queue.take_all() {
            if self.quit_requested {
                log::debug!("dropping {action:?} after quit");
                continue;
            }
            self.handle(action);
        }
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Slide(direction) => {
                let turn = self.session.clone().step(direction);
                self.session = turn.session;
                self.last_outcome = Some(turn.outcome);
            }
            Action::NewGame => {
                self.session = self.session.restart(GameSeed::random());
                self.last_outcome = None;
                log::info!("new game with seed {}", self.session.seed());
            }
            Action::Quit => self.quit_requested = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use twofold_core::{Direction, Grid};
    use twofold_game::{GameConfig, GameStatus};

    use super::*;

    fn app(grid: &str) -> TwofoldApp {
        let grid: Grid = grid.parse().unwrap();
        let session =
            Session::from_grid(GameConfig::default(), grid, 0, GameSeed::from_phrase("app")).unwrap();
        TwofoldApp::new(session)
    }

    #[test]
    fn test_slide_updates_session_and_outcome() {
        let mut app = app("2 2 . ./. . . ./. . . ./. . . .");
        app.handle(Action::Slide(Direction::Left));
        assert_eq!(app.session().score(), 4);
        assert_eq!(app.session().moves(), 1);
        assert!(app.last_outcome().is_some_and(TurnOutcome::is_moved));
    }

    #[test]
    fn test_blocked_slide_is_reported() {
        let mut app = app("2 . . ./. . . ./. . . ./. . . .");
        app.handle(Action::Slide(Direction::Up));
        assert_eq!(app.last_outcome(), Some(&TurnOutcome::Blocked));
        assert_eq!(app.session().moves(), 0);
    }

    #[test]
    fn test_over_game_ignores_slides() {
        let mut app = app("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        assert_eq!(app.session().status(), GameStatus::Over);
        app.handle(Action::Slide(Direction::Down));
        assert_eq!(app.last_outcome(), Some(&TurnOutcome::Ignored));
    }

    #[test]
    fn test_new_game_resets_session() {
        let mut app = app("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        app.handle(Action::NewGame);
        let session = app.session();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.grid().occupied_count(), 2);
        assert!(app.last_outcome().is_none());
    }

    #[test]
    fn test_actions_are_handled_in_order_until_quit() {
        let mut app = app("2 2 . ./. . . ./. . . ./. . . .");
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Slide(Direction::Left));
        queue.request(Action::Quit);
        queue.request(Action::NewGame);
        app.handle_all(&mut queue);

        assert!(queue.is_empty());
        assert!(app.quit_requested());
        // The new game after the quit was dropped.
        assert_eq!(app.session().moves(), 1);
        assert_eq!(app.session().score(), 4);
    }
}
