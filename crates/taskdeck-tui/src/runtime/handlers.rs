//! Effect handlers: the only place the screen talks to its collaborators.

use taskdeck_core::session::{AuthContext, Navigator};
use tracing::info;

use crate::effects::UiEffect;
use crate::state::AppState;

/// Injected collaborators the screen consumes.
pub struct Collaborators {
    pub auth: Box<dyn AuthContext>,
    pub navigator: Box<dyn Navigator>,
}

impl Collaborators {
    pub fn new(auth: Box<dyn AuthContext>, navigator: Box<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }
}

/// Executes one effect. Navigating anywhere ends this screen.
pub fn execute_effect(collaborators: &mut Collaborators, state: &mut AppState, effect: UiEffect) {
    match effect {
        UiEffect::Quit => {
            info!(tasks = state.tasks.list.len(), "quit requested");
            state.should_quit = true;
        }
        UiEffect::Logout => {
            info!(user = %state.user, "logging out");
            collaborators.auth.logout();
        }
        UiEffect::Navigate { destination } => {
            info!(%destination, "leaving task screen");
            collaborators.navigator.navigate(&destination);
            state.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::common::Theme;
    use crate::update::logout_effects;

    type CallLog = Rc<RefCell<Vec<String>>>;

    struct FakeAuth(CallLog);

    impl AuthContext for FakeAuth {
        fn logout(&mut self) {
            self.0.borrow_mut().push("logout".to_string());
        }
    }

    struct FakeNavigator(CallLog);

    impl Navigator for FakeNavigator {
        fn navigate(&mut self, destination: &str) {
            self.0.borrow_mut().push(format!("navigate:{destination}"));
        }
    }

    fn collaborators(log: &CallLog) -> Collaborators {
        Collaborators::new(
            Box::new(FakeAuth(Rc::clone(log))),
            Box::new(FakeNavigator(Rc::clone(log))),
        )
    }

    #[test]
    fn test_logout_runs_before_navigation_and_ends_screen() {
        let log = CallLog::default();
        let mut collaborators = collaborators(&log);
        let mut state = AppState::new("ana", Theme::default());

        for effect in logout_effects() {
            execute_effect(&mut collaborators, &mut state, effect);
        }

        assert_eq!(*log.borrow(), vec!["logout", "navigate:Login"]);
        assert!(state.should_quit);
    }

    #[test]
    fn test_quit_does_not_touch_collaborators() {
        let log = CallLog::default();
        let mut collaborators = collaborators(&log);
        let mut state = AppState::new("ana", Theme::default());

        execute_effect(&mut collaborators, &mut state, UiEffect::Quit);

        assert!(log.borrow().is_empty());
        assert!(state.should_quit);
    }
}
