//! Local implementations of the collaborators the task screen consumes.

use std::cell::RefCell;
use std::rc::Rc;

use taskdeck_core::session::{AuthContext, Navigator};
use tracing::info;

/// In-memory session for the user named on the command line.
#[derive(Debug)]
pub struct LocalSession {
    user: String,
    signed_in: bool,
}

impl LocalSession {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            signed_in: true,
        }
    }

    #[cfg(test)]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}

impl AuthContext for LocalSession {
    fn logout(&mut self) {
        if self.signed_in {
            info!(user = %self.user, "signed out");
        }
        self.signed_in = false;
    }
}

/// Shared slot holding the last destination navigated to.
pub type VisitedRoute = Rc<RefCell<Option<String>>>;

/// Records where the screen asked to go so the CLI can report it once the
/// terminal is restored.
#[derive(Debug, Default)]
pub struct RouteRecorder {
    visited: VisitedRoute,
}

impl RouteRecorder {
    /// Handle that stays readable after the recorder is moved into the screen.
    pub fn handle(&self) -> VisitedRoute {
        Rc::clone(&self.visited)
    }
}

impl Navigator for RouteRecorder {
    fn navigate(&mut self, destination: &str) {
        info!(%destination, "navigate");
        *self.visited.borrow_mut() = Some(destination.to_string());
    }
}
