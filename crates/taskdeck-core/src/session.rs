//! Collaborators the task screen consumes but does not implement.
//!
//! Both are injected into the screen at construction time. The screen never
//! looks them up from ambient state.

/// Destination the screen navigates to after logging out.
pub const LOGIN_ROUTE: &str = "Login";

/// Authentication capability. The screen only ever calls `logout`.
pub trait AuthContext {
    fn logout(&mut self);
}

/// Navigation capability: transition to a named destination.
pub trait Navigator {
    fn navigate(&mut self, destination: &str);
}
