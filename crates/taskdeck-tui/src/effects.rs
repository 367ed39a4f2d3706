//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes
//! against the injected collaborators. The reducer itself never touches
//! authentication or navigation.

/// Effects returned by the reducer for the runtime to execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Close the screen without logging out.
    Quit,

    /// Invoke the authentication context's `logout()`.
    Logout,

    /// Leave the screen for a named destination.
    Navigate { destination: String },
}
