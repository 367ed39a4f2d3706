//! Full-screen task list screen for taskdeck.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod hit;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{input, tasks};
pub use runtime::{Collaborators, TuiRuntime};
use taskdeck_core::config::Config;
use taskdeck_core::session::{AuthContext, Navigator};
use tracing::info;

/// Runs the task screen until the user quits or logs out.
///
/// On logout, `auth.logout()` runs before `navigator.navigate("Login")`.
///
/// # Errors
/// Returns an error if stdout is not a terminal, a configured colour is
/// invalid, or terminal I/O fails.
pub fn run_task_screen(
    config: &Config,
    user: String,
    auth: Box<dyn AuthContext>,
    navigator: Box<dyn Navigator>,
) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("The task screen requires a terminal.");
    }

    info!(%user, "opening task screen");
    let mut runtime = TuiRuntime::new(config, user, Collaborators::new(auth, navigator))?;
    runtime.run()
}
