//! Default command: the interactive task screen.

use anyhow::Result;
use taskdeck_core::config::Config;
use tracing::info;

use crate::session::{LocalSession, RouteRecorder};

pub fn run(config: &Config, user: String) -> Result<()> {
    let session = LocalSession::new(user.clone());
    let recorder = RouteRecorder::default();
    let visited = recorder.handle();

    taskdeck_tui::run_task_screen(config, user, Box::new(session), Box::new(recorder))?;

    // Terminal is restored by now.
    if let Some(destination) = visited.borrow().as_deref() {
        info!(%destination, "session closed");
        eprintln!("Sesión cerrada. Destino: {destination}");
    }
    Ok(())
}
