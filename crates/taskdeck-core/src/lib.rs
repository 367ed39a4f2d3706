//! Core taskdeck library (task store, session collaborators, config, logging).

pub mod config;
pub mod logging;
pub mod session;
pub mod store;
