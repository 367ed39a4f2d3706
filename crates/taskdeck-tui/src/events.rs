//! Events fed into the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Redraw cadence tick.
    Tick,
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(Event),
}
