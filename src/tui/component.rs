//! Traits shared by the screen components.
//!
//! Drawing and input are split: a screen's persistent `*State` implements
//! `EventHandler`, and a short-lived wrapper borrowing that state
//! implements `Component`. Chrome (header, footer, splash) only draws, so
//! it implements `Component` alone.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

pub trait Component {
    /// Draw into `area`. `&mut self` lets list selection and scroll
    /// offsets settle during the draw.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Input side of a screen. Key presses are absorbed locally; only
/// outcomes the event loop cares about (a confirmed selection, a valid
/// payment, logout) come back as `Self::Event`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
