//! Operator panel toggle loop.
//!
//! One debounced button press swaps the active indicator: red LED lit
//! with "Red led" on the display, or green LED lit with "Green led".
//! The panel boots showing green, so the first press switches to red.

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, PanelPort};

/// Which indicator is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    GreenActive,
    RedActive,
}

impl PanelState {
    fn toggled(self) -> Self {
        match self {
            Self::GreenActive => Self::RedActive,
            Self::RedActive => Self::GreenActive,
        }
    }
}

pub struct PanelToggle {
    state: PanelState,
}

impl PanelToggle {
    pub fn new() -> Self {
        Self {
            state: PanelState::GreenActive,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Light the boot-time indicator.  Call once before the first tick.
    pub fn init(&mut self, panel: &mut impl PanelPort) {
        self.apply(panel);
    }

    /// Poll the button; toggle the indicators on each debounced press.
    pub fn tick(&mut self, panel: &mut impl PanelPort, sink: &mut impl EventSink, now_ms: u32) {
        if panel.poll_press(now_ms) {
            self.state = self.state.toggled();
            self.apply(panel);
            sink.emit(&AppEvent::PanelChanged(self.state));
        }
    }

    fn apply(&self, panel: &mut impl PanelPort) {
        panel.clear_display();
        match self.state {
            PanelState::RedActive => {
                panel.set_leds(true, false);
                panel.show(0, "Red led");
            }
            PanelState::GreenActive => {
                panel.set_leds(false, true);
                panel.show(0, "Green led");
            }
        }
    }
}

impl Default for PanelToggle {
    fn default() -> Self {
        Self::new()
    }
}
