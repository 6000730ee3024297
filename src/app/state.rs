//! App state - pure data structure with no I/O logic

use crate::constants::EXAMPLE_ADDRESS;
use crate::messages::RenderState;
use crate::models::{Address, FontScale, Readout};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Decorative header, never edited
    pub example: Address,

    // Editable octets and their readout
    pub address: Address,
    pub readout: Readout,

    // Focused cell as (octet, bit)
    pub focus: (usize, usize),

    // Sizes derived from the last resize
    pub scale: FontScale,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut state = AppState {
            example: Address::from(EXAMPLE_ADDRESS),
            address: Address::new(),
            readout: Readout::default(),
            focus: (0, 0),
            scale: FontScale::default(),
            show_help: false,
        };
        state.refresh_readout();
        state
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            example: self.example,
            address: self.address,
            focus: self.focus,
            readout: self.readout.clone(),
            scale: self.scale,
            show_help: self.show_help,
        }
    }
}
