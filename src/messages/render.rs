//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::EXAMPLE_ADDRESS;
use crate::models::{Address, FontScale, Readout};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Header
    pub example: Address,

    // Octet panels
    pub address: Address,
    /// Focused cell as (octet, bit)
    pub focus: (usize, usize),

    // Readout
    pub readout: Readout,

    // Sizing
    pub scale: FontScale,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let address = Address::new();
        RenderState {
            example: Address::from(EXAMPLE_ADDRESS),
            readout: Readout::from_address(&address),
            address,
            focus: (0, 0),
            scale: FontScale::default(),
            show_help: false,
        }
    }
}
