//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::OCTET_COUNT;
use crate::messages::ui_events::FocusMove;
use crate::models::{FontScale, Readout, BITS_PER_OCTET};

impl AppState {
    // ========================
    // Bits
    // ========================

    /// Flip one bit and refresh the readout
    pub fn toggle_bit(&mut self, octet: usize, bit: usize) {
        let Some(panel) = self.address.octets.get_mut(octet) else {
            tracing::warn!(octet, bit, "Toggle outside the address ignored");
            return;
        };
        if bit >= BITS_PER_OCTET {
            tracing::warn!(octet, bit, "Toggle outside the octet ignored");
            return;
        }
        panel.toggle(bit);
        let value = panel.decimal_value();
        self.focus = (octet, bit);
        self.refresh_readout();
        tracing::debug!(octet, bit, value, address = %self.address.to_ipv4(), "Bit toggled");
    }

    pub fn toggle_focused(&mut self) {
        let (octet, bit) = self.focus;
        self.toggle_bit(octet, bit);
    }

    pub fn toggle_focused_bit(&mut self, bit: usize) {
        let (octet, _) = self.focus;
        self.toggle_bit(octet, bit);
    }

    /// Clear every octet, then refresh the readout
    pub fn reset_all(&mut self) {
        for panel in self.address.octets.iter_mut() {
            panel.reset();
        }
        tracing::debug!("All bits cleared");
        self.refresh_readout();
    }

    pub fn refresh_readout(&mut self) {
        self.readout = Readout::from_address(&self.address);
        tracing::trace!(readout = %self.readout, "Readout refreshed");
    }

    // ========================
    // Focus
    // ========================

    pub fn move_focus(&mut self, direction: FocusMove) {
        let (octet, bit) = self.focus;
        self.focus = match direction {
            FocusMove::Left => (octet, (bit + BITS_PER_OCTET - 1) % BITS_PER_OCTET),
            FocusMove::Right => (octet, (bit + 1) % BITS_PER_OCTET),
            FocusMove::Up => ((octet + OCTET_COUNT - 1) % OCTET_COUNT, bit),
            FocusMove::Down => ((octet + 1) % OCTET_COUNT, bit),
        };
    }

    // ========================
    // Sizing
    // ========================

    pub fn on_resize(&mut self, width: u32) {
        self.scale = FontScale::for_width(width);
        tracing::debug!(width, control = self.scale.control, readout = self.scale.readout, "Resized");
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
