use std::fmt;
use std::net::Ipv4Addr;

use crate::constants::{
    BIT_WEIGHTS, FALLBACK_CELL_WIDTH_PX, MIN_FONT_SIZE, OCTET_COUNT, READOUT_FONT_BONUS,
    WIDTH_PER_FONT_STEP,
};

/// Number of bits in one octet
pub const BITS_PER_OCTET: usize = 8;

/// One octet of the address: 8 bits, index 0 is the most significant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctetPanel {
    bits: [bool; BITS_PER_OCTET],
}

impl OctetPanel {
    /// Build a panel holding the 8-bit expansion of `value`
    pub fn from_value(value: u8) -> Self {
        let mut bits = [false; BITS_PER_OCTET];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = value & (1 << (7 - i)) != 0;
        }
        OctetPanel { bits }
    }

    /// Flip the bit at `index`. The owner is responsible for refreshing its readout.
    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < BITS_PER_OCTET, "bit index out of range: {index}");
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Clear every bit. Does not refresh the owner's readout.
    pub fn reset(&mut self) {
        self.bits = [false; BITS_PER_OCTET];
    }

    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub fn decimal_value(&self) -> u8 {
        self.bits
            .iter()
            .zip(BIT_WEIGHTS)
            .filter(|(set, _)| **set)
            .map(|(_, weight)| weight)
            .sum()
    }

    pub fn binary_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

/// The four editable octets, in address order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub octets: [OctetPanel; OCTET_COUNT],
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimal(&self) -> String {
        self.octets
            .iter()
            .map(|o| o.decimal_value().to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn binary(&self) -> String {
        self.octets
            .iter()
            .map(OctetPanel::binary_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets.map(|o| o.decimal_value());
        Ipv4Addr::new(a, b, c, d)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            octets: addr.octets().map(OctetPanel::from_value),
        }
    }
}

/// Combined binary/decimal text of the full address
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    pub binary: String,
    pub decimal: String,
}

impl Readout {
    pub fn from_address(address: &Address) -> Self {
        Readout {
            binary: address.binary(),
            decimal: address.decimal(),
        }
    }

    pub fn binary_line(&self) -> String {
        format!("Binary: {}", self.binary)
    }

    pub fn decimal_line(&self) -> String {
        format!("Decimal: {}", self.decimal)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.binary_line(), self.decimal_line())
    }
}

/// Sizes derived from the window width on every resize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontScale {
    /// Size of the toggle cells and bit labels
    pub control: u16,
    /// Size of the address readout
    pub readout: u16,
}

impl FontScale {
    /// `max(10, floor(width / 50))` for controls, plus 6 for the readout
    pub fn for_width(width: u32) -> Self {
        let derived = u16::try_from(width / WIDTH_PER_FONT_STEP).unwrap_or(u16::MAX);
        let control = derived.max(MIN_FONT_SIZE);
        FontScale {
            control,
            readout: control.saturating_add(READOUT_FONT_BONUS),
        }
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::for_width(0)
    }
}

/// Window width in pixels: the reported pixel width, or an estimate from columns
pub fn window_width_px(columns: u16, pixel_width: u16) -> u32 {
    if pixel_width > 0 {
        u32::from(pixel_width)
    } else {
        u32::from(columns) * FALLBACK_CELL_WIDTH_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with(indices: &[usize]) -> OctetPanel {
        let mut panel = OctetPanel::default();
        for &i in indices {
            panel.toggle(i);
        }
        panel
    }

    #[test]
    fn test_new_panel_is_zero() {
        let panel = OctetPanel::default();
        assert_eq!(panel.decimal_value(), 0);
        assert_eq!(panel.binary_string(), "00000000");
    }

    #[test]
    fn test_weights() {
        for (i, weight) in BIT_WEIGHTS.iter().enumerate() {
            assert_eq!(panel_with(&[i]).decimal_value(), *weight);
        }
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut panel = panel_with(&[1, 4, 6]);
        let before = panel.decimal_value();
        for i in 0..BITS_PER_OCTET {
            panel.toggle(i);
            panel.toggle(i);
            assert_eq!(panel.decimal_value(), before);
        }
    }

    #[test]
    fn test_toggle_sequence_counts_odd_occurrences() {
        // 0 three times, 3 twice, 7 once
        let panel = panel_with(&[0, 3, 7, 0, 3, 0]);
        assert_eq!(panel.decimal_value(), 128 + 1);
        assert_eq!(panel.binary_string(), "10000001");
    }

    #[test]
    fn test_binary_string_shape_for_every_value() {
        for d in 0..=255u8 {
            let s = OctetPanel::from_value(d).binary_string();
            assert_eq!(s.len(), 8);
            assert!(s.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(s, format!("{:08b}", d));
        }
    }

    #[test]
    fn test_round_trip_via_toggles() {
        for d in 0..=255u8 {
            let mut panel = OctetPanel::default();
            for i in 0..BITS_PER_OCTET {
                if d & (1 << (7 - i)) != 0 {
                    panel.toggle(i);
                }
            }
            assert_eq!(panel.decimal_value(), d);
            assert_eq!(panel, OctetPanel::from_value(d));
        }
    }

    #[test]
    fn test_reset_from_all_ones() {
        let mut panel = panel_with(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(panel.decimal_value(), 255);
        panel.reset();
        assert_eq!(panel.decimal_value(), 0);
        assert_eq!(panel.binary_string(), "00000000");
    }

    #[test]
    fn test_address_forms() {
        let address = Address::from(Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(address.decimal(), "192.168.1.0");
        assert_eq!(address.binary(), "11000000.10101000.00000001.00000000");
        assert_eq!(address.to_ipv4(), Ipv4Addr::new(192, 168, 1, 0));
    }

    #[test]
    fn test_readout_display() {
        let readout = Readout::from_address(&Address::new());
        assert_eq!(
            readout.to_string(),
            "Binary: 00000000.00000000.00000000.00000000 / Decimal: 0.0.0.0"
        );
    }

    #[test]
    fn test_font_scale() {
        assert_eq!(FontScale::for_width(400).control, 10);
        assert_eq!(FontScale::for_width(1000).control, 20);
        assert_eq!(FontScale::for_width(1000).readout, 26);
        assert_eq!(FontScale::for_width(549).control, 10);
        assert_eq!(FontScale::for_width(550).control, 11);
        assert_eq!(FontScale::default(), FontScale { control: 10, readout: 16 });
    }

    #[test]
    fn test_window_width_px() {
        assert_eq!(window_width_px(120, 1450), 1450);
        assert_eq!(window_width_px(120, 0), 960);
    }
}
