//! Application constants
//!
//! Centralized location for labels, the example address and layout tuning.

use std::net::Ipv4Addr;

/// Window title
pub const APP_TITLE: &str = "Subnetting Educational Tool";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written in the working directory
pub const LOG_FILE: &str = "subnet-tutor.log";

/// Decorative address shown in the header
pub const EXAMPLE_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 0);

/// Number of octet panels
pub const OCTET_COUNT: usize = 4;

/// Positional value of each bit, most significant first
pub const BIT_WEIGHTS: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Smallest control font size
pub const MIN_FONT_SIZE: u16 = 10;

/// Pixels of window width per font size step
pub const WIDTH_PER_FONT_STEP: u32 = 50;

/// Readout is drawn this much larger than the controls
pub const READOUT_FONT_BONUS: u16 = 6;

/// Assumed cell width when the terminal doesn't report its pixel size
pub const FALLBACK_CELL_WIDTH_PX: u32 = 8;

/// Control size at which toggle cells become bordered 3-row buttons
pub const LARGE_CONTROL_SIZE: u16 = 16;

/// Readout size at which the readout box gets padding lines
pub const LARGE_READOUT_SIZE: u16 = 22;

/// Narrowest terminal that still fits the header and a readable octet row
pub const MIN_SCREEN_WIDTH: u16 = 50;
