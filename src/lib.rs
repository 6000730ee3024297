//! # Subnet Tutor
//!
//! A terminal widget for learning how IPv4 octets map between binary and decimal.
//!
//! ## Features
//! - Four octet panels of 8 toggle cells each (mouse or keyboard)
//! - Live binary and decimal readout of the full address
//! - Decorative example address header (192.168.1.0)
//! - Clear control to reset every bit
//! - Control and readout sizes that follow the window width
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)

pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{Address, FontScale, OctetPanel, Readout};
pub use messages::{UiEvent, RenderState};
pub use app::{AppState, AppActor};
