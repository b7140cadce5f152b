//! User interface subsystem - OLED status screen.
//!
//! `view` builds the exact text lines for a frame and is pure (host
//! tested); `display` pushes them to the SSD1306 over I²C and only
//! exists in embedded builds.

pub mod view;

#[cfg(feature = "embedded")]
pub mod display;
