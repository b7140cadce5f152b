//! Host-testable library interface for slushctl.
//!
//! The control core (debounce, appliance state, tick loop) and the
//! pure sensor/formatting helpers live here and compile for the host,
//! so all control logic can be tested without hardware
//! (`cargo test`).
//!
//! The embedded binary (`src/main.rs`, feature `embedded`) wires this
//! core to real GPIO, I²C and SAADC peripherals on an nRF52840.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod error;
pub mod sensor;
pub mod ui;
