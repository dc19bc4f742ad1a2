//! Dual touch-slider USB joystick for RP2350B.
//!
//! This crate provides the embedded side of the slider joystick: board
//! wiring, the USB HID output and the report hand-off between the poll
//! loop and the USB endpoint.
//!
//! # Overview
//!
//! The firmware runs on an RP2350B (48 GPIOs) and, once per USB frame:
//! 1. Samples the vertical and horizontal 12-segment sliders
//! 2. Decodes each to a segment index and maps it to an axis value
//! 3. Either shows the dominant slider on the 8-LED bank (test mode) or
//!    sends the `[x, y]` report to the host when it has changed
//!
//! See [`board`] for the pin assignment.
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three concurrent tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Poll Task**: Runs [`SliderJoystick::poll`] on a fixed tick
//! - **Output Task**: Writes accepted reports to the HID endpoint
//!
//! The poll task never waits on USB. Reports pass through a single
//! [`ReportSlot`]: the poll task may fill it only while it is free, and the
//! output task frees it after each transfer. A report that cannot be
//! handed over is offered again on the next tick.
//!
//! # Modules
//!
//! - [`board`]: Pin wiring, timing and orientation ([`BoardJoystick`])
//! - [`usb_output`]: USB HID output ([`UsbHidOutput`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`joystick-hid`** (default): HID joystick descriptor (X/Y, 0-255)
//! - **`vendor-hid`**: Vendor-defined 2-byte generic HID descriptor
//! - **`native-orientation`**: Count segments from the bit 0 end of each slider
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`slider_core`] that the
//! binary needs, so it only has to depend on this crate.

#![no_std]

// Ensure mutually exclusive HID descriptor features
#[cfg(all(feature = "joystick-hid", feature = "vendor-hid"))]
compile_error!("Cannot enable both `joystick-hid` and `vendor-hid` features - they define conflicting HID descriptors");

// Re-export core types for convenience
pub use slider_core::{
    FaultEdge, FaultLatch, GateOutcome, JoystickConfig, LedMask, OutputError, PollOutcome, Report,
    ReportSlot, SliderJoystick, SlotTransport,
};

pub mod board;
pub mod usb_output;

pub use board::{BoardJoystick, LED_HOLD_MS, POLL_PERIOD_MS};
pub use usb_output::{configure_usb_hid, JoystickRequestHandler, UsbDriver, UsbHidOutput};
