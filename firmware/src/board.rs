//! Board wiring and timing.
//!
//! | Function          | GPIO     | Level                         |
//! |-------------------|----------|-------------------------------|
//! | Vertical slider   | 0 - 11   | pulled up, low = touched      |
//! | Horizontal slider | 12 - 23  | pulled up, low = touched      |
//! | LED bank          | 24 - 31  | low = lit                     |
//! | Mode select       | 32       | pulled up, low = LED test     |
//!
//! Segment `i` of each slider is wired to the `i`-th GPIO of its range, and
//! LED `i` of the bank to GPIO `24 + i`.

use embassy_rp::gpio::{Input, Output};
use embedded_hal::digital::PinState;
use slider_core::{JoystickConfig, PinLedBank, PinSliderSource, SliderJoystick, SlotTransport};

/// Interval between polls. One USB full-speed frame.
pub const POLL_PERIOD_MS: u64 = 1;

/// How long a non-empty LED test mask stays up before the next poll.
pub const LED_HOLD_MS: u64 = 10;

/// Slider orientation for this build.
#[cfg(feature = "native-orientation")]
pub const ORIENTATION: JoystickConfig = JoystickConfig::NATIVE;

/// Slider orientation for this build.
#[cfg(not(feature = "native-orientation"))]
pub const ORIENTATION: JoystickConfig = JoystickConfig::REVERSED;

/// Slider and mode inputs.
pub type BoardSliders = PinSliderSource<Input<'static>>;

/// LED bank outputs.
pub type BoardLeds = PinLedBank<Output<'static>>;

/// The joystick as wired on this board.
pub type BoardJoystick = SliderJoystick<BoardSliders, SlotTransport<'static>, BoardLeds>;

/// Build the slider source. The mode pin selects test mode when pulled low.
#[must_use]
pub fn sliders(
    vertical: [Input<'static>; 12],
    horizontal: [Input<'static>; 12],
    mode: Input<'static>,
) -> BoardSliders {
    PinSliderSource::new(vertical, horizontal, mode, PinState::Low)
}

/// Build the LED bank. LEDs are lit by driving their pin low.
#[must_use]
pub fn leds(pins: [Output<'static>; 8]) -> BoardLeds {
    PinLedBank::new(pins, PinState::Low)
}

/// Assemble the joystick from its parts.
#[must_use]
pub fn joystick(
    sliders: BoardSliders,
    transport: SlotTransport<'static>,
    leds: BoardLeds,
) -> BoardJoystick {
    SliderJoystick::with_config(sliders, transport, leds, ORIENTATION)
}
