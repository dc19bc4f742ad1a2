#![no_std]
#![no_main]

use defmt::{error, info, trace};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::{Duration, Ticker, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use slider_joystick::board;
use slider_joystick::{
    configure_usb_hid, BoardJoystick, FaultEdge, FaultLatch, JoystickRequestHandler, PollOutcome,
    ReportSlot, SlotTransport, UsbDriver, UsbHidOutput, LED_HOLD_MS, POLL_PERIOD_MS,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Hand-off slot between the poll task and the USB output task.
static REPORT_SLOT: ReportSlot = ReportSlot::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();
static REQUEST_HANDLER: StaticCell<JoystickRequestHandler> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Slider joystick starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Slider Setup ---
    let vertical = [
        Input::new(p.PIN_0, Pull::Up),
        Input::new(p.PIN_1, Pull::Up),
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
    ];
    let horizontal = [
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_17, Pull::Up),
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
        Input::new(p.PIN_23, Pull::Up),
    ];
    let mode = Input::new(p.PIN_32, Pull::Up);
    let sliders = board::sliders(vertical, horizontal, mode);

    // --- LED Setup (active low, start dark) ---
    let leds = board::leds([
        Output::new(p.PIN_24, Level::High),
        Output::new(p.PIN_25, Level::High),
        Output::new(p.PIN_26, Level::High),
        Output::new(p.PIN_27, Level::High),
        Output::new(p.PIN_28, Level::High),
        Output::new(p.PIN_29, Level::High),
        Output::new(p.PIN_30, Level::High),
        Output::new(p.PIN_31, Level::High),
    ]);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0001); // pid.codes test VID/PID
    usb_config.manufacturer = Some("Rust Joystick");
    usb_config.product = Some("Dual Slider Joystick");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let request_handler = REQUEST_HANDLER.init(JoystickRequestHandler);
    let hid_writer = configure_usb_hid(&mut builder, hid_state, request_handler);

    // Build the USB device
    let usb_device = builder.build();

    let usb_output = UsbHidOutput::new(hid_writer);
    let joystick = board::joystick(sliders, SlotTransport::new(&REPORT_SLOT), leds);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(output_task(usb_output, &REPORT_SLOT).unwrap());
    spawner.spawn(poll_task(joystick).unwrap());

    info!("Slider joystick initialized, polling every {} ms", POLL_PERIOD_MS);
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, UsbDriver>) {
    device.run().await;
}

/// Output task - writes each accepted report to the HID endpoint and frees
/// the slot when the transfer is done.
#[embassy_executor::task]
async fn output_task(mut output: UsbHidOutput, slot: &'static ReportSlot) {
    output.run(slot).await;
}

/// Poll task - samples the sliders once per tick and drives LEDs or reports.
#[embassy_executor::task]
async fn poll_task(mut joystick: BoardJoystick) {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    let mut led_fault = FaultLatch::new();

    loop {
        let result = joystick.poll();
        match led_fault.update(&result) {
            Some(FaultEdge::Raised(e)) => error!("LED write error: {:?}", e),
            Some(FaultEdge::Cleared) => info!("LED bank recovered"),
            None => {}
        }
        match result {
            Ok(PollOutcome::LedFeedback(mask)) if !mask.is_empty() => {
                trace!("LED test mask: {:?}", mask);
                // Hold the mask long enough to be visible
                Timer::after_millis(LED_HOLD_MS).await;
                ticker.reset();
            }
            Ok(outcome) => trace!("Poll: {:?}", outcome),
            Err(_) => {}
        }
        ticker.next().await;
    }
}
