//! USB HID report output.
//!
//! The poll loop never waits on USB. It hands reports to a [`ReportSlot`]
//! through a [`SlotTransport`](slider_core::SlotTransport), which refuses while a previous report is
//! still in flight. [`UsbHidOutput::run`] writes the slot's report to the
//! interrupt IN endpoint and marks the slot free again once the transfer
//! completes.

use defmt::{debug, error, info};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use slider_core::{Report, ReportSlot};

/// USB driver type for this board.
pub type UsbDriver = Driver<'static, USB>;

/// HID writer sized for one report.
pub type ReportWriter = HidWriter<'static, UsbDriver, { Report::SIZE }>;

/// HID Joystick Report Descriptor.
///
/// This descriptor defines a joystick with:
/// - X axis (horizontal slider, unsigned 8-bit)
/// - Y axis (vertical slider, unsigned 8-bit)
///
/// Used unless `vendor-hid` is selected.
#[cfg(not(feature = "vendor-hid"))]
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x04, // Usage (Joystick)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    // --- Sliders ---
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x00, //     Logical Minimum (0)
    0x26, 0xFF, 0x00, //     Logical Maximum (255)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    //
    0xC0, //   End Collection
    0xC0, // End Collection
];

/// Vendor-defined generic HID Report Descriptor.
///
/// Two opaque input bytes `[x, y]` for hosts that talk to the device
/// through a generic HID API rather than as a game controller.
#[cfg(feature = "vendor-hid")]
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x06, 0x00, 0xFF, // Usage Page (Vendor Defined 0xFF00)
    0x09, 0x01, // Usage (Vendor Usage 1)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x02, //   Usage (Vendor Usage 2)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x02, //   Report Count (2)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0xC0, // End Collection
];

/// Endpoint-side half of the USB output.
///
/// Wraps an embassy-usb HID writer and drains the [`ReportSlot`].
pub struct UsbHidOutput {
    writer: ReportWriter,
}

impl UsbHidOutput {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: ReportWriter) -> Self {
        Self { writer }
    }

    /// Write reports from `slot` forever.
    ///
    /// The slot is opened once the host has configured the device and
    /// reopened after each transfer, whether or not it succeeded.
    pub async fn run(&mut self, slot: &ReportSlot) -> ! {
        self.writer.ready().await;
        info!("USB HID ready, reporting slider positions...");
        slot.release();

        loop {
            let report = slot.take().await;
            match self.writer.write(&report.as_bytes()).await {
                Ok(()) => debug!("Report written: {:?}", report),
                Err(e) => error!("Endpoint write error: {:?}", e),
            }
            slot.release();
        }
    }
}

/// HID request handler (handles SET_REPORT, etc.).
///
/// Currently a no-op handler since we don't handle output reports.
pub struct JoystickRequestHandler;

impl RequestHandler for JoystickRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid(
    builder: &mut Builder<'static, UsbDriver>,
    state: &'static mut State<'static>,
    request_handler: &'static mut JoystickRequestHandler,
) -> ReportWriter {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: Some(request_handler as &mut dyn RequestHandler),
        poll_ms: 1,
        max_packet_size: 8,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
