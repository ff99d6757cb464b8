//! Integration tests for quad-uart.
//!
//! Drives a complete terminal session against the mock register bus: the
//! kind of prompt/read/respond loop a command processor builds on top of
//! this driver.

use quad_uart::{MockBus, PARITY_NONE, Serial, ansi, format_u16, parse_u16};

#[test]
fn full_terminal_session() {
    let mut serial = Serial::new(MockBus::new());
    serial
        .init(0, 9600, 8, PARITY_NONE, 1)
        .expect("valid configuration");

    serial.clear_screen(0);
    serial.set_color(0, ansi::color::CYAN);
    serial.put_str(0, "baud> ");

    // Remote side types "96o00" and fixes the typo with a backspace pair.
    serial
        .bus_mut()
        .push_input(0, b"96o\x08\x08600\x08\x0800\r");
    let mut line = [0u8; 32];
    let len = serial.read_line(0, &mut line);
    assert_eq!(&line[..len], b"9600");

    let value = parse_u16(core::str::from_utf8(&line[..len]).unwrap());
    assert_eq!(value, 9600);

    let mut out = [0u8; 16];
    serial.put_str(0, "rate set to ");
    serial.put_str(0, format_u16(value, 10, &mut out));

    let output = serial.bus().output(0);
    let mut expected = Vec::new();
    expected.extend_from_slice(b"\x1b[2J\x1b[H");
    expected.extend_from_slice(b"\x1b[36m");
    expected.extend_from_slice(b"baud> ");
    expected.extend_from_slice(b"96o\x08 \x08\x08 \x08600\x08 \x08\x08 \x0800\n");
    expected.extend_from_slice(b"rate set to 9600");
    assert_eq!(output, expected.as_slice());
}

#[test]
fn two_channels_run_independent_sessions() {
    let mut serial = Serial::new(MockBus::new());
    serial.init(0, 115_200, 8, PARITY_NONE, 1).unwrap();
    serial.init(3, 9600, 7, PARITY_NONE, 2).unwrap();

    serial.bus_mut().push_input(0, b"first\r");
    serial.bus_mut().push_input(3, b"second\r");

    let mut line = [0u8; 16];
    let len = serial.read_line(0, &mut line);
    assert_eq!(&line[..len], b"first");
    let len = serial.read_line(3, &mut line);
    assert_eq!(&line[..len], b"second");

    assert_eq!(serial.bus().output(0), b"first\n");
    assert_eq!(serial.bus().output(3), b"second\n");
}
