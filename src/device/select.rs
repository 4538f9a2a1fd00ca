use crate::device::traits::Device;
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Quit,
    Pick(usize),
    OutOfRange,
    NotANumber,
}

fn parse_choice(input: &str, count: usize) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Choice::Pick(n - 1),
        Ok(_) => Choice::OutOfRange,
        Err(_) => Choice::NotANumber,
    }
}

/// Interactive device picker.
///
/// Returns `None` when nothing is connected, the user quits, or input ends.
pub fn select_device<R: BufRead, W: Write>(
    devices: &[Device],
    mut input: R,
    mut out: W,
) -> Result<Option<String>> {
    if devices.is_empty() {
        writeln!(
            out,
            "No devices connected. Please connect an Android device and enable USB debugging."
        )?;
        return Ok(None);
    }

    writeln!(out, "\nConnected devices:")?;
    for (i, device) in devices.iter().enumerate() {
        writeln!(out, "{}. {} ({})", i + 1, device.model, device.serial)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "\nSelect a device (number) or 'q' to quit: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_choice(&line, devices.len()) {
            Choice::Quit => return Ok(None),
            Choice::Pick(idx) => {
                let device = &devices[idx];
                tracing::info!(serial = %device.serial, model = %device.model, "device selected");
                return Ok(Some(device.serial.clone()));
            }
            Choice::OutOfRange => writeln!(out, "Invalid selection. Please try again.")?,
            Choice::NotANumber => writeln!(out, "Please enter a number or 'q'.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn devices() -> Vec<Device> {
        vec![
            Device {
                serial: "emulator-5554".into(),
                model: "sdk_gphone64".into(),
            },
            Device {
                serial: "R58M123ABC".into(),
                model: "SM-G973F".into(),
            },
        ]
    }

    fn run(input: &str) -> (Option<String>, String) {
        let mut out = Vec::new();
        let picked = select_device(&devices(), Cursor::new(input), &mut out).unwrap();
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("q\n", 2), Choice::Quit);
        assert_eq!(parse_choice(" Q ", 2), Choice::Quit);
        assert_eq!(parse_choice("1", 2), Choice::Pick(0));
        assert_eq!(parse_choice("2\n", 2), Choice::Pick(1));
        assert_eq!(parse_choice("0", 2), Choice::OutOfRange);
        assert_eq!(parse_choice("3", 2), Choice::OutOfRange);
        assert_eq!(parse_choice("two", 2), Choice::NotANumber);
        assert_eq!(parse_choice("-1", 2), Choice::NotANumber);
    }

    #[test]
    fn test_lists_and_picks_device() {
        let (picked, out) = run("2\n");
        assert_eq!(picked.as_deref(), Some("R58M123ABC"));
        assert!(out.contains("1. sdk_gphone64 (emulator-5554)"));
        assert!(out.contains("2. SM-G973F (R58M123ABC)"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (picked, out) = run("abc\n7\n1\n");
        assert_eq!(picked.as_deref(), Some("emulator-5554"));
        assert!(out.contains("Please enter a number or 'q'."));
        assert!(out.contains("Invalid selection. Please try again."));
        assert_eq!(out.matches("Select a device").count(), 3);
    }

    #[test]
    fn test_quit_and_eof_select_nothing() {
        assert_eq!(run("q\n").0, None);
        assert_eq!(run("").0, None);
    }

    #[test]
    fn test_no_devices() {
        let mut out = Vec::new();
        let picked = select_device(&[], Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(picked, None);
        assert!(String::from_utf8(out).unwrap().starts_with("No devices connected."));
    }
}
