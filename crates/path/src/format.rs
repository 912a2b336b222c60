//! Fixed-point number formatting for SVG commands.
//!
//! Numbers are printed with a fixed amount of digits after the decimal point.
//! Rounding is performed on the exact decimal expansion of the binary value,
//! with ties rounded away from zero, the same way `Number.prototype.toFixed`
//! behaves in browsers. The standard library's formatter rounds ties to even
//! which would produce different path strings for values like `0.5` or `2.5`.

// Digits printed past the requested precision before rounding by hand. Enough
// to separate a value that is exactly half way between two outputs from the
// values closest to it for every precision up to 20 digits.
const EXTRA_DIGITS: usize = 40;

/// Appends `value` with `digits` digits after the decimal point.
pub(crate) fn write_number(out: &mut String, value: f64, digits: u8) {
    if !value.is_finite() {
        let text = if value.is_nan() {
            "NaN"
        } else if value > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        };
        out.push_str(text);
        return;
    }

    let digits = digits as usize;
    let expanded = format!("{:.*}", digits + EXTRA_DIGITS, value.abs());
    let (integer, fraction) = match expanded.split_once('.') {
        Some(parts) => parts,
        None => (expanded.as_str(), ""),
    };

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    let mut integer_len = integer.len();

    let round_up = fraction
        .as_bytes()
        .get(digits)
        .map_or(false, |&digit| digit >= b'5');
    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            integer_len += 1;
        }
    }

    // -0 is printed without its sign, small negative values keep it.
    if value < 0.0 {
        out.push('-');
    }
    for &digit in &kept[..integer_len] {
        out.push(digit as char);
    }
    if digits > 0 {
        out.push('.');
        for &digit in &kept[integer_len..] {
            out.push(digit as char);
        }
    }
}

/// Formats `value` with `digits` digits after the decimal point.
pub(crate) fn format_number(value: f64, digits: u8) -> String {
    let mut out = String::new();
    write_number(&mut out, value, digits);
    out
}

/// Appends a command letter followed by its space separated arguments.
pub(crate) fn write_command(out: &mut String, command: &str, values: &[f64], digits: u8) {
    out.push_str(command);
    for &value in values {
        out.push(' ');
        write_number(out, value, digits);
    }
}

/// Appends an arc command: `A rx ry rotation large-arc sweep x y`.
pub(crate) fn write_arc_command(
    out: &mut String,
    radii: (f64, f64),
    x_rotation: f64,
    flags: (bool, bool),
    to: (f64, f64),
    digits: u8,
) {
    write_command(out, "A", &[radii.0, radii.1, x_rotation], digits);
    for &flag in &[flags.0, flags.1] {
        out.push(' ');
        out.push(if flag { '1' } else { '0' });
    }
    for &value in &[to.0, to.1] {
        out.push(' ');
        write_number(out, value, digits);
    }
}

#[test]
fn fixed_digits() {
    assert_eq!(format_number(0.0, 3), "0.000");
    assert_eq!(format_number(10.0, 0), "10");
    assert_eq!(format_number(1.23456, 2), "1.23");
    assert_eq!(format_number(-1.23456, 4), "-1.2346");
    assert_eq!(format_number(123.0, 1), "123.0");
    assert_eq!(format_number(1e-7, 3), "0.000");
}

#[test]
fn ties_round_away_from_zero() {
    assert_eq!(format_number(0.5, 0), "1");
    assert_eq!(format_number(1.5, 0), "2");
    assert_eq!(format_number(2.5, 0), "3");
    assert_eq!(format_number(-2.5, 0), "-3");
    assert_eq!(format_number(0.125, 2), "0.13");
    // 1.005 is slightly below 1.005 in binary.
    assert_eq!(format_number(1.005, 2), "1.00");
    // 0.45 is slightly above 0.45 in binary.
    assert_eq!(format_number(0.45, 1), "0.5");
}

#[test]
fn carries() {
    assert_eq!(format_number(9.9996, 3), "10.000");
    assert_eq!(format_number(99.5, 0), "100");
    assert_eq!(format_number(-0.9999, 2), "-1.00");
}

#[test]
fn negative_zero() {
    assert_eq!(format_number(-0.0, 2), "0.00");
    assert_eq!(format_number(-0.0001, 2), "-0.00");
    assert_eq!(format_number(-0.0, 0), "0");
}

#[test]
fn non_finite() {
    assert_eq!(format_number(f64::NAN, 2), "NaN");
    assert_eq!(format_number(f64::INFINITY, 2), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY, 2), "-Infinity");
}

#[test]
fn commands() {
    let mut out = String::new();
    write_command(&mut out, "L", &[1.0, -2.25], 1);
    assert_eq!(out, "L 1.0 -2.3");

    let mut out = String::new();
    write_arc_command(&mut out, (5.0, 4.0), 30.0, (true, false), (1.0, 2.0), 0);
    assert_eq!(out, "A 5 4 30 1 0 1 2");

    let mut out = String::from("M 0 0 ");
    write_arc_command(&mut out, (1.5, 1.0), 0.0, (false, true), (3.0, 0.0), 1);
    assert_eq!(out, "M 0 0 A 1.5 1.0 0.0 0 1 3.0 0.0");
}
