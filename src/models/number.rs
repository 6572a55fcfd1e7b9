use std::fmt;

/// Magnitude from which values switch to exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which non-zero values switch to exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Displays a computed measurement the way the demos print numbers:
/// whole values without a fractional part, `Infinity` for overflow, a
/// plain `0` for negative zero, and `1e+21` / `1e-7` style exponents for
/// very large or very small magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure(pub f64);

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            write!(f, "NaN")
        } else if value.is_infinite() {
            write!(f, "{}", if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            write!(f, "0")
        } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
            write_exponent(f, value)
        } else {
            write!(f, "{}", value)
        }
    }
}

// `{:e}` gives the shortest mantissa but omits the `+` on positive exponents
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => write!(f, "{}", formatted),
    }
}
