// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small parsers and argument validators shared by the command line
//! front ends.

use num::Complex;
use std::str::FromStr;

/// Splits `s` at the first `separator` and parses both halves, as in
/// `750x1000` or `-0.8,0.156`.  Anything unparseable on either side
/// gives `None`.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let mut halves = s.splitn(2, separator);
    let first = halves.next()?.parse().ok()?;
    let second = halves.next()?.parse().ok()?;
    Some((first, second))
}

/// A comma separated pair read as real and imaginary parts.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

/// Clap validator for a separated pair.
pub fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    parse_pair::<T>(s, separator)
        .map(|_| ())
        .ok_or_else(|| err.to_string())
}

/// Clap validator for an integer within `low..=high`; `nan_err` is
/// reported for text that isn't a number at all, `range_err` for a
/// number outside the bounds.
pub fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    nan_err: &str,
    range_err: &str,
) -> Result<(), String> {
    let value = s.parse::<T>().map_err(|_| nan_err.to_string())?;
    if value < low || value > high {
        return Err(range_err.to_string());
    }
    Ok(())
}

/// Clap validator for a strictly positive, finite float.
pub fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() && f > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}
