// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The divergence test.  Given a starting point, iterate `z = z² + c`
//! and watch whether the magnitude of `z` ever reaches the escape
//! radius.

use num::Complex;

/// Iterate `z = z * z + c` starting at `start`, at most `limit`
/// times, and return the number of iterations actually performed.
/// The magnitude check comes *before* each step, so a starting point
/// already at or beyond `radius` returns 0.  A return value equal to
/// `limit` means the orbit never escaped.
///
/// The magnitude is the true modulus (`hypot(re, im)`), not its
/// square; comparing squared values against `radius * radius` rounds
/// differently at the boundary.
#[inline]
pub fn escape_time(start: Complex<f64>, limit: usize, radius: f64, c: Complex<f64>) -> usize {
    let mut z = start;
    let mut i = 0;
    while i < limit && z.norm() < radius {
        z = z * z + c;
        i += 1;
    }
    i
}

/// True if the orbit of `start` survives all `limit` iterations
/// without its magnitude reaching `radius`.  With a `limit` of zero
/// the loop never runs and every point is vacuously bounded.
///
/// This is only an approximation of membership in the filled Julia
/// set: a larger `limit` sharpens the edges, a larger `radius` delays
/// the verdict on escaping points until they have really gone off to
/// infinity.
#[inline]
pub fn is_bounded(start: Complex<f64>, limit: usize, radius: f64, c: Complex<f64>) -> bool {
    escape_time(start, limit, radius, c) == limit
}
