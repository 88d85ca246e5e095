// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by the renderer, the image sinks and the
//! batch runner.

use failure::Fail;
use std::io;

/// Everything that can go wrong while producing a Julia set image.
/// There are only two ways to fail: the numbers we were handed make
/// no sense, or the filesystem refused to take the result.
#[derive(Debug, Fail)]
pub enum JuliaError {
    /// Creating the output directory or writing the image failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// A render parameter violated its precondition (zero resolution,
    /// non-positive region or radius, zero iterations, non-finite
    /// values, unknown scenario names).
    #[fail(display = "Invalid parameter: {}", _0)]
    InvalidParameter(String),
}

impl JuliaError {
    /// Shorthand for building an `InvalidParameter` out of anything
    /// string-like.
    pub fn invalid<S: Into<String>>(message: S) -> JuliaError {
        JuliaError::InvalidParameter(message.into())
    }
}

impl From<io::Error> for JuliaError {
    fn from(err: io::Error) -> JuliaError {
        JuliaError::Io(err)
    }
}
