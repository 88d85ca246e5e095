#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is defined by a single fixed complex parameter `c`.
//! Every point `z` on the complex plane is repeatedly squared and
//! shifted by `c`; the points whose orbit stays within some radius,
//! no matter how long we iterate, belong to the filled Julia set and
//! the boundary of that region is the Julia set proper.
//!
//! We can't iterate forever, so membership is approximated: a point
//! that survives `n` iterations without its magnitude reaching the
//! escape radius `p` is called bounded.  Sweeping a rectangle of the
//! plane at a given pixel resolution and marking each bounded sample
//! with a 1 produces a binary grid, which is then written out as a
//! black and white image.
//!
//! The pixel sweep keeps an old and deliberate quirk: the sample for
//! row `i` and column `j` takes its *real* part from the vertical
//! sequence and its *imaginary* part from the horizontal one, so the
//! picture comes out transposed and flipped relative to the usual
//! mathematical orientation.  Images produced by earlier versions of
//! this program depend on that orientation.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
#[macro_use]
extern crate tracing;

pub mod error;
pub mod escape;
pub mod grid;
pub mod output;
pub mod parse;
pub mod planes;
pub mod render;
pub mod scenario;

pub use error::JuliaError;
pub use escape::{escape_time, is_bounded};
pub use grid::Grid;
pub use output::{file_name, ImageSink, PngDirectory};
pub use planes::{linspace, IntegralPlane, Pixel, PlaneMapper, Region};
pub use render::{render, JuliaRenderer, RenderParams};
pub use scenario::{examples, run_batch, run_scenario, select, Scenario};
