// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid rasterizer.  Sweeps every pixel of the integral plane,
//! maps it onto the complex region, and asks the divergence test
//! whether the sample's orbit stays bounded.

use itertools::iproduct;
use num::Complex;

use error::JuliaError;
use escape::is_bounded;
use grid::Grid;
use output::ImageSink;
use planes::{check_shape, IntegralPlane, Pixel, PlaneMapper, Region};

/// Everything needed to render one Julia set image.  Once validated
/// these should not change; build a new set for a new picture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Width of the sampled region on the complex plane.
    pub width: f64,
    /// Height of the sampled region on the complex plane.
    pub height: f64,
    /// Number of horizontal samples, which become the grid's rows.
    pub rx: usize,
    /// Number of vertical samples, which become the grid's columns.
    pub ry: usize,
    /// The most iterations tried before a point is called bounded.
    pub iterations: usize,
    /// The escape radius.
    pub radius: f64,
    /// The parameter of the Julia set.
    pub c: Complex<f64>,
}

impl RenderParams {
    /// Builds and validates a parameter set.  Resolutions and the
    /// iteration count must be positive; the region and radius must be
    /// positive and finite; `c` must be finite.
    pub fn new(
        width: f64,
        height: f64,
        rx: usize,
        ry: usize,
        iterations: usize,
        radius: f64,
        c: Complex<f64>,
    ) -> Result<RenderParams, JuliaError> {
        let params = RenderParams {
            width,
            height,
            rx,
            ry,
            iterations,
            radius,
            c,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every precondition.  The fields are public, so the
    /// renderer calls this again rather than trusting its input.
    pub fn validate(&self) -> Result<(), JuliaError> {
        check_shape(self.region(), self.integral_plane())?;
        if self.iterations == 0 {
            return Err(JuliaError::invalid("iteration count must be positive"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(JuliaError::invalid(format!(
                "escape radius must be a positive number, got {}",
                self.radius
            )));
        }
        if !(self.c.re.is_finite() && self.c.im.is_finite()) {
            return Err(JuliaError::invalid(format!(
                "parameter must be finite, got {}",
                self.c
            )));
        }
        Ok(())
    }

    /// The complex region as a `Region`.
    pub fn region(&self) -> Region {
        Region(self.width, self.height)
    }

    /// The resolution as an `IntegralPlane`.
    pub fn integral_plane(&self) -> IntegralPlane {
        IntegralPlane(self.rx, self.ry)
    }
}

/// Renders the Julia set described by a `RenderParams`.  The renderer
/// keeps no state between calls; every `render` builds a fresh grid.
pub struct JuliaRenderer {
    plane: PlaneMapper,
    params: RenderParams,
}

impl JuliaRenderer {
    /// Validates the parameters and precomputes the plane mapping.
    pub fn new(params: RenderParams) -> Result<Self, JuliaError> {
        params.validate()?;
        let plane = PlaneMapper::new(params.region(), params.integral_plane())?;
        Ok(JuliaRenderer { plane, params })
    }

    /// Classify every pixel.  The grid has exactly `rx` rows and `ry`
    /// columns, and is complete when returned.
    pub fn render(&self) -> Grid {
        let IntegralPlane(rows, columns) = self.plane.integral_plane;
        let mut grid = Grid::new(rows, columns);
        for (row, column) in iproduct!(0..rows, 0..columns) {
            let z = self.plane.pixel_to_point(&Pixel(row, column));
            if is_bounded(z, self.params.iterations, self.params.radius, self.params.c) {
                grid.mark(row, column);
            }
        }
        debug!(
            "rendered c = {}: {} of {} samples bounded",
            self.params.c,
            grid.count_bounded(),
            grid.len()
        );
        grid
    }

    /// Render, then hand the finished grid to `sink`.  Nothing is
    /// written unless the whole grid was computed.
    pub fn render_to<S: ImageSink + ?Sized>(&self, sink: &S) -> Result<(), JuliaError> {
        let grid = self.render();
        sink.write(self.params.c, &grid)
    }
}

/// One-shot render of a `width` x `height` region at `rx` x `ry`
/// samples, with `iterations` and `radius` controlling the divergence
/// test for the parameter `c`.
pub fn render(
    width: f64,
    height: f64,
    rx: usize,
    ry: usize,
    iterations: usize,
    radius: f64,
    c: Complex<f64>,
) -> Result<Grid, JuliaError> {
    let params = RenderParams::new(width, height, rx, ry, iterations, radius, c)?;
    Ok(JuliaRenderer::new(params)?.render())
}
