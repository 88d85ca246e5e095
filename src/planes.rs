// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane centered on the origin.
use error::JuliaError;
use num::Complex;

/// Describes the number of rows and columns of an integral plane
/// that is assumed to start at 0,0.  Rows are sampled along the
/// horizontal extent of the region, columns along the vertical one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the width and height of a rectangle on the complex
/// plane.  The rectangle is always centered on the origin, so the
/// corners are implied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region(pub f64, pub f64);

/// Describes the row and column of a pixel in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// `count` evenly spaced samples from `start` to `stop`, both ends
/// included.  Each value is computed as `k * step + start` rather than
/// by accumulating the step, and the final value is pinned to `stop`,
/// so the endpoints are exact.  A single sample is just `start`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / ((count - 1) as f64);
            let mut samples: Vec<f64> = (0..count).map(|k| (k as f64) * step + start).collect();
            samples[count - 1] = stop;
            samples
        }
    }
}

/// Rejects shapes that can't be rasterized: empty grids and regions
/// that are degenerate or not finite.
pub fn check_shape(region: Region, plane: IntegralPlane) -> Result<(), JuliaError> {
    if plane.0 == 0 || plane.1 == 0 {
        return Err(JuliaError::invalid(format!(
            "resolution must be positive in both directions, got {}x{}",
            plane.0, plane.1
        )));
    }
    if !(region.0.is_finite() && region.0 > 0.0) {
        return Err(JuliaError::invalid(format!(
            "region width must be a positive number, got {}",
            region.0
        )));
    }
    if !(region.1.is_finite() && region.1 > 0.0) {
        return Err(JuliaError::invalid(format!(
            "region height must be a positive number, got {}",
            region.1
        )));
    }
    Ok(())
}

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps pixels from the first
/// into points on the second.
///
/// The mapping is the transposed one: pixel `(i, j)` becomes the
/// complex number whose real part is the `j`th vertical sample and
/// whose imaginary part is the `i`th horizontal sample.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The number of rows and columns of the integral plane.
    pub integral_plane: IntegralPlane,
    /// The width and height of the complex region.
    pub region: Region,
    // Horizontal samples, one per row.
    xs: Vec<f64>,
    // Vertical samples, one per column.
    ys: Vec<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes a region describing the complex plane and
    /// the resolution of the integral plane, and precomputes the
    /// samples along each axis.
    pub fn new(region: Region, integral_plane: IntegralPlane) -> Result<PlaneMapper, JuliaError> {
        check_shape(region, integral_plane)?;
        let (half_width, half_height) = (region.0 / 2.0, region.1 / 2.0);
        Ok(PlaneMapper {
            integral_plane,
            region,
            xs: linspace(-half_width, half_width, integral_plane.0),
            ys: linspace(-half_height, half_height, integral_plane.1),
        })
    }

    /// The horizontal samples, indexed by row.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The vertical samples, indexed by column.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Given a pixel on the integral plane, return the complex number
    /// sampled for it.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.ys[pixel.1], self.xs[pixel.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_pins_both_ends() {
        let xs = linspace(-1.5, 1.5, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], -1.5);
        assert_eq!(xs[9], 1.5);
        assert_eq!(xs[3], -0.5);
        assert_eq!(xs[6], 0.5);
    }

    #[test]
    fn linspace_uses_multiplied_steps() {
        // These are the values k * step + start produces, which differ
        // in the last bits from accumulating the step.
        let xs = linspace(-1.5, 1.5, 10);
        assert_eq!(xs[1], -1.1666666666666667);
        assert_eq!(xs[4], -0.16666666666666674);
        assert_eq!(xs[5], 0.16666666666666652);
        assert_eq!(xs[7], 0.833333333333333);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(-1.0, 1.0, 0).is_empty());
        assert_eq!(linspace(-1.0, 1.0, 1), vec![-1.0]);
        assert_eq!(linspace(-1.0, 1.0, 2), vec![-1.0, 1.0]);
        assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn planemapper_fails_on_bad_shape() {
        assert!(PlaneMapper::new(Region(3.0, 3.0), IntegralPlane(0, 4)).is_err());
        assert!(PlaneMapper::new(Region(3.0, 3.0), IntegralPlane(4, 0)).is_err());
        assert!(PlaneMapper::new(Region(0.0, 3.0), IntegralPlane(4, 4)).is_err());
        assert!(PlaneMapper::new(Region(3.0, -1.0), IntegralPlane(4, 4)).is_err());
        assert!(PlaneMapper::new(Region(std::f64::NAN, 3.0), IntegralPlane(4, 4)).is_err());
        assert!(PlaneMapper::new(Region(3.0, std::f64::INFINITY), IntegralPlane(4, 4)).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(Region(3.0, 4.0), IntegralPlane(750, 1000)).unwrap();
        assert_eq!(pm.xs().len(), 750);
        assert_eq!(pm.ys().len(), 1000);
    }

    #[test]
    fn pixel_to_point_swaps_the_axes() {
        // Rows walk the imaginary axis over [-l/2, l/2], columns walk
        // the real axis over [-h/2, h/2].
        let pm = PlaneMapper::new(Region(2.0, 4.0), IntegralPlane(3, 5)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 0)), Complex::new(-2.0, 1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 4)), Complex::new(2.0, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(1, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 3)), Complex::new(1.0, 1.0));
    }

    #[test]
    fn single_pixel_samples_the_lower_corner() {
        let pm = PlaneMapper::new(Region(3.0, 3.0), IntegralPlane(1, 1)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.5, -1.5));
    }
}
