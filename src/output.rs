// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where finished grids go.  The renderer only knows about the
//! `ImageSink` trait; `PngDirectory` is the sink that puts PNG files
//! in a directory on disk.

use image::png::PNGEncoder;
use image::ColorType;
use num::Complex;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use error::JuliaError;
use grid::Grid;

/// Persists a finished grid for the Julia set with parameter `c`.
pub trait ImageSink {
    /// Store `grid`.  Either the whole image is stored or an error is
    /// returned.
    fn write(&self, c: Complex<f64>, grid: &Grid) -> Result<(), JuliaError>;
}

/// The file name for the Julia set of `c`: the real and imaginary
/// parts in shortest round-trip notation, as in `-0.8_0.156i.png`.
pub fn file_name(c: Complex<f64>) -> String {
    format!("{:?}_{:?}i.png", c.re, c.im)
}

/// Writes one grayscale PNG per grid into a directory, which is
/// created on first use.  The image is `columns` wide and `rows`
/// tall, with bounded cells white and escaped cells black.
#[derive(Clone, Debug)]
pub struct PngDirectory {
    dir: PathBuf,
}

impl PngDirectory {
    /// A sink rooted at `dir`.  Nothing touches the filesystem until
    /// the first write.
    pub fn new<P: Into<PathBuf>>(dir: P) -> PngDirectory {
        PngDirectory { dir: dir.into() }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The full path an image for `c` is written to.
    pub fn path_for(&self, c: Complex<f64>) -> PathBuf {
        self.dir.join(file_name(c))
    }

    /// Create the output directory and any missing parents.  Calling
    /// this on an existing directory is a no-op.
    pub fn ensure_dir(&self) -> Result<(), JuliaError> {
        if !self.dir.is_dir() {
            debug!("creating output directory {}", self.dir.display());
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

impl ImageSink for PngDirectory {
    fn write(&self, c: Complex<f64>, grid: &Grid) -> Result<(), JuliaError> {
        self.ensure_dir()?;
        let path = self.path_for(c);
        write_image(&path, &grid.to_luma(), (grid.columns(), grid.rows()))?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

fn write_image(path: &Path, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let output = File::create(path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}
