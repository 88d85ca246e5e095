extern crate image;
extern crate juliaset;
extern crate num;
extern crate tempfile;

use juliaset::{file_name, render, ImageSink, JuliaError, PngDirectory};
use num::Complex;
use std::fs;

#[test]
fn creates_missing_directories_and_writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("Images_Julia");
    let sink = PngDirectory::new(&out);
    let c = Complex::new(0.0, 0.0);
    let grid = render(3.0, 3.0, 10, 7, 50, 1e10, c).unwrap();

    sink.write(c, &grid).unwrap();

    let path = out.join("0.0_0.0i.png");
    assert!(path.is_file());
    let img = image::open(&path).unwrap().to_luma();
    // Rows of the grid are rows of the image.
    assert_eq!(img.dimensions(), (7, 10));
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let expected = if grid.get(row, column) == 1 { 255 } else { 0 };
            assert_eq!(img.get_pixel(column as u32, row as u32).0[0], expected);
        }
    }
}

#[test]
fn existing_directory_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let sink = PngDirectory::new(dir.path());
    sink.ensure_dir().unwrap();
    sink.ensure_dir().unwrap();
    let c = Complex::new(-1.0, 0.0);
    sink.write(c, &render(3.0, 4.0, 6, 8, 20, 1e10, c).unwrap()).unwrap();
    assert!(dir.path().join(file_name(c)).is_file());
    assert!(dir.path().join("-1.0_0.0i.png").is_file());
}

#[test]
fn writing_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = PngDirectory::new(dir.path().join("first"));
    let second = PngDirectory::new(dir.path().join("second"));
    let c = Complex::new(0.285, 0.013);

    first.write(c, &render(3.0, 3.0, 32, 32, 100, 1e10, c).unwrap()).unwrap();
    second.write(c, &render(3.0, 3.0, 32, 32, 100, 1e10, c).unwrap()).unwrap();

    let a = fs::read(first.path_for(c)).unwrap();
    let b = fs::read(second.path_for(c)).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn a_file_in_the_way_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("Images_Julia");
    fs::write(&blocker, b"not a directory").unwrap();
    let sink = PngDirectory::new(&blocker);
    let c = Complex::new(0.0, 0.0);
    match sink.write(c, &render(3.0, 3.0, 4, 4, 10, 1e10, c).unwrap()) {
        Err(JuliaError::Io(_)) => {}
        other => panic!("expected an I/O error, got {:?}", other),
    }
}
