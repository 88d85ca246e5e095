extern crate juliaset;
extern crate num;

use juliaset::{render, JuliaRenderer, RenderParams};
use num::Complex;

fn expect(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn c_zero_fills_the_unit_disk() {
    // Not all ones: samples with |z| > 1 run off to infinity under z².
    let grid = render(3.0, 3.0, 10, 10, 50, 1e10, Complex::new(0.0, 0.0)).unwrap();
    assert_eq!(
        format!("{}", grid),
        expect(&[
            "0000000000",
            "0000000000",
            "0001111000",
            "0011111100",
            "0011111100",
            "0011111100",
            "0011111100",
            "0001111000",
            "0000000000",
            "0000000000",
        ])
    );
    assert_eq!(grid.count_bounded(), 32);
}

#[test]
fn c_minus_one_on_a_tall_region() {
    let grid = render(3.0, 4.0, 8, 6, 100, 1e10, Complex::new(-1.0, 0.0)).unwrap();
    assert_eq!(
        format!("{}", grid),
        expect(&[
            "000000", "000000", "000000", "001100", "001100", "000000", "000000", "000000",
        ])
    );
}

#[test]
fn non_square_grid_keeps_the_swapped_orientation() {
    // Rows walk the imaginary axis and columns the real axis; the
    // picture is not symmetric, so a transposed or flipped sweep
    // would not match.
    let grid = render(3.0, 3.0, 9, 12, 100, 1e10, Complex::new(0.3, 0.5)).unwrap();
    assert_eq!(
        format!("{}", grid),
        expect(&[
            "000000000000",
            "000001000000",
            "000001011000",
            "000001100000",
            "000001100000",
            "000001100000",
            "000110100000",
            "000000100000",
            "000000000000",
        ])
    );
}

#[test]
fn dragon_fixture() {
    let grid = render(3.0, 4.0, 6, 8, 100, 1e10, Complex::new(-0.8, 0.156)).unwrap();
    assert_eq!(
        format!("{}", grid),
        expect(&[
            "00000000", "00000000", "00101100", "00110100", "00000000", "00000000",
        ])
    );
}

#[test]
fn rendering_twice_gives_the_same_grid() {
    let params = RenderParams::new(3.0, 3.0, 40, 30, 100, 1e10, Complex::new(-0.4, 0.6)).unwrap();
    let renderer = JuliaRenderer::new(params).unwrap();
    assert_eq!(renderer.render(), renderer.render());
    assert_eq!(
        renderer.render(),
        JuliaRenderer::new(params).unwrap().render()
    );
}
