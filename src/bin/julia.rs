// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
#[macro_use]
extern crate failure;
extern crate juliaset;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, Arg, ArgMatches};
use juliaset::parse::{parse_complex, parse_pair, validate_pair, validate_positive, validate_range};
use juliaset::{JuliaRenderer, PngDirectory, RenderParams};
use std::str::FromStr;

const OUTPUT: &str = "output";
const REGION: &str = "region";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const RADIUS: &str = "radius";
const PARAM: &str = "param";

fn args<'a>() -> ArgMatches<'a> {
    App::new("julia")
        .version("0.1.0")
        .about("Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("Images_Julia")
                .help("Output directory"),
        )
        .arg(
            Arg::with_name(REGION)
                .long(REGION)
                .short("r")
                .takes_value(true)
                .default_value("3x3")
                .validator(|s| validate_pair::<f64>(&s, 'x', "Could not parse region size"))
                .help("Width and height of the region of the complex plane, centered on 0"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Horizontal and vertical sample counts"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Number of iterations before a point counts as bounded"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .long(RADIUS)
                .short("p")
                .takes_value(true)
                .default_value("1e10")
                .validator(|s| validate_positive(&s, "Escape radius must be a positive number"))
                .help("Escape radius"),
        )
        .arg(
            Arg::with_name(PARAM)
                .required(true)
                .long(PARAM)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the parameter"))
                .help("The parameter c of the Julia set, as RE,IM"),
        )
        .get_matches()
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, failure::Error> {
    matches
        .value_of(name)
        .ok_or_else(|| format_err!("Missing value for --{}", name))
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let (width, height) = parse_pair::<f64>(value(matches, REGION)?, 'x')
        .ok_or_else(|| format_err!("Error parsing region size"))?;
    let (rx, ry) = parse_pair::<usize>(value(matches, SIZE)?, 'x')
        .ok_or_else(|| format_err!("Error parsing image dimensions"))?;
    let iterations = usize::from_str(value(matches, ITERATIONS)?)?;
    let radius = f64::from_str(value(matches, RADIUS)?)?;
    let c = parse_complex(value(matches, PARAM)?)
        .ok_or_else(|| format_err!("Error parsing the parameter"))?;

    let params = RenderParams::new(width, height, rx, ry, iterations, radius, c)?;
    let sink = PngDirectory::new(value(matches, OUTPUT)?);
    JuliaRenderer::new(params)?.render_to(&sink)?;
    info!("done: {}", sink.path_for(c).display());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
