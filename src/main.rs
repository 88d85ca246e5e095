// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders the built-in gallery of Julia sets.

extern crate clap;
#[macro_use]
extern crate failure;
extern crate juliaset;
extern crate num_cpus;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use clap::{App, Arg, ArgMatches};
use juliaset::parse::validate_range;
use juliaset::{examples, run_batch, select, PngDirectory};

const OUTPUT: &str = "output";
const THREADS: &str = "threads";
const LIST: &str = "list";
const ONLY: &str = "only";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("juliaset")
        .version("0.1.0")
        .about("Renders a gallery of Julia sets")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("Images_Julia")
                .help("Directory the images are written to"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of images rendered at the same time"),
        )
        .arg(
            Arg::with_name(LIST)
                .long(LIST)
                .help("Print the names of the gallery's images and exit"),
        )
        .arg(
            Arg::with_name(ONLY)
                .long(ONLY)
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Render only the named image; may be repeated"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let gallery = examples();

    if matches.is_present(LIST) {
        for scenario in &gallery {
            println!("{}\t{}", scenario.name, scenario.params.c);
        }
        return Ok(());
    }

    let gallery = match matches.values_of(ONLY) {
        Some(names) => {
            let names: Vec<&str> = names.collect();
            select(gallery, &names)?
        }
        None => gallery,
    };

    let threads: usize = matches
        .value_of(THREADS)
        .unwrap_or("1")
        .parse()
        .map_err(|_| format_err!("Could not parse thread count"))?;
    let sink = PngDirectory::new(matches.value_of(OUTPUT).unwrap_or("Images_Julia"));
    let written = run_batch(&gallery, &sink, threads)?;
    info!("{} images written to {}", written, sink.dir().display());
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
