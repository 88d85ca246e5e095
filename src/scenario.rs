// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named parameter sets and the batch runner that renders them.  The
//! renderer itself knows nothing about which pictures exist; it is
//! handed one `RenderParams` at a time.

use crossbeam;
use num::Complex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use error::JuliaError;
use output::ImageSink;
use render::{JuliaRenderer, RenderParams};

/// A named render.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Short name, used to pick scenarios on the command line.
    pub name: String,
    /// What to render.
    pub params: RenderParams,
}

impl Scenario {
    /// Names a parameter set.
    pub fn new<S: Into<String>>(name: S, params: RenderParams) -> Scenario {
        Scenario {
            name: name.into(),
            params,
        }
    }
}

fn example(name: &str, height: f64, rx: usize, re: f64, im: f64) -> Scenario {
    Scenario::new(
        name,
        RenderParams {
            width: 3.0,
            height,
            rx,
            ry: 1000,
            iterations: 100,
            radius: 1e10,
            c: Complex::new(re, im),
        },
    )
}

/// The built-in gallery, in the order it has always been rendered.
pub fn examples() -> Vec<Scenario> {
    vec![
        example("basilica", 4.0, 750, -1.0, 0.0),
        example("disk", 3.0, 1000, 0.0, 0.0),
        example("spiral", 3.0, 1000, 0.285, 0.013),
        example("dust", 3.0, 1000, 0.3, 0.5),
        example("swirl", 3.0, 1000, -0.4, 0.6),
        example("dragon", 4.0, 750, -0.8, 0.156),
    ]
}

/// Keep only the scenarios named in `names`, in the order given by
/// `names`.  An unknown name is an error rather than a silent skip.
pub fn select(scenarios: Vec<Scenario>, names: &[&str]) -> Result<Vec<Scenario>, JuliaError> {
    names
        .iter()
        .map(|name| {
            scenarios
                .iter()
                .find(|scenario| scenario.name == *name)
                .cloned()
                .ok_or_else(|| JuliaError::invalid(format!("no scenario named '{}'", name)))
        })
        .collect()
}

/// Render one scenario and write it through `sink`.
pub fn run_scenario<S: ImageSink + ?Sized>(scenario: &Scenario, sink: &S) -> Result<(), JuliaError> {
    info!(
        "rendering {} (c = {}, {}x{})",
        scenario.name, scenario.params.c, scenario.params.rx, scenario.params.ry
    );
    JuliaRenderer::new(scenario.params)?.render_to(sink)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Render every scenario into `sink` and return how many were
/// written.  With more than one thread, whole scenarios are handed out
/// to scoped workers from a shared queue; each render still runs on a
/// single thread.  The first failure stops the batch and is returned.
pub fn run_batch<S>(scenarios: &[Scenario], sink: &S, threads: usize) -> Result<usize, JuliaError>
where
    S: ImageSink + Sync + ?Sized,
{
    if threads <= 1 || scenarios.len() <= 1 {
        for scenario in scenarios {
            run_scenario(scenario, sink)?;
        }
        return Ok(scenarios.len());
    }

    let queue = Mutex::new(scenarios.iter());
    let failure: Mutex<Option<JuliaError>> = Mutex::new(None);
    let completed = AtomicUsize::new(0);

    crossbeam::scope(|spawner| {
        for _ in 0..threads.min(scenarios.len()) {
            let (queue, failure, completed) = (&queue, &failure, &completed);
            spawner.spawn(move |_| loop {
                if lock(failure).is_some() {
                    break;
                }
                let scenario = { lock(queue).next() };
                match scenario {
                    Some(scenario) => match run_scenario(scenario, sink) {
                        Ok(()) => {
                            completed.fetch_add(1, Ordering::SeqCst);
                        }
                        Err(err) => {
                            let mut slot = lock(failure);
                            if slot.is_none() {
                                *slot = Some(err);
                            }
                            break;
                        }
                    },
                    None => break,
                }
            });
        }
    })
    .unwrap_or_else(|panic| ::std::panic::resume_unwind(panic));

    match failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
        Some(err) => Err(err),
        None => Ok(completed.into_inner()),
    }
}
