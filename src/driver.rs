//! Paced run loop for collaborators that just want to watch the simulation.

use std::time::Duration;

use crate::config::SimulationConfig;
use crate::state::Engine;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generation counter when the loop stopped.
    pub generations: u64,
    /// False if the loop stopped on the generation cap instead.
    pub converged: bool,
}

/// Step `engine` until it converges or `max_generations` is reached.
///
/// Sleeps `pacing` before every step and hands the engine to `observe` after
/// every step, including the final converged one.
pub fn run<F>(
    engine: &mut Engine,
    pacing: Duration,
    max_generations: Option<u64>,
    mut observe: F,
) -> RunSummary
where
    F: FnMut(&Engine),
{
    loop {
        if max_generations.map_or(false, |cap| engine.generation() >= cap) {
            tracing::debug!(generation = engine.generation(), "generation cap reached");
            return RunSummary {
                generations: engine.generation(),
                converged: false,
            };
        }

        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }

        let converged = engine.step();
        observe(engine);

        if converged {
            return RunSummary {
                generations: engine.generation(),
                converged: true,
            };
        }
    }
}

/// Async counterpart of [`run`] that yields to the runtime between steps
/// instead of blocking the thread.
pub async fn run_async<F>(
    engine: &mut Engine,
    pacing: Duration,
    max_generations: Option<u64>,
    mut observe: F,
) -> RunSummary
where
    F: FnMut(&Engine),
{
    loop {
        if max_generations.map_or(false, |cap| engine.generation() >= cap) {
            tracing::debug!(generation = engine.generation(), "generation cap reached");
            return RunSummary {
                generations: engine.generation(),
                converged: false,
            };
        }

        if !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }

        let converged = engine.step();
        observe(engine);

        if converged {
            return RunSummary {
                generations: engine.generation(),
                converged: true,
            };
        }
    }
}

/// [`run`] with the pacing and cap taken from a config.
pub fn run_with_config<F>(engine: &mut Engine, config: &SimulationConfig, observe: F) -> RunSummary
where
    F: FnMut(&Engine),
{
    run(engine, config.delay(), config.max_generations, observe)
}
