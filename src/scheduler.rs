//! The cycle loop.
//!
//! Each cycle samples every module, formats the line and emits it. The next
//! cycle starts one interval after the previous one started: the sleep is
//! shortened by the time the cycle took, and skipped when the cycle overran.
//! There is no catch-up for missed cycles.
//!
//! The loop body always runs at least once, so a lifecycle that is already
//! terminating (one-shot mode) still produces exactly one line.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::collector::{FileSystem, Sampler};
use crate::format::{self, StatusLine};
use crate::lifecycle::{Lifecycle, State};
use crate::registry::Registry;
use crate::sink::{Sink, SinkError};

pub struct Scheduler<'a, F: FileSystem> {
    registry: Registry,
    sampler: Sampler<F>,
    line: StatusLine,
    interval: Duration,
    lifecycle: &'a Lifecycle,
}

impl<'a, F: FileSystem> Scheduler<'a, F> {
    pub fn new(
        registry: Registry,
        sampler: Sampler<F>,
        interval: Duration,
        lifecycle: &'a Lifecycle,
    ) -> Self {
        Self {
            registry,
            sampler,
            line: StatusLine::default(),
            interval,
            lifecycle,
        }
    }

    /// Runs cycles until the lifecycle is terminating.
    ///
    /// Returns the number of lines emitted. A sink error aborts immediately.
    pub fn run(&mut self, sink: &mut dyn Sink) -> Result<u64, SinkError> {
        let mut cycles: u64 = 0;

        loop {
            if self.lifecycle.wait_while_paused() == State::Terminating && cycles > 0 {
                break;
            }

            let start = Instant::now();
            self.run_cycle(sink)?;
            cycles += 1;

            if self.lifecycle.is_terminating() {
                break;
            }

            let elapsed = start.elapsed();
            match self.interval.checked_sub(elapsed) {
                Some(remaining) => {
                    trace!("cycle took {:?}, sleeping {:?}", elapsed, remaining);
                    self.lifecycle.sleep_until(start + self.interval);
                }
                None => {
                    warn!(
                        "cycle took {:?}, longer than the {:?} interval",
                        elapsed, self.interval
                    );
                }
            }

            if self.lifecycle.is_terminating() {
                break;
            }
        }

        debug!("scheduler stopped after {} cycles", cycles);
        Ok(cycles)
    }

    /// Samples, formats and emits one line.
    ///
    /// A pause that arrives while sampling holds the line back until resume
    /// or termination. Either way the line is emitted.
    pub fn run_cycle(&mut self, sink: &mut dyn Sink) -> Result<(), SinkError> {
        let samples = self.sampler.sample_all(&self.registry);
        let outcome = format::render(&self.registry, &samples, &mut self.line);
        if outcome.truncated {
            debug!(
                "status line truncated to {} of {} blocks",
                outcome.blocks,
                self.registry.len()
            );
        }

        self.lifecycle.wait_while_paused();

        sink.emit(self.line.as_str())?;
        trace!("emitted {} bytes", self.line.len());
        Ok(())
    }
}
