use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;

use super::bench_list::BenchList;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Add,
    Get,
    Remove,
}

impl Phase {
    // execution order inside one worker
    pub const ALL: [Phase; 3] = [Phase::Add, Phase::Get, Phase::Remove];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Add => "add",
            Phase::Get => "get",
            Phase::Remove => "remove",
        }
    }

    /// Runs the untimed loop of this phase over `list`.
    ///
    /// `Add` appends 0..n, `Get` reads indices 0..n of the full list and
    /// `Remove` drops indices n-1 down to 0, so no index ever goes out of
    /// bounds when the phases run in order.
    pub fn execute(&self, list: &mut dyn BenchList, n: usize) {
        match self {
            Phase::Add => {
                for i in 0..n {
                    list.append(i as i64);
                }
            }
            Phase::Get => {
                for i in 0..n {
                    black_box(list.get(i));
                }
            }
            Phase::Remove => {
                for i in (0..n).rev() {
                    black_box(list.remove(i));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PhaseMeasurement {
    pub phase: Phase,
    pub iterations: u64,
    pub duration_ms: u64,
}

pub struct TimeRecorder {
    start_time: Instant,
}

impl TimeRecorder {
    pub fn start() -> Self {
        TimeRecorder {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Times the whole loop of `phase`, the clock is read once before and once after.
pub fn measure(phase: Phase, list: &mut dyn BenchList, n: usize) -> PhaseMeasurement {
    let recorder = TimeRecorder::start();
    phase.execute(list, n);
    let elapsed = recorder.elapsed();
    debug!(
        "phase {} with {} iterations took {:?}, list len is {}",
        phase.name(),
        n,
        elapsed,
        list.len()
    );
    PhaseMeasurement {
        phase,
        iterations: n as u64,
        duration_ms: elapsed.as_millis() as u64,
    }
}
