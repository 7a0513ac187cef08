use std::io::{Stdout, Write};

use log::{debug, error, info};

use self::bench_list::{BenchList, Variant};
use self::config::{Config, ReportFormat};
use self::error::{BenchError, Result};
use self::phase::{measure, Phase};
use self::report::Report;
use self::sink::SharedSink;

pub mod bench_list;
pub mod config;
pub mod debug_util;
pub mod error;
pub mod phase;
pub mod report;
pub mod sink;

/// Runs the add/get/remove phases for every list variant, one worker thread
/// per variant, and writes one report per variant to the shared sink.
pub struct BenchmarkRunner<W: Write + Send> {
    config: Config,
    sink: SharedSink<W>,
}

impl BenchmarkRunner<Stdout> {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, SharedSink::stdout())
    }
}

impl<W: Write + Send> BenchmarkRunner<W> {
    pub fn with_sink(config: Config, sink: SharedSink<W>) -> Self {
        BenchmarkRunner { config, sink }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Blocks until both workers are joined. Reports come back in variant
    /// order, while their order in the sink depends on which worker ends first.
    pub fn run(&self) -> Result<Vec<Report>> {
        let n = self.config.validate()?;
        let format = self.config.format;
        info!("start benchmark, {} operations, format {:?}", n, format);

        // every list is built before any worker starts
        let lists: Vec<(Variant, Box<dyn BenchList>)> = Variant::ALL
            .iter()
            .map(|v| (*v, v.new_list()))
            .collect();

        let sink = &self.sink;
        let joined = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = lists
                .into_iter()
                .map(|(variant, list)| {
                    let handle = s.spawn(move |_| run_worker(variant, list, n, sink, format));
                    (variant, handle)
                })
                .collect();
            handles
                .into_iter()
                .map(|(variant, handle)| match handle.join() {
                    Ok(res) => res,
                    Err(_) => {
                        error!("{} worker panicked, its run is incomplete", variant);
                        Err(BenchError::WorkerAborted(variant.label()))
                    }
                })
                .collect::<Vec<_>>()
        })
        // all handles are joined above, scope itself can't carry a panic
        .map_err(|_| BenchError::WorkerAborted("benchmark"))?;

        let mut reports = Vec::with_capacity(joined.len());
        let mut first_err: Option<BenchError> = None;
        for res in joined {
            match res {
                Ok(r) => reports.push(r),
                Err(e) => {
                    let replace = match &first_err {
                        None => true,
                        Some(prev) => e.is_aborted() && !prev.is_aborted(),
                    };
                    if replace {
                        first_err = Some(e);
                    }
                }
            }
        }
        if let Some(e) = first_err {
            return Err(e);
        }
        info!("benchmark finished");
        Ok(reports)
    }
}

fn run_worker<W: Write + Send>(
    variant: Variant,
    mut list: Box<dyn BenchList>,
    n: usize,
    sink: &SharedSink<W>,
    format: ReportFormat,
) -> Result<Report> {
    debug!("{} worker start", variant);
    let phases = Phase::ALL
        .iter()
        .map(|p| measure(*p, list.as_mut(), n))
        .collect();
    let report = Report::new(variant, phases, list.len());
    sink.write_report(&report, format)?;
    debug!("{} worker finish", variant);
    Ok(report)
}

/// Runs the benchmark with default settings and prints to stdout.
pub fn start(num_operations: i64) -> Result<Vec<Report>> {
    BenchmarkRunner::new(Config::with_operations(num_operations)).run()
}

#[cfg(test)]
mod test {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::bench_list::Variant;
    use super::config::Config;
    use super::debug_util::init_test_log_as_debug;
    use super::error::BenchError;
    use super::phase::Phase;
    use super::sink::SharedSink;
    use super::BenchmarkRunner;

    struct PanicWriter {}

    impl Write for PanicWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("writer is gone");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn build_runner(n: i64) -> (BenchmarkRunner<Vec<u8>>, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = SharedSink::from_arc(buf.clone());
        (BenchmarkRunner::with_sink(Config::with_operations(n), sink), buf)
    }

    #[test]
    fn test_run_returns_report_per_variant() {
        init_test_log_as_debug();
        let (runner, _) = build_runner(1000);
        let reports = runner.run().unwrap();
        let variants: Vec<_> = reports.iter().map(|r| r.variant).collect();
        assert_eq!(variants, Variant::ALL.to_vec());
        for r in reports {
            let phases: Vec<_> = r.phases.iter().map(|m| m.phase).collect();
            assert_eq!(phases, Phase::ALL.to_vec());
            assert!(r.phases.iter().all(|m| m.iterations == 1000));
            assert_eq!(r.final_len, 0);
        }
    }

    #[test]
    fn test_invalid_workload_writes_nothing() {
        let (runner, buf) = build_runner(0);
        let res = runner.run();
        assert!(matches!(res, Err(BenchError::InvalidWorkload(0))));
        assert!(buf.lock().unwrap().is_empty());
    }

    #[test]
    fn test_start_rejects_negative_workload() {
        let res = super::start(-1);
        assert!(matches!(res, Err(BenchError::InvalidWorkload(-1))));
    }

    #[test]
    fn test_panicking_worker_is_reported() {
        let sink = SharedSink::new(PanicWriter {});
        let runner = BenchmarkRunner::with_sink(Config::with_operations(10), sink);
        let res = runner.run();
        match res {
            Err(e) => assert!(e.is_aborted(), "unexpected error {:?}", e),
            Ok(_) => panic!("run should fail when a worker panics"),
        }
    }
}
