use clap::ValueEnum;
use log::LevelFilter;

use super::error::{BenchError, Result};

pub const DEFAULT_NUM_OPERATIONS: i64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    // iteration count of every phase, shared by both workers
    pub num_operations: i64,
    pub format: ReportFormat,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new() -> Self {
        Config {
            num_operations: DEFAULT_NUM_OPERATIONS,
            format: ReportFormat::Text,
            log_level: LevelFilter::Info,
        }
    }

    pub fn with_operations(num_operations: i64) -> Self {
        let mut c = Config::new();
        c.num_operations = num_operations;
        c
    }

    /// Returns the workload size as an index bound, rejecting zero and negative sizes.
    pub fn validate(&self) -> Result<usize> {
        if self.num_operations <= 0 {
            return Err(BenchError::InvalidWorkload(self.num_operations));
        }
        usize::try_from(self.num_operations)
            .map_err(|_| BenchError::InvalidWorkload(self.num_operations))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ReportFormat, DEFAULT_NUM_OPERATIONS};
    use crate::bench::error::BenchError;

    #[test]
    fn test_default_config() {
        let c = Config::new();
        assert_eq!(c.num_operations, DEFAULT_NUM_OPERATIONS);
        assert_eq!(c.format, ReportFormat::Text);
        assert_eq!(c.validate().unwrap(), DEFAULT_NUM_OPERATIONS as usize);
    }

    #[test]
    fn test_reject_non_positive_workload() {
        for n in [0, -1, i64::MIN] {
            let res = Config::with_operations(n).validate();
            match res {
                Err(BenchError::InvalidWorkload(v)) => assert_eq!(v, n),
                other => panic!("workload {} should be rejected, got {:?}", n, other),
            }
        }
        assert_eq!(Config::with_operations(1).validate().unwrap(), 1);
    }
}
