use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

use super::config::ReportFormat;
use super::error::{BenchError, Result};
use super::report::Report;

/// Output shared by the workers. A whole report is formatted and written
/// while the lock is held, so reports from different workers never interleave.
pub struct SharedSink<W: Write + Send> {
    inner: Arc<Mutex<W>>,
}

impl<W: Write + Send> Clone for SharedSink<W> {
    fn clone(&self) -> Self {
        SharedSink {
            inner: self.inner.clone(),
        }
    }
}

impl SharedSink<Stdout> {
    pub fn stdout() -> Self {
        SharedSink::new(io::stdout())
    }
}

impl<W: Write + Send> SharedSink<W> {
    pub fn new(writer: W) -> Self {
        SharedSink {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    pub fn from_arc(inner: Arc<Mutex<W>>) -> Self {
        SharedSink { inner }
    }

    pub fn write_report(&self, report: &Report, format: ReportFormat) -> Result<()> {
        let mut out = self.inner.lock().map_err(|_| BenchError::SinkPoisoned)?;
        let body = report.render(format)?;
        out.write_all(body.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
