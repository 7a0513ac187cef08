use std::fmt::Write;

use serde::Serialize;

use super::bench_list::Variant;
use super::config::ReportFormat;
use super::error::Result;
use super::phase::PhaseMeasurement;

pub const COLUMN_HEADER: &str = "\t\tIterations \tDuration (ms)";

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub phases: Vec<PhaseMeasurement>,
    // list length once every phase ran
    #[serde(skip)]
    pub final_len: usize,
}

impl Report {
    pub fn new(variant: Variant, phases: Vec<PhaseMeasurement>, final_len: usize) -> Self {
        Report {
            variant,
            phases,
            final_len,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json_line(),
        }
    }

    /// Header, column header, one row per phase and a trailing blank line.
    pub fn to_text(&self) -> String {
        let mut s = String::new();
        // writing into a String never fails
        let _ = writeln!(s, "{}:", self.variant.label());
        let _ = writeln!(s, "{}", COLUMN_HEADER);
        for m in &self.phases {
            let _ = writeln!(
                s,
                "{:<10}{:<15}{:<10}",
                format!("{}:", m.phase.name()),
                m.iterations,
                m.duration_ms
            );
        }
        s.push('\n');
        s
    }

    pub fn to_json_line(&self) -> Result<String> {
        let mut s = serde_json::to_string(self)?;
        s.push('\n');
        Ok(s)
    }
}

#[cfg(test)]
mod test {
    use super::Report;
    use crate::bench::bench_list::Variant;
    use crate::bench::config::ReportFormat;
    use crate::bench::phase::{Phase, PhaseMeasurement};

    fn build_report() -> Report {
        let phases = vec![
            PhaseMeasurement {
                phase: Phase::Add,
                iterations: 1000,
                duration_ms: 3,
            },
            PhaseMeasurement {
                phase: Phase::Get,
                iterations: 1000,
                duration_ms: 12,
            },
            PhaseMeasurement {
                phase: Phase::Remove,
                iterations: 1000,
                duration_ms: 0,
            },
        ];
        Report::new(Variant::Linked, phases, 0)
    }

    #[test]
    fn test_text_layout() {
        let text = build_report().render(ReportFormat::Text).unwrap();
        let expected = "LinkedList:\n\
                        \t\tIterations \tDuration (ms)\n\
                        add:      1000           3         \n\
                        get:      1000           12        \n\
                        remove:   1000           0         \n\
                        \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_line() {
        let json = build_report().render(ReportFormat::Json).unwrap();
        assert!(json.ends_with('\n'));
        assert_eq!(json.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();
        assert_eq!(v["variant"], "LinkedList");
        assert_eq!(v["phases"][1]["phase"], "get");
        assert_eq!(v["phases"][1]["iterations"], 1000);
        assert_eq!(v["phases"][1]["duration_ms"], 12);
        assert!(v.get("final_len").is_none());
    }
}
