use std::io::{self, Write};

use serde::Serialize;

use crate::common::types::{PageId, EMPTY_FRAME_MARKER};
use crate::sim::manager::AccessOutcome;

/// State after one page access
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub page: PageId,
    pub outcome: AccessOutcome,
    /// Frame contents in index order, `None` for empty frames
    pub frames: Vec<Option<PageId>>,
}

/// Outcome of simulating a whole reference string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub frame_count: usize,
    pub steps: Vec<Step>,
    pub faults: usize,
    pub hits: usize,
}

impl SimulationReport {
    pub fn accesses(&self) -> usize {
        self.steps.len()
    }

    pub fn hit_ratio(&self) -> f64 {
        if self.accesses() == 0 {
            return 0.0;
        }
        self.hits as f64 / self.accesses() as f64
    }

    pub fn fault_ratio(&self) -> f64 {
        if self.accesses() == 0 {
            return 0.0;
        }
        self.faults as f64 / self.accesses() as f64
    }

    /// Frame contents after the last access
    pub fn final_frames(&self) -> Vec<Option<PageId>> {
        match self.steps.last() {
            Some(step) => step.frames.clone(),
            None => vec![None; self.frame_count],
        }
    }
}

/// Render one row of the trace table: the page, a tab, then every frame
pub fn format_step(step: &Step) -> String {
    let mut line = format!("{}\t", step.page);
    for frame in &step.frames {
        match frame {
            Some(page) => line.push_str(&format!("{} ", page)),
            None => line.push_str(&format!("{} ", EMPTY_FRAME_MARKER)),
        }
    }
    line
}

/// Write the per-access frame table followed by the fault total
pub fn write_trace<W: Write>(out: &mut W, report: &SimulationReport) -> io::Result<()> {
    write!(out, "\nPage\tFrames\n")?;
    for step in &report.steps {
        writeln!(out, "{}", format_step(step))?;
    }
    write!(out, "\nTotal Page Faults: {}\n", report.faults)?;
    Ok(())
}

/// Write hit statistics for the run
pub fn write_summary<W: Write>(out: &mut W, report: &SimulationReport) -> io::Result<()> {
    writeln!(out, "Total Page Hits: {}", report.hits)?;
    writeln!(out, "Hit Ratio: {:.2}%", report.hit_ratio() * 100.0)?;
    writeln!(out, "Fault Ratio: {:.2}%", report.fault_ratio() * 100.0)?;
    Ok(())
}
