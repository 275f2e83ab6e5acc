//! Report batch execution.
//!
//! Runs every chart job in a fixed order. A failing job is recorded and
//! the batch moves on to the next one.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::models::{OperationsRow, ResultTable, SearchComparisonRow};
use crate::render::ReportRenderer;
use crate::{KvPlotError, Result};

/// One chart artifact of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartJob {
    SearchComparison,
    OperationsOverTime,
    OperationsCombined,
}

impl ChartJob {
    /// Every job, in execution order
    pub const ALL: [ChartJob; 3] = [
        ChartJob::SearchComparison,
        ChartJob::OperationsOverTime,
        ChartJob::OperationsCombined,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartJob::SearchComparison => "Experiment 1",
            ChartJob::OperationsOverTime => "Experiment 2",
            ChartJob::OperationsCombined => "Experiment 2 combined",
        }
    }

    pub fn input_path(&self, renderer: &ReportRenderer) -> PathBuf {
        match self {
            ChartJob::SearchComparison => renderer.config().search_input_path(),
            ChartJob::OperationsOverTime | ChartJob::OperationsCombined => {
                renderer.config().operations_input_path()
            }
        }
    }

    /// Load this job's table and render it
    pub fn run(&self, renderer: &ReportRenderer) -> Result<PathBuf> {
        let input = self.input_path(renderer);
        match self {
            ChartJob::SearchComparison => {
                let table = ResultTable::<SearchComparisonRow>::load(&input)?;
                renderer.render_search_comparison(&table)
            }
            ChartJob::OperationsOverTime => {
                let table = ResultTable::<OperationsRow>::load(&input)?;
                renderer.render_operations_over_time(&table)
            }
            ChartJob::OperationsCombined => {
                let table = ResultTable::<OperationsRow>::load(&input)?;
                renderer.render_operations_combined(&table)
            }
        }
    }
}

impl fmt::Display for ChartJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one job in a batch
#[derive(Debug)]
pub struct RenderOutcome {
    pub job: ChartJob,
    pub result: Result<PathBuf>,
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&KvPlotError> {
        self.result.as_ref().err()
    }

    /// One-line report of this outcome
    pub fn status_line(&self) -> String {
        match &self.result {
            Ok(_) => format!("✓ {} visualization created", self.job),
            Err(err) => format!("✗ Error creating {} visualization: {}", self.job, err),
        }
    }
}

/// Run every job, whatever happens to the others
pub fn run_all(renderer: &ReportRenderer) -> Vec<RenderOutcome> {
    run_each(renderer, |_| {})
}

/// Run every job, handing each outcome to `on_outcome` as soon as its
/// render finishes
pub fn run_each<F>(renderer: &ReportRenderer, mut on_outcome: F) -> Vec<RenderOutcome>
where
    F: FnMut(&RenderOutcome),
{
    ChartJob::ALL
        .iter()
        .map(|job| {
            let result = job.run(renderer);
            match &result {
                Ok(path) => info!(job = %job, output = %path.display(), "render succeeded"),
                Err(err) => warn!(job = %job, error = %err, "render failed"),
            }
            let outcome = RenderOutcome { job: *job, result };
            on_outcome(&outcome);
            outcome
        })
        .collect()
}
