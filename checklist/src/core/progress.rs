//! Progress count and bar projection.

/// Completed count against the number of known steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Share of completed steps as a percentage; zero when there are no steps.
    ///
    /// Completed ids that no longer name a step still count, so this can
    /// exceed 100.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64) * 100.0
    }

    /// Text for the progress count display.
    pub fn count_label(&self) -> String {
        self.completed.to_string()
    }

    /// CSS width for the progress bar, e.g. `"25%"`.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percent())
    }
}
