//! Document surface the controller renders onto.

use crate::core::progress::Progress;
use crate::core::projection::{NavView, StepView};
use crate::core::types::ScrollBehavior;

/// Host document elements the widget drives.
///
/// Implementations locate elements by step id (or navigation index) and must
/// tolerate ids they do not render; missing elements are skipped silently.
pub trait View {
    /// Apply open/collapsed mode, the toggle's `aria-expanded` flag and the done mark.
    fn render_step(&mut self, step: &StepView);
    /// Apply active/completed marks to the navigation entry at `index`.
    fn render_nav(&mut self, index: usize, entry: &NavView);
    /// Update the progress count text and bar width.
    fn render_progress(&mut self, progress: &Progress);
    /// Set the completion checkbox inside step `id`.
    fn set_checkbox(&mut self, id: &str, checked: bool);
    /// Show or hide the hint panel and mirror the flag on its toggle.
    fn set_hint_expanded(&mut self, expanded: bool);
    /// Scroll so step `id` sits `offset_px` below the top of the viewport.
    fn scroll_to_step(&mut self, id: &str, offset_px: f64, behavior: ScrollBehavior);
}
