//! Pure projection of checklist state onto per-element display flags.

use crate::core::layout::ChecklistLayout;
use crate::core::progress::Progress;
use crate::core::state::ChecklistState;
use crate::core::types::PanelMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub id: String,
    pub mode: PanelMode,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub target: String,
    pub active: bool,
    pub done: bool,
}

/// Full display state of the widget, computed before any element is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistView {
    /// One entry per step, in document order.
    pub steps: Vec<StepView>,
    /// One entry per navigation link, in document order.
    pub nav: Vec<NavView>,
    pub progress: Progress,
}

impl ChecklistView {
    pub fn open_steps(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(|step| step.mode.is_open())
            .map(|step| step.id.as_str())
    }
}

/// Project `state` onto `layout`.
///
/// Only a known `open_id` opens a panel or activates navigation, so at most
/// one step is open in any projection.
pub fn project(layout: &ChecklistLayout, state: &ChecklistState) -> ChecklistView {
    let open_id = state.open_id().filter(|id| layout.contains(id));

    let steps = layout
        .steps()
        .iter()
        .map(|id| StepView {
            id: id.clone(),
            mode: PanelMode::from_open(open_id == Some(id.as_str())),
            done: state.is_complete(id),
        })
        .collect();

    let nav = layout
        .nav_targets()
        .iter()
        .map(|target| NavView {
            target: target.clone(),
            active: open_id == Some(target.as_str()),
            done: state.is_complete(target),
        })
        .collect();

    ChecklistView {
        steps,
        nav,
        progress: Progress::new(state.completed_count(), layout.total()),
    }
}
