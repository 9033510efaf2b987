//! In-memory document model implementing [`View`].
//!
//! Mirrors the widget's markup contract: step elements carry `step--open`,
//! `step--collapsed` and `step--done` classes, their toggle carries
//! `aria-expanded`, navigation links carry `active` and `completed`, the
//! progress count is text and the bar is a CSS width. Used for headless hosting
//! and as the document in tests.

use std::collections::BTreeSet;

use crate::core::layout::ChecklistLayout;
use crate::core::progress::Progress;
use crate::core::projection::{NavView, StepView};
use crate::core::types::{PanelMode, ScrollBehavior};
use crate::io::view::View;

pub const STEP_OPEN_CLASS: &str = "step--open";
pub const STEP_COLLAPSED_CLASS: &str = "step--collapsed";
pub const STEP_DONE_CLASS: &str = "step--done";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const NAV_COMPLETED_CLASS: &str = "completed";

/// Vertical distance between consecutive steps when no offsets are given.
pub const DEFAULT_STEP_SPACING_PX: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StepElement {
    pub id: String,
    pub classes: BTreeSet<String>,
    /// `aria-expanded` on the step's toggle.
    pub toggle_expanded: bool,
    pub checkbox_checked: bool,
    /// Distance from the top of the document.
    pub top_px: f64,
}

impl StepElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn mode(&self) -> PanelMode {
        PanelMode::from_open(self.has_class(STEP_OPEN_CLASS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavElement {
    pub target: String,
    pub classes: BTreeSet<String>,
}

impl NavElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintElement {
    /// `aria-expanded` on the hint toggle.
    pub expanded: bool,
    /// `hidden` attribute on the hint panel.
    pub hidden: bool,
}

/// A scroll issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top_px: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticDocument {
    steps: Vec<StepElement>,
    nav: Vec<NavElement>,
    progress_count: String,
    progress_bar_width: String,
    hint: Option<HintElement>,
    scroll_y: f64,
    scrolls: Vec<ScrollRequest>,
}

impl StaticDocument {
    /// Pre-rendered markup for `layout`: every step collapsed and unchecked,
    /// steps spaced [`DEFAULT_STEP_SPACING_PX`] apart.
    pub fn from_layout(layout: &ChecklistLayout) -> Self {
        let steps = layout
            .steps()
            .iter()
            .enumerate()
            .map(|(index, id)| StepElement {
                id: id.clone(),
                classes: BTreeSet::from([STEP_COLLAPSED_CLASS.to_string()]),
                toggle_expanded: false,
                checkbox_checked: false,
                top_px: index as f64 * DEFAULT_STEP_SPACING_PX,
            })
            .collect();
        let nav = layout
            .nav_targets()
            .iter()
            .map(|target| NavElement {
                target: target.clone(),
                classes: BTreeSet::new(),
            })
            .collect();
        let hint = layout.hint().map(|hint| HintElement {
            expanded: hint.initially_expanded,
            hidden: !hint.initially_expanded,
        });
        Self {
            steps,
            nav,
            progress_count: "0".to_string(),
            progress_bar_width: "0%".to_string(),
            hint,
            scroll_y: 0.0,
            scrolls: Vec::new(),
        }
    }

    /// Override the document offset of step `id`.
    pub fn with_step_top(mut self, id: &str, top_px: f64) -> Self {
        if let Some(step) = self.step_mut(id) {
            step.top_px = top_px;
        }
        self
    }

    pub fn step(&self, id: &str) -> Option<&StepElement> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn steps(&self) -> &[StepElement] {
        &self.steps
    }

    pub fn nav(&self) -> &[NavElement] {
        &self.nav
    }

    pub fn hint(&self) -> Option<HintElement> {
        self.hint
    }

    /// Ids of steps currently carrying the open class.
    pub fn open_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|step| step.has_class(STEP_OPEN_CLASS))
            .map(|step| step.id.as_str())
            .collect()
    }

    /// Targets of navigation entries currently marked active.
    pub fn active_nav_targets(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|entry| entry.has_class(NAV_ACTIVE_CLASS))
            .map(|entry| entry.target.as_str())
            .collect()
    }

    pub fn progress_count(&self) -> &str {
        &self.progress_count
    }

    pub fn progress_bar_width(&self) -> &str {
        &self.progress_bar_width
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    fn step_mut(&mut self, id: &str) -> Option<&mut StepElement> {
        self.steps.iter_mut().find(|step| step.id == id)
    }
}

fn toggle_class(classes: &mut BTreeSet<String>, class: &str, on: bool) {
    if on {
        classes.insert(class.to_string());
    } else {
        classes.remove(class);
    }
}

impl View for StaticDocument {
    fn render_step(&mut self, view: &StepView) {
        let Some(step) = self.step_mut(&view.id) else {
            return;
        };
        let open = view.mode.is_open();
        toggle_class(&mut step.classes, STEP_OPEN_CLASS, open);
        toggle_class(&mut step.classes, STEP_COLLAPSED_CLASS, !open);
        toggle_class(&mut step.classes, STEP_DONE_CLASS, view.done);
        step.toggle_expanded = open;
    }

    fn render_nav(&mut self, index: usize, view: &NavView) {
        let Some(entry) = self.nav.get_mut(index) else {
            return;
        };
        toggle_class(&mut entry.classes, NAV_ACTIVE_CLASS, view.active);
        toggle_class(&mut entry.classes, NAV_COMPLETED_CLASS, view.done);
    }

    fn render_progress(&mut self, progress: &Progress) {
        self.progress_count = progress.count_label();
        self.progress_bar_width = progress.bar_width();
    }

    fn set_checkbox(&mut self, id: &str, checked: bool) {
        if let Some(step) = self.step_mut(id) {
            step.checkbox_checked = checked;
        }
    }

    fn set_hint_expanded(&mut self, expanded: bool) {
        if let Some(hint) = self.hint.as_mut() {
            hint.expanded = expanded;
            hint.hidden = !expanded;
        }
    }

    fn scroll_to_step(&mut self, id: &str, offset_px: f64, behavior: ScrollBehavior) {
        let Some(step) = self.step(id) else {
            return;
        };
        let top_px = (step.top_px - offset_px).max(0.0);
        self.scrolls.push(ScrollRequest { top_px, behavior });
        self.scroll_y = top_px;
    }
}
