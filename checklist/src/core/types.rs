//! Shared deterministic types for checklist core logic.

use serde::{Deserialize, Serialize};

/// Display mode of a single step panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Collapsed,
    Open,
}

impl PanelMode {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Collapsed }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// How the viewport moves when a navigation entry opens a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// User interaction routed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEvent {
    /// The toggle control inside step `id` was clicked.
    ToggleClicked { id: String },
    /// A side-navigation entry pointing at `target` was clicked.
    NavClicked { target: String },
    /// The completion checkbox inside step `id` changed.
    CheckboxChanged { id: String, checked: bool },
    /// The hint panel toggle was clicked.
    HintToggled,
}

/// Effects produced by a single state transition.
///
/// The controller applies these in order: panels, completion marks, hint,
/// persistence, scroll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Open/collapsed modes and active navigation must be re-rendered.
    pub panels_changed: bool,
    /// Done marks and progress must be re-rendered.
    pub completion_changed: bool,
    /// The hint panel flipped its expanded flag.
    pub hint_toggled: bool,
    /// The state must be written to persistence.
    pub persist: bool,
    /// Step to bring into view after rendering.
    pub scroll_to: Option<String>,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}
