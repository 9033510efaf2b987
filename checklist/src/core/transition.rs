//! Event-driven state transitions for the checklist.
//!
//! Each step is either collapsed or open, and at most one step is open. The
//! functions here mutate [`ChecklistState`] and report which effects the
//! controller must apply; they never touch the view or storage themselves.

use crate::core::layout::ChecklistLayout;
use crate::core::state::ChecklistState;
use crate::core::types::{ChecklistEvent, Transition};

/// Apply a single user event to `state`.
///
/// Events naming an unknown step are no-ops.
pub fn apply_event(
    state: &mut ChecklistState,
    layout: &ChecklistLayout,
    event: &ChecklistEvent,
) -> Transition {
    match event {
        ChecklistEvent::ToggleClicked { id } => toggle_step(state, layout, id),
        ChecklistEvent::NavClicked { target } => {
            let mut transition = open_step(state, layout, target);
            if !transition.is_noop() {
                transition.scroll_to = Some(target.clone());
            }
            transition
        }
        ChecklistEvent::CheckboxChanged { id, checked } => {
            set_completed(state, layout, id, *checked)
        }
        ChecklistEvent::HintToggled => {
            if layout.hint().is_none() {
                return Transition::none();
            }
            Transition {
                hint_toggled: true,
                ..Transition::none()
            }
        }
    }
}

/// Open `id`, collapsing whichever step was open before.
///
/// Re-opening the open step still re-renders and persists.
pub fn open_step(state: &mut ChecklistState, layout: &ChecklistLayout, id: &str) -> Transition {
    if !layout.contains(id) {
        return Transition::none();
    }
    state.set_open(Some(id));
    Transition {
        panels_changed: true,
        persist: true,
        ..Transition::none()
    }
}

/// Collapse the open step if `id` is it, otherwise open `id`.
pub fn toggle_step(state: &mut ChecklistState, layout: &ChecklistLayout, id: &str) -> Transition {
    if !layout.contains(id) {
        return Transition::none();
    }
    if state.open_id() == Some(id) {
        state.set_open(None);
        return Transition {
            panels_changed: true,
            persist: true,
            ..Transition::none()
        };
    }
    open_step(state, layout, id)
}

/// Record a checkbox change. Always persists, even when membership is unchanged.
pub fn set_completed(
    state: &mut ChecklistState,
    layout: &ChecklistLayout,
    id: &str,
    checked: bool,
) -> Transition {
    if !layout.contains(id) {
        return Transition::none();
    }
    if checked {
        state.mark_complete(id);
    } else {
        state.mark_incomplete(id);
    }
    Transition {
        completion_changed: true,
        persist: true,
        ..Transition::none()
    }
}

/// Step to open on page load: the restored open id if known, else the first step.
pub fn initial_open(layout: &ChecklistLayout, state: &ChecklistState) -> Option<String> {
    state
        .open_id()
        .filter(|id| layout.contains(id))
        .or_else(|| layout.first())
        .map(str::to_string)
}
