//! Orchestration for a mounted checklist widget.
//!
//! Each interaction runs one synchronous pass: mutate state, re-render the
//! affected parts of the view, persist. Persistence failures are logged and
//! otherwise ignored; the in-memory state stays authoritative for the session.

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::layout::ChecklistLayout;
use crate::core::progress::Progress;
use crate::core::projection::project;
use crate::core::state::ChecklistState;
use crate::core::transition::{apply_event, initial_open, open_step};
use crate::core::types::{ChecklistEvent, Transition};
use crate::io::config::ChecklistConfig;
use crate::io::persistence::PersistenceAdapter;
use crate::io::store::KeyValueStore;
use crate::io::view::View;
use crate::sync::{render_completion, render_panels, restore_completion};

/// A checklist mounted on a view and backed by a store.
///
/// Independent controllers share nothing; several widgets may coexist.
#[derive(Debug)]
pub struct ChecklistController<S, V> {
    layout: ChecklistLayout,
    state: ChecklistState,
    persistence: PersistenceAdapter<S>,
    view: V,
    config: ChecklistConfig,
    hint_expanded: Option<bool>,
}

impl<S: KeyValueStore, V: View> ChecklistController<S, V> {
    /// Page load: restore persisted state (or defaults) and render it.
    ///
    /// Checkboxes, done marks and progress are restored first, then the
    /// restored open step is opened if it is known, else the first step.
    ///
    /// Fails only when `config` is invalid; storage problems never fail a mount.
    pub fn mount(
        layout: ChecklistLayout,
        store: S,
        view: V,
        config: ChecklistConfig,
    ) -> Result<Self> {
        config.validate()?;
        let persistence = PersistenceAdapter::new(store, config.storage_key.clone());
        let snapshot = match persistence.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "could not read saved checklist state; using defaults");
                None
            }
        };
        let state = ChecklistState::restore(&layout, snapshot);
        let hint_expanded = layout.hint().map(|hint| hint.initially_expanded);

        let mut controller = Self {
            layout,
            state,
            persistence,
            view,
            config,
            hint_expanded,
        };

        let projection = project(&controller.layout, &controller.state);
        restore_completion(
            &mut controller.view,
            &controller.layout,
            &controller.state,
            &projection,
        );

        if let Some(id) = initial_open(&controller.layout, &controller.state) {
            let transition = open_step(&mut controller.state, &controller.layout, &id);
            controller.apply(&transition);
        }
        debug!(
            steps = controller.layout.total(),
            completed = controller.state.completed_count(),
            open_id = ?controller.state.open_id(),
            "checklist mounted"
        );
        Ok(controller)
    }

    /// Route a user event through the state machine and apply its effects.
    pub fn dispatch(&mut self, event: ChecklistEvent) -> Transition {
        let transition = apply_event(&mut self.state, &self.layout, &event);
        if transition.is_noop() {
            debug!(?event, "event ignored");
            return transition;
        }
        debug!(?event, open_id = ?self.state.open_id(), "event applied");
        self.apply(&transition);
        transition
    }

    /// Click on the toggle control of step `id`.
    pub fn toggle_step(&mut self, id: &str) -> Transition {
        self.dispatch(ChecklistEvent::ToggleClicked { id: id.to_string() })
    }

    /// Click on a navigation entry pointing at `target`.
    pub fn navigate(&mut self, target: &str) -> Transition {
        self.dispatch(ChecklistEvent::NavClicked {
            target: target.to_string(),
        })
    }

    /// Change of the completion checkbox inside step `id`.
    pub fn set_step_completed(&mut self, id: &str, checked: bool) -> Transition {
        self.dispatch(ChecklistEvent::CheckboxChanged {
            id: id.to_string(),
            checked,
        })
    }

    /// Click on the hint panel toggle.
    pub fn toggle_hint(&mut self) -> Transition {
        self.dispatch(ChecklistEvent::HintToggled)
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.state.completed_count(), self.layout.total())
    }

    /// Expanded flag of the hint panel, `None` when the layout has none.
    pub fn hint_expanded(&self) -> Option<bool> {
        self.hint_expanded
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Unmount, handing back the store and the view.
    pub fn into_parts(self) -> (S, V) {
        (self.persistence.into_store(), self.view)
    }

    fn apply(&mut self, transition: &Transition) {
        let projection = project(&self.layout, &self.state);
        if transition.completion_changed {
            render_completion(&mut self.view, &projection);
        } else if transition.panels_changed {
            render_panels(&mut self.view, &projection);
        }
        if transition.hint_toggled {
            if let Some(expanded) = self.hint_expanded.as_mut() {
                *expanded = !*expanded;
                self.view.set_hint_expanded(*expanded);
            }
        }
        if transition.persist {
            self.persist();
        }
        if let Some(id) = &transition.scroll_to {
            self.view.scroll_to_step(
                id,
                self.config.scroll_offset_px,
                self.config.scroll_behavior,
            );
        }
    }

    fn persist(&mut self) {
        let snapshot = self.state.snapshot();
        if let Err(err) = self.persistence.save(&snapshot) {
            warn!(error = %err, "could not save checklist state; keeping in-memory state");
        }
    }
}
