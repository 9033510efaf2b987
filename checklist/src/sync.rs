//! Applies core projections to a [`View`].
//!
//! Every function takes a fully computed [`ChecklistView`], so switching the
//! open step lands in a single pass over the elements.

use crate::core::layout::ChecklistLayout;
use crate::core::projection::ChecklistView;
use crate::core::state::ChecklistState;
use crate::io::view::View;

/// Open/collapsed modes on every step plus the active navigation entry.
pub fn render_panels<V: View>(view: &mut V, projection: &ChecklistView) {
    for step in &projection.steps {
        view.render_step(step);
    }
    for (index, entry) in projection.nav.iter().enumerate() {
        view.render_nav(index, entry);
    }
}

/// Done marks on steps and navigation entries, then the progress display.
///
/// Step and navigation elements are re-rendered whole, so this also reapplies
/// their current open and active flags.
pub fn render_completion<V: View>(view: &mut V, projection: &ChecklistView) {
    render_panels(view, projection);
    view.render_progress(&projection.progress);
}

/// Page-load restore: checkbox states from the completed set, then completion marks.
pub fn restore_completion<V: View>(
    view: &mut V,
    layout: &ChecklistLayout,
    state: &ChecklistState,
    projection: &ChecklistView,
) {
    for id in layout.steps() {
        view.set_checkbox(id, state.is_complete(id));
    }
    render_completion(view, projection);
}
