//! End-to-end controller scenarios over a [`StaticDocument`].
//!
//! These tests mount the widget, drive it through user events and check the
//! rendered document, the in-memory state and what reached storage.

use checklist::controller::ChecklistController;
use checklist::core::snapshot::decode_snapshot;
use checklist::core::types::ScrollBehavior;
use checklist::io::config::ChecklistConfig;
use checklist::io::document::{
    NAV_COMPLETED_CLASS, STEP_COLLAPSED_CLASS, STEP_DONE_CLASS, ScrollRequest, StaticDocument,
};
use checklist::io::store::{FileStore, KeyValueStore};
use checklist::test_support::{RecordingStore, layout, layout_with_nav, mount, seeded_store};

const KEY: &str = "islensk-mynstraleidangur-v1";

/// Fresh visit: defaults are rendered and the first step is opened and saved.
#[test]
fn first_visit_opens_first_step_and_persists() {
    let widget = mount(layout(&["s1", "s2", "s3"]), RecordingStore::new());

    let doc = widget.view();
    assert_eq!(doc.open_steps(), vec!["s1"]);
    assert_eq!(doc.active_nav_targets(), vec!["s1"]);
    assert_eq!(doc.progress_count(), "0");
    assert_eq!(doc.progress_bar_width(), "0%");
    assert!(doc.step("s1").expect("s1").toggle_expanded);
    assert!(doc.scroll_requests().is_empty());

    let writes = widget.persistence().store().writes();
    assert_eq!(writes, [r#"{"completed":[],"openId":"s1"}"#.to_string()]);
}

/// Progress count and bar follow every checkbox change.
#[test]
fn progress_tracks_completed_set() {
    let mut widget = mount(layout(&["s1", "s2", "s3", "s4"]), RecordingStore::new());

    let script = [
        ("s1", true, "1", "25%"),
        ("s3", true, "2", "50%"),
        ("s3", true, "2", "50%"),
        ("s1", false, "1", "25%"),
        ("s2", true, "2", "50%"),
        ("s4", true, "3", "75%"),
        ("s1", true, "4", "100%"),
    ];
    for (id, checked, count, width) in script {
        widget.set_step_completed(id, checked);
        assert_eq!(widget.state().completed_count(), count.parse::<usize>().expect("count"));
        assert_eq!(widget.view().progress_count(), count, "after {id}={checked}");
        assert_eq!(widget.view().progress_bar_width(), width, "after {id}={checked}");
    }

    let doc = widget.view();
    let s1 = doc.step("s1").expect("s1");
    assert!(s1.has_class(STEP_DONE_CLASS));
    assert!(doc.nav().iter().all(|entry| entry.has_class(NAV_COMPLETED_CLASS)));
}

/// At most one step is open; the most recently opened valid step wins.
#[test]
fn single_open_step_across_toggle_sequences() {
    let mut widget = mount(layout(&["s1", "s2", "s3"]), RecordingStore::new());

    widget.toggle_step("s2");
    assert_eq!(widget.view().open_steps(), vec!["s2"]);

    widget.navigate("s3");
    assert_eq!(widget.view().open_steps(), vec!["s3"]);

    widget.toggle_step("ghost");
    assert_eq!(widget.view().open_steps(), vec!["s3"]);

    widget.toggle_step("s3");
    assert!(widget.view().open_steps().is_empty());
    assert_eq!(widget.state().open_id(), None);

    widget.toggle_step("s1");
    assert_eq!(widget.view().open_steps(), vec!["s1"]);
    assert_eq!(widget.state().open_id(), Some("s1"));

    let collapsed = widget
        .view()
        .steps()
        .iter()
        .filter(|step| step.has_class(STEP_COLLAPSED_CLASS))
        .count();
    assert_eq!(collapsed, 2);
}

/// A stored snapshot is restored and written back unchanged.
#[test]
fn restored_snapshot_round_trips() {
    let raw = r#"{"completed":["s2"],"openId":"s2"}"#;
    let widget = mount(layout(&["s1", "s2", "s3"]), seeded_store(raw));

    let doc = widget.view();
    assert_eq!(doc.open_steps(), vec!["s2"]);
    let s2 = doc.step("s2").expect("s2");
    assert!(s2.checkbox_checked);
    assert!(s2.has_class(STEP_DONE_CLASS));
    assert!(!doc.step("s1").expect("s1").checkbox_checked);
    assert_eq!(doc.progress_count(), "1");

    let store = widget.persistence().store();
    assert_eq!(store.writes(), [raw.to_string()]);
    assert_eq!(store.entry(KEY), Some(raw));
}

/// Malformed stored values fall back to defaults without surfacing an error.
#[test]
fn malformed_snapshot_falls_back_to_defaults() {
    for raw in ["definitely not json", r#"{"completed":"not-an-array"}"#] {
        let widget = mount(layout(&["s1", "s2"]), seeded_store(raw));

        assert!(widget.state().completed().is_empty(), "{raw}");
        assert_eq!(widget.state().open_id(), Some("s1"), "{raw}");
        assert_eq!(widget.view().open_steps(), vec!["s1"]);

        // The next save normalizes the stored value.
        let stored = widget.persistence().store().entry(KEY).expect("stored");
        assert_eq!(stored, r#"{"completed":[],"openId":"s1"}"#);
    }
}

/// Completed ids for steps no longer in the document still count toward progress.
#[test]
fn stale_completed_ids_count_toward_progress() {
    let widget = mount(
        layout(&["s1", "s2"]),
        seeded_store(r#"{"completed":["s1","s2","gone"],"openId":"s1"}"#),
    );

    assert_eq!(widget.state().completed_count(), 3);
    assert_eq!(widget.view().progress_count(), "3");
    assert_eq!(widget.view().progress_bar_width(), "150%");
    assert_eq!(widget.progress().percent(), 150.0);
}

/// An invalid config is rejected before anything is read, rendered or written.
#[test]
fn mount_rejects_invalid_config() {
    for config in [
        ChecklistConfig {
            storage_key: "   ".to_string(),
            ..ChecklistConfig::default()
        },
        ChecklistConfig {
            scroll_offset_px: -8.0,
            ..ChecklistConfig::default()
        },
    ] {
        let steps = layout(&["s1", "s2"]);
        let doc = StaticDocument::from_layout(&steps);
        let err = ChecklistController::mount(steps, RecordingStore::new(), doc, config)
            .err()
            .expect("invalid config");
        assert!(err.to_string().contains("must be"), "{err}");
    }
}

/// Unknown persisted open id falls back to the first step.
#[test]
fn stale_open_id_reopens_first_step() {
    let widget = mount(
        layout(&["s1", "s2"]),
        seeded_store(r#"{"completed":[],"openId":"removed-step"}"#),
    );
    assert_eq!(widget.state().open_id(), Some("s1"));
    assert_eq!(widget.view().open_steps(), vec!["s1"]);
}

/// A persisted null open id still reopens the first step on load.
#[test]
fn collapsed_session_reopens_first_step() {
    let widget = mount(
        layout(&["s1", "s2"]),
        seeded_store(r#"{"completed":["s1","s2"],"openId":null}"#),
    );
    assert_eq!(widget.state().open_id(), Some("s1"));
    assert_eq!(widget.view().progress_bar_width(), "100%");
}

/// Opening an unknown id changes neither state, view nor storage.
#[test]
fn opening_unknown_step_is_a_noop() {
    let mut widget = mount(layout(&["s1", "s2"]), RecordingStore::new());
    let state_before = widget.state().clone();
    let doc_before = widget.view().clone();
    let writes_before = widget.persistence().store().writes().len();

    assert!(widget.navigate("nowhere").is_noop());
    assert!(widget.toggle_step("nowhere").is_noop());
    assert!(widget.set_step_completed("nowhere", true).is_noop());

    assert_eq!(widget.state(), &state_before);
    assert_eq!(widget.view(), &doc_before);
    assert_eq!(widget.persistence().store().writes().len(), writes_before);
}

/// Check then uncheck: completed set restored, exactly two writes.
#[test]
fn check_then_uncheck_writes_twice() {
    let mut widget = mount(layout(&["s1", "s2"]), RecordingStore::new());
    let before = widget.state().completed().to_vec();
    let writes_before = widget.persistence().store().writes().len();

    widget.set_step_completed("s2", true);
    widget.set_step_completed("s2", false);

    assert_eq!(widget.state().completed(), before.as_slice());
    let writes = &widget.persistence().store().writes()[writes_before..];
    assert_eq!(
        writes,
        [
            r#"{"completed":["s2"],"openId":"s1"}"#.to_string(),
            r#"{"completed":[],"openId":"s1"}"#.to_string(),
        ]
    );
}

/// Nav click switches panels, activates navigation and scrolls; toggling collapses.
#[test]
fn nav_click_then_toggle_collapses() {
    let layout = layout(&["s1", "s2", "s3"]);
    let doc = StaticDocument::from_layout(&layout).with_step_top("s3", 1_200.0);
    let mut widget =
        ChecklistController::mount(layout, RecordingStore::new(), doc, ChecklistConfig::default())
            .expect("mount");
    assert_eq!(widget.view().open_steps(), vec!["s1"]);

    let transition = widget.navigate("s3");
    assert_eq!(transition.scroll_to.as_deref(), Some("s3"));

    let doc = widget.view();
    assert_eq!(doc.open_steps(), vec!["s3"]);
    assert!(doc.step("s1").expect("s1").has_class(STEP_COLLAPSED_CLASS));
    assert!(!doc.step("s1").expect("s1").toggle_expanded);
    assert_eq!(doc.active_nav_targets(), vec!["s3"]);
    assert_eq!(
        doc.scroll_requests(),
        [ScrollRequest {
            top_px: 1_176.0,
            behavior: ScrollBehavior::Smooth
        }]
    );

    widget.toggle_step("s3");

    let doc = widget.view();
    assert!(doc.open_steps().is_empty());
    assert!(doc.active_nav_targets().is_empty());
    assert_eq!(widget.state().open_id(), None);
    assert_eq!(doc.scroll_requests().len(), 1);
    let last = widget.persistence().store().writes().last().cloned();
    assert_eq!(last.as_deref(), Some(r#"{"completed":[],"openId":null}"#));
}

/// Toggle-opens never scroll; only navigation does.
#[test]
fn toggle_open_does_not_scroll() {
    let mut widget = mount(layout(&["s1", "s2"]), RecordingStore::new());
    widget.toggle_step("s2");
    assert!(widget.view().scroll_requests().is_empty());
}

/// Navigation entries pointing at unknown steps never become active.
#[test]
fn nav_entries_for_unknown_targets_stay_inactive() {
    let mut widget = mount(
        layout_with_nav(&["s1", "s2"], &["s1", "extra", "s2"]),
        RecordingStore::new(),
    );
    widget.navigate("extra");
    assert_eq!(widget.view().active_nav_targets(), vec!["s1"]);
    widget.navigate("s2");
    assert_eq!(widget.view().active_nav_targets(), vec!["s2"]);
}

/// Failed writes are swallowed; the in-memory state keeps working.
#[test]
fn write_failures_keep_in_memory_state() {
    let mut widget = mount(layout(&["s1", "s2"]), RecordingStore::rejecting_writes());

    widget.set_step_completed("s1", true);
    widget.navigate("s2");

    assert_eq!(widget.state().completed(), ["s1".to_string()]);
    assert_eq!(widget.view().open_steps(), vec!["s2"]);
    assert_eq!(widget.view().progress_count(), "1");
    assert!(widget.persistence().store().writes().is_empty());
}

/// Unreadable storage mounts with defaults.
#[test]
fn read_failures_mount_with_defaults() {
    let widget = mount(layout(&["s1", "s2"]), RecordingStore::unreadable());
    assert!(widget.state().completed().is_empty());
    assert_eq!(widget.view().open_steps(), vec!["s1"]);
}

/// Empty layout: nothing opens, progress stays at zero, nothing is written.
#[test]
fn empty_layout_mounts_quietly() {
    let mut widget = mount(layout(&[]), RecordingStore::new());
    widget.toggle_step("s1");

    assert_eq!(widget.state().open_id(), None);
    assert_eq!(widget.view().progress_bar_width(), "0%");
    assert!(widget.persistence().store().writes().is_empty());
}

/// The hint panel toggles independently and is never persisted.
#[test]
fn hint_panel_toggles_without_persisting() {
    let mut widget = mount(layout(&["s1"]).with_hint(false), RecordingStore::new());
    let writes_before = widget.persistence().store().writes().len();

    widget.toggle_hint();
    assert_eq!(widget.hint_expanded(), Some(true));
    let hint = widget.view().hint().expect("hint");
    assert!(hint.expanded && !hint.hidden);

    widget.toggle_hint();
    assert_eq!(widget.hint_expanded(), Some(false));
    assert!(widget.view().hint().expect("hint").hidden);
    assert_eq!(widget.persistence().store().writes().len(), writes_before);

    let mut plain = mount(layout(&["s1"]), RecordingStore::new());
    assert!(plain.toggle_hint().is_noop());
    assert_eq!(plain.hint_expanded(), None);
}

/// State survives a remount against the same file-backed store.
#[test]
fn file_store_persists_across_mounts() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = ChecklistConfig {
        storage_key: "onboarding".to_string(),
        ..ChecklistConfig::default()
    };

    let steps = layout(&["s1", "s2", "s3"]);
    let doc = StaticDocument::from_layout(&steps);
    let mut widget = ChecklistController::mount(
        steps.clone(),
        FileStore::new(temp.path()),
        doc,
        config.clone(),
    )
    .expect("mount");
    widget.set_step_completed("s1", true);
    widget.navigate("s3");
    let (store, _) = widget.into_parts();

    let raw = store.get("onboarding").expect("get").expect("stored");
    let snapshot = decode_snapshot(&raw).expect("decode");
    assert_eq!(snapshot.completed, vec!["s1".to_string()]);
    assert_eq!(snapshot.open_id.as_deref(), Some("s3"));

    let doc = StaticDocument::from_layout(&steps);
    let widget = ChecklistController::mount(steps, store, doc, config).expect("remount");
    assert_eq!(widget.view().open_steps(), vec!["s3"]);
    assert!(widget.view().step("s1").expect("s1").checkbox_checked);
    assert_eq!(widget.progress().completed, 1);
}
