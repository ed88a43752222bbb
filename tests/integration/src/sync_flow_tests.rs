//! End-to-end tests for the synchronization engine
//!
//! These exercise the complete flow: behavior TOML -> parsed config ->
//! resolution against a live tracker -> initial pass -> change-driven
//! passes, with `MemTracker` standing in for the host.

use itemsync_config::BehaviorFile;
use itemsync_core::{Behavior, CopyBehavior};
use itemsync_host::{CustomColumn, ItemId, ProjectId, TrackerHost, ValueKind, ViewClass, ViewId};
use itemsync_test_utils::tracker::MemTracker;

const BEHAVIOR: &str = r#"
[[behavior]]
title = "backlog to schedule"

[behavior.source]
project = "Apollo"
view = "backlog"

[behavior.target]
project = "Apollo"
view = "scheduled"

[[behavior.mapping]]
source = { custom = "Points" }
target = { custom = "Points" }

[[behavior.mapping]]
source = { custom = "Points" }
target = { custom = "Notes" }

[[behavior.mapping]]
source = { builtin = "work-remaining" }
target = { custom = "Remaining" }
"#;

struct Scenario {
    tracker: MemTracker,
    project: ProjectId,
    backlog: ViewId,
    schedule: ViewId,
    story: ItemId,
    task: ItemId,
    source_points: CustomColumn,
    target_points: CustomColumn,
    notes: CustomColumn,
    remaining: CustomColumn,
}

/// One project with a backlog story linked to a schedule task. The
/// backlog carries a numeric "Points" column; the schedule carries a
/// numeric "Points", a text "Notes", and a text "Remaining".
fn setup_tracker() -> Scenario {
    let tracker = MemTracker::new();
    let project = tracker.add_project("Apollo");
    let backlog = tracker.view(project, ViewClass::AgileBacklog).unwrap();
    let schedule = tracker.view(project, ViewClass::Schedule).unwrap();

    let source_points = tracker.add_custom_column(backlog, "Points", ValueKind::Numeric);
    let target_points = tracker.add_custom_column(schedule, "Points", ValueKind::Numeric);
    let notes = tracker.add_custom_column(schedule, "Notes", ValueKind::Text);
    let remaining = tracker.add_custom_column(schedule, "Remaining", ValueKind::Text);

    let story = tracker.add_item(backlog, "Checkout flow");
    let task = tracker.add_item(schedule, "Build checkout");
    tracker.link(story, task);
    tracker.set_number(story, source_points, 3.45);

    Scenario {
        tracker,
        project,
        backlog,
        schedule,
        story,
        task,
        source_points,
        target_points,
        notes,
        remaining,
    }
}

fn behavior_from(toml: &str) -> CopyBehavior {
    let file = BehaviorFile::parse(toml).unwrap();
    CopyBehavior::from_config(file.behaviors[0].clone())
}

#[test]
fn initialize_brings_the_target_up_to_date() {
    let s = setup_tracker();
    let mut behavior = behavior_from(BEHAVIOR);

    behavior.initialize(&s.tracker).unwrap();

    // Same-kind numeric copy is exact; the text renderings round to one
    // fractional digit, and the unset builtin renders its 0.0 default.
    assert_eq!(s.tracker.custom_internal(s.task, s.target_points), "3.45");
    assert_eq!(s.tracker.custom_display(s.task, s.notes), "3.5");
    assert_eq!(s.tracker.custom_display(s.task, s.remaining), "0.0");
}

#[test]
fn source_change_outside_a_burst_syncs_immediately() {
    let s = setup_tracker();
    let mut behavior = behavior_from(BEHAVIOR);
    behavior.initialize(&s.tracker).unwrap();

    s.tracker.set_number(s.story, s.source_points, 8.0);
    behavior.on_item_custom_field_changed(&s.tracker, s.story, s.project);

    assert_eq!(s.tracker.custom_internal(s.task, s.target_points), "8");
    assert_eq!(s.tracker.custom_display(s.task, s.notes), "8.0");
}

#[test]
fn burst_of_changes_runs_a_single_pass() {
    let s = setup_tracker();
    let mut behavior = behavior_from(BEHAVIOR);
    behavior.initialize(&s.tracker).unwrap();
    let after_init = s.tracker.find_log().len();

    behavior.on_burst_begin();
    for _ in 0..5 {
        behavior.on_item_changed(&s.tracker, s.story, s.project);
        behavior.on_item_custom_field_changed(&s.tracker, s.story, s.project);
    }
    assert_eq!(
        s.tracker.find_log().len(),
        after_init,
        "no pass may run while the burst is open"
    );

    behavior.on_burst_end(&s.tracker);

    // One pass queries each endpoint once.
    assert_eq!(s.tracker.find_log().len(), after_init + 2);
}

#[test]
fn changes_in_an_unrelated_project_do_not_sync() {
    let s = setup_tracker();
    let mut behavior = behavior_from(BEHAVIOR);
    behavior.initialize(&s.tracker).unwrap();
    let other = s.tracker.add_project("Gemini");
    let after_init = s.tracker.find_log().len();

    behavior.on_item_changed(&s.tracker, s.story, other);
    behavior.on_burst_begin();
    behavior.on_item_custom_field_changed(&s.tracker, s.story, other);
    behavior.on_burst_end(&s.tracker);

    assert_eq!(s.tracker.find_log().len(), after_init);
}

#[test]
fn endpoint_filters_reach_their_own_views() {
    let s = setup_tracker();
    s.tracker.tag_item(s.story, "ready");
    s.tracker.tag_item(s.task, "planned");

    let filtered = BEHAVIOR
        .replace(
            "view = \"backlog\"",
            "view = \"backlog\"\nfind = \"ready\"",
        )
        .replace(
            "view = \"scheduled\"",
            "view = \"scheduled\"\nfind = \"planned\"",
        );
    let mut behavior = behavior_from(&filtered);
    behavior.initialize(&s.tracker).unwrap();

    assert_eq!(
        s.tracker.find_log(),
        vec![
            (s.schedule, "planned".to_string()),
            (s.backlog, "ready".to_string()),
        ]
    );
    assert_eq!(s.tracker.custom_internal(s.task, s.target_points), "3.45");
}

#[test]
fn rejected_transfer_leaves_other_mappings_intact() {
    let s = setup_tracker();

    // An enumerated pair whose source choice id does not exist on the
    // target column; the host rejects the write.
    let source_sev = s
        .tracker
        .add_custom_column(s.backlog, "Severity", ValueKind::Enumerated);
    let target_sev = s
        .tracker
        .add_custom_column(s.schedule, "Severity", ValueKind::Enumerated);
    s.tracker.add_choice(source_sev, "7", "Blocker");
    s.tracker.add_choice(target_sev, "1", "Low");
    s.tracker.set_choice(s.story, source_sev, "7");

    let with_severity = BEHAVIOR.replace(
        "[[behavior.mapping]]\nsource = { custom = \"Points\" }\ntarget = { custom = \"Points\" }",
        "[[behavior.mapping]]\nsource = { custom = \"Severity\" }\ntarget = { custom = \"Severity\" }\n\n[[behavior.mapping]]\nsource = { custom = \"Points\" }\ntarget = { custom = \"Points\" }",
    );
    let mut behavior = behavior_from(&with_severity);
    behavior.initialize(&s.tracker).unwrap();

    // The rejected enumerated write is skipped; everything after it still
    // lands.
    assert_eq!(s.tracker.custom_internal(s.task, target_sev), "");
    assert_eq!(s.tracker.custom_internal(s.task, s.target_points), "3.45");
    assert_eq!(s.tracker.custom_display(s.task, s.notes), "3.5");
}

#[test]
fn clearing_the_source_clears_the_text_rendering() {
    let s = setup_tracker();
    let mut behavior = behavior_from(BEHAVIOR);
    behavior.initialize(&s.tracker).unwrap();
    assert_eq!(s.tracker.custom_display(s.task, s.notes), "3.5");

    // Unset numeric sources render as empty text.
    s.tracker
        .set_custom_text(s.story, s.source_points.handle, "")
        .unwrap();
    behavior.on_item_custom_field_changed(&s.tracker, s.story, s.project);

    assert_eq!(s.tracker.custom_display(s.task, s.notes), "");
}

#[test]
fn builtin_name_mapping_renames_the_target() {
    let s = setup_tracker();
    let renamed = BEHAVIOR.replace(
        "source = { builtin = \"work-remaining\" }\ntarget = { custom = \"Remaining\" }",
        "source = { builtin = \"name\" }\ntarget = { builtin = \"name\" }",
    );
    let mut behavior = behavior_from(&renamed);
    behavior.initialize(&s.tracker).unwrap();

    assert_eq!(s.tracker.item_name(s.task), "Checkout flow");
}
