use super::*;

fn entry(id: u64, day: &str, tool: &str) -> ActivityEntry {
    ActivityEntry {
        id,
        timestamp: format!("{day}, 10:00:00 AM"),
        day: day.to_owned(),
        action: ActivityAction::Edited,
        tool: tool.to_owned(),
        details: String::new(),
        user: "ana".to_owned(),
    }
}

// =============================================================
// Push and trimming
// =============================================================

#[test]
fn push_prepends_newest_first() {
    let mut log = ActivityLogState::default();
    log.push(entry(1, "Mon Aug 17 2026", "Full Summary"));
    log.push(entry(2, "Tue Aug 18 2026", "Taxonomy"));
    assert_eq!(log.entries[0].id, 2);
    assert_eq!(log.entries[1].id, 1);
}

#[test]
fn push_trims_to_capacity() {
    let mut log = ActivityLogState::default();
    for id in 0..60 {
        log.push(entry(id, "Mon Aug 17 2026", "Full Summary"));
    }
    assert_eq!(log.entries.len(), MAX_ENTRIES);
    // Newest survive, oldest fall off.
    assert_eq!(log.entries[0].id, 59);
    assert_eq!(log.entries.last().unwrap().id, 10);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_counts_total_and_today() {
    let mut log = ActivityLogState::default();
    log.push(entry(1, "Mon Aug 17 2026", "Full Summary"));
    log.push(entry(2, "Tue Aug 18 2026", "Taxonomy"));
    log.push(entry(3, "Tue Aug 18 2026", "Definition"));

    let stats = log.stats("Tue Aug 18 2026");
    assert_eq!(stats.total_edits, 3);
    assert_eq!(stats.today_edits, 2);
}

#[test]
fn recent_tools_deduplicates_newest_window() {
    let mut log = ActivityLogState::default();
    for (id, tool) in [
        (1, "Word Structure"),
        (2, "Full Summary"),
        (3, "Taxonomy"),
        (4, "Full Summary"),
        (5, "Definition"),
        (6, "Full Summary"),
    ] {
        log.push(entry(id, "Tue Aug 18 2026", tool));
    }

    // Window is the five newest: 6,5,4,3,2 — first-seen order.
    let stats = log.stats("Tue Aug 18 2026");
    assert_eq!(stats.recent_tools, ["Full Summary", "Definition", "Taxonomy"]);
}

#[test]
fn stats_of_empty_log() {
    let log = ActivityLogState::default();
    let stats = log.stats("Tue Aug 18 2026");
    assert_eq!(stats, ActivityStats::default());
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn action_serializes_lowercase() {
    let json = serde_json::to_string(&ActivityAction::Deleted).unwrap();
    assert_eq!(json, "\"deleted\"");
}

#[test]
fn action_labels_match_the_serialized_form() {
    for action in [
        ActivityAction::Edited,
        ActivityAction::Deleted,
        ActivityAction::Created,
    ] {
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, format!("\"{}\"", action.label()));
    }
}

#[test]
fn export_json_is_an_array_of_entries() {
    let mut log = ActivityLogState::default();
    log.push(entry(7, "Tue Aug 18 2026", "Domain Words"));
    let json = log.export_json();
    assert!(json.trim_start().starts_with('['));
    assert!(json.contains("\"tool\": \"Domain Words\""));
    assert!(json.contains("\"action\": \"edited\""));
}

#[test]
fn entries_round_trip_through_json() {
    let original = entry(9, "Tue Aug 18 2026", "Taxonomy");
    let json = serde_json::to_string(&original).unwrap();
    let back: ActivityEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}

// =============================================================
// Stamping
// =============================================================

#[test]
fn stamped_entry_defaults_user_off_browser() {
    let stamped = stamped_entry(ActivityAction::Deleted, "Domain Words", "Deleted word: osmosis");
    assert_eq!(stamped.user, "Unknown");
    assert_eq!(stamped.tool, "Domain Words");
    assert_eq!(stamped.action, ActivityAction::Deleted);
}

#[test]
fn record_activity_appends_to_the_log() {
    let mut log = ActivityLogState::default();
    record_activity(&mut log, ActivityAction::Edited, "Definition", "");
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.entries[0].tool, "Definition");
}
