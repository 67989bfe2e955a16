#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use serde::{Deserialize, Serialize};

/// Cap on retained entries; older ones fall off the end.
pub const MAX_ENTRIES: usize = 50;

/// How many of the newest entries feed the recent-tools stat.
pub const RECENT_WINDOW: usize = 5;

/// What happened to a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    #[default]
    Edited,
    Deleted,
    Created,
}

impl ActivityAction {
    /// Lowercase verb shown in the timeline, matching the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Created => "created",
        }
    }

    /// Modifier class for the timeline badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Edited => "log-entry__badge--edited",
            Self::Deleted => "log-entry__badge--deleted",
            Self::Created => "log-entry__badge--created",
        }
    }
}

/// One activity log line.
///
/// `id` is the epoch-milliseconds creation time, `timestamp` the locale
/// display string, and `day` a calendar-day key so today's count survives
/// reload without re-parsing display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub timestamp: String,
    pub day: String,
    pub action: ActivityAction,
    pub tool: String,
    pub details: String,
    pub user: String,
}

/// In-memory activity log, newest first.
#[derive(Clone, Debug, Default)]
pub struct ActivityLogState {
    pub entries: Vec<ActivityEntry>,
}

/// Aggregates shown on the dashboard and the log page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityStats {
    pub total_edits: usize,
    pub today_edits: usize,
    pub recent_tools: Vec<String>,
}

impl ActivityLogState {
    /// Prepend an entry and trim to `MAX_ENTRIES`.
    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Compute stats against the given calendar-day key.
    #[must_use]
    pub fn stats(&self, today: &str) -> ActivityStats {
        let mut recent_tools: Vec<String> = Vec::new();
        for entry in self.entries.iter().take(RECENT_WINDOW) {
            if !recent_tools.contains(&entry.tool) {
                recent_tools.push(entry.tool.clone());
            }
        }
        ActivityStats {
            total_edits: self.entries.len(),
            today_edits: self.entries.iter().filter(|e| e.day == today).count(),
            recent_tools,
        }
    }

    /// Pretty-printed JSON for the export download.
    #[must_use]
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "[]".to_owned())
    }
}

/// Build an entry stamped with the browser clock and the stored username.
#[must_use]
pub fn stamped_entry(action: ActivityAction, tool: &str, details: &str) -> ActivityEntry {
    ActivityEntry {
        id: crate::util::time::now_millis(),
        timestamp: crate::util::time::locale_timestamp(),
        day: crate::util::time::day_key(),
        action,
        tool: tool.to_owned(),
        details: details.to_owned(),
        user: crate::util::storage::stored_username().unwrap_or_else(|| "Unknown".to_owned()),
    }
}

/// Append a stamped entry and persist the log. The editor views call this
/// once per view lifetime, on their first committed change.
pub fn record_activity(
    log: &mut ActivityLogState,
    action: ActivityAction,
    tool: &str,
    details: &str,
) {
    log.push(stamped_entry(action, tool, details));
    crate::util::storage::save_activity(&log.entries);
}
