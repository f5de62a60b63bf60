//! Moderator dashboard: the flagged-content review queue and a read-only
//! moderation activity log.

use serde::{Deserialize, Serialize};

use super::ymd;
use crate::container::Collection;
use crate::models::{
    ActivityEntry, ContentKind, FlaggedContent, ModerationStatus, RecordId, Stat,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Remove,
}

impl ModerationAction {
    fn outcome(self) -> ModerationStatus {
        match self {
            ModerationAction::Approve => ModerationStatus::Approved,
            ModerationAction::Remove => ModerationStatus::Removed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModeratorDashboard {
    flagged: Collection<FlaggedContent>,
    activity: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize)]
pub struct ModeratorView<'a> {
    pub stats: Vec<Stat>,
    pub flagged: &'a Collection<FlaggedContent>,
    pub activity: Vec<ActivityEntry>,
}

impl ModeratorDashboard {
    pub fn new(flagged: Vec<FlaggedContent>, activity: Vec<ActivityEntry>) -> Self {
        Self { flagged: Collection::new(flagged), activity }
    }

    pub fn seeded() -> Self {
        Self::new(seed_flagged(), seed_activity())
    }

    pub fn flagged(&self) -> &Collection<FlaggedContent> {
        &self.flagged
    }

    /// Approves or removes a flagged item. The decision is not final; a later
    /// action overwrites it.
    pub fn moderate(&mut self, id: &RecordId, action: ModerationAction) -> bool {
        self.flagged.update_by_id(id, |content| FlaggedContent {
            status: action.outcome(),
            ..content.clone()
        })
    }

    pub fn stats(&self) -> Vec<Stat> {
        let count = |status: ModerationStatus| self.flagged.count_where(|c| c.status == status) as u64;

        vec![
            Stat::new("Pending Review", count(ModerationStatus::Pending)),
            Stat::new("Approved Today", count(ModerationStatus::Approved)),
            Stat::new("Removed Today", count(ModerationStatus::Removed)),
            Stat::new("Total Actions", self.activity.len() as u64),
        ]
    }

    /// Builds the view for `viewer`, who is credited with the log entries
    /// that carry no explicit actor.
    pub fn view(&self, viewer: &str) -> ModeratorView<'_> {
        let activity = self
            .activity
            .iter()
            .map(|entry| ActivityEntry {
                actor: Some(entry.actor.clone().unwrap_or_else(|| viewer.to_string())),
                ..entry.clone()
            })
            .collect();

        ModeratorView { stats: self.stats(), flagged: &self.flagged, activity }
    }
}

fn seed_flagged() -> Vec<FlaggedContent> {
    vec![
        FlaggedContent {
            id: "1".into(),
            kind: ContentKind::Comment,
            title: "Response to: Broken streetlight".into(),
            content: "This is taking way too long to fix Completely unacceptable service.".into(),
            author: "Anonymous User".into(),
            reporter: "John Doe".into(),
            reason: "Inappropriate language".into(),
            date: ymd(2024, 2, 21),
            status: ModerationStatus::Pending,
        },
        FlaggedContent {
            id: "2".into(),
            kind: ContentKind::Issue,
            title: "Noise complaint".into(),
            content: "Excessive noise from construction site at night.".into(),
            author: "Sarah Smith".into(),
            reporter: "Mike Johnson".into(),
            reason: "Spam / Duplicate".into(),
            date: ymd(2024, 2, 20),
            status: ModerationStatus::Pending,
        },
        FlaggedContent {
            id: "3".into(),
            kind: ContentKind::Comment,
            title: "Response to: Road improvement".into(),
            content: "Great work on the road improvements".into(),
            author: "Emily Davis".into(),
            reporter: "False Report".into(),
            reason: "False report".into(),
            date: ymd(2024, 2, 19),
            status: ModerationStatus::Approved,
        },
    ]
}

fn seed_activity() -> Vec<ActivityEntry> {
    let entry = |id: &str, action: &str, actor: Option<&str>, target: &str, time: &str| {
        ActivityEntry {
            id: id.into(),
            action: action.into(),
            actor: actor.map(str::to_string),
            target: target.into(),
            time: time.into(),
        }
    };

    vec![
        entry("1", "Content approved", None, "Comment on Issue #45", "10 minutes ago"),
        entry("2", "Content removed", None, "Comment on Issue #38", "1 hour ago"),
        entry("3", "User warned", Some("Jane Moderator"), "User: BadActor123", "2 hours ago"),
        entry("4", "Content approved", Some("Jane Moderator"), "Announcement #12", "3 hours ago"),
        entry("5", "Content flagged", Some("Auto-system"), "Issue #89", "4 hours ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(dashboard: &ModeratorDashboard) -> Vec<u64> {
        dashboard.stats().into_iter().map(|s| s.value).collect()
    }

    #[test]
    fn seeded_stats() {
        assert_eq!(values(&ModeratorDashboard::seeded()), [2, 1, 0, 5]);
    }

    #[test]
    fn approve_and_remove_update_counts() {
        let mut dashboard = ModeratorDashboard::seeded();
        assert!(dashboard.moderate(&"1".into(), ModerationAction::Remove));
        assert!(dashboard.moderate(&"2".into(), ModerationAction::Approve));

        assert_eq!(values(&dashboard), [0, 2, 1, 5]);
        let removed = dashboard.flagged().get(&"1".into()).unwrap();
        assert_eq!(removed.status, ModerationStatus::Removed);
        assert_eq!(removed.reason, "Inappropriate language");
    }

    #[test]
    fn unknown_item_is_noop() {
        let mut dashboard = ModeratorDashboard::seeded();
        assert!(!dashboard.moderate(&"7".into(), ModerationAction::Remove));
        assert_eq!(values(&dashboard), [2, 1, 0, 5]);
    }

    #[test]
    fn view_credits_viewer_for_unattributed_entries() {
        let dashboard = ModeratorDashboard::seeded();
        let view = dashboard.view("Priya Shah");

        let actors: Vec<&str> = view.activity.iter().filter_map(|e| e.actor.as_deref()).collect();
        assert_eq!(
            actors,
            ["Priya Shah", "Priya Shah", "Jane Moderator", "Jane Moderator", "Auto-system"]
        );
    }
}
