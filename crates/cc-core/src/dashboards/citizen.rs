//! Citizen dashboard: the citizen's own reported issues plus a read-only feed
//! of announcements from their representatives.

use chrono::NaiveDate;
use serde::Serialize;

use super::ymd;
use crate::container::Collection;
use crate::error::Result;
use crate::forms::check_issue_draft;
use crate::models::{Announcement, Issue, IssueDraft, IssueStatus, RecordId};

#[derive(Debug, Clone)]
pub struct CitizenDashboard {
    issues: Collection<Issue>,
    updates: Vec<Announcement>,
}

#[derive(Debug, Serialize)]
pub struct CitizenView<'a> {
    pub issues: &'a Collection<Issue>,
    pub updates: &'a [Announcement],
}

impl CitizenDashboard {
    pub fn new(issues: Vec<Issue>, updates: Vec<Announcement>) -> Self {
        Self { issues: Collection::new(issues), updates }
    }

    pub fn seeded() -> Self {
        Self::new(seed_issues(), seed_updates())
    }

    pub fn issues(&self) -> &Collection<Issue> {
        &self.issues
    }

    pub fn updates(&self) -> &[Announcement] {
        &self.updates
    }

    /// Files a new issue at the top of the list.
    pub fn report_issue(&mut self, draft: IssueDraft, today: NaiveDate) -> Result<RecordId> {
        check_issue_draft(&draft)?;
        Ok(self.issues.create(draft, today))
    }

    pub fn upvote(&mut self, id: &RecordId) -> bool {
        self.issues.update_by_id(id, |issue| Issue {
            upvotes: issue.upvotes.saturating_add(1),
            ..issue.clone()
        })
    }

    pub fn view(&self) -> CitizenView<'_> {
        CitizenView { issues: &self.issues, updates: &self.updates }
    }
}

#[allow(clippy::too_many_arguments)]
fn issue(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    status: IssueStatus,
    date: NaiveDate,
    location: &str,
    upvotes: u32,
) -> Issue {
    Issue {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        status,
        reporter: None,
        location: location.into(),
        date,
        upvotes,
        responses: Vec::new(),
    }
}

fn seed_issues() -> Vec<Issue> {
    vec![
        issue(
            "1",
            "Broken streetlight on Main Street",
            "The streetlight near the park has been out for 2 weeks",
            "Infrastructure",
            IssueStatus::InProgress,
            ymd(2024, 2, 15),
            "Main Street & Park Ave",
            24,
        ),
        issue(
            "2",
            "Pothole on Highway 101",
            "Large pothole causing traffic issues",
            "Roads",
            IssueStatus::Pending,
            ymd(2024, 2, 20),
            "Highway 101, Mile 15",
            45,
        ),
        issue(
            "3",
            "Park maintenance needed",
            "Playground equipment needs repairs",
            "Parks",
            IssueStatus::Resolved,
            ymd(2024, 1, 28),
            "Central Park",
            18,
        ),
    ]
}

fn seed_updates() -> Vec<Announcement> {
    let update = |id: &str, author: &str, title: &str, content: &str, date| Announcement {
        id: id.into(),
        author: Some(author.into()),
        title: title.into(),
        content: content.into(),
        date,
        views: 0,
        reactions: 0,
    };

    vec![
        update(
            "1",
            "Mayor Johnson",
            "New Community Center Opening",
            "We are excited to announce the opening of the new community center on March 15th. \
             This facility will serve as a hub for local events and activities.",
            ymd(2024, 2, 20),
        ),
        update(
            "2",
            "Council Member Smith",
            "Road Improvement Project Update",
            "The road improvement project on Highway 101 is progressing well. \
             We expect completion by end of March.",
            ymd(2024, 2, 18),
        ),
        update(
            "3",
            "Mayor Johnson",
            "Town Hall Meeting Scheduled",
            "Join us for our quarterly town hall meeting on March 1st at 7 PM. \
             We will discuss upcoming projects and answer your questions.",
            ymd(2024, 2, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> IssueDraft {
        IssueDraft {
            title: "Flooded underpass".into(),
            description: "Water pools after every rain".into(),
            category: "Drainage".into(),
            status: IssueStatus::Pending,
            reporter: None,
            location: "5th Ave underpass".into(),
        }
    }

    #[test]
    fn reported_issue_goes_first() {
        let mut dashboard = CitizenDashboard::seeded();
        let id = dashboard.report_issue(draft(), ymd(2024, 3, 2)).unwrap();

        let first = &dashboard.issues().items()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.upvotes, 0);
        assert_eq!(first.date, ymd(2024, 3, 2));
        assert_eq!(dashboard.issues().len(), 4);
    }

    #[test]
    fn incomplete_report_is_rejected() {
        let mut dashboard = CitizenDashboard::seeded();
        let incomplete = IssueDraft { title: "  ".into(), ..draft() };

        assert!(dashboard.report_issue(incomplete, ymd(2024, 3, 2)).is_err());
        assert_eq!(dashboard.issues().len(), 3);
    }

    #[test]
    fn upvote_increments_only_target() {
        let mut dashboard = CitizenDashboard::seeded();
        assert!(dashboard.upvote(&"2".into()));

        let upvotes: Vec<u32> = dashboard.issues().iter().map(|i| i.upvotes).collect();
        assert_eq!(upvotes, [24, 46, 18]);
    }

    #[test]
    fn upvote_unknown_issue_changes_nothing() {
        let mut dashboard = CitizenDashboard::seeded();
        let before = dashboard.issues().clone();

        assert!(!dashboard.upvote(&"404".into()));
        assert_eq!(dashboard.issues(), &before);
    }
}
