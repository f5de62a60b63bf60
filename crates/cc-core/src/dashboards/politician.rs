//! Politician dashboard: constituent issues with status control and
//! threaded responses, plus the politician's own announcements.

use chrono::NaiveDate;
use serde::Serialize;

use super::ymd;
use crate::container::Collection;
use crate::error::{AppError, Result};
use crate::models::{Announcement, Issue, IssueStatus, RecordId, Response, Stat};

#[derive(Debug, Clone)]
pub struct PoliticianDashboard {
    issues: Collection<Issue>,
    announcements: Vec<Announcement>,
}

#[derive(Debug, Serialize)]
pub struct PoliticianView<'a> {
    pub stats: Vec<Stat>,
    pub issues: &'a Collection<Issue>,
    pub announcements: &'a [Announcement],
}

impl PoliticianDashboard {
    pub fn new(issues: Vec<Issue>, announcements: Vec<Announcement>) -> Self {
        Self { issues: Collection::new(issues), announcements }
    }

    pub fn seeded() -> Self {
        Self::new(seed_issues(), seed_announcements())
    }

    pub fn issues(&self) -> &Collection<Issue> {
        &self.issues
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Moves an issue to `status`. Any transition is allowed, including
    /// back to pending.
    pub fn set_status(&mut self, id: &RecordId, status: IssueStatus) -> bool {
        self.issues.update_by_id(id, |issue| Issue { status, ..issue.clone() })
    }

    /// Appends a response written by `author`. Blank content is rejected;
    /// an unknown issue is a silent no-op (`Ok(false)`).
    pub fn add_response(
        &mut self,
        id: &RecordId,
        author: &str,
        content: &str,
        today: NaiveDate,
    ) -> Result<bool> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Response content is required."));
        }

        let response = Response {
            id: RecordId::generate(),
            author: author.to_string(),
            content: content.to_string(),
            date: today,
        };
        Ok(self.issues.append_child(id, response))
    }

    pub fn stats(&self) -> Vec<Stat> {
        let pending = self.issues.count_where(|i| i.status == IssueStatus::Pending);
        let in_progress = self.issues.count_where(|i| i.status == IssueStatus::InProgress);
        let responses: usize = self.issues.iter().map(|i| i.responses.len()).sum();
        let reached: u64 = self.announcements.iter().map(|a| a.views).sum();

        vec![
            Stat::new("Pending Issues", pending as u64),
            Stat::new("In Progress", in_progress as u64),
            Stat::new("Total Responses", responses as u64),
            Stat::new("Constituents Reached", reached),
        ]
    }

    pub fn view(&self) -> PoliticianView<'_> {
        PoliticianView {
            stats: self.stats(),
            issues: &self.issues,
            announcements: &self.announcements,
        }
    }
}

fn response(id: &str, author: &str, content: &str, date: NaiveDate) -> Response {
    Response {
        id: id.into(),
        author: author.into(),
        content: content.into(),
        date,
    }
}

fn seed_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "1".into(),
            title: "Broken streetlight on Main Street".into(),
            description: "The streetlight near the park has been out for 2 weeks".into(),
            category: "Infrastructure".into(),
            status: IssueStatus::InProgress,
            reporter: Some("John Doe".into()),
            location: "Main Street & Park Ave".into(),
            date: ymd(2024, 2, 15),
            upvotes: 24,
            responses: vec![response(
                "r1",
                "Mayor Johnson",
                "Thank you for reporting this. We have contacted the maintenance team \
                 and they will fix it by end of week.",
                ymd(2024, 2, 16),
            )],
        },
        Issue {
            id: "2".into(),
            title: "Pothole on Highway 101".into(),
            description: "Large pothole causing traffic issues".into(),
            category: "Roads".into(),
            status: IssueStatus::Pending,
            reporter: Some("Sarah Smith".into()),
            location: "Highway 101, Mile 15".into(),
            date: ymd(2024, 2, 20),
            upvotes: 45,
            responses: Vec::new(),
        },
        Issue {
            id: "3".into(),
            title: "Need more public parking downtown".into(),
            description: "Downtown area needs additional parking facilities".into(),
            category: "Transportation".into(),
            status: IssueStatus::Pending,
            reporter: Some("Mike Johnson".into()),
            location: "Downtown District".into(),
            date: ymd(2024, 2, 19),
            upvotes: 67,
            responses: Vec::new(),
        },
        Issue {
            id: "4".into(),
            title: "Park maintenance needed".into(),
            description: "Playground equipment needs repairs".into(),
            category: "Parks".into(),
            status: IssueStatus::Resolved,
            reporter: Some("Emily Davis".into()),
            location: "Central Park".into(),
            date: ymd(2024, 1, 28),
            upvotes: 18,
            responses: vec![response(
                "r2",
                "Council Member Smith",
                "The playground equipment has been repaired. Thank you for bringing this \
                 to our attention.",
                ymd(2024, 2, 5),
            )],
        },
    ]
}

fn seed_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".into(),
            author: None,
            title: "New Community Center Opening".into(),
            content: "We are excited to announce the opening of the new community center \
                      on March 15th."
                .into(),
            date: ymd(2024, 2, 20),
            views: 234,
            reactions: 45,
        },
        Announcement {
            id: "2".into(),
            author: None,
            title: "Road Improvement Project Update".into(),
            content: "The road improvement project on Highway 101 is progressing well.".into(),
            date: ymd(2024, 2, 18),
            views: 189,
            reactions: 32,
        },
    ]
}
