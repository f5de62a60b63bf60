//! Admin dashboard: platform overview, user management and the static
//! analytics series fed to the charting collaborator.

use serde::Serialize;

use super::ymd;
use crate::container::Collection;
use crate::models::{
    AccountStatus, ActivityEntry, ChartPoint, ManagedUser, RecordId, Role, Stat,
};

/// Static `{label, value}` series for the analytics tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub users_by_role: Vec<ChartPoint>,
    pub issues_reported: Vec<ChartPoint>,
    pub issues_resolved: Vec<ChartPoint>,
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    users: Collection<ManagedUser>,
    overview: Vec<Stat>,
    activity: Vec<ActivityEntry>,
    analytics: Analytics,
}

#[derive(Debug, Serialize)]
pub struct AdminView<'a> {
    pub overview: &'a [Stat],
    pub activity: &'a [ActivityEntry],
    pub users: &'a Collection<ManagedUser>,
    pub analytics: &'a Analytics,
}

impl AdminDashboard {
    pub fn seeded() -> Self {
        Self {
            users: Collection::new(seed_users()),
            overview: vec![
                Stat::new("Total Users", 1234),
                Stat::new("Active Issues", 87),
                Stat::new("Resolved Issues", 456),
                Stat::new("Reports Flagged", 12),
            ],
            activity: seed_activity(),
            analytics: seed_analytics(),
        }
    }

    pub fn users(&self) -> &Collection<ManagedUser> {
        &self.users
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Flips an account between active and suspended.
    pub fn toggle_suspend(&mut self, id: &RecordId) -> bool {
        self.users.update_by_id(id, |user| ManagedUser {
            status: user.status.toggled(),
            ..user.clone()
        })
    }

    pub fn view(&self) -> AdminView<'_> {
        AdminView {
            overview: &self.overview,
            activity: &self.activity,
            users: &self.users,
            analytics: &self.analytics,
        }
    }
}

fn seed_users() -> Vec<ManagedUser> {
    let user = |id: &str, name: &str, email: &str, role, status, joined| ManagedUser {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        status,
        joined,
    };

    vec![
        user("1", "John Doe", "john@example.com", Role::Citizen, AccountStatus::Active, ymd(2024, 1, 15)),
        user("2", "Sarah Smith", "sarah@example.com", Role::Politician, AccountStatus::Active, ymd(2024, 2, 20)),
        user("3", "Mike Johnson", "mike@example.com", Role::Moderator, AccountStatus::Active, ymd(2024, 3, 10)),
        user("4", "Emily Davis", "emily@example.com", Role::Citizen, AccountStatus::Suspended, ymd(2024, 1, 22)),
        user("5", "Robert Wilson", "robert@example.com", Role::Citizen, AccountStatus::Active, ymd(2024, 4, 5)),
    ]
}

fn seed_activity() -> Vec<ActivityEntry> {
    [
        ("New user registered", "Alice Brown", "5 minutes ago"),
        ("Issue reported", "John Doe", "15 minutes ago"),
        ("User suspended", "Admin action", "1 hour ago"),
        ("New politician joined", "David Lee", "2 hours ago"),
        ("Issue resolved", "Sarah Smith", "3 hours ago"),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (action, actor, time))| ActivityEntry {
        id: RecordId::new((n + 1).to_string()),
        action: action.into(),
        actor: Some(actor.into()),
        target: String::new(),
        time: time.into(),
    })
    .collect()
}

fn seed_analytics() -> Analytics {
    const TREND: [(&str, u64, u64); 6] = [
        ("Jan", 65, 58),
        ("Feb", 78, 70),
        ("Mar", 90, 85),
        ("Apr", 81, 78),
        ("May", 95, 88),
        ("Jun", 87, 82),
    ];

    Analytics {
        users_by_role: vec![
            ChartPoint::new("Citizens", 980),
            ChartPoint::new("Politicians", 45),
            ChartPoint::new("Moderators", 25),
            ChartPoint::new("Admins", 5),
        ],
        issues_reported: TREND.iter().map(|(m, reported, _)| ChartPoint::new(*m, *reported)).collect(),
        issues_resolved: TREND.iter().map(|(m, _, resolved)| ChartPoint::new(*m, *resolved)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut dashboard = AdminDashboard::seeded();
        let id = RecordId::from("4");

        assert!(dashboard.toggle_suspend(&id));
        assert_eq!(dashboard.users().get(&id).unwrap().status, AccountStatus::Active);
        assert!(dashboard.toggle_suspend(&id));
        assert_eq!(dashboard.users().get(&id).unwrap().status, AccountStatus::Suspended);
    }

    #[test]
    fn toggle_unknown_user_is_noop() {
        let mut dashboard = AdminDashboard::seeded();
        let before = dashboard.users().clone();

        assert!(!dashboard.toggle_suspend(&"42".into()));
        assert_eq!(dashboard.users(), &before);
    }

    #[test]
    fn analytics_series_line_up() {
        let dashboard = AdminDashboard::seeded();
        let analytics = dashboard.analytics();

        assert_eq!(analytics.issues_reported.len(), analytics.issues_resolved.len());
        assert_eq!(analytics.issues_reported[2], ChartPoint::new("Mar", 90));
        let total: u64 = analytics.users_by_role.iter().map(|p| p.value).sum();
        assert_eq!(total, 1055);
    }
}
