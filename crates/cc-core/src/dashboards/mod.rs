//! # Role Dashboards
//!
//! One state container per role, each seeded with mock data at startup and
//! mutated in memory for the lifetime of the process. Nothing is shared
//! between them: resolving an issue on the politician dashboard does not
//! touch the citizen's copy.

pub mod admin;
pub mod citizen;
pub mod moderator;
pub mod politician;

use chrono::NaiveDate;
use serde::Serialize;

pub use admin::{AdminDashboard, AdminView, Analytics};
pub use citizen::{CitizenDashboard, CitizenView};
pub use moderator::{ModerationAction, ModeratorDashboard, ModeratorView};
pub use politician::{PoliticianDashboard, PoliticianView};

use crate::models::{Role, SessionUser};

/// Seed dates are literals; an impossible one collapses to `NaiveDate::MIN`.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone)]
pub struct Dashboards {
    pub citizen: CitizenDashboard,
    pub politician: PoliticianDashboard,
    pub moderator: ModeratorDashboard,
    pub admin: AdminDashboard,
}

impl Dashboards {
    pub fn seeded() -> Self {
        Self {
            citizen: CitizenDashboard::seeded(),
            politician: PoliticianDashboard::seeded(),
            moderator: ModeratorDashboard::seeded(),
            admin: AdminDashboard::seeded(),
        }
    }

    /// The data the presentation layer needs for `viewer`'s dashboard.
    pub fn view(&self, viewer: &SessionUser) -> DashboardView<'_> {
        match viewer.role {
            Role::Citizen => DashboardView::Citizen(self.citizen.view()),
            Role::Politician => DashboardView::Politician(self.politician.view()),
            Role::Moderator => DashboardView::Moderator(self.moderator.view(&viewer.name)),
            Role::Admin => DashboardView::Admin(self.admin.view()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardView<'a> {
    Citizen(CitizenView<'a>),
    Politician(PoliticianView<'a>),
    Moderator(ModeratorView<'a>),
    Admin(AdminView<'a>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_tagged_with_role() {
        let dashboards = Dashboards::seeded();
        let viewer = SessionUser {
            id: "x".into(),
            name: "Ravi".into(),
            email: "ravi@x.com".into(),
            role: Role::Politician,
            avatar: None,
        };

        let json = serde_json::to_value(dashboards.view(&viewer)).unwrap();
        assert_eq!(json["role"], "politician");
        assert_eq!(json["issues"][0]["status"], "in-progress");
        assert_eq!(json["stats"][3]["value"], 423);
    }

    #[test]
    fn dashboards_do_not_share_records() {
        let mut dashboards = Dashboards::seeded();
        dashboards.politician.set_status(&"2".into(), crate::models::IssueStatus::Resolved);

        let citizen_copy = dashboards.citizen.issues().get(&"2".into()).unwrap();
        assert_eq!(citizen_copy.status, crate::models::IssueStatus::Pending);
    }
}
