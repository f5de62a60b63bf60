//! citizen-connect/crates/cc-core/src/lib.rs
//!
//! The central domain logic and interface definitions for CitizenConnect:
//! session store, route authorizer and the role dashboards.

pub mod container;
pub mod dashboards;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod routing;
pub mod session;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn session_user_slot_shape() {
        let user = SessionUser {
            id: "k3j2h1g0f".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane.doe@x.com".to_string(),
            role: Role::Citizen,
            avatar: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "k3j2h1g0f",
                "name": "Jane Doe",
                "email": "jane.doe@x.com",
                "role": "citizen"
            })
        );
    }

    #[test]
    fn role_round_trips_through_path_segment() {
        for role in Role::ALL {
            assert_eq!(role.home_path().trim_start_matches('/').parse::<Role>().unwrap(), role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn issue_status_uses_kebab_case() {
        let status: IssueStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, IssueStatus::InProgress);
    }
}
