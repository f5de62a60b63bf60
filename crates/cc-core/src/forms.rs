//! Form checks that belong to the caller rather than the session store.

use crate::error::{AppError, Result};
use crate::models::IssueDraft;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-up form checks: the confirmation must match and the password must be
/// at least `MIN_PASSWORD_LEN` characters long.
pub fn check_sign_up_form(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        return Err(AppError::validation("Passwords do not match."));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}

/// Issue report form: every descriptive field must be filled in.
pub fn check_issue_draft(draft: &IssueDraft) -> Result<()> {
    let fields = [
        ("title", &draft.title),
        ("description", &draft.description),
        ("category", &draft.category),
        ("location", &draft.location),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(AppError::validation(format!("Issue {name} is required."))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueStatus;

    #[test]
    fn mismatch_is_reported_before_length() {
        let err = check_sign_up_form("abc", "abd").unwrap_err();
        assert_eq!(err, AppError::validation("Passwords do not match."));
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(check_sign_up_form("12345", "12345").is_err());
        assert!(check_sign_up_form("123456", "123456").is_ok());
    }

    #[test]
    fn issue_draft_needs_every_field() {
        let mut draft = IssueDraft {
            title: "Pothole".into(),
            description: "Deep".into(),
            category: "Roads".into(),
            status: IssueStatus::Pending,
            reporter: None,
            location: String::new(),
        };
        let err = check_issue_draft(&draft).unwrap_err();
        assert_eq!(err.message(), "Issue location is required.");

        draft.location = "Ring Road".into();
        assert!(check_issue_draft(&draft).is_ok());
    }
}
