//! # Translations
//!
//! Display strings keyed by a closed `Language` enum. Every language returns
//! the same fixed record shape, so adding a language or a key without
//! filling it in everywhere fails to compile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "HI",
        }
    }

    /// The language's name in its own script, for the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::validation(format!("unsupported language '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleLabels {
    pub citizen: &'static str,
    pub politician: &'static str,
    pub moderator: &'static str,
    pub admin: &'static str,
}

impl RoleLabels {
    pub fn label(&self, role: Role) -> &'static str {
        match role {
            Role::Citizen => self.citizen,
            Role::Politician => self.politician,
            Role::Moderator => self.moderator,
            Role::Admin => self.admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthStrings {
    pub roles: RoleLabels,
    pub select_role: &'static str,
    pub role_error: &'static str,
    pub sign_in_subtitle: &'static str,
    pub sign_up_subtitle: &'static str,
    pub sign_in_button: &'static str,
    pub sign_up_button: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub auth: AuthStrings,
}

const EN: Translations = Translations {
    auth: AuthStrings {
        roles: RoleLabels {
            citizen: "Citizen",
            politician: "Politician",
            moderator: "Moderator",
            admin: "Admin",
        },
        select_role: "Select your role",
        role_error: "Please select a role to continue.",
        sign_in_subtitle: "Sign in to your account",
        sign_up_subtitle: "Create your account",
        sign_in_button: "Sign In",
        sign_up_button: "Create Account",
    },
};

const HI: Translations = Translations {
    auth: AuthStrings {
        roles: RoleLabels {
            citizen: "नागरिक",
            politician: "जनप्रतिनिधि",
            moderator: "मॉडरेटर",
            admin: "व्यवस्थापक",
        },
        select_role: "अपनी भूमिका चुनें",
        role_error: "आगे बढ़ने के लिए कृपया एक भूमिका चुनें।",
        sign_in_subtitle: "अपने खाते में साइन इन करें",
        sign_up_subtitle: "अपना खाता बनाएं",
        sign_in_button: "साइन इन",
        sign_up_button: "खाता बनाएं",
    },
};

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_labels_every_role() {
        for lang in Language::ALL {
            let labels = translations(lang).auth.roles;
            for role in Role::ALL {
                assert!(!labels.label(role).is_empty(), "{lang:?} has no label for {role}");
            }
        }
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("FR".parse::<Language>().is_err());
    }

    #[test]
    fn role_label_follows_language() {
        assert_eq!(translations(Language::En).auth.roles.label(Role::Admin), "Admin");
        assert_eq!(translations(Language::Hi).auth.roles.label(Role::Citizen), "नागरिक");
    }
}
