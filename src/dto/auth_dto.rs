use serde::{Deserialize, Serialize};
use validator::Validate;

/// Counted in characters, as `validator` length checks count them.
pub const LOGIN_MIN_PASSWORD_LEN: u64 = 6;
pub const SIGNUP_MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = LOGIN_MIN_PASSWORD_LEN))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
    pub password: String,
    #[serde(default)]
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PasswordChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn passed(&self) -> u8 {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.number,
            self.special,
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub checks: PasswordChecks,
    pub label: StrengthLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(password: &str) -> LoginPayload {
        LoginPayload {
            email: "a@b.c".into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_password_length_follows_threshold() {
        let at_threshold = "x".repeat(LOGIN_MIN_PASSWORD_LEN as usize);
        assert!(payload(&at_threshold).validate().is_ok());

        let errors = payload(&at_threshold[1..]).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn login_threshold_counts_characters() {
        assert!(payload("ååååøø").validate().is_ok());
    }
}
