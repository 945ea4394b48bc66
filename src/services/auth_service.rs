use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::dto::auth_dto::{
    LoginPayload, PasswordChecks, PasswordStrength, SignupPayload, StrengthLabel,
    SIGNUP_MIN_PASSWORD_LEN,
};
use crate::error::Result;
use crate::models::user::User;
use crate::services::api_service::MockApi;
use crate::services::session_service::{Route, SessionService};
use crate::utils::{delay::cancellable_sleep, validation};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const TERMS_REQUIRED: &str = "Please agree to the Terms of Service and Privacy Policy";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(User),
    /// Inline message for the form; the user corrects input and resubmits.
    Rejected(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Registered(Route),
    Rejected(&'static str),
}

#[derive(Clone)]
pub struct AuthService {
    api: MockApi,
    signup_delay: Duration,
}

impl AuthService {
    pub fn new(api: MockApi, signup_delay: Duration) -> Self {
        Self { api, signup_delay }
    }

    pub async fn login(
        &self,
        payload: LoginPayload,
        session: &mut SessionService,
        token: &CancellationToken,
    ) -> Result<LoginOutcome> {
        if let Err(errors) = validation::validate(&payload) {
            tracing::debug!(fields = ?validation::failed_fields(&errors), "login form rejected");
            return Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS));
        }

        match self
            .api
            .login(payload.email.trim(), &payload.password, token)
            .await?
        {
            Some(user) => {
                session.remember(&user)?;
                tracing::info!(user_id = %user.id, "user signed in");
                Ok(LoginOutcome::SignedIn(user))
            }
            None => Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS)),
        }
    }

    /// Checks run in form order: terms first, then password length.
    pub fn check_signup(payload: &SignupPayload) -> std::result::Result<(), &'static str> {
        if !payload.agree_to_terms {
            return Err(TERMS_REQUIRED);
        }
        if payload.password.chars().count() < SIGNUP_MIN_PASSWORD_LEN {
            return Err(PASSWORD_TOO_SHORT);
        }
        Ok(())
    }

    pub async fn signup(
        &self,
        payload: SignupPayload,
        token: &CancellationToken,
    ) -> Result<SignupOutcome> {
        if let Err(message) = Self::check_signup(&payload) {
            return Ok(SignupOutcome::Rejected(message));
        }

        cancellable_sleep(self.signup_delay, token).await?;
        tracing::info!(email = %payload.email, company = %payload.company_name, "signup accepted");
        Ok(SignupOutcome::Registered(Route::Login { registered: true }))
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = PasswordChecks {
        length: password.chars().count() >= SIGNUP_MIN_PASSWORD_LEN,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    };
    let score = checks.passed();
    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3 => StrengthLabel::Fair,
        4 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    };

    PasswordStrength {
        score,
        checks,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, agree_to_terms: bool) -> SignupPayload {
        SignupPayload {
            first_name: "Ines".into(),
            last_name: "Berg".into(),
            email: "ines@example.com".into(),
            company_name: "Fjord AB".into(),
            password: password.into(),
            agree_to_terms,
        }
    }

    #[test]
    fn terms_are_checked_before_password() {
        assert_eq!(
            AuthService::check_signup(&signup("short", false)),
            Err(TERMS_REQUIRED)
        );
        assert_eq!(
            AuthService::check_signup(&signup("short", true)),
            Err(PASSWORD_TOO_SHORT)
        );
        assert_eq!(AuthService::check_signup(&signup("longenough", true)), Ok(()));
    }

    #[test]
    fn strength_scores_each_character_class() {
        assert_eq!(password_strength("").score, 0);
        assert_eq!(password_strength("abc").label, StrengthLabel::Weak);

        let fair = password_strength("abcdefgh1");
        assert_eq!(fair.score, 3);
        assert_eq!(fair.label, StrengthLabel::Fair);

        let good = password_strength("Abcdefgh1");
        assert_eq!(good.label, StrengthLabel::Good);

        let strong = password_strength("Abcdefgh1!");
        assert_eq!(strong.score, 5);
        assert_eq!(strong.label, StrengthLabel::Strong);
        assert!(strong.checks.special);
    }
}
