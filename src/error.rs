use miette::Diagnostic;
use thiserror::Error;

/// Message shown when a signup request fails without a usable server detail.
pub const SIGNUP_FAILED: &str = "회원가입에 실패했습니다.";

/// Message shown when a profile save fails without a usable server detail.
pub const PROFILE_SAVE_FAILED: &str = "프로필 저장에 실패했습니다.";

/// Message shown when the stored signup user cannot be fetched.
pub const RESUME_LOAD_FAILED: &str = "이력서를 불러오지 못했습니다.";

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Client-side validation failure, blocks step advancement.
    #[error("{0}")]
    #[diagnostic(code(jobmatch::validation))]
    Validation(String),

    /// Non-2xx answer from the API, `detail` is already resolved to a display string.
    #[error("{detail}")]
    #[diagnostic(code(jobmatch::api))]
    Api { status: u16, detail: String },

    #[error(transparent)]
    #[diagnostic(code(jobmatch::http))]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(jobmatch::config))]
    Config(String),

    #[error("사용자 정보를 찾을 수 없습니다. 다시 로그인해주세요.")]
    #[diagnostic(help("complete the signup wizard before starting onboarding"))]
    MissingSignupUser,

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl Error {
    /// The single human-readable message surfaced inline by a wizard.
    ///
    /// Server supplied details and validation messages are shown as-is,
    /// everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::Api { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            Error::MissingSignupUser => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_detail_is_shown_verbatim() {
        let err = Error::Api {
            status: 400,
            detail: "이미 가입된 이메일입니다.".to_string(),
        };
        assert_eq!(err.user_message(SIGNUP_FAILED), "이미 가입된 이메일입니다.");
    }

    #[test]
    fn test_blank_detail_falls_back() {
        let err = Error::Api {
            status: 500,
            detail: "  ".to_string(),
        };
        assert_eq!(err.user_message(SIGNUP_FAILED), SIGNUP_FAILED);
        assert_eq!(Error::SubmissionInFlight.user_message(PROFILE_SAVE_FAILED), PROFILE_SAVE_FAILED);
    }
}
