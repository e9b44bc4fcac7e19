//! Read-only resume built from the stored signup user

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::api::models::SignupUserResponse;
use crate::api::Api;
use crate::error::{Error, Result};
use crate::session::AppContext;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRow {
    pub label: &'static str,
    pub value: String,
}

/// Basic information section of the resume page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeView {
    pub name: String,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub member_since: Option<String>,
}

impl ResumeView {
    /// Label/value pairs in display order. Unknown values are left out.
    pub fn rows(&self) -> Vec<ResumeRow> {
        let mut rows = vec![ResumeRow {
            label: "이름",
            value: self.name.clone(),
        }];
        let mut push = |label: &'static str, value: Option<String>| {
            if let Some(value) = value {
                rows.push(ResumeRow { label, value });
            }
        };
        push("출생 연도", self.birth_year.map(|year| format!("{year}년생")));
        push("성별", self.gender.clone());
        push("국적", self.nationality.clone());
        push("연락처", self.phone.clone());
        push("가입일", self.member_since.clone());
        rows
    }
}

fn gender_label(gender: &str) -> String {
    match gender {
        "male" => "남성".to_string(),
        "female" => "여성".to_string(),
        other => other.to_string(),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl From<&SignupUserResponse> for ResumeView {
    fn from(user: &SignupUserResponse) -> Self {
        let birth_year = non_blank(&user.birthdate)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year());
        let nationality = non_blank(&user.nationality_name)
            .or_else(|| non_blank(&user.nationality_code))
            .map(str::to_string);
        Self {
            name: user.name.clone(),
            birth_year,
            gender: non_blank(&user.gender).map(gender_label),
            nationality,
            phone: non_blank(&user.phone).map(validate::format_phone),
            member_since: non_blank(&user.created_at)
                .map(|created| created.chars().take(10).collect()),
        }
    }
}

/// Fetches the signup user remembered in `ctx`.
pub async fn load_resume(api: &dyn Api, ctx: &AppContext) -> Result<ResumeView> {
    let user_id = ctx.signup_user_id().ok_or(Error::MissingSignupUser)?;
    let user = api.fetch_signup_user(&user_id).await?;
    info!(user_id = %user.id, "loaded resume");
    Ok(ResumeView::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_user() -> SignupUserResponse {
        SignupUserResponse {
            id: "signup-1a2b3c4d".to_string(),
            role: "job_seeker".to_string(),
            name: "Tran Thi Mai".to_string(),
            phone: Some("01012345678".to_string()),
            birthdate: Some("1996-04-02".to_string()),
            gender: Some("female".to_string()),
            nationality_code: Some("VN".to_string()),
            nationality_name: Some("베트남".to_string()),
            created_at: Some("2025-03-14T09:30:00".to_string()),
        }
    }

    #[test]
    fn test_rows_from_signup_user() {
        let view = ResumeView::from(&signup_user());
        let rows = view.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].value, "1996년생");
        assert_eq!(rows[3].value, "베트남");
        assert_eq!(view.birth_year, Some(1996));
        assert_eq!(view.gender.as_deref(), Some("여성"));
        assert_eq!(view.phone.as_deref(), Some("010-1234-5678"));
        assert_eq!(view.member_since.as_deref(), Some("2025-03-14"));
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let user = SignupUserResponse {
            phone: Some(" ".to_string()),
            birthdate: None,
            gender: None,
            nationality_name: None,
            created_at: None,
            ..signup_user()
        };
        let view = ResumeView::from(&user);
        assert_eq!(view.nationality.as_deref(), Some("VN"));
        let labels: Vec<&str> = view.rows().iter().map(|row| row.label).collect();
        assert_eq!(labels, ["이름", "국적"]);
    }
}
