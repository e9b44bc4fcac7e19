//! Wire models exchanged with the REST API
//!
//! Field names are snake_case on the wire and in Rust alike; the
//! constructors here are the only place wizard state is turned into
//! request bodies.

use serde::{Deserialize, Serialize};

use crate::state::terms::TermsState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => "job_seeker",
            UserRole::Employer => "employer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => "구직자",
            UserRole::Employer => "고용주",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    BusinessOwner,
    NotBusinessOwner,
}

impl BusinessType {
    /// Value the signup endpoint expects in `business_type`.
    pub fn wire_value(&self) -> &'static str {
        match self {
            BusinessType::BusinessOwner => "business",
            BusinessType::NotBusinessOwner => "individual",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermsPayload {
    pub tos_required: bool,
    pub privacy_required: bool,
    pub sms_optional: bool,
    pub marketing_optional: bool,
}

impl From<TermsState> for TermsPayload {
    fn from(terms: TermsState) -> Self {
        Self {
            tos_required: terms.tos_required,
            privacy_required: terms.privacy_required,
            sms_optional: terms.sms_optional,
            marketing_optional: terms.marketing_optional,
        }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupPayload {
    pub role: UserRole,
    pub name: String,
    pub phone: String,
    pub birthdate: String,
    pub gender: Gender,
    pub nationality_code: String,
    pub terms: TermsPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupResponse {
    pub id: String,
    pub role: String,
    pub name: String,
    pub message: String,
}

/// Answer of `GET /auth/signup-user/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupUserResponse {
    pub id: String,
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality_code: Option<String>,
    #[serde(default)]
    pub nationality_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /auth/signup/employer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployerSignupPayload {
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password: String,
    pub business_type: String,
    pub company_name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployerSignupResponse {
    pub id: String,
    pub role: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperienceData {
    pub career: String,
    pub license: String,
    pub skills: String,
    pub introduction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperiencePayload {
    pub sections: Vec<String>,
    pub data: ExperienceData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkSchedulePayload {
    pub available_dates: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<String>,
}

/// Body of `POST /job-seeker/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobSeekerProfilePayload {
    pub user_id: String,
    pub basic_info_file_name: String,
    pub preferred_regions: Vec<String>,
    pub preferred_jobs: Vec<String>,
    pub experience: ExperiencePayload,
    pub work_schedule: WorkSchedulePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobSeekerProfileResponse {
    pub id: String,
    pub user_id: String,
}

/// Error body of a non-2xx answer.
///
/// `detail` is usually a string, FastAPI validation failures send a list
/// of `{msg}` objects instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorItem>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorItem {
    #[serde(alias = "message")]
    pub msg: String,
}

impl ErrorDetail {
    pub fn into_message(self) -> String {
        match self {
            ErrorDetail::Message(msg) => msg,
            ErrorDetail::Items(items) => items
                .into_iter()
                .map(|item| item.msg)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Job posting as listed to job seekers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub language_level: String,
    pub city: String,
    pub district: String,
    pub experience: String,
    #[serde(default)]
    pub work_schedule: Vec<String>,
    #[serde(default)]
    pub visas: Vec<String>,
}

/// Applicant card as listed to employers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicantSummary {
    pub id: String,
    pub name: String,
    pub language_level: String,
    pub city: String,
    pub district: String,
    pub experience: String,
    #[serde(default)]
    pub work_schedule: Vec<String>,
    pub visa: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_payload_shape() {
        let payload = SignupPayload {
            role: UserRole::JobSeeker,
            name: "Tran".to_string(),
            phone: "01012345678".to_string(),
            birthdate: "1998-07-01".to_string(),
            gender: Gender::Female,
            nationality_code: "VN".to_string(),
            terms: TermsPayload {
                tos_required: true,
                privacy_required: true,
                sms_optional: false,
                marketing_optional: false,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "job_seeker");
        assert_eq!(json["gender"], "female");
        assert_eq!(json["nationality_code"], "VN");
        assert_eq!(json["terms"]["privacy_required"], true);
        assert_eq!(json["terms"]["sms_optional"], false);
    }

    #[test]
    fn test_employer_payload_omits_empty_detail() {
        let payload = EmployerSignupPayload {
            role: UserRole::Employer,
            name: "김사장".to_string(),
            email: "boss@example.com".to_string(),
            password: "sajang1".to_string(),
            business_type: BusinessType::BusinessOwner.wire_value().to_string(),
            company_name: "한빛식당".to_string(),
            address: "서울특별시 마포구".to_string(),
            address_detail: None,
            phone: Some("0212345678".to_string()),
            industry: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "employer");
        assert_eq!(json["business_type"], "business");
        assert_eq!(json["password"], "sajang1");
        assert!(json.get("address_detail").is_none());
        assert!(json.get("industry").is_none());
    }

    #[test]
    fn test_error_detail_variants() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"이미 가입된 이메일입니다."}"#).unwrap();
        assert_eq!(body.detail.unwrap().into_message(), "이미 가입된 이메일입니다.");

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"msg":"field required"},{"msg":"bad email"}]}"#)
                .unwrap();
        assert_eq!(body.detail.unwrap().into_message(), "field required, bad email");
    }
}
