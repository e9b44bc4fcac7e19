use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;
use jobmatch_ui::api::models::{
    ApplicantSummary, BusinessType, EmployerSignupPayload, EmployerSignupResponse, Gender, JobSeekerProfilePayload,
    JobSeekerProfileResponse, JobSummary, SignupPayload, SignupResponse, SignupUserResponse, UserRole,
};
use jobmatch_ui::api::{error_from_body, Api};
use jobmatch_ui::catalog::Nationality;
use jobmatch_ui::session::{AppContext, UserMode};
use jobmatch_ui::state::employer::CompanyField;
use jobmatch_ui::state::onboarding::ExperienceField;
use jobmatch_ui::state::signup::SignupField;
use jobmatch_ui::state::{load_resume, EmployerSignupWizard, OnboardingWizard, SignupWizard, Term};
use jobmatch_ui::{Error, Result};
use tempfile::TempDir;

/// In-memory API answering from queued outcomes.
#[derive(Default)]
struct FakeApi {
    signup_outcomes: Mutex<Vec<Result<SignupResponse>>>,
    signups: Mutex<Vec<SignupPayload>>,
    employer_signups: Mutex<Vec<EmployerSignupPayload>>,
    profiles: Mutex<Vec<JobSeekerProfilePayload>>,
}

impl FakeApi {
    fn queue_signup(&self, outcome: Result<SignupResponse>) {
        self.signup_outcomes.lock().unwrap().insert(0, outcome);
    }
}

#[async_trait]
impl Api for FakeApi {
    async fn fetch_nationalities(&self) -> Result<Vec<Nationality>> {
        Ok(vec![Nationality {
            code: "VN".to_string(),
            name: "베트남".to_string(),
        }])
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<SignupResponse> {
        self.signups.lock().unwrap().push(payload.clone());
        self.signup_outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(Error::Config("no outcome queued".to_string())))
    }

    async fn signup_employer(
        &self,
        payload: &EmployerSignupPayload,
    ) -> Result<EmployerSignupResponse> {
        self.employer_signups.lock().unwrap().push(payload.clone());
        Ok(EmployerSignupResponse {
            id: "employer-9f8e7d6c".to_string(),
            role: "employer".to_string(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            message: None,
        })
    }

    async fn create_job_seeker_profile(
        &self,
        payload: &JobSeekerProfilePayload,
    ) -> Result<JobSeekerProfileResponse> {
        self.profiles.lock().unwrap().push(payload.clone());
        Ok(JobSeekerProfileResponse {
            id: "profile-1".to_string(),
            user_id: payload.user_id.clone(),
        })
    }

    async fn list_jobs(&self) -> Result<Vec<JobSummary>> {
        Ok(Vec::new())
    }

    async fn list_applicants(&self) -> Result<Vec<ApplicantSummary>> {
        Ok(Vec::new())
    }

    async fn fetch_signup_user(&self, user_id: &str) -> Result<SignupUserResponse> {
        if user_id != "signup-1a2b3c4d" {
            return Err(error_from_body(404, r#"{"detail":"User not found"}"#, "not found"));
        }
        Ok(SignupUserResponse {
            id: user_id.to_string(),
            role: "job_seeker".to_string(),
            name: "Tran Thi Mai".to_string(),
            phone: Some("01012345678".to_string()),
            birthdate: Some("1997-03-14".to_string()),
            gender: Some("female".to_string()),
            nationality_code: Some("VN".to_string()),
            nationality_name: None,
            created_at: Some("2025-03-14T10:00:00".to_string()),
        })
    }
}

fn ready_signup_wizard() -> SignupWizard {
    let mut w = SignupWizard::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    w.select_role(UserRole::JobSeeker);
    w.set_field(SignupField::Name, "Tran Thi Mai");
    w.set_field(SignupField::Phone, "01012345678");
    w.birthdate_picker_mut().set_year(1997);
    w.confirm_birthdate();
    w.select_gender(Gender::Female);
    w.select_nationality("VN");
    assert!(w.go_next());
    w.toggle_all_terms();
    w
}

#[tokio::test]
async fn test_signup_failure_shows_server_detail_and_keeps_values() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let api = FakeApi::default();
    api.queue_signup(Err(error_from_body(
        400,
        r#"{"detail":"이미 가입된 이메일입니다."}"#,
        "Signup failed",
    )));

    let mut w = ready_signup_wizard();
    let before = w.values().clone();

    let result = w.submit(&api, &ctx).await;
    assert_matches!(result, Err(Error::Api { status: 400, .. }));
    assert_eq!(w.submission().error(), Some("이미 가입된 이메일입니다."));
    assert!(!w.submission().is_submitting());
    assert_eq!(w.values(), &before);
    assert_eq!(ctx.signup_user_id(), None);

    // correction and resubmission go through
    api.queue_signup(Ok(SignupResponse {
        id: "signup-1a2b3c4d".to_string(),
        role: "job_seeker".to_string(),
        name: "Tran Thi Mai".to_string(),
        message: "회원가입이 완료되었습니다.".to_string(),
    }));
    w.toggle_term(Term::MarketingOptional);
    let response = w.submit(&api, &ctx).await.unwrap();
    assert_eq!(response.id, "signup-1a2b3c4d");
    assert_eq!(
        w.submission().success_message(),
        Some("Tran Thi Mai님, 회원가입이 완료되었습니다.")
    );
    assert_eq!(ctx.signup_user_id().as_deref(), Some("signup-1a2b3c4d"));

    let sent = api.signups.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].terms.marketing_optional);
    assert!(!sent[1].terms.marketing_optional);
    assert_eq!(sent[1].birthdate, "1997-03-14");
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_refused() {
    let mut w = ready_signup_wizard();
    w.begin_submit().unwrap();
    assert_matches!(w.begin_submit(), Err(Error::SubmissionInFlight));
}

#[tokio::test]
async fn test_nationalities_load_through_api() {
    let api = FakeApi::default();
    let mut w = SignupWizard::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    w.load_nationalities(&api).await;
    assert_eq!(w.nationalities()[0].code, "VN");
}

#[tokio::test]
async fn test_employer_signup_switches_mode() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let api = FakeApi::default();

    let mut w = EmployerSignupWizard::new();
    w.set_name("김사장");
    w.set_email("boss@shop.kr");
    w.set_password("sajang1");
    assert!(w.next_from_info());
    assert!(w.agree_to_rules());
    w.set_business_type(Some(BusinessType::BusinessOwner));
    w.set_company_field(CompanyField::CompanyName, "한빛식당");
    w.set_company_field(CompanyField::BaseAddress, "서울특별시 마포구 월드컵로 1");
    w.set_company_field(CompanyField::DetailAddress, "2층");
    w.set_company_field(CompanyField::Phone, "0212345678");
    w.set_company_field(CompanyField::Industry, "음식점");

    w.submit(&api, &ctx).await.unwrap();
    assert_eq!(ctx.session().mode, UserMode::Employer);
    assert_eq!(ctx.signup_user_id().as_deref(), Some("employer-9f8e7d6c"));

    let sent = api.employer_signups.lock().unwrap();
    assert_eq!(sent[0].address_detail.as_deref(), Some("2층"));
    assert_eq!(sent[0].business_type, "business");
}

#[tokio::test]
async fn test_onboarding_requires_signup_user() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let api = FakeApi::default();

    let mut w = OnboardingWizard::new();
    while w.go_next() {}
    let result = w.submit(&api, &ctx).await;
    assert_matches!(result, Err(Error::MissingSignupUser));
    assert_eq!(
        w.submission().error(),
        Some("사용자 정보를 찾을 수 없습니다. 다시 로그인해주세요.")
    );
    assert!(api.profiles.lock().unwrap().is_empty());

    ctx.set_signup_user_id(Some("signup-1a2b3c4d")).unwrap();
    w.set_experience(ExperienceField::Career, "식당 주방 2년");
    w.submit(&api, &ctx).await.unwrap();

    let sent = api.profiles.lock().unwrap();
    assert_eq!(sent[0].user_id, "signup-1a2b3c4d");
    assert_eq!(sent[0].experience.sections, vec!["career"]);
}

#[tokio::test]
async fn test_resume_loads_stored_signup_user() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::open(temp_dir.path()).unwrap();
    let api = FakeApi::default();

    assert_matches!(load_resume(&api, &ctx).await, Err(Error::MissingSignupUser));

    ctx.set_signup_user_id(Some("signup-0000")).unwrap();
    assert_matches!(
        load_resume(&api, &ctx).await,
        Err(Error::Api { status: 404, ref detail }) if detail == "User not found"
    );

    ctx.set_signup_user_id(Some("signup-1a2b3c4d")).unwrap();
    let view = load_resume(&api, &ctx).await.unwrap();
    assert_eq!(view.name, "Tran Thi Mai");
    assert_eq!(view.birth_year, Some(1997));
    assert_eq!(view.nationality.as_deref(), Some("VN"));
}
