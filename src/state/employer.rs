//! Employer signup wizard
//!
//! Info (name, email, password) → rules (warning notice and agreement) → confirm
//! (company details), where confirming submits the whole flow.

use tracing::{info, warn};

use crate::api::models::{BusinessType, EmployerSignupPayload, EmployerSignupResponse, UserRole};
use crate::api::Api;
use crate::error::{Error, Result, SIGNUP_FAILED};
use crate::session::{AppContext, UserMode};
use crate::state::sequencer::{StepSequencer, WizardStep};
use crate::state::submission::SubmissionState;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployerStep {
    Info,
    Rules,
    Confirm,
}

impl WizardStep for EmployerStep {
    const ALL: &'static [Self] = &[EmployerStep::Info, EmployerStep::Rules, EmployerStep::Confirm];

    fn number(self) -> u8 {
        match self {
            EmployerStep::Info => 1,
            EmployerStep::Rules => 2,
            EmployerStep::Confirm => 3,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            EmployerStep::Info => "기본 정보",
            EmployerStep::Rules => "이용 규정",
            EmployerStep::Confirm => "회사 정보 확인",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyInfo {
    pub business_type: Option<BusinessType>,
    pub company_name: String,
    pub base_address: String,
    pub detail_address: String,
    pub no_detail_address: bool,
    pub phone: String,
    pub industry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerSignupState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub has_seen_warning: bool,
    pub has_agreed_rules: bool,
    pub company: CompanyInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    CompanyName,
    BaseAddress,
    DetailAddress,
    Phone,
    Industry,
}

#[derive(Debug, Clone, Default)]
pub struct EmployerSignupWizard {
    steps: StepSequencer<EmployerStep>,
    state: EmployerSignupState,
    error: Option<String>,
    submission: SubmissionState,
}

impl EmployerSignupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> EmployerStep {
        self.steps.current()
    }

    pub fn steps(&self) -> &StepSequencer<EmployerStep> {
        &self.steps
    }

    pub fn state(&self) -> &EmployerSignupState {
        &self.state
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Inline message: a validation failure, else the last submit failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().or_else(|| self.submission.error())
    }

    fn touch(&mut self) {
        self.error = None;
        self.submission.clear_error();
    }

    pub fn set_name(&mut self, name: &str) {
        self.state.name = name.to_string();
        self.touch();
    }

    pub fn set_email(&mut self, email: &str) {
        self.state.email = email.to_string();
        self.touch();
    }

    pub fn set_password(&mut self, password: &str) {
        self.state.password = password.to_string();
        self.touch();
    }

    fn check_info(&self) -> std::result::Result<(), &'static str> {
        if !validate::is_present(&self.state.name) {
            return Err("이름을 입력해주세요.");
        }
        if !validate::is_present(&self.state.email) {
            return Err("이메일을 입력해주세요.");
        }
        if !validate::is_valid_email(&self.state.email) {
            return Err("올바른 이메일 형식을 입력해주세요.");
        }
        if !validate::is_valid_password(&self.state.password) {
            return Err("비밀번호는 6자 이상 입력해주세요.");
        }
        Ok(())
    }

    fn check_company(&self) -> std::result::Result<(), &'static str> {
        let company = &self.state.company;
        if !validate::is_valid_company_name(&company.company_name) {
            return Err("회사명을 입력해주세요.");
        }
        if !validate::is_present(&company.base_address) {
            return Err("기본 주소를 입력해주세요.");
        }
        if !company.no_detail_address && !validate::is_present(&company.detail_address) {
            return Err("상세 주소를 입력해주세요.");
        }
        if !validate::is_present(&company.phone) {
            return Err("전화번호를 입력해주세요.");
        }
        if !validate::is_present(&company.industry) {
            return Err("업직종을 선택해주세요.");
        }
        Ok(())
    }

    pub fn is_step_complete(&self, step: EmployerStep) -> bool {
        match step {
            EmployerStep::Info => self.check_info().is_ok(),
            EmployerStep::Rules => self.state.has_agreed_rules,
            EmployerStep::Confirm => self.check_company().is_ok(),
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.is_step_complete(self.step())
    }

    /// Validates the info step and advances, or records the first problem.
    pub fn next_from_info(&mut self) -> bool {
        if self.step() != EmployerStep::Info {
            return false;
        }
        match self.check_info() {
            Ok(()) => {
                self.error = None;
                self.steps.go_next(true)
            }
            Err(msg) => {
                self.error = Some(msg.to_string());
                false
            }
        }
    }

    pub fn acknowledge_warning(&mut self) {
        self.state.has_seen_warning = true;
    }

    /// Records rule agreement and moves to the confirm step.
    pub fn agree_to_rules(&mut self) -> bool {
        if self.step() != EmployerStep::Rules {
            return false;
        }
        self.state.has_agreed_rules = true;
        self.steps.go_next(true)
    }

    pub fn go_prev(&mut self) -> bool {
        self.error = None;
        self.steps.go_prev()
    }

    pub fn set_business_type(&mut self, business_type: Option<BusinessType>) {
        self.state.company.business_type = business_type;
        self.touch();
    }

    pub fn set_company_field(&mut self, field: CompanyField, value: &str) {
        let company = &mut self.state.company;
        match field {
            CompanyField::CompanyName => {
                company.company_name = validate::truncate_company_name(value)
            }
            CompanyField::BaseAddress => company.base_address = value.to_string(),
            CompanyField::DetailAddress => company.detail_address = value.to_string(),
            CompanyField::Phone => company.phone = validate::sanitize_phone(value),
            CompanyField::Industry => company.industry = value.to_string(),
        }
        self.touch();
    }

    /// Flips "no detail address"; turning it on clears the detail address.
    pub fn toggle_no_detail_address(&mut self) {
        let company = &mut self.state.company;
        company.no_detail_address = !company.no_detail_address;
        if company.no_detail_address {
            company.detail_address.clear();
        }
        self.touch();
    }

    pub fn begin_submit(&mut self) -> Result<EmployerSignupPayload> {
        if self.step() != EmployerStep::Confirm {
            return Err(Error::Validation("회사 정보를 먼저 입력해주세요.".to_string()));
        }
        if let Err(msg) = self.check_company() {
            self.error = Some(msg.to_string());
            return Err(Error::Validation(msg.to_string()));
        }
        self.submission.begin()?;
        self.error = None;
        Ok(self.payload())
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<EmployerSignupResponse>,
        ctx: &AppContext,
    ) -> Result<EmployerSignupResponse> {
        match outcome {
            Ok(response) => {
                info!(user_id = %response.id, "employer signup completed");
                if let Err(e) = ctx
                    .set_signup_user_id(Some(&response.id))
                    .and_then(|_| ctx.set_mode(UserMode::Employer))
                {
                    warn!("Failed to persist employer session: {}", e);
                }
                let message = response
                    .message
                    .clone()
                    .unwrap_or_else(|| "회원가입이 완료되었습니다.".to_string());
                self.submission.succeed(message);
                Ok(response)
            }
            Err(e) => {
                self.submission.fail(&e, SIGNUP_FAILED);
                Err(e)
            }
        }
    }

    pub async fn submit(
        &mut self,
        api: &dyn Api,
        ctx: &AppContext,
    ) -> Result<EmployerSignupResponse> {
        let payload = self.begin_submit()?;
        let outcome = api.signup_employer(&payload).await;
        self.finish_submit(outcome, ctx)
    }

    fn payload(&self) -> EmployerSignupPayload {
        let s = &self.state;
        let company = &s.company;
        let address_detail = if company.no_detail_address || company.detail_address.trim().is_empty()
        {
            None
        } else {
            Some(company.detail_address.clone())
        };
        let non_empty = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        EmployerSignupPayload {
            role: UserRole::Employer,
            name: s.name.trim().to_string(),
            email: s.email.trim().to_string(),
            password: s.password.clone(),
            business_type: company
                .business_type
                .unwrap_or(BusinessType::BusinessOwner)
                .wire_value()
                .to_string(),
            company_name: company.company_name.trim().to_string(),
            address: company.base_address.trim().to_string(),
            address_detail,
            phone: non_empty(&company.phone),
            industry: non_empty(&company.industry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_errors_in_order() {
        let mut w = EmployerSignupWizard::new();
        assert!(!w.next_from_info());
        assert_eq!(w.error(), Some("이름을 입력해주세요."));

        w.set_name("김사장");
        assert_eq!(w.error(), None);
        assert!(!w.next_from_info());
        assert_eq!(w.error(), Some("이메일을 입력해주세요."));

        w.set_email("boss@shop");
        assert!(!w.next_from_info());
        assert_eq!(w.error(), Some("올바른 이메일 형식을 입력해주세요."));

        w.set_email("boss@shop.kr");
        assert!(!w.next_from_info());
        assert_eq!(w.error(), Some("비밀번호는 6자 이상 입력해주세요."));

        w.set_password("12345");
        assert!(!w.next_from_info());
        w.set_password("sajang1");
        assert!(w.next_from_info());
        assert_eq!(w.step(), EmployerStep::Rules);
    }

    #[test]
    fn test_rules_then_confirm() {
        let mut w = EmployerSignupWizard::new();
        assert!(!w.agree_to_rules());
        w.set_name("김사장");
        w.set_email("boss@shop.kr");
        w.set_password("sajang1");
        w.next_from_info();
        w.acknowledge_warning();
        assert!(w.agree_to_rules());
        assert_eq!(w.step(), EmployerStep::Confirm);
        assert!(w.state().has_agreed_rules);
        assert!(w.go_prev());
        assert_eq!(w.step(), EmployerStep::Rules);
    }

    #[test]
    fn test_company_name_is_capped() {
        let mut w = EmployerSignupWizard::new();
        w.set_company_field(CompanyField::CompanyName, &"a".repeat(60));
        assert_eq!(w.state().company.company_name.len(), validate::MAX_COMPANY_NAME_LENGTH);
    }

    #[test]
    fn test_no_detail_address_clears_detail() {
        let mut w = EmployerSignupWizard::new();
        w.set_company_field(CompanyField::DetailAddress, "2층");
        w.toggle_no_detail_address();
        assert!(w.state().company.detail_address.is_empty());
        assert!(w.state().company.no_detail_address);
    }

    #[test]
    fn test_confirm_validation_and_payload() {
        let mut w = EmployerSignupWizard::new();
        w.set_name("김사장");
        w.set_email("boss@shop.kr");
        w.set_password("sajang1");
        w.next_from_info();
        w.agree_to_rules();

        assert!(w.begin_submit().is_err());
        assert_eq!(w.error(), Some("회사명을 입력해주세요."));

        w.set_business_type(Some(BusinessType::NotBusinessOwner));
        w.set_company_field(CompanyField::CompanyName, "한빛식당");
        w.set_company_field(CompanyField::BaseAddress, "서울특별시 마포구 월드컵로 1");
        assert!(w.begin_submit().is_err());
        assert_eq!(w.error(), Some("상세 주소를 입력해주세요."));

        w.toggle_no_detail_address();
        w.set_company_field(CompanyField::Phone, "02-123-4567");
        w.set_company_field(CompanyField::Industry, "음식점");
        let payload = w.begin_submit().unwrap();
        assert_eq!(payload.business_type, "individual");
        assert_eq!(payload.password, "sajang1");
        assert_eq!(payload.address_detail, None);
        assert_eq!(payload.phone.as_deref(), Some("021234567"));
        assert!(w.submission().is_submitting());
    }
}
