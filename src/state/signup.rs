//! Job seeker signup wizard
//!
//! Role selection, personal information, then terms. Visa upload (step 3)
//! is deferred, so personal information advances straight to step 4.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::api::models::{Gender, SignupPayload, SignupResponse, UserRole};
use crate::api::Api;
use crate::catalog::{fallback_nationalities, Nationality};
use crate::error::{Error, Result, SIGNUP_FAILED};
use crate::session::AppContext;
use crate::state::birthdate::BirthdatePicker;
use crate::state::sequencer::{StepSequencer, WizardStep};
use crate::state::submission::SubmissionState;
use crate::state::terms::{Term, TermsState};
use crate::validate;

pub const BIRTHDATE_PLACEHOLDER: &str = "생년월일을 선택해 주세요";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    RoleSelect,
    PersonalInfo,
    Terms,
}

impl WizardStep for SignupStep {
    const ALL: &'static [Self] = &[
        SignupStep::RoleSelect,
        SignupStep::PersonalInfo,
        SignupStep::Terms,
    ];

    fn number(self) -> u8 {
        match self {
            SignupStep::RoleSelect => 1,
            SignupStep::PersonalInfo => 2,
            SignupStep::Terms => 4,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            SignupStep::RoleSelect => "회원 유형 선택",
            SignupStep::PersonalInfo => "기본 정보 입력",
            SignupStep::Terms => "약관 동의",
        }
    }
}

/// Values collected across the signup steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFormValues {
    pub role: Option<UserRole>,
    pub name: String,
    pub phone: String,
    pub birthdate: String,
    pub gender: Option<Gender>,
    pub nationality_code: Option<String>,
    pub terms: TermsState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Phone,
}

#[derive(Debug, Clone)]
pub struct SignupWizard {
    steps: StepSequencer<SignupStep>,
    values: SignupFormValues,
    birthdate: BirthdatePicker,
    nationalities: Vec<Nationality>,
    submission: SubmissionState,
}

impl SignupWizard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            steps: StepSequencer::new(),
            values: SignupFormValues::default(),
            birthdate: BirthdatePicker::new(today),
            nationalities: Vec::new(),
            submission: SubmissionState::default(),
        }
    }

    pub fn step(&self) -> SignupStep {
        self.steps.current()
    }

    pub fn steps(&self) -> &StepSequencer<SignupStep> {
        &self.steps
    }

    pub fn values(&self) -> &SignupFormValues {
        &self.values
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn birthdate_picker(&self) -> &BirthdatePicker {
        &self.birthdate
    }

    pub fn birthdate_picker_mut(&mut self) -> &mut BirthdatePicker {
        &mut self.birthdate
    }

    pub fn nationalities(&self) -> &[Nationality] {
        &self.nationalities
    }

    /// Loads the nationality list, falling back to a built-in list on failure.
    pub async fn load_nationalities(&mut self, api: &dyn Api) {
        let loaded = api.fetch_nationalities().await;
        self.set_nationalities(loaded);
    }

    pub fn set_nationalities(&mut self, loaded: Result<Vec<Nationality>>) {
        self.nationalities = match loaded {
            Ok(list) => list,
            Err(e) => {
                warn!("Failed to load nationalities, using fallback: {}", e);
                fallback_nationalities()
            }
        };
    }

    pub fn is_step_complete(&self, step: SignupStep) -> bool {
        let v = &self.values;
        match step {
            SignupStep::RoleSelect => v.role.is_some(),
            SignupStep::PersonalInfo => {
                validate::is_present(&v.name)
                    && validate::is_valid_phone(&v.phone)
                    && !v.birthdate.is_empty()
                    && v.gender.is_some()
                    && v.nationality_code.as_deref().is_some_and(validate::is_present)
            }
            SignupStep::Terms => v.terms.required_accepted(),
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.is_step_complete(self.step())
    }

    /// Stores the role and moves on to personal information.
    pub fn select_role(&mut self, role: UserRole) {
        self.values.role = Some(role);
        if self.step() == SignupStep::RoleSelect {
            self.steps.go_next(true);
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: &str) {
        match field {
            SignupField::Name => self.values.name = value.to_string(),
            SignupField::Phone => self.values.phone = validate::sanitize_phone(value),
        }
        self.submission.clear_error();
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.values.gender = Some(gender);
    }

    pub fn select_nationality(&mut self, code: &str) {
        self.values.nationality_code = Some(code.to_string());
    }

    /// Writes the picker selection into the form and closes the picker.
    pub fn confirm_birthdate(&mut self) {
        self.values.birthdate = self.birthdate.confirm();
    }

    /// `YYYY.MM.DD`, or a placeholder while unset.
    pub fn birthdate_display(&self) -> String {
        if self.values.birthdate.is_empty() {
            BIRTHDATE_PLACEHOLDER.to_string()
        } else {
            self.values.birthdate.replace('-', ".")
        }
    }

    pub fn toggle_term(&mut self, term: Term) {
        self.values.terms.toggle(term);
    }

    pub fn toggle_all_terms(&mut self) {
        self.values.terms.toggle_all();
    }

    /// Advances from a non-terminal step. Returns whether the step changed.
    pub fn go_next(&mut self) -> bool {
        let complete = self.can_proceed();
        self.steps.go_next(complete)
    }

    pub fn go_prev(&mut self) -> bool {
        self.steps.go_prev()
    }

    /// Checks the terminal step and enters the submitting state.
    pub fn begin_submit(&mut self) -> Result<SignupPayload> {
        if !self.steps.is_terminal() || !self.can_proceed() {
            return Err(Error::Validation("필수 약관에 동의해주세요.".to_string()));
        }
        let payload = self.payload()?;
        self.submission.begin()?;
        Ok(payload)
    }

    /// Records the outcome of the request started by [`Self::begin_submit`].
    pub fn finish_submit(
        &mut self,
        outcome: Result<SignupResponse>,
        ctx: &AppContext,
    ) -> Result<SignupResponse> {
        match outcome {
            Ok(response) => {
                info!(user_id = %response.id, "signup completed");
                if let Err(e) = ctx.set_signup_user_id(Some(&response.id)) {
                    warn!("Failed to persist signup user id: {}", e);
                }
                self.submission
                    .succeed(format!("{}님, {}", response.name, response.message));
                Ok(response)
            }
            Err(e) => {
                self.submission.fail(&e, SIGNUP_FAILED);
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn Api, ctx: &AppContext) -> Result<SignupResponse> {
        let payload = self.begin_submit()?;
        let outcome = api.signup(&payload).await;
        self.finish_submit(outcome, ctx)
    }

    fn payload(&self) -> Result<SignupPayload> {
        let v = &self.values;
        let missing = || Error::Validation("필수 항목을 모두 입력해주세요.".to_string());
        Ok(SignupPayload {
            role: v.role.ok_or_else(missing)?,
            name: v.name.trim().to_string(),
            phone: v.phone.clone(),
            birthdate: v.birthdate.clone(),
            gender: v.gender.ok_or_else(missing)?,
            nationality_code: v.nationality_code.clone().ok_or_else(missing)?,
            terms: v.terms.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> SignupWizard {
        SignupWizard::new(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
    }

    fn fill_personal_info(w: &mut SignupWizard) {
        w.set_field(SignupField::Name, "Tran Thi Mai");
        w.set_field(SignupField::Phone, "010-1234-5678");
        w.birthdate_picker_mut().set_year(1996);
        w.confirm_birthdate();
        w.select_gender(Gender::Female);
        w.select_nationality("VN");
    }

    #[test]
    fn test_role_select_advances() {
        let mut w = wizard();
        assert!(!w.go_next());
        w.select_role(UserRole::JobSeeker);
        assert_eq!(w.step(), SignupStep::PersonalInfo);
    }

    #[test]
    fn test_reselecting_role_stays_on_personal_info() {
        let mut w = wizard();
        w.select_role(UserRole::JobSeeker);
        w.go_prev();
        assert_eq!(w.step(), SignupStep::RoleSelect);
        w.select_role(UserRole::JobSeeker);
        w.select_role(UserRole::Employer);
        assert_eq!(w.step(), SignupStep::PersonalInfo);
        assert_eq!(w.values().role, Some(UserRole::Employer));
        assert!(!w.go_next());
        assert_eq!(w.step(), SignupStep::PersonalInfo);
    }

    #[test]
    fn test_personal_info_jumps_to_step_four() {
        let mut w = wizard();
        w.select_role(UserRole::JobSeeker);
        assert!(!w.go_next());
        fill_personal_info(&mut w);
        assert_eq!(w.values().phone, "01012345678");
        assert!(w.go_next());
        assert_eq!(w.step().number(), 4);
        assert!(w.go_prev());
        assert_eq!(w.step().number(), 2);
    }

    #[test]
    fn test_completeness_is_recomputed_on_edit() {
        let mut w = wizard();
        w.select_role(UserRole::JobSeeker);
        fill_personal_info(&mut w);
        assert!(w.can_proceed());
        w.set_field(SignupField::Phone, "123");
        assert!(!w.can_proceed());
        w.set_field(SignupField::Name, "   ");
        w.set_field(SignupField::Phone, "01099998888");
        assert!(!w.can_proceed());
    }

    #[test]
    fn test_birthdate_display() {
        let mut w = wizard();
        assert_eq!(w.birthdate_display(), BIRTHDATE_PLACEHOLDER);
        w.birthdate_picker_mut().open();
        w.birthdate_picker_mut().set_year(1999);
        w.confirm_birthdate();
        assert_eq!(w.birthdate_display(), "1999.05.20");
        assert!(!w.birthdate_picker().is_open());
    }

    #[test]
    fn test_terms_step_needs_required_flags_only() {
        let mut w = wizard();
        w.select_role(UserRole::JobSeeker);
        fill_personal_info(&mut w);
        w.go_next();
        assert!(w.begin_submit().is_err());
        w.toggle_term(Term::TosRequired);
        w.toggle_term(Term::PrivacyRequired);
        assert!(w.can_proceed());
        let payload = w.begin_submit().unwrap();
        assert!(payload.terms.tos_required);
        assert!(!payload.terms.marketing_optional);
        assert!(w.submission().is_submitting());
    }

    #[test]
    fn test_fallback_nationalities() {
        let mut w = wizard();
        w.set_nationalities(Err(Error::Config("offline".to_string())));
        let codes: Vec<_> = w.nationalities().iter().map(|n| n.code.as_str()).collect();
        assert_eq!(codes, vec!["KR", "JP", "US"]);
    }
}
