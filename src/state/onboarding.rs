//! Job seeker profile onboarding
//!
//! Runs after signup and collects experience, preferred jobs and a work
//! schedule. Every step except the schedule may be skipped; skipped
//! values are sent as "no preference" defaults the API understands.

use tracing::{info, warn};

use crate::api::models::{
    ExperienceData, ExperiencePayload, JobSeekerProfilePayload, JobSeekerProfileResponse,
    WorkSchedulePayload,
};
use crate::api::Api;
use crate::catalog::{self, ANY, DAYS_OF_WEEK};
use crate::error::{Error, Result, PROFILE_SAVE_FAILED};
use crate::session::AppContext;
use crate::state::filter::toggle_value;
use crate::state::sequencer::{StepSequencer, WizardStep};
use crate::state::submission::SubmissionState;
use crate::validate;

const NO_FILE: &str = "미입력";
const DEFAULT_TIME: &str = "00:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Career,
    Introduction,
    License,
    PreferredJobs,
    Schedule,
    Summary,
}

impl WizardStep for OnboardingStep {
    const ALL: &'static [Self] = &[
        OnboardingStep::Career,
        OnboardingStep::Introduction,
        OnboardingStep::License,
        OnboardingStep::PreferredJobs,
        OnboardingStep::Schedule,
        OnboardingStep::Summary,
    ];

    fn number(self) -> u8 {
        match self {
            OnboardingStep::Career => 1,
            OnboardingStep::Introduction => 2,
            OnboardingStep::License => 3,
            OnboardingStep::PreferredJobs => 4,
            OnboardingStep::Schedule => 5,
            OnboardingStep::Summary => 6,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            OnboardingStep::Career => "경력",
            OnboardingStep::Introduction => "자기소개",
            OnboardingStep::License => "자격증",
            OnboardingStep::PreferredJobs => "희망 직종",
            OnboardingStep::Schedule => "근무 가능 일정",
            OnboardingStep::Summary => "프로필 확인",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkSchedule {
    pub available_dates: Vec<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub days_of_week: Vec<String>,
}

impl WorkSchedule {
    pub fn is_empty(&self) -> bool {
        self.available_dates.is_empty()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.days_of_week.is_empty()
    }

    /// Times are both unset, or both `HH:MM` with start before end.
    pub fn is_valid(&self) -> bool {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (None, None) => true,
            (Some(start), Some(end)) => {
                validate::is_valid_time(start) && validate::is_valid_time(end) && start < end
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Career,
    License,
    Skills,
    Introduction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingValues {
    pub profile_file_name: Option<String>,
    pub preferred_regions: Vec<String>,
    pub preferred_jobs: Vec<String>,
    pub work_schedule: WorkSchedule,
    pub experience: ExperienceData,
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    steps: StepSequencer<OnboardingStep>,
    values: OnboardingValues,
    submission: SubmissionState,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.steps.current()
    }

    pub fn steps(&self) -> &StepSequencer<OnboardingStep> {
        &self.steps
    }

    pub fn values(&self) -> &OnboardingValues {
        &self.values
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_step_complete(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::Schedule => self.values.work_schedule.is_valid(),
            _ => true,
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.is_step_complete(self.step())
    }

    pub fn go_next(&mut self) -> bool {
        let complete = self.can_proceed();
        self.steps.go_next(complete)
    }

    pub fn go_prev(&mut self) -> bool {
        self.steps.go_prev()
    }

    pub fn set_experience(&mut self, field: ExperienceField, value: &str) {
        let experience = &mut self.values.experience;
        match field {
            ExperienceField::Career => experience.career = value.to_string(),
            ExperienceField::License => experience.license = value.to_string(),
            ExperienceField::Skills => experience.skills = value.to_string(),
            ExperienceField::Introduction => experience.introduction = value.to_string(),
        }
        self.submission.clear_error();
    }

    pub fn set_profile_file(&mut self, file_name: Option<&str>) {
        self.values.profile_file_name = file_name.map(str::to_string);
    }

    pub fn set_preferred_regions(&mut self, regions: Vec<String>) {
        self.values.preferred_regions = regions;
    }

    /// Toggles a job category. Unknown ids are ignored.
    pub fn toggle_job(&mut self, job_id: &str) {
        if catalog::is_job_category(job_id) {
            toggle_value(&mut self.values.preferred_jobs, job_id);
        }
    }

    /// Toggles an available date given as `YYYY-MM-DD`.
    pub fn toggle_date(&mut self, date: &str) {
        toggle_value(&mut self.values.work_schedule.available_dates, date);
    }

    pub fn set_times(&mut self, start: Option<&str>, end: Option<&str>) {
        let schedule = &mut self.values.work_schedule;
        schedule.start_time = start.map(str::to_string);
        schedule.end_time = end.map(str::to_string);
        self.submission.clear_error();
    }

    pub fn toggle_day(&mut self, day: &str) {
        toggle_value(&mut self.values.work_schedule.days_of_week, day);
    }

    /// Selects every day, or clears them all when every day is already selected.
    pub fn toggle_all_days(&mut self) {
        let days = &mut self.values.work_schedule.days_of_week;
        let all_selected = DAYS_OF_WEEK.iter().all(|day| days.iter().any(|d| d == day));
        *days = if all_selected {
            Vec::new()
        } else {
            DAYS_OF_WEEK.iter().map(|day| day.to_string()).collect()
        };
    }

    pub fn payload(&self, user_id: &str) -> JobSeekerProfilePayload {
        let v = &self.values;
        let or_any = |values: &[String]| {
            if values.is_empty() {
                vec![ANY.to_string()]
            } else {
                values.to_vec()
            }
        };

        let exp = &v.experience;
        let sections = [
            ("career", &exp.career),
            ("license", &exp.license),
            ("skills", &exp.skills),
            ("introduction", &exp.introduction),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

        let schedule = &v.work_schedule;
        let work_schedule = match (&schedule.start_time, &schedule.end_time) {
            (Some(start), Some(end)) => WorkSchedulePayload {
                available_dates: schedule.available_dates.clone(),
                start_time: start.clone(),
                end_time: end.clone(),
                days_of_week: or_any(&schedule.days_of_week),
            },
            _ => WorkSchedulePayload {
                available_dates: Vec::new(),
                start_time: DEFAULT_TIME.to_string(),
                end_time: DEFAULT_TIME.to_string(),
                days_of_week: vec![ANY.to_string()],
            },
        };

        JobSeekerProfilePayload {
            user_id: user_id.to_string(),
            basic_info_file_name: v
                .profile_file_name
                .clone()
                .unwrap_or_else(|| NO_FILE.to_string()),
            preferred_regions: or_any(&v.preferred_regions),
            preferred_jobs: or_any(&v.preferred_jobs),
            experience: ExperiencePayload {
                sections,
                data: exp.clone(),
            },
            work_schedule,
        }
    }

    /// Builds the payload for the stored signup user and enters submitting.
    pub fn begin_submit(&mut self, ctx: &AppContext) -> Result<JobSeekerProfilePayload> {
        if !self.steps.is_terminal() {
            return Err(Error::Validation("프로필 확인 단계에서 저장해주세요.".to_string()));
        }
        if !self.values.work_schedule.is_valid() {
            return Err(Error::Validation("근무 시간을 확인해주세요.".to_string()));
        }
        let Some(user_id) = ctx.signup_user_id() else {
            let err = Error::MissingSignupUser;
            self.submission.fail(&err, PROFILE_SAVE_FAILED);
            return Err(err);
        };
        self.submission.begin()?;
        Ok(self.payload(&user_id))
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<JobSeekerProfileResponse>,
    ) -> Result<JobSeekerProfileResponse> {
        match outcome {
            Ok(response) => {
                info!(profile_id = %response.id, "job seeker profile saved");
                self.submission.succeed("프로필이 저장되었습니다.");
                Ok(response)
            }
            Err(e) => {
                warn!("Failed to save job seeker profile");
                self.submission.fail(&e, PROFILE_SAVE_FAILED);
                Err(e)
            }
        }
    }

    pub async fn submit(
        &mut self,
        api: &dyn Api,
        ctx: &AppContext,
    ) -> Result<JobSeekerProfileResponse> {
        let payload = self.begin_submit(ctx)?;
        let outcome = api.create_job_seeker_profile(&payload).await;
        self.finish_submit(outcome)
    }
}
