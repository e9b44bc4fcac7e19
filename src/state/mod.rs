//! Wizard and form state
//!
//! Everything here is plain data plus synchronous transitions; the only
//! async entry points are the `submit` helpers, which delegate to an
//! [`crate::api::Api`] implementation.

pub mod birthdate;
pub mod employer;
pub mod filter;
pub mod onboarding;
pub mod resume;
pub mod sequencer;
pub mod signup;
pub mod submission;
pub mod terms;

pub use birthdate::{days_in_month, BirthdatePicker, BirthdateSelection};
pub use employer::{EmployerSignupWizard, EmployerStep};
pub use filter::{EmployerFilter, FilterModal, JobSeekerFilter, RegionSelection};
pub use onboarding::{OnboardingStep, OnboardingWizard};
pub use resume::{load_resume, ResumeView};
pub use sequencer::{StepSequencer, WizardStep};
pub use signup::{SignupStep, SignupWizard};
pub use submission::SubmissionState;
pub use terms::{Term, TermsState};
