//! Page components, one per route

mod applicant_list;
mod employer_signup;
mod home;
mod job_list;
mod learning;
mod onboarding;
mod resume;
mod signup;

pub use applicant_list::ApplicantList;
pub use employer_signup::EmployerSignup;
pub use home::Home;
pub use job_list::JobList;
pub use learning::{Learning, LessonDetail, LessonTopic};
pub use onboarding::Onboarding;
pub use resume::Resume;
pub use signup::Signup;
