//! Route definitions for the job matching UI

use crate::components::{pages::*, MainLayout};
use dioxus::prelude::*;

/// Main route enum for the application
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/signup/employer")]
    EmployerSignup {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/jobs")]
    JobList {},
    #[route("/applicants")]
    ApplicantList {},
    #[route("/resume")]
    Resume {},
    #[route("/learning")]
    Learning {},
    #[route("/learning/lesson/:id")]
    LessonDetail { id: String },
    #[route("/learning/lesson/:lesson_id/topic/:topic_id")]
    LessonTopic { lesson_id: String, topic_id: String },
}

impl Route {
    /// Returns the display name for the route
    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Home {} => "홈",
            Route::Signup {} => "회원가입",
            Route::EmployerSignup {} => "고용주 회원가입",
            Route::Onboarding {} => "프로필 등록",
            Route::JobList {} => "일자리 찾기",
            Route::ApplicantList {} => "지원자 찾기",
            Route::Resume {} => "이력서",
            Route::Learning {} => "학습",
            Route::LessonDetail { .. } => "강의",
            Route::LessonTopic { .. } => "강의 학습",
        }
    }

    /// Returns true for the signup and onboarding flows
    pub fn is_wizard(&self) -> bool {
        matches!(
            self,
            Route::Signup {} | Route::EmployerSignup {} | Route::Onboarding {}
        )
    }
}
