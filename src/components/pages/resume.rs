use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::error::RESUME_LOAD_FAILED;
use jobmatch_ui::state::load_resume;
use jobmatch_ui::Error;

/// Read-only basic information of the signed-up job seeker
#[component]
pub fn Resume() -> Element {
    let services = use_context::<Services>();

    let resume = use_resource(move || {
        let api = services.api.clone();
        let session = services.session.clone();
        async move { load_resume(&api, &session).await }
    });

    rsx! {
        div { class: "page resume-page",
            match &*resume.read() {
                None => rsx! { p { class: "loading", "불러오는 중..." } },
                Some(Err(Error::MissingSignupUser)) => rsx! {
                    p { class: "empty", "회원가입 후 이력서를 확인할 수 있습니다." }
                    Link { class: "primary-link", to: Route::Signup {}, "회원가입" }
                },
                Some(Err(e)) => {
                    let message = e.user_message(RESUME_LOAD_FAILED);
                    rsx! { p { class: "inline-error", "{message}" } }
                }
                Some(Ok(view)) => rsx! {
                    section { class: "card resume-card",
                        div { class: "card-header",
                            h3 { "기본 정보" }
                            Link { class: "secondary-link", to: Route::Onboarding {}, "수정" }
                        }
                        dl {
                            for row in view.rows() {
                                div { key: "{row.label}", class: "resume-row",
                                    dt { "{row.label}" }
                                    dd { "{row.value}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
