use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::session::UserMode;
use tracing::warn;

/// Landing page with the one-time safety notice and the mode switch
#[component]
pub fn Home() -> Element {
    let services = use_context::<Services>();
    let mut show_notice = use_signal({
        let session = services.session.clone();
        move || !session.notice_hidden()
    });
    let mut dont_show_again = use_signal(|| false);
    let mut mode = use_signal({
        let session = services.session.clone();
        move || session.session().mode
    });

    let close_session = services.session.clone();
    let mode_session = services.session.clone();

    rsx! {
        div { class: "page home-page",
            h2 { "외국인 구직자와 고용주를 잇는 일자리 매칭" }

            div { class: "mode-switch",
                for (label, target) in [("구직자", UserMode::JobSeeker), ("고용주", UserMode::Employer)] {
                    button {
                        key: "{label}",
                        class: if mode() == target { "mode-option active" } else { "mode-option" },
                        onclick: {
                            let session = mode_session.clone();
                            move |_| {
                                if let Err(e) = session.set_mode(target) {
                                    warn!("Failed to switch mode: {}", e);
                                }
                                mode.set(target);
                            }
                        },
                        "{label}"
                    }
                }
            }

            div { class: "home-actions",
                if mode() == UserMode::Employer {
                    Link { class: "primary-link", to: Route::EmployerSignup {}, "고용주 회원가입" }
                    Link { class: "secondary-link", to: Route::ApplicantList {}, "지원자 둘러보기" }
                } else {
                    Link { class: "primary-link", to: Route::Signup {}, "회원가입" }
                    Link { class: "secondary-link", to: Route::Onboarding {}, "프로필 작성" }
                    Link { class: "secondary-link", to: Route::JobList {}, "일자리 둘러보기" }
                }
            }

            if show_notice() {
                div { class: "modal-backdrop",
                    div { class: "notice-modal",
                        h3 { "안전한 구직을 위한 안내" }
                        p { "채용 과정에서 금전을 요구하거나 여권, 외국인등록증 원본을 요구하는 경우 응하지 마세요." }
                        p { "의심되는 공고는 고객센터로 신고해 주세요." }

                        label { class: "checkbox-label",
                            input {
                                r#type: "checkbox",
                                checked: dont_show_again(),
                                onchange: move |evt| dont_show_again.set(evt.checked()),
                            }
                            "다시 보지 않기"
                        }

                        button {
                            class: "confirm-button",
                            onclick: move |_| {
                                if dont_show_again() {
                                    if let Err(e) = close_session.hide_notice() {
                                        warn!("Failed to store notice opt-out: {}", e);
                                    }
                                }
                                show_notice.set(false);
                            },
                            "확인"
                        }
                    }
                }
            }
        }
    }
}
