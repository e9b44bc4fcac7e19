//! Layout components shared by every page
//!
//! The main layout with header and bottom navigation, plus the wizard
//! progress header and step navigation buttons.

use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::session::{Session, UserMode};

/// Main layout component that wraps all pages
#[component]
pub fn MainLayout() -> Element {
    let services = use_context::<Services>();
    let current_route = use_route::<Route>();
    let mut session = use_signal(|| services.session.session());

    // Follow session changes instead of polling the store
    use_hook(move || {
        let mut rx = services.session.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot: Session = rx.borrow_and_update().clone();
                session.set(snapshot);
            }
        });
    });

    let mode_label = match session.read().mode {
        UserMode::JobSeeker => "구직자 모드",
        UserMode::Employer => "고용주 모드",
    };

    rsx! {
        div { class: "app-container",
            header { class: "app-header",
                h1 { "{current_route.display_name()}" }
                span { class: "mode-badge", "{mode_label}" }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            if !current_route.is_wizard() {
                BottomNav { mode: session.read().mode }
            }
        }
    }
}

/// Bottom navigation, entries depend on the current mode
#[component]
fn BottomNav(mode: UserMode) -> Element {
    rsx! {
        nav { class: "bottom-nav",
            Link { to: Route::Home {}, "홈" }
            if mode == UserMode::Employer {
                Link { to: Route::ApplicantList {}, "지원자" }
            } else {
                Link { to: Route::JobList {}, "일자리" }
                Link { to: Route::Learning {}, "학습" }
                Link { to: Route::Resume {}, "이력서" }
            }
        }
    }
}

/// Wizard header with step title and progress indicator
#[component]
pub fn StepHeader(step_name: String, position: usize, total_steps: usize, progress: f32) -> Element {
    rsx! {
        div { class: "progress-indicator",
            div { class: "step-counter", "{position}/{total_steps}: {step_name}" }
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    style: "width: {progress}%"
                }
            }
        }
    }
}

/// Previous / next buttons for moving between wizard steps
#[component]
pub fn StepNavigation(
    can_go_back: bool,
    can_proceed: bool,
    submitting: bool,
    next_label: String,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let next_enabled = can_proceed && !submitting;

    rsx! {
        div { class: "navigation-buttons",
            if can_go_back {
                button {
                    class: "nav-button prev",
                    disabled: submitting,
                    onclick: move |_| on_prev.call(()),
                    "이전"
                }
            } else {
                div { class: "nav-spacer" }
            }

            button {
                class: if next_enabled { "nav-button next" } else { "nav-button next disabled" },
                disabled: !next_enabled,
                onclick: move |_| on_next.call(()),
                if submitting { "처리 중..." } else { "{next_label}" }
            }
        }
    }
}

/// Inline error line under a form
#[component]
pub fn InlineError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "inline-error", role: "alert", "{message}" }
        }
    }
}

/// Toggleable chip used by filters and multi-select steps
#[component]
pub fn Chip(label: String, selected: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if selected { "chip selected" } else { "chip" },
            onclick: move |_| on_toggle.call(()),
            "{label}"
        }
    }
}
