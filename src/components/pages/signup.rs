//! Job seeker signup wizard page
//!
//! Steps 1 (role), 2 (personal info) and 4 (terms). Each step component
//! reads the wizard signal and calls its operations; only the page
//! drives navigation and submission.

use crate::components::{InlineError, StepHeader, StepNavigation};
use crate::routes::Route;
use crate::Services;
use chrono::Local;
use dioxus::prelude::*;
use jobmatch_ui::api::models::{Gender, UserRole};
use jobmatch_ui::api::Api;
use jobmatch_ui::state::signup::{SignupField, BIRTHDATE_PLACEHOLDER};
use jobmatch_ui::state::{SignupStep, SignupWizard, Term, WizardStep};
use tracing::{info, warn};

#[component]
pub fn Signup() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut wizard = use_signal(|| SignupWizard::new(Local::now().date_naive()));

    let api = services.api.clone();
    use_future(move || {
        let api = api.clone();
        async move {
            let loaded = api.fetch_nationalities().await;
            wizard.write().set_nationalities(loaded);
        }
    });

    let on_next = move |_: ()| {
        if !wizard.read().steps().is_terminal() {
            wizard.write().go_next();
            return;
        }
        let begun = wizard.write().begin_submit();
        let payload = match begun {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Signup not submitted: {}", e);
                return;
            }
        };
        let services = services.clone();
        spawn(async move {
            let outcome = services.api.signup(&payload).await;
            let finished = wizard.write().finish_submit(outcome, &services.session);
            if finished.is_ok() {
                info!("Signup done, continuing to onboarding");
                navigator.push(Route::Onboarding {});
            }
        });
    };

    let w = wizard.read();
    let step = w.step();
    let steps = *w.steps();
    let submission = w.submission().clone();
    let can_proceed = w.can_proceed();
    drop(w);

    rsx! {
        div { class: "page wizard-page",
            StepHeader {
                step_name: step.display_name().to_string(),
                position: steps.position(),
                total_steps: steps.total_steps(),
                progress: steps.progress_percentage(),
            }

            match step {
                SignupStep::RoleSelect => rsx! { RoleSelectStep { wizard } },
                SignupStep::PersonalInfo => rsx! { PersonalInfoStep { wizard } },
                SignupStep::Terms => rsx! { TermsStep { wizard } },
            }

            InlineError { message: submission.error().map(str::to_string) }
            if let Some(message) = submission.success_message() {
                p { class: "success-message", "{message}" }
            }

            if step != SignupStep::RoleSelect {
                StepNavigation {
                    can_go_back: steps.can_go_back(),
                    can_proceed,
                    submitting: submission.is_submitting(),
                    next_label: if steps.is_terminal() { "가입하기".to_string() } else { "다음".to_string() },
                    on_prev: move |_| {
                        wizard.write().go_prev();
                    },
                    on_next,
                }
            }
        }
    }
}

#[component]
fn RoleSelectStep(wizard: Signal<SignupWizard>) -> Element {
    let selected = wizard.read().values().role;

    rsx! {
        div { class: "step-content role-select",
            h2 { "어떤 회원으로 가입하시나요?" }
            for role in [UserRole::JobSeeker, UserRole::Employer] {
                button {
                    key: "{role.as_str()}",
                    class: if selected == Some(role) { "role-card selected" } else { "role-card" },
                    onclick: move |_| wizard.write().select_role(role),
                    "{role.display_name()}"
                }
            }
        }
    }
}

#[component]
fn PersonalInfoStep(wizard: Signal<SignupWizard>) -> Element {
    let w = wizard.read();
    let values = w.values().clone();
    let nationalities = w.nationalities().to_vec();
    let picker_open = w.birthdate_picker().is_open();
    let birthdate_label = w.birthdate_display();
    drop(w);

    rsx! {
        div { class: "step-content personal-info",
            div { class: "form-group",
                label { "이름" }
                input {
                    r#type: "text",
                    value: "{values.name}",
                    placeholder: "이름을 입력해 주세요",
                    oninput: move |evt| wizard.write().set_field(SignupField::Name, &evt.value()),
                }
            }

            div { class: "form-group",
                label { "전화번호" }
                input {
                    r#type: "tel",
                    value: "{values.phone}",
                    placeholder: "숫자만 입력해 주세요",
                    oninput: move |evt| wizard.write().set_field(SignupField::Phone, &evt.value()),
                }
            }

            div { class: "form-group",
                label { "생년월일" }
                button {
                    class: if birthdate_label == BIRTHDATE_PLACEHOLDER { "picker-trigger placeholder" } else { "picker-trigger" },
                    onclick: move |_| wizard.write().birthdate_picker_mut().open(),
                    "{birthdate_label}"
                }
            }

            div { class: "form-group",
                label { "성별" }
                div { class: "chip-group",
                    for gender in [Gender::Male, Gender::Female] {
                        button {
                            key: "{gender.display_name()}",
                            class: if values.gender == Some(gender) { "chip selected" } else { "chip" },
                            onclick: move |_| wizard.write().select_gender(gender),
                            "{gender.display_name()}"
                        }
                    }
                }
            }

            div { class: "form-group",
                label { "국적" }
                select {
                    onchange: move |evt| wizard.write().select_nationality(&evt.value()),
                    option { value: "", disabled: true, selected: values.nationality_code.is_none(), "국적을 선택해 주세요" }
                    for nationality in nationalities {
                        option {
                            key: "{nationality.code}",
                            value: "{nationality.code}",
                            selected: values.nationality_code.as_deref() == Some(nationality.code.as_str()),
                            "{nationality.name}"
                        }
                    }
                }
            }

            if picker_open {
                BirthdateSheet { wizard }
            }
        }
    }
}

/// Bottom sheet with year, month and day columns
#[component]
fn BirthdateSheet(wizard: Signal<SignupWizard>) -> Element {
    let picker = wizard.read().birthdate_picker().clone();
    let selection = picker.selection();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "bottom-sheet birthdate-sheet",
                h3 { "생년월일" }
                div { class: "picker-columns",
                    select {
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse() {
                                wizard.write().birthdate_picker_mut().set_year(year);
                            }
                        },
                        for year in picker.years() {
                            option { key: "{year}", value: "{year}", selected: year == selection.year, "{year}년" }
                        }
                    }
                    select {
                        onchange: move |evt| {
                            if let Ok(month) = evt.value().parse() {
                                wizard.write().birthdate_picker_mut().set_month(month);
                            }
                        },
                        for month in picker.months() {
                            option { key: "{month}", value: "{month}", selected: month == selection.month, "{month}월" }
                        }
                    }
                    select {
                        onchange: move |evt| {
                            if let Ok(day) = evt.value().parse() {
                                wizard.write().birthdate_picker_mut().set_day(day);
                            }
                        },
                        for day in picker.days() {
                            option { key: "{day}", value: "{day}", selected: day == selection.day, "{day}일" }
                        }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "close-button",
                        onclick: move |_| wizard.write().birthdate_picker_mut().close(),
                        "취소"
                    }
                    button {
                        class: "apply-button",
                        onclick: move |_| wizard.write().confirm_birthdate(),
                        "확인"
                    }
                }
            }
        }
    }
}

#[component]
fn TermsStep(wizard: Signal<SignupWizard>) -> Element {
    let terms = wizard.read().values().terms;

    rsx! {
        div { class: "step-content terms",
            label { class: "checkbox-label all-terms",
                input {
                    r#type: "checkbox",
                    checked: terms.all(),
                    onchange: move |_| wizard.write().toggle_all_terms(),
                }
                "전체 동의"
            }
            hr {}
            for term in Term::all() {
                label { key: "{term.display_name()}", class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: terms.get(term),
                        onchange: move |_| wizard.write().toggle_term(term),
                    }
                    span { class: if term.is_required() { "term-label required" } else { "term-label" },
                        "{term.display_name()}"
                    }
                }
            }
        }
    }
}
