use crate::components::{InlineError, StepHeader, StepNavigation};
use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::api::models::BusinessType;
use jobmatch_ui::api::Api;
use jobmatch_ui::catalog::JOB_CATEGORIES;
use jobmatch_ui::state::employer::CompanyField;
use jobmatch_ui::state::{EmployerSignupWizard, EmployerStep, WizardStep};
use jobmatch_ui::validate::MAX_COMPANY_NAME_LENGTH;
use tracing::{info, warn};

/// Employer signup: account info, platform rules, company details
#[component]
pub fn EmployerSignup() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut wizard = use_signal(EmployerSignupWizard::new);

    let on_next = move |_: ()| {
        let step = wizard.read().step();
        match step {
            EmployerStep::Info => {
                wizard.write().next_from_info();
            }
            EmployerStep::Rules => {
                wizard.write().agree_to_rules();
            }
            EmployerStep::Confirm => {
                let begun = wizard.write().begin_submit();
                let payload = match begun {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!("Employer signup not submitted: {}", e);
                        return;
                    }
                };
                let services = services.clone();
                spawn(async move {
                    let outcome = services.api.signup_employer(&payload).await;
                    let finished = wizard.write().finish_submit(outcome, &services.session);
                    if finished.is_ok() {
                        info!("Employer signup done");
                        navigator.push(Route::ApplicantList {});
                    }
                });
            }
        }
    };

    let w = wizard.read();
    let step = w.step();
    let steps = *w.steps();
    let error = w.error().map(str::to_string);
    let submitting = w.submission().is_submitting();
    // Info validates on click so the error line can explain what is missing
    let can_proceed = match step {
        EmployerStep::Info => true,
        EmployerStep::Rules => w.state().has_seen_warning,
        EmployerStep::Confirm => w.can_proceed(),
    };
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
                EmployerStep::Info => rsx! { InfoStep { wizard } },
                EmployerStep::Rules => rsx! { RulesStep { wizard } },
                EmployerStep::Confirm => rsx! { ConfirmStep { wizard } },
            }

            InlineError { message: error }

            StepNavigation {
                can_go_back: steps.can_go_back(),
                can_proceed,
                submitting,
                next_label: match step {
                    EmployerStep::Info => "다음".to_string(),
                    EmployerStep::Rules => "동의하고 계속".to_string(),
                    EmployerStep::Confirm => "가입 완료".to_string(),
                },
                on_prev: move |_| {
                    wizard.write().go_prev();
                },
                on_next,
            }
        }
    }
}

#[component]
fn InfoStep(wizard: Signal<EmployerSignupWizard>) -> Element {
    let state = wizard.read().state().clone();

    rsx! {
        div { class: "step-content employer-info",
            div { class: "form-group",
                label { "담당자 이름" }
                input {
                    r#type: "text",
                    value: "{state.name}",
                    oninput: move |evt| wizard.write().set_name(&evt.value()),
                }
            }
            div { class: "form-group",
                label { "이메일" }
                input {
                    r#type: "email",
                    value: "{state.email}",
                    placeholder: "example@company.com",
                    oninput: move |evt| wizard.write().set_email(&evt.value()),
                }
            }
            div { class: "form-group",
                label { "비밀번호" }
                input {
                    r#type: "password",
                    value: "{state.password}",
                    placeholder: "6자 이상",
                    oninput: move |evt| wizard.write().set_password(&evt.value()),
                }
            }
        }
    }
}

#[component]
fn RulesStep(wizard: Signal<EmployerSignupWizard>) -> Element {
    let seen = wizard.read().state().has_seen_warning;

    rsx! {
        div { class: "step-content employer-rules",
            h2 { "고용주 이용 규칙" }
            ul {
                li { "근로계약서를 반드시 작성하고 사본을 근로자에게 교부합니다." }
                li { "최저임금 이상의 급여를 약속한 날짜에 지급합니다." }
                li { "여권이나 외국인등록증 원본을 보관하지 않습니다." }
                li { "허위 공고나 금전 요구 시 이용이 제한됩니다." }
            }

            if !seen {
                div { class: "modal-backdrop",
                    div { class: "notice-modal warning",
                        h3 { "꼭 확인해 주세요" }
                        p { "규칙을 위반하면 사전 안내 없이 계정이 정지될 수 있습니다." }
                        button {
                            class: "confirm-button",
                            onclick: move |_| wizard.write().acknowledge_warning(),
                            "확인했습니다"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConfirmStep(wizard: Signal<EmployerSignupWizard>) -> Element {
    let company = wizard.read().state().company.clone();
    let name_length = company.company_name.chars().count();

    rsx! {
        div { class: "step-content employer-company",
            div { class: "form-group",
                label { "사업자 유형" }
                div { class: "chip-group",
                    for (label, business_type) in [("사업자", BusinessType::BusinessOwner), ("개인", BusinessType::NotBusinessOwner)] {
                        button {
                            key: "{label}",
                            class: if company.business_type == Some(business_type) { "chip selected" } else { "chip" },
                            onclick: move |_| wizard.write().set_business_type(Some(business_type)),
                            "{label}"
                        }
                    }
                }
            }

            div { class: "form-group",
                label { "회사명" }
                input {
                    r#type: "text",
                    value: "{company.company_name}",
                    oninput: move |evt| wizard.write().set_company_field(CompanyField::CompanyName, &evt.value()),
                }
                span { class: "char-counter", "{name_length}/{MAX_COMPANY_NAME_LENGTH}" }
            }

            div { class: "form-group",
                label { "주소" }
                input {
                    r#type: "text",
                    value: "{company.base_address}",
                    placeholder: "기본 주소",
                    oninput: move |evt| wizard.write().set_company_field(CompanyField::BaseAddress, &evt.value()),
                }
                input {
                    r#type: "text",
                    value: "{company.detail_address}",
                    placeholder: "상세 주소",
                    disabled: company.no_detail_address,
                    oninput: move |evt| wizard.write().set_company_field(CompanyField::DetailAddress, &evt.value()),
                }
                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: company.no_detail_address,
                        onchange: move |_| wizard.write().toggle_no_detail_address(),
                    }
                    "상세 주소 없음"
                }
            }

            div { class: "form-group",
                label { "전화번호" }
                input {
                    r#type: "tel",
                    value: "{company.phone}",
                    oninput: move |evt| wizard.write().set_company_field(CompanyField::Phone, &evt.value()),
                }
            }

            div { class: "form-group",
                label { "업직종" }
                select {
                    onchange: move |evt| wizard.write().set_company_field(CompanyField::Industry, &evt.value()),
                    option { value: "", disabled: true, selected: company.industry.is_empty(), "업직종을 선택해 주세요" }
                    for (id, label) in JOB_CATEGORIES.iter().copied() {
                        option {
                            key: "{id}",
                            value: "{label}",
                            selected: company.industry == label,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
