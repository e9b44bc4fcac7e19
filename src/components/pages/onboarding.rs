//! Job seeker profile onboarding
//!
//! Six steps ending in a summary; the profile is saved for the user id
//! stored by the signup wizard.

use std::path::Path;

use crate::components::{Chip, InlineError, StepHeader, StepNavigation};
use crate::routes::Route;
use crate::Services;
use chrono::{Duration, Local};
use dioxus::prelude::*;
use jobmatch_ui::api::Api;
use jobmatch_ui::catalog::{self, DAYS_OF_WEEK, JOB_CATEGORIES};
use jobmatch_ui::state::onboarding::ExperienceField;
use jobmatch_ui::state::{OnboardingStep, OnboardingWizard, WizardStep};
use tracing::{info, warn};

/// How many upcoming days the schedule step offers
const DATE_WINDOW_DAYS: i64 = 14;

#[component]
pub fn Onboarding() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut wizard = use_signal(OnboardingWizard::new);

    let on_next = move |_: ()| {
        if !wizard.read().steps().is_terminal() {
            wizard.write().go_next();
            return;
        }
        let begun = wizard.write().begin_submit(&services.session);
        let payload = match begun {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Profile not submitted: {}", e);
                return;
            }
        };
        let api = services.api.clone();
        spawn(async move {
            let outcome = api.create_job_seeker_profile(&payload).await;
            if wizard.write().finish_submit(outcome).is_ok() {
                info!("Profile saved, showing job list");
                navigator.push(Route::JobList {});
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
                OnboardingStep::Career => rsx! {
                    ExperienceInput {
                        wizard,
                        field: ExperienceField::Career,
                        title: "어떤 일을 해 보셨나요?",
                    }
                    ExperienceInput {
                        wizard,
                        field: ExperienceField::Skills,
                        title: "보유 기술",
                    }
                },
                OnboardingStep::Introduction => rsx! { IntroductionStep { wizard } },
                OnboardingStep::License => rsx! {
                    ExperienceInput {
                        wizard,
                        field: ExperienceField::License,
                        title: "보유 자격증",
                    }
                },
                OnboardingStep::PreferredJobs => rsx! { PreferredJobsStep { wizard } },
                OnboardingStep::Schedule => rsx! { ScheduleStep { wizard } },
                OnboardingStep::Summary => rsx! { SummaryStep { wizard } },
            }

            InlineError { message: submission.error().map(str::to_string) }

            StepNavigation {
                can_go_back: steps.can_go_back(),
                can_proceed,
                submitting: submission.is_submitting(),
                next_label: if steps.is_terminal() { "저장하기".to_string() } else { "다음".to_string() },
                on_prev: move |_| {
                    wizard.write().go_prev();
                },
                on_next,
            }
        }
    }
}

#[component]
fn ExperienceInput(
    wizard: Signal<OnboardingWizard>,
    field: ExperienceField,
    title: String,
) -> Element {
    let experience = wizard.read().values().experience.clone();
    let value = match field {
        ExperienceField::Career => experience.career,
        ExperienceField::License => experience.license,
        ExperienceField::Skills => experience.skills,
        ExperienceField::Introduction => experience.introduction,
    };

    rsx! {
        div { class: "form-group",
            label { "{title}" }
            textarea {
                value: "{value}",
                placeholder: "선택 입력",
                oninput: move |evt| wizard.write().set_experience(field, &evt.value()),
            }
        }
    }
}

#[component]
fn IntroductionStep(wizard: Signal<OnboardingWizard>) -> Element {
    let file_name = wizard.read().values().profile_file_name.clone();

    rsx! {
        div { class: "step-content introduction",
            ExperienceInput {
                wizard,
                field: ExperienceField::Introduction,
                title: "자기소개",
            }
            div { class: "form-group",
                label { "이력서 파일" }
                input {
                    r#type: "file",
                    onchange: move |evt| {
                        let picked = evt.files().and_then(|engine| engine.files().into_iter().next());
                        let name = picked.as_deref().and_then(|path| {
                            Path::new(path).file_name().and_then(|name| name.to_str()).map(str::to_string)
                        });
                        wizard.write().set_profile_file(name.as_deref());
                    },
                }
                if let Some(name) = file_name {
                    span { class: "file-name", "{name}" }
                }
            }
        }
    }
}

#[component]
fn PreferredJobsStep(wizard: Signal<OnboardingWizard>) -> Element {
    let values = wizard.read().values().clone();

    rsx! {
        div { class: "step-content preferred-jobs",
            h3 { "희망 직종" }
            div { class: "chip-group",
                for (id, label) in JOB_CATEGORIES.iter().copied() {
                    Chip {
                        key: "{id}",
                        label: label.to_string(),
                        selected: values.preferred_jobs.iter().any(|j| j == id),
                        on_toggle: move |_| wizard.write().toggle_job(id),
                    }
                }
            }

            h3 { "희망 지역" }
            div { class: "chip-group",
                for city in catalog::cities() {
                    Chip {
                        key: "{city}",
                        label: city.to_string(),
                        selected: values.preferred_regions.iter().any(|r| r == city),
                        on_toggle: move |_| {
                            let mut regions = wizard.read().values().preferred_regions.clone();
                            jobmatch_ui::state::filter::toggle_value(&mut regions, city);
                            wizard.write().set_preferred_regions(regions);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleStep(wizard: Signal<OnboardingWizard>) -> Element {
    let schedule = wizard.read().values().work_schedule.clone();
    let today = Local::now().date_naive();
    let dates: Vec<String> = (0..DATE_WINDOW_DAYS)
        .map(|offset| (today + Duration::days(offset)).format("%Y-%m-%d").to_string())
        .collect();
    let start = schedule.start_time.clone().unwrap_or_default();
    let end = schedule.end_time.clone().unwrap_or_default();
    let all_days = DAYS_OF_WEEK
        .iter()
        .all(|day| schedule.days_of_week.iter().any(|d| d == day));

    let non_empty = |value: String| (!value.is_empty()).then_some(value);

    rsx! {
        div { class: "step-content schedule",
            h3 { "근무 가능 날짜" }
            div { class: "chip-group dates",
                for date in dates {
                    Chip {
                        key: "{date}",
                        label: date[5..].replace('-', "/"),
                        selected: schedule.available_dates.contains(&date),
                        on_toggle: {
                            let date = date.clone();
                            move |_| wizard.write().toggle_date(&date)
                        },
                    }
                }
            }

            h3 { "근무 가능 시간" }
            div { class: "time-range",
                input {
                    r#type: "time",
                    value: "{start}",
                    oninput: {
                        let end = end.clone();
                        move |evt: FormEvent| {
                            let start = non_empty(evt.value());
                            let end = non_empty(end.clone());
                            wizard.write().set_times(start.as_deref(), end.as_deref());
                        }
                    },
                }
                span { " ~ " }
                input {
                    r#type: "time",
                    value: "{end}",
                    oninput: {
                        let start = start.clone();
                        move |evt: FormEvent| {
                            let start = non_empty(start.clone());
                            let end = non_empty(evt.value());
                            wizard.write().set_times(start.as_deref(), end.as_deref());
                        }
                    },
                }
            }
            if !schedule.is_valid() {
                p { class: "inline-error", "시작 시간과 종료 시간을 모두 올바르게 입력해 주세요." }
            }

            h3 { "근무 가능 요일" }
            div { class: "chip-group",
                Chip {
                    label: "전체".to_string(),
                    selected: all_days,
                    on_toggle: move |_| wizard.write().toggle_all_days(),
                }
                for day in DAYS_OF_WEEK.iter().copied() {
                    Chip {
                        key: "{day}",
                        label: day.to_string(),
                        selected: schedule.days_of_week.iter().any(|d| d == day),
                        on_toggle: move |_| wizard.write().toggle_day(day),
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryStep(wizard: Signal<OnboardingWizard>) -> Element {
    let values = wizard.read().values().clone();
    let jobs: Vec<&str> = JOB_CATEGORIES
        .iter()
        .filter(|(id, _)| values.preferred_jobs.iter().any(|j| j == id))
        .map(|(_, label)| *label)
        .collect();
    let or_any = |items: String| if items.is_empty() { catalog::ANY.to_string() } else { items };
    let jobs = or_any(jobs.join(", "));
    let regions = or_any(values.preferred_regions.join(", "));
    let schedule = &values.work_schedule;
    let hours = match (&schedule.start_time, &schedule.end_time) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        _ => catalog::ANY.to_string(),
    };
    let days = or_any(schedule.days_of_week.join(", "));
    let file = values
        .profile_file_name
        .clone()
        .unwrap_or_else(|| "미입력".to_string());

    rsx! {
        div { class: "step-content summary",
            dl {
                dt { "희망 직종" }
                dd { "{jobs}" }
                dt { "희망 지역" }
                dd { "{regions}" }
                dt { "근무 시간" }
                dd { "{hours}" }
                dt { "근무 요일" }
                dd { "{days}" }
                dt { "이력서 파일" }
                dd { "{file}" }
            }
        }
    }
}
