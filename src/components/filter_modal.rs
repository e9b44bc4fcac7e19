//! Filter modals for the job and applicant listings
//!
//! The modal edits a draft; the listing only sees the filter once
//! "적용하기" hands it over.

use crate::components::Chip;
use dioxus::prelude::*;
use jobmatch_ui::catalog::{
    self, EMPLOYER_EXPERIENCES, EXPERIENCES, LANGUAGE_LEVELS, VISA_TYPES, WORK_PREFERENCES,
    WORK_SCHEDULES,
};
use jobmatch_ui::state::{EmployerFilter, FilterModal, JobSeekerFilter, RegionSelection};

fn take_applied<F: Clone + Default>(mut modal: Signal<FilterModal<F>>) -> Option<F> {
    let mut applied = None;
    modal.write().apply(|filter| applied = Some(filter));
    applied
}

/// Filter modal shown to job seekers, every facet is multi-select
#[component]
pub fn JobSeekerFilterModal(
    modal: Signal<FilterModal<JobSeekerFilter>>,
    on_apply: EventHandler<JobSeekerFilter>,
) -> Element {
    if !modal.read().is_open() {
        return rsx! {};
    }
    let draft = modal.read().draft().clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "filter-modal",
                FilterSection { title: "한국어 수준",
                    for level in LANGUAGE_LEVELS.iter().copied() {
                        Chip {
                            key: "{level}",
                            label: level.to_string(),
                            selected: draft.language_levels.iter().any(|l| l == level),
                            on_toggle: move |_| modal.write().draft_mut().toggle_language_level(level),
                        }
                    }
                }

                RegionSection {
                    region: draft.region.clone(),
                    on_city: move |city: String| modal.write().draft_mut().region.select_city(&city),
                    on_district: move |district: String| {
                        modal.write().draft_mut().region.toggle_district(&district);
                    },
                }

                FilterSection { title: "경력",
                    for bucket in EXPERIENCES.iter().copied() {
                        Chip {
                            key: "{bucket}",
                            label: bucket.to_string(),
                            selected: draft.experience.iter().any(|e| e == bucket),
                            on_toggle: move |_| modal.write().draft_mut().toggle_experience(bucket),
                        }
                    }
                }

                FilterSection { title: "근무 형태",
                    for preference in WORK_PREFERENCES.iter().copied() {
                        Chip {
                            key: "{preference}",
                            label: preference.to_string(),
                            selected: draft.work_preferences.iter().any(|p| p == preference),
                            on_toggle: move |_| modal.write().draft_mut().toggle_work_preference(preference),
                        }
                    }
                }

                VisaSection {
                    selected: draft.visa.clone(),
                    on_toggle: move |visa: String| modal.write().draft_mut().toggle_visa(&visa),
                }

                ModalActions {
                    on_reset: move |_| modal.write().reset(),
                    on_close: move |_| modal.write().close(),
                    on_apply: move |_| {
                        if let Some(filter) = take_applied(modal) {
                            on_apply.call(filter);
                        }
                    },
                }
            }
        }
    }
}

/// Filter modal shown to employers, language and experience are single-select
#[component]
pub fn EmployerFilterModal(
    modal: Signal<FilterModal<EmployerFilter>>,
    on_apply: EventHandler<EmployerFilter>,
) -> Element {
    if !modal.read().is_open() {
        return rsx! {};
    }
    let draft = modal.read().draft().clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "filter-modal",
                FilterSection { title: "한국어 수준",
                    for level in LANGUAGE_LEVELS.iter().copied() {
                        Chip {
                            key: "{level}",
                            label: level.to_string(),
                            selected: draft.language_level.as_deref() == Some(level),
                            on_toggle: move |_| modal.write().draft_mut().set_language_level(level),
                        }
                    }
                }

                RegionSection {
                    region: draft.region.clone(),
                    on_city: move |city: String| modal.write().draft_mut().region.select_city(&city),
                    on_district: move |district: String| {
                        modal.write().draft_mut().region.toggle_district(&district);
                    },
                }

                FilterSection { title: "경력",
                    for bucket in EMPLOYER_EXPERIENCES.iter().copied() {
                        Chip {
                            key: "{bucket}",
                            label: bucket.to_string(),
                            selected: draft.experience.as_deref() == Some(bucket),
                            on_toggle: move |_| modal.write().draft_mut().set_experience(bucket),
                        }
                    }
                }

                FilterSection { title: "근무 일정",
                    for tag in WORK_SCHEDULES.iter().copied() {
                        Chip {
                            key: "{tag}",
                            label: tag.to_string(),
                            selected: draft.work_schedule.iter().any(|t| t == tag),
                            on_toggle: move |_| modal.write().draft_mut().toggle_work_schedule(tag),
                        }
                    }
                }

                VisaSection {
                    selected: draft.visa.clone(),
                    on_toggle: move |visa: String| modal.write().draft_mut().toggle_visa(&visa),
                }

                ModalActions {
                    on_reset: move |_| modal.write().reset(),
                    on_close: move |_| modal.write().close(),
                    on_apply: move |_| {
                        if let Some(filter) = take_applied(modal) {
                            on_apply.call(filter);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn FilterSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "filter-section",
            h3 { "{title}" }
            div { class: "chip-group", {children} }
        }
    }
}

/// City chips, then the districts of the selected city
#[component]
fn RegionSection(
    region: RegionSelection,
    on_city: EventHandler<String>,
    on_district: EventHandler<String>,
) -> Element {
    let districts = region.available_districts();

    rsx! {
        FilterSection { title: "지역",
            for city in catalog::cities() {
                Chip {
                    key: "{city}",
                    label: city.to_string(),
                    selected: region.city.as_deref() == Some(city),
                    on_toggle: move |_| on_city.call(city.to_string()),
                }
            }
        }
        if !districts.is_empty() {
            div { class: "chip-group districts",
                for district in districts.iter().copied() {
                    Chip {
                        key: "{district}",
                        label: district.to_string(),
                        selected: region.districts.iter().any(|d| d == district),
                        on_toggle: move |_| on_district.call(district.to_string()),
                    }
                }
            }
        }
    }
}

#[component]
fn VisaSection(selected: Option<String>, on_toggle: EventHandler<String>) -> Element {
    rsx! {
        FilterSection { title: "비자",
            for visa in VISA_TYPES.iter().copied() {
                Chip {
                    key: "{visa}",
                    label: visa.to_string(),
                    selected: selected.as_deref() == Some(visa),
                    on_toggle: move |_| on_toggle.call(visa.to_string()),
                }
            }
        }
    }
}

#[component]
fn ModalActions(
    on_reset: EventHandler<()>,
    on_close: EventHandler<()>,
    on_apply: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-actions",
            button { class: "reset-button", onclick: move |_| on_reset.call(()), "초기화" }
            button { class: "close-button", onclick: move |_| on_close.call(()), "닫기" }
            button { class: "apply-button", onclick: move |_| on_apply.call(()), "적용하기" }
        }
    }
}
