use crate::components::filter_modal::EmployerFilterModal;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::api::Api;
use jobmatch_ui::state::{EmployerFilter, FilterModal};

/// Applicant cards for employers
#[component]
pub fn ApplicantList() -> Element {
    let services = use_context::<Services>();
    let mut filter = use_signal(EmployerFilter::default);
    let mut modal = use_signal(FilterModal::<EmployerFilter>::default);

    let api = services.api.clone();
    let applicants = use_resource(move || {
        let api = api.clone();
        async move { api.list_applicants().await }
    });

    let active = filter.read().active_count();

    rsx! {
        div { class: "page list-page",
            div { class: "list-toolbar",
                button {
                    class: "filter-button",
                    onclick: move |_| {
                        let current = filter.read().clone();
                        modal.write().open_with(&current);
                    },
                    "필터"
                    if active > 0 {
                        span { class: "badge", "{active}" }
                    }
                }
            }

            match &*applicants.read() {
                None => rsx! { p { class: "loading", "불러오는 중..." } },
                Some(Err(e)) => {
                    let message = e.user_message("지원자 목록을 불러오지 못했습니다.");
                    rsx! { p { class: "inline-error", "{message}" } }
                }
                Some(Ok(list)) => {
                    let current = filter.read();
                    let visible: Vec<_> = list.iter().filter(|a| current.matches(a)).cloned().collect();
                    rsx! {
                        if visible.is_empty() {
                            p { class: "empty", "조건에 맞는 지원자가 없습니다." }
                        }
                        ul { class: "card-list",
                            for applicant in visible {
                                li { key: "{applicant.id}", class: "card applicant-card",
                                    h3 { "{applicant.name}" }
                                    p { "{applicant.city} {applicant.district}" }
                                    p { "{applicant.language_level} · {applicant.experience}" }
                                    if let Some(visa) = &applicant.visa {
                                        span { class: "tag", "{visa}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            EmployerFilterModal {
                modal,
                on_apply: move |applied| filter.set(applied),
            }
        }
    }
}
