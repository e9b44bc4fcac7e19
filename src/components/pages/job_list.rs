use crate::components::filter_modal::JobSeekerFilterModal;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::api::Api;
use jobmatch_ui::state::{FilterModal, JobSeekerFilter};

/// Job postings for job seekers, narrowed by the filter modal
#[component]
pub fn JobList() -> Element {
    let services = use_context::<Services>();
    let mut filter = use_signal(JobSeekerFilter::default);
    let mut modal = use_signal(FilterModal::<JobSeekerFilter>::default);

    let api = services.api.clone();
    let jobs = use_resource(move || {
        let api = api.clone();
        async move { api.list_jobs().await }
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

            match &*jobs.read() {
                None => rsx! { p { class: "loading", "불러오는 중..." } },
                Some(Err(e)) => {
                    let message = e.user_message("공고를 불러오지 못했습니다.");
                    rsx! { p { class: "inline-error", "{message}" } }
                }
                Some(Ok(list)) => {
                    let current = filter.read();
                    let visible: Vec<_> = list.iter().filter(|job| current.matches(job)).cloned().collect();
                    rsx! {
                        if visible.is_empty() {
                            p { class: "empty", "조건에 맞는 공고가 없습니다." }
                        }
                        ul { class: "card-list",
                            for job in visible {
                                li { key: "{job.id}", class: "card",
                                    h3 { "{job.title}" }
                                    p { "{job.city} {job.district}" }
                                    p { "{job.language_level} · {job.experience}" }
                                    for visa in job.visas.iter() {
                                        span { key: "{visa}", class: "tag", "{visa}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            JobSeekerFilterModal {
                modal,
                on_apply: move |applied| filter.set(applied),
            }
        }
    }
}
