//! Korean lessons: level overview, lesson detail and topic study with quiz

use crate::components::{Chip, InlineError};
use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use jobmatch_ui::catalog::LANGUAGE_LEVELS;
use jobmatch_ui::learning::{self, ContentItem, LearningOverview, LevelFilter, QuizAttempt};
use tracing::warn;

#[component]
pub fn Learning() -> Element {
    let services = use_context::<Services>();
    let mut user_level = use_signal({
        let session = services.session.clone();
        move || session.user_level()
    });
    let mut level_filter = use_signal(LevelFilter::default);
    let mut error = use_signal(|| None::<String>);

    let overview = {
        let session = services.session.clone();
        LearningOverview::build(user_level.read().as_deref(), |id| session.lesson_progress(id))
    };
    let overall = overview.overall_progress();
    let filter = level_filter();
    let level_session = services.session.clone();

    rsx! {
        div { class: "page learning-page",
            section { class: "level-card",
                if let Some(level) = user_level() {
                    p { class: "caption", "현재 학습 레벨" }
                    h2 { "{level}" }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "width: {overall}%" }
                    }
                    p { class: "progress-label", "{overall}% 완료" }
                } else {
                    h2 { "아직 설정된 레벨이 없어요" }
                    p { "나의 한국어 레벨을 선택하면 맞는 강의가 열립니다." }
                }
                div { class: "chip-row",
                    for level in LANGUAGE_LEVELS.iter().copied() {
                        Chip {
                            key: "{level}",
                            label: level.to_string(),
                            selected: user_level.read().as_deref() == Some(level),
                            on_toggle: {
                                let session = level_session.clone();
                                move |_| match session.set_user_level(level) {
                                    Ok(()) => {
                                        error.set(None);
                                        user_level.set(Some(level.to_string()));
                                    }
                                    Err(e) => {
                                        warn!("Failed to store learning level: {}", e);
                                        error.set(Some("레벨을 저장하지 못했습니다.".to_string()));
                                    }
                                }
                            },
                        }
                    }
                }
                InlineError { message: error() }
            }

            div { class: "chip-row level-filter",
                for option in LevelFilter::options() {
                    Chip {
                        key: "{option.label()}",
                        label: option.label().to_string(),
                        selected: filter == option,
                        on_toggle: move |_| level_filter.set(option),
                    }
                }
            }

            ul { class: "card-list",
                for status in overview.filtered(filter) {
                    if status.locked {
                        li { key: "{status.lesson.id}", class: "card lesson-card locked",
                            h3 { "🔒 {status.lesson.title}" }
                            p { "{status.lesson.level} 이상에서 열립니다." }
                        }
                    } else {
                        li { key: "{status.lesson.id}", class: "card lesson-card",
                            Link { to: Route::LessonDetail { id: status.lesson.id.clone() },
                                h3 { "{status.lesson.title}" }
                                p { "{status.lesson.level} · {status.lesson.duration}" }
                                if status.completed {
                                    span { class: "tag done", "완료" }
                                } else {
                                    span { class: "tag", "{status.progress}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Topics,
}

#[component]
pub fn LessonDetail(id: String) -> Element {
    let services = use_context::<Services>();
    let mut tab = use_signal(|| DetailTab::Overview);

    let Some(lesson) = learning::lesson(&id) else {
        return rsx! { p { class: "empty", "강의를 찾을 수 없습니다." } };
    };
    if learning::is_locked(lesson, services.session.user_level().as_deref()) {
        return rsx! {
            p { class: "empty", "아직 열리지 않은 강의입니다." }
            Link { class: "secondary-link", to: Route::Learning {}, "학습 홈으로" }
        };
    }

    let progress = services.session.lesson_progress(&lesson.id);
    let done = progress.completed_count(lesson);
    let total = lesson.topics.len();
    let percent = progress.percent(lesson);

    rsx! {
        div { class: "page lesson-detail",
            h2 { "{lesson.title}" }
            p { class: "caption", "{lesson.level} · {lesson.duration}" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            p { class: "progress-label", "{done} / {total} 완료 ({percent}%)" }

            div { class: "tabs",
                button {
                    class: if tab() == DetailTab::Overview { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(DetailTab::Overview),
                    "개요"
                }
                button {
                    class: if tab() == DetailTab::Topics { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(DetailTab::Topics),
                    "강의 목록"
                }
            }

            if tab() == DetailTab::Overview {
                p { "{lesson.description}" }
                h3 { "학습 목표" }
                ul {
                    for objective in lesson.objectives.iter() {
                        li { key: "{objective}", "{objective}" }
                    }
                }
            } else {
                ul { class: "topic-list",
                    for topic in lesson.topics.iter() {
                        li { key: "{topic.id}",
                            Link {
                                to: Route::LessonTopic {
                                    lesson_id: lesson.id.clone(),
                                    topic_id: topic.id.clone(),
                                },
                                if progress.is_complete(&topic.id) { "✓ " }
                                "{topic.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LessonTopic(lesson_id: String, topic_id: String) -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut attempt = use_signal(QuizAttempt::default);

    let Some(content) = learning::topic_content(&lesson_id, &topic_id) else {
        return rsx! {
            p { class: "empty", "퀴즈를 찾을 수 없습니다." }
            Link { class: "secondary-link", to: Route::LessonDetail { id: lesson_id.clone() }, "강의로 돌아가기" }
        };
    };
    let quiz = &content.quiz;
    let result = attempt.read().result();
    let selected = attempt.read().selected().map(str::to_string);

    let finish = move |_| {
        if let Err(e) = services.session.complete_topic(&lesson_id, &topic_id) {
            warn!("Could not save lesson progress: {}", e);
        }
        navigator.push(Route::Learning {});
    };

    rsx! {
        div { class: "page lesson-topic",
            h2 { "{content.title}" }

            for (index, item) in content.content.iter().enumerate() {
                match item {
                    ContentItem::Grammar { title, explanation, examples } => rsx! {
                        section { key: "{index}", class: "content-block grammar",
                            h3 { "{title}" }
                            p { "{explanation}" }
                            ul {
                                for example in examples.iter() {
                                    li { key: "{example}", "{example}" }
                                }
                            }
                        }
                    },
                    ContentItem::Dialogue { title, conversation } => rsx! {
                        section { key: "{index}", class: "content-block dialogue",
                            h3 { "{title}" }
                            for (turn, line) in conversation.iter().enumerate() {
                                p { key: "{turn}",
                                    strong { "{line.speaker}: " }
                                    "{line.line}"
                                }
                            }
                        }
                    },
                    ContentItem::Tip { title, content } => rsx! {
                        section { key: "{index}", class: "content-block tip",
                            h3 { "💡 {title}" }
                            p { "{content}" }
                        }
                    },
                }
            }

            section { class: "quiz",
                h3 { "퀴즈" }
                p { "{quiz.question}" }
                for option in quiz.options.iter() {
                    button {
                        key: "{option}",
                        class: if selected.as_deref() == Some(option.as_str()) { "quiz-option selected" } else { "quiz-option" },
                        disabled: result.is_some(),
                        onclick: move |_| {
                            attempt.write().answer(quiz, option);
                        },
                        "{option}"
                    }
                }

                if let Some(correct) = result {
                    div { class: if correct { "quiz-result correct" } else { "quiz-result incorrect" },
                        p { if correct { "정답입니다!" } else { "오답입니다. 정답: {quiz.answer}" } }
                        p { "{quiz.explanation}" }
                        button { class: "confirm-button", onclick: finish, "학습 완료" }
                    }
                }
            }
        }
    }
}
