//! Korean lessons catalogue and locally stored learning progress
//!
//! The catalogue ships with the binary (`data/lessons.json`). Progress is
//! kept per lesson in the [`crate::session::LocalStore`] under
//! `lesson-progress-{id}` as `{"completedTopics": [...]}`, and the user's
//! level under [`KEY_USER_LEVEL`].

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::LANGUAGE_LEVELS;

pub const KEY_USER_LEVEL: &str = "userLevel";

static CATALOGUE: Lazy<Catalogue> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/lessons.json")).expect("lesson catalogue is valid")
});

static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Lv\.(\d+)").expect("level pattern is valid"));

#[derive(Debug, Clone, Deserialize)]
struct Catalogue {
    lessons: Vec<Lesson>,
    contents: BTreeMap<String, TopicContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub level: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub duration: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
}

/// Reading material and the closing quiz of one topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicContent {
    pub title: String,
    pub content: Vec<ContentItem>,
    pub quiz: Quiz,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Grammar {
        title: String,
        explanation: String,
        examples: Vec<String>,
    },
    Dialogue {
        title: String,
        conversation: Vec<DialogueLine>,
    },
    Tip {
        title: String,
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

impl Quiz {
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

pub fn lessons() -> &'static [Lesson] {
    &CATALOGUE.lessons
}

pub fn lesson(id: &str) -> Option<&'static Lesson> {
    CATALOGUE.lessons.iter().find(|lesson| lesson.id == id)
}

/// Content of topic `topic_id` in lesson `lesson_id`, if it has been written.
pub fn topic_content(lesson_id: &str, topic_id: &str) -> Option<&'static TopicContent> {
    CATALOGUE.contents.get(&format!("{lesson_id}-{topic_id}"))
}

/// Numeric part of a `Lv.N ...` label, 0 when there is none.
pub fn level_number(level: &str) -> u8 {
    LEVEL_RE
        .captures(level)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// A lesson is open when the user has a level at or above the lesson's.
pub fn is_locked(lesson: &Lesson, user_level: Option<&str>) -> bool {
    match user_level {
        Some(user_level) => level_number(&lesson.level) > level_number(user_level),
        None => true,
    }
}

pub fn progress_key(lesson_id: &str) -> String {
    format!("lesson-progress-{lesson_id}")
}

/// Topics finished in one lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    #[serde(rename = "completedTopics", default)]
    pub completed_topics: Vec<String>,
}

impl LessonProgress {
    /// Records `topic_id` once. Returns false when it was already there.
    pub fn mark_complete(&mut self, topic_id: &str) -> bool {
        if self.is_complete(topic_id) {
            return false;
        }
        self.completed_topics.push(topic_id.to_string());
        true
    }

    pub fn is_complete(&self, topic_id: &str) -> bool {
        self.completed_topics.iter().any(|id| id == topic_id)
    }

    /// Distinct finished topics that still exist in `lesson`.
    pub fn completed_count(&self, lesson: &Lesson) -> usize {
        let done: BTreeSet<&str> = self.completed_topics.iter().map(String::as_str).collect();
        lesson
            .topics
            .iter()
            .filter(|topic| done.contains(topic.id.as_str()))
            .count()
    }

    /// Rounded percentage of finished topics.
    pub fn percent(&self, lesson: &Lesson) -> u8 {
        let total = lesson.topics.len();
        if total == 0 {
            return 0;
        }
        let done = self.completed_count(lesson);
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

/// One row of the lessons list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonStatus {
    pub lesson: &'static Lesson,
    pub progress: u8,
    pub completed: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Level(&'static str),
}

impl LevelFilter {
    /// "All" followed by every language level.
    pub fn options() -> Vec<LevelFilter> {
        std::iter::once(LevelFilter::All)
            .chain(LANGUAGE_LEVELS.iter().copied().map(LevelFilter::Level))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "전체",
            LevelFilter::Level(level) => *level,
        }
    }

    pub fn matches(&self, lesson: &Lesson) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Level(level) => lesson.level == *level,
        }
    }
}

/// Lessons with progress and lock state for a given user level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningOverview {
    pub user_level: Option<String>,
    pub lessons: Vec<LessonStatus>,
}

impl LearningOverview {
    pub fn build(
        user_level: Option<&str>,
        mut progress: impl FnMut(&str) -> LessonProgress,
    ) -> Self {
        let lessons = lessons()
            .iter()
            .map(|lesson| {
                let percent = progress(&lesson.id).percent(lesson);
                LessonStatus {
                    lesson,
                    progress: percent,
                    completed: percent == 100,
                    locked: is_locked(lesson, user_level),
                }
            })
            .collect();
        Self {
            user_level: user_level.map(str::to_string),
            lessons,
        }
    }

    /// Average progress over the unlocked lessons, 0 when none are open.
    pub fn overall_progress(&self) -> u8 {
        let open: Vec<u32> = self
            .lessons
            .iter()
            .filter(|status| !status.locked)
            .map(|status| u32::from(status.progress))
            .collect();
        if open.is_empty() {
            return 0;
        }
        let total: u32 = open.iter().sum();
        (f64::from(total) / open.len() as f64).round() as u8
    }

    pub fn filtered(&self, filter: LevelFilter) -> impl Iterator<Item = &LessonStatus> {
        self.lessons
            .iter()
            .filter(move |status| filter.matches(status.lesson))
    }
}

/// A single quiz attempt. The first answer sticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAttempt {
    selected: Option<String>,
    correct: bool,
}

impl QuizAttempt {
    /// Records `option` unless an answer was already given.
    pub fn answer(&mut self, quiz: &Quiz, option: &str) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.correct = quiz.is_correct(option);
        self.selected = Some(option.to_string());
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// `Some(correct)` once answered.
    pub fn result(&self) -> Option<bool> {
        self.selected.as_ref().map(|_| self.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_of(ids: &[&str]) -> LessonProgress {
        LessonProgress {
            completed_topics: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_catalogue_loads() {
        assert_eq!(lessons().len(), 5);
        assert_eq!(lesson("4").unwrap().topics.len(), 5);
        assert!(lesson("9").is_none());

        let content = topic_content("1", "1").unwrap();
        assert_eq!(content.title, "1강. 안녕하세요");
        assert!(content.quiz.is_correct("감사합니다"));
        assert!(matches!(content.content.last(), Some(ContentItem::Tip { .. })));
        assert!(topic_content("5", "1").is_none());
    }

    #[test]
    fn test_every_quiz_answer_is_an_option() {
        for lesson in lessons() {
            for topic in &lesson.topics {
                if let Some(content) = topic_content(&lesson.id, &topic.id) {
                    assert!(content.quiz.options.contains(&content.quiz.answer), "{}-{}", lesson.id, topic.id);
                }
            }
        }
    }

    #[test]
    fn test_level_number() {
        assert_eq!(level_number("Lv.3 중급"), 3);
        assert_eq!(level_number("중급"), 0);
    }

    #[test]
    fn test_locks_follow_user_level() {
        let beginner = lesson("1").unwrap();
        let business = lesson("4").unwrap();
        assert!(is_locked(beginner, None));
        assert!(!is_locked(beginner, Some("Lv.2 초급")));
        assert!(is_locked(business, Some("Lv.2 초급")));
        assert!(!is_locked(business, Some("Lv.4 상급")));
    }

    #[test]
    fn test_progress_ignores_duplicates_and_unknown_topics() {
        let business = lesson("4").unwrap();
        let mut progress = progress_of(&["1", "1", "9"]);
        assert_eq!(progress.completed_count(business), 1);
        assert_eq!(progress.percent(business), 20);

        assert!(!progress.mark_complete("1"));
        assert!(progress.mark_complete("2"));
        assert_eq!(progress.percent(business), 40);
    }

    #[test]
    fn test_progress_json_shape() {
        let progress: LessonProgress = serde_json::from_str(r#"{"completedTopics":["1","2"]}"#).unwrap();
        assert!(progress.is_complete("2"));
        assert_eq!(
            serde_json::to_string(&progress).unwrap(),
            r#"{"completedTopics":["1","2"]}"#
        );
    }

    #[test]
    fn test_overall_progress_counts_unlocked_only() {
        let overview = LearningOverview::build(Some("Lv.2 초급"), |id| match id {
            "1" => progress_of(&["1", "2"]),
            "2" => progress_of(&["1"]),
            "4" => progress_of(&["1", "2", "3", "4", "5"]),
            _ => LessonProgress::default(),
        });
        assert_eq!(overview.overall_progress(), 75);
        let first = &overview.lessons[0];
        assert!(first.completed && !first.locked);
        assert!(overview.lessons[3].completed && overview.lessons[3].locked);

        let none = LearningOverview::build(None, |_| progress_of(&["1"]));
        assert_eq!(none.overall_progress(), 0);
        assert!(none.lessons.iter().all(|status| status.locked));
    }

    #[test]
    fn test_level_filter() {
        let overview = LearningOverview::build(Some("Lv.4 상급"), |_| LessonProgress::default());
        assert_eq!(LevelFilter::options().len(), 5);
        assert_eq!(overview.filtered(LevelFilter::All).count(), 5);
        let advanced: Vec<_> = overview
            .filtered(LevelFilter::Level("Lv.4 상급"))
            .map(|status| status.lesson.id.as_str())
            .collect();
        assert_eq!(advanced, ["4", "5"]);
    }

    #[test]
    fn test_quiz_first_answer_sticks() {
        let quiz = &topic_content("1", "2").unwrap().quiz;
        let mut attempt = QuizAttempt::default();
        assert_eq!(attempt.result(), None);
        assert!(attempt.answer(quiz, "는"));
        assert!(!attempt.answer(quiz, "은"));
        assert_eq!(attempt.selected(), Some("는"));
        assert_eq!(attempt.result(), Some(false));
    }
}
