//! Facet filters for job and applicant listings
//!
//! Two flavours exist: the job-seeker modal where every facet is
//! multi-select, and the employer modal where language level and
//! experience are single-select. Both share the cascading region
//! selection. Edits happen on a draft inside [`FilterModal`] and reach
//! the listing only through `apply`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::models::{ApplicantSummary, JobSummary};
use crate::catalog::{self, ANY};

/// Adds `value` when absent, removes it when present. Keeps insertion order.
pub fn toggle_value(values: &mut Vec<String>, value: &str) {
    if let Some(index) = values.iter().position(|v| v == value) {
        values.remove(index);
    } else {
        values.push(value.to_string());
    }
}

fn toggle_single(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}

/// Two level city → district selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSelection {
    pub city: Option<String>,
    pub districts: Vec<String>,
}

impl RegionSelection {
    /// Stores the new city and wipes the district selection.
    pub fn select_city(&mut self, city: &str) {
        debug!(city, "selecting city, clearing districts");
        self.city = Some(city.to_string());
        self.districts.clear();
    }

    /// Toggles a district of the selected city.
    ///
    /// Returns false without changing anything when no city is selected
    /// or the district belongs to another city.
    pub fn toggle_district(&mut self, district: &str) -> bool {
        let Some(city) = self.city.as_deref() else {
            return false;
        };
        if !catalog::districts_of(city).contains(&district) {
            return false;
        }
        toggle_value(&mut self.districts, district);
        true
    }

    /// Districts offered for the selected city.
    pub fn available_districts(&self) -> &'static [&'static str] {
        self.city.as_deref().map(catalog::districts_of).unwrap_or(&[])
    }

    pub fn count(&self) -> usize {
        usize::from(self.city.is_some()) + self.districts.len()
    }

    pub fn matches(&self, city: &str, district: &str) -> bool {
        match self.city.as_deref() {
            None => true,
            Some(selected) => {
                selected == city
                    && (self.districts.is_empty() || self.districts.iter().any(|d| d == district))
            }
        }
    }
}

fn matches_any(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

fn intersects(selected: &[String], values: &[String]) -> bool {
    selected.is_empty()
        || values.iter().any(|v| v == ANY)
        || selected.iter().any(|s| s == ANY || values.contains(s))
}

/// Multi-select filter used by job seekers browsing postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSeekerFilter {
    pub language_levels: Vec<String>,
    pub region: RegionSelection,
    pub experience: Vec<String>,
    pub work_preferences: Vec<String>,
    pub visa: Option<String>,
}

impl JobSeekerFilter {
    pub fn toggle_language_level(&mut self, level: &str) {
        toggle_value(&mut self.language_levels, level);
    }

    pub fn toggle_experience(&mut self, bucket: &str) {
        toggle_value(&mut self.experience, bucket);
    }

    pub fn toggle_work_preference(&mut self, preference: &str) {
        toggle_value(&mut self.work_preferences, preference);
    }

    pub fn toggle_visa(&mut self, visa: &str) {
        toggle_single(&mut self.visa, visa);
    }

    pub fn active_count(&self) -> usize {
        self.language_levels.len()
            + self.region.count()
            + self.experience.len()
            + self.work_preferences.len()
            + usize::from(self.visa.is_some())
    }

    pub fn matches(&self, job: &JobSummary) -> bool {
        matches_any(&self.language_levels, &job.language_level)
            && self.region.matches(&job.city, &job.district)
            && matches_any(&self.experience, &job.experience)
            && intersects(&self.work_preferences, &job.work_schedule)
            && self
                .visa
                .as_ref()
                .map_or(true, |visa| job.visas.iter().any(|v| v == visa))
    }
}

/// Single-select filter used by employers browsing applicants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerFilter {
    pub language_level: Option<String>,
    pub region: RegionSelection,
    pub experience: Option<String>,
    pub work_schedule: Vec<String>,
    pub visa: Option<String>,
}

impl EmployerFilter {
    pub fn set_language_level(&mut self, level: &str) {
        self.language_level = Some(level.to_string());
    }

    pub fn set_experience(&mut self, bucket: &str) {
        self.experience = Some(bucket.to_string());
    }

    pub fn toggle_work_schedule(&mut self, tag: &str) {
        toggle_value(&mut self.work_schedule, tag);
    }

    pub fn toggle_visa(&mut self, visa: &str) {
        toggle_single(&mut self.visa, visa);
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.language_level.is_some())
            + self.region.count()
            + usize::from(self.experience.is_some())
            + self.work_schedule.len()
            + usize::from(self.visa.is_some())
    }

    pub fn matches(&self, applicant: &ApplicantSummary) -> bool {
        let experience_ok = match self.experience.as_deref() {
            None | Some("경력 무관") => true,
            Some(bucket) => applicant.experience == bucket,
        };
        self.language_level
            .as_ref()
            .map_or(true, |level| &applicant.language_level == level)
            && self.region.matches(&applicant.city, &applicant.district)
            && experience_ok
            && intersects(&self.work_schedule, &applicant.work_schedule)
            && self
                .visa
                .as_ref()
                .map_or(true, |visa| applicant.visa.as_ref() == Some(visa))
    }
}

/// Transient modal state: a draft that is only handed out on apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterModal<F> {
    draft: F,
    open: bool,
}

impl<F: Clone + Default> FilterModal<F> {
    /// Opens the modal seeded with the currently applied filter.
    pub fn open_with(&mut self, initial: &F) {
        self.draft = initial.clone();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &F {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut F {
        &mut self.draft
    }

    pub fn reset(&mut self) {
        self.draft = F::default();
    }

    /// Closes without applying, the draft is discarded on next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Hands the whole draft to `on_apply` at once and closes.
    pub fn apply(&mut self, on_apply: impl FnOnce(F)) {
        on_apply(self.draft.clone());
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(city: &str, district: &str) -> JobSummary {
        JobSummary {
            id: "job-1".to_string(),
            title: "주방 보조".to_string(),
            language_level: "Lv.2 초급".to_string(),
            city: city.to_string(),
            district: district.to_string(),
            experience: "경력 없음".to_string(),
            work_schedule: vec!["평일".to_string()],
            visas: vec!["E-9".to_string(), "H-2".to_string()],
        }
    }

    #[test]
    fn test_switching_city_clears_districts() {
        let mut region = RegionSelection::default();
        region.select_city("서울");
        assert!(region.toggle_district("강남구"));
        assert!(region.toggle_district("마포구"));
        assert_eq!(region.districts.len(), 2);

        region.select_city("부산");
        assert_eq!(region.city.as_deref(), Some("부산"));
        assert!(region.districts.is_empty());
    }

    #[test]
    fn test_district_requires_matching_city() {
        let mut region = RegionSelection::default();
        assert!(!region.toggle_district("강남구"));
        region.select_city("부산");
        assert!(!region.toggle_district("강남구"));
        assert!(region.toggle_district("해운대구"));
        assert!(region.toggle_district("해운대구"));
        assert!(region.districts.is_empty());
    }

    #[test]
    fn test_visa_toggle_clears_on_repeat() {
        let mut filter = JobSeekerFilter::default();
        filter.toggle_visa("E-9");
        assert_eq!(filter.visa.as_deref(), Some("E-9"));
        filter.toggle_visa("H-2");
        assert_eq!(filter.visa.as_deref(), Some("H-2"));
        filter.toggle_visa("H-2");
        assert_eq!(filter.visa, None);
    }

    #[test]
    fn test_job_seeker_filter_matches() {
        let mut filter = JobSeekerFilter::default();
        assert!(filter.matches(&job("서울", "강남구")));

        filter.region.select_city("서울");
        filter.region.toggle_district("마포구");
        assert!(!filter.matches(&job("서울", "강남구")));
        assert!(filter.matches(&job("서울", "마포구")));
        assert!(!filter.matches(&job("부산", "중구")));

        filter.toggle_visa("F-4");
        assert!(!filter.matches(&job("서울", "마포구")));
        filter.toggle_visa("E-9");
        assert!(filter.matches(&job("서울", "마포구")));

        filter.toggle_work_preference("주말");
        assert!(!filter.matches(&job("서울", "마포구")));
        filter.toggle_work_preference(ANY);
        assert!(filter.matches(&job("서울", "마포구")));
        assert_eq!(filter.active_count(), 5);
    }

    #[test]
    fn test_employer_filter_single_select() {
        let mut filter = EmployerFilter::default();
        filter.set_language_level("Lv.1 기초");
        filter.set_language_level("Lv.3 중급");
        filter.set_experience("1년 미만");
        assert_eq!(filter.language_level.as_deref(), Some("Lv.3 중급"));
        assert_eq!(filter.active_count(), 2);

        let applicant = ApplicantSummary {
            id: "a-1".to_string(),
            name: "Nguyen".to_string(),
            language_level: "Lv.3 중급".to_string(),
            city: "경기".to_string(),
            district: "수원시".to_string(),
            experience: "1년 미만".to_string(),
            work_schedule: vec!["주말".to_string()],
            visa: Some("E-9".to_string()),
        };
        assert!(filter.matches(&applicant));
        filter.set_experience("경력 무관");
        assert!(filter.matches(&applicant));
        filter.toggle_visa("H-2");
        assert!(!filter.matches(&applicant));
    }

    #[test]
    fn test_modal_applies_draft_atomically() {
        let applied = JobSeekerFilter::default();
        let mut modal = FilterModal::<JobSeekerFilter>::default();
        modal.open_with(&applied);
        modal.draft_mut().toggle_language_level("Lv.1 기초");
        modal.draft_mut().toggle_experience("1-2년");
        assert!(applied.language_levels.is_empty());

        let mut received = None;
        modal.apply(|filter| received = Some(filter));
        let received = received.expect("apply hands out the draft");
        assert_eq!(received.language_levels, vec!["Lv.1 기초"]);
        assert_eq!(received.experience, vec!["1-2년"]);
        assert!(!modal.is_open());
    }
}
