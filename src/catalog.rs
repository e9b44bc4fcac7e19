//! Static option catalogues offered by the filter modals and wizards

use serde::{Deserialize, Serialize};

/// Top-level regions and their districts.
pub const KOREA_REGIONS: &[(&str, &[&str])] = &[
    (
        "서울",
        &[
            "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구", "금천구",
            "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구", "서초구", "성동구",
            "성북구", "송파구", "양천구", "영등포구", "용산구", "은평구", "종로구", "중구",
            "중랑구",
        ],
    ),
    (
        "경기",
        &[
            "수원시", "성남시", "고양시", "용인시", "부천시", "안산시", "안양시", "남양주시",
            "화성시", "평택시", "의정부시", "시흥시", "파주시", "김포시", "광명시",
        ],
    ),
    (
        "인천",
        &["중구", "동구", "미추홀구", "연수구", "남동구", "부평구", "계양구", "서구"],
    ),
    (
        "부산",
        &[
            "중구", "서구", "동구", "영도구", "부산진구", "동래구", "남구", "북구", "해운대구",
            "사하구", "금정구", "강서구", "연제구", "수영구", "사상구",
        ],
    ),
    ("대구", &["중구", "동구", "서구", "남구", "북구", "수성구", "달서구"]),
    ("광주", &["동구", "서구", "남구", "북구", "광산구"]),
    ("대전", &["동구", "중구", "서구", "유성구", "대덕구"]),
    ("울산", &["중구", "남구", "동구", "북구", "울주군"]),
    ("세종", &["세종시"]),
];

pub const LANGUAGE_LEVELS: &[&str] = &["Lv.1 기초", "Lv.2 초급", "Lv.3 중급", "Lv.4 상급"];

/// Experience buckets offered to job seekers browsing postings.
pub const EXPERIENCES: &[&str] = &["경력 없음", "1년 미만", "1-2년", "2-3년", "3년 이상"];

/// Experience buckets offered to employers browsing applicants.
pub const EMPLOYER_EXPERIENCES: &[&str] = &["경력 무관", "1년 미만", "1-2년", "2-3년", "3년 이상"];

pub const WORK_PREFERENCES: &[&str] = &["주말", "평일", "무관"];

pub const WORK_SCHEDULES: &[&str] = &["주말", "평일", "주 2-3일", "주 4-5일", "풀타임", "무관"];

pub const VISA_TYPES: &[&str] = &["E-9", "H-2", "F-4", "F-5", "F-6", "D-10"];

/// Job categories selectable during onboarding, `(id, label)`.
pub const JOB_CATEGORIES: &[(&str, &str)] = &[
    ("store", "매장관리"),
    ("service", "서비스"),
    ("serving", "서빙"),
    ("kitchen", "주방"),
    ("labor", "생산·노무"),
    ("delivery", "배달·운전"),
    ("event", "행사·스태프"),
    ("office", "사무"),
    ("sales", "영업·판매"),
];

pub const DAYS_OF_WEEK: &[&str] = &["월", "화", "수", "목", "금", "토", "일"];

/// Placeholder value the API understands as "no preference".
pub const ANY: &str = "무관";

pub fn cities() -> impl Iterator<Item = &'static str> {
    KOREA_REGIONS.iter().map(|(city, _)| *city)
}

pub fn districts_of(city: &str) -> &'static [&'static str] {
    KOREA_REGIONS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}

pub fn is_job_category(id: &str) -> bool {
    JOB_CATEGORIES.iter().any(|(job, _)| *job == id)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nationality {
    pub code: String,
    #[serde(alias = "label")]
    pub name: String,
}

/// Used when the nationality list cannot be fetched.
pub fn fallback_nationalities() -> Vec<Nationality> {
    [("KR", "대한민국"), ("JP", "일본"), ("US", "United States")]
        .into_iter()
        .map(|(code, name)| Nationality {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
}
