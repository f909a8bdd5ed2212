//! Degraded-mode candidate recovery: a line scanner that segments resume
//! text on date-like tokens. Only used when the model's structured response
//! cannot be parsed; deliberately lower-fidelity than the primary contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::ExtractedProjectCandidate;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[.\-/](\d{1,2})([.\-/](\d{1,2}))?").expect("date pattern compiles")
});

/// Lines containing these markers are treated as task descriptions.
const TASK_MARKERS: &[&str] = &["업무", "담당", "역할"];
const BULLET_PREFIXES: &[char] = &['-', '•', '·'];

/// Scans text line-by-line, opening a new candidate at every date-like token
/// and filling company, project name, and tasks from the lines that follow.
/// Candidates without both a company and a project name are discarded.
pub fn scan_candidates(text: &str) -> Vec<ExtractedProjectCandidate> {
    let mut candidates: Vec<ExtractedProjectCandidate> = Vec::new();
    let mut current: Option<ExtractedProjectCandidate> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(date) = DATE_PATTERN.find(line) {
            if let Some(candidate) = current.take() {
                candidates.push(candidate);
            }
            current = Some(ExtractedProjectCandidate {
                period: date.as_str().replace(['-', '/'], "."),
                ..Default::default()
            });
        } else if let Some(candidate) = current.as_mut() {
            // Company tends to follow the date, the project title after that.
            if candidate.company.is_empty() && line.chars().count() < 50 {
                candidate.company = line.to_string();
            } else if candidate.project_name.is_empty() && line.chars().count() < 100 {
                candidate.project_name = line.to_string();
            } else if line.starts_with(BULLET_PREFIXES)
                || TASK_MARKERS.iter().any(|marker| line.contains(marker))
            {
                let task = line.trim_start_matches(BULLET_PREFIXES).trim_start();
                candidate.tasks.push(task.to_string());
            }
        }
    }

    if let Some(candidate) = current.take() {
        candidates.push(candidate);
    }

    candidates
        .into_iter()
        .filter(|c| !c.company.is_empty() && !c.project_name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
이력서

2023-04
한빛유통
검색 광고 구조 개선 프로젝트
- 계정 구조 재설계
담당 업무: 전환 추적 구축

2024.01.15
모아금융
콘텐츠 전략 수립 프로젝트
- 콘텐츠 캘린더 설계
";

    #[test]
    fn test_scanner_segments_on_date_lines() {
        let candidates = scan_candidates(SAMPLE);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].company, "한빛유통");
        assert_eq!(candidates[0].project_name, "검색 광고 구조 개선 프로젝트");
        assert_eq!(candidates[1].company, "모아금융");
    }

    #[test]
    fn test_scanner_normalizes_date_separators() {
        let candidates = scan_candidates(SAMPLE);
        assert_eq!(candidates[0].period, "2023.04");
        assert_eq!(candidates[1].period, "2024.01.15");
    }

    #[test]
    fn test_scanner_collects_bullet_and_marker_tasks() {
        let candidates = scan_candidates(SAMPLE);
        assert_eq!(
            candidates[0].tasks,
            vec![
                "계정 구조 재설계".to_string(),
                "담당 업무: 전환 추적 구축".to_string(),
            ]
        );
    }

    #[test]
    fn test_text_without_dates_yields_nothing() {
        let candidates = scan_candidates("경력 기술서\n회사 소개\n업무 내용");
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_incomplete_trailing_candidate_is_dropped() {
        let candidates = scan_candidates("2024.05\n회사이름만 있는 경우");
        assert!(candidates.is_empty());
    }
}
