//! Duplicate detection for imported project candidates.
//!
//! A candidate duplicates an existing project when their periods match at
//! YYYY.MM granularity AND their names match exactly or by substring
//! containment after normalization. Containment can false-positive on
//! coincidental substrings ("Kakao" vs "Kakao Brain") and false-negative on
//! renamed clients; both are accepted behavior of the heuristic, pinned by
//! tests below rather than special-cased.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::models::ProjectRecord;
use crate::extraction::ExtractedProjectCandidate;

/// Result of checking a batch of candidates against existing projects.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateScan {
    /// Indices of candidates flagged as duplicates.
    pub duplicates: Vec<usize>,
    /// Flagged index → the existing record it matched (first match wins).
    pub matches: BTreeMap<usize, ProjectRecord>,
}

/// Normalizes a period string to YYYY.MM granularity, dropping day-of-month.
/// Strings without at least a year and month pass through trimmed.
pub fn normalize_period(period: &str) -> String {
    let parts: Vec<&str> = period
        .split(['.', '-', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() >= 2 {
        format!("{}.{:0>2}", parts[0], parts[1])
    } else {
        period.trim().to_string()
    }
}

/// Trims, lowercases, and collapses internal whitespace.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `candidate` duplicates `existing`. Period equality is a hard
/// precondition; names then match exactly or by containment either way.
pub fn is_duplicate(candidate: &ExtractedProjectCandidate, existing: &ProjectRecord) -> bool {
    let candidate_period = normalize_period(&candidate.period);
    let existing_period = normalize_period(&existing.period);
    if candidate_period.is_empty() || existing_period.is_empty() {
        return false;
    }
    if candidate_period != existing_period {
        return false;
    }

    let source_name = if candidate.company.trim().is_empty() {
        &candidate.project_name
    } else {
        &candidate.company
    };
    let candidate_name = normalize_name(source_name);
    let existing_name = normalize_name(&existing.client);

    if candidate_name == existing_name {
        return true;
    }
    !candidate_name.is_empty()
        && !existing_name.is_empty()
        && (candidate_name.contains(&existing_name) || existing_name.contains(&candidate_name))
}

/// Flags duplicate candidates against the existing projects.
/// For each flagged candidate the FIRST matching record is reported; there
/// is no scoring or ranking.
pub fn find_duplicates(
    candidates: &[ExtractedProjectCandidate],
    existing: &[ProjectRecord],
) -> DuplicateScan {
    let mut duplicates = Vec::new();
    let mut matches = BTreeMap::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(found) = existing.iter().find(|record| is_duplicate(candidate, record)) {
            duplicates.push(index);
            matches.insert(index, found.clone());
        }
    }

    DuplicateScan {
        duplicates,
        matches,
    }
}
