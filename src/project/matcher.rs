//! Best-match selection between a source file and compiled outputs
//!
//! Compiled outputs usually share their source's stem and differ only by
//! directory prefix or extension, so candidates are ranked by how many
//! trailing characters they share with the source once extensions are
//! removed.

use crate::error::{HostrunError, HostrunResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A candidate path with its suffix-alignment score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub path: &'a Path,
    pub score: usize,
}

/// Remove the extension of the last path component, if it has one.
///
/// A leading dot (`.eslintrc`) is not an extension.
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        None | Some(0) => path,
        Some(dot) => &path[..name_start + dot],
    }
}

/// Count consecutive equal characters comparing from the end of both strings
pub fn suffix_score(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Score every candidate against `reference`, best first.
///
/// Equal scores keep their input order.
pub fn rank_candidates<'a>(reference: &Path, candidates: &'a [PathBuf]) -> Vec<ScoredCandidate<'a>> {
    let reference = reference.to_string_lossy();
    let reference = strip_extension(&reference);

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|candidate| {
            let text = candidate.to_string_lossy();
            ScoredCandidate {
                path: candidate.as_path(),
                score: suffix_score(reference, strip_extension(&text)),
            }
        })
        .collect();

    // sort_by is stable, which gives first-occurrence tie breaking
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Pick the candidate most likely compiled from `reference`
pub fn select_best_match<'a>(reference: &Path, candidates: &'a [PathBuf]) -> HostrunResult<&'a Path> {
    match candidates {
        [] => Err(HostrunError::InvalidArgument(
            "no candidate paths to match against".to_string(),
        )),
        [only] => Ok(only.as_path()),
        _ => Ok(rank_candidates(reference, candidates)[0].path),
    }
}
