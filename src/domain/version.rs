// src/domain/version.rs

use crate::backend::models::{Ad, AdVersion};
use thiserror::Error;

/// The backend promised at least one version per ad and broke that promise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ad {ad_id} has no versions")]
pub struct NoCurrentVersion {
    pub ad_id: i64,
}

/// Picks the version that represents what the ad currently looks like.
///
/// Version numbers only ever grow with each edit, so the highest number is the
/// latest edit whatever its moderation status. If two versions share the
/// highest number the first one encountered wins.
pub fn current_version(ad: &Ad) -> Result<&AdVersion, NoCurrentVersion> {
    latest(&ad.versions).ok_or(NoCurrentVersion { ad_id: ad.id })
}

/// Same selection over a bare slice.
pub fn latest(versions: &[AdVersion]) -> Option<&AdVersion> {
    // `max_by_key` keeps the last maximum; a strict comparison keeps the first.
    versions.iter().reduce(|best, candidate| {
        if candidate.version_number > best.version_number {
            candidate
        } else {
            best
        }
    })
}

/// Versions newest first, for history views.
pub fn history(ad: &Ad) -> Vec<&AdVersion> {
    let mut versions: Vec<&AdVersion> = ad.versions.iter().collect();
    versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));
    versions
}
