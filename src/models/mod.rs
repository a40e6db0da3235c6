//! Domain models for the conference normalization pipeline.
//!
//! - [`RawRecord`] - One CSV row as read from the source table
//! - [`Conference`] - A conference with its member team ids
//! - [`College`] - A college with a back-reference to its conference
//! - [`NormalizedRoster`] - The full two-collection output document

use serde::{Deserialize, Serialize};

/// Name of the synthetic conference collecting rows whose Conference
/// value does not match any known conference.
pub const UNMATCHED_CONFERENCE: &str = "Unmatched";

// =============================================================================
// Raw input row
// =============================================================================

/// One row of the source membership table.
///
/// Column headers are matched after whitespace trimming; extra columns in the
/// source are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRecord {
    /// College name. Assumed unique per row (one row per college).
    #[serde(rename = "School")]
    pub school: String,
    /// Conference name. May be empty, in which case the row is routed
    /// to the Unmatched bucket.
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Nickname")]
    pub nickname: String,
}

// =============================================================================
// Normalized entities
// =============================================================================

/// A conference with the surrogate ids of its member colleges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    /// 1-based surrogate id, assigned in first-seen order of distinct
    /// non-empty Conference values. The Unmatched bucket takes the id
    /// one past the last real conference.
    pub conference_id: u32,
    pub conference_name: String,
    /// Member college ids in source row order, each listed once.
    pub team_ids: Vec<u32>,
}

/// A college with a back-reference to the conference it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct College {
    /// 1-based surrogate id, assigned in first-seen order of distinct
    /// School values.
    pub college_id: u32,
    pub college: String,
    /// Id of an entry in the `conferences` collection (possibly Unmatched).
    pub conference_id: u32,
    pub city: String,
    pub state: String,
    pub nickname: String,
}

/// The complete normalized output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRoster {
    pub conferences: Vec<Conference>,
    pub colleges: Vec<College>,
}

impl NormalizedRoster {
    /// Count of colleges routed to the Unmatched bucket.
    pub fn unmatched_count(&self) -> usize {
        let unmatched_id = self
            .conferences
            .iter()
            .find(|c| c.conference_name == UNMATCHED_CONFERENCE)
            .map(|c| c.conference_id);

        match unmatched_id {
            Some(id) => self
                .colleges
                .iter()
                .filter(|c| c.conference_id == id)
                .count(),
            None => 0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
