//! Transform flat membership rows into the two-entity normalized form.
//!
//! This module handles the core step of assigning surrogate ids and grouping
//! flat rows into conferences with team lists plus colleges with a conference
//! back-reference.
//!
//! # Architecture
//!
//! ```text
//! CSV Input (flat rows)              →  Normalized Output
//! ┌─────────────────────────────┐       ┌──────────────────────────────┐
//! │ School: A, Conference: X    │       │ conferences:                 │
//! │ School: B, Conference: X    │  →    │   X (1)         teamIds [1,2]│
//! │ School: C, Conference: ???  │       │   Unmatched (2) teamIds [3]  │
//! └─────────────────────────────┘       │ colleges: A(1), B(2), C(3)   │
//!                                       └──────────────────────────────┘
//! ```
//!
//! Id assignment is strictly first-seen: conference ids follow the order in
//! which distinct non-empty Conference values appear, college ids the order in
//! which distinct School values appear. Rows whose Conference value matches no
//! known conference are routed to the synthetic Unmatched bucket, which always
//! exists with id one past the last real conference.

use std::collections::HashMap;

use crate::models::{College, Conference, NormalizedRoster, RawRecord, UNMATCHED_CONFERENCE};

/// Normalize flat rows into `{ conferences, colleges }`.
///
/// Pure: no I/O, deterministic for a given input sequence. Rerunning on
/// unchanged input yields an identical structure.
pub fn normalize(records: &[RawRecord]) -> NormalizedRoster {
    let (conference_names, conference_ids) =
        assign_ids(records.iter().map(|r| r.conference.trim()).filter(|c| !c.is_empty()));
    let (_, college_ids) = assign_ids(records.iter().map(|r| r.school.trim()));

    let unmatched_id = conference_names.len() as u32 + 1;

    // Real conferences first, team lists in source row order.
    let mut conferences: Vec<Conference> = conference_names
        .iter()
        .map(|name| {
            let mut team_ids = Vec::new();
            for record in records {
                if record.conference.trim() == name {
                    let id = college_ids[record.school.trim()];
                    if !team_ids.contains(&id) {
                        team_ids.push(id);
                    }
                }
            }
            Conference {
                conference_id: conference_ids[name.as_str()],
                conference_name: name.clone(),
                team_ids,
            }
        })
        .collect();

    // The Unmatched bucket always exists, even when empty.
    conferences.push(Conference {
        conference_id: unmatched_id,
        conference_name: UNMATCHED_CONFERENCE.to_string(),
        team_ids: Vec::new(),
    });
    let unmatched_index = conferences.len() - 1;

    let mut colleges = Vec::with_capacity(records.len());
    for record in records {
        let college_id = college_ids[record.school.trim()];

        // Explicit two-branch resolution: known conference or Unmatched.
        let conference_id = match conference_ids.get(record.conference.trim()) {
            Some(&id) => id,
            None => {
                let team_ids = &mut conferences[unmatched_index].team_ids;
                if !team_ids.contains(&college_id) {
                    team_ids.push(college_id);
                }
                unmatched_id
            }
        };

        colleges.push(College {
            college_id,
            college: record.school.trim().to_string(),
            conference_id,
            city: record.city.trim().to_string(),
            state: record.state.trim().to_string(),
            nickname: record.nickname.trim().to_string(),
        });
    }

    NormalizedRoster {
        conferences,
        colleges,
    }
}

/// Assign 1-based sequential ids to distinct values in first-seen order.
///
/// Returns both the ordered distinct values and the value-to-id map, since
/// iteration order over a plain map would not be reproducible.
fn assign_ids<'a>(values: impl Iterator<Item = &'a str>) -> (Vec<String>, HashMap<String, u32>) {
    let mut ordered = Vec::new();
    let mut ids = HashMap::new();

    for value in values {
        if !ids.contains_key(value) {
            ids.insert(value.to_string(), ordered.len() as u32 + 1);
            ordered.push(value.to_string());
        }
    }

    (ordered, ids)
}
