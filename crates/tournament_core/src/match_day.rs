//! Packing fixtures onto fields and match days.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixture::{Match, MatchId, StageTag};
use crate::group::GroupId;

/// A match bound to a field on its match day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSlot {
    pub match_id: MatchId,
    /// In `1..=num_fields`
    pub field: u32,
}

/// Matches played side by side, one per field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchDay {
    pub day: u32,
    pub stage: StageTag,
    pub matches: Vec<FieldSlot>,
    /// Length of the slot in minutes: the longest match of the day
    pub slot_minutes: u32,
    /// Minutes between the first kickoff of the tournament and this day
    pub offset_minutes: u32,
    /// Clock time of the day's kickoff when a start time is configured
    pub kickoff: Option<NaiveTime>,
}

#[derive(Debug, Clone)]
pub struct MatchDayAllocator {
    fields: u32,
    start: Option<NaiveTime>,
}

impl MatchDayAllocator {
    /// `fields` below one is treated as one
    pub fn new(fields: u32, start: Option<NaiveTime>) -> Self {
        Self {
            fields: fields.max(1),
            start,
        }
    }

    /// Order fixtures for allocation: the group stage round-robin across
    /// groups (each group's first fixture, then each group's second, ...),
    /// followed by knockout fixtures in their existing order.
    pub fn order_fixtures(matches: &[Match]) -> Vec<MatchId> {
        let mut per_group: Vec<(GroupId, Vec<MatchId>)> = Vec::new();
        let mut knockout = Vec::new();

        for m in matches {
            match m.group() {
                Some(group) => match per_group.iter_mut().find(|(id, _)| *id == group) {
                    Some((_, ids)) => ids.push(m.id),
                    None => per_group.push((group, vec![m.id])),
                },
                None => knockout.push(m.id),
            }
        }

        let mut ordered = interleave(per_group.into_iter().map(|(_, ids)| ids).collect());
        ordered.extend(knockout);
        ordered
    }

    /// Chunk `ordered` into match days of at most `fields` matches.
    ///
    /// Order is preserved exactly. A day never mixes group and knockout
    /// matches: the last group day may hold fewer than `fields` matches and
    /// the knockout stage starts on a fresh day, so the day count can exceed
    /// `ceil(total / fields)` by one. Day numbers run on from the group stage
    /// into the knockout stage.
    pub fn allocate(&self, ordered: &[&Match]) -> Vec<MatchDay> {
        let fields = self.fields as usize;
        let mut days: Vec<MatchDay> = Vec::new();
        let mut offset = 0;

        for run in ordered.chunk_by(|a, b| a.stage() == b.stage()) {
            for window in run.chunks(fields) {
                let slot_minutes = window.iter().map(|m| m.duration).max().unwrap_or(0);
                let day = MatchDay {
                    day: days.len() as u32 + 1,
                    stage: window[0].stage(),
                    matches: window
                        .iter()
                        .enumerate()
                        .map(|(p, m)| FieldSlot {
                            match_id: m.id,
                            field: (p % fields) as u32 + 1,
                        })
                        .collect(),
                    slot_minutes,
                    offset_minutes: offset,
                    kickoff: self.start.map(|start| {
                        start
                            .overflowing_add_signed(chrono::Duration::minutes(offset as i64))
                            .0
                    }),
                };
                offset = offset.saturating_add(slot_minutes);
                days.push(day);
            }
        }

        debug!(
            fixtures = ordered.len(),
            fields = self.fields,
            days = days.len(),
            "allocated match days"
        );
        days
    }
}

/// Take the k-th element of every list in turn, skipping exhausted lists
pub fn interleave<T>(lists: Vec<Vec<T>>) -> Vec<T> {
    let total = lists.iter().map(Vec::len).sum();
    let mut iters: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();
    let mut out = Vec::with_capacity(total);

    while out.len() < total {
        for it in iters.iter_mut() {
            if let Some(item) = it.next() {
                out.push(item);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "match_day_tests.rs"]
mod match_day_tests;
