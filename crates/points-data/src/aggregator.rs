//! Per-house point totals and the ranked listing written to reports.

use std::cmp::Reverse;
use std::ops::Index;

use points_core::models::{House, Record};
use serde::Serialize;

// ── HouseTotal ────────────────────────────────────────────────────────────────

/// One row of the ranked listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseTotal {
    pub house: House,
    pub total: i64,
}

// ── HouseTotals ───────────────────────────────────────────────────────────────

/// Running totals for all four houses, starting at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseTotals {
    totals: [i64; 4],
}

impl HouseTotals {
    /// Add a single record's points to its house. Negative points lower it.
    pub fn add_record(&mut self, record: &Record) {
        self.totals[record.house().index()] += i64::from(record.points());
    }

    pub fn get(&self, house: House) -> i64 {
        self.totals[house.index()]
    }

    /// Totals in house declaration order.
    pub fn iter(&self) -> impl Iterator<Item = HouseTotal> + '_ {
        House::ALL.into_iter().map(|house| HouseTotal {
            house,
            total: self.get(house),
        })
    }

    /// Order by total, highest first; equal totals keep declaration order.
    pub fn ranked(&self) -> Ranking {
        let mut entries: Vec<HouseTotal> = self.iter().collect();
        // sort_by_key is stable.
        entries.sort_by_key(|entry| Reverse(entry.total));
        Ranking { entries }
    }
}

impl Index<House> for HouseTotals {
    type Output = i64;

    fn index(&self, house: House) -> &i64 {
        &self.totals[house.index()]
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

/// All four houses ordered by total, descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<HouseTotal>,
}

impl Ranking {
    pub fn entries(&self) -> &[HouseTotal] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HouseTotal> {
        self.entries.iter()
    }

    /// The house in first place (declaration order decides a tie).
    pub fn leader(&self) -> Option<&HouseTotal> {
        self.entries.first()
    }

    /// Sum over all houses.
    pub fn grand_total(&self) -> i64 {
        self.entries.iter().map(|e| e.total).sum()
    }
}

// ── PointsAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that reduces records into per-house totals.
pub struct PointsAggregator;

impl PointsAggregator {
    pub fn totals(records: &[Record]) -> HouseTotals {
        let mut totals = HouseTotals::default();
        for record in records {
            totals.add_record(record);
        }
        totals
    }

    /// Aggregate `records` and rank the houses.
    pub fn rank(records: &[Record]) -> Ranking {
        Self::totals(records).ranked()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
