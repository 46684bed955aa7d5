//! The listing transform: raw rows in, display-ready open/closed lists out.
//!
//! ```text
//! RawRecord[] ──enrich──▶ EnrichedRecord[] ──filter──▶ open  (by deadline, then name)
//!                               │                   └─▶ closed (by name)
//!                               └──▶ available_regions (all records, unfiltered)
//! ```
//!
//! The transform is pure: the same records, reference instant and filter
//! always produce the same [`Listing`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::deadline::classify;
use crate::filter::RegionFilter;
use crate::records::{EnrichedRecord, RawRecord};
use crate::region::{Continent, RegionResolver};

/// Output of one transform call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Still accepting applications, soonest deadline first.
    pub open: Vec<EnrichedRecord>,
    /// Deadline passed (or unreadable), alphabetical by name.
    pub closed: Vec<EnrichedRecord>,
    /// Every region present in the input, regardless of the filter.
    pub available_regions: Vec<Continent>,
}

impl Listing {
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty()
    }

    /// Number of listed programs per available region. Rows whose country
    /// did not resolve are not counted anywhere.
    pub fn region_counts(&self) -> BTreeMap<Continent, usize> {
        let mut counts: BTreeMap<Continent, usize> =
            self.available_regions.iter().map(|c| (*c, 0)).collect();
        let continents = self
            .open
            .iter()
            .chain(&self.closed)
            .filter_map(|r| r.country_info.as_ref().map(|info| info.continent));
        for continent in continents {
            *counts.entry(continent).or_default() += 1;
        }
        counts
    }
}

/// Runs the transform with the built-in country tables.
pub fn transform(
    records: &[RawRecord],
    reference: DateTime<Utc>,
    filter: &RegionFilter,
) -> Listing {
    Transformer::default().transform(records, reference, filter)
}

/// Enriches one record against `reference`.
pub fn enrich(
    record: &RawRecord,
    reference: DateTime<Utc>,
    resolver: &RegionResolver,
) -> EnrichedRecord {
    let (deadline_instant, is_open) = classify(&record.deadline, reference);
    EnrichedRecord {
        record: record.clone(),
        deadline_instant,
        is_open,
        country_info: resolver.resolve(&record.country),
    }
}

/// Distinct regions across `records`, in code order.
pub fn available_regions(records: &[EnrichedRecord]) -> Vec<Continent> {
    records
        .iter()
        .filter_map(|r| r.country_info.as_ref().map(|info| info.continent))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Listing transform bound to a particular [`RegionResolver`].
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    resolver: RegionResolver,
}

impl Transformer {
    pub fn new(resolver: RegionResolver) -> Self {
        Self { resolver }
    }

    #[tracing::instrument(skip(self, records), fields(records = records.len(), filter = %filter))]
    pub fn transform(
        &self,
        records: &[RawRecord],
        reference: DateTime<Utc>,
        filter: &RegionFilter,
    ) -> Listing {
        let enriched: Vec<EnrichedRecord> = records
            .iter()
            .map(|r| enrich(r, reference, &self.resolver))
            .collect();

        let mut unresolved = 0usize;
        let mut malformed = 0usize;
        for r in &enriched {
            if r.country_info.is_none() {
                unresolved += 1;
                warn!(name = %r.name(), country = %r.record.country, "Unresolved country");
            }
            if !r.deadline_instant.is_valid() {
                malformed += 1;
                warn!(name = %r.name(), deadline = %r.record.deadline, "Malformed deadline");
            }
        }

        let available_regions = available_regions(&enriched);

        let (mut open, mut closed): (Vec<_>, Vec<_>) = enriched
            .into_iter()
            .filter(|r| filter.matches(r.country_info.as_ref().map(|info| info.continent)))
            .partition(|r| r.is_open);

        open.sort_by(|a, b| {
            a.deadline_instant
                .cmp(&b.deadline_instant)
                .then_with(|| a.record.name.cmp(&b.record.name))
        });
        closed.sort_by(|a, b| a.record.name.cmp(&b.record.name));

        debug!(
            open = open.len(),
            closed = closed.len(),
            regions = available_regions.len(),
            unresolved,
            malformed,
            "Listing built"
        );

        Listing {
            open,
            closed,
            available_regions,
        }
    }
}
