use chrono::NaiveDate;
use shipdash_types::{FetchFailure, FetchResult, FetchStatus, Shipment};

use crate::bucket::{DateBucketMap, bucket_by_arrival};

/// Identifies one fetch lifecycle started with [`FetchSlot::begin`].
///
/// Not `Clone`: resolving consumes it, so a lifecycle resolves at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a fetch ticket must be resolved to leave the Loading state"]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The single current-result slot read by renderers.
///
/// Starts in `Loading`. Each resolve overwrites the slot, so when fetches
/// overlap the last one to resolve wins. Bucketing is only reachable through
/// [`FetchSlot::upcoming`], which refuses to run unless the slot holds data.
#[derive(Debug)]
pub struct FetchSlot {
    current: FetchResult,
    issued: u64,
}

impl Default for FetchSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchSlot {
    pub fn new() -> Self {
        Self {
            current: FetchResult::Loading,
            issued: 0,
        }
    }

    /// Start a fetch lifecycle: the slot reads `Loading` until it is resolved.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.current = FetchResult::Loading;
        FetchTicket {
            generation: self.issued,
        }
    }

    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Shipment>, FetchFailure>,
    ) -> &FetchResult {
        if ticket.generation < self.issued {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.issued,
                "older fetch resolved after a newer one began; overwriting slot"
            );
        }
        self.current = FetchResult::from(outcome);
        &self.current
    }

    pub fn current(&self) -> &FetchResult {
        &self.current
    }

    pub fn status(&self) -> FetchStatus {
        self.current.status()
    }

    pub fn shipments(&self) -> Option<&[Shipment]> {
        self.current.shipments()
    }

    /// Weekly-preview buckets, `None` unless the slot holds a successful result.
    pub fn upcoming(&self, window_days: usize, today: NaiveDate) -> Option<DateBucketMap<'_>> {
        self.shipments()
            .map(|shipments| bucket_by_arrival(shipments, window_days, today))
    }
}
