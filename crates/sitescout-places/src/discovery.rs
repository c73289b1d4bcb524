//! Location discovery by frontier expansion.
//!
//! Search centers are consumed breadth-first from a FIFO queue. Every newly
//! found place becomes one further center, so coverage spreads outward from
//! the seeds until the target count of unique places is reached.
//!
//! Each place is probed at most once; the queue can therefore drain, in
//! which case a single fallback center offset from the first seed is
//! searched. A fallback that adds nothing ends the run, and
//! `max_iterations` bounds the number of searched centers regardless.

use std::collections::VecDeque;
use std::time::Duration;

use sitescout_core::{ConfigError, SearchCenter, SearchPlan};

use crate::client::PlacesClient;
use crate::dedup::{dedup_by_place_id, PlaceAccumulator};
use crate::types::PlaceResult;

/// Offset in degrees applied to both axes of the first seed when the queue drains.
pub const FALLBACK_OFFSET_DEG: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub keyword: String,
    pub radius_m: u32,
    pub target_count: usize,
    pub seeds: Vec<SearchCenter>,
    pub max_iterations: usize,
    /// Wait before each continuation-token request.
    pub page_token_delay: Duration,
}

impl DiscoveryOptions {
    /// Build options from a loaded search plan.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a seed does not parse.
    pub fn from_plan(plan: &SearchPlan, page_token_delay: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            keyword: plan.keyword.clone(),
            radius_m: plan.radius_m,
            target_count: plan.target_count,
            seeds: plan.seed_centers()?,
            max_iterations: plan.max_iterations,
            page_token_delay,
        })
    }

    /// The center searched when the queue is empty.
    #[must_use]
    pub fn fallback_center(&self) -> Option<SearchCenter> {
        self.seeds
            .first()
            .map(|s| s.offset(FALLBACK_OFFSET_DEG, FALLBACK_OFFSET_DEG))
    }
}

/// Why a discovery run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TargetReached,
    /// `max_iterations` centers were searched first.
    IterationLimit,
    /// The queue drained and the fallback center found nothing new.
    Exhausted,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::TargetReached => write!(f, "target reached"),
            StopReason::IterationLimit => write!(f, "iteration limit"),
            StopReason::Exhausted => write!(f, "search space exhausted"),
        }
    }
}

#[derive(Debug)]
pub struct DiscoveryOutcome {
    /// Unique places in first-discovery order, at most `target_count` long.
    pub places: Vec<PlaceResult>,
    pub centers_searched: usize,
    /// Centers whose search failed after retries and were skipped.
    pub failed_centers: usize,
    pub stop: StopReason,
}

/// Discover up to `options.target_count` unique places.
///
/// A center whose search fails (after the client's retries) is logged and
/// treated as returning nothing; the run continues with the next center.
pub async fn run_discovery(client: &PlacesClient, options: &DiscoveryOptions) -> DiscoveryOutcome {
    let mut queue: VecDeque<SearchCenter> = options.seeds.iter().copied().collect();
    let mut found = PlaceAccumulator::new();
    let mut centers_searched = 0usize;
    let mut failed_centers = 0usize;
    // New places contributed by the most recent fallback search, if any.
    let mut last_fallback_added: Option<usize> = None;

    let stop = loop {
        if found.len() >= options.target_count {
            break StopReason::TargetReached;
        }
        if centers_searched >= options.max_iterations {
            tracing::warn!(
                max_iterations = options.max_iterations,
                found = found.len(),
                target = options.target_count,
                "iteration limit reached before target"
            );
            break StopReason::IterationLimit;
        }

        let (center, is_fallback) = if let Some(center) = queue.pop_front() {
            (center, false)
        } else {
            if last_fallback_added == Some(0) {
                tracing::warn!(
                    found = found.len(),
                    target = options.target_count,
                    "fallback center found nothing new; stopping"
                );
                break StopReason::Exhausted;
            }
            let Some(fallback) = options.fallback_center() else {
                tracing::warn!("no seed centers configured; nothing to search");
                break StopReason::Exhausted;
            };
            tracing::warn!(center = %fallback, "ran out of search centers, expanding from first seed");
            (fallback, true)
        };

        centers_searched += 1;
        tracing::info!(center = %center, "searching around center");

        let batch = match client
            .search_all_pages(
                center,
                options.radius_m,
                &options.keyword,
                options.page_token_delay,
            )
            .await
        {
            Ok(places) => dedup_by_place_id(places),
            Err(e) => {
                failed_centers += 1;
                tracing::warn!(center = %center, error = %e, "search failed; skipping center");
                Vec::new()
            }
        };

        for place in batch.iter().filter(|p| !found.contains(&p.place_id)) {
            if let Some(next) = place.location() {
                queue.push_back(next);
            }
        }

        let added = found.extend(batch);
        if is_fallback {
            last_fallback_added = Some(added);
        }

        tracing::info!(
            center = %center,
            new = added,
            total = found.len(),
            queued = queue.len(),
            "collected unique places so far"
        );
    };

    let mut places = found.into_places();
    places.truncate(options.target_count);

    DiscoveryOutcome {
        places,
        centers_searched,
        failed_centers,
        stop,
    }
}
