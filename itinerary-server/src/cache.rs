//! Caching layer for OTP plan results.
//!
//! Identical plan requests (same endpoints, modes and time options) within
//! the TTL are answered from memory. Successful plans and planning errors
//! are cached; transport failures are not, so a transient outage does not
//! stick.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::otp::{OtpFailure, OtpItinerary, PlanError, PlanProvider, PlanRequest, QueryPairs};

/// Cache key: the request's OTP query parameters.
type PlanKey = QueryPairs;

/// Cached outcome of one plan request.
type PlanEntry = Result<Arc<Vec<OtpItinerary>>, PlanError>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Cache of plan outcomes.
pub struct PlanCache {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl PlanCache {
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    pub async fn get(&self, key: &PlanKey) -> Option<PlanEntry> {
        self.plans.get(key).await
    }

    pub async fn insert(&self, key: PlanKey, entry: PlanEntry) {
        self.plans.insert(key, entry).await;
    }

    /// Number of cached entries (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }
}

/// Plan provider with caching.
///
/// Wraps any [`PlanProvider`], usually an [`OtpClient`](crate::otp::OtpClient).
pub struct CachedPlanProvider<P> {
    inner: P,
    cache: PlanCache,
}

impl<P: PlanProvider> CachedPlanProvider<P> {
    pub fn new(inner: P, cache_config: &CacheConfig) -> Self {
        Self {
            inner,
            cache: PlanCache::new(cache_config),
        }
    }

    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<P: PlanProvider> PlanProvider for CachedPlanProvider<P> {
    async fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> Result<Vec<OtpItinerary>, OtpFailure> {
        let key = request.query_pairs();

        if let Some(cached) = self.cache.get(&key).await {
            debug!("plan cache hit");
            return match cached {
                Ok(itineraries) => Ok(itineraries.as_ref().clone()),
                Err(plan_error) => Err(OtpFailure::Plan(plan_error)),
            };
        }

        let outcome = self.inner.fetch_itineraries(request).await;

        let entry = match &outcome {
            Ok(itineraries) => Some(Ok(Arc::new(itineraries.clone()))),
            Err(OtpFailure::Plan(plan_error)) => Some(Err(plan_error.clone())),
            Err(OtpFailure::Response(_)) => None,
        };
        if let Some(entry) = entry {
            self.cache.insert(key, entry).await;
        }

        outcome
    }
}
