//! Token bucket rate limiter shared by all requests of a client.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::{DefaultDirectRateLimiter, Quota};

use super::DEFAULT_REQUESTS_PER_SECOND;

const DEFAULT_RATE: NonZeroU32 = match NonZeroU32::new(DEFAULT_REQUESTS_PER_SECOND) {
    Some(rate) => rate,
    None => unreachable!(),
};

/// Admission control for outgoing requests.
///
/// A GCRA token bucket. The default constructors use a burst size of one, so
/// admissions are spaced evenly and no more than `n` requests begin within
/// any rolling one-second window. Safe to share between tasks.
pub struct RateLimiter {
    inner: DefaultDirectRateLimiter,
    quota: Quota,
}

impl RateLimiter {
    /// Allow `rate` admissions per second, evenly spaced.
    pub fn per_second(rate: NonZeroU32) -> Self {
        let quota = Quota::with_period(Duration::from_secs(1) / rate.get())
            .unwrap_or_else(|| Quota::per_second(rate));
        Self::with_quota(quota)
    }

    /// Build a limiter from an arbitrary governor quota (e.g. with a burst allowance).
    pub fn with_quota(quota: Quota) -> Self {
        Self {
            inner: governor::RateLimiter::direct(quota),
            quota,
        }
    }

    /// The quota this limiter enforces.
    pub fn quota(&self) -> Quota {
        self.quota
    }

    /// Wait until a request may be sent and consume one admission.
    ///
    /// The returned future can be dropped to abandon the wait without
    /// consuming an admission.
    pub async fn acquire(&self) {
        self.inner.until_ready().await;
    }

    /// Try to consume one admission without waiting.
    ///
    /// Returns `Err(wait_time)` if the caller would have to wait.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.inner
            .check()
            .map_err(|not_until| not_until.wait_time_from(DefaultClock::default().now()))
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::per_second(DEFAULT_RATE)
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("quota", &self.quota)
            .finish()
    }
}
