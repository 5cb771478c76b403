use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{State, connect_info::ConnectInfo},
    http::Request,
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter, clock::DefaultClock, middleware::NoOpMiddleware,
    state::keyed::DashMapStateStore,
};

use crate::SharedState;
use crate::error::ApiError;

pub type IpRateLimiter =
    RateLimiter<IpAddr, DashMapStateStore<IpAddr>, DefaultClock, NoOpMiddleware>;

/// Per client IP token bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_sec: u64,
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_sec: 20,
            burst: 40,
        }
    }
}

fn positive_env<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let value = env::var(name).ok()?.trim().parse::<T>().ok()?;
    (value > T::default()).then_some(value)
}

impl RateLimitConfig {
    /// `HR_RATE_LIMIT_PER_SEC` / `HR_RATE_LIMIT_BURST`; zero or unparsable
    /// values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            per_sec: positive_env("HR_RATE_LIMIT_PER_SEC").unwrap_or(defaults.per_sec),
            burst: positive_env("HR_RATE_LIMIT_BURST").unwrap_or(defaults.burst),
        }
    }

    pub fn build(&self) -> Arc<IpRateLimiter> {
        let replenish = Duration::from_nanos((1_000_000_000 / self.per_sec.max(1)).max(1));
        let burst = NonZeroU32::new(self.burst).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Arc::new(RateLimiter::keyed(quota))
    }
}

/// Requests without a peer address (in-process callers) are not limited.
fn check_client(limiter: &IpRateLimiter, client: Option<IpAddr>) -> Result<(), ApiError> {
    match client {
        Some(ip) if limiter.check_key(&ip).is_err() => {
            Err(ApiError::TooManyRequests(format!("rate limit exceeded for {ip}")))
        }
        _ => Ok(()),
    }
}

pub async fn limit_by_client_ip(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    check_client(&state.rate_limiter, client)?;
    Ok(next.run(req).await)
}
