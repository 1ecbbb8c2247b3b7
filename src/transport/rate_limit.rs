// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower layer that spaces RPC requests evenly in time.
//!
//! Each request reserves the next free slot on a shared schedule and sleeps
//! until that slot arrives. Slots are `interval` apart, so a burst of requests
//! is smoothed into a steady stream instead of being released all at once.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use tokio::{sync::Mutex, time::Instant};
use tower::Layer;

/// A Tower layer that enforces a minimum interval between requests.
///
/// All services produced by one layer share a single schedule, so cloning the
/// RPC client does not multiply the allowed rate.
///
/// # Example
///
/// ```rust,ignore
/// use coinscan::transport::RateLimitLayer;
/// use alloy_rpc_client::ClientBuilder;
///
/// let client = ClientBuilder::default()
///     .layer(RateLimitLayer::per_second(5))
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug)]
pub struct RateLimitLayer {
    interval: Duration,
    schedule: Arc<Mutex<Schedule>>,
}

impl RateLimitLayer {
    /// Allow at most `requests` per second.
    ///
    /// Zero is treated as one request per second.
    ///
    /// ```rust
    /// use coinscan::transport::RateLimitLayer;
    /// use std::time::Duration;
    ///
    /// assert_eq!(RateLimitLayer::per_second(4).interval(), Duration::from_millis(250));
    /// ```
    pub fn per_second(requests: u32) -> Self {
        Self::with_min_delay(Duration::from_secs(1) / requests.max(1))
    }

    /// Require at least `delay` between the start of consecutive requests.
    pub fn with_min_delay(delay: Duration) -> Self {
        Self {
            interval: delay,
            schedule: Arc::new(Mutex::new(Schedule::new(delay))),
        }
    }

    /// Spacing between consecutive requests
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RateLimitService {
            service,
            schedule: self.schedule.clone(),
        }
    }
}

#[derive(Debug)]
struct Schedule {
    interval: Duration,
    next_slot: Option<Instant>,
}

impl Schedule {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: None,
        }
    }

    /// Reserve the earliest free slot at or after `now`.
    fn reserve(&mut self, now: Instant) -> Instant {
        let slot = match self.next_slot {
            Some(next) if next > now => next,
            _ => now,
        };
        self.next_slot = Some(slot + self.interval);
        slot
    }
}

/// Service produced by [`RateLimitLayer`].
#[derive(Clone, Debug)]
pub struct RateLimitService<S> {
    service: S,
    schedule: Arc<Mutex<Schedule>>,
}

impl<S, Request> tower::Service<Request> for RateLimitService<S>
where
    S: tower::Service<Request> + Clone + Send + 'static,
    S::Future: Send,
    Request: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let schedule = self.schedule.clone();
        let mut service = self.service.clone();

        Box::pin(async move {
            let slot = schedule.lock().await.reserve(Instant::now());
            tokio::time::sleep_until(slot).await;
            service.call(request).await
        })
    }
}
