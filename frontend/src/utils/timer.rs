use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// Suspends the current task for a while without blocking the event loop.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn wait(&self, duration: Duration) {
        TimeoutFuture::new(duration_to_millis(duration)).await;
    }
}

pub fn duration_to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
