//! Delay adapter backed by `window.setTimeout`.

use std::time::Duration;

use platform_host::{DelayFuture, DelayService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser delay adapter; dropping a pending sleep clears its timer.
pub struct WebDelayService;

impl DelayService for WebDelayService {
    fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a> {
        Box::pin(bridge::sleep(duration))
    }
}
