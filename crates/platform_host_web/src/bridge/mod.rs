//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Calls route to the `wasm32` interop layer in the browser and to a non-WASM shim elsewhere, so
//! higher-level adapters keep a single API.

use std::time::Duration;

use platform_host::{IntakeReply, TransportError};

mod interop;

/// Posts a JSON body to `url` and resolves once the response status is known.
///
/// Dropping the future before it resolves aborts the in-flight request.
pub async fn post_json(url: &str, body: &str) -> Result<IntakeReply, TransportError> {
    interop::post_json(url, body).await
}

/// Resolves after `duration`; dropping the future clears the pending timer.
pub async fn sleep(duration: Duration) {
    interop::sleep(duration).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn post_json_non_wasm_parity() {
        let result = block_on(post_json("/api/leads/", r#"{"phone":"09123456789"}"#));
        assert_eq!(
            result.err(),
            Some(TransportError::Network(
                "Browser fetch is only available when compiled for wasm32".to_string()
            ))
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sleep_non_wasm_resolves_after_duration() {
        let started = std::time::Instant::now();
        block_on(sleep(Duration::from_millis(20)));
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
