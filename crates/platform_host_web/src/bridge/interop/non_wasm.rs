use std::time::Duration;

use futures::channel::oneshot;
use platform_host::{IntakeReply, TransportError};

pub async fn post_json(_url: &str, _body: &str) -> Result<IntakeReply, TransportError> {
    Err(TransportError::Network(
        "Browser fetch is only available when compiled for wasm32".to_string(),
    ))
}

pub async fn sleep(duration: Duration) {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        std::thread::sleep(duration);
        let _ = tx.send(());
    });
    let _ = rx.await;
}
