//! Simulated submission workflow
//!
//! The public site has no backend; submitting a request serializes the
//! draft, logs it, and resolves after a short delay so the UI exercises
//! the real submitting/success flow. Swapping this for an HTTP call is a
//! change local to this module.

use tonle_common::RequestDraft;

/// How long the simulated processing takes.
const PROCESSING_DELAY_MS: u32 = 900;

/// Run the submission workflow for one draft. Resolves when the request
/// is "processed"; the caller flips the store into its success state.
pub async fn submit_request(draft: RequestDraft) {
    match serde_json::to_string(&draft) {
        Ok(payload) => tracing::info!(payload = %payload, "service request submitted"),
        Err(err) => tracing::warn!(error = %err, "service request draft did not serialize"),
    }
    processing_delay().await;
}

async fn processing_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(PROCESSING_DELAY_MS).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(PROCESSING_DELAY_MS as u64)).await;
}
