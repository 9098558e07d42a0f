use std::time::Duration;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::warn;

use crate::submission::{Delay, PageContext, SubmissionPayload, SubmitError, WebhookTransport};

pub struct GlooWebhook;

#[async_trait(?Send)]
impl WebhookTransport for GlooWebhook {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, SubmitError> {
        let response = Request::post(url)
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status { status, body });
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Webhook answered without JSON: {}", e);
                Ok(serde_json::Value::Object(Default::default()))
            }
        }
    }
}

pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

impl PageContext {
    /// Reads `location.href` and `document.referrer` as they are right now.
    pub fn current() -> Self {
        let window = web_sys::window();
        let url = window
            .as_ref()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let referrer = window
            .and_then(|w| w.document())
            .map(|d| d.referrer())
            .filter(|r| !r.is_empty());
        Self { url, referrer }
    }
}
