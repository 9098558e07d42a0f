use std::cell::Cell;
use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::FormConfig;
use crate::phone;
use crate::tracking;

pub const SOURCE_TAG: &str = "lp-events-fasthomes";
/// The loading overlay stays up at least this long, even on fast answers.
pub const MIN_LOADING: Duration = Duration::from_millis(1_000);

const LINK_TEXT: &str = "Abrir catálogo no site";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("webhook not configured, set data-webhook on the mount element")]
    MissingWebhook,
    #[error("could not encode payload: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("webhook answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Page state read at the moment of submission.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContext {
    pub url: String,
    pub referrer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub phone: String,
    pub raw: String,
    pub source: String,
    pub timestamp: String,
    pub page_url: String,
    pub page_referrer: Option<String>,
    pub query_params: BTreeMap<String, String>,
    pub utm: BTreeMap<String, String>,
}

impl SubmissionPayload {
    pub fn new(phone: String, raw: &str, page: &PageContext, now: DateTime<Utc>) -> Self {
        let query_params = tracking::query_params(&page.url);
        let utm = tracking::extract_utms(&query_params);
        Self {
            phone,
            raw: raw.to_string(),
            source: SOURCE_TAG.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            page_url: page.url.clone(),
            page_referrer: page.referrer.clone().filter(|r| !r.is_empty()),
            query_params,
            utm,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultPopup {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
    pub link_href: String,
    pub link_text: String,
    pub illustration: Option<String>,
}

impl ResultPopup {
    pub fn success(config: &FormConfig) -> Self {
        Self {
            kind: PopupKind::Success,
            title: "Enviado com sucesso".to_string(),
            message: "Nós da Equipe da Fast Homes agradecemos o seu contato!".to_string(),
            link_href: config.fallback_url.clone(),
            link_text: LINK_TEXT.to_string(),
            illustration: config.success_img.clone(),
        }
    }

    pub fn failure(config: &FormConfig) -> Self {
        Self {
            kind: PopupKind::Error,
            title: "Erro ao enviar o Catálogo".to_string(),
            message: "Não conseguimos registrar seu contato agora. Tente novamente em \
                      instantes ou acesse o catálogo direto pelo link abaixo."
                .to_string(),
            link_href: config.fallback_url.clone(),
            link_text: LINK_TEXT.to_string(),
            illustration: config.error_img.clone(),
        }
    }
}

#[async_trait(?Send)]
pub trait WebhookTransport {
    /// POSTs `payload` as JSON. A body that is not JSON comes back as an
    /// empty object; a non-2xx status is always an error.
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, SubmitError>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// Everything the sequencer is allowed to touch on screen.
pub trait SubmissionView {
    fn set_submit_enabled(&self, enabled: bool);
    fn focus_input(&self);
    /// Explains why a submit was refused.
    fn show_hint(&self);
    /// What the phone field holds right now.
    fn current_text(&self) -> String;
    fn set_loading(&self, loading: bool);
    /// Check icon, "sent" label and success styling on the button.
    fn mark_sent(&self);
    fn open_popup(&self, popup: ResultPopup);
}

pub struct Sequencer<T, D> {
    config: FormConfig,
    transport: T,
    delay: D,
    min_loading: Duration,
    state: Cell<SubmissionState>,
}

impl<T, D> Sequencer<T, D>
where
    T: WebhookTransport,
    D: Delay,
{
    pub fn new(config: FormConfig, transport: T, delay: D) -> Self {
        Self {
            config,
            transport,
            delay,
            min_loading: MIN_LOADING,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    /// In flight or already sent.
    pub fn is_locked(&self) -> bool {
        matches!(
            self.state.get(),
            SubmissionState::Submitting | SubmissionState::Succeeded
        )
    }

    pub async fn submit<V: SubmissionView>(
        &self,
        view: &V,
        raw: &str,
        page: PageContext,
    ) -> SubmissionState {
        let current = self.state.get();
        if self.is_locked() {
            warn!("Ignoring submit while {:?}", current);
            return current;
        }

        let e164 = if phone::is_valid_mobile(raw) {
            phone::to_e164(raw)
        } else {
            None
        };
        let Some(e164) = e164 else {
            view.set_submit_enabled(false);
            view.show_hint();
            view.focus_input();
            return current;
        };

        self.state.set(SubmissionState::Submitting);
        view.set_submit_enabled(false);
        view.set_loading(true);
        info!("Submitting lead to webhook");

        let (result, ()) = futures::join!(
            self.send(e164, raw, &page),
            self.delay.sleep(self.min_loading)
        );

        view.set_loading(false);
        match result {
            Ok(_) => {
                info!("Lead submitted");
                self.state.set(SubmissionState::Succeeded);
                view.mark_sent();
                view.open_popup(ResultPopup::success(&self.config));
                view.set_submit_enabled(false);
            }
            Err(e) => {
                error!("Lead submission failed: {}", e);
                self.state.set(SubmissionState::Failed);
                view.open_popup(ResultPopup::failure(&self.config));
                // The field stays editable while loading.
                view.set_submit_enabled(phone::is_valid_mobile(&view.current_text()));
            }
        }
        self.state.get()
    }

    async fn send(
        &self,
        phone: String,
        raw: &str,
        page: &PageContext,
    ) -> Result<serde_json::Value, SubmitError> {
        let payload = SubmissionPayload::new(phone, raw, page, Utc::now());
        let url = self
            .config
            .webhook_url
            .as_deref()
            .ok_or(SubmitError::MissingWebhook)?;
        self.transport.post_json(url, &payload).await
    }
}
