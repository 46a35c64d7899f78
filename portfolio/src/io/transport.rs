//! Transport abstraction for delivering contact submissions.
//!
//! The [`Transport`] trait decouples the submission flow from the network.
//! Tests use scripted transports that record calls and return predetermined
//! outcomes without opening sockets.
//!
//! The webhook endpoint is opaque: [`WebhookTransport`] treats any request
//! that completes as delivered and never inspects the response status or
//! body. A caller cannot tell "delivered" from "accepted by convention".

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::core::form::FormState;
use crate::io::config::{ContactConfig, parse_webhook_url};

/// Abstraction over submission backends.
pub trait Transport {
    /// Send one submission. `Err` means the call itself failed; no retry is
    /// attempted by callers.
    fn send(&self, form: &FormState) -> impl Future<Output = Result<()>> + Send;
}

/// Posts submissions as JSON (`{name, email, message}`) to a fixed webhook.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: Client,
    url: Url,
}

impl WebhookTransport {
    /// Build a transport for `url`. `timeout` bounds each request when set;
    /// otherwise the call is awaited until the client gives up.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = parse_webhook_url(url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build http client")?;
        Ok(Self { client, url })
    }

    /// Build from `[contact]` config, falling back to the build-time URL.
    pub fn from_config(cfg: &ContactConfig) -> Result<Self> {
        let url = cfg.resolved_webhook_url().ok_or_else(|| {
            anyhow!(
                "no contact webhook configured (set contact.webhook_url or build with PORTFOLIO_WEBHOOK_URL)"
            )
        })?;
        Self::new(url, cfg.timeout())
    }
}

impl Transport for WebhookTransport {
    async fn send(&self, form: &FormState) -> Result<()> {
        info!(url = %self.url, "posting contact submission");
        let response = self
            .client
            .post(self.url.clone())
            .json(form)
            .send()
            .await
            .map_err(|err| {
                // The endpoint and cause chain stay in the log; the returned
                // message is shown to the user.
                warn!(url = %self.url, error = ?err, "webhook request failed");
                anyhow!("{}", err.without_url())
            })?;
        // Opaque endpoint: any completed request counts as delivered.
        debug!(status = %response.status(), "webhook request completed");
        Ok(())
    }
}
