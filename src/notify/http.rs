//! HTTP notifier
//!
//! POSTs the JSON body with `Content-type: application/json`. Each request
//! carries the configured timeout; there is no retry.
//!
//! Created: 2026-10-17

use super::{Notification, Notifier};
use crate::error::NotifyError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpNotifier {
    client: reqwest::Client,
}

impl HttpNotifier {
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, NotifyError> {
        if accept_invalid_certs {
            warn!("TLS certificate verification disabled for ban notifications");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(NotifyError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, url: &str, notification: &Notification) -> Result<(), NotifyError> {
        let body = notification.body();
        debug!("POST {} {}", url, body);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| NotifyError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Status { url: url.to_string(), status: status.as_u16() })
        }
    }
}
