use std::cell::OnceCell;

use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::{ContactPayload, Recipient};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the EmailJS relay. All three are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Returns `None` unless every value is present and non-blank.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let present = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
        })
    }

    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`
    /// as they were set when the crate was compiled.
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }
}

/// Variables handed to the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub to_name: String,
    pub to_email: String,
    pub to: String,
    pub subject: String,
    pub message: String,
}

impl TemplateParams {
    pub fn new(payload: &ContactPayload, recipient: &Recipient) -> Self {
        Self {
            from_name: payload.name.clone(),
            from_email: payload.email.clone(),
            reply_to: payload.email.clone(),
            to_name: recipient.name.clone(),
            to_email: recipient.email.clone(),
            to: recipient.email.clone(),
            subject: payload.subject(),
            message: payload.message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay client could not be initialized: {0}")]
    Init(String),
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("relay responded with {0}")]
    Status(StatusCode),
}

/// A hosted email-sending service.
#[async_trait(?Send)]
pub trait Relay {
    async fn send(&self, params: &TemplateParams) -> Result<StatusCode, RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsRelay {
    config: RelayConfig,
    endpoint: String,
    client: OnceCell<reqwest::Client>,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_endpoint(config, EMAILJS_ENDPOINT)
    }

    pub fn with_endpoint(config: RelayConfig, endpoint: impl Into<String>) -> Self {
        Self {
            config,
            endpoint: endpoint.into(),
            client: OnceCell::new(),
        }
    }

    // built on first send, reused afterwards
    fn client(&self) -> Result<&reqwest::Client, RelayError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RelayError::Init(e.to_string()))?;
        log::debug!("relay client initialized for service {}", self.config.service_id);
        Ok(self.client.get_or_init(|| client))
    }
}

#[async_trait(?Send)]
impl Relay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<StatusCode, RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        let response = self
            .client()?
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        Ok(response.status())
    }
}
