// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact message delivery through EmailJS.
//!
//! The page never talks SMTP. It hands the form contents to the EmailJS
//! REST API, which renders a template and sends the mail on our behalf.

use crate::models::contact::MessageParams;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials and endpoint for the delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl EmailConfig {
    /// Build a config only if all three credentials are non-blank.
    pub fn new(
        service_id: Option<String>,
        template_id: Option<String>,
        public_key: Option<String>,
        endpoint: Option<String>,
    ) -> Option<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Some(Self {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
            endpoint: present(endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a contact message.
pub trait Mailer: Send + Sync {
    fn send(&self, config: &EmailConfig, params: &MessageParams) -> Result<(), DeliveryError>;
}

/// Request body of the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a MessageParams,
}

/// Blocking EmailJS client.
pub struct EmailJsMailer {
    client: reqwest::blocking::Client,
}

impl EmailJsMailer {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for EmailJsMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, config: &EmailConfig, params: &MessageParams) -> Result<(), DeliveryError> {
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        };

        let response = self.client.post(&config.endpoint).json(&body).send()?;
        let status = response.status().as_u16();
        if status == 200 {
            log::info!("Contact message from {} delivered", params.email);
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(DeliveryError::Rejected { status, body })
        }
    }
}
