//! PayPal Orders v2 client.
//!
//! Checkout is a two-step handshake: create an order (intent `CAPTURE`),
//! send the user to the hosted approval page, then explicitly capture.
//! Approval alone never unlocks anything — only a `COMPLETED` capture does.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Ways the payment boundary can fail.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The HTTP client itself could not be built or the gateway is
    /// unreachable — the terminal analogue of a blocked checkout script.
    #[error("payment gateway unavailable: {0}")]
    Gateway(#[from] reqwest::Error),
    #[error("payment credentials not configured")]
    MissingCredentials,
    #[error("order response carried no approval link")]
    MissingApproveLink,
    /// Capture went through the wire but did not complete.
    #[error("capture not completed (status {status})")]
    CaptureIncomplete { status: String },
}

/// A created order awaiting approval.
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub id: String,
    /// Hosted approval page the user must visit.
    pub approve_url: String,
}

// ─── API types (deserialize responses) ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct OrderLink {
    rel: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    #[serde(default)]
    links: Vec<OrderLink>,
}

#[derive(Debug, Deserialize)]
struct CaptureResponse {
    status: String,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Thin client over the Orders v2 REST API.
#[derive(Debug)]
pub struct PayPalClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    secret: String,
}

impl PayPalClient {
    /// Build the client. Fails when credentials are absent or the HTTP stack
    /// cannot initialize; the gate maps both onto its blocked-environment
    /// state.
    pub fn new(base_url: &str, client_id: &str, secret: &str) -> Result<Self, PaymentError> {
        if client_id.is_empty() || secret.is_empty() {
            return Err(PaymentError::MissingCredentials);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            secret: secret.to_string(),
        })
    }

    async fn access_token(&self) -> Result<String, PaymentError> {
        let resp = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.client_id, Some(&self.secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?
            .error_for_status()?;
        let body: TokenResponse = resp.json().await?;
        Ok(body.access_token)
    }

    /// Create a capture-intent order for the fixed item.
    ///
    /// `PayPal-Request-Id` makes the create idempotent if the user mashes the
    /// checkout action while a request is in flight.
    pub async fn create_order(
        &self,
        value: &str,
        currency: &str,
        description: &str,
    ) -> Result<CheckoutOrder, PaymentError> {
        let token = self.access_token().await?;
        debug!(value, currency, "creating checkout order");

        let resp = self
            .http
            .post(format!("{}/v2/checkout/orders", self.base_url))
            .bearer_auth(&token)
            .header("PayPal-Request-Id", uuid::Uuid::new_v4().to_string())
            .json(&serde_json::json!({
                "intent": "CAPTURE",
                "purchase_units": [{
                    "amount": { "currency_code": currency, "value": value },
                    "description": description,
                }],
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: OrderResponse = resp.json().await?;
        let approve_url = body
            .links
            .iter()
            .find(|l| l.rel == "approve")
            .map(|l| l.href.clone())
            .ok_or(PaymentError::MissingApproveLink)?;

        info!(order_id = %body.id, "checkout order created");
        Ok(CheckoutOrder {
            id: body.id,
            approve_url,
        })
    }

    /// Finalize an approved order. Only a `COMPLETED` status counts.
    pub async fn capture(&self, order_id: &str) -> Result<(), PaymentError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(format!(
                "{}/v2/checkout/orders/{order_id}/capture",
                self.base_url
            ))
            .bearer_auth(&token)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body: CaptureResponse = resp.json().await?;
        if body.status != "COMPLETED" {
            warn!(order_id, status = %body.status, "capture did not complete");
            return Err(PaymentError::CaptureIncomplete { status: body.status });
        }

        info!(order_id, "payment captured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_block_initialization() {
        let err = PayPalClient::new("https://api-m.sandbox.paypal.com", "", "").unwrap_err();
        assert!(matches!(err, PaymentError::MissingCredentials));
    }

    #[test]
    fn order_response_approve_link_extraction() {
        let body: OrderResponse = serde_json::from_value(serde_json::json!({
            "id": "5O190127TN364715T",
            "links": [
                { "rel": "self", "href": "https://api.example/self" },
                { "rel": "approve", "href": "https://www.example/approve" },
            ]
        }))
        .unwrap();
        let approve = body.links.iter().find(|l| l.rel == "approve").unwrap();
        assert_eq!(approve.href, "https://www.example/approve");
    }
}
