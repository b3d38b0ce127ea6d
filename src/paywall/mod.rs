//! Paywall/Unlock Gate — who gets to see the locked sections.
//!
//! The gate is a small explicit state machine around a single one-way fact:
//! has a payment capture succeeded this session. Unlock is monotonic — once
//! `Unlocked`, every further event is a no-op — and purely local: nothing
//! here rechecks server state after the capture.

pub mod paypal;

use serde::Serialize;

pub use paypal::{CheckoutOrder, PayPalClient, PaymentError};

/// Where the gate currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// No payment attempted yet. Teasers only.
    Locked,
    /// An order exists and is waiting for approval + capture.
    CheckoutPending { order_id: String },
    /// Capture was attempted and failed. Distinct from `Locked`: the order
    /// id is kept so the user can retry capture without paying twice.
    CaptureFailed { order_id: String },
    /// The payment gateway could not be initialized (blocked environment,
    /// missing credentials, unreachable endpoint). The user is offered the
    /// hosted approval URL directly plus a manual retry.
    EnvironmentBlocked { reason: String },
    /// Capture succeeded. Absorbing.
    Unlocked,
}

/// The session's unlock gate.
#[derive(Debug, Clone)]
pub struct UnlockGate {
    state: GateState,
}

impl UnlockGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Locked,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// The one flag the renderer consults before touching gated fields.
    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// An order was created and the approval link handed to the user.
    pub fn checkout_started(&mut self, order_id: &str) {
        if self.state != GateState::Unlocked {
            self.state = GateState::CheckoutPending {
                order_id: order_id.to_string(),
            };
        }
    }

    /// Capture completed. The only transition into `Unlocked`.
    pub fn capture_succeeded(&mut self) {
        self.state = GateState::Unlocked;
    }

    /// Capture failed for the pending order. Keeps the order id for retry.
    pub fn capture_failed(&mut self) {
        if let GateState::CheckoutPending { order_id } = &self.state {
            self.state = GateState::CaptureFailed {
                order_id: order_id.clone(),
            };
        }
    }

    /// Gateway initialization failed before any order existed.
    pub fn environment_blocked(&mut self, reason: &str) {
        if matches!(self.state, GateState::Locked | GateState::EnvironmentBlocked { .. }) {
            self.state = GateState::EnvironmentBlocked {
                reason: reason.to_string(),
            };
        }
    }

    /// Manual retry out of the blocked state.
    pub fn retry_initialization(&mut self) {
        if matches!(self.state, GateState::EnvironmentBlocked { .. }) {
            self.state = GateState::Locked;
        }
    }

    /// Order id to retry capture against, if a capture already failed.
    pub fn retryable_order(&self) -> Option<&str> {
        match &self.state {
            GateState::CaptureFailed { order_id } => Some(order_id),
            _ => None,
        }
    }
}

impl Default for UnlockGate {
    fn default() -> Self {
        Self::new()
    }
}
