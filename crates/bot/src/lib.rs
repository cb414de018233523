//! Webhook-driven bot pipeline.
//!
//! Flow: webhook trigger → extract identifiers → fetch triggering message →
//! match intent → build reply → post reply → plain-text status for the
//! original webhook caller.

pub mod error;
pub mod event;
pub mod handler;
pub mod intent;
pub mod reply;

pub use {
    error::{Error, Result},
    event::{InboundEvent, WebhookDelivery},
    handler::{Bot, Trigger},
};
