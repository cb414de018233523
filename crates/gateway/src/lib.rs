//! HTTP surface of the bot: the webhook endpoint plus liveness routes.

pub mod server;
pub mod state;

pub use {
    server::{build_app, start_gateway},
    state::AppState,
};
