use std::sync::Arc;

use sparkbot_bot::Bot;

/// Shared app state handed to every route. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<Bot>,
}
