use std::{sync::Arc, time::Duration};

use {
    axum::{
        Router,
        body::Bytes,
        extract::{Query, State},
        http::{Method, StatusCode},
        response::Json,
        routing::{any, get},
    },
    serde::Deserialize,
    tower_http::trace::TraceLayer,
    tracing::info,
};

use {
    sparkbot_bot::{Bot, Trigger, WebhookDelivery},
    sparkbot_spark::{HttpRestClient, SparkApi, SparkConfig},
};

use crate::state::AppState;

/// Build the bot router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/webhook_messages", any(webhook_messages_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the webhook HTTP server.
pub async fn start_gateway(bind: &str, port: u16, spark: &SparkConfig) -> anyhow::Result<()> {
    let client = Arc::new(HttpRestClient::new(Duration::from_secs(
        spark.request_timeout_secs,
    ))?);
    let api = SparkApi::new(spark, client);
    let bot = Arc::new(Bot::new(api, spark.token_is_placeholder()));
    let app = build_app(AppState { bot });

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root_handler() -> &'static str {
    "Sparkbot is alive. Point Spark webhook deliveries at /webhook_messages."
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct TestParams {
    message: Option<String>,
}

/// The webhook endpoint. Whatever happens inside, the caller gets HTTP 200
/// with a plain-text body; failures are visible there and in the logs only.
/// Spark disables webhooks that keep answering with error statuses.
async fn webhook_messages_handler(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<TestParams>,
    body: Bytes,
) -> (StatusCode, String) {
    let trigger = if method == Method::GET {
        match params.message {
            Some(message) => Trigger::Test { message },
            None => {
                return (
                    StatusCode::OK,
                    "missing `message` query parameter".to_string(),
                );
            },
        }
    } else if method == Method::POST {
        match serde_json::from_slice::<WebhookDelivery>(&body) {
            Ok(delivery) => Trigger::Delivery {
                event: delivery.into(),
            },
            Err(error) => {
                return (
                    StatusCode::OK,
                    format!("could not parse webhook payload: {error}"),
                );
            },
        }
    } else {
        Trigger::Unsupported {
            method: method.to_string(),
        }
    };

    (StatusCode::OK, state.bot.respond(trigger).await)
}
