use std::{sync::Arc, time::Duration};

use {
    clap::{Parser, Subcommand},
    tracing::warn,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    sparkbot_config::BotConfig,
    sparkbot_gateway::start_gateway,
    sparkbot_spark::{HttpRestClient, SparkApi, types::OutboundMessage},
};

#[derive(Parser)]
#[command(name = "sparkbot", about = "Sparkbot — webhook bot for Cisco Spark rooms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Address to bind to (overrides config value).
    #[arg(long, global = true)]
    bind: Option<String>,

    /// Port to listen on (overrides config value).
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Config file path (overrides discovery).
    #[arg(long, global = true, env = "SPARKBOT_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server (default when no subcommand is provided).
    Serve,
    /// Post a message to a room.
    Send {
        #[arg(long)]
        room_id: String,
        #[arg(short, long)]
        message: String,
    },
    /// List the rooms the bot is part of.
    Rooms,
    /// Webhook registration.
    Webhook {
        #[command(subcommand)]
        action: WebhookAction,
    },
}

#[derive(Subcommand)]
enum WebhookAction {
    /// Register a message-created webhook for one room.
    Create {
        /// Webhook display name.
        #[arg(long)]
        name: String,
        /// Public URL Spark should deliver events to.
        #[arg(long)]
        target_url: String,
        /// Resource to watch.
        #[arg(long, default_value = "messages")]
        resource: String,
        /// Room whose messages trigger deliveries.
        #[arg(long)]
        room_id: String,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BotConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => sparkbot_config::load_config(path)?,
        None => sparkbot_config::discover_and_load(),
    };
    if let Some(bind) = cli.bind.clone() {
        config.server.bind = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

fn spark_api(config: &BotConfig) -> anyhow::Result<SparkApi> {
    let client = Arc::new(HttpRestClient::new(Duration::from_secs(
        config.spark.request_timeout_secs,
    ))?);
    Ok(SparkApi::new(&config.spark, client))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = load_config(&cli)?;
    if config.spark.token_is_placeholder() {
        warn!(
            "the Spark token is still the placeholder; set `spark.token` in {} before the bot \
             can talk to Spark (see https://developer.webex.com/docs/getting-started)",
            sparkbot_config::find_or_default_config_path().display()
        );
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            start_gateway(&config.server.bind, config.server.port, &config.spark).await
        },
        Commands::Send { room_id, message } => {
            let api = spark_api(&config)?;
            let posted = api
                .post_message(OutboundMessage::to_room(room_id).with_text(message))
                .await?;
            println!("{}", serde_json::to_string_pretty(&posted)?);
            Ok(())
        },
        Commands::Rooms => {
            let api = spark_api(&config)?;
            let rooms = api.get_rooms().await?;
            for (index, room) in rooms.items.iter().enumerate() {
                println!("{}) [{}] {}", index + 1, room.room_type, room.title);
            }
            Ok(())
        },
        Commands::Webhook { action } => match action {
            WebhookAction::Create {
                name,
                target_url,
                resource,
                room_id,
            } => {
                let api = spark_api(&config)?;
                match api
                    .create_webhook_simplified(&name, &target_url, &resource, &room_id)
                    .await?
                {
                    Some(webhook) => println!("{}", serde_json::to_string_pretty(&webhook)?),
                    None => warn!("webhook not created: required fields missing"),
                }
                Ok(())
            },
        },
    }
}
