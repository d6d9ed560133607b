mod doctor_cmd;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bento_channels::DiscordGateway;
use bento_commands::{CommandDispatcher, FallbackInvoker};
use bento_config::BotConfig;
use bento_core::{ChatUser, DrawSource, InboundMessage, SeededDraws, ThreadRngDraws};
use bento_providers::AnthropicProvider;
use bento_spokes::{
    CommandContext, CommandTable, DiceSpoke, GatewaySubscriptions, GoodBotSpoke, PingSpoke,
    SpokeRegistry, HELP_COMMAND,
};

#[derive(Parser)]
#[command(name = "bento")]
#[command(about = "Bento: a Discord chat bot with pluggable spokes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and start answering
    Serve,
    /// Print one composed persona prompt
    Prompt {
        /// User id the prompt refers to
        #[arg(short, long)]
        user: String,
        /// Seed for reproducible addin selection
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print the help text the bot answers `help` with
    Commands,
    /// Print the resolved configuration (secrets omitted)
    Config,
    /// Check the environment for a working setup
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve(load_config()?).await?,
        Commands::Prompt { user, seed } => {
            let config = load_config()?;
            let draws: Box<dyn DrawSource> = match seed {
                Some(seed) => Box::new(SeededDraws::new(seed)),
                None => Box::new(ThreadRngDraws),
            };
            let persona = bento_persona::for_config(&config);
            println!("{}", bento_persona::compose(&persona, &user, draws.as_ref()));
        }
        Commands::Commands => {
            let config = load_config()?;
            let mut subscriptions = GatewaySubscriptions::new();
            let table = builtin_spokes().build(&config, &mut subscriptions);
            println!("{}", help_reply(&config, &table).await?);
        }
        Commands::Config => {
            let config = load_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        // Loads the config itself so it can report a broken one.
        Commands::Doctor => doctor_cmd::run()?,
    }

    Ok(())
}

/// Resolve the config, start logging, then validate.
fn load_config() -> Result<BotConfig> {
    let config = BotConfig::from_env().context("Invalid configuration")?;
    bento_logging::init_logger(&config.log_level, config.log_dir.as_deref());
    bento_config::check(&config).context("Invalid configuration")?;
    Ok(config)
}

fn builtin_spokes() -> SpokeRegistry {
    let mut registry = SpokeRegistry::new();
    registry.register(PingSpoke);
    registry.register(DiceSpoke);
    registry.register(GoodBotSpoke);
    registry
}

/// Answer `help` the same way the dispatcher would.
async fn help_reply(config: &BotConfig, table: &CommandTable) -> Result<String> {
    let handler = table
        .get(HELP_COMMAND)
        .context("help command missing from table")?;
    let message = InboundMessage::new(
        "0",
        "0",
        ChatUser::new("0", "console"),
        format!("{}{}", config.prefix, HELP_COMMAND),
    );
    let ctx = CommandContext {
        message: &message,
        config,
        draws: &ThreadRngDraws,
    };
    Ok(handler.handle(&ctx).await?.text)
}

async fn serve(config: BotConfig) -> Result<()> {
    info!(
        name = %config.bot_name,
        prefix = %config.prefix,
        evil = config.evil,
        protesting = config.protesting,
        fallback = config.fallback_enabled(),
        "Starting Bento"
    );

    let token = config.require_discord_token()?.to_string();
    let mut gateway = DiscordGateway::new(token);

    let table = builtin_spokes().build(&config, gateway.subscriptions_mut());

    let draws: Arc<dyn DrawSource> = Arc::new(ThreadRngDraws);
    let mut dispatcher = CommandDispatcher::new(Arc::new(config.clone()), table, draws);

    if let Some(api_key) = &config.anthropic_key {
        let provider = Arc::new(AnthropicProvider::new(api_key));
        dispatcher = dispatcher.with_fallback(FallbackInvoker::new(provider, &config));
        info!(model = %config.model, "Registered Anthropic provider");
    }

    gateway.run(dispatcher).await
}
