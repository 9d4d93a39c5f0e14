use appletree_common::cooldown::TokioScheduler;
use appletree_common::eden::EdenClient;
use appletree_common::*;
use dotenvy::dotenv;
use serenity::all::{Command, CommandOptionType, Interaction, Ready};
use serenity::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::env;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

mod config;
mod draw;
mod helper;
mod inventory;
mod profile;
mod quote;
mod template;

const GITHUB_URL: &str = "https://github.com/appletree-bot/appletree";
const CONFIG_PATH: &str = "./config.toml";

/// Everything a command handler needs, built once at startup.
pub struct Handler {
    pub config: Config,
    pub catalog: Catalog,
    pub cooldowns: CooldownTracker,
    pub eden: EdenClient,
    pub test_guild: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Connected as {}", ready.user.name);
        let commands = commands();
        let result = match self.test_guild {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
            None => Command::set_global_commands(&ctx.http, commands).await,
        };
        match result {
            Ok(registered) => info!("Registered {} slash commands", registered.len()),
            Err(why) => error!("Failed to register slash commands: {:?}", why),
        }
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot || !self.config.features.message_xp {
            return;
        }
        profile::grant_message_xp(self, &msg).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        trace!("Command /{} from {}", command.data.name, command.user.id);
        match command.data.name.as_str() {
            "drawaugust" => draw::draw_august(self, &ctx, &command).await,
            "drawtarot" => draw::draw_tarot(self, &ctx, &command).await,
            "quote" => quote::quote(self, &ctx, &command).await,
            "addquote" => quote::add_quote(self, &ctx, &command).await,
            "findquote" => quote::find_quote(self, &ctx, &command).await,
            "unquote" => quote::unquote(self, &ctx, &command).await,
            "profile" => profile::profile(self, &ctx, &command).await,
            "background" => profile::background(self, &ctx, &command).await,
            "card" => inventory::card(self, &ctx, &command).await,
            "addcard" => inventory::add_card(self, &ctx, &command).await,
            "collection" => inventory::collection(self, &ctx, &command).await,
            "info" => info(self, &ctx, &command).await,
            other => {
                warn!("Unknown command: {}", other);
            }
        }
    }
}

fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("drawaugust").description("Draw an August card."),
        CreateCommand::new("drawtarot").description("Draw a Tavern Tarot card."),
        CreateCommand::new("card").description("Draw a card for your collection."),
        CreateCommand::new("collection").description("View your personal trading card collection."),
        CreateCommand::new("profile").description("View your level, credit, and other attributes."),
        CreateCommand::new("background")
            .description("Set the background image of your profile.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "url", "A link to the image.")
                    .required(true),
            ),
        CreateCommand::new("quote").description("Have Apple say a random quote."),
        CreateCommand::new("addquote")
            .description("Write a quote to the database.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user who said the thing.")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "quote", "What they said.")
                    .required(true),
            ),
        CreateCommand::new("findquote")
            .description("Retrieve the quote best matching the given text.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "text", "A substring of the quote.")
                    .required(true),
            ),
        CreateCommand::new("unquote")
            .description("Remove a quote you said or added.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "text", "A substring of the quote.")
                    .required(true),
            ),
        CreateCommand::new("addcard")
            .description("Add a new card to the card pool.")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "subject", "Who the card depicts.")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "The card title.")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "element", "The card element.")
                    .required(true)
                    .add_string_choice("Air", "air")
                    .add_string_choice("Earth", "earth")
                    .add_string_choice("Fire", "fire")
                    .add_string_choice("Water", "water"),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "image", "A link to the card art.")
                    .required(true),
            ),
        CreateCommand::new("info").description("Show information about Appletree."),
    ]
}

async fn info(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let mut reply_str = format!(
        "Appletree v{} - {}\n\
        Log level: `{}`\n\
        Build type: `{}`\n\
        Commit: `{}`\n",
        env!("CARGO_PKG_VERSION"),
        GITHUB_URL,
        handler.config.log.level,
        env!("BUILD_PROFILE"),
        env!("GIT_HASH"),
    );
    if handler
        .config
        .debug
        .allowed_users
        .contains(&command.user.id.get())
    {
        reply_str.push_str(&format!(
            "\n*Debug information*\n\
            Eden: `{}`\n\
            Trading cards: `{}`\n\
            Tarot cards: `{}` (`{}` eligible)\n\
            Rank weights: `{:?}`\n",
            handler.eden.base_url(),
            handler.catalog.trading_cards().len(),
            handler.catalog.tarot_cards().len(),
            handler.catalog.eligible_tarot_count(),
            handler.config.draw.rank_weights,
        ));
    }
    helper::info_message(ctx, command, reply_str, Some("Information".to_string())).await;
}

fn load_config() -> Config {
    if Path::new(CONFIG_PATH).exists() {
        match Config::load(CONFIG_PATH) {
            Ok(config) => config,
            Err(why) => {
                eprintln!("Failed to load {}: {}", CONFIG_PATH, why);
                process::exit(1);
            }
        }
    } else {
        let config = Config::new();
        if let Err(why) = config.save(CONFIG_PATH) {
            eprintln!("Failed to write default {}: {}", CONFIG_PATH, why);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    match dotenv() {
        Ok(_) => {}
        Err(why) => {
            eprintln!("Failed to load .env: {:?}", why);
        }
    }
    let token = env::var("DISCORD_TOKEN").expect("Token not found");
    let config = load_config();
    let log_level = env::var("LOG_LEVEL").unwrap_or(config.log.level.clone());
    setup_logger(&log_level).expect("Failed to setup logger");
    info!("Appletree v{} - {}", env!("CARGO_PKG_VERSION"), GITHUB_URL);
    info!("Log level: {}", log_level);

    info!("Loading card catalog...");
    let catalog = match Catalog::load(
        config.catalog.trading_cards.as_deref(),
        config.catalog.tarot_cards.as_deref(),
    ) {
        Ok(catalog) => catalog,
        Err(why) => {
            error!("Failed to load catalog: {}", why);
            process::exit(1);
        }
    };
    if let Err(why) = catalog.validate(&config.draw.rank_weights) {
        error!("Catalog does not match the draw configuration: {}", why);
        process::exit(1);
    }

    let eden_url = env::var("EDEN").unwrap_or(config.eden.url.clone());
    let eden = match EdenClient::new(&eden_url, Duration::from_secs(config.eden.timeout_secs)) {
        Ok(eden) => eden,
        Err(why) => {
            error!("Failed to create Eden client: {}", why);
            process::exit(1);
        }
    };
    info!("Eden address: {}", eden.base_url());

    let test_guild = env::var("APL_TEST_GUILD")
        .ok()
        .and_then(|id| id.parse::<u64>().ok())
        .filter(|id| *id != 0)
        .map(GuildId::new);
    let handler = Handler {
        config,
        catalog,
        cooldowns: CooldownTracker::new(Arc::new(TokioScheduler)),
        eden,
        test_guild,
    };

    info!("Initializing Discord client...");
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;
    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await
        .expect("Error creating client");

    info!("Starting client...");
    if let Err(why) = client.start().await {
        error!("An error occurred while running the client: {:?}", why);
    }
}
