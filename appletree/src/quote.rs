use crate::helper;
use crate::template::message;
use crate::Handler;
use appletree_common::constants::QUOTE_WEIGHT;
use appletree_common::structs::Quote;
use appletree_common::{debug, error};
use serenity::all::ButtonStyle;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::mention::Mentionable;
use std::time::Duration;

const CONFIRM_TIMEOUT: Duration = Duration::from_secs(15);
const UNQUOTE_CONFIRM_ID: &str = "unquote_confirm";

async fn quote_text(ctx: &Context, command: &CommandInteraction, quote: &Quote) -> String {
    let display_name = helper::user_name(ctx, command.guild_id, &quote.quotee).await;
    format!("> {}\n—{}", quote.quote, display_name)
}

pub async fn quote(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    match handler.eden.draw_quote().await {
        Ok(quote) => {
            let content = quote_text(ctx, command, &quote).await;
            helper::reply(ctx, command, content).await;
        }
        Err(why) => {
            error!("Failed to draw quote: {}", why);
            helper::error_message(ctx, command, "Failed to draw a quote.".to_string()).await;
        }
    }
}

pub async fn add_quote(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let (Some(text), Some(quotee)) = (
        helper::option_str(command, "quote"),
        helper::option_user(command, "user"),
    ) else {
        return;
    };
    let quote = Quote {
        quote: text.to_string(),
        quotee: quotee.get().to_string(),
        quoter: command.user.id.get().to_string(),
        qweight: QUOTE_WEIGHT,
    };
    match handler.eden.add_quote(&quote).await {
        Ok(_) => {
            helper::reply(
                ctx,
                command,
                format!(
                    "{} added a quote from {} to the quote database.",
                    command.user.mention(),
                    quotee.mention()
                ),
            )
            .await;
        }
        Err(why) => {
            error!("Failed to add quote: {}", why);
            helper::error_message(ctx, command, "Failed to add the quote.".to_string()).await;
        }
    }
}

pub async fn find_quote(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let Some(query) = helper::option_str(command, "text") else {
        return;
    };
    match handler.eden.find_quote(query, command.user.id.get()).await {
        Ok(Some(quote)) => {
            let content = quote_text(ctx, command, &quote).await;
            helper::reply(ctx, command, content).await;
        }
        Ok(None) => {
            helper::reply_ephemeral(ctx, command, "No matching quote found.".to_string()).await;
        }
        Err(why) => {
            error!("Failed to find quote: {}", why);
            helper::error_message(ctx, command, "Failed to search quotes.".to_string()).await;
        }
    }
}

///
/// Remove a quote after an explicit confirmation.
///
/// Only the quoter or the quotee may remove a quote. They get an ephemeral
/// copy of it with a delete button, and the button is replaced with the
/// outcome once Eden answers.
///
pub async fn unquote(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let Some(query) = helper::option_str(command, "text") else {
        return;
    };
    let requester = command.user.id.get();
    let quote = match handler.eden.find_quote(query, requester).await {
        Ok(Some(quote)) => quote,
        Ok(None) => {
            helper::reply_ephemeral(ctx, command, "No matching quote found.".to_string()).await;
            return;
        }
        Err(why) => {
            error!("Failed to find quote: {}", why);
            helper::error_message(ctx, command, "Failed to search quotes.".to_string()).await;
            return;
        }
    };
    let requester_str = requester.to_string();
    if requester_str != quote.quotee && requester_str != quote.quoter {
        let quotee_name = helper::user_name(ctx, command.guild_id, &quote.quotee).await;
        let quoter_name = helper::user_name(ctx, command.guild_id, &quote.quoter).await;
        helper::reply_ephemeral(
            ctx,
            command,
            format!(
                "You cannot remove the following quote\n> {}\ndue to you not being the quoter ({}) or the quotee ({}).",
                quote.quote, quoter_name, quotee_name
            ),
        )
        .await;
        return;
    }
    let content = quote_text(ctx, command, &quote).await;
    helper::respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .content(content)
            .components(vec![message::button_row(
                UNQUOTE_CONFIRM_ID,
                "Delete Quote",
                ButtonStyle::Danger,
                false,
            )])
            .ephemeral(true),
    )
    .await;
    let response = match command.get_response(&ctx.http).await {
        Ok(response) => response,
        Err(why) => {
            error!("Failed to fetch unquote prompt: {:?}", why);
            return;
        }
    };
    let Some(interaction) = response
        .await_component_interaction(ctx)
        .author_id(command.user.id)
        .timeout(CONFIRM_TIMEOUT)
        .await
    else {
        debug!("Unquote confirmation from {} timed out", requester);
        return;
    };
    if interaction.data.custom_id != UNQUOTE_CONFIRM_ID {
        return;
    }
    if let Err(why) = interaction
        .create_response(ctx, CreateInteractionResponse::Acknowledge)
        .await
    {
        error!("Failed to acknowledge unquote confirmation: {:?}", why);
    }
    let row = match handler.eden.remove_quote(&quote.quote, requester).await {
        Ok(_) => message::button_row(
            "unquote_success",
            "Successfully Removed!",
            ButtonStyle::Success,
            true,
        ),
        Err(why) => {
            error!("Failed to remove quote: {}", why);
            message::button_row(
                "unquote_error",
                "Something went wrong.",
                ButtonStyle::Secondary,
                true,
            )
        }
    };
    if let Err(why) = command
        .edit_response(ctx, EditInteractionResponse::new().components(vec![row]))
        .await
    {
        error!("Failed to update unquote prompt: {:?}", why);
    }
}
