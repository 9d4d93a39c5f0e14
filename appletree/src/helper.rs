use crate::template::message;
use appletree_common::constants::UNKNOWN_USER_NAME;
use appletree_common::{error, trace};
use serenity::builder::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::id::{GuildId, UserId};

pub async fn respond(ctx: &Context, command: &CommandInteraction, message: CreateInteractionResponseMessage) {
    if let Err(why) = command
        .create_response(ctx, CreateInteractionResponse::Message(message))
        .await
    {
        error!("Failed to respond to /{}: {:?}", command.data.name, why);
    }
}

pub async fn reply(ctx: &Context, command: &CommandInteraction, content: String) {
    respond(ctx, command, CreateInteractionResponseMessage::new().content(content)).await;
}

pub async fn reply_ephemeral(ctx: &Context, command: &CommandInteraction, content: String) {
    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
    .await;
}

pub async fn reply_embed(ctx: &Context, command: &CommandInteraction, embed: CreateEmbed) {
    respond(ctx, command, CreateInteractionResponseMessage::new().embed(embed)).await;
}

pub async fn error_message(ctx: &Context, command: &CommandInteraction, content: String) {
    let embed = message::error_embed(ctx, None, Some(content));
    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    )
    .await;
}

pub async fn info_message(
    ctx: &Context,
    command: &CommandInteraction,
    content: String,
    title: Option<String>,
) {
    let embed = message::info_embed(ctx, title, Some(content));
    respond(ctx, command, CreateInteractionResponseMessage::new().embed(embed)).await;
}

pub fn option_str<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

pub fn option_user(command: &CommandInteraction, name: &str) -> Option<UserId> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_user_id())
}

pub fn parse_user_id(id: &str) -> Option<UserId> {
    match id.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(UserId::new(id)),
    }
}

///
/// Display name for a Discord user id.
///
/// Prefers the guild nickname, then the username. Falls back to a
/// placeholder when the user can't be fetched.
///
pub async fn user_name(ctx: &Context, guild: Option<GuildId>, id: &str) -> String {
    let Some(user_id) = parse_user_id(id) else {
        return UNKNOWN_USER_NAME.to_string();
    };
    let user = match user_id.to_user(ctx).await {
        Ok(user) => user,
        Err(why) => {
            trace!("Failed to fetch user {}: {:?}", user_id, why);
            return UNKNOWN_USER_NAME.to_string();
        }
    };
    if let Some(guild_id) = guild {
        if let Ok(member) = guild_id.member(ctx, user_id).await {
            if let Some(nick) = member.nick {
                return nick;
            }
        }
    }
    user.name
}

/// Avatar URL for a Discord user id, preferring the guild avatar.
pub async fn user_avatar(ctx: &Context, guild: Option<GuildId>, id: &str) -> String {
    let Some(user_id) = parse_user_id(id) else {
        return UNKNOWN_USER_NAME.to_string();
    };
    if let Some(guild_id) = guild {
        if let Ok(member) = guild_id.member(ctx, user_id).await {
            return member.face();
        }
    }
    match user_id.to_user(ctx).await {
        Ok(user) => user.face(),
        Err(why) => {
            trace!("Failed to fetch user {}: {:?}", user_id, why);
            UNKNOWN_USER_NAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_parse() {
        assert_eq!(parse_user_id(" 1234 "), Some(UserId::new(1234)));
        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id("someone"), None);
    }
}
