use crate::helper;
use crate::template::message;
use crate::Handler;
use appletree_common::constants::{MESSAGE_XP_MAX, MESSAGE_XP_MIN};
use appletree_common::{error, trace, Action};
use rand::Rng;
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;

pub async fn profile(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let user = match handler.eden.get_user(command.user.id.get()).await {
        Ok(user) => user,
        Err(why) => {
            error!("Failed to fetch profile: {}", why);
            helper::error_message(ctx, command, "Failed to fetch your profile.".to_string()).await;
            return;
        }
    };
    let name = helper::user_name(ctx, command.guild_id, &user.id).await;
    let icon = helper::user_avatar(ctx, command.guild_id, &user.id).await;
    let embed = message::user_embed(&name, &icon, command.user.accent_colour, &user);
    helper::reply_embed(ctx, command, embed).await;
}

pub async fn background(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let Some(url) = helper::option_str(command, "url") else {
        return;
    };
    let content = match handler.eden.set_background(command.user.id.get(), url).await {
        Ok(_) => "Your profile background has been updated.",
        Err(why) => {
            error!("Failed to set background: {}", why);
            "Something went wrong while updating your profile background."
        }
    };
    helper::reply_ephemeral(ctx, command, content.to_string()).await;
}

///
/// Grant a little XP for chatting, at most once per message cooldown.
///
pub async fn grant_message_xp(handler: &Handler, msg: &Message) {
    let user_id = msg.author.id.get();
    if !handler
        .cooldowns
        .try_start_cooldown(user_id, Action::Message, handler.config.cooldowns.message())
    {
        return;
    }
    let delta = rand::thread_rng().gen_range(MESSAGE_XP_MIN..=MESSAGE_XP_MAX);
    trace!("Granting {} XP to {}", delta, user_id);
    if let Err(why) = handler.eden.add_xp(user_id, delta).await {
        error!("Failed to grant message XP to {}: {}", user_id, why);
    }
}
