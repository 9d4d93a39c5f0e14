use crate::helper;
use crate::template::message;
use crate::Handler;
use appletree_common::draw::{draw_tarot_cards, draw_trading_card};
use appletree_common::{debug, error, Action};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;

pub async fn draw_august(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let user_id = command.user.id.get();
    if !handler
        .cooldowns
        .try_start_cooldown(user_id, Action::Card, handler.config.cooldowns.card())
    {
        helper::reply_ephemeral(ctx, command, "Draw on cooldown.".to_string()).await;
        return;
    }
    let drawn = {
        let mut rng = rand::thread_rng();
        draw_trading_card(&handler.catalog, &handler.config.draw.rank_weights, &mut rng)
    };
    match drawn {
        Ok(card) => {
            debug!("{} drew trading card {} ({})", user_id, card.id, card.name);
            helper::reply_embed(ctx, command, message::trading_card_embed(&card)).await;
        }
        Err(why) => {
            error!("Trading card draw failed: {}", why);
            helper::error_message(ctx, command, format!("Failed to draw a card: `{}`", why)).await;
        }
    }
}

pub async fn draw_tarot(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let user_id = command.user.id.get();
    if !handler
        .cooldowns
        .try_start_cooldown(user_id, Action::Tarot, handler.config.cooldowns.tarot())
    {
        helper::reply_ephemeral(ctx, command, "Tarot draw on cooldown.".to_string()).await;
        return;
    }
    let drawn = {
        let mut rng = rand::thread_rng();
        draw_tarot_cards(&handler.catalog, &command.user.name, &mut rng)
    };
    match drawn {
        Ok(spread) => {
            debug!(
                "{} drew tarot {} / {} / {}",
                user_id, spread.primary.id, spread.reverse.id, spread.advice.id
            );
            helper::reply_embed(ctx, command, message::tarot_embed(&spread)).await;
        }
        Err(why) => {
            error!("Tarot draw failed: {}", why);
            helper::error_message(ctx, command, format!("Failed to draw tarot: `{}`", why)).await;
        }
    }
}
