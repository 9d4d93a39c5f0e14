use crate::helper;
use crate::template::message;
use crate::Handler;
use appletree_common::constants::ADDED_CARD_RANK;
use appletree_common::structs::{Card, Item};
use appletree_common::utils::collection::{format_collection, Element};
use appletree_common::{debug, error, Action};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::mention::Mentionable;

///
/// Draw a card from Eden and add it to the drawer's collection.
///
/// Shares its cooldown with the August draw but uses its own duration.
///
pub async fn card(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let user_id = command.user.id.get();
    if !handler
        .cooldowns
        .try_start_cooldown(user_id, Action::Card, handler.config.cooldowns.eden_card())
    {
        helper::reply_ephemeral(ctx, command, "Draw on cooldown.".to_string()).await;
        return;
    }
    let card = match handler.eden.draw_card().await {
        Ok(card) => card,
        Err(why) => {
            error!("Failed to draw card from Eden: {}", why);
            helper::error_message(ctx, command, "Failed to draw a card.".to_string()).await;
            return;
        }
    };
    let item = Item {
        src: card.csrc.clone(),
        ownr: user_id.to_string(),
        lvl: 0,
        xp: 0,
    };
    let icon = helper::user_avatar(ctx, command.guild_id, &card.subjct).await;
    helper::reply_embed(ctx, command, message::eden_card_embed(&card, &item, &icon)).await;
    match handler.eden.add_item(&item).await {
        Ok(_) => debug!("Added {} to the collection of {}", card.cname, user_id),
        Err(why) => error!("Failed to add {} to the collection of {}: {}", card.cname, user_id, why),
    }
}

pub async fn add_card(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let (Some(subject), Some(name), Some(element), Some(image)) = (
        helper::option_user(command, "subject"),
        helper::option_str(command, "name"),
        helper::option_str(command, "element"),
        helper::option_str(command, "image"),
    ) else {
        return;
    };
    if let Err(why) = element.parse::<Element>() {
        helper::error_message(ctx, command, why).await;
        return;
    }
    let card = Card {
        csrc: image.to_string(),
        cname: name.to_string(),
        crank: ADDED_CARD_RANK,
        element: element.to_string(),
        atk: 0,
        lufa: 0.0,
        def: 0.0,
        lufd: 0.0,
        utl: 0,
        lufu: 0.0,
        subjct: subject.get().to_string(),
        adder: command.user.id.get().to_string(),
        tradable: 1,
    };
    match handler.eden.add_card(&card).await {
        Ok(_) => {
            helper::reply(
                ctx,
                command,
                format!(
                    "Added a card titled \"{}\" depicting {} to the database.",
                    name,
                    subject.mention()
                ),
            )
            .await;
        }
        Err(why) => {
            error!("Failed to add card: {}", why);
            helper::error_message(ctx, command, "Failed to add the card.".to_string()).await;
        }
    }
}

pub async fn collection(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let rows = match handler.eden.get_items(command.user.id.get()).await {
        Ok(rows) => rows,
        Err(why) => {
            error!("Failed to fetch collection: {}", why);
            Vec::new()
        }
    };
    let summary = format_collection(&rows);
    helper::reply(ctx, command, summary.render()).await;
}
