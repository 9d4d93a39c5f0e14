use appletree_common::structs::{Card, Item, TarotSpread, TradingCard, UserData};
use appletree_common::utils::collection::Element;
use serenity::all::ButtonStyle;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
};
use serenity::client::Context;
use serenity::model::Color;

pub fn crate_embed(
    client: &Context,
    title: Option<String>,
    description: Option<String>,
    color: Color,
) -> CreateEmbed {
    let (name, avatar) = {
        let user = client.cache.current_user();
        (user.name.clone(), user.avatar_url())
    };
    CreateEmbed::new()
        .title(title.unwrap_or("Appletree".to_string()))
        .description(description.unwrap_or("".to_string()))
        .color(color)
        .footer(CreateEmbedFooter::new(name).icon_url(avatar.unwrap_or("".to_string())))
}

pub fn error_embed(
    client: &Context,
    mut title: Option<String>,
    description: Option<String>,
) -> CreateEmbed {
    if title.is_none() {
        title = Some("Error".to_string());
    }
    crate_embed(client, title, description, Color::RED)
}

pub fn info_embed(
    client: &Context,
    mut title: Option<String>,
    description: Option<String>,
) -> CreateEmbed {
    if title.is_none() {
        title = Some("Info".to_string());
    }
    crate_embed(client, title, description, Color::DARK_GREEN)
}

pub fn stars(rank: usize) -> String {
    ":star:".repeat(rank)
}

pub fn trading_card_title(card: &TradingCard) -> String {
    format!("{} +{}", card.name, card.level)
}

pub fn trading_card_embed(card: &TradingCard) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(trading_card_title(card))
        .image(card.imglink.clone())
        .color(Color::DARK_GREEN)
        .footer(CreateEmbedFooter::new(format!("{} Trading Cards", card.deck)));
    // Discord rejects an empty description.
    if card.rank > 0 {
        embed = embed.description(stars(card.rank));
    }
    embed
}

pub fn tarot_title(spread: &TarotSpread) -> String {
    let card = &spread.primary;
    format!("{} : {} {}", card.numeral, card.name, card.emoji)
}

/// Field name and value for the reverse and the advice cards.
pub fn tarot_fields(spread: &TarotSpread) -> [(String, String); 2] {
    [
        (
            format!("{} {}", spread.reverse.name, spread.reverse.emoji),
            format!("{}...", spread.reverse.reverse),
        ),
        (
            format!("{} {}", spread.advice.name, spread.advice.emoji),
            format!("...{}", spread.advice.advice),
        ),
    ]
}

pub fn tarot_embed(spread: &TarotSpread) -> CreateEmbed {
    CreateEmbed::new()
        .title(tarot_title(spread))
        .description(spread.primary.description.clone())
        .fields(
            tarot_fields(spread)
                .into_iter()
                .map(|(name, value)| (name, value, true)),
        )
        .image(spread.primary.imglink.clone())
        .color(Color::DARK_RED)
        .footer(CreateEmbedFooter::new(spread.primary.deck.clone()))
}

pub fn user_embed(name: &str, icon: &str, accent: Option<Color>, user: &UserData) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .author(CreateEmbedAuthor::new(name).icon_url(icon))
        .field("Level", user.lvl.to_string(), true)
        .field("XP", user.xp.to_string(), true)
        .field("Credit", user.credit.to_string(), true)
        .color(accent.unwrap_or(Color::DARK_GREEN));
    if !user.bg.is_empty() {
        embed = embed.image(user.bg.clone());
    }
    embed
}

pub fn eden_card_embed(card: &Card, item: &Item, subject_icon: &str) -> CreateEmbed {
    let element = card.element.parse::<Element>().ok();
    let element_line = match element {
        Some(element) => format!("{} {}", element.emoji(), element.name()),
        None => card.element.clone(),
    };
    let color = match element {
        Some(element) => {
            let (r, g, b) = element.rgb();
            Color::from_rgb(r, g, b)
        }
        None => Color::LIGHT_GREY,
    };
    CreateEmbed::new()
        .title(format!("{} +{}", card.cname, item.lvl))
        .description(format!("{}\n{}", stars(card.crank as usize), element_line))
        .field("ATK", card.atk.to_string(), true)
        .field("DEF", card.def.to_string(), true)
        .field("UTL", card.utl.to_string(), true)
        .thumbnail(subject_icon)
        .image(card.csrc.clone())
        .color(color)
}

pub fn button_row(id: &str, label: &str, style: ButtonStyle, disabled: bool) -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(id)
        .label(label)
        .style(style)
        .disabled(disabled)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use appletree_common::structs::TarotCard;

    fn tarot(id: u32, name: &str) -> TarotCard {
        TarotCard {
            id,
            numeral: "XXI".to_string(),
            name: name.to_string(),
            emoji: "🌍".to_string(),
            imglink: "world.png".to_string(),
            description: "desc".to_string(),
            reverse: "beware".to_string(),
            advice: "rest".to_string(),
            deck: "Tavern Arcana".to_string(),
        }
    }

    #[test]
    fn trading_card_title_shows_level() {
        let card = TradingCard {
            id: 1,
            name: "Fireworks".to_string(),
            rank: 2,
            level: 0,
            imglink: "f.png".to_string(),
            deck: "August".to_string(),
        };
        assert_eq!(trading_card_title(&card), "Fireworks +0");
        assert_eq!(stars(card.rank), ":star::star:");
    }

    #[test]
    fn tarot_layout() {
        let spread = TarotSpread {
            primary: tarot(21, "The World"),
            reverse: tarot(16, "The Tower"),
            advice: tarot(9, "The Hermit"),
        };
        assert_eq!(tarot_title(&spread), "XXI : The World 🌍");
        let [reverse, advice] = tarot_fields(&spread);
        assert_eq!(reverse, ("The Tower 🌍".to_string(), "beware...".to_string()));
        assert_eq!(advice, ("The Hermit 🌍".to_string(), "...rest".to_string()));
    }
}
