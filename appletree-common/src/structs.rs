use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TradingCard {
    pub id: u32,
    pub name: String,
    pub rank: usize,
    pub level: u32,
    pub imglink: String,
    pub deck: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TarotCard {
    pub id: u32,
    pub numeral: String,
    pub name: String,
    pub emoji: String,
    pub imglink: String,
    pub description: String,
    pub reverse: String,
    pub advice: String,
    pub deck: String,
}

impl TarotCard {
    /// Cards without an image are placeholders and never drawn.
    pub fn is_eligible(&self) -> bool {
        !self.imglink.is_empty()
    }
}

/// Three distinct tarot cards, in the order they were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TarotSpread {
    pub primary: TarotCard,
    pub reverse: TarotCard,
    pub advice: TarotCard,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Quote {
    pub quote: String,
    pub quotee: String,
    pub quoter: String,
    pub qweight: f64,
}

/// Generic Eden request body used by most endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Request {
    pub query: String,
    pub requester: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserData {
    pub id: String,
    pub lvl: u16,
    pub xp: u32,
    pub credit: i32,
    #[serde(default)]
    pub bg: String,
}

/// A card stored by Eden, as opposed to the bundled trading cards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Card {
    pub csrc: String,
    pub cname: String,
    pub crank: u8,
    pub element: String,
    pub atk: u32,
    pub lufa: f32,
    pub def: f32,
    pub lufd: f32,
    pub utl: u32,
    pub lufu: f32,
    pub subjct: String,
    pub adder: String,
    pub tradable: u8,
}

/// A card owned by a user.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Item {
    pub src: String,
    pub ownr: String,
    pub lvl: u16,
    pub xp: u32,
}
