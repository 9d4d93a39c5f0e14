use super::{decode, EdenClient};
use crate::error::EdenError;
use crate::structs::{Card, Item};
use serde_json::{json, Value};

impl EdenClient {
    pub async fn draw_card(&self) -> Result<Card, EdenError> {
        let value = self.post_ok("/db/card/draw", &json!({})).await?;
        decode(value)
    }

    pub async fn add_card(&self, card: &Card) -> Result<(), EdenError> {
        self.post_ok("/db/card/add", card).await?;
        Ok(())
    }

    pub async fn add_item(&self, item: &Item) -> Result<(), EdenError> {
        self.post_ok("/db/item/add", item).await?;
        Ok(())
    }

    ///
    /// Every item owned by `owner`, as the raw rows Eden returns:
    /// `[name, rank, element, level]`.
    ///
    pub async fn get_items(&self, owner: u64) -> Result<Vec<Vec<Value>>, EdenError> {
        let query = Item {
            src: String::new(),
            ownr: owner.to_string(),
            lvl: 0,
            xp: 0,
        };
        let value = self.post_ok("/db/item", &query).await?;
        match value.get("payload") {
            Some(payload) => decode(payload.clone()),
            None => Ok(Vec::new()),
        }
    }
}
