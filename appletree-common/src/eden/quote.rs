use super::{decode, status_of, EdenClient, STATUS_NOT_FOUND};
use crate::error::EdenError;
use crate::structs::{Quote, Request};
use serde_json::json;

impl EdenClient {
    /// Draw a random quote. Eden weights the draw and decays the winner.
    pub async fn draw_quote(&self) -> Result<Quote, EdenError> {
        let value = self.post_ok("/db/quote/draw", &json!({})).await?;
        decode(value)
    }

    /// First quote containing `query`, or None when nothing matches.
    pub async fn find_quote(&self, query: &str, requester: u64) -> Result<Option<Quote>, EdenError> {
        let path = "/db/quote/find";
        let request = Request {
            query: query.to_string(),
            requester: requester.to_string(),
        };
        let value = self.post(path, &request).await?;
        if status_of(&value) == Some(STATUS_NOT_FOUND) {
            return Ok(None);
        }
        super::ensure_ok(path, &value)?;
        Ok(Some(decode(value)?))
    }

    pub async fn add_quote(&self, quote: &Quote) -> Result<(), EdenError> {
        self.post_ok("/db/quote/add", quote).await?;
        Ok(())
    }

    ///
    /// Remove the quote matching `query`.
    ///
    /// Eden answers 403 when `requester` is neither the quoter nor the quotee.
    ///
    pub async fn remove_quote(&self, query: &str, requester: u64) -> Result<(), EdenError> {
        let request = Request {
            query: query.to_string(),
            requester: requester.to_string(),
        };
        self.post_ok("/db/quote/remove", &request).await?;
        Ok(())
    }
}
