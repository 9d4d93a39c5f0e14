use super::{decode, EdenClient};
use crate::error::EdenError;
use crate::structs::{Request, UserData};

impl EdenClient {
    pub async fn get_user(&self, requester: u64) -> Result<UserData, EdenError> {
        let request = Request {
            query: String::new(),
            requester: requester.to_string(),
        };
        let value = self.post_ok("/db/user", &request).await?;
        decode(value)
    }

    /// Add `delta` XP. Eden creates the user and recomputes the level as needed.
    pub async fn add_xp(&self, requester: u64, delta: u32) -> Result<(), EdenError> {
        let request = Request {
            query: delta.to_string(),
            requester: requester.to_string(),
        };
        self.post_ok("/db/user/xp", &request).await?;
        Ok(())
    }

    pub async fn set_background(&self, requester: u64, url: &str) -> Result<(), EdenError> {
        let request = Request {
            query: url.to_string(),
            requester: requester.to_string(),
        };
        self.post_ok("/db/user/bg", &request).await?;
        Ok(())
    }
}
