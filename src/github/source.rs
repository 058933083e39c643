use async_trait::async_trait;
use crate::error::Result;
use crate::models::{Profile, Repository};

/// Read side of the hosting service, keyed by canonical identifier.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile>;
    async fn fetch_repositories(&self, identifier: &str) -> Result<Vec<Repository>>;
    fn name(&self) -> &str;
}
