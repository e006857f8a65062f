//! Where handlers get menu items from

use async_trait::async_trait;
use menu_client::{ClientError, Credential, MenuApiClient};
use menu_core::MenuItem;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Current menu, fetched with `credential` when one is given.
    async fn load_menu(&self, credential: Option<Credential>) -> Result<Vec<MenuItem>, ClientError>;
}

#[async_trait]
impl MenuSource for MenuApiClient {
    async fn load_menu(&self, credential: Option<Credential>) -> Result<Vec<MenuItem>, ClientError> {
        self.fetch_menu(credential.as_ref()).await
    }
}
