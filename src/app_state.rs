use std::sync::Arc;

use crate::{
    ai::{AnthropicClient, ChatCompletion},
    config::Config,
    store::DocumentStore,
};

/// Shared application state: one store client and one chat client, both
/// constructed at startup and threaded through the router.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub chat: Arc<dyn ChatCompletion>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = DocumentStore::connect(&config.database.url).await?;
        store.init().await?;

        let chat: Arc<dyn ChatCompletion> = Arc::new(AnthropicClient::new(
            config.chat.api_key.clone(),
            config.chat.model.clone(),
        ));

        Ok(Self {
            store: Arc::new(store),
            chat,
            config,
        })
    }
}
