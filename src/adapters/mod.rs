// Adapters layer: concrete implementations for the query tool, the INSPIRE API and local storage.

pub mod command_client;
pub mod inspire_client;
pub mod storage;

pub use command_client::CommandQueryClient;
pub use inspire_client::InspireHttpClient;
pub use storage::LocalStorage;

use crate::config::client::ClientConfig;
use crate::domain::ports::QueryClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// 依設定建立對應的查詢客戶端
pub fn build_client(config: &ClientConfig) -> Result<Arc<dyn QueryClient>> {
    let client: Arc<dyn QueryClient> = match config {
        ClientConfig::Command {
            program,
            args,
            search_flag,
            search_prefix,
        } => Arc::new(CommandQueryClient::new(
            program.clone(),
            args.clone(),
            search_flag.clone(),
            search_prefix.clone(),
        )),
        ClientConfig::Http {
            endpoint,
            search_prefix,
            timeout_seconds,
        } => Arc::new(InspireHttpClient::new(
            endpoint,
            search_prefix.clone(),
            *timeout_seconds,
        )?),
    };
    Ok(client)
}
