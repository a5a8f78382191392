use crate::config::client::ClientConfig;
use crate::domain::model::{Query, SeriesExport, SeriesResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    /// 寫入單一檔案，回傳實際路徑
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// 外部查詢工具：給一個檢索式，回傳筆數
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn count(&self, search_expression: &str) -> Result<u64>;

    /// Human-readable form of the call, used in logs and dry runs.
    fn describe(&self, search_expression: &str) -> String;
}

#[async_trait]
impl<T: QueryClient + ?Sized> QueryClient for Arc<T> {
    async fn count(&self, search_expression: &str) -> Result<u64> {
        (**self).count(search_expression).await
    }

    fn describe(&self, search_expression: &str) -> String {
        (**self).describe(search_expression)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn queries(&self) -> Vec<Query>;
    fn client_config(&self) -> ClientConfig;
    fn output_dir(&self) -> &str;
    fn file_name_template(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SeriesResult>;
    async fn transform(&self, series: &SeriesResult) -> Result<SeriesExport>;
    async fn load(&self, export: SeriesExport) -> Result<String>;
}
