use crate::adapters::{build_client, LocalStorage};
use crate::core::engine::SeriesEngine;
use crate::core::export::{header_line, output_file_name};
use crate::core::fetcher::YearlySeriesFetcher;
use crate::domain::model::{Query, RunOutcome};
use crate::domain::ports::{ConfigProvider, QueryClient};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

/// What a run would do for one series, without doing it.
#[derive(Debug, Clone)]
pub struct SeriesPlan {
    pub query: Query,
    pub output_path: String,
    pub header: String,
    pub first_call: String,
    pub last_call: String,
}

pub fn plan_series<P: ConfigProvider>(config: &P) -> Result<Vec<SeriesPlan>> {
    let client = build_client(&config.client_config())?;

    Ok(config
        .queries()
        .into_iter()
        .map(|query| {
            let file_name = output_file_name(&query.term, config.file_name_template());
            let output_path = Path::new(config.output_dir())
                .join(&file_name)
                .display()
                .to_string();
            SeriesPlan {
                header: header_line(&query),
                first_call: client.describe(&query.search_expression(query.start_year)),
                last_call: client.describe(&query.search_expression(query.stop_year)),
                output_path,
                query,
            }
        })
        .collect())
}

/// 依序執行所有序列，遇到第一個錯誤即停止
pub async fn run_series<P: ConfigProvider>(config: &P) -> Result<Vec<RunOutcome>> {
    let client: Arc<dyn QueryClient> = build_client(&config.client_config())?;
    let storage = LocalStorage::new(config.output_dir().to_string());
    let queries = config.queries();
    let total = queries.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, query) in queries.into_iter().enumerate() {
        tracing::info!(
            "▶️ Series {}/{}: {:?} {} ---> {}",
            index + 1,
            total,
            query.term,
            query.start_year,
            query.stop_year
        );

        let fetcher = YearlySeriesFetcher::new(
            query,
            Arc::clone(&client),
            storage.clone(),
            config.file_name_template(),
        );
        outcomes.push(SeriesEngine::new(fetcher).run().await?);
    }

    Ok(outcomes)
}
