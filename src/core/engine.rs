use crate::domain::model::RunOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct SeriesEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SeriesEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract → transform → load；任何一步失敗都不會寫檔
    pub async fn run(&self) -> Result<RunOutcome> {
        let started = Instant::now();

        tracing::info!("🔎 Querying yearly counts...");
        let series = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} years in {}ms",
            series.len(),
            started.elapsed().as_millis()
        );

        let export = self.pipeline.transform(&series).await?;
        tracing::debug!("Header: {}", export.header);

        let output_path = self.pipeline.load(export).await?;
        tracing::info!(
            "📁 Series saved to: {} ({}ms total)",
            output_path,
            started.elapsed().as_millis()
        );

        Ok(RunOutcome {
            series,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetcher::tests::{FakeQueryClient, MockStorage};
    use crate::core::fetcher::YearlySeriesFetcher;
    use crate::domain::model::Query;

    #[tokio::test]
    async fn test_run_returns_series_and_path() {
        let storage = MockStorage::default();
        let fetcher = YearlySeriesFetcher::new(
            Query::new("t neutrino and date ", 2000, 2001),
            FakeQueryClient::new(&[("t neutrino and date 2000", "12"), ("t neutrino and date 2001", "15")]),
            storage.clone(),
            "{term}years.dat",
        );

        let outcome = SeriesEngine::new(fetcher).run().await.unwrap();

        assert_eq!(outcome.output_path, "mock://t_neutrino_and_date_years.dat");
        assert_eq!(outcome.series.total(), 27);
        assert!(storage
            .files
            .lock()
            .await
            .contains_key("t_neutrino_and_date_years.dat"));
    }

    #[tokio::test]
    async fn test_failed_extract_writes_nothing() {
        let storage = MockStorage::default();
        let fetcher = YearlySeriesFetcher::new(
            Query::new("date ", 1950, 1952),
            FakeQueryClient::new(&[("date 1952", "error")]),
            storage.clone(),
            "{term}years.dat",
        );

        assert!(SeriesEngine::new(fetcher).run().await.is_err());
        assert!(storage.files.lock().await.is_empty());
    }
}
