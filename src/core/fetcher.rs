use crate::core::export::{header_line, output_file_name, render_series};
use crate::domain::model::{Query, SeriesExport, SeriesResult, YearCount};
use crate::domain::ports::{Pipeline, QueryClient, Storage};
use crate::utils::error::Result;

/// Query the client once per year of `query`, strictly in order.
///
/// The first failing year aborts the whole fetch; nothing partial is returned.
pub async fn fetch_series<C>(query: &Query, client: &C) -> Result<SeriesResult>
where
    C: QueryClient + ?Sized,
{
    let total = query.year_count();
    let mut series = SeriesResult::with_capacity(total);

    for (done, year) in query.years().enumerate() {
        let expression = query.search_expression(year);
        let count = client.count(&expression).await?;
        series.push(YearCount { year, count });

        let percent = (done + 1) as f64 * 100.0 / total as f64;
        tracing::info!(
            year,
            count,
            "Year = {}. Completed @ {:.1}% ({} papers)",
            year,
            percent,
            count
        );
    }

    tracing::info!(
        years = series.len(),
        total_papers = series.total(),
        "📈 Series for {:?}: {:?}",
        query.term,
        series
            .entries()
            .iter()
            .map(|e| (e.year, e.count))
            .collect::<Vec<_>>()
    );

    Ok(series)
}

/// One query term over one year range, written to a single file.
pub struct YearlySeriesFetcher<C: QueryClient, S: Storage> {
    query: Query,
    client: C,
    storage: S,
    file_name_template: String,
}

impl<C: QueryClient, S: Storage> YearlySeriesFetcher<C, S> {
    pub fn new(query: Query, client: C, storage: S, file_name_template: impl Into<String>) -> Self {
        Self {
            query,
            client,
            storage,
            file_name_template: file_name_template.into(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[async_trait::async_trait]
impl<C: QueryClient, S: Storage> Pipeline for YearlySeriesFetcher<C, S> {
    async fn extract(&self) -> Result<SeriesResult> {
        tracing::debug!(
            "Fetching {} years for {:?}",
            self.query.year_count(),
            self.query.term
        );
        fetch_series(&self.query, &self.client).await
    }

    async fn transform(&self, series: &SeriesResult) -> Result<SeriesExport> {
        let file_name = output_file_name(&self.query.term, &self.file_name_template);
        let header = header_line(&self.query);
        let contents = render_series(&header, series)?;

        tracing::debug!("Rendered {} rows for {}", series.len(), file_name);
        Ok(SeriesExport {
            file_name,
            header,
            contents,
        })
    }

    async fn load(&self, export: SeriesExport) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes to {}",
            export.contents.len(),
            export.file_name
        );
        self.storage
            .write_file(&export.file_name, &export.contents)
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::error::StatError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// 依檢索式回傳預設字串，並記錄呼叫順序
    #[derive(Clone, Default)]
    pub(crate) struct FakeQueryClient {
        answers: HashMap<String, String>,
        pub(crate) calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeQueryClient {
        pub(crate) fn new(answers: &[(&str, &str)]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl QueryClient for FakeQueryClient {
        async fn count(&self, search_expression: &str) -> Result<u64> {
            self.calls.lock().await.push(search_expression.to_string());
            let raw = self
                .answers
                .get(search_expression)
                .map(String::as_str)
                .unwrap_or("");
            crate::domain::count::parse_count_field(raw)
        }

        fn describe(&self, search_expression: &str) -> String {
            format!("fake {}", search_expression)
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct MockStorage {
        pub(crate) files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(format!("mock://{}", path))
        }
    }

    #[tokio::test]
    async fn test_fetch_series_in_order() {
        let client = FakeQueryClient::new(&[
            ("date 1950", "3"),
            ("date 1951", ""),
            ("date 1952", "7\n"),
        ]);
        let query = Query::new("date ", 1950, 1952);

        let series = fetch_series(&query, &client).await.unwrap();

        assert!(series.covers(&query));
        assert_eq!(
            series.entries(),
            &[
                YearCount { year: 1950, count: 3 },
                YearCount { year: 1951, count: 0 },
                YearCount { year: 1952, count: 7 },
            ]
        );
        assert_eq!(
            *client.calls.lock().await,
            vec!["date 1950", "date 1951", "date 1952"]
        );
    }

    #[tokio::test]
    async fn test_fetch_series_length_matches_range() {
        let client = FakeQueryClient::default();
        for (start, stop) in [(1930, 2015), (2000, 2000), (1999, 2001), (999, 1001)] {
            let query = Query::new("date ", start, stop);
            let series = fetch_series(&query, &client).await.unwrap();
            assert_eq!(series.len(), (stop - start + 1) as usize);
            assert!(series.covers(&query));
        }
    }

    #[tokio::test]
    async fn test_fetch_series_stops_at_first_failure() {
        let client = FakeQueryClient::new(&[("date 1950", "3"), ("date 1951", "error")]);
        let query = Query::new("date ", 1950, 1953);

        let err = fetch_series(&query, &client).await.unwrap_err();

        assert!(matches!(err, StatError::ParseError { .. }));
        assert_eq!(*client.calls.lock().await, vec!["date 1950", "date 1951"]);
    }

    #[tokio::test]
    async fn test_pipeline_phases() {
        let client = FakeQueryClient::new(&[("date 1950", "3"), ("date 1952", "7")]);
        let storage = MockStorage::default();
        let fetcher = YearlySeriesFetcher::new(
            Query::new("date ", 1950, 1952),
            client,
            storage.clone(),
            "{term}years.dat",
        );

        let series = fetcher.extract().await.unwrap();
        let export = fetcher.transform(&series).await.unwrap();
        assert_eq!(export.file_name, "date_years.dat");
        assert_eq!(export.header, "date 1950 ---> 1952");

        let path = fetcher.load(export).await.unwrap();
        assert_eq!(path, "mock://date_years.dat");

        let files = storage.files.lock().await;
        let written = String::from_utf8(files["date_years.dat"].clone()).unwrap();
        assert_eq!(written, "# date 1950 ---> 1952\n1950\t3\n1951\t0\n1952\t7\n");
    }
}
