pub mod engine;
pub mod export;
pub mod fetcher;
pub mod series_batch;

pub use crate::domain::model::{Query, RunOutcome, SeriesExport, SeriesResult, YearCount};
pub use crate::domain::ports::{ConfigProvider, Pipeline, QueryClient, Storage};
pub use crate::utils::error::Result;
