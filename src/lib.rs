pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{build_client, CommandQueryClient, InspireHttpClient, LocalStorage};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    engine::SeriesEngine,
    fetcher::{fetch_series, YearlySeriesFetcher},
    series_batch::{plan_series, run_series},
};
pub use crate::domain::count::parse_count_field;
pub use crate::domain::model::{Query, RunOutcome, SeriesResult, YearCount};
pub use crate::utils::error::{Result, StatError};
