pub mod client;
pub mod toml_config;

pub const DEFAULT_TERM: &str = "date ";
pub const DEFAULT_START_YEAR: i32 = 1930;
pub const DEFAULT_STOP_YEAR: i32 = 2015;
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{term}years.dat";

pub fn default_output_dir() -> String {
    ".".to_string()
}

pub fn default_file_name_template() -> String {
    DEFAULT_FILE_NAME_TEMPLATE.to_string()
}

#[cfg(feature = "cli")]
pub use cli_config::{ClientKind, CliConfig};

#[cfg(feature = "cli")]
mod cli_config {
    use super::client::{self, ClientConfig};
    use super::*;
    use crate::domain::model::Query;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_file_name_template, validate_path, Validate};
    use clap::{Parser, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum ClientKind {
        /// Run an external query tool once per year
        Command,
        /// Ask the INSPIRE REST API directly
        Http,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "inspire-stat", version)]
    #[command(about = "Yearly paper counts from INSPIRE-HEP, written as a tab-delimited series")]
    pub struct CliConfig {
        /// Search term; the year is appended to it for each query
        #[arg(long, default_value = DEFAULT_TERM)]
        pub term: String,

        #[arg(long, default_value_t = DEFAULT_START_YEAR)]
        pub start_year: i32,

        #[arg(long, default_value_t = DEFAULT_STOP_YEAR)]
        pub stop_year: i32,

        #[arg(long, default_value = ".")]
        pub output_dir: String,

        /// `{term}` is replaced by the lowercased term with spaces as underscores
        #[arg(long, default_value = DEFAULT_FILE_NAME_TEMPLATE)]
        pub file_name_template: String,

        #[arg(long, value_enum, default_value_t = ClientKind::Command)]
        pub client: ClientKind,

        /// Query tool executable
        #[arg(long, default_value = client::DEFAULT_PROGRAM)]
        pub program: String,

        /// Fixed arguments placed before the search flag
        #[arg(long, value_delimiter = ',', default_value = "pyinspire.py")]
        pub tool_args: Vec<String>,

        #[arg(long, default_value = client::DEFAULT_SEARCH_FLAG, allow_hyphen_values = true)]
        pub search_flag: String,

        #[arg(long, default_value = client::DEFAULT_SEARCH_PREFIX)]
        pub search_prefix: String,

        #[arg(long, default_value = client::DEFAULT_ENDPOINT)]
        pub endpoint: String,

        /// HTTP request timeout in seconds (http client only)
        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        /// Show what would be queried without running anything
        #[arg(long)]
        pub dry_run: bool,
    }

    impl ConfigProvider for CliConfig {
        fn queries(&self) -> Vec<Query> {
            vec![Query::new(self.term.clone(), self.start_year, self.stop_year)]
        }

        fn client_config(&self) -> ClientConfig {
            match self.client {
                ClientKind::Command => ClientConfig::Command {
                    program: self.program.clone(),
                    args: self.tool_args.clone(),
                    search_flag: self.search_flag.clone(),
                    search_prefix: self.search_prefix.clone(),
                },
                ClientKind::Http => ClientConfig::Http {
                    endpoint: self.endpoint.clone(),
                    search_prefix: self.search_prefix.clone(),
                    timeout_seconds: self.timeout_seconds,
                },
            }
        }

        fn output_dir(&self) -> &str {
            &self.output_dir
        }

        fn file_name_template(&self) -> &str {
            &self.file_name_template
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.client_config().validate()?;
            validate_path("--output-dir", &self.output_dir)?;
            validate_file_name_template("--file-name-template", &self.file_name_template)?;
            for query in self.queries() {
                query.validate()?;
            }
            Ok(())
        }
    }

}
