use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROGRAM: &str = "python";
pub const DEFAULT_SEARCH_FLAG: &str = "-s";
pub const DEFAULT_SEARCH_PREFIX: &str = "find ";
pub const DEFAULT_ENDPOINT: &str = "https://inspirehep.net/api/literature";

pub fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

pub fn default_program_args() -> Vec<String> {
    vec!["pyinspire.py".to_string()]
}

pub fn default_search_flag() -> String {
    DEFAULT_SEARCH_FLAG.to_string()
}

pub fn default_search_prefix() -> String {
    DEFAULT_SEARCH_PREFIX.to_string()
}

pub fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// 查詢工具設定：外部指令或 INSPIRE REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientConfig {
    Command {
        #[serde(default = "default_program")]
        program: String,
        #[serde(default = "default_program_args")]
        args: Vec<String>,
        #[serde(default = "default_search_flag")]
        search_flag: String,
        #[serde(default = "default_search_prefix")]
        search_prefix: String,
    },
    Http {
        #[serde(default = "default_endpoint")]
        endpoint: String,
        #[serde(default = "default_search_prefix")]
        search_prefix: String,
        timeout_seconds: Option<u64>,
    },
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::Command {
            program: default_program(),
            args: default_program_args(),
            search_flag: default_search_flag(),
            search_prefix: default_search_prefix(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        match self {
            ClientConfig::Command {
                program,
                search_flag,
                ..
            } => {
                validate_non_empty_string("client.program", program)?;
                validate_non_empty_string("client.search_flag", search_flag)
            }
            ClientConfig::Http {
                endpoint,
                timeout_seconds,
                ..
            } => {
                validate_url("client.endpoint", endpoint)?;
                if let Some(timeout) = timeout_seconds {
                    validate_positive_number("client.timeout_seconds", *timeout, 1)?;
                }
                Ok(())
            }
        }
    }
}
