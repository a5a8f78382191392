use crate::config::client::ClientConfig;
use crate::config::{default_file_name_template, default_output_dir};
use crate::domain::model::Query;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StatError};
use crate::utils::validation::{validate_file_name_template, validate_path, Validate};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: String,
    #[serde(default = "default_file_name_template")]
    pub file_name_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            file_name_template: default_file_name_template(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub term: String,
    pub start_year: i32,
    /// 省略時取今年
    pub stop_year: Option<i32>,
}

impl SeriesConfig {
    pub fn to_query(&self) -> Query {
        let stop_year = self
            .stop_year
            .unwrap_or_else(|| chrono::Local::now().year());
        Query::new(self.term.clone(), self.start_year, stop_year)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INSPIRE_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.client.validate()?;
        validate_path("output.directory", &self.output.directory)?;
        validate_file_name_template("output.file_name_template", &self.output.file_name_template)?;

        if self.series.is_empty() {
            return Err(StatError::MissingConfigError {
                field: "series".to_string(),
            });
        }
        for series in &self.series {
            series.to_query().validate()?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn queries(&self) -> Vec<Query> {
        self.series.iter().map(SeriesConfig::to_query).collect()
    }

    fn client_config(&self) -> ClientConfig {
        self.client.clone()
    }

    fn output_dir(&self) -> &str {
        &self.output.directory
    }

    fn file_name_template(&self) -> &str {
        &self.output.file_name_template
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[client]
type = "command"
program = "python2"
args = ["tools/pyinspire.py"]

[output]
directory = "./data"
file_name_template = "{term}years.dat"

[[series]]
term = "date "
start_year = 1930
stop_year = 2015

[[series]]
term = "t neutrino and date "
start_year = 1960
stop_year = 2015
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let queries = config.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0], Query::new("date ", 1930, 2015));
        assert_eq!(queries[1].term, "t neutrino and date ");
        assert_eq!(config.output_dir(), "./data");

        match config.client_config() {
            ClientConfig::Command { program, args, search_flag, .. } => {
                assert_eq!(program, "python2");
                assert_eq!(args, vec!["tools/pyinspire.py"]);
                assert_eq!(search_flag, "-s");
            }
            other => panic!("unexpected client {:?}", other),
        }
    }

    #[test]
    fn test_defaults_apply() {
        let toml_content = r#"
[[series]]
term = "date "
start_year = 1930
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.client, ClientConfig::default());
        assert_eq!(config.output_dir(), ".");
        assert_eq!(config.file_name_template(), "{term}years.dat");

        let query = &config.queries()[0];
        assert_eq!(query.stop_year, chrono::Local::now().year());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_INSPIRE_ENDPOINT", "http://localhost:9999/api/literature");

        let toml_content = r#"
[client]
type = "http"
endpoint = "${TEST_INSPIRE_ENDPOINT}"

[[series]]
term = "date "
start_year = 2000
stop_year = 2001
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        match &config.client {
            ClientConfig::Http { endpoint, timeout_seconds, .. } => {
                assert_eq!(endpoint, "http://localhost:9999/api/literature");
                assert_eq!(*timeout_seconds, None);
            }
            other => panic!("unexpected client {:?}", other),
        }

        std::env::remove_var("TEST_INSPIRE_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let no_series = TomlConfig::from_toml_str("[output]\ndirectory = \".\"\n").unwrap();
        assert!(matches!(
            no_series.validate(),
            Err(StatError::MissingConfigError { .. })
        ));

        let reversed = TomlConfig::from_toml_str(
            r#"
[[series]]
term = "date "
start_year = 2015
stop_year = 1930
"#,
        )
        .unwrap();
        assert!(reversed.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[[series]\nterm = ").unwrap_err();
        assert!(matches!(err, StatError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[series]]
term = "date "
start_year = 1950
stop_year = 1952
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.queries(), vec![Query::new("date ", 1950, 1952)]);
    }
}
