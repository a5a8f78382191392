use crate::domain::count::parse_count_field;
use crate::domain::ports::QueryClient;
use crate::utils::error::{Result, StatError};
use async_trait::async_trait;
use tokio::process::Command;

/// Runs `<program> <args..> <search_flag> "<prefix><expression>"` and reads
/// the count from its stdout. The child is awaited without a timeout.
#[derive(Debug, Clone)]
pub struct CommandQueryClient {
    program: String,
    args: Vec<String>,
    search_flag: String,
    search_prefix: String,
}

impl CommandQueryClient {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        search_flag: impl Into<String>,
        search_prefix: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            search_flag: search_flag.into(),
            search_prefix: search_prefix.into(),
        }
    }

    fn search_argument(&self, search_expression: &str) -> String {
        format!("{}{}", self.search_prefix, search_expression)
    }
}

#[async_trait]
impl QueryClient for CommandQueryClient {
    async fn count(&self, search_expression: &str) -> Result<u64> {
        let command_line = self.describe(search_expression);
        tracing::debug!("Running query tool: {}", command_line);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.search_flag)
            .arg(self.search_argument(search_expression))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| StatError::SubprocessError {
                command: command_line.clone(),
                message: format!("failed to launch: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatError::SubprocessError {
                command: command_line,
                message: format!("exited with {}: {}", output.status, stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let raw = stdout.trim_end();
        tracing::debug!("Query tool answered {:?}", raw);
        parse_count_field(raw)
    }

    fn describe(&self, search_expression: &str) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(self.search_flag.clone());
        parts.push(format!("{:?}", self.search_argument(search_expression)));
        parts.join(" ")
    }
}
