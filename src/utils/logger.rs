use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式：終端機用 compact，批次收集用 JSON lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(log_json: bool) -> Self {
        if log_json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// 未設定 RUST_LOG 時的預設過濾；verbose 會把每年的查詢細節與 reqwest 連線資訊打開
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "inspire_stat=debug,reqwest=info,warn"
    } else {
        "inspire_stat=info,warn"
    }
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
