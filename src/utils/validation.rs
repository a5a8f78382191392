use crate::utils::error::{Result, StatError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> StatError {
    StatError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 只接受 http(s)，INSPIRE 端點與本機測試伺服器皆然
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        Err(invalid(field_name, path, "Path cannot be empty"))
    } else if path.contains('\0') {
        Err(invalid(field_name, path, "Path contains null bytes"))
    } else {
        Ok(())
    }
}

/// 檔名樣板只能是單一檔名，不可夾帶目錄
pub fn validate_file_name_template(field_name: &str, template: &str) -> Result<()> {
    validate_path(field_name, template)?;

    if template.contains(['/', '\\']) {
        return Err(invalid(
            field_name,
            template,
            "Template must be a bare file name; use the output directory setting for paths",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 年份區間含兩端，只要求起始不晚於結束
pub fn validate_year_range(field_name: &str, start_year: i32, stop_year: i32) -> Result<()> {
    if start_year > stop_year {
        return Err(invalid(
            field_name,
            format!("{}..={}", start_year, stop_year),
            "start_year must not be after stop_year",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("client.endpoint", "https://inspirehep.net/api/literature").is_ok());
        assert!(validate_url("client.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("client.endpoint", "").is_err());
        assert!(validate_url("client.endpoint", "invalid-url").is_err());

        let err = validate_url("client.endpoint", "ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("Unsupported URL scheme: ftp"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "out/series").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "out\0dir").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("client.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("client.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_name_template() {
        assert!(validate_file_name_template("output.file_name_template", "{term}years.dat").is_ok());
        assert!(validate_file_name_template("output.file_name_template", "").is_err());
        assert!(validate_file_name_template("output.file_name_template", "out/{term}.dat").is_err());
        assert!(validate_file_name_template("output.file_name_template", "out\\{term}.dat").is_err());
    }

    #[test]
    fn test_validate_year_range() {
        assert!(validate_year_range("series", 1930, 2015).is_ok());
        assert!(validate_year_range("series", 1950, 1950).is_ok());
        assert!(validate_year_range("series", 999, 1001).is_ok());

        match validate_year_range("series", 2015, 1930) {
            Err(StatError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "series");
                assert_eq!(value, "2015..=1930");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("series.term", "date ").is_ok());
        assert!(validate_non_empty_string("series.term", "   ").is_err());
    }
}
