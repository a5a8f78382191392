//! Turning the query tool's textual answer into a count.
//!
//! The tool prints a single number, or a comma-separated list of numbers in
//! which an empty field stands for zero. Empty output also means zero.

use crate::utils::error::{Result, StatError};

/// 將每個空白欄位（含整個字串為空）補成 "0"
pub fn normalize_count_output(raw: &str) -> String {
    raw.split(',')
        .map(|field| if field.is_empty() { "0" } else { field })
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse one raw answer into a count.
///
/// Surrounding whitespace is ignored and an empty answer is zero. When the
/// answer holds several comma-separated fields, every field must be a
/// base-10 non-negative integer (empty fields count as zero) and the result
/// is their sum.
pub fn parse_count_field(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let normalized = normalize_count_output(trimmed);

    normalized.split(',').try_fold(0u64, |total, field| {
        let value = parse_single_field(raw, field.trim())?;
        total.checked_add(value).ok_or_else(|| StatError::ParseError {
            raw: raw.to_string(),
            reason: "count overflows u64".to_string(),
        })
    })
}

fn parse_single_field(raw: &str, field: &str) -> Result<u64> {
    if field.is_empty() {
        return Ok(0);
    }
    // u64::from_str 接受前置 '+'，這裡只收純數字
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatError::ParseError {
            raw: raw.to_string(),
            reason: format!("{:?} is not a base-10 integer", field),
        });
    }
    field.parse::<u64>().map_err(|e| StatError::ParseError {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
