use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_year_range, Validate};

/// 一次查詢的設定：檢索詞與包含兩端的年份區間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub start_year: i32,
    pub stop_year: i32,
}

impl Query {
    pub fn new(term: impl Into<String>, start_year: i32, stop_year: i32) -> Self {
        Self {
            term: term.into(),
            start_year,
            stop_year,
        }
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.stop_year
    }

    /// Number of years covered, both ends included.
    pub fn year_count(&self) -> usize {
        if self.stop_year < self.start_year {
            0
        } else {
            (self.stop_year - self.start_year) as usize + 1
        }
    }

    pub fn search_expression(&self, year: i32) -> String {
        format!("{}{}", self.term, year)
    }
}

impl Validate for Query {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("series.term", &self.term)?;
        validate_year_range("series", self.start_year, self.stop_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// Ascending, one entry per year of the query range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesResult {
    entries: Vec<YearCount>,
}

impl SeriesResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, entry: YearCount) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[YearCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// 檢查結果是否完整覆蓋查詢區間且依年份遞增
    pub fn covers(&self, query: &Query) -> bool {
        self.entries.len() == query.year_count()
            && self
                .entries
                .iter()
                .zip(query.years())
                .all(|(entry, year)| entry.year == year)
    }
}

/// 寫檔前的成品：檔名、標頭與已序列化的內容
#[derive(Debug, Clone)]
pub struct SeriesExport {
    pub file_name: String,
    pub header: String,
    pub contents: Vec<u8>,
}

/// 單次執行的結果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub series: SeriesResult,
    pub output_path: String,
}
