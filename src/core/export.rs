//! Series serialization: file name, header line and tab-delimited body.

use crate::domain::model::{Query, SeriesResult};
use crate::utils::error::{Result, StatError};
use csv::{Terminator, WriterBuilder};

/// `"t neutrino and date "` -> `"t_neutrino_and_date_"`
pub fn term_slug(term: &str) -> String {
    term.to_lowercase().replace(' ', "_")
}

pub fn output_file_name(term: &str, template: &str) -> String {
    template.replace("{term}", &term_slug(term))
}

pub fn header_line(query: &Query) -> String {
    format!("{}{} ---> {}", query.term, query.start_year, query.stop_year)
}

/// `# <header>` 後接每年一列 `year\tcount`
pub fn render_series(header: &str, series: &SeriesResult) -> Result<Vec<u8>> {
    let mut buffer = format!("# {}\n", header).into_bytes();
    buffer.reserve(series.len() * 12);

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);

    for entry in series.entries() {
        writer.serialize((entry.year, entry.count))?;
    }

    writer
        .into_inner()
        .map_err(|e| StatError::IoError(e.into_error()))
}
