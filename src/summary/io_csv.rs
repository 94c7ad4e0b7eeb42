// Primitives for reading CSV files.

use log::debug;
use snafu::prelude::*;
use vote_summary::*;

use crate::summary::*;

/// Reads the whole file in memory. Every line is a row, the header included.
pub fn read_csv_table(path: &str) -> SummaryResult<GridSource> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // Line numbers start at 1, as in spreadsheets
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_csv_table: lineno: {:?} line: {:?}", lineno, line);
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    Ok(GridSource::new(rows))
}
