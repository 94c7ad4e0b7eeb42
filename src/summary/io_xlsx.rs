// Primitives for reading Excel files.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use chrono::Timelike;
use log::debug;
use snafu::prelude::*;
use vote_summary::*;

use crate::summary::*;

/// One worksheet of an Excel workbook.
///
/// The number of rows is the height of the used range of the worksheet, and the cells
/// are addressed with their absolute position (`(1, 1)` is `A1`).
pub struct XlsxSource {
    range: Range<DataType>,
}

impl XlsxSource {
    pub fn new(range: Range<DataType>) -> XlsxSource {
        XlsxSource { range }
    }
}

impl TabularSource for XlsxSource {
    fn row_count(&self) -> usize {
        self.range.height()
    }

    fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        if row == 0 || col == 0 {
            return None;
        }
        self.range
            .get_value(((row - 1) as u32, (col - 1) as u32))
            .map(cell_text)
    }
}

/// The text of a cell, as displayed by a spreadsheet.
pub fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        // 120.0 is displayed as 120
        DataType::Float(f) => f.to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Bool(true) => "TRUE".to_string(),
        DataType::Bool(false) => "FALSE".to_string(),
        DataType::DateTime(_) => date_text(cell),
        DataType::Error(e) => e.to_string(),
        DataType::Empty => "".to_string(),
        #[allow(unreachable_patterns)]
        other => format!("{:?}", other),
    }
}

// Dates are shown as dates, never as their serial number.
fn date_text(cell: &DataType) -> String {
    match cell.as_datetime() {
        Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{:?}", cell),
    }
}

/// Opens the given worksheet, or the first worksheet of the workbook.
pub fn read_xlsx_table(path: &str, worksheet_name_o: Option<&str>) -> SummaryResult<XlsxSource> {
    debug!(
        "read_xlsx_table: path: {:?} worksheet: {:?}",
        path, worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    let wrange = if let Some(worksheet_name) = worksheet_name_o {
        workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                worksheet_name,
                path,
            })?
            .context(OpeningExcelSnafu { path })?
    } else {
        workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?
    };
    debug!(
        "read_xlsx_table: start: {:?} height: {:?} width: {:?}",
        wrange.start(),
        wrange.height(),
        wrange.width()
    );
    Ok(XlsxSource::new(wrange))
}
