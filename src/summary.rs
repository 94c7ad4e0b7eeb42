use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};

use std::fmt::Display;
use std::fs;

use text_diff::print_diff;
use vote_summary::*;

pub mod io_common;
pub mod io_csv;
pub mod io_xlsx;
pub mod wire;

use crate::summary::io_common::{check_extension, InputType};
use crate::summary::wire::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SummaryError {
    #[snafu(display("No file was provided"))]
    MissingInput {},
    #[snafu(display("The file {path} does not have the expected extension .{expected}"))]
    WrongExtension { path: String, expected: String },
    #[snafu(display("Unknown input type {input_type:?}"))]
    UnknownInputType { input_type: String },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No worksheet found in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {worksheet_name:?} not found in {path}"))]
    MissingWorksheet {
        worksheet_name: String,
        path: String,
    },
    #[snafu(display("Error opening file {path}: {source}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno}: {source}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Invalid summary: {reason}"))]
    InvalidWireReport { reason: String },
    #[snafu(display("{source}"))]
    Summary { source: SummaryErrors },
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

pub type SummaryResult<T> = Result<T, SummaryError>;

/// How an error should be reported to the user.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ErrorStatus {
    /// The input is missing, unreadable or its content is not valid.
    Client,
    /// Anything else.
    Internal,
}

impl ErrorStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorStatus::Client => 2,
            ErrorStatus::Internal => 1,
        }
    }
}

impl Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorStatus::Client => write!(f, "invalid input"),
            ErrorStatus::Internal => write!(f, "internal error"),
        }
    }
}

impl SummaryError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            SummaryError::WritingOutput { .. } => ErrorStatus::Internal,
            SummaryError::MissingInput {}
            | SummaryError::WrongExtension { .. }
            | SummaryError::UnknownInputType { .. }
            | SummaryError::OpeningExcel { .. }
            | SummaryError::EmptyExcel { .. }
            | SummaryError::MissingWorksheet { .. }
            | SummaryError::CsvOpen { .. }
            | SummaryError::CsvLineParse { .. }
            | SummaryError::OpeningJson { .. }
            | SummaryError::ParsingJson { .. }
            | SummaryError::InvalidWireReport { .. }
            | SummaryError::Summary { .. }
            | SummaryError::ReferenceMismatch {} => ErrorStatus::Client,
        }
    }
}

/// Everything needed to produce one summary.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub input: Option<String>,
    pub input_type: Option<String>,
    pub worksheet_name: Option<String>,
    pub rules: SummaryRules,
    /// A file path, `stdout` or nothing (stdout).
    pub out: Option<String>,
    pub reference: Option<String>,
}

fn read_table(
    path: &str,
    input_type: InputType,
    worksheet_name: Option<&str>,
) -> SummaryResult<Box<dyn TabularSource>> {
    info!("Attempting to read candidates file {:?}", path);
    let table: Box<dyn TabularSource> = match input_type {
        InputType::Xlsx => Box::new(io_xlsx::read_xlsx_table(path, worksheet_name)?),
        InputType::Csv => Box::new(io_csv::read_csv_table(path)?),
    };
    debug!("read_table: {} rows", table.row_count());
    Ok(table)
}

/// Reads the input of the request and computes its summary.
pub fn compute_summary(request: &SummaryRequest) -> SummaryResult<Report> {
    let path = request.input.as_deref().context(MissingInputSnafu {})?;
    let input_type = InputType::resolve(request.input_type.as_deref(), path)?;
    check_extension(path, input_type)?;

    let table = read_table(path, input_type, request.worksheet_name.as_deref())?;
    let report = vote_summary::run_summary(table.as_ref(), &request.rules)
        .context(SummarySnafu {})?;
    info!("compute_summary: report: {:?}", report);
    Ok(report)
}

/// Computes the summary, writes it out and checks it against the reference, if any.
pub fn run_summary_file(request: &SummaryRequest) -> SummaryResult<Report> {
    let report = compute_summary(request)?;

    let pretty_js_stats = report_to_json_pretty(&report)?;
    match request.out.as_deref() {
        None | Some("stdout") => {
            println!("{}", pretty_js_stats);
        }
        Some(out_path) => {
            info!("Writing summary to {:?}", out_path);
            fs::write(out_path, pretty_js_stats.as_bytes())
                .context(WritingOutputSnafu { path: out_path })?;
        }
    }

    // The reference summary, if provided for comparison
    if let Some(reference_path) = request.reference.as_deref() {
        let summary_ref = read_reference(reference_path)?;
        let pretty_js_summary_ref = report_to_json_pretty(&summary_ref)?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference summary");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
        info!("The summary matches the reference {:?}", reference_path);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JSValue;
    use std::path::PathBuf;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn temp_file(name: &str, content: &str) -> String {
        let p: PathBuf = std::env::temp_dir().join(format!(
            "votesum-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&p, content).unwrap();
        p.display().to_string()
    }

    fn request(input: Option<String>) -> SummaryRequest {
        SummaryRequest {
            input,
            input_type: None,
            worksheet_name: None,
            rules: SummaryRules::DEFAULT_RULES,
            out: None,
            reference: None,
        }
    }

    const CANDIDATES_CSV: &str = "Nombre,Votos,Sexo\nAna,120,F\nLuis,80,M\nTotal,200,\n";

    #[test]
    fn csv_end_to_end() {
        init();
        let path = temp_file("end_to_end.csv", CANDIDATES_CSV);
        let out = temp_file("end_to_end_out.json", "");
        let req = SummaryRequest {
            out: Some(out.clone()),
            ..request(Some(path))
        };
        let report = run_summary_file(&req).unwrap();
        assert_eq!(report.winner, "Ana");
        assert_eq!(report.total_votes, 200);

        let written: JSValue = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "Ganador": "Ana",
                "TotalVotos": 200,
                "VotosPorGenero": [{"Hombres": 80}, {"Mujeres": 120}],
                "PorcentajePorCandidato": [{"Ana": 60.0}, {"Luis": 40.0}]
            })
        );
    }

    #[test]
    fn missing_input() {
        init();
        let err = compute_summary(&request(None)).unwrap_err();
        assert!(matches!(err, SummaryError::MissingInput {}));
        assert_eq!(err.status(), ErrorStatus::Client);
        assert_eq!(err.status().exit_code(), 2);
    }

    #[test]
    fn wrong_extension() {
        init();
        let req = SummaryRequest {
            input_type: Some("xlsx".to_string()),
            ..request(Some("candidatos.xls".to_string()))
        };
        let err = compute_summary(&req).unwrap_err();
        assert!(matches!(err, SummaryError::WrongExtension { .. }));
        assert_eq!(err.status(), ErrorStatus::Client);
    }

    #[test]
    fn missing_excel_file() {
        init();
        let req = request(Some("/nonexistent/votesum/candidatos.xlsx".to_string()));
        let err = compute_summary(&req).unwrap_err();
        assert!(matches!(err, SummaryError::OpeningExcel { .. }));
    }

    #[test]
    fn xlsx_worksheet_from_request() {
        init();
        let input = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/candidatos.xlsx");
        let req = SummaryRequest {
            worksheet_name: Some("Segunda vuelta".to_string()),
            ..request(Some(input.to_string()))
        };
        let report = compute_summary(&req).unwrap();
        assert_eq!(report.winner, "Luis");

        let req = SummaryRequest {
            worksheet_name: Some("Hoja3".to_string()),
            ..request(Some(input.to_string()))
        };
        let err = compute_summary(&req).unwrap_err();
        assert!(matches!(err, SummaryError::MissingWorksheet { .. }));
        assert_eq!(err.status(), ErrorStatus::Client);
    }

    #[test]
    fn malformed_votes_are_reported() {
        init();
        let path = temp_file("malformed.csv", "Nombre,Votos,Sexo\nAna,abc,F\nTotal,,\n");
        let err = compute_summary(&request(Some(path))).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::Summary {
                source: SummaryErrors::MalformedVotes { row: 2, .. }
            }
        ));
        assert_eq!(err.status(), ErrorStatus::Client);
    }

    #[test]
    fn vote_overflow_is_reported() {
        init();
        let path = temp_file(
            "overflow.csv",
            "Nombre,Votos,Sexo\nAna,18446744073709551615,F\nLuis,1,M\nTotal,,\n",
        );
        let err = compute_summary(&request(Some(path))).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::Summary {
                source: SummaryErrors::VoteOverflow
            }
        ));
        assert_eq!(err.status(), ErrorStatus::Client);
    }

    #[test]
    fn header_only_is_reported() {
        init();
        let path = temp_file("header_only.csv", "Nombre,Votos,Sexo\n");
        let err = compute_summary(&request(Some(path))).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::Summary {
                source: SummaryErrors::EmptyDataset
            }
        ));
    }

    #[test]
    fn include_last_row() {
        init();
        let path = temp_file("include_last.csv", "Nombre,Votos,Sexo\nAna,120,F\nLuis,80,M\n");
        let report = compute_summary(&request(Some(path.clone()))).unwrap();
        assert_eq!(report.total_votes, 120);

        let req = SummaryRequest {
            rules: SummaryRules {
                row_bound: RowBound::IncludeLast,
                ..SummaryRules::DEFAULT_RULES
            },
            ..request(Some(path))
        };
        let report = compute_summary(&req).unwrap();
        assert_eq!(report.total_votes, 200);
    }

    #[test]
    fn reference_check() {
        init();
        let path = temp_file("reference.csv", CANDIDATES_CSV);
        let good = temp_file(
            "reference_good.json",
            r#"{"Ganador": "Ana", "TotalVotos": 200,
                "VotosPorGenero": [{"Hombres": 80}, {"Mujeres": 120}],
                "PorcentajePorCandidato": [{"Ana": 60.0}, {"Luis": 40.0}]}"#,
        );
        let bad = temp_file(
            "reference_bad.json",
            r#"{"Ganador": "Luis", "TotalVotos": 200,
                "VotosPorGenero": [{"Hombres": 80}, {"Mujeres": 120}],
                "PorcentajePorCandidato": [{"Ana": 60.0}, {"Luis": 40.0}]}"#,
        );
        let out = temp_file("reference_out.json", "");

        let req = SummaryRequest {
            out: Some(out.clone()),
            reference: Some(good),
            ..request(Some(path.clone()))
        };
        assert!(run_summary_file(&req).is_ok());

        let req = SummaryRequest {
            out: Some(out),
            reference: Some(bad),
            ..request(Some(path))
        };
        let err = run_summary_file(&req).unwrap_err();
        assert!(matches!(err, SummaryError::ReferenceMismatch {}));
    }
}
