// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A candidate, as read from one row of the table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateRecord {
    pub name: String,
    pub votes: u64,
    /// Free text. Only the codes `M` and `F` are interpreted.
    pub gender: String,
}

// ******** Output data structures *********

/// The summary of an election.
#[derive(PartialEq, Debug, Clone)]
pub struct Report {
    pub winner: String,
    pub total_votes: u64,
    /// Always `[("Hombres", _), ("Mujeres", _)]`, in this order.
    pub votes_by_gender: Vec<(String, u64)>,
    /// One entry per candidate record, in the order of the table.
    pub percentage_by_candidate: Vec<(String, f64)>,
}

/// Errors that prevent a summary from being computed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SummaryErrors {
    /// The votes cell of a data row is present but is not a number.
    /// `row` is the 1-based row of the table.
    MalformedVotes { row: usize, content: String },
    /// No candidate could be extracted from the table.
    EmptyDataset,
    /// No votes were cast at all: percentages are undefined.
    DivisionByZero,
    /// A total of votes does not fit in 64 bits.
    VoteOverflow,
}

impl Error for SummaryErrors {}

impl Display for SummaryErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryErrors::MalformedVotes { row, content } => {
                write!(f, "row {}: the number of votes {:?} is not valid", row, content)
            }
            SummaryErrors::EmptyDataset => write!(f, "no candidates found in the table"),
            SummaryErrors::DivisionByZero => {
                write!(f, "no votes were cast, cannot compute percentages")
            }
            SummaryErrors::VoteOverflow => write!(f, "the total number of votes is too large"),
        }
    }
}

// ********* Configuration **********

pub const MALE_CODE: &str = "M";
pub const FEMALE_CODE: &str = "F";
pub const MALE_LABEL: &str = "Hombres";
pub const FEMALE_LABEL: &str = "Mujeres";

/// Which rows of the table are visited after the header.
///
/// - ExcludeLast stops before the last row of the table (`row < row_count`).
/// It is the default, and matches the reports computed so far.
///
/// - IncludeLast visits every row (`row <= row_count`).
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum RowBound {
    ExcludeLast,
    IncludeLast,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SummaryRules {
    /// Number of rows skipped at the top of the table.
    pub header_rows: usize,
    // Columns are 1-based.
    pub name_column: usize,
    pub votes_column: usize,
    pub gender_column: usize,
    pub row_bound: RowBound,
    pub decimal_places: u32,
}

impl SummaryRules {
    pub const DEFAULT_RULES: SummaryRules = SummaryRules {
        header_rows: 1,
        name_column: 1,
        votes_column: 2,
        gender_column: 3,
        row_bound: RowBound::ExcludeLast,
        decimal_places: 2,
    };
}

impl Default for SummaryRules {
    fn default() -> Self {
        SummaryRules::DEFAULT_RULES
    }
}
