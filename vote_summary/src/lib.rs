/*!

Extraction and aggregation of election results.

This crate turns a table of candidates (name, number of votes, gender) into a [Report]:
the winner, the total number of votes, the votes split by gender and the share of
each candidate.

```
use vote_summary::*;

let table = GridSource::from_strs(&[
    &["Nombre", "Votos", "Sexo"],
    &["Ana", "120", "F"],
    &["Luis", "80", "M"],
]);
let rules = SummaryRules {
    row_bound: RowBound::IncludeLast,
    ..SummaryRules::DEFAULT_RULES
};
let report = run_summary(&table, &rules)?;
assert_eq!(report.winner, "Ana");
assert_eq!(report.total_votes, 200);
# Ok::<(), SummaryErrors>(())
```

See the [manual] for the layout of the input tables.
*/

mod config;
pub mod manual;
mod tabular;

use log::{debug, info};

pub use crate::config::*;
pub use crate::tabular::*;

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct VoteCount(u64);

impl VoteCount {
    const EMPTY: VoteCount = VoteCount(0);

    fn checked_add(self, rhs: VoteCount) -> Result<VoteCount, SummaryErrors> {
        self.0
            .checked_add(rhs.0)
            .map(VoteCount)
            .ok_or(SummaryErrors::VoteOverflow)
    }

    fn checked_sum<I: Iterator<Item = VoteCount>>(mut iter: I) -> Result<VoteCount, SummaryErrors> {
        iter.try_fold(VoteCount::EMPTY, |acc, vc| acc.checked_add(vc))
    }
}

/// Reads the candidates from a table.
///
/// The header rows are skipped. Rows with an empty name, votes or gender cell are
/// ignored. A votes cell that is not a non-negative integer makes the whole
/// extraction fail: no partial list of candidates is returned.
pub fn extract_candidates<T: TabularSource + ?Sized>(
    table: &T,
    rules: &SummaryRules,
) -> Result<Vec<CandidateRecord>, SummaryErrors> {
    let row_count = table.row_count();
    let last_row = match rules.row_bound {
        RowBound::ExcludeLast => row_count.saturating_sub(1),
        RowBound::IncludeLast => row_count,
    };
    debug!(
        "extract_candidates: row_count: {:?} last_row: {:?} rules: {:?}",
        row_count, last_row, rules
    );

    let mut res: Vec<CandidateRecord> = Vec::new();
    for row in (rules.header_rows + 1)..=last_row {
        let name = cell_or_empty(table, row, rules.name_column);
        let votes = cell_or_empty(table, row, rules.votes_column);
        let gender = cell_or_empty(table, row, rules.gender_column);

        if name.is_empty() || votes.is_empty() || gender.is_empty() {
            debug!(
                "extract_candidates: row {}: skipping incomplete row {:?}",
                row,
                (&name, &votes, &gender)
            );
            continue;
        }

        let votes = match votes.trim().parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                return Err(SummaryErrors::MalformedVotes {
                    row,
                    content: votes,
                })
            }
        };
        res.push(CandidateRecord {
            name,
            votes,
            gender,
        });
    }
    info!("extract_candidates: {} candidates read", res.len());
    Ok(res)
}

fn cell_or_empty<T: TabularSource + ?Sized>(table: &T, row: usize, col: usize) -> String {
    table.cell_text(row, col).unwrap_or_default()
}

/// Computes the summary of an election.
///
/// The winner is the candidate with the most votes. In case of a tie, the first
/// candidate in the list wins.
pub fn aggregate(
    records: &[CandidateRecord],
    rules: &SummaryRules,
) -> Result<Report, SummaryErrors> {
    info!("aggregate: processing {:?} candidates", records.len());

    let winner = stable_winner(records).ok_or(SummaryErrors::EmptyDataset)?;

    let total = VoteCount::checked_sum(records.iter().map(|c| VoteCount(c.votes)))?;
    if total == VoteCount::EMPTY {
        return Err(SummaryErrors::DivisionByZero);
    }

    let mut male = VoteCount::EMPTY;
    let mut female = VoteCount::EMPTY;
    for c in records.iter() {
        match c.gender.as_str() {
            MALE_CODE => male = male.checked_add(VoteCount(c.votes))?,
            FEMALE_CODE => female = female.checked_add(VoteCount(c.votes))?,
            other => {
                debug!(
                    "aggregate: candidate {:?}: gender {:?} not counted by gender",
                    c.name, other
                );
            }
        }
    }

    let percentage_by_candidate: Vec<(String, f64)> = records
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                percentage(VoteCount(c.votes), total, rules.decimal_places),
            )
        })
        .collect();

    let report = Report {
        winner: winner.name.clone(),
        total_votes: total.0,
        votes_by_gender: vec![
            (MALE_LABEL.to_string(), male.0),
            (FEMALE_LABEL.to_string(), female.0),
        ],
        percentage_by_candidate,
    };
    info!(
        "aggregate: winner: {} total votes: {}",
        report.winner, report.total_votes
    );
    Ok(report)
}

/// Extracts the candidates of a table and computes their summary.
pub fn run_summary<T: TabularSource + ?Sized>(
    table: &T,
    rules: &SummaryRules,
) -> Result<Report, SummaryErrors> {
    let records = extract_candidates(table, rules)?;
    aggregate(&records, rules)
}

// Only replaces the current best on a strictly greater count.
fn stable_winner(records: &[CandidateRecord]) -> Option<&CandidateRecord> {
    let mut best: Option<&CandidateRecord> = None;
    for c in records.iter() {
        match best {
            Some(b) if b.votes >= c.votes => {}
            _ => best = Some(c),
        }
    }
    best
}

/// The share of the votes, in percent, rounded half to even.
fn percentage(votes: VoteCount, total: VoteCount, decimal_places: u32) -> f64 {
    let raw = (votes.0 as f64 / total.0 as f64) * 100.0;
    let scale = 10f64.powi(decimal_places as i32);
    (raw * scale).round_ties_even() / scale
}
