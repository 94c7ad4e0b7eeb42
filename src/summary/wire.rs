// The JSON representation of a summary.

use log::debug;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use vote_summary::*;

use crate::summary::*;

/// A summary, as exchanged with the consumers of the reports.
///
/// The lists hold maps with exactly one entry each: `[{"Hombres": 80}, {"Mujeres": 120}]`.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct WireReport {
    #[serde(rename = "Ganador")]
    pub winner: String,
    #[serde(rename = "TotalVotos")]
    pub total_votes: u64,
    #[serde(rename = "VotosPorGenero")]
    pub votes_by_gender: Vec<BTreeMap<String, u64>>,
    #[serde(rename = "PorcentajePorCandidato")]
    pub percentage_by_candidate: Vec<BTreeMap<String, f64>>,
}

fn single_entry_map<T: Clone>(key: &str, value: &T) -> BTreeMap<String, T> {
    let mut m = BTreeMap::new();
    m.insert(key.to_string(), value.clone());
    m
}

fn from_single_entry_maps<T: Clone>(
    field: &str,
    maps: &[BTreeMap<String, T>],
) -> SummaryResult<Vec<(String, T)>> {
    let mut res: Vec<(String, T)> = Vec::new();
    for (idx, m) in maps.iter().enumerate() {
        match m.iter().collect::<Vec<_>>().as_slice() {
            [(k, v)] => res.push(((*k).clone(), (*v).clone())),
            _ => {
                return InvalidWireReportSnafu {
                    reason: format!(
                        "entry {} of {} should have exactly one key, found {}",
                        idx,
                        field,
                        m.len()
                    ),
                }
                .fail();
            }
        }
    }
    Ok(res)
}

impl From<&Report> for WireReport {
    fn from(report: &Report) -> WireReport {
        WireReport {
            winner: report.winner.clone(),
            total_votes: report.total_votes,
            votes_by_gender: report
                .votes_by_gender
                .iter()
                .map(|(label, count)| single_entry_map(label, count))
                .collect(),
            percentage_by_candidate: report
                .percentage_by_candidate
                .iter()
                .map(|(name, pct)| single_entry_map(name, pct))
                .collect(),
        }
    }
}

impl TryFrom<&WireReport> for Report {
    type Error = SummaryError;

    fn try_from(wire: &WireReport) -> SummaryResult<Report> {
        Ok(Report {
            winner: wire.winner.clone(),
            total_votes: wire.total_votes,
            votes_by_gender: from_single_entry_maps("VotosPorGenero", &wire.votes_by_gender)?,
            percentage_by_candidate: from_single_entry_maps(
                "PorcentajePorCandidato",
                &wire.percentage_by_candidate,
            )?,
        })
    }
}

pub fn report_to_json_pretty(report: &Report) -> SummaryResult<String> {
    serde_json::to_string_pretty(&WireReport::from(report)).context(ParsingJsonSnafu {})
}

pub fn report_from_json(js: &str) -> SummaryResult<Report> {
    let wire: WireReport = serde_json::from_str(js).context(ParsingJsonSnafu {})?;
    Report::try_from(&wire)
}

/// Reads a summary previously written in JSON format.
pub fn read_reference(path: &str) -> SummaryResult<Report> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_reference: content: {:?}", contents);
    report_from_json(contents.as_str())
}
