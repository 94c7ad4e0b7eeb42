mod args;
mod summary;

use clap::Parser;
use log::{debug, info};

use vote_summary::{RowBound, SummaryRules};

use crate::args::Args;
use crate::summary::{run_summary_file, SummaryRequest};

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }
    debug!("args: {:?}", args);

    let rules = SummaryRules {
        row_bound: if args.include_last_row {
            RowBound::IncludeLast
        } else {
            RowBound::ExcludeLast
        },
        ..SummaryRules::DEFAULT_RULES
    };

    let request = SummaryRequest {
        input: args.input,
        input_type: args.input_type,
        worksheet_name: args.excel_worksheet_name,
        rules,
        out: args.out,
        reference: args.reference,
    };

    match run_summary_file(&request) {
        Ok(report) => {
            info!("Winner: {}", report.winner);
        }
        Err(e) => {
            let status = e.status();
            eprintln!("An error occurred ({}): {}", status, e);
            std::process::exit(status.exit_code());
        }
    }
}
