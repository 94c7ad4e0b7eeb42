use clap::Parser;

/// This is an election summary program: it reads a table of candidates and prints the
/// winner, the total number of votes, the votes by gender and the share of each candidate.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The spreadsheet containing the candidates: one candidate per row with the
    /// name, the number of votes and the gender (M or F), after a header row.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default inferred from the extension of the input, otherwise xlsx) The type of the input:
    /// xlsx or csv.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: the first worksheet) When using an Excel file, indicates the name of the
    /// worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the summary in JSON format.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the summary of an election in JSON format. If provided,
    /// votesum will check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, the last row of the table is also read. By default it is
    /// ignored.
    #[clap(long, takes_value = false)]
    pub include_last_row: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
