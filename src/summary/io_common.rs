use snafu::prelude::*;
use std::path::Path;

use crate::summary::*;

/// The formats of the candidates tables.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Xlsx,
    Csv,
}

impl InputType {
    /// Uses the type given by the user, or guesses it from the extension of the file.
    /// Excel is assumed when nothing else matches.
    pub fn resolve(input_type: Option<&str>, path: &str) -> SummaryResult<InputType> {
        match input_type {
            Some("xlsx") | Some("excel") => Ok(InputType::Xlsx),
            Some("csv") => Ok(InputType::Csv),
            Some(x) => UnknownInputTypeSnafu { input_type: x }.fail(),
            None if file_extension(path).as_deref() == Some("csv") => Ok(InputType::Csv),
            None => Ok(InputType::Xlsx),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            InputType::Xlsx => "xlsx",
            InputType::Csv => "csv",
        }
    }
}

fn file_extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_string())
}

/// The extension is compared exactly: `candidatos.XLSX` is rejected.
pub fn check_extension(path: &str, input_type: InputType) -> SummaryResult<()> {
    let expected = input_type.extension();
    ensure!(
        file_extension(path).as_deref() == Some(expected),
        WrongExtensionSnafu { path, expected }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_input_type() {
        assert_eq!(
            InputType::resolve(None, "a/b/candidatos.csv").unwrap(),
            InputType::Csv
        );
        assert_eq!(
            InputType::resolve(None, "candidatos.xlsx").unwrap(),
            InputType::Xlsx
        );
        assert_eq!(InputType::resolve(None, "candidatos").unwrap(), InputType::Xlsx);
        assert_eq!(
            InputType::resolve(Some("csv"), "candidatos.xlsx").unwrap(),
            InputType::Csv
        );
        assert!(matches!(
            InputType::resolve(Some("ods"), "candidatos.ods"),
            Err(SummaryError::UnknownInputType { .. })
        ));
    }

    #[test]
    fn extensions() {
        assert!(check_extension("candidatos.xlsx", InputType::Xlsx).is_ok());
        assert!(check_extension("dir.v2/candidatos.csv", InputType::Csv).is_ok());
        assert!(check_extension("candidatos.XLSX", InputType::Xlsx).is_err());
        assert!(check_extension("candidatos.xls", InputType::Xlsx).is_err());
        assert!(check_extension("candidatos", InputType::Xlsx).is_err());
        assert!(check_extension("candidatos.csv", InputType::Xlsx).is_err());
    }
}
