//! High-level pipeline API: parse, normalize, serialize, write.
//!
//! The pipeline is a single synchronous pass. The output file is only written
//! after the full in-memory structure has been built and serialized, so a
//! failing run leaves no partial output behind.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::PipelineResult;
use crate::models::NormalizedRoster;
use crate::parser::parse_csv_file_auto;
use crate::transform::normalizer::normalize;

/// Fixed input location for the membership table.
pub const INPUT_PATH: &str = "public/divisions/DIII/d3_conferences.csv";

/// Fixed output location for the normalized document.
pub const OUTPUT_PATH: &str = "public/divisions/DIII/d3_conferences_teams.json";

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Count of colleges routed to the Unmatched bucket.
    pub unmatched_count: usize,
    /// Count of conferences in the output (including Unmatched).
    pub conference_count: usize,
    /// Count of colleges in the output.
    pub college_count: usize,
    /// Where the document was written.
    pub output_path: PathBuf,
    /// CSV parsing metadata.
    pub csv_info: CsvInfo,
}

/// CSV file information.
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Run the full transform: read the CSV at `input`, normalize, write the
/// pretty-printed JSON document to `output`.
pub fn run(input: &Path, output: &Path) -> PipelineResult<RunSummary> {
    let parse_result = parse_csv_file_auto(input)?;

    let csv_info = CsvInfo {
        encoding: parse_result.encoding.clone(),
        delimiter: parse_result.delimiter,
        headers: parse_result.headers.clone(),
        row_count: parse_result.records.len(),
    };

    let roster = normalize(&parse_result.records);
    let json = to_pretty_json(&roster)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, json)?;

    Ok(RunSummary {
        unmatched_count: roster.unmatched_count(),
        conference_count: roster.conferences.len(),
        college_count: roster.colleges.len(),
        output_path: output.to_path_buf(),
        csv_info,
    })
}

/// Serialize with a four-space indent.
pub fn to_pretty_json(roster: &NormalizedRoster) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    roster.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, PipelineError};
    use tempfile::tempdir;

    const SAMPLE: &str = "\
School,Conference,City,State,Nickname
Grinnell, Midwest ,Grinnell,IA,Pioneers
Knox,Midwest,Galesburg,IL,Prairie Fire
Hiram,,Hiram,OH,Terriers
";

    #[test]
    fn test_run_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("conferences.csv");
        let output = dir.path().join("out/normalized.json");
        std::fs::write(&input, SAMPLE).unwrap();

        let summary = run(&input, &output).unwrap();
        assert_eq!(summary.unmatched_count, 1);
        assert_eq!(summary.conference_count, 2);
        assert_eq!(summary.college_count, 3);
        assert_eq!(summary.csv_info.row_count, 3);
        assert_eq!(summary.csv_info.delimiter, ',');

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["conferences"][0]["conferenceName"], "Midwest");
        assert_eq!(
            written["conferences"][0]["teamIds"],
            serde_json::json!([1, 2])
        );
        assert_eq!(written["conferences"][1]["conferenceName"], "Unmatched");
        assert_eq!(
            written["conferences"][1]["teamIds"],
            serde_json::json!([3])
        );
        assert_eq!(written["colleges"][2]["college"], "Hiram");
        assert_eq!(written["colleges"][2]["conferenceId"], 2);
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("conferences.csv");
        let output = dir.path().join("normalized.json");
        std::fs::write(&input, SAMPLE).unwrap();

        run(&input, &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        run(&input, &output).unwrap();
        let second = std::fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_is_fatal_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("does-not-exist.csv");
        let output = dir.path().join("normalized.json");

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(CsvError::Io(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_column_is_fatal_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("conferences.csv");
        let output = dir.path().join("normalized.json");
        std::fs::write(&input, "School,City,State,Nickname\nA,B,C,D\n").unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Csv(CsvError::MissingColumn(ref c)) if c == "Conference"
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let roster = normalize(&[]);
        let json = to_pretty_json(&roster).unwrap();

        assert!(json.starts_with("{\n    \"conferences\""));
        assert!(json.contains("\n        {"));
        assert!(!json.contains("\n  \""));
    }
}
