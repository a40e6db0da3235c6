//! CSV loading with encoding and delimiter auto-detection.
//!
//! Reads the raw membership table into typed [`RawRecord`]s. Headers and
//! fields are trimmed of surrounding whitespace before any comparison, and
//! the presence of the required columns is checked up front so a malformed
//! export fails fast instead of producing half-empty records.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{CsvError, CsvResult};
use crate::models::RawRecord;

/// Columns the source table must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["School", "Conference", "City", "State", "Nickname"];

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed rows in source order.
    pub records: Vec<RawRecord>,
    /// Detected encoding.
    pub encoding: String,
    /// Detected delimiter.
    pub delimiter: char,
    /// Trimmed column headers.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the detected encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8_lossy(bytes).to_string()),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()),
        // Fallback: lossy UTF-8
        _ => Ok(String::from_utf8_lossy(bytes).to_string()),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text into records with an explicit delimiter.
pub fn parse_str(content: &str, delimiter: char) -> CsvResult<(Vec<RawRecord>, Vec<String>)> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(CsvError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        records.push(row?);
    }

    Ok((records, headers))
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    let (records, headers) = parse_str(&content, delimiter)?;

    Ok(ParseResult {
        records,
        encoding,
        delimiter,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "School,Conference,City,State,Nickname";

    #[test]
    fn test_simple_csv() {
        let csv = format!("{HEADER}\nGrinnell,Midwest,Grinnell,IA,Pioneers");
        let (records, headers) = parse_str(&csv, ',').unwrap();

        assert_eq!(headers.len(), 5);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].school, "Grinnell");
        assert_eq!(records[0].conference, "Midwest");
        assert_eq!(records[0].nickname, "Pioneers");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let csv = " School , Conference ,City,State,Nickname\n Grinnell , Midwest ,Grinnell,IA,Pioneers";
        let (records, headers) = parse_str(csv, ',').unwrap();

        assert_eq!(headers[0], "School");
        assert_eq!(records[0].school, "Grinnell");
        assert_eq!(records[0].conference, "Midwest");
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "School,City,State,Nickname\nGrinnell,Grinnell,IA,Pioneers";
        let err = parse_str(csv, ',').unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "Conference"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = format!("{HEADER},Division\nGrinnell,Midwest,Grinnell,IA,Pioneers,III");
        let (records, _) = parse_str(&csv, ',').unwrap();
        assert_eq!(records[0].state, "IA");
    }

    #[test]
    fn test_empty_conference_value() {
        let csv = format!("{HEADER}\nGrinnell,,Grinnell,IA,Pioneers");
        let (records, _) = parse_str(&csv, ',').unwrap();
        assert_eq!(records[0].conference, "");
    }

    #[test]
    fn test_empty_csv_error() {
        assert!(matches!(parse_str("", ','), Err(CsvError::EmptyFile)));
        assert!(matches!(parse_bytes_auto(b""), Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_auto_parse() {
        let csv = format!("{HEADER}\nGrinnell,Midwest,Grinnell,IA,Pioneers");
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        assert_eq!(result.delimiter, ',');
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.headers, REQUIRED_COLUMNS.to_vec());
    }

    #[test]
    fn test_latin1_decoding() {
        // "Québec" in ISO-8859-1
        let bytes: &[u8] = &[0x51, 0x75, 0xE9, 0x62, 0x65, 0x63];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.starts_with("Qu"));
        assert!(decoded.ends_with("bec"));
    }
}
