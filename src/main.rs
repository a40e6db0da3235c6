//! Confnorm CLI - normalize the DIII conference membership table.
//!
//! ```bash
//! confnorm    # read the fixed-path CSV, write the normalized JSON document
//! ```
//!
//! There are no flags or options: the tool reads
//! `public/divisions/DIII/d3_conferences.csv` and writes
//! `public/divisions/DIII/d3_conferences_teams.json`, printing the unmatched
//! college count and the output path on success.

use std::path::Path;

use clap::Parser;
use confnorm::{run, INPUT_PATH, OUTPUT_PATH};

#[derive(Parser)]
#[command(name = "confnorm")]
#[command(version)]
#[command(about = "Normalize college/conference membership CSV into cross-referenced JSON", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run_fixed() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_fixed() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", INPUT_PATH);

    let summary = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;

    eprintln!("   Encoding: {}", summary.csv_info.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(summary.csv_info.delimiter));
    eprintln!("   Columns: {}", summary.csv_info.headers.join(", "));
    eprintln!("   Rows: {}", summary.csv_info.row_count);
    eprintln!(
        "✅ Normalized {} colleges into {} conferences",
        summary.college_count, summary.conference_count
    );

    println!("Unmatched Colleges Count: {}", summary.unmatched_count);
    println!("Output Path: {}", summary.output_path.display());

    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
