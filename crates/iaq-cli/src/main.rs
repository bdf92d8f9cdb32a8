//! `iaq` — evaluate sensor readings against IAQ parameter standards.
//!
//! A developer tool over the `iaq-core` engine: load a JSON reading and a
//! JSON parameter-standards file, print the evaluated parameters, the
//! overall index, and the warning partition.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::{AnsiColors, OwoColorize};
use tracing_subscriber::EnvFilter;

use iaq_core::{QualityReport, ThresholdTable, classify};
use iaq_types::{ParameterStandard, Reading, Severity};

#[derive(Parser)]
#[command(name = "iaq")]
#[command(author, version, about = "Evaluate sensor readings against IAQ parameter standards", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a reading against a device's parameter standards
    Evaluate {
        /// JSON file with the sensor reading
        #[arg(short, long)]
        reading: PathBuf,

        /// JSON file with the parameter standards (array)
        #[arg(short, long)]
        standards: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the canonical IAQI threshold table
    Table {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Evaluate {
            reading,
            standards,
            format,
        } => {
            let reading = load_reading(&reading)?;
            let standards = load_standards(&standards)?;
            tracing::debug!(count = standards.len(), "loaded parameter standards");
            let output = evaluate_to_string(&reading, &standards, format)?;
            println!("{output}");
        }
        Commands::Table { format } => {
            println!("{}", table_to_string(format)?);
        }
    }

    Ok(())
}

fn load_reading(path: &Path) -> Result<Reading> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read reading file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("invalid reading JSON in {}", path.display()))
}

fn load_standards(path: &Path) -> Result<Vec<ParameterStandard>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read standards file {}", path.display()))?;
    let standards: Vec<ParameterStandard> = serde_json::from_str(&data)
        .with_context(|| format!("invalid parameter-standard JSON in {}", path.display()))?;
    for standard in &standards {
        standard
            .validate()
            .with_context(|| format!("invalid standard for {}", standard.name))?;
    }
    Ok(standards)
}

fn evaluate_to_string(
    reading: &Reading,
    standards: &[ParameterStandard],
    format: Format,
) -> Result<String> {
    let table = ThresholdTable::new();
    let report = QualityReport::compute(reading, standards, &table);
    let classified = classify(report.parameters.clone());

    match format {
        Format::Json => {
            let value = serde_json::json!({
                "qualityReport": report,
                "warnings": classified.unacceptable,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        Format::Text => {
            let mut out = String::new();
            for p in &report.parameters {
                let bucket = p
                    .threshold
                    .severity
                    .label()
                    .color(severity_color(p.threshold.severity))
                    .to_string();
                let iaqi = match p.iaqi {
                    Some(v) => format!("{v:.1}"),
                    None => "-".to_string(),
                };
                out.push_str(&format!(
                    "{:<12} {:>10.2} {:<8} {:<32} IAQI {}\n",
                    p.name.to_string(),
                    p.value,
                    p.unit,
                    bucket,
                    iaqi
                ));
            }
            match (report.overall.overall_iaqi, report.overall.bucket) {
                (Some(overall), Some(bucket)) => {
                    out.push_str(&format!(
                        "\nOverall IAQI: {:.1} ({})\n",
                        overall,
                        bucket.label.color(severity_color(bucket.severity))
                    ));
                }
                (Some(overall), None) => {
                    out.push_str(&format!("\nOverall IAQI: {overall:.1} (off scale)\n"));
                }
                _ => out.push_str("\nOverall IAQI: insufficient data\n"),
            }
            if classified.has_warnings() {
                let names: Vec<_> = classified
                    .unacceptable
                    .iter()
                    .map(|p| p.name.to_string())
                    .collect();
                out.push_str(&format!(
                    "{} {}\n",
                    "Warnings:".color(AnsiColors::Red),
                    names.join(", ")
                ));
            }
            Ok(out)
        }
    }
}

fn table_to_string(format: Format) -> Result<String> {
    let table = ThresholdTable::new();
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(table.entries())?),
        Format::Text => {
            let mut out = String::new();
            for entry in table.entries() {
                out.push_str(&format!(
                    "{:>5.0} – {:>5.0}  {}\n",
                    entry.min,
                    entry.max,
                    entry.label.color(severity_color(entry.severity))
                ));
            }
            Ok(out)
        }
    }
}

fn severity_color(severity: Severity) -> AnsiColors {
    match severity {
        Severity::Good => AnsiColors::Green,
        Severity::Moderate => AnsiColors::Yellow,
        Severity::SensitiveUnhealthy => AnsiColors::BrightYellow,
        Severity::Unhealthy => AnsiColors::Red,
        Severity::VeryUnhealthy => AnsiColors::Magenta,
        Severity::Hazardous => AnsiColors::BrightRed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STANDARDS_JSON: &str = r##"[
        {
            "name": "pm25",
            "unit": "µg/m³",
            "weight": 2.0,
            "thresholds": [
                { "name": "good", "color": "#00e400", "min": 0, "max": 50 },
                { "name": "moderate", "color": "#ffff00", "min": 50, "max": 100 },
                { "name": "unhealthy", "color": "#ff0000", "min": 100, "max": 500 }
            ]
        }
    ]"##;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_standards_validates() {
        let file = write_temp(STANDARDS_JSON);
        let standards = load_standards(file.path()).unwrap();
        assert_eq!(standards.len(), 1);

        let bad = write_temp(r#"[{"name":"pm25","unit":"","weight":2.0,"thresholds":[]}]"#);
        assert!(load_standards(bad.path()).is_err());
    }

    #[test]
    fn test_load_reading() {
        let file = write_temp(r#"{"pm25": 120.0, "co2": 650}"#);
        let reading = load_reading(file.path()).unwrap();
        assert_eq!(reading.pm25, Some(120.0));
        assert_eq!(reading.co2, Some(650.0));
    }

    #[test]
    fn test_evaluate_text_output() {
        let standards: Vec<ParameterStandard> = serde_json::from_str(STANDARDS_JSON).unwrap();
        let reading = Reading::builder().pm25(120.0).build();

        let out = evaluate_to_string(&reading, &standards, Format::Text).unwrap();
        assert!(out.contains("PM2.5"));
        assert!(out.contains("152.5"));
        assert!(out.contains("Warnings:"));
    }

    #[test]
    fn test_evaluate_json_output() {
        let standards: Vec<ParameterStandard> = serde_json::from_str(STANDARDS_JSON).unwrap();
        let reading = Reading::builder().pm25(25.0).build();

        let out = evaluate_to_string(&reading, &standards, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["qualityReport"]["overall"]["overall_iaqi"], 25.0);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_evaluate_insufficient_data() {
        let standards: Vec<ParameterStandard> = serde_json::from_str(STANDARDS_JSON).unwrap();
        let reading = Reading::default();

        let out = evaluate_to_string(&reading, &standards, Format::Text).unwrap();
        assert!(out.contains("insufficient data"));
    }

    #[test]
    fn test_table_text_lists_six_buckets() {
        let out = table_to_string(Format::Text).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.contains("Hazardous"));
    }
}
