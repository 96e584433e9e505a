use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Outcome of one document in a `validate` run.
#[derive(Debug, Serialize)]
pub struct DocumentOutcome {
    pub index: usize,
    pub file: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateReport<'a> {
    pub schema_id: &'static str,
    pub schema: &'a str,
    pub documents: Vec<DocumentOutcome>,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub schema_id: &'static str,
    pub directory: &'a str,
    pub strict: bool,
    pub schemas: Vec<String>,
}

pub fn print_validate(report: &ValidateReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "FILE", "RESULT", "DETAIL"]);
            for doc in &report.documents {
                table.add_row(vec![
                    doc.index.to_string(),
                    doc.file.clone(),
                    verdict(doc.valid).to_string(),
                    doc.error.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for doc in &report.documents {
                match &doc.error {
                    Some(error) => println!("[{}] {} {}: {error}", doc.index, doc.file, verdict(false)),
                    None => println!("[{}] {} {}", doc.index, doc.file, verdict(true)),
                }
            }
        }
    }
}

pub fn print_check(report: &CheckReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SCHEMA", "FILE"]);
            for name in &report.schemas {
                table.add_row(vec![name.clone(), format!("{name}.schema.json")]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} schema(s) compiled from {}{}",
                report.schemas.len(),
                report.directory,
                if report.strict { " (strict)" } else { "" }
            );
            for name in &report.schemas {
                println!("  {name}");
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}
