use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use telecipher_core::SUBSTITUTION_TABLE;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
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

/// Result of one CLI transform.
#[derive(Serialize)]
pub struct TransformOutput<'a> {
    pub operation: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<i32>,
    pub length: usize,
    pub output: String,
}

impl<'a> TransformOutput<'a> {
    pub fn new(operation: &'a str, key: Option<i32>, payload: &[u8]) -> Self {
        Self {
            operation,
            key,
            length: payload.len(),
            output: payload_text(payload),
        }
    }
}

#[derive(Serialize)]
struct TablePair {
    plain: String,
    encoded: String,
}

pub fn print_transform(out: &TransformOutput<'_>, payload: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OPERATION", "KEY", "LENGTH", "OUTPUT"])
                .add_row(vec![
                    out.operation.to_string(),
                    out.key.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string()),
                    out.length.to_string(),
                    out.output.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match out.key {
            Some(key) => println!(
                "{} key={} length={} output={}",
                out.operation, key, out.length, out.output
            ),
            None => println!(
                "{} length={} output={}",
                out.operation, out.length, out.output
            ),
        },
        OutputFormat::Raw => {
            print_raw(payload);
        }
    }
}

pub fn print_substitution_table(format: OutputFormat) {
    let pairs: Vec<TablePair> = SUBSTITUTION_TABLE
        .iter()
        .map(|&(plain, encoded)| TablePair {
            plain: char::from(plain).to_string(),
            encoded: char::from(encoded).to_string(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&pairs).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PLAIN", "ENCODED"]);
            for pair in &pairs {
                table.add_row(vec![pair.plain.clone(), pair.encoded.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for pair in &pairs {
                println!("{} -> {}", pair.plain, pair.encoded);
            }
        }
        OutputFormat::Raw => {
            for pair in &pairs {
                println!("{}{}", pair.plain, pair.encoded);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

fn payload_text(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload).into_owned()
}
