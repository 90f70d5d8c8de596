//! RAW_recipes-style CSV ingestion
//!
//! The source dataset stores its list-valued columns (`tags`, `steps`,
//! `ingredients`) as Python list literals like `['a', "b"]`, so each row
//! needs a small quoted-list parse on top of the CSV parse. Any row that
//! fails either parse aborts the whole load; the pipeline has no
//! partial-success mode.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::Record;
use crate::error::GalaxyError;
use crate::ui;

/// The columns we consume. Extra dataset columns (minutes, nutrition, ...)
/// are ignored by name.
#[derive(Debug, Deserialize)]
struct RawRow {
	id: String,
	name: String,
	tags: String,
	steps: String,
	ingredients: String,
}

/// Load at most `limit` records from a CSV file, preserving file order.
pub fn load_records(path: &Path, limit: usize) -> Result<Vec<Record>> {
	ui::info(&format!("Loading data from {}", path.display()));

	let file = File::open(path)
		.with_context(|| format!("Failed to open dataset {}", path.display()))?;
	let mut reader = csv::Reader::from_reader(file);

	let mut records = Vec::new();

	for (i, row) in reader.deserialize::<RawRow>().enumerate() {
		if records.len() >= limit {
			break;
		}

		// 1-based data row, header excluded
		let row_number = i + 1;
		let raw = row.with_context(|| format!("Unreadable CSV row {}", row_number))?;

		records.push(parse_row(raw, row_number)?);
	}

	ui::success(&format!("Loaded {} recipes", records.len()));

	Ok(records)
}

fn parse_row(raw: RawRow, row: usize) -> Result<Record, GalaxyError> {
	let field = |field, result: Result<Vec<String>, String>| {
		result.map_err(|reason| GalaxyError::MalformedRecord { row, field, reason })
	};

	Ok(Record {
		id: raw.id,
		name: raw.name,
		ingredients: field("ingredients", parse_list_literal(&raw.ingredients))?,
		tags: field("tags", parse_list_literal(&raw.tags))?,
		steps: field("steps", parse_list_literal(&raw.steps))?,
	})
}

/// Parse a Python list literal of strings: `['a', "b", 'it\'s']`.
/// Returns every element in order; `[]` is an empty list.
pub fn parse_list_literal(text: &str) -> Result<Vec<String>, String> {
	let text = text.trim();
	let inner = text
		.strip_prefix('[')
		.and_then(|t| t.strip_suffix(']'))
		.ok_or_else(|| format!("expected a [...] list, got '{}'", truncate(text)))?;

	let mut items = Vec::new();
	let mut chars = inner.chars().peekable();

	loop {
		// Skip separators between elements
		while matches!(chars.peek(), Some(' ') | Some(',') | Some('\n') | Some('\t')) {
			chars.next();
		}

		let Some(&quote) = chars.peek() else {
			break;
		};
		if quote != '\'' && quote != '"' {
			return Err(format!("expected a quoted string, found '{}'", quote));
		}
		chars.next();

		let mut item = String::new();
		let mut closed = false;
		while let Some(c) = chars.next() {
			match c {
				'\\' => match chars.next() {
					Some('n') => item.push('\n'),
					Some('t') => item.push('\t'),
					Some('r') => item.push('\r'),
					Some('0') => item.push('\0'),
					Some('\\') => item.push('\\'),
					Some('\'') => item.push('\''),
					Some('"') => item.push('"'),
					// Python leaves unrecognized escapes in place
					Some(other) => {
						item.push('\\');
						item.push(other);
					}
					None => return Err("dangling escape at end of list".to_string()),
				},
				c if c == quote => {
					closed = true;
					break;
				}
				c => item.push(c),
			}
		}

		if !closed {
			return Err(format!("unterminated string '{}'", truncate(&item)));
		}

		items.push(item);
	}

	Ok(items)
}

fn truncate(text: &str) -> String {
	if text.chars().count() > 40 {
		format!("{}...", text.chars().take(40).collect::<String>())
	} else {
		text.to_string()
	}
}
