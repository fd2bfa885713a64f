//! CSV export
//!
//! Exports rows with exactly the fields the table displays, in the same
//! column order, using the same locale formatting as the display layer.
//! Extra columns appear in first-seen order across the row set.

use shared::format::format_number;
use shared::models::IssueRow;

const BASE_COLUMNS: [&str; 6] = [
    "ASIN",
    "SKU",
    "Product",
    "Issue",
    "Details",
    "Recommended Action",
];

/// Render issue rows as a CSV document
pub fn issues_to_csv(rows: &[IssueRow]) -> String {
    // Extra columns: union of extra keys, first-seen order
    let mut extra_keys: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.extra.keys() {
            if !extra_keys.contains(&key.as_str()) {
                extra_keys.push(key);
            }
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = BASE_COLUMNS
        .iter()
        .copied()
        .chain(extra_keys.iter().copied().map(display_name))
        .collect();
    push_line(&mut out, &header);

    for row in rows {
        let mut cells: Vec<String> = vec![
            row.asin.clone(),
            row.sku.clone().unwrap_or_default(),
            row.title.clone(),
            row.issue_heading.clone(),
            row.message.clone(),
            row.solution.clone(),
        ];
        for key in &extra_keys {
            cells.push(row.extra.get(*key).map(format_value).unwrap_or_default());
        }
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        push_line(&mut out, &refs);
    }
    out
}

/// Column header for a known extra key
fn display_name(key: &str) -> &str {
    match key {
        "recommendedReplenishmentQty" => "Recommended Replenishment Qty",
        other => other,
    }
}

/// Format an extra value the way the display layer would
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 => format_number(f as u64),
            Some(f) => format!("{}", f),
            None => n.to_string(),
        },
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn push_line(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(cell));
    }
    out.push_str("\r\n");
}

/// RFC 4180 quoting: quote cells containing commas, quotes or line breaks
fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
