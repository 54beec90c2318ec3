// Console rendering for exercise results
// Flat records become a box-drawn table; records holding nested lists
// become indented sections, with flat inner lists drawn as tables again.

use serde_json::{Map, Value};

const SECTION_SEPARATOR: &str = "--------------";

/// Render a JSON result for the console
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "No rows found".to_string(),
        Value::Array(items) if is_flat_table(items) => {
            let mut result = table(items);
            result.push_str(&format!("\n{} row(s) returned", items.len()));
            result
        }
        Value::Array(items) => items
            .iter()
            .map(|item| section(item, 0))
            .collect::<Vec<_>>()
            .join(&format!("{}\n", SECTION_SEPARATOR)),
        other => scalar(other),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// True when every item is an object whose fields are all scalars
fn is_flat_table(items: &[Value]) -> bool {
    items
        .iter()
        .all(|item| matches!(item, Value::Object(fields) if fields.values().all(is_scalar)))
}

/// Display form of a single value
/// Floats always get two decimals so prices and totals line up
fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{:.2}", f),
            None => n.to_string(),
        },
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Not expected here, but print something readable anyway
        other => other.to_string(),
    }
}

/// Render one record and everything nested inside it
fn section(value: &Value, depth: usize) -> String {
    let pad = "  ".repeat(depth);

    match value {
        Value::Object(fields) => fields_section(fields, depth),
        other => format!("{}{}\n", pad, scalar(other)),
    }
}

fn fields_section(fields: &Map<String, Value>, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let mut result = String::new();

    for (name, value) in fields {
        match value {
            Value::Array(items) => {
                result.push_str(&format!("{}{}:\n", pad, name));
                result.push_str(&nested_list(items, depth + 1));
            }
            Value::Object(inner) => {
                result.push_str(&format!("{}{}:\n", pad, name));
                result.push_str(&fields_section(inner, depth + 1));
            }
            other => result.push_str(&format!("{}{}: {}\n", pad, name, scalar(other))),
        }
    }

    result
}

fn nested_list(items: &[Value], depth: usize) -> String {
    let pad = "  ".repeat(depth);

    if items.is_empty() {
        format!("{}(none)\n", pad)
    } else if is_flat_table(items) {
        table(items)
            .lines()
            .map(|line| format!("{}{}\n", pad, line))
            .collect()
    } else {
        items.iter().map(|item| section(item, depth)).collect()
    }
}

/// Draw a box table for flat records. Column order follows the fields of
/// the first record.
fn table(items: &[Value]) -> String {
    let column_names: Vec<String> = match items.first() {
        Some(Value::Object(fields)) => fields.keys().cloned().collect(),
        _ => return String::new(),
    };

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            column_names
                .iter()
                .map(|name| item.get(name).map(scalar).unwrap_or_default())
                .collect()
        })
        .collect();

    // Widths are in characters, which is also what format! pads by
    let mut widths: Vec<usize> = column_names.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let mut result = String::new();

    // Header row
    result.push_str(&border(&widths, '┌', '┬', '┐'));

    // Column names
    result.push('│');
    for (name, width) in column_names.iter().zip(&widths) {
        result.push_str(&format!(" {:<width$} ", name, width = width));
        result.push('│');
    }
    result.push('\n');

    // Separator
    result.push_str(&border(&widths, '├', '┼', '┤'));

    // Data rows
    for row in &rows {
        result.push('│');
        for (value, width) in row.iter().zip(&widths) {
            result.push_str(&format!(" {:<width$} ", value, width = width));
            result.push('│');
        }
        result.push('\n');
    }

    // Bottom border
    result.push_str(&border(&widths, '└', '┴', '┘'));

    result
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            line.push(middle);
        }
    }
    line.push(right);
    line.push('\n');
    line
}
