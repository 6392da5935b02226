use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Long text fields left out of list tables; `get` still shows them.
const LIST_HIDDEN: [&str; 4] = ["description", "content", "createdAt", "updatedAt"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => list_table(&items, options),
        Value::Object(map) => record_table(map, options),
        scalar => cell(&scalar),
    }
}

/// One row per item. Columns are the union of keys, `id` first.
fn list_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push_row(vec![cell(item)]);
        }
        return table.render(options);
    }

    let mut columns: Vec<&str> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
        if !LIST_HIDDEN.contains(&key.as_str()) && !columns.contains(&key.as_str()) {
            columns.push(key.as_str());
        }
    }
    columns.sort_by_key(|column| (*column != "id", *column));

    let mut table = Table::new(columns.iter().copied());
    for map in items.iter().filter_map(Value::as_object) {
        table.push_row(
            columns
                .iter()
                .map(|column| map.get(*column).map_or_else(|| "-".to_string(), cell))
                .collect(),
        );
    }
    table.render(options)
}

/// A field/value table for one record. Nested objects are flattened to
/// dotted keys; nested lists follow as their own titled tables.
fn record_table(map: Map<String, Value>, options: TableOptions) -> String {
    let mut fields = Vec::new();
    let mut sections = Vec::new();
    flatten("", map, &mut fields, &mut sections);

    let mut out = String::new();
    if !fields.is_empty() {
        let mut table = Table::new(["field", "value"]);
        for (key, value) in fields {
            table.push_row(vec![key, value]);
        }
        out.push_str(&table.render(options));
    }
    for (name, items) in sections {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&name);
        out.push('\n');
        out.push_str(&list_table(&items, options));
    }
    out
}

fn flatten(
    prefix: &str,
    map: Map<String, Value>,
    fields: &mut Vec<(String, String)>,
    sections: &mut Vec<(String, Vec<Value>)>,
) {
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => flatten(&key, inner, fields, sections),
            Value::Array(items) if items.iter().any(Value::is_object) => {
                sections.push((key, items));
            }
            other => fields.push((key, cell(&other))),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn list_puts_id_first_and_hides_long_text() {
        let courses = json!([
            { "title": "Rust", "id": "crs_1", "description": "long", "price": 49.0 },
            { "title": "Go", "id": "crs_2", "description": "long", "price": 0 }
        ]);
        let out = render(&courses, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");

        assert!(header.starts_with("id"));
        assert!(!header.contains("description"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn record_flattens_nested_objects_and_lists_sections() {
        let detail = json!({
            "course": { "id": "crs_1", "title": "Rust" },
            "panel": {
                "view": "in_progress",
                "actions": [{ "label": "Continue Learning", "enabled": true }]
            }
        });
        let out = render(&detail, OutputFormat::Table).expect("table render should work");

        assert!(out.contains("course.title"));
        assert!(out.contains("panel.view"));
        assert!(out.contains("\n\npanel.actions\n"));
        assert!(out.contains("Continue Learning"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&json!([]), OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
