use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

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
            Ok(tabulate(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Arrays of objects become one row per element with the union of keys as
/// columns; a single object becomes key/value rows; anything else is one
/// cell.
fn tabulate(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut columns: Vec<&str> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    columns
                        .iter()
                        .map(|col| map.get(*col).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect();
            render_table(&columns, &rows, options)
        }
        Value::Array(items) => {
            let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
            render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect();
            render_table(&["field", "value"], &rows, options)
        }
        scalar => render_table(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{TableOptions, render, tabulate};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        score: u8,
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_render_is_pretty() {
        let out = render(&Row { id: "acmi", score: 87 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["score"], 87);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_one_line() {
        let out = render(&Row { id: "acmi", score: 87 }, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"id":"acmi","score":87}"#);
    }

    #[test]
    fn arrays_of_objects_get_a_column_per_key() {
        let value = serde_json::json!([
            { "id": "acmi", "score": 87 },
            { "id": "metro", "plan": "basic" }
        ]);
        let out = tabulate(&value, PLAIN);
        let header = out.lines().next().unwrap();
        for column in ["id", "score", "plan"] {
            assert!(header.contains(column), "{header}");
        }
        assert!(out.lines().nth(3).unwrap().contains('-'));
    }

    #[test]
    fn objects_render_as_field_rows() {
        let out = tabulate(&serde_json::json!({ "switched": true, "tenant": null }), PLAIN);
        assert!(out.starts_with("field"));
        assert!(out.contains("switched"));
        assert!(out.contains("true"));
    }

    #[test]
    fn empty_arrays_say_so() {
        assert_eq!(tabulate(&serde_json::json!([]), PLAIN), "(no rows)");
    }
}
