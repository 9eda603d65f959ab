use serde_json::Value;

use super::cell;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field of the result object. A ranked list prints one line per
/// entry.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "global_score",
        "is_consistent",
        "total_score",
        "suitability_score",
        "score",
        "decision",
        "value",
        "key",
    ];

    match result_obj {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("rankings") {
                print_rows(rows, &priority_keys);
                return;
            }
            if let Some(line) = first_priority(map, &priority_keys) {
                println!("{}", line);
                return;
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, cell(val));
                return;
            }
        }
        Value::Array(rows) => {
            print_rows(rows, &priority_keys);
            return;
        }
        _ => {}
    }

    println!("{}", cell(result_obj));
}

fn first_priority(map: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
        .map(cell)
}

/// One `label: value` line per row, labelled by its name, title or key.
fn print_rows(rows: &[Value], keys: &[&str]) {
    for row in rows {
        if let Value::Object(map) = row {
            let label = ["name", "title", "key"]
                .iter()
                .filter_map(|k| map.get(*k))
                .next()
                .or_else(|| map.get("country"))
                .map(cell)
                .unwrap_or_default();
            let answer = first_priority(map, keys).unwrap_or_default();
            println!("{}: {}", label, answer);
        } else {
            println!("{}", cell(row));
        }
    }
}
