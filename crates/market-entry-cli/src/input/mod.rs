pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Load the command's JSON document from `--input`, else from piped stdin.
pub fn load_value(path: Option<&str>, what: &str) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, what, "reading input file");
        file::read_json_value(path)
    } else if let Some(data) = stdin::read_stdin()? {
        tracing::debug!(what, "read input from stdin");
        Ok(data)
    } else {
        Err(format!("--input file (or piped JSON) is required: {what}").into())
    }
}

/// Load and deserialise the command's JSON document.
pub fn load<T: DeserializeOwned>(path: Option<&str>, what: &str) -> Result<T, Box<dyn std::error::Error>> {
    let value = load_value(path, what)?;
    Ok(serde_json::from_value(value)?)
}
