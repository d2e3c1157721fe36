//! Parameter and context-file input shared by `eval` and `call`.

use std::fs::read_to_string;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};

use tagwright::{Data, Value};
use thiserror::Error;

/// Failure to load command input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read context file {}: {source}", path.display())]
    Read { path: PathBuf, source: IoError },

    #[error("invalid JSON in context file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("context file {} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

impl InputError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Read { .. } => exitcode::NOINPUT,
            InputError::Json { .. } | InputError::NotAnObject { .. } => exitcode::DATAERR,
        }
    }
}

/// Parse a key=value parameter string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Convert `-p` pairs into tag parameters. Integers become numbers.
pub fn params_from_pairs(pairs: Vec<(String, String)>) -> Data {
    pairs
        .into_iter()
        .map(|(key, value)| {
            let value = match value.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value),
            };
            (key, value)
        })
        .collect()
}

/// Load a JSON object as context data. No path means an empty context.
pub fn load_context(path: Option<&Path>) -> Result<Data, InputError> {
    let Some(path) = path else {
        return Ok(Data::new());
    };
    let content = read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    value.into_map().ok_or_else(|| InputError::NotAnObject {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("title").is_err());
    }

    #[test]
    fn integer_params_become_numbers() {
        let params = params_from_pairs(vec![
            ("times".to_string(), "3".to_string()),
            ("name".to_string(), "Ada".to_string()),
        ]);
        assert_eq!(params["times"], Value::from(3));
        assert_eq!(params["name"], Value::from("Ada"));
    }

    #[test]
    fn context_file_loads_nested_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.json");
        write(&path, r#"{"site": {"name": "Docs"}, "pages": [1, 2]}"#).unwrap();

        let data = load_context(Some(&path)).unwrap();

        assert_eq!(
            data["site"].get_path("name"),
            Some(&Value::from("Docs"))
        );
        assert_eq!(data["pages"], Value::from(vec![1, 2]));
    }

    #[test]
    fn context_file_must_be_an_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.json");
        write(&path, "[1, 2]").unwrap();

        let err = load_context(Some(&path)).unwrap_err();
        assert!(matches!(err, InputError::NotAnObject { .. }));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn missing_context_file_is_no_input() {
        let dir = tempdir().unwrap();
        let err = load_context(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn no_context_file_is_empty_context() {
        assert!(load_context(None).unwrap().is_empty());
    }
}
