//! Instance and result file I/O
//!
//! Instance files are JSON Lines: every non-blank line that does not start
//! with `#` is a JSON array of strings, where `null` marks a missing element.
//! Result files hold one JSON object per solved or rejected instance.

use crate::app::batch::BatchOutcome;
use crate::constants::{COMMENT_PREFIX, INSTANCE_FILE_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One input sequence, `None` marking a null element
pub type Instance = Vec<Option<String>>;

/// Instance file errors
#[derive(Debug, Error)]
pub enum InstanceIoError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not a JSON array of strings or nulls
    #[error("Invalid instance at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A result record could not be encoded
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An instance together with its 1-based line number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceRecord {
    pub line: usize,
    pub strings: Instance,
}

/// One line of a result file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Line of the instance in the input file
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superstring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultRecord {
    /// Build a record from a solve outcome
    pub fn from_outcome(line: usize, outcome: &BatchOutcome) -> Self {
        match outcome {
            Ok(solved) => Self {
                line,
                superstring: Some(solved.text.clone()),
                order: Some(solved.order.clone()),
                offsets: Some(solved.offsets.clone()),
                error: None,
            },
            Err(e) => Self {
                line,
                superstring: None,
                order: None,
                offsets: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Get the default result path for an instance file
///
/// Format: `{dir}/{stem}.solved.jsonl`
pub fn get_results_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}.solved.{}", stem, INSTANCE_FILE_EXTENSION))
}

/// Parse one line of an instance file
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_instance_line(text: &str, line: usize) -> Result<Option<Instance>, InstanceIoError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| InstanceIoError::Parse { line, source })
}

/// Read instances from any buffered reader
pub fn read_instances<R: BufRead>(reader: R) -> Result<Vec<InstanceRecord>, InstanceIoError> {
    let mut records = Vec::new();

    for (i, text) in reader.lines().enumerate() {
        let line = i + 1;
        if let Some(strings) = parse_instance_line(&text?, line)? {
            records.push(InstanceRecord { line, strings });
        }
    }

    Ok(records)
}

/// Load instances from a file
pub fn load_instances(path: impl AsRef<Path>) -> Result<Vec<InstanceRecord>, InstanceIoError> {
    let file = File::open(path)?;
    read_instances(BufReader::new(file))
}

/// Write result records as JSON Lines
pub fn write_results<W: Write>(
    mut writer: W,
    records: &[ResultRecord],
) -> Result<(), InstanceIoError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Save result records to a file, creating parent directories
pub fn save_results(
    path: impl AsRef<Path>,
    records: &[ResultRecord],
) -> Result<(), InstanceIoError> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    write_results(BufWriter::new(file), records)
}

/// Load result records from a file
pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<ResultRecord>, InstanceIoError> {
    let file = File::open(path)?;
    let mut records = Vec::new();

    for (i, text) in BufReader::new(file).lines().enumerate() {
        let text = text?;
        if text.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&text)
            .map_err(|source| InstanceIoError::Parse { line: i + 1, source })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::solver::Superstring;
    use crate::domain::error::SuperstringError;

    #[test]
    fn test_parse_instance_line_strings() {
        let parsed = parse_instance_line(r#"["abc", "bcd"]"#, 1).unwrap();
        assert_eq!(
            parsed,
            Some(vec![Some("abc".to_string()), Some("bcd".to_string())])
        );
    }

    #[test]
    fn test_parse_instance_line_null() {
        let parsed = parse_instance_line(r#"["a", null]"#, 1).unwrap();
        assert_eq!(parsed, Some(vec![Some("a".to_string()), None]));
    }

    #[test]
    fn test_parse_instance_line_empty_array() {
        assert_eq!(parse_instance_line("[]", 1).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_parse_instance_line_skips_blank_and_comment() {
        assert_eq!(parse_instance_line("   ", 1).unwrap(), None);
        assert_eq!(parse_instance_line("# generated", 2).unwrap(), None);
    }

    #[test]
    fn test_parse_instance_line_rejects_non_array() {
        let result = parse_instance_line(r#"{"a": 1}"#, 7);
        assert!(matches!(result, Err(InstanceIoError::Parse { line: 7, .. })));

        let result = parse_instance_line("[1, 2]", 3);
        assert!(matches!(result, Err(InstanceIoError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_read_instances_line_numbers() {
        let text = "# header\n[\"ab\"]\n\n[\"cd\", \"de\"]\n";
        let records = read_instances(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].line, 4);
        assert_eq!(records[1].strings.len(), 2);
    }

    #[test]
    fn test_result_record_from_outcome() {
        let ok: BatchOutcome = Ok(Superstring {
            text: "abcde".to_string(),
            order: vec![0, 1, 2],
            offsets: vec![0, 1, 2],
        });
        let record = ResultRecord::from_outcome(3, &ok);
        assert!(record.is_ok());
        assert_eq!(record.superstring.as_deref(), Some("abcde"));

        let err: BatchOutcome = Err(SuperstringError::InvalidInput { index: 0 });
        let record = ResultRecord::from_outcome(4, &err);
        assert!(!record.is_ok());
        assert_eq!(record.error.as_deref(), Some("Invalid input: element 0 is null"));
    }

    #[test]
    fn test_write_results_skips_absent_fields() {
        let records = vec![ResultRecord::from_outcome(
            1,
            &Err(SuperstringError::ResourceExhaustion { count: 30, limit: 16 }),
        )];
        let mut buf = Vec::new();
        write_results(&mut buf, &records).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.contains("superstring"));
        assert!(text.contains("\"line\":1"));
    }

    #[test]
    fn test_get_results_path() {
        let path = get_results_path(Path::new("data/cases.jsonl"));
        assert_eq!(path, Path::new("data/cases.solved.jsonl"));
    }
}
