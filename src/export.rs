//! JSON interchange for process lists.
//!
//! The export format is a pretty-printed JSON array of processes with field
//! order `id`, `arrivalTime`, `burstTime`, `priority`:
//!
//! ```json
//! [
//!   {
//!     "id": "P1",
//!     "arrivalTime": 0,
//!     "burstTime": 5,
//!     "priority": 1
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Process;

/// Serializes processes to pretty-printed JSON.
///
/// # Errors
/// [`Error::EmptyExport`] if `processes` is empty.
pub fn to_json(processes: &[Process]) -> Result<String> {
    if processes.is_empty() {
        return Err(Error::EmptyExport);
    }
    Ok(serde_json::to_string_pretty(processes)?)
}

/// Parses a process list. Missing priorities default to 1.
///
/// The list is not validated; run [`crate::validation::validate_processes`]
/// or go through [`crate::scheduler::Simulator`].
pub fn from_json(json: &str) -> Result<Vec<Process>> {
    Ok(serde_json::from_str(json)?)
}

/// Writes processes to `path` in the export format.
pub fn write_file(path: impl AsRef<Path>, processes: &[Process]) -> Result<()> {
    let json = to_json(processes)?;
    fs::write(path.as_ref(), json)?;
    tracing::debug!(path = %path.as_ref().display(), count = processes.len(), "exported processes");
    Ok(())
}

/// Reads a process list from `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let json = fs::read_to_string(path.as_ref())?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_layout() {
        let processes = vec![Process::new("P1", 5).with_arrival(2).with_priority(3)];
        let json = to_json(&processes).unwrap();
        let expected = r#"[
  {
    "id": "P1",
    "arrivalTime": 2,
    "burstTime": 5,
    "priority": 3
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_export_refused() {
        assert!(matches!(to_json(&[]), Err(Error::EmptyExport)));
    }

    #[test]
    fn test_from_json_defaults_priority() {
        let processes =
            from_json(r#"[{"id":"A","arrivalTime":0,"burstTime":3},{"id":"B","arrivalTime":1,"burstTime":2,"priority":0}]"#)
                .unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].priority, 1);
        assert_eq!(processes[1].priority, 0);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(from_json("{not json"), Err(Error::Json(_))));
        assert!(matches!(
            from_json(r#"[{"id":"A","burstTime":3}]"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/cpu-schedule/processes.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
