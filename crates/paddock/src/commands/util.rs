//! Shared helpers for command handlers.

use std::io::{IsTerminal, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;

use paddock_core::{Facility, LoadReport};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Populate the store, with a spinner while the requests are in flight.
///
/// Never fails: degraded sources are reported on stderr and the command
/// carries on with whatever did load.
pub async fn load(facility: &Facility, global: &GlobalOpts) -> LoadReport {
    let spinner = if global.quiet || !std::io::stderr().is_terminal() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    spinner.set_message("Loading facility data...");

    let report = facility.load().await;
    spinner.finish_and_clear();

    if !report.is_complete() {
        let failed: Vec<String> = report.failed.iter().map(ToString::to_string).collect();
        output::notice(
            global,
            &format!("warning: could not load {}; showing partial data", failed.join(", ")),
        );
    }
    report
}

/// Unwrap a snapshot lookup or report the id as missing.
pub fn require<T>(
    found: Option<Arc<T>>,
    resource_type: &str,
    identifier: &str,
    list_command: &str,
) -> Result<Arc<T>, CliError> {
    found.ok_or_else(|| CliError::NotFound {
        resource_type: resource_type.into(),
        identifier: identifier.into(),
        list_command: list_command.into(),
    })
}

/// Parse a case-insensitive enum value, listing the accepted values on error.
pub fn parse_enum<E>(field: &str, value: &str) -> Result<E, CliError>
where
    E: FromStr + IntoEnumIterator + std::fmt::Display,
{
    value.trim().parse().map_err(|_| {
        let accepted: Vec<String> = E::iter().map(|v| v.to_string()).collect();
        CliError::Validation {
            field: field.into(),
            reason: format!("'{value}' is not one of: {}", accepted.join(", ")),
        }
    })
}

/// Parse an optional enum flag.
pub fn parse_opt_enum<E>(field: &str, value: Option<&str>) -> Result<Option<E>, CliError>
where
    E: FromStr + IntoEnumIterator + std::fmt::Display,
{
    value.map(|v| parse_enum(field, v)).transpose()
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON request body for `--from-file`. `-` reads stdin.
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use paddock_core::{AnimalStatus, StockStatus, UpdateInventoryItemRequest};

    use super::*;

    #[test]
    fn parses_multi_word_enum_values() {
        let status: AnimalStatus = parse_enum("status", "under care").unwrap();
        assert_eq!(status, AnimalStatus::UnderCare);

        let stock: StockStatus = parse_enum("status", " Low Stock ").unwrap();
        assert_eq!(stock, StockStatus::LowStock);
    }

    #[test]
    fn enum_error_lists_accepted_values() {
        let err = parse_enum::<AnimalStatus>("status", "Asleep").unwrap_err();
        let CliError::Validation { field, reason } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field, "status");
        assert!(reason.contains("Healthy"));
        assert!(reason.contains("Under Care"));
    }

    #[test]
    fn reads_json_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "quantity": 40 }}"#).unwrap();

        let req: UpdateInventoryItemRequest = read_payload(file.path()).unwrap();
        assert_eq!(req.quantity, Some(40.0));
        assert_eq!(req.name, None);
    }

    #[test]
    fn malformed_payload_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = read_payload::<UpdateInventoryItemRequest>(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn missing_lookup_is_not_found() {
        let err = require::<u8>(None, "Animal", "A404", "animals list").unwrap_err();
        assert_eq!(err.to_string(), "Animal 'A404' not found");
    }
}
