//! Value types shared by the backup and plan modules.
//!
//! These replace loose strings with typed values: backup timestamps are
//! parsed and formatted in exactly one place, and the invoice tabs named by
//! the plan are an enum rather than free text.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// chrono format for the timestamp embedded in backup file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Length of a rendered timestamp: 8 date digits, `_`, 6 time digits.
const TIMESTAMP_LEN: usize = 15;

/// Error returned when a string is not a `YYYYMMDD_HHMMSS` timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid backup timestamp '{0}': expected YYYYMMDD_HHMMSS")]
pub struct TimestampParseError(pub String);

/// Local wall-clock time at second granularity, rendered as `YYYYMMDD_HHMMSS`.
///
/// Two timestamps taken within the same second compare equal, so two backups
/// made in that second share a destination name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackupTimestamp(NaiveDateTime);

impl BackupTimestamp {
    /// Capture the current local time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Wrap an existing date-time, dropping sub-second precision.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        let truncated = datetime.with_nanosecond(0).unwrap_or(datetime);
        Self(truncated)
    }

    /// The wrapped date-time.
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for BackupTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for BackupTimestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono's %Y accepts signs and extra digits, so check the shape first
        let shape_ok = s.len() == TIMESTAMP_LEN
            && s.char_indices().all(|(i, c)| {
                if i == 8 {
                    c == '_'
                } else {
                    c.is_ascii_digit()
                }
            });
        if !shape_ok {
            return Err(TimestampParseError(s.to_string()));
        }

        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TimestampParseError(s.to_string()))
    }
}

/// The three tabs of the redesigned invoice create page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum InvoiceTab {
    #[strum(serialize = "Create Invoice")]
    CreateInvoice,
    #[strum(serialize = "Signature Settings")]
    SignatureSettings,
    #[strum(serialize = "Notes & Terms")]
    NotesAndTerms,
}

impl InvoiceTab {
    /// 1-based position of the tab in the tab list
    pub fn number(self) -> usize {
        match self {
            Self::CreateInvoice => 1,
            Self::SignatureSettings => 2,
            Self::NotesAndTerms => 3,
        }
    }
}
