use std::collections::BTreeMap;

use serde::Serialize;

use crate::coordinate::CoordinateRecord;
use crate::issue::{Issue, IssueKind};

/// Outcome of a validation run that got past the structural checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Number of data rows read.
    #[serde(skip)]
    pub row_count: usize,
    #[serde(rename = "coordenadas")]
    pub coordinates: Vec<CoordinateRecord>,
    #[serde(rename = "errores")]
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Rows that did not make it into `coordinates`.
    pub fn rejected_count(&self) -> usize {
        self.row_count.saturating_sub(self.coordinates.len())
    }

    pub fn issue_counts(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.kind()).or_insert(0) += 1;
        }
        counts
    }
}

/// Envelope returned to callers: either a report or a structural failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Ok(ValidationReport),
    Error { message: String },
}

impl ValidationResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Ok(report) => Some(report),
            Self::Error { .. } => None,
        }
    }

    /// True when the run failed structurally or reported any issue.
    pub fn is_rejected(&self) -> bool {
        self.report().is_none_or(ValidationReport::has_issues)
    }
}
