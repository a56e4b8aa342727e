//! Count report across all entity tables.

use std::fmt;

use serde::Serialize;

use crate::entity::EntityKind;
use crate::table::Tables;

pub const REPORT_HEADING: &str = "Report Generated:";

/// Point-in-time row counts, one per entity kind in report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    counts: Vec<(EntityKind, usize)>,
}

impl Report {
    pub fn from_tables(tables: &Tables) -> Self {
        Self {
            counts: tables.iter().map(|table| (table.kind(), table.len())).collect(),
        }
    }

    pub fn heading(&self) -> &'static str {
        REPORT_HEADING
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }

    pub fn counts(&self) -> &[(EntityKind, usize)] {
        &self.counts
    }

    /// `Total Patients: 2`, one per kind
    pub fn lines(&self) -> Vec<String> {
        self.counts
            .iter()
            .map(|(kind, n)| format!("Total {}: {}", kind.report_label(), n))
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADING)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
