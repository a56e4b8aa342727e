//! Append-only record tables, one per entity kind.

use crate::entity::{EntityKind, Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    kind: EntityKind,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn push(&mut self, row: Row) -> &Row {
        debug_assert_eq!(row.kind(), self.kind);
        self.rows.push(row);
        &self.rows[self.rows.len() - 1]
    }

    /// Rows with any cell containing `query`, ignoring case.
    /// A blank query matches everything.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Row> + 'a {
        let needle = query.trim().to_lowercase();
        self.rows
            .iter()
            .filter(move |row| needle.is_empty() || row.contains_lowercase(&needle))
    }
}

/// The five tables of the desk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    patients: Table,
    doctors: Table,
    appointments: Table,
    lab_tests: Table,
    bills: Table,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            patients: Table::new(EntityKind::Patient),
            doctors: Table::new(EntityKind::Doctor),
            appointments: Table::new(EntityKind::Appointment),
            lab_tests: Table::new(EntityKind::LabTest),
            bills: Table::new(EntityKind::Bill),
        }
    }
}

impl Tables {
    pub fn get(&self, kind: EntityKind) -> &Table {
        match kind {
            EntityKind::Patient => &self.patients,
            EntityKind::Doctor => &self.doctors,
            EntityKind::Appointment => &self.appointments,
            EntityKind::LabTest => &self.lab_tests,
            EntityKind::Bill => &self.bills,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: EntityKind) -> &mut Table {
        match kind {
            EntityKind::Patient => &mut self.patients,
            EntityKind::Doctor => &mut self.doctors,
            EntityKind::Appointment => &mut self.appointments,
            EntityKind::LabTest => &mut self.lab_tests,
            EntityKind::Bill => &mut self.bills,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        EntityKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_row(patient: &str, test: &str) -> Row {
        Row::new(EntityKind::LabTest, vec![patient.to_string(), test.to_string()])
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut table = Table::new(EntityKind::LabTest);
        assert!(table.is_empty());
        table.push(lab_row("S. Chatterjee", "CBC"));
        let last = table.push(lab_row("M. Das", "ECG")).clone();
        assert_eq!(table.len(), 2);
        assert_eq!(last.cells()[1], "ECG");
        assert_eq!(table.rows()[0].cells()[1], "CBC");
    }

    #[test]
    fn test_filter_is_view_only() {
        let mut table = Table::new(EntityKind::LabTest);
        table.push(lab_row("S. Chatterjee", "CBC"));
        table.push(lab_row("M. Das", "ECG"));
        table.push(lab_row("M. Das", "Lipid Profile"));

        let das: Vec<_> = table.filter("  DAS ").collect();
        assert_eq!(das.len(), 2);
        assert_eq!(table.filter("").count(), 3);
        assert_eq!(table.filter("x-ray").count(), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_tables_iterate_in_report_order() {
        let tables = Tables::default();
        let kinds: Vec<_> = tables.iter().map(Table::kind).collect();
        assert_eq!(kinds, EntityKind::ALL.to_vec());
    }
}
