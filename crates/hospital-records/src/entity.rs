//! Entity Kinds and Rows
//!
//! The five record kinds the desk knows about, the fixed layout of their
//! forms and tables, and the display row a submission turns into.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Kind of record a form produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
    LabTest,
    Bill,
}

/// How a form field is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    /// Drop-down with a blank first option
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` fields
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Text | FieldKind::Choice(_) => "text",
        }
    }
}

/// One named input of an entity form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// DOM id of the input, also the key in a draft
    pub id: &'static str,
    /// Column header and input label
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

const PATIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "pname", label: "Name", kind: FieldKind::Text },
    FieldSpec { id: "page", label: "Age", kind: FieldKind::Number },
    FieldSpec { id: "pgender", label: "Gender", kind: FieldKind::Choice(GENDERS) },
];

const DOCTOR_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "dname", label: "Name", kind: FieldKind::Text },
    FieldSpec { id: "dspecial", label: "Specialization", kind: FieldKind::Text },
];

const APPOINTMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "aname", label: "Patient", kind: FieldKind::Text },
    FieldSpec { id: "adoctor", label: "Doctor", kind: FieldKind::Text },
    FieldSpec { id: "adate", label: "Date", kind: FieldKind::Date },
];

const LAB_TEST_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "ltpatient", label: "Patient", kind: FieldKind::Text },
    FieldSpec { id: "lttest", label: "Test", kind: FieldKind::Text },
];

const BILL_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "bpatient", label: "Patient", kind: FieldKind::Text },
    FieldSpec { id: "bamount", label: "Amount", kind: FieldKind::Number },
];

impl EntityKind {
    /// All kinds in report order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Patient,
        EntityKind::Doctor,
        EntityKind::Appointment,
        EntityKind::LabTest,
        EntityKind::Bill,
    ];

    /// Position in [`EntityKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            EntityKind::Patient => 0,
            EntityKind::Doctor => 1,
            EntityKind::Appointment => 2,
            EntityKind::LabTest => 3,
            EntityKind::Bill => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Doctor => "doctor",
            EntityKind::Appointment => "appointment",
            EntityKind::LabTest => "lab_test",
            EntityKind::Bill => "bill",
        }
    }

    /// Human-readable singular name
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::LabTest => "lab test",
            other => other.as_str(),
        }
    }

    /// Plural name used in report lines
    pub fn report_label(&self) -> &'static str {
        match self {
            EntityKind::Patient => "Patients",
            EntityKind::Doctor => "Doctors",
            EntityKind::Appointment => "Appointments",
            EntityKind::LabTest => "Lab Tests",
            EntityKind::Bill => "Bills",
        }
    }

    pub fn table_id(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patientTable",
            EntityKind::Doctor => "doctorTable",
            EntityKind::Appointment => "appointmentTable",
            EntityKind::LabTest => "labTable",
            EntityKind::Bill => "billTable",
        }
    }

    pub fn form_id(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patientForm",
            EntityKind::Doctor => "doctorForm",
            EntityKind::Appointment => "appointmentForm",
            EntityKind::LabTest => "labForm",
            EntityKind::Bill => "billForm",
        }
    }

    /// Form fields, in table column order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Patient => PATIENT_FIELDS,
            EntityKind::Doctor => DOCTOR_FIELDS,
            EntityKind::Appointment => APPOINTMENT_FIELDS,
            EntityKind::LabTest => LAB_TEST_FIELDS,
            EntityKind::Bill => BILL_FIELDS,
        }
    }

    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.id == id)
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|field| field.label)
    }

    /// Page section holding this kind's form and table
    pub fn section(&self) -> Section {
        match self {
            EntityKind::Patient => Section::Patients,
            EntityKind::Doctor => Section::Doctors,
            EntityKind::Appointment => Section::Appointments,
            EntityKind::LabTest => Section::LabTests,
            EntityKind::Bill => Section::Billing,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded entity, stored as display strings in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    kind: EntityKind,
    cells: Vec<String>,
}

impl Row {
    pub(crate) fn new(kind: EntityKind, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), kind.fields().len());
        Self { kind, cells }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Case-insensitive substring match against any cell.
    /// `needle` must already be lowercase.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_layout_matches_columns() {
        let columns: Vec<_> = EntityKind::Appointment.columns().collect();
        assert_eq!(columns, vec!["Patient", "Doctor", "Date"]);

        let ids: Vec<_> = EntityKind::Patient.fields().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["pname", "page", "pgender"]);
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(EntityKind::Bill.field("bamount").map(|f| f.label), Some("Amount"));
        assert!(EntityKind::Bill.field("pname").is_none());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in EntityKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(EntityKind::LabTest.to_string(), "lab test");
        assert_eq!(EntityKind::LabTest.report_label(), "Lab Tests");
        assert_eq!(EntityKind::LabTest.table_id(), "labTable");
    }

    #[test]
    fn test_every_kind_has_own_section() {
        let sections: HashSet<_> = EntityKind::ALL.iter().map(|k| k.section()).collect();
        assert_eq!(sections.len(), EntityKind::ALL.len());
        assert!(!sections.contains(&Section::Reports));
    }

    #[test]
    fn test_row_contains_is_case_insensitive() {
        let row = Row::new(
            EntityKind::Doctor,
            vec!["Dr. A. Sen".to_string(), "Cardiology".to_string()],
        );
        assert!(row.contains_lowercase("cardio"));
        assert!(row.contains_lowercase("sen"));
        assert!(!row.contains_lowercase("ortho"));
    }
}
