//! Typed Entity Forms
//!
//! Raw field values come in from the page as strings keyed by input id.
//! They are parsed into one typed form per entity at the boundary, checked
//! against the active [`SubmissionPolicy`], and only then become a [`Row`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DeskConfig;
use crate::entity::{EntityKind, Row};
use crate::error::{RecordError, RecordResult};

/// How much checking a submission gets before it is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Accept whatever the browser accepts, empty strings included
    #[default]
    Lenient,
    /// Require non-blank fields and well-formed age, date and amount
    Strict,
}

/// Raw form values keyed by input id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    /// Every field of `kind`, set to the empty string
    pub fn blank(kind: EntityKind) -> Self {
        kind.fields()
            .iter()
            .map(|field| (field.id, String::new()))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(id.into(), value.into());
    }

    pub fn is_blank(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Empty every value, keeping the keys
    pub fn clear_values(&mut self) {
        self.0.values_mut().for_each(String::clear);
    }

    fn take(&self, entity: EntityKind, field: &'static str) -> RecordResult<String> {
        self.get(field)
            .map(str::to_string)
            .ok_or(RecordError::MissingField { entity, field })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// In-progress values of the five forms, one draft per entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drafts([FieldValues; 5]);

impl Default for Drafts {
    fn default() -> Self {
        Self(EntityKind::ALL.map(FieldValues::blank))
    }
}

impl Drafts {
    pub fn get(&self, kind: EntityKind) -> &FieldValues {
        &self.0[kind.index()]
    }

    /// Value of one draft field; empty for unknown ids
    pub fn value(&self, kind: EntityKind, field: &str) -> &str {
        self.get(kind).get(field).unwrap_or_default()
    }

    /// Update one field of a form as the user types
    pub fn set_field(
        &mut self,
        kind: EntityKind,
        field: &str,
        value: impl Into<String>,
    ) -> RecordResult<()> {
        let field_spec = kind.field(field).ok_or_else(|| RecordError::UnknownField {
            entity: kind,
            field: field.to_string(),
        })?;
        self.0[kind.index()].insert(field_spec.id, value);
        Ok(())
    }

    /// Empty every field of a form
    pub fn reset(&mut self, kind: EntityKind) {
        self.0[kind.index()].clear_values();
    }
}

/// A typed form for one entity kind
pub trait Record: Sized {
    const KIND: EntityKind;

    /// Read every field this form needs; absent fields are an error
    fn from_fields(values: &FieldValues) -> RecordResult<Self>;

    /// Checks beyond presence, driven by `policy`
    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()>;

    /// Display cells in column order
    fn into_cells(self, config: &DeskConfig) -> Vec<String>;

    fn into_row(self, config: &DeskConfig) -> Row {
        Row::new(Self::KIND, self.into_cells(config))
    }
}

fn require(entity: EntityKind, field: &'static str, value: &str) -> RecordResult<()> {
    if value.trim().is_empty() {
        return Err(RecordError::EmptyField { entity, field });
    }
    Ok(())
}

const MAX_AGE: u32 = 150;

fn check_age(value: &str) -> RecordResult<()> {
    match value.trim().parse::<u32>() {
        Ok(age) if age <= MAX_AGE => Ok(()),
        _ => Err(RecordError::InvalidAge(value.to_string())),
    }
}

fn check_date(value: &str) -> RecordResult<()> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| RecordError::InvalidDate(value.to_string()))
}

fn check_amount(value: &str) -> RecordResult<()> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
        _ => Err(RecordError::InvalidAmount(value.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
}

impl Record for PatientForm {
    const KIND: EntityKind = EntityKind::Patient;

    fn from_fields(values: &FieldValues) -> RecordResult<Self> {
        Ok(Self {
            name: values.take(Self::KIND, "pname")?,
            age: values.take(Self::KIND, "page")?,
            gender: values.take(Self::KIND, "pgender")?,
        })
    }

    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()> {
        if policy == SubmissionPolicy::Lenient {
            return Ok(());
        }
        require(Self::KIND, "pname", &self.name)?;
        require(Self::KIND, "page", &self.age)?;
        require(Self::KIND, "pgender", &self.gender)?;
        check_age(&self.age)
    }

    fn into_cells(self, _config: &DeskConfig) -> Vec<String> {
        vec![self.name, self.age, self.gender]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorForm {
    pub name: String,
    pub specialization: String,
}

impl Record for DoctorForm {
    const KIND: EntityKind = EntityKind::Doctor;

    fn from_fields(values: &FieldValues) -> RecordResult<Self> {
        Ok(Self {
            name: values.take(Self::KIND, "dname")?,
            specialization: values.take(Self::KIND, "dspecial")?,
        })
    }

    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()> {
        if policy == SubmissionPolicy::Lenient {
            return Ok(());
        }
        require(Self::KIND, "dname", &self.name)?;
        require(Self::KIND, "dspecial", &self.specialization)
    }

    fn into_cells(self, _config: &DeskConfig) -> Vec<String> {
        vec![self.name, self.specialization]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub patient: String,
    pub doctor: String,
    pub date: String,
}

impl Record for AppointmentForm {
    const KIND: EntityKind = EntityKind::Appointment;

    fn from_fields(values: &FieldValues) -> RecordResult<Self> {
        Ok(Self {
            patient: values.take(Self::KIND, "aname")?,
            doctor: values.take(Self::KIND, "adoctor")?,
            date: values.take(Self::KIND, "adate")?,
        })
    }

    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()> {
        if policy == SubmissionPolicy::Lenient {
            return Ok(());
        }
        require(Self::KIND, "aname", &self.patient)?;
        require(Self::KIND, "adoctor", &self.doctor)?;
        require(Self::KIND, "adate", &self.date)?;
        check_date(&self.date)
    }

    fn into_cells(self, _config: &DeskConfig) -> Vec<String> {
        vec![self.patient, self.doctor, self.date]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabTestForm {
    pub patient: String,
    pub test: String,
}

impl Record for LabTestForm {
    const KIND: EntityKind = EntityKind::LabTest;

    fn from_fields(values: &FieldValues) -> RecordResult<Self> {
        Ok(Self {
            patient: values.take(Self::KIND, "ltpatient")?,
            test: values.take(Self::KIND, "lttest")?,
        })
    }

    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()> {
        if policy == SubmissionPolicy::Lenient {
            return Ok(());
        }
        require(Self::KIND, "ltpatient", &self.patient)?;
        require(Self::KIND, "lttest", &self.test)
    }

    fn into_cells(self, _config: &DeskConfig) -> Vec<String> {
        vec![self.patient, self.test]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub patient: String,
    /// Kept exactly as typed; never parsed for display
    pub amount: String,
}

impl Record for BillForm {
    const KIND: EntityKind = EntityKind::Bill;

    fn from_fields(values: &FieldValues) -> RecordResult<Self> {
        Ok(Self {
            patient: values.take(Self::KIND, "bpatient")?,
            amount: values.take(Self::KIND, "bamount")?,
        })
    }

    fn validate(&self, policy: SubmissionPolicy) -> RecordResult<()> {
        if policy == SubmissionPolicy::Lenient {
            return Ok(());
        }
        require(Self::KIND, "bpatient", &self.patient)?;
        require(Self::KIND, "bamount", &self.amount)?;
        check_amount(&self.amount)
    }

    fn into_cells(self, config: &DeskConfig) -> Vec<String> {
        vec![
            self.patient,
            format!("{}{}", config.currency_symbol, self.amount),
        ]
    }
}

/// A parsed submission of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormData {
    Patient(PatientForm),
    Doctor(DoctorForm),
    Appointment(AppointmentForm),
    LabTest(LabTestForm),
    Bill(BillForm),
}

impl FormData {
    pub fn parse(kind: EntityKind, values: &FieldValues) -> RecordResult<Self> {
        Ok(match kind {
            EntityKind::Patient => FormData::Patient(PatientForm::from_fields(values)?),
            EntityKind::Doctor => FormData::Doctor(DoctorForm::from_fields(values)?),
            EntityKind::Appointment => {
                FormData::Appointment(AppointmentForm::from_fields(values)?)
            }
            EntityKind::LabTest => FormData::LabTest(LabTestForm::from_fields(values)?),
            EntityKind::Bill => FormData::Bill(BillForm::from_fields(values)?),
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(patient: &str, amount: &str) -> BillForm {
        BillForm {
            patient: patient.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_blank_has_every_field_of_kind() {
        let values = FieldValues::blank(EntityKind::Appointment);
        assert_eq!(values.get("aname"), Some(""));
        assert_eq!(values.get("adoctor"), Some(""));
        assert_eq!(values.get("adate"), Some(""));
        assert_eq!(values.get("pname"), None);
        assert!(values.is_blank());
    }

    #[test]
    fn test_clear_values_keeps_keys() {
        let mut values: FieldValues = [("dname", "Dr. Rao"), ("dspecial", "ENT")]
            .into_iter()
            .collect();
        assert!(!values.is_blank());
        values.clear_values();
        assert_eq!(values, FieldValues::blank(EntityKind::Doctor));
    }

    #[test]
    fn test_drafts_start_blank_and_reset_per_kind() {
        let mut drafts = Drafts::default();
        assert!(EntityKind::ALL.iter().all(|&kind| drafts.get(kind).is_blank()));

        drafts.set_field(EntityKind::Bill, "bamount", "600").unwrap();
        drafts.set_field(EntityKind::Doctor, "dname", "Dr. Rao").unwrap();
        assert_eq!(drafts.value(EntityKind::Bill, "bamount"), "600");
        assert_eq!(drafts.value(EntityKind::Bill, "nope"), "");

        drafts.reset(EntityKind::Bill);
        assert!(drafts.get(EntityKind::Bill).is_blank());
        assert_eq!(drafts.value(EntityKind::Doctor, "dname"), "Dr. Rao");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let values: FieldValues = [("pname", "Asha"), ("page", "31")].into_iter().collect();
        let err = PatientForm::from_fields(&values).expect_err("gender is absent");
        assert!(matches!(
            err,
            RecordError::MissingField { entity: EntityKind::Patient, field: "pgender" }
        ));
    }

    #[test]
    fn test_lenient_accepts_empty_strings() {
        let form = PatientForm::default();
        assert!(form.validate(SubmissionPolicy::Lenient).is_ok());
        assert_eq!(
            form.into_cells(&DeskConfig::default()),
            vec![String::new(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_strict_rejects_blank_and_bad_age() {
        let mut form = PatientForm {
            name: "  ".to_string(),
            age: "40".to_string(),
            gender: "Female".to_string(),
        };
        let err = form.validate(SubmissionPolicy::Strict).expect_err("blank name");
        assert!(matches!(err, RecordError::EmptyField { field: "pname", .. }));

        form.name = "M. Das".to_string();
        assert!(form.validate(SubmissionPolicy::Strict).is_ok());

        for bad in ["forty", "-3", "151", "4.5"] {
            form.age = bad.to_string();
            let err = form.validate(SubmissionPolicy::Strict).expect_err(bad);
            assert!(matches!(err, RecordError::InvalidAge(ref v) if v == bad));
        }
    }

    #[test]
    fn test_strict_date_must_be_calendar_date() {
        let mut form = AppointmentForm {
            patient: "A. Khan".to_string(),
            doctor: "Dr. R. Gupta".to_string(),
            date: "2025-09-12".to_string(),
        };
        assert!(form.validate(SubmissionPolicy::Strict).is_ok());

        for bad in ["2025-02-30", "12/09/2025", "tomorrow"] {
            form.date = bad.to_string();
            assert!(matches!(
                form.validate(SubmissionPolicy::Strict),
                Err(RecordError::InvalidDate(_))
            ));
        }
    }

    #[test]
    fn test_strict_amount_must_be_non_negative_number() {
        assert!(bill("S. Chatterjee", "100.5").validate(SubmissionPolicy::Strict).is_ok());
        assert!(bill("S. Chatterjee", "0").validate(SubmissionPolicy::Strict).is_ok());
        for bad in ["-1", "abc", "NaN", "inf"] {
            assert!(matches!(
                bill("S. Chatterjee", bad).validate(SubmissionPolicy::Strict),
                Err(RecordError::InvalidAmount(_))
            ));
        }
        assert!(bill("S. Chatterjee", "abc").validate(SubmissionPolicy::Lenient).is_ok());
    }

    #[test]
    fn test_bill_amount_is_prefixed_not_reformatted() {
        let row = bill("M. Das", "100.5").into_row(&DeskConfig::default());
        assert_eq!(row.kind(), EntityKind::Bill);
        assert_eq!(row.cells(), &["M. Das".to_string(), "₹100.5".to_string()]);
    }

    #[test]
    fn test_parse_dispatches_on_kind() {
        let values: FieldValues = [("ltpatient", "M. Das"), ("lttest", "ECG")]
            .into_iter()
            .collect();
        let parsed = FormData::parse(EntityKind::LabTest, &values).unwrap();
        assert_eq!(
            parsed,
            FormData::LabTest(LabTestForm {
                patient: "M. Das".to_string(),
                test: "ECG".to_string(),
            })
        );
        assert!(FormData::parse(EntityKind::Bill, &values).is_err());
    }
}
