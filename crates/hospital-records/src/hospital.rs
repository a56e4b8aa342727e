//! Hospital desk state
//!
//! The recorded side of the desk: the five tables and the last report.
//! Form drafts ([`Drafts`]) and the visible section ([`Navigator`]) are
//! separate state objects, so typing or navigating never touches the
//! tables.
//!
//! [`Navigator`]: crate::Navigator

use crate::config::DeskConfig;
use crate::entity::{EntityKind, Row};
use crate::error::RecordResult;
use crate::form::{
    AppointmentForm, BillForm, DoctorForm, Drafts, FieldValues, FormData, LabTestForm,
    PatientForm, Record,
};
use crate::report::Report;
use crate::table::{Table, Tables};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hospital {
    config: DeskConfig,
    tables: Tables,
    report: Option<Report>,
}

impl Default for Hospital {
    fn default() -> Self {
        Self::new(DeskConfig::default())
    }
}

impl Hospital {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            tables: Tables::default(),
            report: None,
            config,
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn table(&self, kind: EntityKind) -> &Table {
        self.tables.get(kind)
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    // ========================
    // Submission
    // ========================

    /// Submit the current draft of `kind`.
    ///
    /// On success the row is appended and that draft cleared. On failure
    /// neither the table nor the draft changes.
    pub fn submit(&mut self, drafts: &mut Drafts, kind: EntityKind) -> RecordResult<Row> {
        let row = self.record(kind, drafts.get(kind))?;
        drafts.reset(kind);
        Ok(row)
    }

    /// Parse raw values into the typed form for `kind` and record it
    pub fn record(&mut self, kind: EntityKind, values: &FieldValues) -> RecordResult<Row> {
        match FormData::parse(kind, values)? {
            FormData::Patient(form) => self.add_patient(form),
            FormData::Doctor(form) => self.add_doctor(form),
            FormData::Appointment(form) => self.add_appointment(form),
            FormData::LabTest(form) => self.add_lab_test(form),
            FormData::Bill(form) => self.add_bill(form),
        }
    }

    pub fn add_patient(&mut self, form: PatientForm) -> RecordResult<Row> {
        self.commit(form)
    }

    pub fn add_doctor(&mut self, form: DoctorForm) -> RecordResult<Row> {
        self.commit(form)
    }

    pub fn add_appointment(&mut self, form: AppointmentForm) -> RecordResult<Row> {
        self.commit(form)
    }

    pub fn add_lab_test(&mut self, form: LabTestForm) -> RecordResult<Row> {
        self.commit(form)
    }

    pub fn add_bill(&mut self, form: BillForm) -> RecordResult<Row> {
        self.commit(form)
    }

    fn commit<R: Record>(&mut self, form: R) -> RecordResult<Row> {
        if let Err(err) = form.validate(self.config.policy) {
            log::warn!("rejected {} submission: {}", R::KIND, err);
            return Err(err);
        }
        let row = form.into_row(&self.config);
        let row = self.tables.get_mut(R::KIND).push(row).clone();
        log::debug!(
            "recorded {} #{}: {:?}",
            R::KIND,
            self.tables.get(R::KIND).len(),
            row.cells()
        );
        Ok(row)
    }

    // ========================
    // Reports
    // ========================

    /// Count every table and replace the report region
    pub fn generate_report(&mut self) -> &Report {
        let report = Report::from_tables(&self.tables);
        log::debug!("report generated: {:?}", report.counts());
        self.report.insert(report)
    }

    /// Last generated report, if any
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }
}
