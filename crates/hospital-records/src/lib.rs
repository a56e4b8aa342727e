//! Hospital Desk Records
//!
//! Layered the same way as the desk itself:
//! - entity / form: what each record kind looks like and how raw input is checked
//! - table / report: append-only storage and the count summary over it
//! - section: which page region is visible
//! - hospital: the recorded tables and report, fed from form drafts

mod config;
mod entity;
mod error;
mod form;
mod hospital;
mod report;
mod sample;
mod section;
mod table;


pub use config::{DeskConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_NOTICE_TIMEOUT_MS};
pub use entity::{EntityKind, FieldKind, FieldSpec, Row, GENDERS};
pub use error::{RecordError, RecordResult};
pub use form::{
    AppointmentForm, BillForm, DoctorForm, Drafts, FieldValues, FormData, LabTestForm,
    PatientForm, Record, SubmissionPolicy,
};
pub use hospital::Hospital;
pub use report::{Report, REPORT_HEADING};
pub use section::{Navigator, Section};
pub use table::{Table, Tables};
