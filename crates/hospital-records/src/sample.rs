//! Demo records for an empty desk.

use crate::error::RecordResult;
use crate::form::{AppointmentForm, BillForm, DoctorForm, LabTestForm, PatientForm};
use crate::hospital::Hospital;

fn s(value: &str) -> String {
    value.to_string()
}

impl Hospital {
    /// Record a small demo data set through the regular handlers.
    ///
    /// Returns the number of rows added. Every sample row passes the strict
    /// policy, so this only fails if the handlers themselves reject input.
    pub fn seed_sample_data(&mut self) -> RecordResult<usize> {
        let doctors = [
            ("Dr. A. Sen", "Cardiology"),
            ("Dr. R. Gupta", "Orthopedics"),
            ("Dr. P. Bose", "General Medicine"),
        ];
        let patients = [
            ("S. Chatterjee", "35", "Male"),
            ("M. Das", "56", "Female"),
            ("A. Khan", "42", "Male"),
        ];
        let appointments = [
            ("S. Chatterjee", "Dr. P. Bose", "2025-09-10"),
            ("M. Das", "Dr. A. Sen", "2025-09-11"),
            ("A. Khan", "Dr. R. Gupta", "2025-09-12"),
        ];
        let lab_tests = [("S. Chatterjee", "CBC"), ("M. Das", "ECG")];
        let bills = [("S. Chatterjee", "500"), ("S. Chatterjee", "400"), ("M. Das", "600")];

        let mut added = 0;
        for (name, specialization) in doctors {
            self.add_doctor(DoctorForm {
                name: s(name),
                specialization: s(specialization),
            })?;
            added += 1;
        }
        for (name, age, gender) in patients {
            self.add_patient(PatientForm {
                name: s(name),
                age: s(age),
                gender: s(gender),
            })?;
            added += 1;
        }
        for (patient, doctor, date) in appointments {
            self.add_appointment(AppointmentForm {
                patient: s(patient),
                doctor: s(doctor),
                date: s(date),
            })?;
            added += 1;
        }
        for (patient, test) in lab_tests {
            self.add_lab_test(LabTestForm {
                patient: s(patient),
                test: s(test),
            })?;
            added += 1;
        }
        for (patient, amount) in bills {
            self.add_bill(BillForm {
                patient: s(patient),
                amount: s(amount),
            })?;
            added += 1;
        }

        log::info!("seeded {} sample rows", added);
        Ok(added)
    }
}
