//! Page Sections
//!
//! Exactly one section of the desk is visible at a time. The navigator owns
//! that choice; switching is the only transition.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// Named, mutually exclusive page region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Patients,
    Doctors,
    Appointments,
    #[serde(rename = "labs")]
    LabTests,
    Billing,
    Reports,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 6] = [
        Section::Patients,
        Section::Doctors,
        Section::Appointments,
        Section::LabTests,
        Section::Billing,
        Section::Reports,
    ];

    /// DOM id of the section container
    pub fn id(&self) -> &'static str {
        match self {
            Section::Patients => "patients",
            Section::Doctors => "doctors",
            Section::Appointments => "appointments",
            Section::LabTests => "labs",
            Section::Billing => "billing",
            Section::Reports => "reports",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Navigation and heading title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Patients => "Patients",
            Section::Doctors => "Doctors",
            Section::Appointments => "Appointments",
            Section::LabTests => "Lab Tests",
            Section::Billing => "Billing",
            Section::Reports => "Reports",
        }
    }
}

/// Tracks the single visible section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: Section,
}

impl Navigator {
    pub fn new(initial: Section) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.current == section
    }

    /// Hide every section, then reveal `section`
    pub fn show(&mut self, section: Section) {
        if self.current != section {
            log::debug!("section {} -> {}", self.current.id(), section.id());
        }
        self.current = section;
    }

    /// Look up a section by DOM id and show it.
    ///
    /// An unknown id leaves the visible section unchanged.
    pub fn show_id(&mut self, id: &str) -> RecordResult<Section> {
        let section = Section::from_id(id).ok_or_else(|| {
            log::warn!("refusing to show unknown section {:?}", id);
            RecordError::UnknownSection(id.to_string())
        })?;
        self.show(section);
        Ok(section)
    }

    /// CSS classes for a section container: `page`, plus `hidden` when not shown
    pub fn class_for(&self, section: Section) -> &'static str {
        if self.is_visible(section) {
            "page"
        } else {
            "page hidden"
        }
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(move |section| self.is_visible(*section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_id_leaves_exactly_one_visible() {
        let mut nav = Navigator::default();
        for section in Section::ALL {
            let shown = nav.show_id(section.id()).expect("known id");
            assert_eq!(shown, section);
            let visible: Vec<_> = nav.visible_sections().collect();
            assert_eq!(visible, vec![section]);
        }
    }

    #[test]
    fn test_unknown_id_keeps_current_section() {
        let mut nav = Navigator::new(Section::Billing);
        let err = nav.show_id("pharmacy").expect_err("should reject unknown id");
        assert!(matches!(err, RecordError::UnknownSection(id) if id == "pharmacy"));
        assert_eq!(nav.current(), Section::Billing);
        assert_eq!(nav.visible_sections().count(), 1);
    }

    #[test]
    fn test_class_for_hides_others() {
        let nav = Navigator::new(Section::Reports);
        assert_eq!(nav.class_for(Section::Reports), "page");
        assert_eq!(nav.class_for(Section::Patients), "page hidden");
    }

    #[test]
    fn test_ids_round_trip_and_serde_names_agree() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.id()));
        }
    }
}
