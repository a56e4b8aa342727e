//! Global Application State Store
//!
//! Uses Leptos reactive_stores with one store field per concern. Typing only
//! writes `drafts` and navigating only writes `navigator`, so table and
//! report readers (which read `hospital`) stay untouched until a submission,
//! a report or sample data actually changes the records.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use hospital_records::{DeskConfig, Drafts, EntityKind, Hospital, Navigator, Row};

/// Severity of a notice banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown above the page sections
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    /// Increments per notice so a stale timer never clears a newer one
    pub seq: u32,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// In-progress values of the five forms
    pub drafts: Drafts,
    /// Visible section
    pub navigator: Navigator,
    /// Recorded tables and last report
    pub hospital: Hospital,
    pub notice: Option<Notice>,
    pub notice_seq: u32,
}

impl AppState {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            navigator: Navigator::new(config.initial_section),
            hospital: Hospital::new(config),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Keep a form draft in step with its input
pub fn store_set_field(store: &AppStore, kind: EntityKind, field: &'static str, value: String) {
    let drafts = store.drafts();
    let result = drafts.write().set_field(kind, field, value);
    if let Err(err) = result {
        log::error!("[FORM] {}", err);
    }
}

/// Submit a form; on success the row is appended and the form cleared
pub fn store_submit(store: &AppStore, kind: EntityKind) -> Option<Row> {
    let drafts = store.drafts();
    let hospital = store.hospital();
    let result = hospital.write().submit(&mut drafts.write(), kind);
    match result {
        Ok(row) => {
            log::info!("[FORM] added {}: {:?}", kind, row.cells());
            store_dismiss_notice(store);
            Some(row)
        }
        Err(err) => {
            if err.is_validation() {
                log::warn!("[FORM] {} not added: {}", kind, err);
            } else {
                log::error!("[FORM] {} not added: {}", kind, err);
            }
            store_notify(store, NoticeLevel::Error, err.to_string());
            None
        }
    }
}

/// Switch the visible section by its DOM id
pub fn store_show_section(store: &AppStore, id: &str) {
    let navigator = store.navigator();
    let result = navigator.write().show_id(id);
    match result {
        Ok(section) => log::debug!("[NAV] showing {}", section.id()),
        Err(err) => {
            log::warn!("[NAV] {}", err);
            store_notify(store, NoticeLevel::Error, err.to_string());
        }
    }
}

pub fn store_generate_report(store: &AppStore) {
    let hospital = store.hospital();
    let report = hospital.write().generate_report().clone();
    log::info!("[REPORT] {}", report);
}

pub fn store_seed_sample_data(store: &AppStore) {
    let hospital = store.hospital();
    let result = hospital.write().seed_sample_data();
    match result {
        Ok(added) => store_notify(
            store,
            NoticeLevel::Info,
            format!("Loaded {} sample records", added),
        ),
        Err(err) => {
            log::error!("[SAMPLE] {}", err);
            store_notify(store, NoticeLevel::Error, err.to_string());
        }
    }
}

/// Show a notice, clearing it after the configured timeout
pub fn store_notify(store: &AppStore, level: NoticeLevel, text: String) {
    store.notice_seq().update(|seq| *seq = seq.wrapping_add(1));
    let seq = store.notice_seq().get_untracked();
    store.notice().set(Some(Notice { level, text, seq }));

    let timeout_ms = store
        .hospital()
        .with_untracked(|hospital| hospital.config().notice_timeout_ms);
    if timeout_ms == 0 {
        return;
    }

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        store_expire_notice(&store, seq);
    });
}

/// Clear the notice only if it is still the one numbered `seq`
pub fn store_expire_notice(store: &AppStore, seq: u32) {
    let still_current = store
        .notice()
        .with_untracked(|notice| notice.as_ref().map(|n| n.seq) == Some(seq));
    if still_current {
        store_dismiss_notice(store);
    }
}

pub fn store_dismiss_notice(store: &AppStore) {
    if store.notice().with_untracked(Option::is_some) {
        store.notice().set(None);
    }
}
