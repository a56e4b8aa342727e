//! Report Panel Component
//!
//! Buttons to generate the count report (and load demo data), and the
//! report output region.

use leptos::prelude::*;

use crate::store::{store_generate_report, store_seed_sample_data, use_app_store, AppStateStoreFields};

pub(crate) const REPORT_OUTPUT_ID: &str = "reportOutput";

#[component]
pub fn ReportPanel() -> impl IntoView {
    let store = use_app_store();
    let report = move || store.hospital().with(|h| h.report().cloned());

    view! {
        <div class="report-controls">
            <button type="button" on:click=move |_| store_generate_report(&store)>
                "Generate Report"
            </button>
            <button type="button" class="secondary" on:click=move |_| store_seed_sample_data(&store)>
                "Load sample data"
            </button>
        </div>
        <div id=REPORT_OUTPUT_ID class="report-output">
            {move || report().map(|report| view! {
                <h3>{report.heading()}</h3>
                {report.lines().into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            })}
        </div>
    }
}
