//! Hospital Desk App
//!
//! Navigation bar on top, one page section per entity plus the report page.

use leptos::prelude::*;
use reactive_stores::Store;

use hospital_records::{EntityKind, Section};

use crate::components::{EntityForm, NavBar, NoticeBar, PageSection, RecordTable, ReportPanel};
use crate::config::load_config;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = Store::new(AppState::new(config));
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="desk-header">
                <h1>"Hospital Admin Desk"</h1>
                <NavBar />
            </header>

            <NoticeBar />

            <main class="main-content">
                {EntityKind::ALL.into_iter().map(|kind| view! {
                    <PageSection section=kind.section()>
                        <EntityForm kind=kind />
                        <RecordTable kind=kind />
                    </PageSection>
                }).collect_view()}

                <PageSection section=Section::Reports>
                    <ReportPanel />
                </PageSection>
            </main>
        </div>
    }
}
