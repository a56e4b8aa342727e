//! Page Section Component
//!
//! Wraps one section's content; hidden unless it is the current section.

use leptos::prelude::*;

use hospital_records::Section;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PageSection(section: Section, children: Children) -> impl IntoView {
    let store = use_app_store();
    let class = move || store.navigator().with(|n| n.class_for(section));

    view! {
        <section id=section.id() class=class>
            <h2>{section.title()}</h2>
            {children()}
        </section>
    }
}
