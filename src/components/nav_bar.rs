//! Navigation Bar Component
//!
//! One button per page section; clicking shows that section and hides the rest.

use leptos::prelude::*;

use hospital_records::Section;

use crate::store::{store_show_section, use_app_store, AppStateStoreFields};

pub(crate) fn nav_button_class(active: bool) -> &'static str {
    if active {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

/// Section navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav-bar">
            {Section::ALL.into_iter().map(|section| {
                let is_active = move || store.navigator().with(|n| n.current() == section);
                view! {
                    <button
                        type="button"
                        class=move || nav_button_class(is_active())
                        on:click=move |_| store_show_section(&store, section.id())
                    >
                        {section.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_button_class() {
        assert_eq!(nav_button_class(true), "nav-btn active");
        assert_eq!(nav_button_class(false), "nav-btn");
    }
}
