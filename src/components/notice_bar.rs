//! Notice Bar Component
//!
//! Shows the current notice, if any, with a dismiss button.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields, NoticeLevel};

pub(crate) fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice info",
        NoticeLevel::Error => "notice error",
    }
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div class=notice_class(notice.level) role="status">
                <span class="notice-text">{notice.text}</span>
                <button
                    type="button"
                    class="notice-dismiss"
                    on:click=move |_| store_dismiss_notice(&store)
                >
                    "×"
                </button>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_class() {
        assert_eq!(notice_class(NoticeLevel::Error), "notice error");
        assert_eq!(notice_class(NoticeLevel::Info), "notice info");
    }
}
