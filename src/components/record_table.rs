//! Record Table Component
//!
//! Renders one entity table with a filter box above it. Filtering only
//! narrows what is shown.

use leptos::prelude::*;

use hospital_records::{EntityKind, Row};

use crate::store::{use_app_store, AppStateStoreFields};

pub(crate) const EMPTY_TABLE_TEXT: &str = "No records found.";

pub(crate) fn row_count_text(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} records", total)
    } else {
        format!("Showing {} of {} records", shown, total)
    }
}

#[component]
pub fn RecordTable(kind: EntityKind) -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let visible_rows = Memo::new(move |_| {
        let query = query.get();
        store
            .hospital()
            .with(|h| h.table(kind).filter(&query).cloned().collect::<Vec<Row>>())
    });
    let total = move || store.hospital().with(|h| h.table(kind).len());
    let column_count = kind.fields().len().to_string();

    view! {
        <div class="record-table">
            <input
                type="search"
                class="table-filter"
                placeholder=format!("Filter {}...", kind.section().title().to_lowercase())
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <table id=kind.table_id()>
                <thead>
                    <tr>
                        {kind.columns().map(|column| view! { <th>{column}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible_rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr class="empty-row">
                                    <td colspan=column_count.clone()>{EMPTY_TABLE_TEXT}</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| view! {
                                    <tr>
                                        {row.cells().iter().map(|cell| view! { <td>{cell.clone()}</td> }).collect_view()}
                                    </tr>
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
            <p class="item-count">{move || row_count_text(visible_rows.with(Vec::len), total())}</p>
        </div>
    }
}
