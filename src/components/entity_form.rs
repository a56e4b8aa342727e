//! Entity Form Component
//!
//! One form per entity kind. Inputs are bound to the kind's draft in the
//! store; submitting records the draft as a new table row.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use hospital_records::{EntityKind, FieldKind, FieldSpec};

use crate::store::{store_set_field, store_submit, use_app_store, AppStateStoreFields};

/// Submit button text
pub(crate) fn submit_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Patient => "Add Patient",
        EntityKind::Doctor => "Add Doctor",
        EntityKind::Appointment => "Book Appointment",
        EntityKind::LabTest => "Add Lab Test",
        EntityKind::Bill => "Add Bill",
    }
}

/// Form for recording one entity
#[component]
pub fn EntityForm(kind: EntityKind) -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store_submit(&store, kind);
    };

    view! {
        <form class="entity-form" id=kind.form_id() on:submit=on_submit>
            {kind.fields().iter().map(|field| view! {
                <FormField kind=kind field=*field />
            }).collect_view()}
            <button type="submit">{submit_label(kind)}</button>
        </form>
    }
}

/// Labelled input (or drop-down) for one field
#[component]
fn FormField(kind: EntityKind, field: FieldSpec) -> impl IntoView {
    let store = use_app_store();
    let field_id = field.id;
    let value = move || store.drafts().with(|d| d.value(kind, field_id).to_string());

    let control = match field.kind {
        FieldKind::Choice(options) => view! {
            <select
                id=field_id
                name=field_id
                prop:value=value
                on:change=move |ev| store_set_field(&store, kind, field_id, event_target_value(&ev))
            >
                <option value="">{format!("Select {}", field.label)}</option>
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        other => view! {
            <input
                id=field_id
                name=field_id
                type=other.input_type()
                placeholder=field.label
                prop:value=value
                on:input=move |ev| store_set_field(&store, kind, field_id, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="form-field">
            <span class="form-label">{field.label}</span>
            {control}
        </label>
    }
}
