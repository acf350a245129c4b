//! Редактор лицензионных строк {селектор, количество}.
//!
//! Обслуживает оба лицензионных типа: каталог и имя поля-селектора
//! приходят из дескриптора (license_type у Veeam, product_id у Office).

use contracts::forms::record::{add_row, remove_row, update_row};
use contracts::forms::Row;
use contracts::schema::{FieldKind, SelectChoice};
use leptos::prelude::*;

use crate::shared::components::ui::{NumberInput, Select};
use crate::shared::icons::icon;

#[component]
pub fn LicensesEditor(
    label: &'static str,
    kind: FieldKind,
    catalog: &'static [SelectChoice],
    #[prop(into)] rows: Signal<Vec<Row>>,
    on_change: Callback<Vec<Row>>,
) -> impl IntoView {
    let selector_name = kind.selector_name().unwrap_or("license_type");
    let placeholder = StoredValue::new(Row::empty(&kind));

    let display_rows = move || {
        let current = rows.get();
        if current.is_empty() {
            vec![placeholder.get_value()]
        } else {
            current
        }
    };

    let options: Vec<(String, String)> = catalog
        .iter()
        .map(|c| (c.value.to_string(), c.label.to_string()))
        .collect();

    let handle_add = move |_| {
        if let Some(next) = add_row(&display_rows(), &kind) {
            on_change.run(next);
        }
    };

    view! {
        <div class="row-editor license-editor">
            <div class="row-editor__label">{label}</div>
            <For
                each=display_rows
                key=|row| row.key
                children=move |row: Row| {
                    let row_key = row.key;
                    let selector_value = row.get(selector_name).to_string();
                    let quantity_value = row.get("quantity").to_string();
                    let row_options = options.clone();

                    let edit_field = move |field: &'static str, value: String| {
                        let current = display_rows();
                        if let Some(index) = current.iter().position(|r| r.key == row_key) {
                            on_change.run(update_row(&current, index, field, value));
                        }
                    };
                    let remove_disabled = move || display_rows().len() == 1;
                    let handle_remove = move |_| {
                        let current = display_rows();
                        if let Some(index) = current.iter().position(|r| r.key == row_key) {
                            on_change.run(remove_row(&current, index));
                        }
                    };

                    view! {
                        <div class="license-editor__row">
                            <Select
                                value=Signal::derive(move || selector_value.clone())
                                options=row_options
                                placeholder="— лицензия —".to_string()
                                on_change=Callback::new(move |value: String| {
                                    edit_field(selector_name, value);
                                })
                            />
                            <NumberInput
                                value=Signal::derive(move || quantity_value.clone())
                                min=Some(1.0)
                                on_input=Callback::new(move |value: String| {
                                    edit_field("quantity", value);
                                })
                            />
                            <button
                                class="button button--icon"
                                disabled=remove_disabled
                                on:click=handle_remove
                            >
                                {icon("delete")}
                            </button>
                        </div>
                    }
                }
            />
            <button class="button button--secondary row-editor__add" on:click=handle_add>
                {icon("plus")}
                {"Добавить лицензию"}
            </button>
        </div>
    }
}
