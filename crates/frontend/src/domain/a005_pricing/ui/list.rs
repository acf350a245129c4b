use super::details::ReferenceDetails;
use super::model;
use contracts::forms::hydrate::number_to_input;
use contracts::pricing::ReferenceEntity;
use contracts::schema::{FieldDescriptor, FieldKind};
use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Текст ячейки: числа форматируются как в контроле, значения
/// селекторов показываются подписью из справочника
fn cell_text(field: &FieldDescriptor, row: &Map<String, Value>) -> String {
    let value = row.get(field.name);
    match (&field.kind, value) {
        (_, None) | (_, Some(Value::Null)) => "-".to_string(),
        (FieldKind::Number { .. }, Some(Value::Number(n))) => number_to_input(n),
        (FieldKind::Select { choices }, Some(Value::String(code))) => choices
            .iter()
            .find(|c| c.value == code)
            .map(|c| c.label.to_string())
            .unwrap_or_else(|| code.clone()),
        (_, Some(Value::String(s))) => s.clone(),
        (_, Some(other)) => other.to_string(),
    }
}

fn row_id(row: &Map<String, Value>) -> Option<i64> {
    row.get("id").and_then(Value::as_i64)
}

#[component]
#[allow(non_snake_case)]
pub fn ReferenceList(entity: &'static ReferenceEntity) -> impl IntoView {
    let (items, set_items) = signal::<Vec<Map<String, Value>>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // None — окно закрыто; Some(None) — создание; Some(Some(row)) — правка
    let (editing, set_editing) = signal::<Option<Option<Map<String, Value>>>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_rows(entity.slug).await {
                Ok(rows) => {
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Удалить элемент \"{}\"?", entity.element_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete_row(entity.slug, id).await {
                Ok(()) => {
                    match model::fetch_rows(entity.slug).await {
                        Ok(rows) => set_items.set(rows),
                        Err(e) => set_error.set(Some(e)),
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="reference-list">
            <div class="header__actions">
                <button class="button button--primary" on:click=move |_| set_editing.set(Some(None))>
                    {icon("plus")}
                    {format!("Добавить: {}", entity.element_name)}
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {entity
                                .fields
                                .iter()
                                .map(|field| view! { <th class="table__header-cell">{field.label}</th> })
                                .collect_view()}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row_id(&row);
                            let row_for_edit = row.clone();
                            view! {
                                <tr class="table__row">
                                    {entity
                                        .fields
                                        .iter()
                                        .map(|field| {
                                            view! {
                                                <td class="table__cell">{cell_text(field, &row)}</td>
                                            }
                                        })
                                        .collect_view()}
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| {
                                                set_editing.set(Some(Some(row_for_edit.clone())));
                                            }
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    delete(id);
                                                }
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || editing.get().map(|row| {
                view! {
                    <Modal
                        title=entity.element_name.to_string()
                        on_close=Callback::new(move |_| set_editing.set(None))
                    >
                        <ReferenceDetails
                            entity=entity
                            row=row
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
