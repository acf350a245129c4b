//! Табличный редактор списков ВМ и стоек.
//!
//! Обе таблицы различаются только набором вложенных полей, поэтому
//! редактор один и параметризуется дескриптором.

use contracts::forms::record::{add_row, remove_row, update_row};
use contracts::forms::Row;
use contracts::schema::{FieldDescriptor, FieldKind};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, NumberInput, Select};
use crate::shared::icons::icon;

/// Контрол одной ячейки строки. Неожиданный для таблицы тип вложенного
/// поля редактируется как текст.
fn row_cell(
    sub: &'static FieldDescriptor,
    current: String,
    on_edit: Callback<String>,
) -> AnyView {
    match sub.kind {
        FieldKind::Number {
            step, min, max, ..
        } => view! {
            <NumberInput
                value=Signal::derive(move || current.clone())
                step=step
                min=min
                max=max
                on_input=on_edit
            />
        }
        .into_any(),
        FieldKind::Select { choices } => {
            let options: Vec<(String, String)> = choices
                .iter()
                .map(|c| (c.value.to_string(), c.label.to_string()))
                .collect();
            view! {
                <Select
                    value=Signal::derive(move || current.clone())
                    options=options
                    on_change=on_edit
                />
            }
            .into_any()
        }
        _ => view! {
            <Input
                value=Signal::derive(move || current.clone())
                on_input=on_edit
            />
        }
        .into_any(),
    }
}

#[component]
pub fn RowsEditor(
    label: &'static str,
    kind: FieldKind,
    fields: &'static [FieldDescriptor],
    #[prop(into)] rows: Signal<Vec<Row>>,
    on_change: Callback<Vec<Row>>,
) -> impl IntoView {
    // Заглушка-строка создаётся один раз: её ключ должен пережить
    // материализацию при первом редактировании, иначе ввод теряет фокус
    let placeholder = StoredValue::new(Row::empty(&kind));

    // Отображаемый список: пустое значение показывает одну пустую
    // строку, но само значение остаётся пустым списком до первой правки
    let display_rows = move || {
        let current = rows.get();
        if current.is_empty() && kind.keeps_last_row() {
            vec![placeholder.get_value()]
        } else {
            current
        }
    };

    let handle_add = move |_| {
        if let Some(next) = add_row(&display_rows(), &kind) {
            on_change.run(next);
        }
    };

    view! {
        <div class="row-editor">
            <div class="row-editor__label">{label}</div>
            <table class="row-editor__table">
                <thead>
                    <tr>
                        {fields
                            .iter()
                            .map(|sub| view! { <th class="row-editor__header">{sub.label}</th> })
                            .collect_view()}
                        <th class="row-editor__header row-editor__header--actions"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=display_rows
                        key=|row| row.key
                        children=move |row: Row| {
                            let row_key = row.key;
                            let remove_disabled = move || {
                                kind.keeps_last_row() && display_rows().len() == 1
                            };
                            let handle_remove = move |_| {
                                let current = display_rows();
                                if let Some(index) =
                                    current.iter().position(|r| r.key == row_key)
                                {
                                    on_change.run(remove_row(&current, index));
                                }
                            };
                            view! {
                                <tr class="row-editor__row">
                                    {fields
                                        .iter()
                                        .map(|sub| {
                                            let current = row.get(sub.name).to_string();
                                            let on_edit = Callback::new(move |value: String| {
                                                let rows_now = display_rows();
                                                if let Some(index) = rows_now
                                                    .iter()
                                                    .position(|r| r.key == row_key)
                                                {
                                                    on_change.run(update_row(
                                                        &rows_now, index, sub.name, value,
                                                    ));
                                                }
                                            });
                                            view! {
                                                <td class="row-editor__cell">
                                                    {row_cell(sub, current, on_edit)}
                                                </td>
                                            }
                                        })
                                        .collect_view()}
                                    <td class="row-editor__cell row-editor__cell--actions">
                                        <button
                                            class="button button--icon"
                                            disabled=remove_disabled
                                            on:click=handle_remove
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <button class="button button--secondary row-editor__add" on:click=handle_add>
                {icon("plus")}
                {"Добавить"}
            </button>
        </div>
    }
}
