//! Рендер одного поля формы по его дескриптору.
//!
//! Контрол никогда не меняет текущее значение на месте: каждое
//! редактирование поднимается наверх готовым новым значением поля.

use contracts::forms::{FieldValue, Row};
use contracts::schema::{FieldDescriptor, FieldKind};
use leptos::prelude::*;

use super::editors::{ConnectionsEditor, LicensesEditor, RowsEditor};
use crate::shared::components::ui::{Checkbox, Input, NumberInput, Select, Textarea};

fn choice_options(choices: &'static [contracts::schema::SelectChoice]) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|c| (c.value.to_string(), c.label.to_string()))
        .collect()
}

/// Диспетчеризация по типу поля — по варианту на тип, без запасной ветки
#[component]
pub fn FieldControl(
    descriptor: &'static FieldDescriptor,
    #[prop(into)] value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let text_value = Signal::derive(move || value.get().text().to_string());
    let rows_value = Signal::derive(move || value.get().rows().to_vec());
    let rows_changed = Callback::new(move |rows: Vec<Row>| {
        on_change.run(FieldValue::Rows(rows));
    });

    match descriptor.kind {
        FieldKind::Number {
            step,
            min,
            max,
            unit,
        } => view! {
            <NumberInput
                label=descriptor.label.to_string()
                value=text_value
                step=step
                min=min
                max=max
                unit=unit
                on_input=Callback::new(move |raw: String| {
                    on_change.run(FieldValue::Text(raw));
                })
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <Input
                label=descriptor.label.to_string()
                value=text_value
                on_input=Callback::new(move |raw: String| {
                    on_change.run(FieldValue::Text(raw));
                })
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <Textarea
                label=descriptor.label.to_string()
                value=text_value
                on_input=Callback::new(move |raw: String| {
                    on_change.run(FieldValue::Text(raw));
                })
            />
        }
        .into_any(),
        FieldKind::Checkbox => {
            let checked = Signal::derive(move || value.get().flag());
            view! {
                <Checkbox
                    label=descriptor.label.to_string()
                    checked=checked
                    on_change=Callback::new(move |flag: bool| {
                        on_change.run(FieldValue::Flag(flag));
                    })
                />
            }
            .into_any()
        }
        FieldKind::Select { choices } => view! {
            <Select
                label=descriptor.label.to_string()
                value=text_value
                options=choice_options(choices)
                on_change=Callback::new(move |raw: String| {
                    on_change.run(FieldValue::Text(raw));
                })
            />
        }
        .into_any(),
        FieldKind::Vms { fields } | FieldKind::Racks { fields } => view! {
            <RowsEditor
                label=descriptor.label
                kind=descriptor.kind
                fields=fields
                rows=rows_value
                on_change=rows_changed
            />
        }
        .into_any(),
        FieldKind::Licenses { catalog } | FieldKind::LicensesOffice { catalog } => view! {
            <LicensesEditor
                label=descriptor.label
                kind=descriptor.kind
                catalog=catalog
                rows=rows_value
                on_change=rows_changed
            />
        }
        .into_any(),
        FieldKind::Connections {
            max_connections,
            bandwidth_options,
        } => view! {
            <ConnectionsEditor
                label=descriptor.label
                kind=descriptor.kind
                max_connections=max_connections
                bandwidth_options=bandwidth_options
                rows=rows_value
                on_change=rows_changed
            />
        }
        .into_any(),
    }
}
