use super::model;
use contracts::forms::hydrate::overlay_entity;
use contracts::forms::payload::build_payload;
use contracts::forms::{FieldValue, FormRecord};
use contracts::pricing::ReferenceEntity;
use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::forms::FieldControl;
use crate::shared::icons::icon;

/// Модальная форма справочной сущности: строится по списку полей
/// реестра тем же рендером полей, что и формы предложений
#[component]
pub fn ReferenceDetails(
    entity: &'static ReferenceEntity,
    row: Option<Map<String, Value>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let entity_id = row.as_ref().and_then(|r| r.get("id")).and_then(Value::as_i64);
    let record = RwSignal::new(FormRecord::initialize(entity.fields));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    if let Some(existing) = row {
        let mut loaded = FormRecord::initialize(entity.fields);
        match overlay_entity(&mut loaded, entity.fields, &existing) {
            Ok(()) => record.set(loaded),
            Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
        }
    }

    let save = move |_| {
        if saving.get() {
            return;
        }
        let payload = Value::Object(build_payload(&record.get(), entity.fields));
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_row(entity.slug, entity_id, &payload).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container reference-details">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {entity
                    .fields
                    .iter()
                    .map(|descriptor| {
                        let name = descriptor.name;
                        let kind = descriptor.kind;
                        let value = Signal::derive(move || {
                            record
                                .get()
                                .get(name)
                                .cloned()
                                .unwrap_or_else(|| FieldValue::empty_for(&kind))
                        });
                        view! {
                            <FieldControl
                                descriptor=descriptor
                                value=value
                                on_change=Callback::new(move |value: FieldValue| {
                                    record.update(|r| r.set(name, value));
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=save
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
