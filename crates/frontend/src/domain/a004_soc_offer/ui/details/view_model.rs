use super::model;
use contracts::domain::client::Client;
use contracts::domain::engineer::Engineer;
use contracts::forms::hydrate::{number_to_input, overlay_entity};
use contracts::forms::payload::soc_payload;
use contracts::forms::{CommonFields, FieldValue, FormRecord};
use contracts::schema::registry::soc_schema;
use leptos::prelude::*;
use serde_json::Value;

/// ViewModel формы SOC-подписки: схема фиксированная, решения нет
#[derive(Clone, Copy)]
pub struct SocOfferDetailsViewModel {
    pub common: RwSignal<CommonFields>,
    pub record: RwSignal<FormRecord>,
    pub clients: RwSignal<Vec<Client>>,
    pub engineers: RwSignal<Vec<Engineer>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub entity_id: RwSignal<Option<i64>>,
}

impl SocOfferDetailsViewModel {
    pub fn new() -> Self {
        Self {
            common: RwSignal::new(CommonFields::default()),
            record: RwSignal::new(FormRecord::initialize(soc_schema())),
            clients: RwSignal::new(Vec::new()),
            engineers: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            entity_id: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        let entity_id = self.entity_id;
        move || entity_id.get().is_some()
    }

    pub fn load_reference_data(&self) {
        let clients = self.clients;
        let engineers = self.engineers;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a001_client::model::fetch_clients().await {
                Ok(list) => clients.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки клиентов: {}", e))),
            }
            match crate::domain::a002_engineer::model::fetch_engineers().await {
                Ok(list) => engineers.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки инженеров: {}", e))),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        self.entity_id.set(Some(existing_id));
        let common = self.common;
        let record = self.record;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let entity = match model::fetch_soc_offer(existing_id).await {
                Ok(entity) => entity,
                Err(e) => {
                    error.set(Some(format!("Ошибка загрузки: {}", e)));
                    return;
                }
            };

            common.set(CommonFields {
                client_id: scalar_text(entity.get("client_id")),
                engineer_id: scalar_text(entity.get("engineer_id")),
                subject: scalar_text(entity.get("subject")),
            });

            let mut loaded = FormRecord::initialize(soc_schema());
            if let Err(e) = overlay_entity(&mut loaded, soc_schema(), &entity) {
                error.set(Some(format!("Ошибка загрузки: {}", e)));
                return;
            }
            record.set(loaded);
        });
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.record.update(|r| r.set(name, value));
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        let common = self.common;
        let record = self.record;
        move || Self::validate_form(&common.get(), &record.get()).is_ok()
    }

    fn validate_form(common: &CommonFields, record: &FormRecord) -> Result<(), &'static str> {
        if common.client_id.trim().is_empty() {
            return Err("Клиент обязателен для заполнения");
        }
        if common.subject.trim().is_empty() {
            return Err("Тема обязательна для заполнения");
        }
        if record.text("pack").is_empty() {
            return Err("Пакет SOC обязателен для заполнения");
        }
        Ok(())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get() {
            return;
        }
        let common = self.common.get();
        let record = self.record.get();

        if let Err(msg) = Self::validate_form(&common, &record) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let payload = soc_payload(&common, &record, soc_schema());

        let saving = self.saving;
        let error = self.error;
        let entity_id = self.entity_id.get();
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_soc_offer(entity_id, &payload).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_to_input(n),
        _ => String::new(),
    }
}
