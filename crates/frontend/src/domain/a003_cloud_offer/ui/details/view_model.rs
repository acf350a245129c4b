use super::model;
use contracts::domain::client::Client;
use contracts::domain::engineer::Engineer;
use contracts::enums::Solution;
use contracts::forms::hydrate::{number_to_input, overlay_entity};
use contracts::forms::payload::offer_payload;
use contracts::forms::{CommonFields, FieldValue, OfferForm};
use contracts::schema::registry::solution_schema;
use leptos::prelude::*;
use serde_json::Value;

/// ViewModel формы облачного предложения: владеет записью формы,
/// инициализирует её по решению и собирает полезную нагрузку
#[derive(Clone, Copy)]
pub struct CloudOfferDetailsViewModel {
    pub form: RwSignal<OfferForm>,
    pub clients: RwSignal<Vec<Client>>,
    pub engineers: RwSignal<Vec<Engineer>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub entity_id: RwSignal<Option<i64>>,
}

impl CloudOfferDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OfferForm::initialize(
                Solution::Vmware,
                CommonFields::default(),
            )),
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

    /// Справочники клиентов и инженеров живут, пока открыт экран
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

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        self.entity_id.set(Some(existing_id));
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let entity = match model::fetch_offer(existing_id).await {
                Ok(entity) => entity,
                Err(e) => {
                    error.set(Some(format!("Ошибка загрузки: {}", e)));
                    return;
                }
            };

            let solution = entity
                .get("solution")
                .and_then(Value::as_str)
                .and_then(Solution::from_code)
                .unwrap_or(Solution::Global);
            let seed = CommonFields {
                client_id: scalar_text(entity.get("client_id")),
                engineer_id: scalar_text(entity.get("engineer_id")),
                subject: scalar_text(entity.get("subject")),
            };

            let mut loaded = OfferForm::initialize(solution, seed);
            if let Err(e) = overlay_entity(&mut loaded.fields, solution_schema(solution), &entity)
            {
                error.set(Some(format!("Ошибка загрузки: {}", e)));
                return;
            }
            form.set(loaded);
        });
    }

    /// Смена решения сбрасывает специфичные поля, общие сохраняются
    pub fn set_solution(&self, code: String) {
        if let Some(solution) = Solution::from_code(&code) {
            self.form.update(|f| f.switch_solution(solution));
        }
    }

    pub fn set_client(&self, client_id: String) {
        self.form.update(|f| f.common.client_id = client_id);
    }

    pub fn set_engineer(&self, engineer_id: String) {
        self.form.update(|f| f.common.engineer_id = engineer_id);
    }

    pub fn set_subject(&self, subject: String) {
        self.form.update(|f| f.common.subject = subject);
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.form.update(|f| f.fields.set(name, value));
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        let form = self.form;
        move || Self::validate_form(&form.get()).is_ok()
    }

    fn validate_form(form: &OfferForm) -> Result<(), &'static str> {
        if form.common.client_id.trim().is_empty() {
            return Err("Клиент обязателен для заполнения");
        }
        if form.common.subject.trim().is_empty() {
            return Err("Тема обязательна для заполнения");
        }
        Ok(())
    }

    /// Save form data to server.
    /// Запись формы не меняется: при отказе сервера пользователь
    /// исправляет данные и повторяет отправку.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get() {
            return;
        }
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let payload = offer_payload(
            &current.common,
            current.solution,
            &current.fields,
            solution_schema(current.solution),
        );

        let saving = self.saving;
        let error = self.error;
        let entity_id = self.entity_id.get();
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_offer(entity_id, &payload).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}

/// Скаляр сущности в строку контрола (id приходят числами)
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_to_input(n),
        _ => String::new(),
    }
}
