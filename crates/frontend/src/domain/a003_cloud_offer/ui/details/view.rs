use super::view_model::CloudOfferDetailsViewModel;
use contracts::enums::Solution;
use contracts::forms::FieldValue;
use contracts::schema::registry::solution_schema;
use leptos::prelude::*;

use crate::forms::FieldControl;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;

#[component]
pub fn CloudOfferDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CloudOfferDetailsViewModel::new();
    vm.load_reference_data();
    vm.load_if_needed(id);

    let client_options = Signal::derive(move || {
        vm.clients
            .get()
            .into_iter()
            .map(|c| (c.id.to_string(), c.name))
            .collect::<Vec<_>>()
    });
    let engineer_options = Signal::derive(move || {
        vm.engineers
            .get()
            .into_iter()
            .map(|e| (e.id.to_string(), e.name))
            .collect::<Vec<_>>()
    });
    let solution_options: Vec<(String, String)> = Solution::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    // Перестройка блока динамических полей — только на смену решения,
    // не на каждое редактирование записи
    let solution = Memo::new(move |_| vm.form.get().solution);

    view! {
        <div class="details-container offer-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode()() {
                        "Редактирование предложения"
                    } else {
                        "Новое предложение"
                    }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Select
                    label="Клиент".to_string()
                    value=Signal::derive(move || vm.form.get().common.client_id.clone())
                    options=client_options
                    placeholder="— клиент —".to_string()
                    on_change=Callback::new(move |value: String| vm.set_client(value))
                />
                <Select
                    label="Инженер".to_string()
                    value=Signal::derive(move || vm.form.get().common.engineer_id.clone())
                    options=engineer_options
                    placeholder="— инженер —".to_string()
                    on_change=Callback::new(move |value: String| vm.set_engineer(value))
                />
                <Input
                    label="Тема".to_string()
                    value=Signal::derive(move || vm.form.get().common.subject.clone())
                    placeholder="Краткое описание предложения".to_string()
                    on_input=Callback::new(move |value: String| vm.set_subject(value))
                />
                <Select
                    label="Решение".to_string()
                    value=Signal::derive(move || vm.form.get().solution.code().to_string())
                    options=solution_options
                    placeholder="— решение —".to_string()
                    on_change=Callback::new(move |value: String| vm.set_solution(value))
                />

                <div class="details-form__solution-fields">
                    {move || {
                        solution_schema(solution.get())
                            .iter()
                            .map(|descriptor| {
                                let name = descriptor.name;
                                let kind = descriptor.kind;
                                let value = Signal::derive(move || {
                                    vm.form
                                        .get()
                                        .fields
                                        .get(name)
                                        .cloned()
                                        .unwrap_or_else(|| FieldValue::empty_for(&kind))
                                });
                                view! {
                                    <FieldControl
                                        descriptor=descriptor
                                        value=value
                                        on_change=Callback::new(move |value: FieldValue| {
                                            vm.set_field(name, value);
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get() || !vm.is_form_valid()()
                >
                    {icon("save")}
                    {move || {
                        if vm.saving.get() {
                            "Сохранение..."
                        } else if vm.is_edit_mode()() {
                            "Сохранить"
                        } else {
                            "Создать"
                        }
                    }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
