//! Редактор подключений: список {bandwidth}, ограниченный сверху.

use contracts::forms::record::{add_row, remove_row, update_row};
use contracts::forms::Row;
use contracts::schema::FieldKind;
use leptos::prelude::*;

use crate::shared::components::ui::Select;
use crate::shared::icons::icon;

#[component]
pub fn ConnectionsEditor(
    label: &'static str,
    kind: FieldKind,
    max_connections: usize,
    bandwidth_options: &'static [u32],
    #[prop(into)] rows: Signal<Vec<Row>>,
    on_change: Callback<Vec<Row>>,
) -> impl IntoView {
    let options: Vec<(String, String)> = bandwidth_options
        .iter()
        .map(|mbps| (mbps.to_string(), format!("{} Мбит/с", mbps)))
        .collect();

    let handle_add = move |_| {
        match add_row(&rows.get(), &kind) {
            Some(next) => on_change.run(next),
            None => {
                // Лимит достигнут: правка отклонена, состояние не меняется
                log::warn!("connections: превышен лимит строк ({})", max_connections);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&format!(
                        "Достигнут лимит подключений: {}",
                        max_connections
                    ));
                }
            }
        }
    };

    view! {
        <div class="row-editor connection-editor">
            <div class="row-editor__label">
                {label}
                <span class="row-editor__hint">
                    {format!(" (не более {})", max_connections)}
                </span>
            </div>
            <For
                each=move || rows.get()
                key=|row| row.key
                children=move |row: Row| {
                    let row_key = row.key;
                    let bandwidth_value = row.get("bandwidth").to_string();
                    let row_options = options.clone();

                    let handle_remove = move |_| {
                        let current = rows.get();
                        if let Some(index) = current.iter().position(|r| r.key == row_key) {
                            on_change.run(remove_row(&current, index));
                        }
                    };

                    view! {
                        <div class="connection-editor__row">
                            <Select
                                value=Signal::derive(move || bandwidth_value.clone())
                                options=row_options
                                placeholder="— полоса —".to_string()
                                on_change=Callback::new(move |value: String| {
                                    let current = rows.get();
                                    if let Some(index) =
                                        current.iter().position(|r| r.key == row_key)
                                    {
                                        on_change.run(update_row(
                                            &current, index, "bandwidth", value,
                                        ));
                                    }
                                })
                            />
                            <button class="button button--icon" on:click=handle_remove>
                                {icon("delete")}
                            </button>
                        </div>
                    }
                }
            />
            <button class="button button--secondary row-editor__add" on:click=handle_add>
                {icon("plus")}
                {"Добавить подключение"}
            </button>
        </div>
    }
}
