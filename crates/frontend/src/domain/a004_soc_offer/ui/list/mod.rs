use super::details::model::fetch_soc_offers;
use super::details::SocOfferDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal::Modal;
use contracts::domain::offer::OfferSummary;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SocOfferRow {
    pub id: i64,
    pub subject: String,
    pub client: String,
    pub engineer: String,
    pub created_at: String,
}

impl From<OfferSummary> for SocOfferRow {
    fn from(summary: OfferSummary) -> Self {
        Self {
            id: summary.id,
            subject: summary.subject,
            client: summary.client_name.unwrap_or_else(|| "-".to_string()),
            engineer: summary.engineer_name.unwrap_or_else(|| "-".to_string()),
            created_at: summary
                .created_at
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

impl Sortable for SocOfferRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "subject" => self
                .subject
                .to_lowercase()
                .cmp(&other.subject.to_lowercase()),
            "client" => self.client.to_lowercase().cmp(&other.client.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SocOfferList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SocOfferRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (sort_field, set_sort_field) = signal::<String>("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let (editing, set_editing) = signal::<Option<Option<i64>>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_soc_offers().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|asc| *asc = !*asc);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_items = move || {
        let mut list = items.get();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"SOC-подписки"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_editing.set(Some(None))>
                        {icon("plus")}
                        {"Новая подписка"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("subject")>
                                "Тема"
                                <span class={move || get_sort_class(&sort_field.get(), "subject")}>
                                    {move || get_sort_indicator(&sort_field.get(), "subject", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("client")>
                                "Клиент"
                                <span class={move || get_sort_class(&sort_field.get(), "client")}>
                                    {move || get_sort_indicator(&sort_field.get(), "client", sort_ascending.get())}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Инженер"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Создано"
                                <span class={move || get_sort_class(&sort_field.get(), "created_at")}>
                                    {move || get_sort_indicator(&sort_field.get(), "created_at", sort_ascending.get())}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row" on:click=move |_| set_editing.set(Some(Some(id)))>
                                    <td class="table__cell">{row.subject}</td>
                                    <td class="table__cell">{row.client}</td>
                                    <td class="table__cell">{row.engineer}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || editing.get().map(|id| {
                let title = if id.is_some() {
                    "SOC-подписка"
                } else {
                    "Новая SOC-подписка"
                };
                view! {
                    <Modal
                        title=title.to_string()
                        on_close=Callback::new(move |_| set_editing.set(None))
                    >
                        <SocOfferDetails
                            id=id
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
