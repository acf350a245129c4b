pub mod details;
pub mod list;
pub mod model;

use contracts::pricing::REFERENCE_ENTITIES;
use leptos::prelude::*;
use list::ReferenceList;

/// Вкладки справочников ценообразования. Все шесть сущностей
/// обслуживаются одним списком и одной формой по описанию реестра.
#[component]
pub fn PricingTabs() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    view! {
        <div class="content pricing">
            <div class="header">
                <h2>{"Ценообразование"}</h2>
            </div>
            <div class="tabs">
                {REFERENCE_ENTITIES
                    .iter()
                    .enumerate()
                    .map(|(index, entity)| {
                        view! {
                            <button
                                class="tabs__item"
                                class:tabs__item--active=move || active.get() == index
                                on:click=move |_| set_active.set(index)
                            >
                                {entity.list_name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let entity = &REFERENCE_ENTITIES[active.get()];
                view! { <ReferenceList entity=entity /> }
            }}
        </div>
    }
}
