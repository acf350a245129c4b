use super::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active: RwSignal<Section>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{"Продажи · Конфигуратор"}</div>
            <nav class="sidebar__nav">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                {icon(section.icon_name())}
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
