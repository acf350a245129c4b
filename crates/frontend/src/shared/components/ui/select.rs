use leptos::prelude::*;

/// Select component with label support.
///
/// Всегда добавляет ведущую пустую опцию-заглушку, по одной опции
/// на каждый элемент `options`; пустое значение означает "не выбрано".
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder label for the synthesized leading option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_label =
        move || placeholder.get().unwrap_or_else(|| "— выберите —".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_label}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
