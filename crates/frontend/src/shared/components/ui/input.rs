use leptos::prelude::*;

/// Text input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

/// Numeric input. Значение остаётся сырой строкой, коэрция в число
/// выполняется только при сборке полезной нагрузки.
#[component]
pub fn NumberInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Raw string value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Step attribute
    #[prop(default = 1.0)]
    step: f64,
    /// Min attribute
    #[prop(optional_no_strip)]
    min: Option<f64>,
    /// Max attribute
    #[prop(optional_no_strip)]
    max: Option<f64>,
    /// Unit suffix rendered next to the control
    #[prop(optional_no_strip)]
    unit: Option<&'static str>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__number-wrapper">
                <input
                    id=input_id
                    class="form__input form__input--number"
                    type="number"
                    prop:value=move || value.get()
                    step=step.to_string()
                    min=min.map(|m| m.to_string())
                    max=max.map(|m| m.to_string())
                    disabled=disabled
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                {unit.map(|u| view! { <span class="form__unit">{u}</span> })}
            </div>
        </div>
    }
}
