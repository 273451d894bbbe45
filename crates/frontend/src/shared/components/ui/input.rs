use leptos::prelude::*;

/// Text input bound to a signal
#[component]
pub fn Input(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, fired on every keystroke
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
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
                on:input=move |ev| {
                    on_input.run(event_target_value(&ev));
                }
            />
        </div>
    }
}
