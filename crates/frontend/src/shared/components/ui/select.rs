use leptos::prelude::*;

/// Single-select bound to a signal. Options double as their labels.
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<String>,
    /// Option values, rendered in order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

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
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            >
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let option_value = option.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=option.clone() selected=is_selected>
                                {option.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
