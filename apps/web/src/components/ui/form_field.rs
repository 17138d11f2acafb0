//! Labeled input bound to one field of a [`FormController`] signal. Keystrokes
//! update the value, leaving the field marks it touched, and the field's error
//! shows once the controller says it is visible.

use leptos::prelude::*;
use storefront_auth::forms::{Field, FormController};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn FormField(
    form: RwSignal<FormController>,
    field: Field,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let id = field.as_str();
    let error = move || form.with(|form| form.error(field).map(str::to_string));

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for=id>
                {field.label()}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                class:border-red-500=move || error().is_some()
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=move || form.with(|form| form.value(field).to_string())
                on:input=move |event| {
                    form.update(|form| form.set_value(field, event_target_value(&event)));
                }
                on:blur=move |_| form.update(|form| form.blur(field))
            />
            {move || {
                error()
                    .map(|message| {
                        view! { <p class="mt-2 text-sm text-red-600 dark:text-red-400">{message}</p> }
                    })
            }}
        </div>
    }
}
