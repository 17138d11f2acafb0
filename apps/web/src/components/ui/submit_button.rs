use leptos::prelude::*;

/// Form submit button. While `pending` it is disabled and shows a spinner next
/// to its label.
#[component]
pub fn SubmitButton(
    #[prop(into)] pending: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center gap-2 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class:cursor-not-allowed=move || pending.get()
            class:opacity-70=move || pending.get()
            disabled=move || pending.get()
            aria-busy=move || pending.get().to_string()
        >
            {children()}
            <Show when=move || pending.get()>
                <span
                    class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-blue-200 border-t-white"
                    role="status"
                    aria-label="Loading"
                ></span>
            </Show>
        </button>
    }
}
