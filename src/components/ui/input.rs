use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Text input bound to a string signal. `invalid` toggles `aria-invalid` styling.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] autofocus: bool,
    #[prop(optional)] invalid: Option<Signal<bool>>,

    // Manual wiring instead of `bind:value`, which has changed across Leptos releases.
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "flex h-9 w-full min-w-0 rounded-md border border-white/15 bg-transparent px-3 py-1 text-sm text-white placeholder:text-white/40 outline-none",
        "focus-visible:border-accent focus-visible:ring-2 focus-visible:ring-accent/40",
        "aria-invalid:border-red-500 aria-invalid:ring-red-500/30",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            bind_value.set(input.value());
        }
    };

    view! {
        <input
            type="text"
            class=merged_class
            placeholder=placeholder
            id=id
            autofocus=autofocus
            aria-invalid=move || if invalid.is_some_and(|s| s.get()) { "true" } else { "false" }
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
