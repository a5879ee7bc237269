use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Centered overlay with a title bar. Escape and the close button call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4">
                <div
                    role="dialog"
                    aria-modal="true"
                    class="w-full max-w-md rounded-xl border border-white/10 bg-panel p-5 text-white shadow-lg"
                >
                    <div class="mb-4 flex items-center justify-between">
                        <h3 class="text-lg font-semibold">{move || title.get()}</h3>
                        <button
                            type="button"
                            class="rounded-sm p-1 text-white/60 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            <X class="size-4" />
                        </button>
                    </div>
                    {move || children.with_value(|c| c())}
                </div>
            </div>
        </Show>
    }
}
