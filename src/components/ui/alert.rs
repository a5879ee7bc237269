use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "w-full rounded-lg border border-white/15 px-4 py-3 text-sm text-white"}
    clx! {AlertDescription, p, "text-sm leading-relaxed"}
}

pub use components::*;
