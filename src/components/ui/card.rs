use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "relative flex h-full flex-col overflow-hidden rounded-xl bg-panel text-white shadow-sm"}
    clx! {CardBody, div, "flex flex-1 flex-col gap-3 p-4"}
    clx! {CardTitle, h3, "text-sm font-semibold leading-snug"}
    clx! {CardFooter, div, "mt-auto flex items-center justify-end gap-2"}
    clx! {CardGrid, div, "grid grid-cols-2 gap-4 md:grid-cols-5"}
}

pub use components::*;
