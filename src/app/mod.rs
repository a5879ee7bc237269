use crate::config::EnvConfig;
use crate::pages::{CatalogPage, CollectionDetailPage, CollectionsPage, NavBar, TitleDetailPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(&config)));

    // NavBar reads the location, so it lives inside <Router>.
    view! {
        <Router>
            <div class="min-h-screen bg-[#0b1622] pb-12">
                <NavBar />
                <main>
                    <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-white/60">"Not found"</div> }>
                        <Route path=path!("") view=CatalogPage />
                        <Route path=path!("collection") view=CollectionsPage />
                        <Route path=path!("anime/:anime_id") view=TitleDetailPage />
                        <Route path=path!("collectiondetail/:collection_name") view=CollectionDetailPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
