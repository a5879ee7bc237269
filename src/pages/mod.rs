use crate::api::ApiResult;
use crate::collections::CollectionStore;
use crate::components::ui::{
    Alert, AlertDescription, Badge, Button, ButtonSize, ButtonVariant, Card, CardBody, CardFooter,
    CardGrid, CardTitle, Input, Label, Modal, Spinner,
};
use crate::dialog::{outcome_message, AddToCollectionDialog};
use crate::models::{Collection, Title, TitleDetail};
use crate::pagination::Paginator;
use crate::removal::{edit_collection, RemovalFlow};
use crate::state::AppContext;
use crate::storage::BrowserStorage;
use crate::util::{collection_href, decode_route_segment, parse_title_id, title_href};
use icons::{Check, ChevronLeft, ChevronRight, Plus};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_params};
use leptos_router::params::Params;

/// `<select>` value for "new collection". Underscores are not valid in names.
const NEW_COLLECTION_OPTION: &str = "__new__";

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "border-b-2 border-accent pb-1 text-white"
        } else {
            "border-b-2 border-transparent pb-1 text-white/70 hover:text-white"
        }
    };

    view! {
        <header class="mx-auto w-full max-w-6xl px-4 pt-6">
            <div class="rounded-t-3xl bg-panel px-6 py-5 text-white">
                <div class="text-lg font-semibold">"AniShelf"</div>
                <div class="text-xs text-white/60">"Trending anime, kept in your own collections."</div>
            </div>
            <nav class="flex justify-around rounded-b-3xl border-t border-white/5 bg-panel px-6 py-4 text-sm">
                <a href="/" class=move || link_class("/")>"Home"</a>
                <a href="/collection" class=move || link_class("/collection")>"Collection"</a>
            </nav>
        </header>
    }
}

#[component]
fn TitleCard(title: Title, on_add: Callback<Title>) -> impl IntoView {
    let name = title.display_name().to_string();
    let cover = title.cover_url().to_string();
    let href = title_href(title.id);

    view! {
        <Card>
            <img src=cover alt=name.clone() class="h-72 w-full object-cover" />
            <CardBody>
                <a href=href class="hover:text-accent">
                    <CardTitle>{name}</CardTitle>
                </a>
                <CardFooter>
                    <Button
                        size=ButtonSize::Icon
                        attr:aria-label="Add to collection"
                        on:click=move |_: MouseEvent| on_add.run(title.clone())
                    >
                        <Plus />
                    </Button>
                </CardFooter>
            </CardBody>
        </Card>
    }
}

#[component]
fn Pager(pager: RwSignal<Paginator>) -> impl IntoView {
    view! {
        <Show when=move || pager.with(|p| p.page_count() > 0) fallback=|| ().into_view()>
            <nav class="mt-8 flex items-center justify-center gap-1" aria-label="Pagination">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:aria-label="Previous page"
                    attr:disabled=move || !pager.with(|p| p.has_prev())
                    on:click=move |_: MouseEvent| pager.update(|p| p.prev())
                >
                    <ChevronLeft />
                </Button>
                {move || {
                    let p = pager.get();
                    (1..=p.page_count())
                        .map(|n| {
                            let variant = if n == p.current_page() {
                                ButtonVariant::Default
                            } else {
                                ButtonVariant::Ghost
                            };
                            view! {
                                <Button
                                    variant=variant
                                    size=ButtonSize::Sm
                                    on:click=move |_: MouseEvent| pager.update(|p| p.go_to(n))
                                >
                                    {n}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:aria-label="Next page"
                    attr:disabled=move || !pager.with(|p| p.has_next())
                    on:click=move |_: MouseEvent| pager.update(|p| p.next())
                >
                    <ChevronRight />
                </Button>
            </nav>
        </Show>
    }
}

/// Fresh dialog: no typed name, no error, and no notice left from an earlier add.
fn clear_dialog_feedback(
    new_name: RwSignal<String>,
    dialog_error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
) {
    new_name.set(String::new());
    dialog_error.set(None);
    notice.set(None);
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let titles: RwSignal<Vec<Title>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let pager: RwSignal<Paginator> = RwSignal::new(Paginator::default());

    let store = RwSignal::new(CollectionStore::load(BrowserStorage));
    let dialog: RwSignal<AddToCollectionDialog> = RwSignal::new(AddToCollectionDialog::default());
    let new_name: RwSignal<String> = RwSignal::new(String::new());
    let dialog_error: RwSignal<Option<String>> = RwSignal::new(None);
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let api_client = app_state.0.api_client.get_untracked();
    let per_page = app_state.0.trending_per_page;
    spawn_local(async move {
        match api_client.fetch_trending(per_page).await {
            Ok(list) => {
                log::debug!("fetched {} trending titles", list.len());
                pager.update(|p| p.set_total(list.len()));
                titles.set(list);
            }
            Err(e) => {
                log::error!("trending fetch failed ({}): {e}", e.kind);
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let open_dialog = Callback::new(move |title: Title| {
        // Another tab may have written since mount.
        store.update(|s| s.reload());
        clear_dialog_feedback(new_name, dialog_error, notice);
        dialog.update(|d| d.open(title));
    });

    let close_dialog = Callback::new(move |_: ()| {
        dialog.update(|d| d.cancel());
        dialog_error.set(None);
    });

    let on_select = move |value: String| {
        dialog_error.set(None);
        if value == NEW_COLLECTION_OPTION {
            dialog.update(|d| d.choose_new());
        } else {
            let set = store.with_untracked(|s| s.set().clone());
            dialog.update(|d| d.choose_existing(&value, &set));
        }
        new_name.set(dialog.with_untracked(|d| d.new_name().unwrap_or_default().to_string()));
    };

    let on_submit = move |_: MouseEvent| {
        let mut d = dialog.get_untracked();
        d.set_new_name(&new_name.get_untracked());

        let Some(title_name) = d.title().map(|t| t.display_name().to_string()) else {
            return;
        };
        let target_name = d.target_name().unwrap_or_default().to_string();

        match store.try_update(|s| d.submit(s)) {
            Some(Ok(outcome)) => {
                notice.set(Some(outcome_message(outcome, &title_name, &target_name)));
                dialog_error.set(None);
                new_name.set(String::new());
                dialog.set(d);
            }
            Some(Err(e)) => {
                log::debug!("add to collection rejected: {e}");
                dialog_error.set(Some(e.to_string()));
                dialog.set(d);
            }
            None => {}
        }
    };

    let remove_member = move |title_id: i64| {
        let d = dialog.get_untracked();
        store.update(|s| {
            d.remove_member(s, title_id);
        });
    };

    let remove_collection = move |name: String| {
        let mut d = dialog.get_untracked();
        store.update(|s| {
            d.remove_collection(s, &name);
        });
        dialog.set(d);
    };

    let dialog_open = Signal::derive(move || dialog.with(|d| d.is_open()));
    let dialog_title = Signal::derive(move || {
        if dialog.with(|d| d.existing_name().is_some()) {
            "Edit Collection".to_string()
        } else {
            "Add to Collection".to_string()
        }
    });
    let is_existing = move || dialog.with(|d| d.existing_name().is_some());
    let already_member = move || {
        let d = dialog.get();
        store.with(|s| d.selected_is_member(s.set()))
    };
    let collection_names = move || store.with(|s| s.set().names());

    let new_collection_body = move || {
        view! {
            <div class="flex flex-col gap-3">
                <div class="flex flex-col gap-1.5">
                    <Label html_for="new-collection-name">"New collection name"</Label>
                    <Input
                        id="new-collection-name"
                        placeholder="Enter new collection name"
                        bind_value=new_name
                        invalid=Signal::derive(move || dialog_error.get().is_some())
                    />
                </div>
                <ul class="flex flex-col gap-2">
                    {move || {
                        collection_names()
                            .into_iter()
                            .map(|name| {
                                let target = name.clone();
                                view! {
                                    <li class="flex items-center justify-between rounded-md bg-white/5 px-3 py-2 text-sm">
                                        <span>{name}</span>
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            on:click=move |_: MouseEvent| remove_collection(target.clone())
                                        >
                                            "Remove"
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        }
    };

    let existing_collection_body = move || {
        view! {
            <div class="flex flex-col gap-3">
                <Show when=already_member fallback=|| ().into_view()>
                    <Alert class="border-accent/40">
                        <AlertDescription>"This title is already in the collection."</AlertDescription>
                    </Alert>
                </Show>
                <ul class="flex flex-col gap-2">
                    {move || {
                        let d = dialog.get();
                        let chosen = d.title().map(|t| t.id);
                        let members = store
                            .with(|s| d.selected_collection(s.set()).map(|c| c.titles.clone()))
                            .unwrap_or_default();

                        members
                            .into_iter()
                            .map(|t| {
                                let id = t.id;
                                let is_chosen = chosen == Some(id);
                                view! {
                                    <li class="flex items-center justify-between gap-2 rounded-md bg-white/5 px-3 py-2 text-sm">
                                        <span class="flex items-center gap-2">
                                            {t.display_name().to_string()}
                                            {is_chosen.then(|| view! { <Badge><Check />"Added"</Badge> })}
                                        </span>
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            on:click=move |_: MouseEvent| remove_member(id)
                                        >
                                            "Remove"
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        }
    };

    view! {
        <div class="mx-auto w-full max-w-6xl px-4 py-8 text-white">
            <Show when=move || notice.get().is_some() fallback=|| ().into_view()>
                {move || notice.get().map(|n| view! {
                    <Alert class="mb-4 border-accent/40">
                        <AlertDescription>{n}</AlertDescription>
                    </Alert>
                })}
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-white/60">
                        <Spinner />
                        "Loading..."
                    </div>
                }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! {
                        <Alert class="border-red-500/40">
                            <AlertDescription class="text-red-400">
                                {move || format!("Error: {}", error.get().unwrap_or_default())}
                            </AlertDescription>
                        </Alert>
                    }
                >
                    <CardGrid>
                        {move || {
                            let list = titles.get();
                            pager
                                .get()
                                .page_slice(&list)
                                .iter()
                                .cloned()
                                .map(|t| view! { <TitleCard title=t on_add=open_dialog /> })
                                .collect_view()
                        }}
                    </CardGrid>
                    <Pager pager=pager />
                </Show>
            </Show>

            <Modal open=dialog_open title=dialog_title on_close=close_dialog>
                <div class="flex flex-col gap-4">
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="collection-select">"Or select existing collection"</Label>
                        <select
                            id="collection-select"
                            class="h-9 rounded-md border border-white/15 bg-panel px-2 text-sm text-white"
                            on:change=move |ev| on_select(event_target_value(&ev))
                        >
                            <option
                                value=NEW_COLLECTION_OPTION
                                prop:selected=move || dialog.with(|d| d.existing_name().is_none())
                            >
                                "Add New Collection"
                            </option>
                            {move || {
                                let current = dialog.with(|d| d.existing_name().map(str::to_string));
                                collection_names()
                                    .into_iter()
                                    .map(|name| {
                                        let selected = current.as_deref() == Some(name.as_str());
                                        let label = name.clone();
                                        view! {
                                            <option value=name prop:selected=selected>{label}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <Show when=is_existing fallback=new_collection_body>
                        {existing_collection_body}
                    </Show>

                    <Show when=move || dialog_error.get().is_some() fallback=|| ().into_view()>
                        {move || dialog_error.get().map(|e| view! {
                            <Alert class="border-red-500/40">
                                <AlertDescription class="text-red-400">{e}</AlertDescription>
                            </Alert>
                        })}
                    </Show>

                    <div class="flex items-center justify-end gap-2 pt-2">
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Sm
                            on:click=move |_: MouseEvent| close_dialog.run(())
                        >
                            "Close"
                        </Button>
                        <Button size=ButtonSize::Sm on:click=on_submit>
                            "Save Changes"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn CollectionSection(collection: Collection) -> impl IntoView {
    let href = collection_href(&collection.name);
    let is_empty = collection.titles.is_empty();

    view! {
        <section class="mb-10">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="text-xl font-semibold">{collection.name.clone()}</h2>
                <a
                    href=href
                    class="inline-flex h-9 items-center rounded-md bg-accent px-4 text-sm font-medium text-black hover:bg-accent/90"
                >
                    "Edit Collection"
                </a>
            </div>
            {is_empty.then(|| view! { <div class="text-sm text-white/60">"No titles yet."</div> })}
            <CardGrid>
                {collection
                    .titles
                    .into_iter()
                    .map(|t| {
                        let name = t.display_name().to_string();
                        let cover = t.cover_url().to_string();
                        let href = title_href(t.id);
                        view! {
                            <Card>
                                <img src=cover alt=name.clone() class="h-72 w-full object-cover" />
                                <a href=href class="hover:text-accent">
                                    <CardBody>
                                        <CardTitle>{name}</CardTitle>
                                    </CardBody>
                                </a>
                            </Card>
                        }
                    })
                    .collect_view()}
            </CardGrid>
        </section>
    }
}

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let set = CollectionStore::load(BrowserStorage).set().clone();

    if set.is_empty() {
        return view! {
            <div class="mx-auto w-full max-w-6xl px-4 py-8 text-sm text-white/60">
                "No collections yet. Use the + button on a title to start one."
            </div>
        }
        .into_any();
    }

    view! {
        <div class="mx-auto w-full max-w-6xl px-4 py-8 text-white">
            {set
                .iter()
                .cloned()
                .map(|c| view! { <CollectionSection collection=c /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CollectionRouteParams {
    pub collection_name: Option<String>,
}

#[component]
pub fn CollectionDetailPage() -> impl IntoView {
    let params = use_params::<CollectionRouteParams>();

    // Tracked for the view, untracked for click handlers.
    let collection_name = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.collection_name)
            .map(|n| decode_route_segment(&n))
            .unwrap_or_default()
    };
    let collection_name_untracked = move || {
        params
            .get_untracked()
            .ok()
            .and_then(|p| p.collection_name)
            .map(|n| decode_route_segment(&n))
            .unwrap_or_default()
    };

    let store = RwSignal::new(CollectionStore::load(BrowserStorage));
    let removal: RwSignal<RemovalFlow> = RwSignal::new(RemovalFlow::default());

    let collection = move || {
        let name = collection_name();
        store.with(|s| s.get(&name).cloned())
    };

    let on_confirm = move |_: MouseEvent| {
        let name = collection_name_untracked();
        let mut flow = removal.get_untracked();
        store.update(|s| {
            flow.confirm(s, &name);
        });
        removal.set(flow);
    };

    let on_cancel = Callback::new(move |_: ()| {
        removal.update(|r| {
            r.cancel();
        });
    });

    let on_edit = move |_: MouseEvent| edit_collection(&collection_name_untracked());

    let on_back = move |_: MouseEvent| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    let prompt_open = Signal::derive(move || removal.with(|r| r.is_prompt_open()));
    let staged_name = move || {
        removal
            .with(|r| r.staged().map(|t| t.display_name().to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="mx-auto w-full max-w-6xl px-4 py-8 text-white">
            <Show
                when=move || collection().is_some()
                fallback=|| view! { <div class="text-sm text-white/60">"Collection not found"</div> }
            >
                <div class="mb-6 flex items-center justify-between">
                    <h2 class="text-xl font-semibold">{collection_name}</h2>
                    <div class="flex items-center gap-2">
                        <Button size=ButtonSize::Sm on:click=on_edit>"Edit Collection"</Button>
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on:click=on_back>
                            "Back"
                        </Button>
                    </div>
                </div>

                {move || {
                    collection()
                        .is_some_and(|c| c.titles.is_empty())
                        .then(|| view! { <div class="text-sm text-white/60">"This collection is empty."</div> })
                }}

                <CardGrid>
                    {move || {
                        collection()
                            .map(|c| c.titles)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|t| {
                                let name = t.display_name().to_string();
                                let cover = t.cover_url().to_string();
                                let href = title_href(t.id);
                                view! {
                                    <Card>
                                        <a href=href.clone()>
                                            <img src=cover alt=name.clone() class="h-72 w-full object-cover" />
                                        </a>
                                        <CardBody>
                                            <a href=href class="hover:text-accent">
                                                <CardTitle>{name}</CardTitle>
                                            </a>
                                            <CardFooter>
                                                <Button
                                                    variant=ButtonVariant::Destructive
                                                    size=ButtonSize::Sm
                                                    on:click=move |_: MouseEvent| removal.update(|r| r.stage(t.clone()))
                                                >
                                                    "Remove"
                                                </Button>
                                            </CardFooter>
                                        </CardBody>
                                    </Card>
                                }
                            })
                            .collect_view()
                    }}
                </CardGrid>
            </Show>

            <Modal
                open=prompt_open
                title=Signal::derive(|| "Confirm Remove".to_string())
                on_close=on_cancel
            >
                <p class="text-sm text-white/80">
                    "Are you sure you want to remove "
                    <strong>{staged_name}</strong>
                    " from the collection?"
                </p>
                <div class="mt-4 flex items-center justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on:click=move |_: MouseEvent| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button variant=ButtonVariant::Destructive size=ButtonSize::Sm on:click=on_confirm>
                        "Confirm"
                    </Button>
                </div>
            </Modal>
        </div>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct TitleRouteParams {
    pub anime_id: Option<String>,
}

#[component]
fn TitleDetailView(detail: TitleDetail) -> impl IntoView {
    let name = detail.display_name().to_string();
    let synopsis = detail.plain_description();
    let cover = detail.cover_image.large.clone().unwrap_or_default();
    let episodes = detail
        .episodes
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let score = detail
        .average_score
        .map(|n| format!("{n}%"))
        .unwrap_or_else(|| "-".to_string());
    let banner = detail.banner_image.clone();

    view! {
        <div class="relative">
            {banner.map(|src| view! {
                <img src=src alt="Banner" class="absolute inset-x-0 top-0 -z-10 h-64 w-full rounded-xl object-cover opacity-60" />
            })}
            <Card class="m-4 md:flex-row">
                <img src=cover alt=name.clone() class="w-full object-cover md:w-64" />
                <CardBody class="gap-4">
                    <h2 class="text-2xl font-semibold">{name}</h2>
                    <p class="whitespace-pre-line text-sm text-white/80">{synopsis}</p>
                    <div class="text-sm">
                        <strong>"Number of Episodes: "</strong>
                        {episodes}
                    </div>
                    <div class="flex flex-wrap items-center gap-1 text-sm">
                        <strong>"Genres: "</strong>
                        {detail
                            .genres
                            .into_iter()
                            .map(|g| view! { <Badge>{g}</Badge> })
                            .collect_view()}
                    </div>
                    <div class="text-sm">
                        <strong>"Rating: "</strong>
                        {score}
                    </div>
                </CardBody>
            </Card>
        </div>
    }
}

/// Signals behind the title detail page.
#[derive(Clone, Copy)]
struct TitleSlots {
    detail: RwSignal<Option<TitleDetail>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    /// Bumped per fetch; a response carrying an older id is dropped.
    request_id: RwSignal<u64>,
}

impl TitleSlots {
    fn new() -> Self {
        Self {
            detail: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            request_id: RwSignal::new(0),
        }
    }

    /// Stores a finished fetch. Returns false when the response is stale or the
    /// page was already torn down (its signals disposed).
    fn apply_response(self, rid: u64, id: i64, result: ApiResult<TitleDetail>) -> bool {
        if self.request_id.try_get_untracked() != Some(rid) {
            return false;
        }
        match result {
            Ok(d) => {
                log::debug!("loaded title {}", d.id);
                let _ = self.detail.try_set(Some(d));
            }
            Err(e) if e.is_not_found() => log::info!("title {id} not found"),
            Err(e) => {
                log::error!("title fetch failed ({}): {e}", e.kind);
                let _ = self.error.try_set(Some(e.to_string()));
            }
        }
        let _ = self.loading.try_set(false);
        true
    }
}

#[component]
pub fn TitleDetailPage() -> impl IntoView {
    let api_client = expect_context::<AppContext>().0.api_client;
    let params = use_params::<TitleRouteParams>();
    let anime_id = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.anime_id)
            .and_then(|s| parse_title_id(&s))
    };

    let slots = TitleSlots::new();
    let TitleSlots {
        detail,
        loading,
        error,
        request_id,
    } = slots;

    Effect::new(move |_| {
        let id = anime_id();
        let rid = request_id.get_untracked().wrapping_add(1);
        request_id.set(rid);
        detail.set(None);
        error.set(None);

        let Some(id) = id else {
            loading.set(false);
            return;
        };

        loading.set(true);
        let client = api_client.get_untracked();
        spawn_local(async move {
            let result = client.fetch_title(id).await;
            slots.apply_response(rid, id, result);
        });
    });

    view! {
        <div class="mx-auto w-full max-w-5xl px-4 py-8 text-white">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex items-center gap-2 text-sm text-white/60">
                            <Spinner />
                            "Loading..."
                        </div>
                    }
                    .into_any();
                }
                if let Some(e) = error.get() {
                    return view! {
                        <Alert class="border-red-500/40">
                            <AlertDescription class="text-red-400">{format!("Error: {e}")}</AlertDescription>
                        </Alert>
                    }
                    .into_any();
                }
                match detail.get() {
                    Some(d) => view! { <TitleDetailView detail=d /> }.into_any(),
                    None => view! { <div class="text-sm text-white/60">"Anime not found."</div> }.into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverImage, TitleName};

    fn detail(id: i64) -> TitleDetail {
        TitleDetail {
            id,
            title: TitleName {
                romaji: Some("Frieren".to_string()),
            },
            cover_image: CoverImage::default(),
            banner_image: None,
            description: None,
            episodes: Some(28),
            genres: vec![],
            average_score: Some(90),
        }
    }

    #[test]
    fn test_opening_dialog_clears_previous_notice() {
        let owner = Owner::new();
        owner.set();
        let new_name = RwSignal::new("Fav".to_string());
        let dialog_error = RwSignal::new(Some("Please enter a collection name.".to_string()));
        let notice = RwSignal::new(Some("Added Frieren to \"Fav\".".to_string()));

        clear_dialog_feedback(new_name, dialog_error, notice);

        assert_eq!(new_name.get_untracked(), "");
        assert!(dialog_error.get_untracked().is_none());
        assert!(notice.get_untracked().is_none());
    }

    #[test]
    fn test_title_response_applies_to_current_request() {
        let owner = Owner::new();
        owner.set();
        let slots = TitleSlots::new();
        slots.request_id.set(1);

        assert!(slots.apply_response(1, 21, Ok(detail(21))));
        assert_eq!(slots.detail.get_untracked().map(|d| d.id), Some(21));
        assert!(!slots.loading.get_untracked());
    }

    #[test]
    fn test_stale_title_response_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let slots = TitleSlots::new();
        slots.request_id.set(2);

        assert!(!slots.apply_response(1, 21, Ok(detail(21))));
        assert!(slots.detail.get_untracked().is_none());
        assert!(slots.loading.get_untracked());
    }

    #[test]
    fn test_title_response_after_page_disposed_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let slots = TitleSlots::new();
        slots.request_id.set(1);
        owner.unset();

        assert!(!slots.apply_response(1, 21, Ok(detail(21))));
    }
}
