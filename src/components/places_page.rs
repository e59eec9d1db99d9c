/// Full catalog with a search box over name, location and description.
use leptos::*;
use crate::api::use_gateway;
use crate::components::load_state::{ErrorPanel, LoadingSpinner};
use crate::components::place_card::PlaceGrid;
use crate::loader::{use_loader, LoadStatus};
use crate::models::place::Place;
use crate::search;

#[component]
pub fn PlacesPage() -> impl IntoView {
    let gateway = use_gateway();
    let places = use_loader(
        || (),
        move |_| {
            let gateway = gateway.clone();
            async move { gateway.list_places().await }
        },
    );
    let (query, set_query) = create_signal(String::new());

    // Re-derived whenever the loaded list or the query changes.
    let visible = create_memo(move |_| {
        let query = query.get();
        places.with(|loader| {
            let all: &[Place] = loader.value().map(Vec::as_slice).unwrap_or(&[]);
            search::filter(all, &query)
        })
    });

    view! {
        <div class="container py-5">
            <div class="text-center mb-5">
                <h1 class="display-5">{ "Explore Beautiful Places" }</h1>
                <p class="lead text-muted">{ "Discover amazing destinations around the world" }</p>
            </div>
            <div class="row mb-4">
                <div class="col-lg-6 mx-auto">
                    <div class="input-group mb-3">
                        <span class="input-group-text"><i class="bi bi-search"></i></span>
                        <input
                            class="form-control"
                            placeholder="Search for destinations..."
                            prop:value=query
                            on:input=move |e| set_query.set(event_target_value(&e))
                        />
                    </div>
                </div>
            </div>
            {move || match places.with(|loader| (loader.status(), loader.error().map(str::to_string))) {
                (LoadStatus::Error, message) => view! {
                    <ErrorPanel message=message.unwrap_or_default() />
                }.into_view(),
                (LoadStatus::Success, _) => {
                    let found = visible.get();
                    if found.is_empty() {
                        view! {
                            <div class="text-center py-5">
                                <h4>{ "No destinations found" }</h4>
                                <p>{ "Try adjusting your search criteria" }</p>
                            </div>
                        }.into_view()
                    } else {
                        view! { <PlaceGrid places=found /> }.into_view()
                    }
                }
                _ => view! { <LoadingSpinner /> }.into_view(),
            }}
        </div>
    }
}
