use leptos::*;
use leptos::logging::{log, warn};
use leptos_router::use_params_map;
use crate::api::{use_gateway, Gateway};
use crate::components::load_state::{ErrorPanel, LoadingSpinner};
use crate::components::review_form::ReviewForm;
use crate::components::review_list::ReviewList;
use crate::loader::{use_loader_with, LoadStatus, Loader};
use crate::models::id::PlaceId;
use crate::models::place::{Place, DETAIL_PLACEHOLDER};
use crate::models::review::Review;
use crate::views::record_view;

/// Loader for the place shown on the detail page. Each applied load of a
/// place records one view; superseded or abandoned loads record nothing.
pub fn use_place(
    gateway: Gateway,
    place_id: impl Fn() -> PlaceId + 'static,
) -> RwSignal<Loader<PlaceId, Place>> {
    let fetch_gateway = gateway.clone();
    use_loader_with(
        place_id,
        move |id: PlaceId| {
            let gateway = fetch_gateway.clone();
            async move { gateway.get_place(&id).await }
        },
        // fire and forget, the loaded place is never touched
        move |id: &PlaceId, _: &Place| record_view(gateway.clone(), id.clone()),
    )
}

/// Re-reads the reviews of `id` and swaps them into the loaded place, as
/// long as the page still shows that place. A failed refresh keeps the
/// reviews already on screen.
pub fn spawn_reviews_refresh(gateway: Gateway, place: RwSignal<Loader<PlaceId, Place>>, id: PlaceId) {
    spawn_local(async move {
        match gateway.list_reviews(&id).await {
            Ok(reviews) => {
                let merged = place.try_update(|loader| {
                    loader.update_value_for(&id, |current| current.reviews = reviews)
                });
                if merged != Some(true) {
                    log!("[REVIEWS] Dropped refreshed reviews for place {}", id);
                }
            }
            Err(err) => warn!("[REVIEWS] Refresh for place {} failed: {}", id, err.detail()),
        }
    });
}

#[component]
pub fn PlaceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let place_id = move || params.with(|p| PlaceId::new(p.get("id").cloned().unwrap_or_default()));

    let gateway = use_gateway();
    let place = use_place(gateway.clone(), place_id);

    let on_refresh = Callback::new(move |id: PlaceId| spawn_reviews_refresh(gateway.clone(), place, id));
    let on_review_added = Callback::new(move |review: Review| {
        place.update(|loader| {
            if let Some(place) = loader.value_mut() {
                place.push_review(review);
            }
        });
    });

    view! {
        <div class="container py-5">
            {move || place.with(|loader| match (loader.status(), loader.value()) {
                (LoadStatus::Error, _) => view! {
                    <ErrorPanel message=loader.error().unwrap_or_default().to_string() />
                }.into_view(),
                (LoadStatus::Success, Some(place)) => view! {
                    <PlaceDetail place=place.clone() on_review_added=on_review_added on_refresh=on_refresh />
                }.into_view(),
                _ => view! { <LoadingSpinner /> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn PlaceDetail(
    place: Place,
    on_review_added: Callback<Review>,
    on_refresh: Callback<PlaceId>,
) -> impl IntoView {
    let image = place.image_or(DETAIL_PLACEHOLDER);
    let id = place.id.clone();

    view! {
        <div class="row mb-5">
            <div class="col-lg-8">
                <img src=image alt=place.name.clone() class="img-fluid rounded shadow-sm" />
            </div>
            <div class="col-lg-4">
                <div class="mb-4">
                    <h1>{ place.name.clone() }</h1>
                    <div class="d-flex align-items-center mb-3">
                        <i class="bi bi-geo-alt-fill text-danger me-2"></i>
                        <span class="text-muted">{ place.location.clone() }</span>
                    </div>
                    <div class="d-flex align-items-center">
                        <i class="bi bi-eye-fill text-primary me-2"></i>
                        <span>{ format!("{} views", place.views) }</span>
                    </div>
                </div>
                <div class="mb-4">
                    <h4 class="mb-3">{ "About this place" }</h4>
                    <p>{ place.description.clone() }</p>
                </div>
            </div>
        </div>
        <div class="row mt-5">
            <div class="col-lg-8">
                <ReviewList
                    reviews=place.reviews.clone()
                    on_refresh=Callback::new(move |_| on_refresh.call(id.clone()))
                />
            </div>
            <div class="col-lg-4">
                <ReviewForm place_id=place.id.clone() on_review_added=on_review_added />
            </div>
        </div>
    }
}
