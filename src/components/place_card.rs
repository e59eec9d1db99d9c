/// Card and grid views for a list of places.
use leptos::*;
use leptos_router::A;
use crate::models::place::{Place, CARD_PLACEHOLDER};

const SUMMARY_CHARS: usize = 100;

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let href = format!("/places/{}", place.id);
    let image = place.image_or(CARD_PLACEHOLDER);
    let summary = place.summary(SUMMARY_CHARS);

    view! {
        <div class="card h-100 shadow-sm">
            <img class="card-img-top card-img-custom" src=image alt=place.name.clone() />
            <div class="card-body">
                <div class="d-flex justify-content-between align-items-center mb-2">
                    <h5 class="card-title">{ place.name }</h5>
                    <span class="badge bg-info">{ format!("{} views", place.views) }</span>
                </div>
                <p class="card-text text-muted mb-2">{ place.location }</p>
                <p class="card-text">{ summary }</p>
            </div>
            <div class="card-footer bg-white border-top-0">
                <A href=href class="btn btn-primary w-100">{ "View Details" }</A>
            </div>
        </div>
    }
}

#[component]
pub fn PlaceGrid(places: Vec<Place>) -> impl IntoView {
    view! {
        <div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
            {places.into_iter().map(|place| view! {
                <div class="col">
                    <PlaceCard place=place />
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
