use leptos::*;
use crate::api::use_gateway;
use crate::components::hero_carousel::{FeatureRow, HeroCarousel};
use crate::components::load_state::{ErrorPanel, LoadingSpinner};
use crate::components::place_card::PlaceGrid;
use crate::loader::{use_loader, LoadStatus};

#[component]
pub fn HomePage() -> impl IntoView {
    let gateway = use_gateway();
    let popular = use_loader(
        || (),
        move |_| {
            let gateway = gateway.clone();
            async move { gateway.popular_places().await }
        },
    );

    view! {
        <HeroCarousel />
        <div class="container py-5">
            <div class="text-center mb-5">
                <h2 class="display-5">{ "Most Popular Destinations" }</h2>
                <p class="lead text-muted">{ "Explore the places travelers love most" }</p>
            </div>
            {move || popular.with(|loader| match loader.status() {
                LoadStatus::Success => view! {
                    <PlaceGrid places=loader.value().cloned().unwrap_or_default() />
                }.into_view(),
                LoadStatus::Error => view! {
                    <ErrorPanel
                        title="Oops! Something went wrong"
                        message=loader.error().unwrap_or_default().to_string()
                    />
                }.into_view(),
                LoadStatus::Loading | LoadStatus::Idle => view! { <LoadingSpinner /> }.into_view(),
            })}
            <FeatureRow />
        </div>
    }
}
