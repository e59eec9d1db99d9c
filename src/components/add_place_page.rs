use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use crate::components::place_form::PlaceForm;
use crate::models::place::Place;

/// How long the success notice stays up before opening the new place.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn AddPlacePage() -> impl IntoView {
    let navigate = use_navigate();
    let (created, set_created) = create_signal(false);

    let on_created = Callback::new(move |place: Place| {
        set_created.set(true);
        let navigate = navigate.clone();
        let path = format!("/places/{}", place.id);
        spawn_local(async move {
            TimeoutFuture::new(REDIRECT_DELAY_MS).await;
            navigate(&path, NavigateOptions::default());
        });
    });

    view! {
        <div class="container py-5">
            <div class="row">
                <div class="col-lg-8 mx-auto">
                    <div class="card shadow">
                        <h4 class="card-header bg-primary text-white">{ "Add a New Destination" }</h4>
                        <div class="card-body">
                            <Show when=move || created.get()>
                                <div class="alert alert-success">
                                    { "Destination added successfully! Redirecting to the destination page..." }
                                </div>
                            </Show>
                            <PlaceForm on_created=on_created />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
