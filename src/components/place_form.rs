use leptos::*;
use leptos::ev::SubmitEvent;
use crate::api::use_gateway;
use crate::models::place::{NewPlace, Place};
use crate::submit::{spawn_submission, FormState, PlaceDraft};

/// Form for a new destination. Input stays in place if the server refuses
/// it, and is cleared once the server accepts it.
#[component]
pub fn PlaceForm(on_created: Callback<Place>) -> impl IntoView {
    let gateway = use_gateway();
    let form = create_rw_signal(FormState::<PlaceDraft>::new());
    let pending = move || form.with(FormState::is_pending);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        spawn_submission(
            form,
            move |place: NewPlace| async move { gateway.create_place(&place).await },
            move |place: Place| on_created.call(place),
        );
    };

    view! {
        {move || form.with(|f| f.error().map(|err| view! {
            <div class="alert alert-danger">{ err.to_string() }</div>
        }))}
        <form on:submit=handle_submit>
            <div class="mb-3">
                <label class="form-label">{ "Destination Name" }</label>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Enter the name of the destination"
                    prop:value=move || form.with(|f| f.draft().name.clone())
                    on:input=move |e| form.update(|f| f.draft_mut().name = event_target_value(&e))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">{ "Location" }</label>
                <input
                    type="text"
                    class="form-control"
                    placeholder="City, Country"
                    prop:value=move || form.with(|f| f.draft().location.clone())
                    on:input=move |e| form.update(|f| f.draft_mut().location = event_target_value(&e))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">{ "Description" }</label>
                <textarea
                    class="form-control"
                    rows="5"
                    placeholder="Describe this destination..."
                    prop:value=move || form.with(|f| f.draft().description.clone())
                    on:input=move |e| form.update(|f| f.draft_mut().description = event_target_value(&e))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">{ "Image URL" }</label>
                <input
                    type="url"
                    class="form-control"
                    placeholder="https://example.com/image.jpg"
                    prop:value=move || form.with(|f| f.draft().image_url.clone())
                    on:input=move |e| form.update(|f| f.draft_mut().image_url = event_target_value(&e))
                />
                <div class="form-text text-muted">{ "Optional: Add a URL to an image of this destination" }</div>
            </div>
            <div class="d-grid gap-2">
                <button type="submit" class="btn btn-primary btn-lg" disabled=pending>
                    {move || if pending() { "Submitting..." } else { "Add Destination" }}
                </button>
            </div>
        </form>
    }
}
