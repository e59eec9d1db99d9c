use leptos::*;
use leptos::ev::SubmitEvent;
use crate::api::use_gateway;
use crate::models::id::PlaceId;
use crate::models::review::{NewReview, Rating, Review};
use crate::submit::{spawn_submission, FormState, ReviewDraft};

/// Review form for one place. `on_review_added` receives the review the
/// server created; the caller merges it into the place it is showing.
#[component]
pub fn ReviewForm(place_id: PlaceId, on_review_added: Callback<Review>) -> impl IntoView {
    let gateway = use_gateway();
    let form = create_rw_signal(FormState::<ReviewDraft>::new());
    let pending = move || form.with(FormState::is_pending);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let place_id = place_id.clone();
        spawn_submission(
            form,
            move |review: NewReview| async move { gateway.add_review(&place_id, &review).await },
            move |review: Review| on_review_added.call(review),
        );
    };

    let rating_options = (Rating::MIN..=Rating::MAX)
        .rev()
        .filter_map(Rating::new)
        .map(|rating| view! { <option value=rating.to_string()>{ rating.label() }</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="card mb-4">
            <h5 class="card-header">{ "Share Your Experience" }</h5>
            <div class="card-body">
                {move || form.with(|f| f.error().map(|err| view! {
                    <div class="alert alert-danger">{ err.to_string() }</div>
                }))}
                <form on:submit=handle_submit>
                    <div class="mb-3">
                        <label class="form-label">{ "Your Name" }</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || form.with(|f| f.draft().user_name.clone())
                            on:input=move |e| form.update(|f| f.draft_mut().user_name = event_target_value(&e))
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">{ "Rating" }</label>
                        <select
                            class="form-select"
                            prop:value=move || form.with(|f| f.draft().rating.to_string())
                            on:change=move |e| {
                                if let Some(rating) = event_target_value(&e).parse::<u8>().ok().and_then(Rating::new) {
                                    form.update(|f| f.draft_mut().rating = rating);
                                }
                            }
                        >
                            { rating_options }
                        </select>
                    </div>
                    <div class="mb-3">
                        <label class="form-label">{ "Your Review" }</label>
                        <textarea
                            class="form-control"
                            rows="4"
                            prop:value=move || form.with(|f| f.draft().comment.clone())
                            on:input=move |e| form.update(|f| f.draft_mut().comment = event_target_value(&e))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=pending>
                        {move || if pending() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
