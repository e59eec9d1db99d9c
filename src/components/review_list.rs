use leptos::*;
use crate::models::review::Review;

/// Reviews as loaded with their place. With `on_refresh`, a button asks for
/// the place's reviews again.
#[component]
pub fn ReviewList(
    reviews: Vec<Review>,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    let refresh = on_refresh.map(|on_refresh| view! {
        <button
            class="btn btn-sm btn-outline-secondary refresh-reviews"
            on:click=move |_| on_refresh.call(())
        >
            <i class="bi bi-arrow-clockwise"></i>{ " Refresh" }
        </button>
    });

    if reviews.is_empty() {
        return view! {
            <div class="card text-center py-5">
                <div class="card-body">
                    <h5>{ "No reviews yet" }</h5>
                    <p>{ "Be the first to share your experience!" }</p>
                    { refresh }
                </div>
            </div>
        }
        .into_view();
    }

    view! {
        <div>
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h4 class="mb-0">{ format!("Traveler Reviews ({})", reviews.len()) }</h4>
                { refresh }
            </div>
            {reviews.into_iter().map(|review| {
                let stars = review.rating.stars().into_iter().map(|filled| {
                    let class = if filled { "bi bi-star-fill text-warning" } else { "bi bi-star text-warning" };
                    view! { <i class=class></i> }
                }).collect::<Vec<_>>();
                let created_on = review.created_on();

                view! {
                    <div class="card mb-3">
                        <div class="card-body">
                            <div class="d-flex justify-content-between">
                                <h5>{ review.user_name }</h5>
                                <div title=format!("{}/5", review.rating)>{ stars }</div>
                            </div>
                            <small class="text-muted">{ created_on }</small>
                            <p class="mt-3">{ review.comment }</p>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_view()
}
