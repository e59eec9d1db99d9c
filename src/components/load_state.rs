use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="text-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{ "Loading..." }</span>
            </div>
        </div>
    }
}

/// Page-level error shown in place of content that failed to load.
#[component]
pub fn ErrorPanel(message: String, #[prop(optional, into)] title: Option<String>) -> impl IntoView {
    view! {
        <div class="alert alert-danger" role="alert">
            {title.map(|title| view! { <h4>{ title }</h4> })}
            <p class="mb-0">{ message }</p>
        </div>
    }
}
