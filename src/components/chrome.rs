use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-primary">
            <div class="container">
                <A href="/" class="navbar-brand">{ "Wanderlist" }</A>
                <div class="navbar-nav">
                    <A href="/" class="nav-link">{ "Home" }</A>
                    <A href="/places" class="nav-link">{ "Explore" }</A>
                    <A href="/add-place" class="nav-link">{ "Add Place" }</A>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark text-white py-4 mt-auto">
            <div class="container text-center">
                <p class="mb-0">{ "Wanderlist. Discover and share the world's most beautiful places." }</p>
            </div>
        </footer>
    }
}
