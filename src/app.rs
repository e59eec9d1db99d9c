/// Application root: wires the API gateway into context and routes pages.
use leptos::*;
use leptos::logging::error;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};
use crate::api::{provide_gateway, Gateway, HttpGateway};
use crate::components::add_place_page::AddPlacePage;
use crate::components::chrome::{Footer, Header};
use crate::components::home_page::HomePage;
use crate::components::place_detail_page::PlaceDetailPage;
use crate::components::places_page::PlacesPage;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|err| {
        error!("[CONFIG] {}; using the default API address", err);
        ApiConfig::default()
    });
    provide_gateway(Gateway::new(HttpGateway::new(config)));

    view! {
        <Title text="Wanderlist" />
        <Router>
            <div class="App d-flex flex-column min-vh-100">
                <Header />
                <main class="flex-grow-1">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/places" view=PlacesPage />
                        <Route path="/places/:id" view=PlaceDetailPage />
                        <Route path="/add-place" view=AddPlacePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
