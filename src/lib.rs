// Browser app in `app` and `components`. The modules below them stay plain
// Rust so they can be tested off the browser.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod search;
pub mod submit;
pub mod views;

pub mod models {
    pub mod id;
    pub mod place;
    pub mod review;
}

pub mod components {
    pub mod add_place_page;
    pub mod chrome;
    pub mod hero_carousel;
    pub mod home_page;
    pub mod load_state;
    pub mod place_card;
    pub mod place_detail_page;
    pub mod place_form;
    pub mod places_page;
    pub mod review_form;
    pub mod review_list;
}

pub mod utils {
    pub mod panic_hook;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    utils::panic_hook::init();
    leptos::mount_to_body(app::App);
}
