#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; the app only runs in the browser
    // to run: `trunk serve --open --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use wanderlist::app::*;

    wanderlist::utils::panic_hook::init();

    leptos::mount_to_body(App);
}
