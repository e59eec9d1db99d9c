use gloo_timers::callback::Interval;
use leptos::*;

pub const SLIDE_INTERVAL_MS: u32 = 5000;

pub struct Slide {
    pub image_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        image_url: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        title: "Discover Amazing Places",
        description: "Explore breathtaking destinations around the world",
    },
    Slide {
        image_url: "https://images.unsplash.com/photo-1602002418082-dd0e57e89f9d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1374&q=80",
        title: "Natural Wonders",
        description: "Experience the beauty of unspoiled landscapes",
    },
    Slide {
        image_url: "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        title: "Cultural Adventures",
        description: "Immerse yourself in diverse cultures and traditions",
    },
];

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Rotating hero banner on the home page. Advances on its own every
/// [`SLIDE_INTERVAL_MS`]; the arrows and indicators move it by hand.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let active = create_rw_signal(0usize);

    let ticker = Interval::new(SLIDE_INTERVAL_MS, move || {
        active.try_update(|i| *i = next_slide(*i, SLIDES.len()));
    });
    // dropping the interval cancels it
    on_cleanup(move || drop(ticker));

    let slides = SLIDES.iter().enumerate().map(|(idx, slide)| {
        let background = format!(
            "background-image: linear-gradient(rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.4)), url({})",
            slide.image_url
        );
        view! {
            <div class="carousel-item" class:active=move || active.get() == idx>
                <div class="hero-image d-block w-100" style=background>
                    <div class="hero-text text-center text-white p-5">
                        <h1>{ slide.title }</h1>
                        <p class="lead">{ slide.description }</p>
                    </div>
                </div>
            </div>
        }
    }).collect::<Vec<_>>();

    let indicators = (0..SLIDES.len()).map(|idx| view! {
        <button
            type="button"
            class:active=move || active.get() == idx
            aria-label=format!("Slide {}", idx + 1)
            on:click=move |_| active.set(idx)
        ></button>
    }).collect::<Vec<_>>();

    view! {
        <div class="carousel slide carousel-fade hero-carousel">
            <div class="carousel-indicators">{ indicators }</div>
            <div class="carousel-inner">{ slides }</div>
            <button
                class="carousel-control-prev"
                type="button"
                on:click=move |_| active.update(|i| *i = prev_slide(*i, SLIDES.len()))
            >
                <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{ "Previous" }</span>
            </button>
            <button
                class="carousel-control-next"
                type="button"
                on:click=move |_| active.update(|i| *i = next_slide(*i, SLIDES.len()))
            >
                <span class="carousel-control-next-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{ "Next" }</span>
            </button>
        </div>
    }
}

/// The three selling points under the popular places.
#[component]
pub fn FeatureRow() -> impl IntoView {
    let features = [
        ("bi bi-compass display-4 text-primary", "Discover", "Find hidden gems and popular destinations curated by travelers like you."),
        ("bi bi-chat-quote display-4 text-primary", "Share", "Share your experiences and recommendations with fellow travelers."),
        ("bi bi-map display-4 text-primary", "Plan", "Use authentic reviews and tips to plan your perfect adventure."),
    ];

    view! {
        <div class="text-center mt-5">
            <h3 class="mb-4">{ "Why Travel With Us?" }</h3>
            <div class="row g-4">
                {features.into_iter().map(|(icon, title, text)| view! {
                    <div class="col-md-4">
                        <div class="feature-box text-center p-4">
                            <div class="feature-icon mb-3"><i class=icon></i></div>
                            <h4>{ title }</h4>
                            <p>{ text }</p>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
