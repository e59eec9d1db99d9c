#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use wanderlist::api::{provide_gateway, use_gateway, Gateway, PlacesApi};
use wanderlist::components::place_detail_page::{spawn_reviews_refresh, use_place};
use wanderlist::loader::{LoadStatus, Loader};
use wanderlist::models::id::PlaceId;
use wanderlist::models::place::Place;
use wanderlist::models::review::{NewReview, Rating};
use wanderlist::submit::{spawn_submission, FormState, ReviewDraft};

mod mocks;
use mocks::gateway_mock::{seed, MockGateway, Op};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

// Lets spawned tasks and the replies they wait on run to completion.
async fn settle() {
    TimeoutFuture::new(0).await;
}

#[component]
fn PlaceName(place_id: ReadSignal<PlaceId>) -> impl IntoView {
    let place = use_place(use_gateway(), move || place_id.get());
    view! {
        <p class="name">
            {move || place.with(|loader| loader.value().map(|p| p.name.clone()).unwrap_or_default())}
        </p>
    }
}

#[wasm_bindgen_test]
async fn switching_places_counts_only_the_newest_load() {
    let mock = MockGateway::with_places(seed());
    mock.hold(Op::Get);
    let (place_id, set_place_id) = create_signal(PlaceId::new("1"));

    let container = mount_container("switching-places");
    let gateway = Gateway::new(mock.clone());
    mount_to(container.clone(), move || {
        provide_gateway(gateway);
        view! { <PlaceName place_id=place_id /> }
    });
    settle().await;

    // leave Bali for the Alps before Bali's reply is back
    set_place_id.set(PlaceId::new("2"));
    settle().await;
    assert_eq!(mock.count(Op::Get), 2);

    mock.release(1);
    settle().await;
    assert!(container.inner_text().contains("Swiss Alps"));
    assert_eq!(mock.count(Op::View), 1);
    assert_eq!(mock.server_views("2"), Some(96));

    mock.release(0);
    settle().await;
    assert!(container.inner_text().contains("Swiss Alps"));
    assert!(!container.inner_text().contains("Bali"));
    assert_eq!(mock.count(Op::View), 1);
    assert_eq!(mock.server_views("1"), Some(120));
}

#[wasm_bindgen_test]
async fn reply_after_unmount_changes_nothing() {
    let mock = MockGateway::with_places(seed());
    mock.hold(Op::Get);
    let mounted = Rc::new(RefCell::new(None));

    let container = mount_container("unmounted-place");
    let gateway = Gateway::new(mock.clone());
    let slot = Rc::clone(&mounted);
    mount_to(container, move || {
        provide_gateway(gateway);
        let page = as_child_of_current_owner(|_: ()| use_place(use_gateway(), || PlaceId::new("4")));
        let (place, disposer) = page(());
        *slot.borrow_mut() = Some((place, disposer));
        view! { <p>"page"</p> }
    });
    settle().await;

    let (place, disposer) = mounted.borrow_mut().take().unwrap();
    assert_eq!(place.with_untracked(Loader::status), LoadStatus::Loading);
    drop(disposer);

    mock.release(0);
    settle().await;
    assert!(place.try_with_untracked(|loader| loader.value().cloned()).flatten().is_none());
    assert_eq!(mock.calls(), vec![Op::Get]);
    assert_eq!(mock.server_views("4"), Some(200));
}

#[wasm_bindgen_test]
async fn second_submit_while_pending_is_not_sent() {
    let mock = MockGateway::with_places(seed());
    mock.hold(Op::AddReview);
    let form = create_rw_signal(FormState::<ReviewDraft>::new());
    form.update(|state| {
        *state.draft_mut() = ReviewDraft {
            user_name: "Ana".into(),
            rating: Rating::new(4).unwrap(),
            comment: "Great!".into(),
        };
    });
    let added = Rc::new(RefCell::new(Vec::new()));

    for _ in 0..2 {
        let gateway = Gateway::new(mock.clone());
        let added = Rc::clone(&added);
        spawn_submission(
            form,
            move |review| async move { gateway.add_review(&PlaceId::new("1"), &review).await },
            move |created| added.borrow_mut().push(created),
        );
    }
    settle().await;
    assert_eq!(mock.calls(), vec![Op::AddReview]);
    assert!(form.with_untracked(FormState::is_pending));

    mock.release(0);
    settle().await;
    assert_eq!(added.borrow().len(), 1);
    assert!(!form.with_untracked(FormState::is_pending));
    assert_eq!(form.with_untracked(|state| state.draft().clone()), ReviewDraft::default());
}

#[wasm_bindgen_test]
async fn review_refresh_lands_on_the_open_place() {
    let mock = MockGateway::with_places(seed());
    let bali = PlaceId::new("1");
    let place = create_rw_signal(Loader::<PlaceId, Place>::new());
    let ticket = place.try_update(|loader| loader.begin(bali.clone())).unwrap();
    let loaded = mock.get_place(&bali).await;
    place.update(|loader| {
        loader.resolve(&ticket, loaded);
    });
    let shown = move || place.with_untracked(|loader| loader.value().map(|p| p.reviews.len()));
    assert_eq!(shown(), Some(2));

    // posted from another tab
    let review = NewReview {
        user_name: "Lena".into(),
        rating: Rating::new(3).unwrap(),
        comment: "Busy in August.".into(),
    };
    mock.add_review(&bali, &review).await.unwrap();

    spawn_reviews_refresh(Gateway::new(mock.clone()), place, bali.clone());
    settle().await;
    assert_eq!(shown(), Some(3));

    mock.fail(Op::Reviews);
    spawn_reviews_refresh(Gateway::new(mock.clone()), place, bali);
    settle().await;
    assert_eq!(shown(), Some(3));
    assert_eq!(mock.count(Op::Reviews), 2);
}
