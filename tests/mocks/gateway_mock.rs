// In-memory stand-in for the places API, with per-operation failure switches,
// a log of every call that reached it, and optional holds that keep replies
// in flight until the test releases them.
use chrono::{TimeZone, Utc};
use futures::channel::oneshot;
use futures::future::{self, FutureExt};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wanderlist::api::{
    check_status, ApiFuture, PlacesApi, ADD_PLACE_FAILED, FETCH_PLACES_FAILED,
    FETCH_POPULAR_FAILED, FETCH_REVIEWS_FAILED, PLACE_NOT_FOUND, RECORD_VIEW_FAILED,
    SUBMIT_REVIEW_FAILED,
};
use wanderlist::error::ApiError;
use wanderlist::models::id::{PlaceId, ReviewId};
use wanderlist::models::place::{NewPlace, Place};
use wanderlist::models::review::{NewReview, Rating, Review};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Popular,
    Get,
    Create,
    View,
    Reviews,
    AddReview,
}

#[derive(Default)]
pub struct State {
    places: RefCell<Vec<Place>>,
    failing: RefCell<HashSet<Op>>,
    calls: RefCell<Vec<Op>>,
    held: RefCell<HashSet<Op>>,
    gates: RefCell<Vec<Option<oneshot::Sender<()>>>>,
}

/// Clones share one backend, so a test can keep a handle while the app
/// holds another through `Gateway`.
#[derive(Clone, Default)]
pub struct MockGateway(Rc<State>);

impl std::ops::Deref for MockGateway {
    type Target = State;

    fn deref(&self) -> &State {
        &self.0
    }
}

impl MockGateway {
    pub fn with_places(places: Vec<Place>) -> Self {
        let mock = Self::default();
        *mock.places.borrow_mut() = places;
        mock
    }

    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    /// Replies to `op` wait until `release` is called with their position
    /// among all held replies (0 for the first one).
    pub fn hold(&self, op: Op) {
        self.held.borrow_mut().insert(op);
    }

    pub fn release(&self, nth: usize) {
        let gate = self.gates.borrow_mut().get_mut(nth).and_then(Option::take);
        let gate = gate.unwrap_or_else(|| panic!("no held reply #{nth}"));
        let _ = gate.send(());
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    pub fn server_views(&self, id: &str) -> Option<u64> {
        self.places
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .map(|p| p.views)
    }

    fn enter(&self, op: Op, context: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(op);
        if self.failing.borrow().contains(&op) {
            check_status(500, context)
        } else {
            Ok(())
        }
    }

    fn find(&self, id: &PlaceId) -> Result<Place, ApiError> {
        self.places
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| check_status(404, PLACE_NOT_FOUND).unwrap_err())
    }

    // The outcome is decided when the call arrives; a hold only delays it.
    fn reply<T: 'static>(&self, op: Op, result: Result<T, ApiError>) -> ApiFuture<'static, T> {
        if !self.held.borrow().contains(&op) {
            return future::ready(result).boxed_local();
        }
        let (send, recv) = oneshot::channel();
        self.gates.borrow_mut().push(Some(send));
        async move {
            let _ = recv.await;
            result
        }
        .boxed_local()
    }

    fn list(&self) -> Vec<Place> {
        self.places
            .borrow()
            .iter()
            .cloned()
            .map(|mut p| {
                p.reviews.clear();
                p
            })
            .collect()
    }
}

impl PlacesApi for MockGateway {
    fn list_places(&self) -> ApiFuture<'_, Vec<Place>> {
        self.reply(Op::List, self.enter(Op::List, FETCH_PLACES_FAILED).map(|_| self.list()))
    }

    fn popular_places(&self) -> ApiFuture<'_, Vec<Place>> {
        let result = self.enter(Op::Popular, FETCH_POPULAR_FAILED).map(|_| {
            let mut places = self.list();
            places.sort_by(|a, b| b.views.cmp(&a.views));
            places.truncate(5);
            places
        });
        self.reply(Op::Popular, result)
    }

    fn get_place(&self, id: &PlaceId) -> ApiFuture<'_, Place> {
        self.reply(Op::Get, self.enter(Op::Get, PLACE_NOT_FOUND).and_then(|_| self.find(id)))
    }

    fn create_place(&self, place: &NewPlace) -> ApiFuture<'_, Place> {
        let result = self.enter(Op::Create, ADD_PLACE_FAILED).map(|_| {
            let mut places = self.places.borrow_mut();
            let created = Place {
                id: PlaceId::new((places.len() + 1).to_string()),
                name: place.name.clone(),
                location: place.location.clone(),
                description: place.description.clone(),
                image_url: place.image_url.clone(),
                views: 0,
                reviews: vec![],
                created_at: Some(created_at()),
                updated_at: Some(created_at()),
            };
            places.push(created.clone());
            created
        });
        self.reply(Op::Create, result)
    }

    fn increment_view(&self, id: &PlaceId) -> ApiFuture<'_, ()> {
        let result = self.enter(Op::View, RECORD_VIEW_FAILED).and_then(|_| {
            let mut places = self.places.borrow_mut();
            let place = places
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| check_status(404, PLACE_NOT_FOUND).unwrap_err())?;
            place.views += 1;
            Ok(())
        });
        self.reply(Op::View, result)
    }

    fn list_reviews(&self, id: &PlaceId) -> ApiFuture<'_, Vec<Review>> {
        let result = self
            .enter(Op::Reviews, FETCH_REVIEWS_FAILED)
            .and_then(|_| self.find(id))
            .map(|p| p.reviews);
        self.reply(Op::Reviews, result)
    }

    fn add_review(&self, id: &PlaceId, review: &NewReview) -> ApiFuture<'_, Review> {
        let result = self.enter(Op::AddReview, SUBMIT_REVIEW_FAILED).and_then(|_| {
            let mut places = self.places.borrow_mut();
            let total: usize = places.iter().map(|p| p.reviews.len()).sum();
            let place = places
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| check_status(404, SUBMIT_REVIEW_FAILED).unwrap_err())?;
            let created = Review {
                id: ReviewId::new(format!("r{}", total + 1)),
                place_id: Some(id.clone()),
                user_name: review.user_name.clone(),
                rating: review.rating,
                comment: review.comment.clone(),
                created_at: created_at(),
            };
            place.reviews.push(created.clone());
            Ok(created)
        });
        self.reply(Op::AddReview, result)
    }
}

pub fn created_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
}

pub fn place(id: &str, name: &str, location: &str, description: &str, views: u64) -> Place {
    Place {
        id: PlaceId::new(id),
        name: name.into(),
        location: location.into(),
        description: description.into(),
        image_url: None,
        views,
        reviews: vec![],
        created_at: None,
        updated_at: None,
    }
}

pub fn review(id: &str, user: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: ReviewId::new(id),
        place_id: None,
        user_name: user.into(),
        rating: Rating::new(rating).unwrap(),
        comment: comment.into(),
        created_at: created_at(),
    }
}

/// The seed catalog the development backend ships with.
pub fn seed() -> Vec<Place> {
    let mut bali = place("1", "Bali Beach", "Bali, Indonesia", "Beautiful tropical paradise with crystal clear waters.", 120);
    bali.reviews = vec![
        review("r1", "TravelFan", 5, "The most beautiful beach I've ever visited!"),
        review("r2", "Adventurer123", 4, "Great place to relax and enjoy nature."),
    ];

    vec![
        bali,
        place("2", "Swiss Alps", "Switzerland", "Majestic mountains with breathtaking views.", 95),
        place("3", "Santorini", "Greece", "Iconic white buildings with blue domes overlooking the sea.", 150),
        place("4", "Grand Canyon", "Arizona, USA", "One of the most spectacular natural wonders of the world.", 200),
        place("5", "Kyoto Gardens", "Kyoto, Japan", "Traditional Japanese gardens with peaceful ambiance.", 85),
        place("6", "Paris Lights", "France", "city of love", 60),
    ]
}
