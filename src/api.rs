use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use leptos::logging::{log, warn};
use leptos::{provide_context, use_context};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ops::Deref;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::id::PlaceId;
use crate::models::place::{NewPlace, Place};
use crate::models::review::{NewReview, Review};

// User-facing messages, one per operation.
pub const FETCH_PLACES_FAILED: &str = "Failed to fetch places";
pub const FETCH_POPULAR_FAILED: &str = "Failed to fetch popular places";
pub const PLACE_NOT_FOUND: &str = "Place not found";
pub const ADD_PLACE_FAILED: &str = "Failed to add place";
pub const FETCH_REVIEWS_FAILED: &str = "Failed to fetch reviews";
pub const SUBMIT_REVIEW_FAILED: &str = "Failed to submit review";
pub const RECORD_VIEW_FAILED: &str = "Failed to record view";

pub type ApiFuture<'a, T> = LocalBoxFuture<'a, Result<T, ApiError>>;

/// Every call the client makes against the API. [`HttpGateway`] is the
/// browser implementation; tests swap in their own via [`provide_gateway`].
///
/// Futures are not `Send`: the client runs on the browser's event loop.
pub trait PlacesApi {
    fn list_places(&self) -> ApiFuture<'_, Vec<Place>>;
    /// Server-ranked; the client never re-sorts.
    fn popular_places(&self) -> ApiFuture<'_, Vec<Place>>;
    /// Place with its reviews embedded.
    fn get_place(&self, id: &PlaceId) -> ApiFuture<'_, Place>;
    fn create_place(&self, place: &NewPlace) -> ApiFuture<'_, Place>;
    /// Response body is ignored.
    fn increment_view(&self, id: &PlaceId) -> ApiFuture<'_, ()>;
    fn list_reviews(&self, id: &PlaceId) -> ApiFuture<'_, Vec<Review>>;
    fn add_review(&self, id: &PlaceId, review: &NewReview) -> ApiFuture<'_, Review>;
}

/// Any status outside 2xx is a failure, reported with `context` as message.
pub fn check_status(status: u16, context: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            message: context.to_string(),
        })
    }
}

/// Decodes a response body; a shape mismatch is reported with `context`.
pub fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::decode(context, e))
}

fn place_path(id: &PlaceId, tail: &str) -> String {
    format!("places/{}{}", urlencoding::encode(id.as_str()), tail)
}

fn network(context: &str) -> impl Fn(gloo_net::Error) -> ApiError + '_ {
    move |err| ApiError::network(context, err)
}

// Keeps the cause in the console; callers only ever see `context`.
fn logged<T>(method: &str, url: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        warn!("[API] {} {} failed ({}): {}", method, url, err.detail(), err);
    }
    result
}

#[derive(Clone, Debug)]
pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        log!("[API] GET {}", url);

        let result = async {
            let response = Request::get(&url).send().await.map_err(network(context))?;
            check_status(response.status(), context)?;
            let body = response.text().await.map_err(network(context))?;
            decode(&body, context)
        }
        .await;
        logged("GET", &url, result)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log!("[API] POST {}", url);

        let result = async {
            let request = Request::post(&url).json(body).map_err(|e| ApiError::Encode {
                message: context.to_string(),
                detail: e.to_string(),
            })?;
            let response = request.send().await.map_err(network(context))?;
            check_status(response.status(), context)?;
            let body = response.text().await.map_err(network(context))?;
            decode(&body, context)
        }
        .await;
        logged("POST", &url, result)
    }
}

impl PlacesApi for HttpGateway {
    fn list_places(&self) -> ApiFuture<'_, Vec<Place>> {
        self.get_json("places", FETCH_PLACES_FAILED).boxed_local()
    }

    fn popular_places(&self) -> ApiFuture<'_, Vec<Place>> {
        self.get_json("places/popular", FETCH_POPULAR_FAILED).boxed_local()
    }

    fn get_place(&self, id: &PlaceId) -> ApiFuture<'_, Place> {
        let path = place_path(id, "");
        async move { self.get_json(&path, PLACE_NOT_FOUND).await }.boxed_local()
    }

    fn create_place(&self, place: &NewPlace) -> ApiFuture<'_, Place> {
        let place = place.clone();
        async move { self.post_json("places", &place, ADD_PLACE_FAILED).await }.boxed_local()
    }

    fn increment_view(&self, id: &PlaceId) -> ApiFuture<'_, ()> {
        let url = self.config.endpoint(&place_path(id, "/view"));
        async move {
            let result = async {
                let response = Request::post(&url)
                    .send()
                    .await
                    .map_err(network(RECORD_VIEW_FAILED))?;
                check_status(response.status(), RECORD_VIEW_FAILED)
            }
            .await;
            logged("POST", &url, result)
        }
        .boxed_local()
    }

    fn list_reviews(&self, id: &PlaceId) -> ApiFuture<'_, Vec<Review>> {
        let path = place_path(id, "/reviews");
        async move { self.get_json(&path, FETCH_REVIEWS_FAILED).await }.boxed_local()
    }

    fn add_review(&self, id: &PlaceId, review: &NewReview) -> ApiFuture<'_, Review> {
        let path = place_path(id, "/reviews");
        let review = review.clone();
        async move { self.post_json(&path, &review, SUBMIT_REVIEW_FAILED).await }.boxed_local()
    }
}

/// Shared handle to whichever [`PlacesApi`] the app was built with.
#[derive(Clone)]
pub struct Gateway(Rc<dyn PlacesApi>);

impl Gateway {
    pub fn new(api: impl PlacesApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for Gateway {
    type Target = dyn PlacesApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn provide_gateway(gateway: Gateway) {
    provide_context(gateway);
}

/// The gateway from context, or an HTTP gateway on the default address if
/// none was provided.
pub fn use_gateway() -> Gateway {
    use_context::<Gateway>().unwrap_or_else(|| {
        warn!("[API] No gateway in context, using {}", crate::config::DEFAULT_API_URL);
        Gateway::new(HttpGateway::new(ApiConfig::default()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_success() {
        assert!(check_status(200, "x").is_ok());
        assert!(check_status(201, "x").is_ok());
        assert!(check_status(299, "x").is_ok());

        let not_found = check_status(404, PLACE_NOT_FOUND).unwrap_err();
        assert_eq!(not_found.to_string(), "Place not found");
        assert_eq!(not_found.status(), Some(404));

        let server = check_status(500, FETCH_PLACES_FAILED).unwrap_err();
        assert_eq!(server.to_string(), "Failed to fetch places");
        assert!(check_status(302, "x").is_err());
    }

    #[test]
    fn decode_reports_shape_errors() {
        let places: Vec<Place> = decode("[]", FETCH_PLACES_FAILED).unwrap();
        assert!(places.is_empty());

        let err = decode::<Vec<Place>>(r#"{"error": "oops"}"#, FETCH_PLACES_FAILED).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.to_string(), "Failed to fetch places");
        assert!(err.detail().contains("expected a sequence"));
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(place_path(&PlaceId::new("a b/c"), "/view"), "places/a%20b%2Fc/view");
        assert_eq!(place_path(&PlaceId::new("7"), ""), "places/7");
    }
}
