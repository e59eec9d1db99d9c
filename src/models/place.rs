// src/models/place.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::id::PlaceId;
use super::review::Review;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=Beautiful+Destination";
pub const DETAIL_PLACEHOLDER: &str = "https://via.placeholder.com/800x500?text=Beautiful+Destination";

/// A destination as the API returns it.
///
/// `views` and `reviews` only ever change from server responses, or by
/// appending a review the server has just accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub views: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Place {
    pub fn image_or(&self, placeholder: &'static str) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| placeholder.to_string())
    }

    /// First `max_chars` characters of the description followed by "...".
    pub fn summary(&self, max_chars: usize) -> String {
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{head}...")
    }

    /// Appends a review the server has confirmed.
    pub fn push_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

/// Body of `POST /places`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlace {
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Review>, D::Error> {
    Ok(Option::<Vec<Review>>::deserialize(deserializer)?.unwrap_or_default())
}
