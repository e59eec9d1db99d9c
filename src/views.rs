use leptos::logging::{log, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api::{Gateway, PlacesApi};
use crate::models::id::PlaceId;

/// Asks the server to count a view of `id`. Returns whether it worked, for
/// diagnostics only: the outcome never reaches the page or the loaded place.
pub async fn increment_view_quietly(api: &dyn PlacesApi, id: &PlaceId) -> bool {
    match api.increment_view(id).await {
        Ok(()) => {
            log!("[VIEWS] Recorded view for place {}", id);
            true
        }
        Err(err) => {
            warn!("[VIEWS] Error incrementing view count for place {}: {}", id, err.detail());
            false
        }
    }
}

/// Spawns [`increment_view_quietly`] without waiting for it. Every call is
/// one view, so remounting the detail page counts again.
pub fn record_view(gateway: Gateway, id: PlaceId) {
    spawn_local(async move {
        increment_view_quietly(&*gateway, &id).await;
    });
}
