use leptos::logging::{log, warn};
use leptos::{spawn_local, RwSignal, SignalUpdate};
use std::cell::RefCell;
use std::future::Future;

use crate::api::{ADD_PLACE_FAILED, SUBMIT_REVIEW_FAILED};
use crate::error::{ApiError, FormError, ValidationError};
use crate::models::place::NewPlace;
use crate::models::review::{NewReview, Rating};

/// A form's local input state. `Default` is what the form resets to.
pub trait Draft: Default + Clone {
    type Payload;

    /// Shown when the server rejects the submission.
    const FAILURE: &'static str;

    fn missing_fields(&self) -> Vec<&'static str>;

    fn to_payload(&self) -> Self::Payload;

    fn validate(&self) -> Result<(), ValidationError> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDraft {
    pub name: String,
    pub location: String,
    pub description: String,
    /// Optional; blank means "use the placeholder".
    pub image_url: String,
}

impl Draft for PlaceDraft {
    type Payload = NewPlace;

    const FAILURE: &'static str = ADD_PLACE_FAILED;

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("location", &self.location),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    fn to_payload(&self) -> NewPlace {
        let image_url = self.image_url.trim();
        NewPlace {
            name: self.name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub user_name: String,
    pub rating: Rating,
    pub comment: String,
}

impl Draft for ReviewDraft {
    type Payload = NewReview;

    const FAILURE: &'static str = SUBMIT_REVIEW_FAILED;

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.user_name) {
            missing.push("name");
        }
        if blank(&self.comment) {
            missing.push("review");
        }
        missing
    }

    fn to_payload(&self) -> NewReview {
        NewReview {
            user_name: self.user_name.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }
}

/// Input, pending flag and last error of one form instance. It never touches
/// shared page state: a successful submission hands the created entity back
/// to the caller, which decides how to merge it.
#[derive(Debug, Clone, Default)]
pub struct FormState<D> {
    draft: D,
    pending: bool,
    error: Option<String>,
}

impl<D: Draft> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            pending: false,
            error: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates and marks the form pending, returning the payload to send.
    ///
    /// Nothing should go over the network unless this returns `Ok`.
    pub fn start(&mut self) -> Result<D::Payload, FormError> {
        if self.pending {
            return Err(FormError::Busy);
        }
        if let Err(err) = self.draft.validate() {
            self.error = Some(err.to_string());
            return Err(err.into());
        }

        self.pending = true;
        self.error = None;
        Ok(self.draft.to_payload())
    }

    /// Records the server's answer. On success the draft resets and the
    /// created entity is returned; on failure the draft is left as typed.
    pub fn finish<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        self.pending = false;
        match result {
            Ok(created) => {
                self.draft = D::default();
                self.error = None;
                Some(created)
            }
            Err(err) => {
                warn!("[SUBMIT] {}: {}", D::FAILURE, err.detail());
                self.error = Some(D::FAILURE.to_string());
                None
            }
        }
    }
}

/// Runs one submission against a form held in a `RefCell`.
pub async fn submit_with<D, T, F, Fut>(form: &RefCell<FormState<D>>, send: F) -> Result<T, FormError>
where
    D: Draft,
    F: FnOnce(D::Payload) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let payload = form.borrow_mut().start()?;
    let result = send(payload).await;
    form.borrow_mut()
        .finish(result)
        .ok_or_else(|| FormError::Submit(D::FAILURE.to_string()))
}

/// Starts a submission for a form living in a signal. `on_success` gets the
/// created entity once the server confirms it; nothing happens if the form
/// has been unmounted by then.
pub fn spawn_submission<D, T, F, Fut, C>(form: RwSignal<FormState<D>>, send: F, on_success: C)
where
    D: Draft + 'static,
    T: 'static,
    F: FnOnce(D::Payload) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    C: FnOnce(T) + 'static,
{
    let payload = match form.try_update(|state| state.start()) {
        Some(Ok(payload)) => payload,
        Some(Err(err)) => {
            log!("[SUBMIT] Not sent: {}", err);
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let result = send(payload).await;
        if let Some(Some(created)) = form.try_update(|state| state.finish(result)) {
            on_success(created);
        }
    });
}
