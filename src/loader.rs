use leptos::logging::log;
use leptos::{create_effect, create_rw_signal, on_cleanup, spawn_local, RwSignal};
use leptos::{SignalUpdate, SignalUpdateUntracked, SignalWithUntracked};
use std::future::Future;
use std::rc::Rc;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing in flight; the last request was abandoned.
    Idle,
    Loading,
    Success,
    Error,
}

/// Proof of which request a result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request (or an abandon) superseded this one.
    Stale,
}

// Every fetch gets a Ticket and only the newest ticket may write its result
// back. A slow reply for an old key, or for a page that has been left, is
// dropped instead of overwriting newer state.
#[derive(Debug, Clone)]
pub struct Loader<K, T> {
    status: LoadStatus,
    key: Option<K>,
    generation: u64,
    value: Option<T>,
    error: Option<String>,
}

impl<K: Clone + PartialEq, T> Loader<K, T> {
    /// Starts out `Loading`: the first trigger is expected right away.
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            key: None,
            generation: 0,
            value: None,
            error: None,
        }
    }

    /// Registers a new request for `key`, superseding any in flight.
    ///
    /// A previously loaded value stays available until the new one lands.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.status = LoadStatus::Loading;
        Ticket {
            key,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.status == LoadStatus::Loading
            && ticket.generation == self.generation
            && self.key.as_ref() == Some(&ticket.key)
    }

    pub fn resolve(&mut self, ticket: &Ticket<K>, result: Result<T, ApiError>) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Stale;
        }

        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                self.status = LoadStatus::Success;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.status = LoadStatus::Error;
            }
        }
        Resolution::Applied
    }

    /// Forgets the in-flight request, if any; its result will be stale.
    pub fn abandon(&mut self) {
        self.generation += 1;
        if self.status == LoadStatus::Loading {
            self.status = LoadStatus::Idle;
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// For merging confirmed writes (e.g. a new review) into the loaded value.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Applies `f` to the loaded value only if it still belongs to `key`.
    /// Used for merging results of side requests (e.g. a reviews refresh)
    /// that may come back after the page moved on.
    pub fn update_value_for(&mut self, key: &K, f: impl FnOnce(&mut T)) -> bool {
        if self.key.as_ref() != Some(key) || self.status == LoadStatus::Loading {
            return false;
        }
        match self.value.as_mut() {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<K: Clone + PartialEq, T> Default for Loader<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads `fetch(key())` now and again whenever `key()` changes.
pub fn use_loader<K, T, KF, F, Fut>(key: KF, fetch: F) -> RwSignal<Loader<K, T>>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    KF: Fn() -> K + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_loader_with(key, fetch, |_: &K, _: &T| {})
}

/// Like [`use_loader`], calling `on_success` once for each result that is
/// actually applied. Stale results never reach it.
pub fn use_loader_with<K, T, KF, F, Fut, S>(key: KF, fetch: F, on_success: S) -> RwSignal<Loader<K, T>>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    KF: Fn() -> K + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: Fn(&K, &T) + 'static,
{
    let state = create_rw_signal(Loader::<K, T>::new());
    let on_success = Rc::new(on_success);

    create_effect(move |_| {
        let key = key();
        let Some(ticket) = state.try_update(|loader| loader.begin(key.clone())) else {
            return;
        };
        // fetch outside the update, it may read other signals
        let request = fetch(key);
        let on_success = Rc::clone(&on_success);

        spawn_local(async move {
            let result = request.await;
            match state.try_update(|loader| loader.resolve(&ticket, result)) {
                Some(Resolution::Applied) => {
                    state.with_untracked(|loader| {
                        if loader.status() == LoadStatus::Success {
                            if let Some(value) = loader.value() {
                                on_success(ticket.key(), value);
                            }
                        }
                    });
                }
                Some(Resolution::Stale) => log!("[LOADER] Dropped a superseded response"),
                None => log!("[LOADER] Dropped a response for an unmounted view"),
            }
        });
    });

    // try_: the signal may already be disposed with its owner
    on_cleanup(move || {
        state.try_update_untracked(|loader| loader.abandon());
    });

    state
}
