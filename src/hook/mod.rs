//! One-shot fetch state for presentation code.
//!
//! A [`FetchHook`] runs its fetch the first time it is activated and never
//! again, however often the owner activates it afterwards. The result lands
//! in a [`FetchState`] that the owner reads by snapshot.

pub mod sections;

pub use sections::{
    AboutHook, CommentsPageHook, ContactHook, FooterHook, HeroHook, PostHook, PostsPageHook,
    SectionHook, SocialMediaHook,
};

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use futures::FutureExt;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::app::{PresswireError, Result};

/// What the presentation layer sees: `{data, loading, error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Serialize> FetchState<T> {
    /// The state as `{ <field>: data, "loading": .., "error": .. }`.
    pub fn to_json(&self, field: &str) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert(
            field.to_string(),
            serde_json::to_value(&self.data).unwrap_or(serde_json::Value::Null),
        );
        object.insert("loading".into(), self.loading.into());
        object.insert(
            "error".into(),
            self.error.clone().map_or(serde_json::Value::Null, Into::into),
        );
        serde_json::Value::Object(object)
    }
}

pub struct FetchHook<T> {
    state: Arc<Mutex<FetchState<T>>>,
    started: AtomicBool,
}

impl<T: Default> Default for FetchHook<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> FetchHook<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FetchState::default())),
            started: AtomicBool::new(false),
        }
    }
}

impl<T> FetchHook<T>
where
    T: Send + 'static,
{
    /// Start the fetch if this hook has never started one.
    ///
    /// Returns the completion task on the first call and `None` on every
    /// later call. `op` is not invoked when `None` is returned. Must be
    /// called from within a tokio runtime.
    pub fn activate<F, Fut>(&self, op: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }

        self.lock().loading = true;

        let fut = op();
        let state = Arc::downgrade(&self.state);

        Some(tokio::spawn(async move {
            let outcome = match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(panic) => Err(PresswireError::Failure(panic_message(panic))),
            };

            // The owner may have been dropped while the request was in flight.
            let Some(state) = state.upgrade() else {
                tracing::debug!("Fetch finished after its hook was dropped");
                return;
            };
            let mut state = state.lock().unwrap_or_else(|e| e.into_inner());

            match outcome {
                Ok(data) => state.data = data,
                Err(err) => {
                    tracing::warn!("Fetch failed: {}", err);
                    // A failure without a message leaves `error` unset.
                    state.error = err.message();
                }
            }
            state.loading = false;
        }))
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, FetchState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clone + Send + 'static> FetchHook<T> {
    pub fn state(&self) -> FetchState<T> {
        self.lock().clone()
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> Option<String> {
    if let Some(message) = panic.downcast_ref::<&str>() {
        Some(message.to_string())
    } else {
        panic.downcast_ref::<String>().cloned()
    }
}
