//! OS color-scheme preference signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller listens to this signal only while the user's mode is
//! "system". A `Subscription` guard removes the listener when dropped, so
//! releasing the subscription is tied to the controller's state, not to
//! caller discipline.

use std::rc::Rc;

#[cfg(test)]
#[path = "media_query_test.rs"]
mod media_query_test;

/// Callback invoked with the new "prefers dark" value.
pub type PreferenceListener = Box<dyn Fn(bool)>;

/// Scoped listener registration; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the teardown for an active listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release (signal unavailable).
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Subscribable boolean "prefers dark" signal.
pub trait SystemPreference {
    /// Current value of the signal.
    fn prefers_dark(&self) -> bool;

    /// Register `on_change` until the returned guard is dropped.
    fn subscribe(&self, on_change: PreferenceListener) -> Subscription;
}

impl<T: SystemPreference + ?Sized> SystemPreference for Rc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn subscribe(&self, on_change: PreferenceListener) -> Subscription {
        (**self).subscribe(on_change)
    }
}

/// `window.matchMedia(query)` adapter.
#[derive(Debug, Clone)]
pub struct MediaQueryPreference {
    query: String,
}

impl MediaQueryPreference {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(feature = "hydrate")]
    fn media_list(&self) -> Option<web_sys::MediaQueryList> {
        web_sys::window()?.match_media(&self.query).ok().flatten()
    }
}

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.media_list().map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn subscribe(&self, on_change: PreferenceListener) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(list) = self.media_list() else {
                return Subscription::detached();
            };
            let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
            );
            if list
                .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not listen to {}", self.query);
                return Subscription::detached();
            }
            // The closure lives until the listener is removed.
            Subscription::new(move || {
                let _ = list.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Subscription::detached()
        }
    }
}
