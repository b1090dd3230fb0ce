//! Theme controller: owns the live `ThemeMode` and keeps storage, the OS
//! preference listener, and the document palette consistent with it.
//!
//! DESIGN
//! ======
//! - One controller instance per page; views call `advance`/`set_mode` and
//!   never write the palette attribute themselves.
//! - The OS preference subscription exists exactly while the mode is
//!   `Automatic`. It is held as a `Subscription` guard, so leaving
//!   `Automatic` or dropping the controller releases it.
//! - Storage failures are logged and never surface to callers. After the
//!   first failure storage is not touched again for this controller.

use std::rc::Rc;

use crate::theme::mode::{EffectiveTheme, ThemeMode, resolve};
use crate::util::document_theme::ThemeSink;
use crate::util::media_query::{Subscription, SystemPreference};
use crate::util::storage::{PreferenceStore, StorageError};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, P, A> {
    storage_key: String,
    store: S,
    storage_failed: bool,
    preference: P,
    sink: Rc<A>,
    mode: Option<ThemeMode>,
    subscription: Option<Subscription>,
}

impl<S, P, A> ThemeController<S, P, A>
where
    S: PreferenceStore,
    P: SystemPreference,
    A: ThemeSink + 'static,
{
    pub fn new(storage_key: impl Into<String>, store: S, preference: P, sink: A) -> Self {
        Self {
            storage_key: storage_key.into(),
            store,
            storage_failed: false,
            preference,
            sink: Rc::new(sink),
            mode: None,
            subscription: None,
        }
    }

    /// Current mode, `None` until `initialize` has run.
    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode
    }

    /// Palette for the current mode and OS preference.
    pub fn effective(&self) -> Option<EffectiveTheme> {
        self.mode.map(|mode| resolve(mode, self.preference.prefers_dark()))
    }

    /// Whether the OS preference listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Establish the mode from storage, apply it, and normalize storage.
    ///
    /// Absent, unknown, or unreadable values become `Automatic`. Calling this
    /// again after a mode exists returns the current mode unchanged.
    pub fn initialize(&mut self) -> ThemeMode {
        if let Some(mode) = self.mode {
            log::debug!("theme controller already initialized ({mode})");
            return mode;
        }

        let stored = self.read_stored();
        let mode = ThemeMode::from_stored(stored.as_deref());
        if stored.as_deref() != Some(mode.as_tag()) {
            self.write_stored(mode);
        }

        self.mode = Some(mode);
        self.sync_subscription();
        self.apply_current();
        log::debug!("theme initialized: mode={mode} stored={stored:?}");
        mode
    }

    /// Move to the next mode in the `Light -> Dark -> Automatic` cycle.
    ///
    /// Returns `None` (and does nothing) before `initialize`.
    pub fn advance(&mut self) -> Option<ThemeMode> {
        let next = self.mode?.next();
        self.set_mode(next)
    }

    /// Switch to `mode`, apply it, and persist it.
    ///
    /// Returns `None` (and does nothing) before `initialize`.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Option<ThemeMode> {
        if self.mode.is_none() {
            return None;
        }
        self.mode = Some(mode);
        self.sync_subscription();
        self.apply_current();
        self.write_stored(mode);
        Some(mode)
    }

    /// Drop the OS preference listener. Used when the owning view unmounts.
    pub fn release(&mut self) {
        self.subscription = None;
    }

    fn apply_current(&self) {
        if let Some(theme) = self.effective() {
            self.sink.apply(theme);
        }
    }

    fn sync_subscription(&mut self) {
        let wants = self.mode.is_some_and(ThemeMode::follows_system);
        match (wants, self.subscription.is_some()) {
            (true, false) => {
                let sink = Rc::clone(&self.sink);
                self.subscription = Some(self.preference.subscribe(Box::new(move |prefers_dark| {
                    sink.apply(resolve(ThemeMode::Automatic, prefers_dark));
                })));
            }
            (false, true) => self.subscription = None,
            _ => {}
        }
    }

    fn read_stored(&mut self) -> Option<String> {
        if self.storage_failed {
            return None;
        }
        match self.store.get(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                self.note_storage_failure(&e);
                None
            }
        }
    }

    fn write_stored(&mut self, mode: ThemeMode) {
        if self.storage_failed {
            return;
        }
        if let Err(e) = self.store.set(&self.storage_key, mode.as_tag()) {
            self.note_storage_failure(&e);
        }
    }

    fn note_storage_failure(&mut self, e: &StorageError) {
        log::warn!("theme preference will not persist this session: {e}");
        self.storage_failed = true;
    }
}

impl<S, P, A> std::fmt::Debug for ThemeController<S, P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("storage_key", &self.storage_key)
            .field("mode", &self.mode)
            .field("storage_failed", &self.storage_failed)
            .field("listening", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
