//! Key event model and observer registry.
//!
//! Dispatch is synchronous and fire-and-forget: a qualifying input event
//! produces one [`KeyEvent`] which is handed to every observer registered
//! for that event kind, once, on the calling thread. There is no delivery
//! guarantee beyond that and no failure state.

use std::rc::Rc;

/// Kind of key notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Pointer went down on the key
    Pressed,
    /// Pointer was released
    Released,
}

/// A single press or release notification.
///
/// Constructed per dispatch and discarded after the observer callbacks
/// return. Carries the source key's label and metadata so observers can
/// identify the key without holding a reference to it.
#[derive(Debug, Clone)]
pub struct KeyEvent<T> {
    /// Display text of the source key
    pub key_text: String,
    /// Metadata of the source key, if any
    pub metadata: Option<T>,
    /// Press or release
    pub kind: KeyEventKind,
}

impl<T> KeyEvent<T> {
    /// Creates a new key event.
    #[must_use]
    pub fn new(key_text: impl Into<String>, metadata: Option<T>, kind: KeyEventKind) -> Self {
        Self {
            key_text: key_text.into(),
            metadata,
            kind,
        }
    }
}

/// An observer callback invoked on key press or release.
///
/// Observers are identified by `Rc` pointer identity: the same `Rc` passed
/// to a registration method twice counts as one observer, and removal
/// expects the `Rc` that was registered.
pub type KeyEventObserver<T> = Rc<dyn Fn(&KeyEvent<T>)>;

/// Registry of (observer, event kind) entries for one key.
///
/// Registration is idempotent: an observer already present is not added
/// again, so each input event reaches it exactly once. Removing an
/// observer that was never registered is a no-op.
pub struct ObserverRegistry<T> {
    entries: Vec<(KeyEventObserver<T>, KeyEventKind)>,
}

impl<T> ObserverRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers an observer for the given event kind.
    ///
    /// Silently ignored if the observer is already registered.
    pub fn add(&mut self, observer: KeyEventObserver<T>, kind: KeyEventKind) {
        if !self.contains(&observer) {
            self.entries.push((observer, kind));
        }
    }

    /// Removes an observer regardless of the kind it was registered for.
    pub fn remove(&mut self, observer: &KeyEventObserver<T>) {
        self.entries
            .retain(|(registered, _)| !same_observer(registered, observer));
    }

    /// Removes every registered observer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the observer is currently registered.
    #[must_use]
    pub fn contains(&self, observer: &KeyEventObserver<T>) -> bool {
        self.entries
            .iter()
            .any(|(registered, _)| same_observer(registered, observer))
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronously invokes every observer registered for the event's kind.
    pub fn dispatch(&self, event: &KeyEvent<T>) {
        for (observer, kind) in &self.entries {
            if *kind == event.kind {
                observer(event);
            }
        }
    }
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer-identity comparison for observers.
///
/// `Rc::ptr_eq` on `dyn Fn` compares the data pointer together with the
/// vtable; comparing the data address alone sidesteps vtable duplication
/// across codegen units.
fn same_observer<T>(a: &KeyEventObserver<T>, b: &KeyEventObserver<T>) -> bool {
    std::ptr::eq(
        Rc::as_ptr(a).cast::<()>(),
        Rc::as_ptr(b).cast::<()>(),
    )
}
