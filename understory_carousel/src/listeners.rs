// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of global listeners.
//!
//! A mounted carousel listens for viewport resizes and key presses on the
//! host's global event source. [`ListenerGuard`] registers those listeners
//! when it is created and removes every one of them when it is dropped, so
//! repeated mount/unmount cycles cannot leak registrations regardless of how
//! the host leaves the mounted scope.

use smallvec::SmallVec;

/// Global events a mounted carousel subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// The viewport changed size.
    Resize,
    /// A key was pressed.
    KeyDown,
}

impl ListenerKind {
    /// Listeners a carousel registers on mount.
    pub const MOUNTED: [Self; 2] = [Self::Resize, Self::KeyDown];
}

/// Identifier of one registration, issued by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host-side global event source.
pub trait ListenerRegistry {
    /// Starts delivering events of `kind` to the carousel.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Stops delivering events for a registration.
    fn remove_listener(&mut self, id: ListenerId);
}

impl<R: ListenerRegistry + ?Sized> ListenerRegistry for &mut R {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id);
    }
}

/// Keeps listeners registered for as long as it is alive.
pub struct ListenerGuard<R: ListenerRegistry> {
    registry: R,
    ids: SmallVec<[(ListenerKind, ListenerId); 2]>,
}

impl<R: ListenerRegistry> ListenerGuard<R> {
    /// Registers one listener per entry in `kinds`.
    pub fn register(mut registry: R, kinds: &[ListenerKind]) -> Self {
        let ids = kinds
            .iter()
            .map(|&kind| (kind, registry.add_listener(kind)))
            .collect();
        Self { registry, ids }
    }

    /// Registration for `kind`, if present.
    #[must_use]
    pub fn id(&self, kind: ListenerKind) -> Option<ListenerId> {
        self.ids.iter().find(|(k, _)| *k == kind).map(|(_, id)| *id)
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes every registration now.
    pub fn release(mut self) {
        self.remove_all();
    }

    fn remove_all(&mut self) {
        for (_, id) in self.ids.drain(..) {
            self.registry.remove_listener(id);
        }
    }
}

impl<R: ListenerRegistry> Drop for ListenerGuard<R> {
    fn drop(&mut self) {
        self.remove_all();
    }
}

impl<R: ListenerRegistry> core::fmt::Debug for ListenerGuard<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}
