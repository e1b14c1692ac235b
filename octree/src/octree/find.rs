use super::node::{Child, Leaf, Octant};
use super::EntityId;
use common::shapes::Sphere;
use crossbeam_channel::{Receiver, Sender};
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Shared flag that stops a running find. Cloning gives another handle to
/// the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Entities found by a sphere query, in no particular order.
///
/// The stream ends once every worker of the query has finished, or as soon as
/// it is cancelled. Dropping it cancels the query, so abandoning a stream
/// halfway leaves no worker behind.
pub struct FindStream<E> {
    receiver: Receiver<E>,
    cancel: CancelToken,
}

impl<E> FindStream<E> {
    pub(crate) fn empty() -> Self {
        let (_, receiver) = crossbeam_channel::unbounded();
        Self {
            receiver,
            cancel: CancelToken::new(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl<E> Iterator for FindStream<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.receiver.recv().ok()
    }
}

impl<E> FusedIterator for FindStream<E> {}

impl<E> Drop for FindStream<E> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Search<E> {
    sphere: Sphere,
    sender: Sender<E>,
    cancel: CancelToken,
}

impl<E: EntityId> Search<E> {
    fn emit(&self, entity: &E) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        if self.sender.send(entity.clone()).is_err() {
            self.cancel.cancel();
            return false;
        }
        true
    }

    fn visit(&self, child: Child<E>) {
        match child {
            Child::Octant(octant) => self.visit_octant(&octant),
            Child::Leaf(leaf) => self.visit_leaf(&leaf),
        }
    }

    // Fans out one task per intersecting child and returns once all of them
    // are done.
    fn visit_octant(&self, octant: &Octant<E>) {
        if self.cancel.is_cancelled() {
            return;
        }
        let mut targets = octant.intersecting_children(&self.sphere);
        if targets.len() == 1 {
            if let Some(child) = targets.pop() {
                self.visit(child);
            }
            return;
        }
        rayon::scope(|scope| {
            for child in targets {
                scope.spawn(move |_| self.visit(child));
            }
        });
    }

    fn visit_leaf(&self, leaf: &Leaf<E>) {
        if self.cancel.is_cancelled() {
            return;
        }
        leaf.for_each_within(&self.sphere, |entity| self.emit(entity));
    }
}

/// Starts a find on `pool` and returns the stream its results arrive on.
pub(crate) fn spawn_search<E: EntityId>(
    pool: &rayon::ThreadPool,
    root: Arc<Octant<E>>,
    sphere: Sphere,
) -> FindStream<E> {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let cancel = CancelToken::new();
    let search = Search {
        sphere,
        sender,
        cancel: cancel.clone(),
    };
    pool.spawn(move || {
        search.visit_octant(&root);
        if search.cancel.is_cancelled() {
            debug!(center = ?search.sphere.center, "find stopped by its consumer");
        }
    });
    FindStream { receiver, cancel }
}
