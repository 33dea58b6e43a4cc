//! Toolkit seam
//!
//! The registry hands every built or rebuilt style to a [`StyleBackend`].
//! A rebuild arrives as one batch so the toolkit can apply it atomically.

use crate::builder::ResolvedStyleSpec;
use crate::registry::StyleName;
use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of resolved styles
pub trait StyleBackend {
    /// Apply (create or replace) every style in `batch`
    fn apply(&mut self, batch: &[(StyleName, ResolvedStyleSpec)]);
}

/// Backend that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl StyleBackend for NullBackend {
    fn apply(&mut self, _batch: &[(StyleName, ResolvedStyleSpec)]) {}
}

/// Backend that keeps every batch it receives.
///
/// Clones share the same log, so a caller can keep one handle and give the
/// other to the registry.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    batches: Rc<RefCell<Vec<Vec<(StyleName, ResolvedStyleSpec)>>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every batch received so far, oldest first
    pub fn batches(&self) -> Vec<Vec<(StyleName, ResolvedStyleSpec)>> {
        self.batches.borrow().clone()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.borrow().len()
    }

    /// Most recently applied spec for `name`
    pub fn latest(&self, name: &StyleName) -> Option<ResolvedStyleSpec> {
        self.batches
            .borrow()
            .iter()
            .rev()
            .flat_map(|batch| batch.iter())
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec.clone())
    }

    pub fn clear(&self) {
        self.batches.borrow_mut().clear();
    }
}

impl StyleBackend for RecordingBackend {
    fn apply(&mut self, batch: &[(StyleName, ResolvedStyleSpec)]) {
        self.batches.borrow_mut().push(batch.to_vec());
    }
}

impl<B: StyleBackend + ?Sized> StyleBackend for Box<B> {
    fn apply(&mut self, batch: &[(StyleName, ResolvedStyleSpec)]) {
        (**self).apply(batch)
    }
}
