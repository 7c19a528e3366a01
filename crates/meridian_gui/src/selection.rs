//! The set of testimonials behind a clicked pin, plus a cursor into it.
//!
//! Created when a focus animation settles on a marker, destroyed when the
//! popup closes. Navigation wraps in both directions.

use meridian_core::testimonial::TestimonialId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    ids: Vec<TestimonialId>,
    index: usize,
}

impl SelectionContext {
    /// Builds a context over a marker's testimonials, cursor on the first.
    /// Returns `None` for an empty list; a pin with nothing to show is not
    /// selectable.
    pub fn new(ids: Vec<TestimonialId>) -> Option<Self> {
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids, index: 0 })
        }
    }

    pub fn current(&self) -> TestimonialId {
        self.ids[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of testimonials on this pin. Never zero; the constructor
    /// rejects empty lists.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[TestimonialId] {
        &self.ids
    }

    /// Advances the cursor, wrapping past the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.ids.len();
    }

    /// Moves the cursor back, wrapping before the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.ids.len() - 1) % self.ids.len();
    }
}
