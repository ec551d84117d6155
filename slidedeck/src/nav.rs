use alloc::vec::Vec;

use crate::{ClassSet, SlideClass};

/// One indicator per slide, positionally matched to the slide sequence.
///
/// The controller owns the "active" marker bookkeeping; adapters mirror it onto their dot
/// elements and route clicks back through [`crate::SlideController::click_dot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationDots {
    dots: Vec<ClassSet>,
}

impl NavigationDots {
    pub(crate) fn new() -> Self {
        Self { dots: Vec::new() }
    }

    /// Builds one dot per slide, marking `active` only.
    pub(crate) fn build(&mut self, count: usize, active: usize) {
        self.dots.clear();
        self.dots.extend((0..count).map(|i| {
            let mut set = ClassSet::EMPTY;
            if i == active {
                set.insert(SlideClass::Active);
            }
            set
        }));
    }

    pub(crate) fn move_active(&mut self, from: usize, to: usize) {
        if let Some(dot) = self.dots.get_mut(from) {
            dot.remove(SlideClass::Active);
        }
        if let Some(dot) = self.dots.get_mut(to) {
            dot.insert(SlideClass::Active);
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn classes(&self, index: usize) -> ClassSet {
        self.dots.get(index).copied().unwrap_or_default()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.dots
            .iter()
            .position(|d| d.contains(SlideClass::Active))
    }

    pub fn iter(&self) -> impl Iterator<Item = ClassSet> + '_ {
        self.dots.iter().copied()
    }
}
