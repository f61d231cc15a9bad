// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Elements`]: an owning container of type-erased elements addressed by generational keys.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;

use crate::{Element, RenderStatus, RenderTarget, ResourceHandle};

/// Handle to an element stored in [`Elements`].
///
/// Keys stay valid until their element is removed. A removed slot may be reused, but with a
/// higher generation, so a stale key never aliases the new occupant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementKey(u32, u32);

impl ElementKey {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    element: Option<Box<dyn Element>>,
}

/// Exclusive owner of a set of elements.
///
/// Elements are kept in insertion order, which is the paint order: later elements are drawn
/// over earlier ones and win hit tests.
#[derive(Debug, Default)]
pub struct Elements {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<ElementKey>,
}

impl Elements {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take ownership of `element` and place it above all existing elements.
    pub fn insert(&mut self, element: Box<dyn Element>) -> ElementKey {
        let kind = element.element_type();
        let key = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.element = Some(element);
            ElementKey(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "more than u32::MAX live elements is not a supported workload"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                element: Some(element),
            });
            ElementKey(idx, 1)
        };
        self.order.push(key);
        log::debug!("inserted {kind} element as {key:?}");
        key
    }

    /// Returns `true` if `key` refers to a live element.
    pub fn contains(&self, key: ElementKey) -> bool {
        self.slot(key).is_some()
    }

    /// Borrow an element.
    pub fn get(&self, key: ElementKey) -> Option<&dyn Element> {
        self.slot(key).and_then(|slot| slot.element.as_deref())
    }

    /// Mutably borrow an element.
    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut dyn Element> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        match &mut slot.element {
            Some(element) => Some(&mut **element),
            None => None,
        }
    }

    /// Remove an element and hand ownership back to the caller.
    pub fn remove(&mut self, key: ElementKey) -> Option<Box<dyn Element>> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        let element = slot.element.take()?;
        self.free.push(key.0);
        self.order.retain(|k| *k != key);
        Some(element)
    }

    /// Remove and drop an element, releasing whatever the concrete type owns.
    ///
    /// Returns `false` if `key` was stale.
    pub fn destroy(&mut self, key: ElementKey) -> bool {
        match self.remove(key) {
            Some(element) => {
                log::debug!("destroying {} element {key:?}", element.element_type());
                drop(element);
                true
            }
            None => false,
        }
    }

    /// Keys of live elements, back to front.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = ElementKey> + '_ {
        self.order.iter().copied()
    }

    /// Live elements, back to front.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &dyn Element)> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.get(key).map(|element| (key, element)))
    }

    /// Call [`Element::update`] on every live element, back to front.
    pub fn update_all(&mut self, delta_time: f64) {
        for i in 0..self.order.len() {
            let key = self.order[i];
            if let Some(element) = self.get_mut(key) {
                element.update(delta_time);
            }
        }
    }

    /// Render one element, passing its status through unchanged.
    ///
    /// Returns `None` if `key` is stale.
    pub fn render(
        &mut self,
        key: ElementKey,
        target: &mut dyn RenderTarget,
        resources: &[ResourceHandle],
    ) -> Option<RenderStatus> {
        self.get_mut(key)
            .map(|element| element.render(target, resources))
    }

    /// The front-most element whose hit test accepts `point`.
    pub fn hit_test(&self, point: Point) -> Option<ElementKey> {
        self.keys().rev().find(|&key| {
            self.get(key)
                .is_some_and(|element| element.hit_test(point))
        })
    }

    fn slot(&self, key: ElementKey) -> Option<&Slot> {
        self.slots
            .get(key.idx())
            .filter(|slot| slot.generation == key.1 && slot.element.is_some())
    }
}
