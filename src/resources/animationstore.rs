//! Animation set registry.
//!
//! Minimal arena for [`AnimationSet`]s built at scene setup. Every actor
//! drawing from the same sheet gets an `Rc` to the one set stored here, so the
//! frame data is built once and never copied.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::components::animation::AnimationSet;
use crate::error::{Result, SpriteError};

#[derive(Debug, Default)]
pub struct AnimationStore {
    sets: FxHashMap<String, Rc<AnimationSet>>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, set: Rc<AnimationSet>) {
        self.sets.insert(key.into(), set);
    }

    /// Shared handle to the set registered under `key`.
    pub fn get(&self, key: &str) -> Result<Rc<AnimationSet>> {
        self.sets
            .get(key)
            .cloned()
            .ok_or_else(|| SpriteError::MissingSheet(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sets.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
