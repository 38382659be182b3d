//! Registry of loaded sprite sheets.
//!
//! The core never touches pixel data. Asset loading is done by the host,
//! which registers each image here as a [`SheetHandle`]: a texture key plus
//! the pixel dimensions needed to slice it into a grid.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::{Result, SpriteError};

/// Opaque, cheaply clonable handle to a loaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHandle {
    key: Rc<str>,
    width: u32,
    height: u32,
}

impl SheetHandle {
    pub fn new(key: impl Into<Rc<str>>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Default)]
pub struct TextureStore {
    map: FxHashMap<String, SheetHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a sheet and return its handle.
    pub fn insert(&mut self, key: &str, width: u32, height: u32) -> SheetHandle {
        let handle = SheetHandle::new(key, width, height);
        self.map.insert(key.to_string(), handle.clone());
        handle
    }

    pub fn get(&self, key: &str) -> Result<SheetHandle> {
        self.map
            .get(key)
            .cloned()
            .ok_or_else(|| SpriteError::MissingSheet(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
