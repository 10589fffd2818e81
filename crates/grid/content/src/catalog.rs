//! Named shape presets.

use std::collections::BTreeMap;

use grid_core::{Area, ShapeSpec};

/// Shape presets addressed by name, in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: BTreeMap<String, ShapeSpec>,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preset. Returns the spec it replaced, if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, spec: ShapeSpec) -> Option<ShapeSpec> {
        self.shapes.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&ShapeSpec> {
        self.shapes.get(name)
    }

    /// Builds the area for a named preset.
    pub fn area(&self, name: &str) -> Option<Area> {
        self.get(name).map(ShapeSpec::build)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeSpec)> {
        self.shapes.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
