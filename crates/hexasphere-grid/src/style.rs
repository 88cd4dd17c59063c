//! Node styling hooks.
//!
//! The renderer supplies a [`NodeStyle`] that picks an image and a main
//! color per node. Images can be costly to produce, so [`StyleCache`]
//! resolves each node's image once and keeps it for the session.

use std::collections::HashMap;

use crate::node::{Node, NodeId};

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Per-node image and color provider.
pub trait NodeStyle {
    /// Image handle type, cloned out of the cache on every lookup.
    type Image: Clone;
    /// Color value type.
    type Color;

    fn image(&self, node: &Node) -> Option<Self::Image>;

    fn color(&self, node: &Node) -> Self::Color;
}

/// No images, black main color.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralStyle;

impl NodeStyle for NeutralStyle {
    type Image = ();
    type Color = Rgba;

    fn image(&self, _node: &Node) -> Option<()> {
        None
    }

    fn color(&self, _node: &Node) -> Rgba {
        Rgba::default()
    }
}

/// Wraps a style and remembers resolved images by node id.
///
/// Entries are never evicted. When the style's inputs change, bump the
/// style version with [`StyleCache::set_style_version`] to start over.
pub struct StyleCache<S: NodeStyle> {
    style: S,
    images: HashMap<NodeId, Option<S::Image>>,
    style_version: u64,
}

impl<S: NodeStyle> StyleCache<S> {
    pub fn new(style: S) -> Self {
        Self {
            style,
            images: HashMap::new(),
            style_version: 0,
        }
    }

    /// Image for `node`, resolved through the style on first request only.
    /// A `None` answer is cached too.
    pub fn image_for(&mut self, node: &Node) -> Option<S::Image> {
        if let Some(cached) = self.images.get(node.id()) {
            return cached.clone();
        }
        let image = self.style.image(node);
        self.images.insert(node.id().clone(), image.clone());
        image
    }

    /// Color for `node`; not cached.
    pub fn color_for(&self, node: &Node) -> S::Color {
        self.style.color(node)
    }

    /// Drop every cached image if `version` differs from the current one.
    pub fn set_style_version(&mut self, version: u64) {
        if version != self.style_version {
            self.images.clear();
            self.style_version = version;
        }
    }

    pub fn style_version(&self) -> u64 {
        self.style_version
    }

    pub fn cached_len(&self) -> usize {
        self.images.len()
    }

    pub fn style(&self) -> &S {
        &self.style
    }
}
