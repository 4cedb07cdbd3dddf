//! # trellis
//!
//! Declarative view-modifier composition, independent of any rendering backend.
//!
//! An [`Element`] describes something to display. Decorations are appended to
//! it in order, either directly through the fluent methods or through named
//! style functions held in a [`ModifierRegistry`]. [`render`] then resolves the
//! tree into [`RenderNode`]s for a host renderer.
//!
//! ## Core Types
//!
//! - [`Element`] - Immutable description of a displayable unit
//! - [`Decoration`] - A [`Property`] plus its [`Scope`] (cascading or local)
//! - [`ModifierRegistry`] - Named, reusable style functions
//!
//! ## Resolution
//!
//! - [`ResolvedStyle`] - Decorations folded in order (exclusive properties
//!   overwrite, additive ones accumulate)
//! - [`render`] - Tree walk applying cascading decorations to descendants
//!
//! ## Views & Configuration
//!
//! - [`Component`] / [`Session`] - State-driven views and re-rendering
//! - [`StyleSheet`] - Style functions declared in TOML

pub mod builtins;
mod color;
mod component;
mod config;
mod decoration;
mod element;
mod error;
mod geometry;
mod params;
mod registry;
mod render;
mod style;
mod text;

pub use color::*;
pub use component::*;
pub use config::*;
pub use decoration::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use registry::*;
pub use render::*;
pub use style::*;
pub use text::*;

pub use glam::Vec2;
