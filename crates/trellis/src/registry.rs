//! Registry of named, reusable style functions.
//!
//! A style function maps an [`Element`] (plus parameters) to a new, decorated
//! element. Functions are registered once and applied any number of times.
//! They hold no mutable state, so applying the same function to the same
//! input always yields the same output.
//!
//! # Example
//!
//! ```rust
//! use trellis::{css, Element, Font, ModifierRegistry};
//!
//! let mut registry = ModifierRegistry::new();
//! registry
//!     .define_modifier("headline", |element, _params| {
//!         Ok(element.font(Font::Headline).foreground(css::BLUE))
//!     })
//!     .unwrap();
//!
//! let styled = registry.compose(&Element::text("Hi"), &["headline"]).unwrap();
//! assert_eq!(styled.decorations().len(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::decoration::Decoration;
use crate::element::Element;
use crate::error::{Result, StyleError};
use crate::params::ModifierParams;

/// Signature of a registered style function
pub type StyleFn = dyn Fn(Element, &ModifierParams) -> Result<Element> + Send + Sync;

/// Named style functions, populated once and then only read.
#[derive(Clone, Default)]
pub struct ModifierRegistry {
    modifiers: HashMap<String, Arc<StyleFn>>,
}

impl ModifierRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in style functions.
    ///
    /// See [`crate::builtins`] for the list.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        crate::builtins::register_builtins(&mut registry)?;
        Ok(registry)
    }

    /// Registers `transform` under `name`.
    ///
    /// Names are unique: registering a name twice fails with
    /// [`StyleError::DuplicateName`] and keeps the first function.
    pub fn define_modifier<F>(&mut self, name: impl Into<String>, transform: F) -> Result<()>
    where
        F: Fn(Element, &ModifierParams) -> Result<Element> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.modifiers.contains_key(&name) {
            return Err(StyleError::DuplicateName { name });
        }
        log::debug!("registered modifier '{}'", name);
        self.modifiers.insert(name, Arc::new(transform));
        Ok(())
    }

    /// Registers a style function that appends `decorations`, in order.
    pub fn define_style(
        &mut self,
        name: impl Into<String>,
        decorations: Vec<Decoration>,
    ) -> Result<()> {
        self.define_modifier(name, move |element, _params| {
            Ok(element.with_all(decorations.iter().cloned()))
        })
    }

    /// Applies the function registered under `name` to a copy of `element`.
    ///
    /// `element` itself is never modified.
    pub fn apply_modifier(
        &self,
        element: &Element,
        name: &str,
        params: &ModifierParams,
    ) -> Result<Element> {
        let transform = self.lookup(name)?;
        log::trace!("applying modifier '{}'", name);
        transform(element.clone(), params)
    }

    /// Applies modifiers strictly in list order, each with empty parameters.
    ///
    /// The output of modifier *i* is the input of modifier *i + 1*. Fails on
    /// the first unknown name.
    pub fn compose<S: AsRef<str>>(&self, element: &Element, names: &[S]) -> Result<Element> {
        let empty = ModifierParams::new();
        self.fold(element, names.iter().map(|name| (name.as_ref(), &empty)))
    }

    /// Like [`compose`](Self::compose), with parameters for each step.
    pub fn compose_with(
        &self,
        element: &Element,
        steps: &[(&str, ModifierParams)],
    ) -> Result<Element> {
        self.fold(element, steps.iter().map(|(name, params)| (*name, params)))
    }

    fn fold<'a>(
        &self,
        element: &Element,
        steps: impl Iterator<Item = (&'a str, &'a ModifierParams)>,
    ) -> Result<Element> {
        let mut current = element.clone();
        for (name, params) in steps {
            let transform = self.lookup(name)?;
            log::trace!("applying modifier '{}'", name);
            current = transform(current, params)?;
        }
        Ok(current)
    }

    fn lookup(&self, name: &str) -> Result<&Arc<StyleFn>> {
        self.modifiers
            .get(name)
            .ok_or_else(|| StyleError::UnknownModifier {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modifiers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierRegistry")
            .field("modifiers", &self.names())
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceCell<ModifierRegistry> = OnceCell::new();

/// Installs the process-wide registry.
///
/// Can succeed only once; after that the registry is read-only for the rest
/// of the process.
pub fn install_global(registry: ModifierRegistry) -> Result<&'static ModifierRegistry> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| StyleError::AlreadyInstalled)?;
    log::debug!("installed global modifier registry");
    GLOBAL_REGISTRY.get().ok_or(StyleError::RegistryNotInstalled)
}

/// Returns the process-wide registry installed by [`install_global`].
pub fn global() -> Result<&'static ModifierRegistry> {
    GLOBAL_REGISTRY.get().ok_or(StyleError::RegistryNotInstalled)
}
