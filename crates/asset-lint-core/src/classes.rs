//! Class hierarchy registry.
//!
//! Rule lookup and naming-convention resolution both walk an asset's class
//! chain towards the root. The registry supplies that child-to-parent lookup;
//! classes it has never seen hang directly off the root class, so every walk
//! terminates.

use std::collections::HashMap;

/// Root of the class hierarchy.
pub const ROOT_CLASS: &str = "Object";

/// Sentinel pseudo-class for catch-all rules and conventions.
///
/// Entries keyed on this class apply to any asset whose hierarchy walk
/// reaches [`ROOT_CLASS`] without a match.
pub const ANY_CLASS: &str = "AnyObject";

/// Child-to-parent class map.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    parents: HashMap<String, String>,
}

impl ClassRegistry {
    /// Creates an empty registry. Unregistered classes parent to the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the engine content classes.
    #[must_use]
    pub fn with_engine_defaults() -> Self {
        let mut registry = Self::new();
        for (child, parent) in [
            ("Texture", ROOT_CLASS),
            ("Texture2D", "Texture"),
            ("TextureCube", "Texture"),
            ("Blueprint", ROOT_CLASS),
            ("WidgetBlueprint", "Blueprint"),
            ("MaterialInterface", ROOT_CLASS),
            ("Material", "MaterialInterface"),
            ("MaterialInstanceConstant", "MaterialInterface"),
            ("MaterialFunction", ROOT_CLASS),
            ("StaticMesh", ROOT_CLASS),
            ("SkeletalMesh", ROOT_CLASS),
            ("SoundBase", ROOT_CLASS),
            ("SoundWave", "SoundBase"),
            ("SoundCue", "SoundBase"),
            ("ParticleSystem", ROOT_CLASS),
            (ANY_CLASS, ROOT_CLASS),
        ] {
            registry.register(child, parent);
        }
        registry
    }

    /// Registers `child` as a direct subclass of `parent`.
    pub fn register(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.parents.insert(child.into(), parent.into());
    }

    /// Returns the parent of `class`, or `None` for the root class.
    ///
    /// Unregistered classes are treated as direct children of the root.
    #[must_use]
    pub fn parent_of(&self, class: &str) -> Option<&str> {
        if class == ROOT_CLASS {
            return None;
        }
        Some(self.parents.get(class).map_or(ROOT_CLASS, String::as_str))
    }

    /// Walks from `class` to the root, yielding `class` first.
    ///
    /// The walk is capped so a misconfigured cyclic hierarchy cannot loop
    /// forever.
    pub fn ancestors<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> {
        let cap = self.parents.len() + 2;
        std::iter::successors(Some(class), |current| self.parent_of(current)).take(cap)
    }

    /// Returns true if `class` is `ancestor` or derives from it.
    #[must_use]
    pub fn is_a(&self, class: &str, ancestor: &str) -> bool {
        self.ancestors(class).any(|c| c == ancestor)
    }
}
