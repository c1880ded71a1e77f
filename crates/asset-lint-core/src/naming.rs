//! Naming-convention table and resolution.

use serde::{Deserialize, Serialize};

use crate::classes::{ClassRegistry, ANY_CLASS, ROOT_CLASS};

/// One naming-convention entry: a prefix/suffix pair for a class and variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConventionEntry {
    /// Class the convention applies to. May be [`ANY_CLASS`] for a catch-all.
    pub class: String,
    /// Variant tag; empty for the default variant.
    #[serde(default)]
    pub variant: String,
    /// Required name prefix.
    #[serde(default)]
    pub prefix: String,
    /// Required name suffix.
    #[serde(default)]
    pub suffix: String,
}

impl NamingConventionEntry {
    /// Creates an entry for the default variant of `class`.
    #[must_use]
    pub fn new(class: impl Into<String>, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            variant: String::new(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Sets the variant tag.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }
}

/// Ordered table of naming conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamingConventionTable {
    entries: Vec<NamingConventionEntry>,
}

impl NamingConventionTable {
    /// Creates a table from a list of entries.
    #[must_use]
    pub fn new(entries: Vec<NamingConventionEntry>) -> Self {
        Self { entries }
    }

    /// The table every project starts from: engine content classes with the
    /// common community prefixes.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![
            NamingConventionEntry::new("Texture2D", "T_", ""),
            NamingConventionEntry::new("TextureCube", "TC_", ""),
            NamingConventionEntry::new("Material", "M_", ""),
            NamingConventionEntry::new("Material", "PP_", "").with_variant("PostProcess"),
            NamingConventionEntry::new("MaterialInstanceConstant", "MI_", ""),
            NamingConventionEntry::new("MaterialFunction", "MF_", ""),
            NamingConventionEntry::new("Blueprint", "BP_", ""),
            NamingConventionEntry::new("Blueprint", "BPI_", "").with_variant("Interface"),
            NamingConventionEntry::new("Blueprint", "BPML_", "").with_variant("MacroLibrary"),
            NamingConventionEntry::new("Blueprint", "BPFL_", "").with_variant("FunctionLibrary"),
            NamingConventionEntry::new("WidgetBlueprint", "WBP_", ""),
            NamingConventionEntry::new("StaticMesh", "SM_", ""),
            NamingConventionEntry::new("SkeletalMesh", "SK_", ""),
            NamingConventionEntry::new("SoundWave", "A_", ""),
            NamingConventionEntry::new("SoundCue", "A_", "_Cue"),
            NamingConventionEntry::new("ParticleSystem", "PS_", ""),
        ])
    }

    /// Returns the entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[NamingConventionEntry] {
        &self.entries
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry to the end of the table.
    pub fn push(&mut self, entry: NamingConventionEntry) {
        self.entries.push(entry);
    }

    /// Resolves the conventions for `class` and `variant`.
    ///
    /// Filters the table for the concrete class first, then walks parent by
    /// parent. When the walk reaches the root class without a match, the
    /// [`ANY_CLASS`] pseudo-class is substituted for one final filter,
    /// permitting catch-all conventions. No match anywhere yields an empty
    /// list, which is not an error.
    #[must_use]
    pub fn resolve(
        &self,
        classes: &ClassRegistry,
        class: &str,
        variant: &str,
    ) -> Vec<NamingConventionEntry> {
        let mut current = class;
        loop {
            let matches = self.entries_for(current, variant);
            if !matches.is_empty() {
                return matches;
            }

            if current == ROOT_CLASS {
                return self.entries_for(ANY_CLASS, variant);
            }

            match classes.parent_of(current) {
                Some(parent) => current = parent,
                None => return Vec::new(),
            }
        }
    }

    fn entries_for(&self, class: &str, variant: &str) -> Vec<NamingConventionEntry> {
        self.entries
            .iter()
            .filter(|e| e.class == class && e.variant == variant)
            .cloned()
            .collect()
    }

    /// Re-sorts the table by (class, variant, prefix, suffix) ascending.
    ///
    /// Applied on every persistence event. The sort is stable, so entries
    /// with fully equal keys keep their relative order and re-sorting an
    /// already-sorted table is a no-op.
    pub fn sort_conventions(&mut self) {
        self.entries.sort_by(|a, b| {
            a.class
                .cmp(&b.class)
                .then_with(|| a.variant.cmp(&b.variant))
                .then_with(|| a.prefix.cmp(&b.prefix))
                .then_with(|| a.suffix.cmp(&b.suffix))
        });
    }
}
