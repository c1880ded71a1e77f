//! Asset object model and asset index collaborators.
//!
//! The lint engine never talks to an engine content database directly. It
//! consumes [`AssetDescriptor`]s from an [`AssetIndex`] and evaluates rules
//! against loaded [`AssetObject`]s. [`FsAssetIndex`] is the filesystem-backed
//! index used by the CLI and tests: it enumerates `*.asset.json` manifests
//! under a content directory mounted at `/Game`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Mount point for the content root in object paths.
pub const MOUNT_POINT: &str = "/Game";

/// File suffix recognized as an asset manifest.
const MANIFEST_SUFFIX: &str = ".asset.json";

/// Texture group an asset is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureGroup {
    /// General world textures.
    #[default]
    World,
    /// Character textures.
    Character,
    /// Weapon textures.
    Weapon,
    /// Vehicle textures.
    Vehicle,
    /// Effects textures.
    Effects,
    /// Skybox textures.
    Skybox,
    /// UI textures.
    Ui,
    /// Baked lightmaps.
    Lightmap,
}

impl TextureGroup {
    /// Display name used in messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::World => "World",
            Self::Character => "Character",
            Self::Weapon => "Weapon",
            Self::Vehicle => "Vehicle",
            Self::Effects => "Effects",
            Self::Skybox => "Skybox",
            Self::Ui => "UI",
            Self::Lightmap => "Lightmap",
        }
    }

    /// Parses a group from its lowercase config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "world" => Some(Self::World),
            "character" => Some(Self::Character),
            "weapon" => Some(Self::Weapon),
            "vehicle" => Some(Self::Vehicle),
            "effects" => Some(Self::Effects),
            "skybox" => Some(Self::Skybox),
            "ui" => Some(Self::Ui),
            "lightmap" => Some(Self::Lightmap),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compile status of a blueprint asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlueprintStatus {
    /// Still being created; has never compiled.
    BeingCreated,
    /// Modified since the last compile.
    Dirty,
    /// Status could not be determined.
    #[default]
    Unknown,
    /// Compiled cleanly.
    UpToDate,
    /// Compile failed.
    Error,
    /// Compiled, but with warnings.
    UpToDateWithWarnings,
}

/// Kind of a blueprint asset, used for naming-convention variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlueprintKind {
    /// Ordinary blueprint class.
    #[default]
    Normal,
    /// Macro library.
    MacroLibrary,
    /// Interface blueprint.
    Interface,
    /// Function library.
    FunctionLibrary,
}

/// Domain of a material asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialDomain {
    /// Standard surface material.
    #[default]
    Surface,
    /// Deferred decal material.
    DeferredDecal,
    /// Light function material.
    LightFunction,
    /// Post-process material.
    PostProcess,
    /// UI material.
    UserInterface,
}

/// Texture properties of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Assigned texture group.
    #[serde(default)]
    pub group: TextureGroup,
}

/// Blueprint properties of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlueprintInfo {
    /// Last known compile status.
    #[serde(default)]
    pub status: BlueprintStatus,
    /// Blueprint kind.
    #[serde(default)]
    pub kind: BlueprintKind,
}

/// Material properties of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Material domain.
    #[serde(default)]
    pub domain: MaterialDomain,
}

/// A loaded content asset, as handed to lint rules.
///
/// The typed sections are populated from the asset manifest when present;
/// rules read the section they care about and pass when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetObject {
    /// Full object path, e.g. `/Game/Textures/T_Rock`.
    pub path: String,
    /// Asset name.
    pub name: String,
    /// Concrete class name.
    pub class: String,
    /// Texture properties, if this asset is a texture.
    #[serde(default)]
    pub texture: Option<TextureInfo>,
    /// Blueprint properties, if this asset is a blueprint.
    #[serde(default)]
    pub blueprint: Option<BlueprintInfo>,
    /// Material properties, if this asset is a material.
    #[serde(default)]
    pub material: Option<MaterialInfo>,
}

impl AssetObject {
    /// Creates an asset with no typed property sections.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            class: class.into(),
            texture: None,
            blueprint: None,
            material: None,
        }
    }

    /// Attaches texture properties.
    #[must_use]
    pub fn with_texture(mut self, texture: TextureInfo) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Attaches blueprint properties.
    #[must_use]
    pub fn with_blueprint(mut self, blueprint: BlueprintInfo) -> Self {
        self.blueprint = Some(blueprint);
        self
    }

    /// Attaches material properties.
    #[must_use]
    pub fn with_material(mut self, material: MaterialInfo) -> Self {
        self.material = Some(material);
        self
    }
}

/// On-disk asset manifest. The asset name defaults to the file stem.
#[derive(Debug, Deserialize)]
struct AssetManifest {
    #[serde(default)]
    name: Option<String>,
    class: String,
    #[serde(default)]
    texture: Option<TextureInfo>,
    #[serde(default)]
    blueprint: Option<BlueprintInfo>,
    #[serde(default)]
    material: Option<MaterialInfo>,
}

/// Error loading a single asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    /// IO error reading the asset manifest.
    #[error("failed to read asset manifest {path}: {source}")]
    Io {
        /// Manifest path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed asset manifest.
    #[error("malformed asset manifest {path}: {message}")]
    Parse {
        /// Manifest path that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Error enumerating assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetIndexError {
    /// IO error walking the content tree.
    #[error("failed to enumerate assets: {0}")]
    Io(#[from] std::io::Error),
}

/// Descriptor for one enumerated asset: identity, class, and a loadable handle.
#[derive(Debug, Clone)]
pub struct AssetDescriptor {
    /// Full object path.
    pub object_path: String,
    /// Asset name.
    pub name: String,
    /// Concrete class name.
    pub class: String,
    /// Manifest file backing this asset.
    pub source: PathBuf,
}

impl AssetDescriptor {
    /// Loads the full asset object from its manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn load(&self) -> Result<AssetObject, AssetLoadError> {
        let content = std::fs::read_to_string(&self.source).map_err(|e| AssetLoadError::Io {
            path: self.source.clone(),
            source: e,
        })?;
        let manifest: AssetManifest =
            serde_json::from_str(&content).map_err(|e| AssetLoadError::Parse {
                path: self.source.clone(),
                message: e.to_string(),
            })?;

        Ok(AssetObject {
            path: self.object_path.clone(),
            name: manifest.name.unwrap_or_else(|| self.name.clone()),
            class: manifest.class,
            texture: manifest.texture,
            blueprint: manifest.blueprint,
            material: manifest.material,
        })
    }
}

/// Asset enumeration for a set of content paths.
pub trait AssetIndex {
    /// Returns descriptors for all assets recursively under the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying content store cannot be walked.
    fn enumerate(&self, paths: &[String]) -> Result<Vec<AssetDescriptor>, AssetIndexError>;
}

/// Filesystem-backed asset index.
///
/// Mounts a content directory at [`MOUNT_POINT`] and treats every
/// `*.asset.json` file beneath it as one asset. Enumeration order is the
/// sorted directory walk, so repeated passes see assets in the same order.
#[derive(Debug, Clone)]
pub struct FsAssetIndex {
    root: PathBuf,
    exclude_patterns: Vec<String>,
}

impl FsAssetIndex {
    /// Creates an index over the given content directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Adds exclude glob patterns, matched against content-relative paths.
    #[must_use]
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Returns the mounted content directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/Developers/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(normalized_pattern.trim_matches('/')) {
                return true;
            }
        }

        false
    }
}

/// Returns true if `object_path` is `prefix` or lies underneath it.
fn under_path(object_path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    object_path == prefix || object_path.starts_with(&format!("{prefix}/"))
}

impl AssetIndex for FsAssetIndex {
    fn enumerate(&self, paths: &[String]) -> Result<Vec<AssetDescriptor>, AssetIndexError> {
        let mut descriptors = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(stem) = file_name.strip_suffix(MANIFEST_SUFFIX) else {
                continue;
            };

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            if self.is_excluded(relative) {
                tracing::debug!("Excluding {}", relative.display());
                continue;
            }

            // The asset registry only knows valid assets; a manifest that does
            // not parse is logged and never enumerated.
            let content = std::fs::read_to_string(entry.path())?;
            let manifest: AssetManifest = match serde_json::from_str(&content) {
                Ok(manifest) => manifest,
                Err(e) => {
                    tracing::warn!(
                        "Skipping malformed asset manifest {}: {e}",
                        entry.path().display()
                    );
                    continue;
                }
            };

            let name = manifest.name.unwrap_or_else(|| stem.to_string());
            let mut object_path = String::from(MOUNT_POINT);
            if let Some(parent) = relative.parent() {
                for component in parent.components() {
                    object_path.push('/');
                    object_path.push_str(&component.as_os_str().to_string_lossy());
                }
            }
            object_path.push('/');
            object_path.push_str(&name);

            if !paths.iter().any(|p| under_path(&object_path, p)) {
                continue;
            }

            descriptors.push(AssetDescriptor {
                object_path,
                name,
                class: manifest.class,
                source: entry.path().to_path_buf(),
            });
        }

        Ok(descriptors)
    }
}
