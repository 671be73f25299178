//! Layered resource packs.
//!
//! Packs are ordered from lowest to highest priority. A resource may exist in
//! several packs: index documents stack (every copy is read, in order),
//! everything else resolves to the highest-priority copy.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use spellhud_types::error::{HudError, Result};
use spellhud_types::resource::ResourceLocation;

/// Source of raw resource documents.
pub trait ResourceProvider {
    /// Every pack's copy of `location`, lowest priority first.
    ///
    /// Packs that do not contain the resource are skipped. A copy that exists
    /// but cannot be read shows up as an `Err` in its position.
    fn all_resources(&self, location: &ResourceLocation) -> Vec<Result<String>>;

    /// The highest-priority copy of `location`.
    fn resource(&self, location: &ResourceLocation) -> Result<String> {
        self.all_resources(location)
            .pop()
            .unwrap_or_else(|| Err(HudError::Resource(format!("{location} not found"))))
    }
}

/// One in-memory pack.
#[derive(Debug, Clone, Default)]
pub struct MemoryPack {
    name: String,
    files: HashMap<ResourceLocation, String>,
}

impl MemoryPack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: HashMap::new(),
        }
    }

    /// Add or replace a file.
    pub fn with_file(mut self, location: ResourceLocation, contents: impl Into<String>) -> Self {
        self.files.insert(location, contents.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory packs, for embedded defaults and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPacks {
    packs: Vec<MemoryPack>,
}

impl MemoryPacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pack above all existing ones.
    pub fn push(&mut self, pack: MemoryPack) {
        self.packs.push(pack);
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl ResourceProvider for MemoryPacks {
    fn all_resources(&self, location: &ResourceLocation) -> Vec<Result<String>> {
        self.packs
            .iter()
            .filter_map(|pack| pack.files.get(location).cloned().map(Ok))
            .collect()
    }
}

/// Packs stored as directories, each with an `assets/<namespace>/...` tree.
#[derive(Debug, Clone, Default)]
pub struct DirectoryPacks {
    roots: Vec<PathBuf>,
}

impl DirectoryPacks {
    /// Packs from lowest to highest priority.
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    /// Add a pack above all existing ones.
    pub fn push(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Pack directories directly under `dir`, sorted by name.
    ///
    /// A directory counts as a pack if it has an `assets` folder.
    pub fn discover(dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut packs: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.join("assets").is_dir())
            .collect();
        packs.sort();
        packs
    }
}

impl ResourceProvider for DirectoryPacks {
    fn all_resources(&self, location: &ResourceLocation) -> Vec<Result<String>> {
        let relative = location.pack_path();
        self.roots
            .iter()
            .map(|root| root.join(&relative))
            .filter(|path| path.is_file())
            .map(|path| {
                std::fs::read_to_string(&path)
                    .map_err(|e| HudError::Resource(format!("{}: {e}", path.display())))
            })
            .collect()
    }
}
