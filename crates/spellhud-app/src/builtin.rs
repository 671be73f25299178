//! The built-in skin pack and pack stacking.

use std::path::{Path, PathBuf};

use spellhud_skin::{DirectoryPacks, MemoryPack, MemoryPacks, ResourceProvider};
use spellhud_types::error::Result;
use spellhud_types::resource::{DEFAULT_NAMESPACE, ResourceLocation};

const SKIN_DIR: &str = "textures/gui/spell_hud";

/// Files of the built-in pack, relative to [`SKIN_DIR`].
const BUILTIN_FILES: [(&str, &str); 4] = [
    (
        "_index.json",
        include_str!("../../../packs/base/assets/spellhud/textures/gui/spell_hud/_index.json"),
    ),
    (
        "default.json",
        include_str!("../../../packs/base/assets/spellhud/textures/gui/spell_hud/default.json"),
    ),
    (
        "compact.json",
        include_str!("../../../packs/base/assets/spellhud/textures/gui/spell_hud/compact.json"),
    ),
    (
        "arcane.json",
        include_str!("../../../packs/base/assets/spellhud/textures/gui/spell_hud/arcane.json"),
    ),
];

/// The skins that ship with the tool.
pub fn builtin_pack() -> MemoryPack {
    BUILTIN_FILES
        .iter()
        .fold(MemoryPack::new("builtin"), |pack, (name, contents)| {
            let location = ResourceLocation::new(DEFAULT_NAMESPACE, format!("{SKIN_DIR}/{name}"));
            pack.with_file(location, *contents)
        })
}

/// Pack roots named on the command line, lowest priority first.
///
/// An argument with an `assets` folder is a pack; any other directory is
/// searched for packs one level down.
pub fn pack_roots(args: &[String]) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    for arg in args {
        let path = Path::new(arg);
        if path.join("assets").is_dir() {
            roots.push(path.to_path_buf());
            continue;
        }
        let found = DirectoryPacks::discover(path);
        if found.is_empty() {
            log::warn!("No resource packs in {}", path.display());
        }
        roots.extend(found);
    }
    roots
}

/// The built-in pack with directory packs stacked on top.
pub struct LayeredPacks {
    builtin: MemoryPacks,
    disk: DirectoryPacks,
}

impl LayeredPacks {
    pub fn new(disk: DirectoryPacks) -> Self {
        let mut builtin = MemoryPacks::new();
        builtin.push(builtin_pack());
        Self { builtin, disk }
    }

    pub fn from_args(args: &[String]) -> Self {
        Self::new(DirectoryPacks::new(pack_roots(args)))
    }
}

impl ResourceProvider for LayeredPacks {
    fn all_resources(&self, location: &ResourceLocation) -> Vec<Result<String>> {
        let mut all = self.builtin.all_resources(location);
        all.extend(self.disk.all_resources(location));
        all
    }
}
