//! Namespaced resource locations (`namespace:path`).
//!
//! Every file a skin refers to -- index documents, metadata documents,
//! textures, spell icons -- is addressed by a resource location. Resource
//! packs resolve a location to `assets/<namespace>/<path>`.

use std::fmt;

use crate::error::{HudError, Result};

/// Namespace assumed when a reference carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "spellhud";

/// A namespaced path to a resource inside the layered resource packs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Build a location from already-validated parts.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parse a `namespace:path` reference. A bare `path` gets
    /// [`DEFAULT_NAMESPACE`].
    pub fn parse(reference: &str) -> Result<Self> {
        let (namespace, path) = match reference.split_once(':') {
            Some((ns, path)) if !ns.is_empty() => (ns, path),
            Some((_, path)) => (DEFAULT_NAMESPACE, path),
            None => (DEFAULT_NAMESPACE, reference),
        };

        if path.is_empty() {
            return Err(HudError::Resource(format!(
                "'{reference}': empty resource path"
            )));
        }
        if !namespace.chars().all(is_namespace_char) {
            return Err(HudError::Resource(format!(
                "'{reference}': invalid character in namespace '{namespace}'"
            )));
        }
        if !path.chars().all(|c| is_namespace_char(c) || c == '/') {
            return Err(HudError::Resource(format!(
                "'{reference}': invalid character in path '{path}'"
            )));
        }

        // Locations become file paths under a pack root and must stay inside it.
        if is_relative_segment(namespace) || path.split('/').any(is_relative_segment) {
            return Err(HudError::Resource(format!(
                "'{reference}': relative path segment"
            )));
        }

        Ok(Self::new(namespace, path))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The PNG texture this reference names: `textures/<path>.png`.
    pub fn texture_png(&self) -> Self {
        Self::new(&self.namespace, format!("textures/{}.png", self.path))
    }

    /// The JSON document that sits next to the texture: `textures/<path>.json`.
    pub fn texture_json(&self) -> Self {
        Self::new(&self.namespace, format!("textures/{}.json", self.path))
    }

    /// Path of this resource relative to a pack root.
    pub fn pack_path(&self) -> String {
        format!("assets/{}/{}", self.namespace, self.path)
    }
}

fn is_relative_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_parent_segments() {
        for reference in [
            "spellhud:../../../x",
            "gui/../secret",
            "spellhud:gui/spell_hud/..",
            "..:gui/x",
            "spellhud:./gui",
        ] {
            let err = ResourceLocation::parse(reference).unwrap_err();
            assert!(format!("{err}").contains("relative path segment"), "{reference}");
        }
    }

    #[test]
    fn parse_allows_dots_inside_names() {
        let loc = ResourceLocation::parse("spellhud:gui/v1.2/skin..old").unwrap();
        assert_eq!(loc.path(), "gui/v1.2/skin..old");
    }

    #[test]
    fn parse_namespaced() {
        let loc = ResourceLocation::parse("mypack:gui/spell_hud/gold").unwrap();
        assert_eq!(loc.namespace(), "mypack");
        assert_eq!(loc.path(), "gui/spell_hud/gold");
    }

    #[test]
    fn parse_bare_path_uses_default_namespace() {
        let loc = ResourceLocation::parse("gui/spell_hud/default").unwrap();
        assert_eq!(loc.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn parse_leading_colon_uses_default_namespace() {
        let loc = ResourceLocation::parse(":icons/none").unwrap();
        assert_eq!(loc.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(loc.path(), "icons/none");
    }

    #[test]
    fn parse_rejects_empty_path() {
        assert!(ResourceLocation::parse("mypack:").is_err());
        assert!(ResourceLocation::parse("").is_err());
    }

    #[test]
    fn parse_rejects_uppercase() {
        let err = ResourceLocation::parse("MyPack:gui/hud").unwrap_err();
        assert!(format!("{err}").contains("namespace"));
        assert!(ResourceLocation::parse("pack:Gui/Hud").is_err());
    }

    #[test]
    fn texture_expansions() {
        let loc = ResourceLocation::parse("spellhud:gui/spell_hud/default").unwrap();
        assert_eq!(
            loc.texture_png().to_string(),
            "spellhud:textures/gui/spell_hud/default.png"
        );
        assert_eq!(
            loc.texture_json().to_string(),
            "spellhud:textures/gui/spell_hud/default.json"
        );
    }

    #[test]
    fn pack_path_layout() {
        let loc = ResourceLocation::new("spellhud", "textures/gui/spell_hud/_index.json");
        assert_eq!(
            loc.pack_path(),
            "assets/spellhud/textures/gui/spell_hud/_index.json"
        );
    }
}
