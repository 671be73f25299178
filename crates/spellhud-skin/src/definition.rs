//! Skin definitions parsed from JSON metadata documents.
//!
//! A metadata document describes the whole geometry of one HUD skin. Every
//! field is required; a document missing any of them does not load.

use serde::{Deserialize, Serialize};

use spellhud_types::error::{HudError, Result};
use spellhud_types::resource::ResourceLocation;

/// Widest HUD that still fits the 256x256 sheet next to its creative variant.
pub const MAX_RECOMMENDED_WIDTH: i32 = 128;

/// A pair of per-axis flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisFlags {
    pub x: bool,
    pub y: bool,
}

/// A pixel offset from the HUD origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// Geometry and behavior of the cooldown bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownBar {
    /// Distance from the left edge of the HUD (right edge when mirrored).
    /// Also the horizontal texel where the bar art starts in the sheet.
    pub x: i32,
    /// Distance from the bottom edge of the HUD (top edge when mirrored).
    pub y: i32,
    pub length: i32,
    pub height: i32,
    /// Whether the bar fills from the other end when the HUD is mirrored.
    pub mirror: AxisFlags,
    /// Whether the bar is still drawn once the cooldown is over.
    pub show_when_full: bool,
}

/// Contents of a skin metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinMetadata {
    /// Display name in the settings menu.
    pub name: String,
    /// Tooltip text in the settings menu.
    pub description: String,
    pub width: i32,
    pub height: i32,
    /// Whether the HUD flips when anchored to the right/top edge, rather than
    /// only moving there.
    pub mirror: AxisFlags,
    pub spell_icon_inset: Offset,
    pub text_inset: Offset,
    /// Distance between the start of adjacent spell names.
    pub spell_cascade_offset: Offset,
    pub cooldown_bar: CooldownBar,
}

impl SkinMetadata {
    /// Parse a metadata document.
    pub fn from_json(json: &str) -> Result<Self> {
        let meta: Self = serde_json::from_str(json)?;
        if meta.width > MAX_RECOMMENDED_WIDTH {
            log::warn!(
                "The width of spell HUD skin '{}' exceeds {MAX_RECOMMENDED_WIDTH}, it may render strangely",
                meta.name
            );
        }
        if meta.width < 0 || meta.height < 0 {
            return Err(HudError::Skin(format!(
                "'{}': negative size {}x{}",
                meta.name, meta.width, meta.height
            )));
        }
        Ok(meta)
    }

    /// Serialize back to a metadata document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A loaded HUD skin: its repository key, texture and parsed metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skin {
    key: String,
    texture: ResourceLocation,
    metadata_location: ResourceLocation,
    pub(crate) meta: SkinMetadata,
}

impl Skin {
    pub fn new(
        key: impl Into<String>,
        texture: ResourceLocation,
        metadata_location: ResourceLocation,
        meta: SkinMetadata,
    ) -> Self {
        Self {
            key: key.into(),
            texture,
            metadata_location,
            meta,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name shown in the settings menu.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Description shown in the settings menu tooltip.
    pub fn description(&self) -> &str {
        &self.meta.description
    }

    /// Overall width of the HUD graphic.
    pub fn width(&self) -> i32 {
        self.meta.width
    }

    /// Overall height of the HUD graphic.
    pub fn height(&self) -> i32 {
        self.meta.height
    }

    pub fn texture(&self) -> &ResourceLocation {
        &self.texture
    }

    pub fn metadata_location(&self) -> &ResourceLocation {
        &self.metadata_location
    }

    pub fn metadata(&self) -> &SkinMetadata {
        &self.meta
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const DEFAULT_META: &str = r#"{
        "name": "Default",
        "description": "The standard spell HUD",
        "width": 128,
        "height": 32,
        "mirror": { "x": true, "y": true },
        "spell_icon_inset": { "x": 6, "y": 0 },
        "text_inset": { "x": 44, "y": 13 },
        "spell_cascade_offset": { "x": 4, "y": 9 },
        "cooldown_bar": {
            "x": 42,
            "y": 2,
            "length": 80,
            "height": 3,
            "mirror": { "x": true, "y": false },
            "show_when_full": false
        }
    }"#;

    #[test]
    fn parse_all_fields() {
        let meta = SkinMetadata::from_json(DEFAULT_META).unwrap();
        assert_eq!(meta.name, "Default");
        assert_eq!(meta.width, 128);
        assert_eq!(meta.height, 32);
        assert!(meta.mirror.x && meta.mirror.y);
        assert_eq!(meta.spell_icon_inset, Offset { x: 6, y: 0 });
        assert_eq!(meta.text_inset, Offset { x: 44, y: 13 });
        assert_eq!(meta.spell_cascade_offset, Offset { x: 4, y: 9 });
        assert_eq!(meta.cooldown_bar.length, 80);
        assert!(meta.cooldown_bar.mirror.x);
        assert!(!meta.cooldown_bar.mirror.y);
        assert!(!meta.cooldown_bar.show_when_full);
    }

    #[test]
    fn missing_top_level_field_fails() {
        let json = DEFAULT_META.replace(r#""description": "The standard spell HUD","#, "");
        let err = SkinMetadata::from_json(&json).unwrap_err();
        assert!(format!("{err}").contains("description"));
    }

    #[test]
    fn missing_nested_field_fails() {
        let json = DEFAULT_META.replace(r#""show_when_full": false"#, r#""unused": 1"#);
        let err = SkinMetadata::from_json(&json).unwrap_err();
        assert!(format!("{err}").contains("show_when_full"));
    }

    #[test]
    fn wrong_type_fails() {
        let json = DEFAULT_META.replace(r#""width": 128"#, r#""width": "wide""#);
        assert!(SkinMetadata::from_json(&json).is_err());
    }

    #[test]
    fn negative_size_fails() {
        let json = DEFAULT_META.replace(r#""height": 32"#, r#""height": -1"#);
        let err = SkinMetadata::from_json(&json).unwrap_err();
        assert!(format!("{err}").contains("negative size"));
    }

    #[test]
    fn wide_skin_still_loads() {
        let json = DEFAULT_META.replace(r#""width": 128"#, r#""width": 200"#);
        let meta = SkinMetadata::from_json(&json).unwrap();
        assert_eq!(meta.width, 200);
    }

    #[test]
    fn to_json_round_trips() {
        let meta = SkinMetadata::from_json(DEFAULT_META).unwrap();
        let again = SkinMetadata::from_json(&meta.to_json().unwrap()).unwrap();
        assert_eq!(meta, again);
    }

    #[test]
    fn skin_accessors() {
        let meta = SkinMetadata::from_json(DEFAULT_META).unwrap();
        let skin = Skin::new(
            "default",
            ResourceLocation::new("spellhud", "textures/gui/spell_hud/default.png"),
            ResourceLocation::new("spellhud", "textures/gui/spell_hud/default.json"),
            meta,
        );
        assert_eq!(skin.key(), "default");
        assert_eq!(skin.name(), "Default");
        assert_eq!(skin.description(), "The standard spell HUD");
        assert_eq!(skin.width(), 128);
        assert_eq!(skin.height(), 32);
        assert_eq!(skin.texture().path(), "textures/gui/spell_hud/default.png");
    }

    mod prop {
        use super::super::*;
        use proptest::prelude::*;

        fn offset() -> impl Strategy<Value = Offset> {
            (-256i32..256, -256i32..256).prop_map(|(x, y)| Offset { x, y })
        }

        fn flags() -> impl Strategy<Value = AxisFlags> {
            (any::<bool>(), any::<bool>()).prop_map(|(x, y)| AxisFlags { x, y })
        }

        fn metadata() -> impl Strategy<Value = SkinMetadata> {
            (
                "[A-Za-z ]{1,16}",
                ".{0,32}",
                0i32..=128,
                0i32..=128,
                flags(),
                offset(),
                offset(),
                offset(),
                (-64i32..64, -64i32..64, 0i32..128, 0i32..16, flags(), any::<bool>()),
            )
                .prop_map(
                    |(name, description, width, height, mirror, icon, text, cascade, bar)| {
                        SkinMetadata {
                            name,
                            description,
                            width,
                            height,
                            mirror,
                            spell_icon_inset: icon,
                            text_inset: text,
                            spell_cascade_offset: cascade,
                            cooldown_bar: CooldownBar {
                                x: bar.0,
                                y: bar.1,
                                length: bar.2,
                                height: bar.3,
                                mirror: bar.4,
                                show_when_full: bar.5,
                            },
                        }
                    },
                )
        }

        proptest! {
            #[test]
            fn metadata_json_round_trip(meta in metadata()) {
                let json = meta.to_json().unwrap();
                let parsed = SkinMetadata::from_json(&json).unwrap();
                prop_assert_eq!(&parsed, &meta);
                // Field-for-field: re-serializing yields the same document.
                prop_assert_eq!(
                    serde_json::to_value(&parsed).unwrap(),
                    serde_json::from_str::<serde_json::Value>(&json).unwrap()
                );
            }
        }
    }
}
