//! The layered skin repository.
//!
//! Each resource pack may ship an index document listing skins by key. The
//! indexes stack: packs are read from lowest to highest priority and a later
//! entry replaces an earlier one with the same key. Keys keep the position
//! where they were first seen, so built-in skins always list first.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use spellhud_types::error::{HudError, Result};
use spellhud_types::resource::{DEFAULT_NAMESPACE, ResourceLocation};

use crate::definition::{Skin, SkinMetadata};
use crate::pack::ResourceProvider;

/// Path of the skin index inside each pack.
pub const INDEX_PATH: &str = "textures/gui/spell_hud/_index.json";

/// Location of the skin index in every pack.
pub fn index_location() -> ResourceLocation {
    ResourceLocation::new(DEFAULT_NAMESPACE, INDEX_PATH)
}

/// One entry of an index document.
#[derive(Debug, Deserialize)]
struct IndexEntry {
    texture: String,
    metadata: String,
}

/// All loaded skins, in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinRepository {
    order: Vec<String>,
    skins: HashMap<String, Skin>,
}

impl SkinRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from every pack's index document.
    ///
    /// The new set of skins is built completely before it replaces the old
    /// one. Returns the number of skins loaded.
    pub fn reload(&mut self, provider: &dyn ResourceProvider) -> usize {
        let index = index_location();
        let documents = provider.all_resources(&index);
        if documents.is_empty() {
            log::warn!("No spell HUD skin index found at {index}");
        }
        *self = Self::from_index_documents(documents, provider);
        log::info!("Loaded {} spell HUD skins", self.len());
        self.len()
    }

    /// Build a repository from raw index documents, lowest priority first.
    ///
    /// Metadata documents are resolved through `provider`. A document that
    /// cannot be read or parsed contributes nothing; a skin that fails to
    /// load is left out, along with any earlier definition under its key.
    pub fn from_index_documents(
        documents: impl IntoIterator<Item = Result<String>>,
        provider: &dyn ResourceProvider,
    ) -> Self {
        let mut repo = Self::new();
        for (i, document) in documents.into_iter().enumerate() {
            let entries = match document.and_then(|d| parse_index(&d)) {
                Ok(entries) => entries,
                Err(e) => {
                    log::error!("Error reading spell HUD skin index file #{i}: {e}");
                    continue;
                },
            };
            for (key, value) in entries {
                match load_skin(&key, value, provider) {
                    Ok(skin) => repo.insert(skin),
                    Err(e) => {
                        log::warn!("Skipping spell HUD skin '{key}': {e}");
                        repo.remove(&key);
                    },
                }
            }
        }
        repo
    }

    /// Insert a skin, replacing any skin with the same key in place.
    pub fn insert(&mut self, skin: Skin) {
        let key = skin.key().to_string();
        if self.skins.insert(key.clone(), skin).is_none() {
            self.order.push(key);
        }
    }

    fn remove(&mut self, key: &str) {
        if self.skins.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Skin> {
        self.skins.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.skins.contains_key(key)
    }

    /// Skin keys in listing order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Skins in listing order.
    pub fn skins(&self) -> impl Iterator<Item = &Skin> + '_ {
        self.order.iter().filter_map(|k| self.skins.get(k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn parse_index(document: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(document)? {
        Value::Object(entries) => Ok(entries),
        other => Err(HudError::Skin(format!(
            "index must be a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn load_skin(key: &str, value: Value, provider: &dyn ResourceProvider) -> Result<Skin> {
    let entry: IndexEntry = serde_json::from_value(value)?;
    let texture = ResourceLocation::parse(&entry.texture)?.texture_png();
    let metadata_location = ResourceLocation::parse(&entry.metadata)?.texture_json();
    let json = provider.resource(&metadata_location)?;
    let meta = SkinMetadata::from_json(&json)
        .map_err(|e| HudError::Skin(format!("{metadata_location}: {e}")))?;
    Ok(Skin::new(key, texture, metadata_location, meta))
}
