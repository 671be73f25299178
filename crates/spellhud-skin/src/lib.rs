//! Spell HUD skins -- data-driven geometry for the spell overlay.
//!
//! A skin is a texture plus a JSON metadata document describing where the
//! spell icon, the spell names and the cooldown bar go, and whether the HUD
//! mirrors or merely moves when anchored to the right or top of the screen.
//! Skins are listed in per-pack index documents that stack across resource
//! packs, so a pack can add skins or replace existing ones by key.

pub mod definition;
pub mod draw;
pub mod layout;
pub mod pack;
pub mod repository;

pub use definition::{AxisFlags, CooldownBar, Offset, Skin, SkinMetadata};
pub use draw::{SpellNames, draw_fitted_label, draw_preview, frame_bounds};
pub use layout::{BackgroundLayout, HudAnchor, NamePlacement, NameSlot, Sprite};
pub use pack::{DirectoryPacks, MemoryPack, MemoryPacks, ResourceProvider};
pub use repository::{INDEX_PATH, SkinRepository, index_location};
