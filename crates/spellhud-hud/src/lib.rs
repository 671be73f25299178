//! The spell HUD: which skin to draw, where, and with what.
//!
//! [`SpellHud`] ties the skin repository to the player's state. It resolves
//! the active skin from the user's [`HudSettings`], turns cooldowns into bar
//! progress, formats the three spell names and runs the switching animation.

pub mod animation;
pub mod caster;
pub mod config;
pub mod controller;
pub mod cooldown;
pub mod naming;

#[cfg(test)]
pub(crate) mod test_utils;

pub use animation::{SWITCH_TICKS, SwitchAnimation, SwitchDirection};
pub use caster::{CasterView, Hand, Spell, SpellSlot, WandState};
pub use config::{DEFAULT_SKIN_KEY, HudPosition, HudSettings};
pub use controller::{FrameInfo, OverlayLayer, SpellHud};
pub use cooldown::{COOLDOWN_REDUCTION_PER_LEVEL, cooldown_multiplier, cooldown_progress};
pub use naming::spell_label;
