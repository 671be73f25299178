//! A stand-in player for previews.

use spellhud_hud::{CasterView, Hand, Spell, SpellSlot, WandState};
use spellhud_types::resource::{DEFAULT_NAMESPACE, ResourceLocation};
use spellhud_types::text::TextColor;

fn spell(name: &str, icon: &str, cooldown: u32, color: TextColor) -> Spell {
    Spell {
        display_name: name.to_string(),
        icon: ResourceLocation::new(DEFAULT_NAMESPACE, format!("textures/spells/{icon}.png")),
        cooldown,
        continuous: false,
        element_color: color,
    }
}

/// Holds a wand with three spells, the selected one halfway through its
/// cooldown.
#[derive(Debug, Clone)]
pub struct DemoCaster {
    wand: WandState,
}

impl DemoCaster {
    pub fn new() -> Self {
        Self {
            wand: WandState {
                previous: SpellSlot {
                    spell: spell("Magic Missile", "magic_missile", 10, TextColor::LightPurple),
                    cooldown: 0,
                },
                current: SpellSlot {
                    spell: spell("Fireball", "fireball", 60, TextColor::DarkRed),
                    cooldown: 30,
                },
                next: SpellSlot {
                    spell: spell("Ice Shard", "ice_shard", 20, TextColor::Aqua),
                    cooldown: 0,
                },
                cooldown_upgrades: 0,
            },
        }
    }

    pub fn wand(&self) -> &WandState {
        &self.wand
    }
}

impl Default for DemoCaster {
    fn default() -> Self {
        Self::new()
    }
}

impl CasterView for DemoCaster {
    fn held_wand(&self, hand: Hand) -> Option<WandState> {
        (hand == Hand::Main).then(|| self.wand.clone())
    }

    fn is_creative(&self) -> bool {
        false
    }

    fn has_discovered(&self, _spell: &Spell) -> bool {
        true
    }

    fn is_jammed(&self) -> bool {
        false
    }

    fn mana_boost_amplifier(&self) -> Option<u32> {
        None
    }

    fn glyph_name(&self, spell: &Spell) -> String {
        spell.display_name.chars().rev().collect()
    }
}
