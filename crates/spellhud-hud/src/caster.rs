//! What the HUD needs to know about the player and their wand.
//!
//! The host game implements [`CasterView`]; the HUD queries it once per
//! render pass and never holds on to anything it returns.

use spellhud_types::resource::{DEFAULT_NAMESPACE, ResourceLocation};
use spellhud_types::text::TextColor;

/// A spell as the HUD sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub display_name: String,
    pub icon: ResourceLocation,
    /// Base cooldown in ticks, before upgrades and effects.
    pub cooldown: u32,
    /// Continuous spells are cast while held and have no cooldown bar.
    pub continuous: bool,
    /// Color of the spell's element.
    pub element_color: TextColor,
}

/// A spell bound to a wand slot, with its remaining cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellSlot {
    pub spell: Spell,
    /// Remaining cooldown in ticks.
    pub cooldown: u32,
}

/// The wand in hand: selected spell, its neighbours, and upgrades.
#[derive(Debug, Clone, PartialEq)]
pub struct WandState {
    pub previous: SpellSlot,
    pub current: SpellSlot,
    pub next: SpellSlot,
    /// Number of cooldown upgrades applied to the wand.
    pub cooldown_upgrades: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Main,
    Off,
}

/// Player state queried by the HUD.
pub trait CasterView {
    /// The wand held in `hand`, if that hand holds one.
    fn held_wand(&self, hand: Hand) -> Option<WandState>;

    fn is_creative(&self) -> bool;

    /// Whether the player has discovered `spell`. Players without a
    /// discovery record should report `true`.
    fn has_discovered(&self, spell: &Spell) -> bool;

    /// Whether an effect currently prevents casting altogether.
    fn is_jammed(&self) -> bool;

    /// Amplifier of the mana-boosting effect, if it is active.
    fn mana_boost_amplifier(&self) -> Option<u32>;

    /// Placeholder name shown in the glyph font for an undiscovered spell.
    fn glyph_name(&self, spell: &Spell) -> String;
}

/// Wand in the main hand, else in the off hand.
pub fn held_wand(caster: &dyn CasterView) -> Option<WandState> {
    caster
        .held_wand(Hand::Main)
        .or_else(|| caster.held_wand(Hand::Off))
}

/// Creative players have every spell discovered.
pub fn is_discovered(caster: &dyn CasterView, spell: &Spell) -> bool {
    caster.is_creative() || caster.has_discovered(spell)
}

/// Icon shown in place of an undiscovered spell's icon.
pub fn none_icon() -> ResourceLocation {
    ResourceLocation::new(DEFAULT_NAMESPACE, "textures/spells/none.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestCaster, spell, wand};

    #[test]
    fn main_hand_wins() {
        let mut caster = TestCaster::new();
        let mut other = wand();
        other.cooldown_upgrades = 3;
        caster.off_hand = Some(other);
        assert_eq!(held_wand(&caster).unwrap().cooldown_upgrades, 0);
    }

    #[test]
    fn falls_back_to_off_hand() {
        let mut caster = TestCaster::new();
        caster.main_hand = None;
        caster.off_hand = Some(wand());
        assert!(held_wand(&caster).is_some());
    }

    #[test]
    fn empty_hands() {
        let mut caster = TestCaster::new();
        caster.main_hand = None;
        assert!(held_wand(&caster).is_none());
    }

    #[test]
    fn discovery_rules() {
        let mut caster = TestCaster::new();
        let heal = spell("Heal", TextColor::Yellow);
        assert!(is_discovered(&caster, &heal));
        caster.undiscovered.push("Heal".to_string());
        assert!(!is_discovered(&caster, &heal));
        caster.creative = true;
        assert!(is_discovered(&caster, &heal));
    }

    #[test]
    fn none_icon_location() {
        assert_eq!(none_icon().to_string(), "spellhud:textures/spells/none.png");
    }
}
