//! Spell name labels for the text layer.

use spellhud_types::text::{Label, TextColor};

use crate::caster::{CasterView, SpellSlot, is_discovered};

/// Color of spells that cannot be cast right now.
pub const UNAVAILABLE_COLOR: TextColor = TextColor::DarkGray;
/// Color of spells the player has not discovered yet.
pub const UNDISCOVERED_COLOR: TextColor = TextColor::Blue;

/// Build the label for a spell slot.
///
/// Spells on cooldown, or all spells while the player is jammed, are greyed
/// out; otherwise the element color is used. Undiscovered spells show their
/// glyph placeholder name in the glyph font instead, always in
/// [`UNDISCOVERED_COLOR`].
pub fn spell_label(slot: &SpellSlot, caster: &dyn CasterView) -> Label {
    if !is_discovered(caster, &slot.spell) {
        return Label::glyph(caster.glyph_name(&slot.spell), UNDISCOVERED_COLOR);
    }
    let color = if slot.cooldown > 0 || caster.is_jammed() {
        UNAVAILABLE_COLOR
    } else {
        slot.spell.element_color
    };
    Label::new(slot.spell.display_name.clone(), color)
}
