//! Shared fixtures for the HUD tests.

use spellhud_skin::{MemoryPack, MemoryPacks, index_location};
use spellhud_types::resource::ResourceLocation;
use spellhud_types::text::TextColor;

use crate::caster::{CasterView, Hand, Spell, SpellSlot, WandState};

pub const DEFAULT_META: &str = r#"{
    "name": "Default",
    "description": "The standard spell HUD",
    "width": 128,
    "height": 32,
    "mirror": { "x": true, "y": true },
    "spell_icon_inset": { "x": 6, "y": 0 },
    "text_inset": { "x": 44, "y": 13 },
    "spell_cascade_offset": { "x": 4, "y": 9 },
    "cooldown_bar": {
        "x": 42, "y": 2, "length": 80, "height": 3,
        "mirror": { "x": true, "y": false },
        "show_when_full": false
    }
}"#;

pub const COMPACT_META: &str = r#"{
    "name": "Compact",
    "description": "A smaller HUD that does not mirror",
    "width": 64,
    "height": 32,
    "mirror": { "x": false, "y": false },
    "spell_icon_inset": { "x": 0, "y": 0 },
    "text_inset": { "x": 4, "y": 4 },
    "spell_cascade_offset": { "x": 2, "y": 6 },
    "cooldown_bar": {
        "x": 4, "y": 0, "length": 40, "height": 2,
        "mirror": { "x": false, "y": false },
        "show_when_full": true
    }
}"#;

pub fn loc(reference: &str) -> ResourceLocation {
    ResourceLocation::parse(reference).unwrap()
}

/// A pack with the `default` and `compact` skins.
pub fn base_packs() -> MemoryPacks {
    let index = r#"{
        "default": { "texture": "spellhud:gui/spell_hud/default", "metadata": "spellhud:gui/spell_hud/default" },
        "compact": { "texture": "spellhud:gui/spell_hud/compact", "metadata": "spellhud:gui/spell_hud/compact" }
    }"#;
    let mut packs = MemoryPacks::new();
    packs.push(
        MemoryPack::new("base")
            .with_file(index_location(), index)
            .with_file(loc("spellhud:textures/gui/spell_hud/default.json"), DEFAULT_META)
            .with_file(loc("spellhud:textures/gui/spell_hud/compact.json"), COMPACT_META),
    );
    packs
}

pub fn spell(name: &str, color: TextColor) -> Spell {
    Spell {
        display_name: name.to_string(),
        icon: loc(&format!("spellhud:textures/spells/{}.png", name.to_lowercase())),
        cooldown: 100,
        continuous: false,
        element_color: color,
    }
}

pub fn spell_slot(name: &str, color: TextColor, cooldown: u32) -> SpellSlot {
    SpellSlot {
        spell: spell(name, color),
        cooldown,
    }
}

pub fn wand() -> WandState {
    WandState {
        previous: spell_slot("Frost", TextColor::Aqua, 0),
        current: spell_slot("Fireball", TextColor::DarkRed, 0),
        next: spell_slot("Heal", TextColor::Yellow, 0),
        cooldown_upgrades: 0,
    }
}

/// A scriptable player.
#[derive(Debug, Clone)]
pub struct TestCaster {
    pub main_hand: Option<WandState>,
    pub off_hand: Option<WandState>,
    pub creative: bool,
    pub jammed: bool,
    pub mana_boost: Option<u32>,
    /// Display names of spells the player has not discovered.
    pub undiscovered: Vec<String>,
}

impl TestCaster {
    pub fn new() -> Self {
        Self {
            main_hand: Some(wand()),
            off_hand: None,
            creative: false,
            jammed: false,
            mana_boost: None,
            undiscovered: Vec::new(),
        }
    }

    pub fn wand_mut(&mut self) -> &mut WandState {
        self.main_hand.get_or_insert_with(wand)
    }
}

impl CasterView for TestCaster {
    fn held_wand(&self, hand: Hand) -> Option<WandState> {
        match hand {
            Hand::Main => self.main_hand.clone(),
            Hand::Off => self.off_hand.clone(),
        }
    }

    fn is_creative(&self) -> bool {
        self.creative
    }

    fn has_discovered(&self, spell: &Spell) -> bool {
        !self.undiscovered.contains(&spell.display_name)
    }

    fn is_jammed(&self) -> bool {
        self.jammed
    }

    fn mana_boost_amplifier(&self) -> Option<u32> {
        self.mana_boost
    }

    fn glyph_name(&self, spell: &Spell) -> String {
        format!("glyph:{}", spell.display_name)
    }
}
