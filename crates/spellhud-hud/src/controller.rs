//! The spell HUD controller.
//!
//! [`SpellHud`] owns the loaded skins, the user's settings and the switching
//! animation. The host calls [`SpellHud::on_player_tick`] every game tick and
//! [`SpellHud::render`] once per overlay layer per frame.

use spellhud_skin::{HudAnchor, ResourceProvider, Skin, SkinRepository, SpellNames};
use spellhud_types::backend::HudRenderer;
use spellhud_types::error::Result;

use crate::animation::{SwitchAnimation, SwitchDirection};
use crate::caster::{CasterView, WandState, held_wand, is_discovered, none_icon};
use crate::config::{DEFAULT_SKIN_KEY, HudSettings};
use crate::cooldown::{cooldown_multiplier, cooldown_progress};
use crate::naming::spell_label;

/// The two overlay passes, in the order the host draws them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Icon, frame and cooldown bar.
    Background,
    /// Spell names.
    Text,
}

/// Per-frame values supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Fraction of the current tick elapsed, in `[0, 1)`.
    pub partial_ticks: f32,
}

impl FrameInfo {
    pub fn new(screen_width: i32, screen_height: i32, partial_ticks: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            partial_ticks,
        }
    }
}

#[derive(Debug, Default)]
pub struct SpellHud {
    skins: SkinRepository,
    settings: HudSettings,
    switch: SwitchAnimation,
    /// Skin key last reported missing, so the warning is not repeated.
    missing_skin: Option<String>,
}

impl SpellHud {
    pub fn new(settings: HudSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Reload every skin from `provider`. Returns the number loaded.
    pub fn reload(&mut self, provider: &dyn ResourceProvider) -> usize {
        self.missing_skin = None;
        self.skins.reload(provider)
    }

    pub fn skins(&self) -> &SkinRepository {
        &self.skins
    }

    pub fn settings(&self) -> &HudSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: HudSettings) {
        self.settings = settings;
        self.missing_skin = None;
    }

    /// The skin `render` would use, without logging.
    pub fn active_skin(&self) -> Option<&Skin> {
        self.skins
            .get(&self.settings.skin)
            .or_else(|| self.skins.get(DEFAULT_SKIN_KEY))
    }

    pub fn switch_animation(&self) -> &SwitchAnimation {
        &self.switch
    }

    /// Start the switching animation after the player changed spells.
    pub fn play_switch_animation(&mut self, direction: SwitchDirection) {
        self.switch.play(direction);
    }

    /// Advance the animation for game tick `game_tick`.
    pub fn on_player_tick(&mut self, game_tick: u64) {
        self.switch.tick(game_tick);
    }

    /// Draw one overlay layer.
    ///
    /// Draws nothing when the player holds no wand or no usable skin is
    /// loaded; neither is an error.
    pub fn render(
        &mut self,
        layer: OverlayLayer,
        frame: FrameInfo,
        caster: &dyn CasterView,
        renderer: &mut dyn HudRenderer,
    ) -> Result<()> {
        let Some(wand) = held_wand(caster) else {
            return Ok(());
        };

        let position = self.settings.position;
        let anchor = HudAnchor::corner(
            frame.screen_width,
            frame.screen_height,
            position.flip_x(),
            position.flip_y(),
        );

        let Some(skin) = resolve_skin(&self.skins, &self.settings.skin, &mut self.missing_skin)
        else {
            return Ok(());
        };

        match layer {
            OverlayLayer::Background => {
                draw_background(skin, renderer, anchor, &wand, caster, frame.partial_ticks)
            }
            OverlayLayer::Text => {
                let previous = spell_label(&wand.previous, caster);
                let current = spell_label(&wand.current, caster);
                let next = spell_label(&wand.next, caster);
                let names = SpellNames {
                    previous: &previous,
                    current: &current,
                    next: &next,
                };
                skin.draw_text(
                    renderer,
                    anchor,
                    names,
                    self.switch.progress(frame.partial_ticks),
                )
            }
        }
    }
}

/// Look up `key`, falling back to the default skin.
///
/// Logs once per missing key rather than every frame.
fn resolve_skin<'a>(
    skins: &'a SkinRepository,
    key: &str,
    missing: &mut Option<String>,
) -> Option<&'a Skin> {
    if let Some(skin) = skins.get(key) {
        *missing = None;
        return Some(skin);
    }

    let first_report = missing.as_deref() != Some(key);
    if first_report {
        *missing = Some(key.to_string());
    }
    let fallback = skins.get(DEFAULT_SKIN_KEY);
    if first_report {
        match fallback {
            Some(_) => log::warn!("Spell HUD skin '{key}' not found -- using '{DEFAULT_SKIN_KEY}'"),
            None => log::error!(
                "Spell HUD skin '{key}' not found and no '{DEFAULT_SKIN_KEY}' skin is loaded"
            ),
        }
    }
    fallback
}

fn draw_background(
    skin: &Skin,
    renderer: &mut dyn HudRenderer,
    anchor: HudAnchor,
    wand: &WandState,
    caster: &dyn CasterView,
    partial_ticks: f32,
) -> Result<()> {
    let slot = &wand.current;
    let creative = caster.is_creative();

    let progress = if creative || slot.spell.continuous {
        1.0
    } else {
        let multiplier = cooldown_multiplier(wand.cooldown_upgrades, caster.mana_boost_amplifier());
        cooldown_progress(slot.spell.cooldown, slot.cooldown, multiplier, partial_ticks)
    };

    let icon = if is_discovered(caster, &slot.spell) {
        slot.spell.icon.clone()
    } else {
        none_icon()
    };

    skin.draw_background(renderer, anchor, &icon, progress, creative)
}
