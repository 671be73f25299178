//! Issuing a skin's layout to a renderer.
//!
//! Nothing here decides which spells to show or how far the cooldown has
//! run; callers pass that in. That keeps skins drawable without a player,
//! e.g. for a settings-menu preview.

use spellhud_types::backend::{HudRenderer, Rect};
use spellhud_types::color::Color;
use spellhud_types::error::Result;
use spellhud_types::resource::ResourceLocation;
use spellhud_types::text::Label;

use crate::definition::Skin;
use crate::layout::{HudAnchor, NamePlacement, NameSlot, Sprite};

/// The three spell names shown by the text layer.
#[derive(Debug, Clone, Copy)]
pub struct SpellNames<'a> {
    pub previous: &'a Label,
    pub current: &'a Label,
    pub next: &'a Label,
}

impl<'a> SpellNames<'a> {
    fn get(&self, slot: NameSlot) -> &'a Label {
        match slot {
            NameSlot::Previous => self.previous,
            NameSlot::Current => self.current,
            NameSlot::Next => self.next,
        }
    }
}

impl Skin {
    /// Draw the background layer: spell icon, HUD frame and cooldown bar.
    pub fn draw_background(
        &self,
        renderer: &mut dyn HudRenderer,
        anchor: HudAnchor,
        icon: &ResourceLocation,
        cooldown_progress: f32,
        creative_mode: bool,
    ) -> Result<()> {
        let layout = self.background_layout(anchor, cooldown_progress, creative_mode);
        draw_sprite(renderer, icon, &layout.icon)?;
        draw_sprite(renderer, self.texture(), &layout.frame)?;
        if let Some(bar) = &layout.cooldown_bar {
            draw_sprite(renderer, self.texture(), bar)?;
        }
        Ok(())
    }

    /// Draw the text layer: the previous, current and next spell names.
    ///
    /// `animation_progress` follows [`Skin::text_layout`].
    pub fn draw_text(
        &self,
        renderer: &mut dyn HudRenderer,
        anchor: HudAnchor,
        names: SpellNames<'_>,
        animation_progress: f32,
    ) -> Result<()> {
        let font_height = renderer.font_height() as i32;
        for placement in self.text_layout(anchor, font_height, animation_progress) {
            draw_fitted_label(renderer, names.get(placement.name), &placement)?;
        }
        Ok(())
    }
}

fn draw_sprite(
    renderer: &mut dyn HudRenderer,
    texture: &ResourceLocation,
    sprite: &Sprite,
) -> Result<()> {
    renderer.draw_textured_rect(texture, sprite.dst, sprite.src, sprite.flip_x, sprite.flip_y)
}

/// Draw a label at its placement, shrinking it to fit `max_width`.
///
/// Names narrower than the space keep their scale and are right-aligned if
/// the placement asks for it; wider names are scaled down and fill the whole
/// width. Either way the label is moved down so its vertical center stays on
/// the center of an unscaled line.
pub fn draw_fitted_label(
    renderer: &mut dyn HudRenderer,
    label: &Label,
    placement: &NamePlacement,
) -> Result<()> {
    let font_height = renderer.font_height() as f32;
    let text_width = renderer.label_width(label) as f32 * placement.scale;

    let mut x = placement.x;
    let mut scale = placement.scale;
    if text_width > placement.max_width {
        scale *= placement.max_width / text_width;
    } else if placement.align_right {
        x += placement.max_width - text_width;
    }

    if scale <= 0.0 {
        log::debug!("Not drawing '{}': no room left ({scale})", label.text);
        return Ok(());
    }

    let y = placement.y + (font_height - font_height * scale) / 2.0;
    renderer.draw_label(label, x, y, scale, Color::WHITE.with_opacity(placement.opacity))
}

/// Draw a whole skin as it looks for a spell with the given state.
///
/// Convenience for previews: both layers in one call, the frame sampled from
/// survival mode.
pub fn draw_preview(
    skin: &Skin,
    renderer: &mut dyn HudRenderer,
    anchor: HudAnchor,
    icon: &ResourceLocation,
    names: SpellNames<'_>,
    cooldown_progress: f32,
) -> Result<()> {
    skin.draw_background(renderer, anchor, icon, cooldown_progress, false)?;
    skin.draw_text(renderer, anchor, names, 0.0)
}

/// Destination of the frame when drawn at `anchor`; used to size previews.
pub fn frame_bounds(skin: &Skin, anchor: HudAnchor) -> Rect {
    skin.background_layout(anchor, 0.0, false).frame.dst
}
