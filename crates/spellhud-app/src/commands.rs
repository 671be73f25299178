//! Output of the preview tool's subcommands.

use spellhud_hud::{FrameInfo, OverlayLayer, SpellHud, spell_label};
use spellhud_skin::{HudAnchor, SkinRepository, SpellNames, draw_preview, frame_bounds};
use spellhud_types::backend::DrawList;
use spellhud_types::error::{HudError, Result};

use crate::demo::DemoCaster;

/// Screen size used for previews.
pub const PREVIEW_WIDTH: i32 = 320;
pub const PREVIEW_HEIGHT: i32 = 240;

/// One line per skin, in listing order.
pub fn list_skins(skins: &SkinRepository) -> String {
    if skins.is_empty() {
        return "No skins loaded.\n".to_string();
    }
    let width = skins.keys().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for skin in skins.skins() {
        out.push_str(&format!(
            "  {:width$}  {} -- {}\n",
            skin.key(),
            skin.name(),
            skin.description()
        ));
    }
    out
}

/// Render both overlay layers of one frame and list the draw calls.
pub fn preview(hud: &mut SpellHud, caster: &DemoCaster) -> Result<String> {
    let skin = hud
        .active_skin()
        .ok_or_else(|| HudError::Skin(format!("no skin '{}' to preview", hud.settings().skin)))?;
    let position = hud.settings().position;
    let anchor = HudAnchor::corner(
        PREVIEW_WIDTH,
        PREVIEW_HEIGHT,
        position.flip_x(),
        position.flip_y(),
    );
    let bounds = frame_bounds(skin, anchor);
    let mut out = format!(
        "{} ({}) at {position}, frame {}x{} at ({}, {})\n",
        skin.name(),
        skin.key(),
        bounds.w,
        bounds.h,
        bounds.x,
        bounds.y
    );

    let frame = FrameInfo::new(PREVIEW_WIDTH, PREVIEW_HEIGHT, 0.0);
    let mut list = DrawList::new();
    hud.render(OverlayLayer::Background, frame, caster, &mut list)?;
    hud.render(OverlayLayer::Text, frame, caster, &mut list)?;
    for command in &list.commands {
        out.push_str(&format!("  {command}\n"));
    }
    Ok(out)
}

/// Draw every skin at `anchor` with the demo wand, as a skin picker would.
pub fn gallery(skins: &SkinRepository, caster: &DemoCaster, anchor: HudAnchor) -> Result<String> {
    let wand = caster.wand();
    let previous = spell_label(&wand.previous, caster);
    let current = spell_label(&wand.current, caster);
    let next = spell_label(&wand.next, caster);
    let names = SpellNames {
        previous: &previous,
        current: &current,
        next: &next,
    };

    let mut out = String::new();
    for skin in skins.skins() {
        let mut list = DrawList::new();
        draw_preview(skin, &mut list, anchor, &wand.current.spell.icon, names, 0.5)?;
        out.push_str(&format!("{} ({}): {} draws\n", skin.name(), skin.key(), list.commands.len()));
        for command in &list.commands {
            out.push_str(&format!("  {command}\n"));
        }
    }
    Ok(out)
}
