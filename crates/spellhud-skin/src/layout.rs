//! Corner-aware HUD geometry.
//!
//! Everything here is pure: given where the HUD is anchored and the current
//! spell/animation state, compute where each element goes. [`crate::draw`]
//! turns the result into renderer calls.
//!
//! Coordinates follow the screen: `y` grows downward, so the HUD's logical
//! origin is the bottom-left corner of its texture.

use spellhud_types::backend::{Rect, TextureRegion};
use spellhud_types::color::lerp;

use crate::definition::Skin;

/// Width and height of the spell icon.
pub const SPELL_ICON_SIZE: i32 = 32;
/// Size of the skin texture sheet.
pub const SHEET_SIZE: u32 = 256;
/// Horizontal texel where the creative-mode variant starts in the sheet.
pub const CREATIVE_U: i32 = 128;
/// Scale of the previous/next spell names.
pub const SECONDARY_NAME_SCALE: f32 = 0.5;
/// Opacity of the previous/next spell names.
pub const SECONDARY_NAME_OPACITY: f32 = 0.3;

/// Where the HUD is anchored on screen.
///
/// `(x, y)` is the screen corner in use; `flip_x` is set for the right edge
/// and `flip_y` for the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudAnchor {
    pub x: i32,
    pub y: i32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl HudAnchor {
    pub const fn new(x: i32, y: i32, flip_x: bool, flip_y: bool) -> Self {
        Self {
            x,
            y,
            flip_x,
            flip_y,
        }
    }

    /// The corner of a `screen_width x screen_height` screen selected by the
    /// flip flags.
    pub const fn corner(screen_width: i32, screen_height: i32, flip_x: bool, flip_y: bool) -> Self {
        Self::new(
            if flip_x { screen_width } else { 0 },
            if flip_y { 0 } else { screen_height },
            flip_x,
            flip_y,
        )
    }
}

/// A textured rectangle: destination, sample window and sampling flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub dst: Rect,
    pub src: TextureRegion,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Placement of the background layer, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundLayout {
    /// Spell icon, drawn first so it sits behind the HUD frame.
    pub icon: Sprite,
    pub frame: Sprite,
    pub cooldown_bar: Option<Sprite>,
}

/// Which of the three spell names a text placement shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSlot {
    Previous,
    Current,
    Next,
}

/// Placement of one spell name before it is fitted to its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamePlacement {
    pub name: NameSlot,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Width available to the name; wider names are scaled down to fit.
    pub max_width: f32,
    pub align_right: bool,
}

impl Skin {
    fn mirrors_x(&self, anchor: HudAnchor) -> bool {
        anchor.flip_x && self.meta.mirror.x
    }

    fn mirrors_y(&self, anchor: HudAnchor) -> bool {
        anchor.flip_y && self.meta.mirror.y
    }

    /// Anchor point after moving a non-mirroring HUD so its texture's
    /// bottom-left corner lands where it would on the unflipped side.
    pub fn origin(&self, anchor: HudAnchor) -> (i32, i32) {
        let mut x = anchor.x;
        let mut y = anchor.y;
        if anchor.flip_x && !self.meta.mirror.x {
            x -= self.meta.width;
        }
        if anchor.flip_y && !self.meta.mirror.y {
            y += self.meta.height;
        }
        (x, y)
    }

    /// Lay out the icon, frame and cooldown bar.
    ///
    /// `cooldown_progress` is the filled fraction of the bar, expected in
    /// `[0, 1]`.
    pub fn background_layout(
        &self,
        anchor: HudAnchor,
        cooldown_progress: f32,
        creative_mode: bool,
    ) -> BackgroundLayout {
        let (x, y) = self.origin(anchor);
        let mx = self.mirrors_x(anchor);
        let my = self.mirrors_y(anchor);
        let meta = &self.meta;

        let inset = meta.spell_icon_inset;
        let icon = Sprite {
            dst: Rect::new(
                if mx { x - inset.x - SPELL_ICON_SIZE } else { x + inset.x },
                if my { y + inset.y } else { y - inset.y - SPELL_ICON_SIZE },
                SPELL_ICON_SIZE,
                SPELL_ICON_SIZE,
            ),
            src: TextureRegion::new(0, 0, SPELL_ICON_SIZE as u32, SPELL_ICON_SIZE as u32),
            flip_x: false,
            flip_y: false,
        };

        let frame = Sprite {
            dst: Rect::new(
                if mx { x - meta.width } else { x },
                if my { y } else { y - meta.height },
                meta.width,
                meta.height,
            ),
            src: TextureRegion::new(
                if creative_mode { CREATIVE_U } else { 0 },
                0,
                SHEET_SIZE,
                SHEET_SIZE,
            ),
            flip_x: mx,
            flip_y: my,
        };

        let bar = &meta.cooldown_bar;
        let show_bar = !creative_mode
            && cooldown_progress > 0.0
            && (bar.show_when_full || cooldown_progress < 1.0);

        let cooldown_bar = show_bar.then(|| {
            let filled = (cooldown_progress * bar.length as f32) as i32;
            Sprite {
                dst: Rect::new(
                    if mx {
                        x - bar.x - if bar.mirror.x { filled } else { bar.length }
                    } else {
                        x + bar.x
                    },
                    if my { y + bar.y } else { y - bar.y - bar.height },
                    filled,
                    bar.height,
                ),
                // The sample window always starts at the bar's left end in the
                // sheet. Sampling flips follow the screen edge, whether or not
                // the rest of the skin mirrors.
                src: TextureRegion::new(bar.x, meta.height, SHEET_SIZE, SHEET_SIZE),
                flip_x: anchor.flip_x && bar.mirror.x,
                flip_y: anchor.flip_y && bar.mirror.y,
            }
        });

        BackgroundLayout {
            icon,
            frame,
            cooldown_bar,
        }
    }

    /// Lay out the spell names.
    ///
    /// `animation_progress` is 0 when idle, in `(0, 1]` while switching to the
    /// next spell and in `[-1, 0)` while switching to the previous one.
    /// Returns the placements in draw order.
    pub fn text_layout(
        &self,
        anchor: HudAnchor,
        font_height: i32,
        animation_progress: f32,
    ) -> Vec<NamePlacement> {
        let (x, y) = self.origin(anchor);
        let mx = self.mirrors_x(anchor);
        let my = self.mirrors_y(anchor);
        let meta = &self.meta;

        let base_x = if mx { x - meta.width } else { x + meta.text_inset.x };
        // The font is an odd number of pixels high, hence the extra pixel
        // when not flipped.
        let base_y = if my {
            y + meta.text_inset.y - font_height / 2 + 2
        } else {
            y - meta.text_inset.y - font_height / 2 - 1
        };

        let lines = NameLines {
            base_x: base_x as f32,
            base_y: base_y as f32,
            max_width: (meta.width - meta.text_inset.x) as f32,
            cascade_x: if mx { 0.0 } else { meta.spell_cascade_offset.x as f32 },
            cascade_y: meta.spell_cascade_offset.y as f32,
            // Previous names lean the other way at the top of the screen.
            lean: if anchor.flip_y { -1.0 } else { 1.0 },
            width_cascade: meta.spell_cascade_offset.x as f32,
            align_right: mx,
        };

        if animation_progress == 0.0 {
            return vec![
                lines.above(NameSlot::Previous, 1.0),
                lines.above(NameSlot::Current, 0.0),
                lines.below(NameSlot::Next, 1.0),
            ];
        }

        if animation_progress < 0.0 {
            // Switching back: the current name drops into the middle while
            // the old one shrinks into the next slot.
            let p = 1.0 - animation_progress.abs();
            vec![
                lines.above(NameSlot::Current, p),
                lines.below(NameSlot::Next, 1.0 - p),
            ]
        } else {
            let p = animation_progress;
            vec![
                lines.above(NameSlot::Previous, p),
                lines.below(NameSlot::Current, 1.0 - p),
            ]
        }
    }
}

/// Shared parameters of the three name lines.
struct NameLines {
    base_x: f32,
    base_y: f32,
    max_width: f32,
    cascade_x: f32,
    cascade_y: f32,
    lean: f32,
    width_cascade: f32,
    align_right: bool,
}

impl NameLines {
    /// A name `d` of the way from the middle line to the line above it.
    fn above(&self, name: NameSlot, d: f32) -> NamePlacement {
        NamePlacement {
            name,
            x: self.base_x - self.lean * self.cascade_x * d,
            // The extra pixel evens out the gap above the middle line.
            y: self.base_y - (self.cascade_y + 1.0) * d,
            scale: lerp(1.0, SECONDARY_NAME_SCALE, d),
            opacity: lerp(1.0, SECONDARY_NAME_OPACITY, d),
            max_width: self.max_width + self.lean * self.width_cascade * d,
            align_right: self.align_right,
        }
    }

    /// A name `d` of the way from the middle line to the line below it.
    fn below(&self, name: NameSlot, d: f32) -> NamePlacement {
        NamePlacement {
            name,
            x: self.base_x + self.lean * self.cascade_x * d,
            y: self.base_y + self.cascade_y * d,
            scale: lerp(1.0, SECONDARY_NAME_SCALE, d),
            opacity: lerp(1.0, SECONDARY_NAME_OPACITY, d),
            max_width: self.max_width - self.lean * self.width_cascade * d,
            align_right: self.align_right,
        }
    }
}
