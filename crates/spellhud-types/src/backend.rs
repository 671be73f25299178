//! Renderer trait definitions.
//!
//! The HUD never talks to a graphics API directly. The host engine implements
//! [`HudRenderer`] and every draw goes through it: textured rectangles with
//! optional per-axis mirrored sampling, and scaled translucent labels.
//!
//! [`DrawList`] is a renderer that records commands instead of drawing them.
//! Previews and tests use it to inspect a frame.

use std::fmt;

use crate::color::Color;
use crate::error::Result;
use crate::resource::ResourceLocation;
use crate::text::Label;

/// Advance width of one glyph in the fixed-width bitmap metrics.
pub const BITMAP_GLYPH_WIDTH: u32 = 6;

/// Line height of the bitmap font. Odd, which the text layout accounts for.
pub const BITMAP_FONT_HEIGHT: u32 = 9;

/// A screen-space rectangle. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Where a textured rectangle samples from: the top-left texel `(u, v)` of a
/// sheet of the given size. The sampled area has the destination's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRegion {
    pub u: i32,
    pub v: i32,
    pub sheet_width: u32,
    pub sheet_height: u32,
}

impl TextureRegion {
    pub const fn new(u: i32, v: i32, sheet_width: u32, sheet_height: u32) -> Self {
        Self {
            u,
            v,
            sheet_width,
            sheet_height,
        }
    }
}

/// Drawing capability supplied by the host engine.
pub trait HudRenderer {
    /// Draw `dst` textured from `src`, optionally sampling the region mirrored
    /// horizontally and/or vertically. Blending is expected to be enabled.
    fn draw_textured_rect(
        &mut self,
        texture: &ResourceLocation,
        dst: Rect,
        src: TextureRegion,
        flip_x: bool,
        flip_y: bool,
    ) -> Result<()>;

    /// Draw a label with a drop shadow, its top-left corner at `(x, y)` and
    /// uniformly scaled by `scale`. `tint` supplies the translucency.
    fn draw_label(&mut self, label: &Label, x: f32, y: f32, scale: f32, tint: Color)
    -> Result<()>;

    /// Unscaled width of a label in pixels, in whichever font it selects.
    fn label_width(&self, label: &Label) -> u32;

    /// Unscaled line height of the font.
    fn font_height(&self) -> u32;
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    TexturedRect {
        texture: ResourceLocation,
        dst: Rect,
        src: TextureRegion,
        flip_x: bool,
        flip_y: bool,
    },
    Label {
        label: Label,
        x: f32,
        y: f32,
        scale: f32,
        color: Color,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TexturedRect {
                texture,
                dst,
                src,
                flip_x,
                flip_y,
            } => {
                write!(
                    f,
                    "rect  {texture} at ({}, {}) {}x{} uv ({}, {})",
                    dst.x, dst.y, dst.w, dst.h, src.u, src.v
                )?;
                if *flip_x {
                    f.write_str(" flip-x")?;
                }
                if *flip_y {
                    f.write_str(" flip-y")?;
                }
                Ok(())
            },
            Self::Label {
                label,
                x,
                y,
                scale,
                color,
            } => {
                write!(
                    f,
                    "label {:?} at ({x:.2}, {y:.2}) scale {scale:.3} {} alpha {}",
                    label.text, label.color, color.a
                )?;
                if label.glyph {
                    f.write_str(" glyph")?;
                }
                Ok(())
            },
        }
    }
}

/// A renderer that records every call, using fixed-width bitmap metrics.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Destination rectangles of all textured draws, in call order.
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::TexturedRect { dst, .. } => Some(*dst),
                DrawCommand::Label { .. } => None,
            })
            .collect()
    }

    /// Textured draws that sampled the given texture.
    pub fn rects_for(&self, texture: &ResourceLocation) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::TexturedRect { texture: t, .. } if t == texture))
            .collect()
    }

    /// Label draws as `(text, x, y, scale, alpha)` tuples, in call order.
    pub fn labels(&self) -> Vec<(&str, f32, f32, f32, u8)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label {
                    label,
                    x,
                    y,
                    scale,
                    color,
                } => Some((label.text.as_str(), *x, *y, *scale, color.a)),
                DrawCommand::TexturedRect { .. } => None,
            })
            .collect()
    }

    /// Check if any label draw has exactly the given text.
    pub fn has_label(&self, text: &str) -> bool {
        self.labels().iter().any(|l| l.0 == text)
    }
}

impl HudRenderer for DrawList {
    fn draw_textured_rect(
        &mut self,
        texture: &ResourceLocation,
        dst: Rect,
        src: TextureRegion,
        flip_x: bool,
        flip_y: bool,
    ) -> Result<()> {
        self.commands.push(DrawCommand::TexturedRect {
            texture: texture.clone(),
            dst,
            src,
            flip_x,
            flip_y,
        });
        Ok(())
    }

    fn draw_label(
        &mut self,
        label: &Label,
        x: f32,
        y: f32,
        scale: f32,
        tint: Color,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Label {
            label: label.clone(),
            x,
            y,
            scale,
            color: label.resolve_color(tint),
        });
        Ok(())
    }

    fn label_width(&self, label: &Label) -> u32 {
        label.text.chars().count() as u32 * BITMAP_GLYPH_WIDTH
    }

    fn font_height(&self) -> u32 {
        BITMAP_FONT_HEIGHT
    }
}
