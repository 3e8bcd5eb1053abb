use crate::{
    assets::font::{PreparedFont, TextBrushRgba8, TextLayoutEngine},
    deck::model::DeckSpec,
    foundation::core::{Affine, Canvas, Rgb8, TextOrigin, Vec2},
    foundation::error::{CardError, CardResult},
};

/// A rendered card as tightly packed RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRaster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB8 bytes, row-major.
    pub rgb8: Vec<u8>,
}

impl CardRaster {
    /// Color at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        match self.rgb8.get(i..i + 3)? {
            &[r, g, b] => Some([r, g, b]),
            _ => None,
        }
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.rgb8.chunks_exact(3).map(|px| [px[0], px[1], px[2]])
    }
}

/// Draws labels onto solid cards with `vello_cpu`.
///
/// The renderer keeps its Parley contexts between cards; every call to
/// [`CardRenderer::render_label`] still rasterizes into a fresh surface.
pub struct CardRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    background: Rgb8,
    foreground: Rgb8,
    font_size_px: f32,
    origin: TextOrigin,
    font: PreparedFont,
    text: TextLayoutEngine,
}

impl CardRenderer {
    /// Build a renderer for `spec` drawing with `font`.
    pub fn new(spec: &DeckSpec, font: &PreparedFont) -> CardResult<Self> {
        let (width, height) = spec.canvas.surface_size()?;

        Ok(Self {
            canvas: spec.canvas,
            width,
            height,
            background: spec.background,
            foreground: spec.foreground,
            font_size_px: spec.font_size_px,
            origin: spec.text_origin,
            font: font.clone(),
            text: TextLayoutEngine::for_font(font),
        })
    }

    /// Render one card showing `label`.
    pub fn render_label(&mut self, label: &str) -> CardResult<CardRaster> {
        let layout = self.text.layout_label(
            label,
            self.font.family_name(),
            self.font_size_px,
            TextBrushRgba8::opaque(self.foreground),
        )?;

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        let [r, g, b] = self.background;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, 255));
        ctx.fill_rect(&rect_to_cpu(self.canvas.rect()));

        ctx.set_transform(affine_to_cpu(label_transform(self.origin, &layout)));
        let mut glyph_count = 0usize;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs: Vec<vello_cpu::Glyph> = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                glyph_count += glyphs.len();
                let font = self.font.raster_font(run.run().font().index);
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs.into_iter());
            }
        }
        if glyph_count == 0 && !label.is_empty() {
            return Err(CardError::render(format!(
                "font '{}' produced no glyphs for label '{label}'",
                self.font.family_name()
            )));
        }

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(CardRaster {
            width: self.canvas.width,
            height: self.canvas.height,
            rgb8: premul_rgba8_to_rgb8(pixmap.data_as_u8_slice()),
        })
    }
}

/// Translation placing the layout's first ascender line at `origin`.
///
/// Parley puts half the font's line gap above the first line, so the first baseline sits at
/// `baseline = leading_above + ascent` inside the layout; that leading is removed here.
fn label_transform(origin: TextOrigin, layout: &parley::Layout<TextBrushRgba8>) -> Affine {
    let leading_above = layout
        .lines()
        .next()
        .map(|line| {
            let m = line.metrics();
            m.baseline - m.ascent
        })
        .unwrap_or(0.0);
    Affine::translate(Vec2::new(
        f64::from(origin.x),
        f64::from(origin.y - leading_above),
    ))
}

/// Drop alpha from premultiplied RGBA8, un-premultiplying partially covered pixels.
fn premul_rgba8_to_rgb8(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len() / 4 * 3);
    for px in premul.chunks_exact(4) {
        let a = px[3];
        match a {
            255 => out.extend_from_slice(&px[..3]),
            0 => out.extend_from_slice(&[0, 0, 0]),
            _ => {
                let a = u16::from(a);
                for &c in &px[..3] {
                    let v = (u16::from(c) * 255 + a / 2) / a;
                    out.push(v.min(255) as u8);
                }
            }
        }
    }
    out
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: crate::foundation::core::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
