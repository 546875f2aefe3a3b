//! Draw-surface contract and a frame-buffer implementation of it.
//!
//! States only describe what goes where (atlas cells at grid coordinates,
//! strings at pixel coordinates). `PixelCanvas` turns that into RGBA pixels.

use crate::game::Direction;

pub type Rgba = (u8, u8, u8, u8);

pub const BACKGROUND: Rgba = (0x0a, 0x26, 0x1e, 0xff);
pub const BORDER: Rgba = (0xcd, 0xdf, 0x6c, 0xff);
pub const STATUS_BAR: Rgba = (0, 0, 0, 0xff);

/// Height of the status bar and advance of one text glyph, in pixels.
pub const STATUS_BAR_HEIGHT: u32 = 8;
pub const GLYPH_ADVANCE: u32 = 7;

/// Atlas cells on row 0 of the tile sheet.
pub const FOOD_TILE: u32 = 0;
pub const BODY_TILE: u32 = 1;
pub const HEAD_TILE: u32 = 5;

/// Longest time the status clock shows, 99:59.
const MAX_CLOCK_SECONDS: u64 = 99 * 60 + 59;

pub trait DrawSurface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba);
    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba);
    /// Blit atlas cell `(atlas_col, atlas_row)` at grid cell `(grid_x, grid_y)`.
    fn draw_tile(&mut self, atlas_col: u32, atlas_row: u32, grid_x: u32, grid_y: u32);
    /// Left-to-right glyph run starting at pixel `(x, y)`.
    fn draw_text(&mut self, text: &str, x: u32, y: u32);
}

/// `MM-SS` for a frame count at the given frame rate, capped at `99-59`.
pub fn format_clock(frames: u64, frame_rate: u32) -> String {
    let seconds = (frames / u64::from(frame_rate.max(1))).min(MAX_CLOCK_SECONDS);
    format!("{:02}-{:02}", seconds / 60, seconds % 60)
}

/// Atlas column for a trail cell of age `age` on a snake of length `len`.
pub fn trail_tile(age: u32, len: u32, dir: Direction) -> u32 {
    if age >= len {
        HEAD_TILE + dir.index() as u32
    } else {
        BODY_TILE + 4 * age / len.max(1)
    }
}

/// Software renderer over an RGBA8 frame.
pub struct PixelCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    tile_size: u32,
    text_color: Rgba,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            frame,
            width,
            height,
            tile_size: tile_size.max(1),
            text_color: (230, 240, 255, 255),
        }
    }

    fn blend_pixel(&mut self, x: u32, y: u32, (r, g, b, a): Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let Some(px) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let a = u16::from(a);
        let inv = 255 - a;
        px[0] = ((u16::from(r) * a + u16::from(px[0]) * inv) / 255) as u8;
        px[1] = ((u16::from(g) * a + u16::from(px[1]) * inv) / 255) as u8;
        px[2] = ((u16::from(b) * a + u16::from(px[2]) * inv) / 255) as u8;
        px[3] = 255;
    }

    fn tile_color(atlas_col: u32) -> Rgba {
        match atlas_col {
            FOOD_TILE => (220, 50, 50, 255),
            c if c < HEAD_TILE => {
                let shade = 110 + 30 * (c - BODY_TILE) as u8;
                (50, shade, 50, 255)
            }
            _ => (100, 255, 100, 255),
        }
    }

    fn draw_eyes(&mut self, x: u32, y: u32, dir: Direction) {
        let near = self.tile_size / 4;
        let far = self.tile_size - 1 - near;
        let eyes = match dir {
            Direction::Right => [(far, near), (far, far)],
            Direction::Left => [(near, near), (near, far)],
            Direction::Up => [(near, near), (far, near)],
            Direction::Down => [(near, far), (far, far)],
            Direction::None => return,
        };
        for (ex, ey) in eyes {
            self.blend_pixel(x + ex, y + ey, (0, 0, 0, 255));
        }
    }

    fn draw_char(&mut self, ch: char, x: u32, y: u32) {
        let Some(rows) = glyph_5x7(ch) else {
            return;
        };
        let color = self.text_color;
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5u32 {
                if (row >> (4 - rx)) & 1 == 1 {
                    self.blend_pixel(x + rx, y + ry as u32, color);
                }
            }
        }
    }
}

impl DrawSurface for PixelCanvas<'_> {
    fn clear(&mut self, (r, g, b, a): Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, a]);
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);
        for py in y..y2 {
            for px in x..x2 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if w == 0 || h == 0 {
            return;
        }
        let x2 = x + w - 1;
        let y2 = y + h - 1;
        for px in x..=x2 {
            self.blend_pixel(px, y, color);
            self.blend_pixel(px, y2, color);
        }
        for py in y..=y2 {
            self.blend_pixel(x, py, color);
            self.blend_pixel(x2, py, color);
        }
    }

    fn draw_tile(&mut self, atlas_col: u32, _atlas_row: u32, grid_x: u32, grid_y: u32) {
        let size = self.tile_size;
        let (x, y) = (grid_x * size, grid_y * size);
        // Inset by one pixel so neighbouring segments stay distinguishable.
        let inner = size.saturating_sub(2);
        self.fill_rect(x + 1, y + 1, inner, inner, Self::tile_color(atlas_col));
        if atlas_col >= HEAD_TILE {
            let dir = Direction::from_index((atlas_col - HEAD_TILE) as i32);
            self.draw_eyes(x, y, dir);
        }
    }

    fn draw_text(&mut self, text: &str, x: u32, y: u32) {
        let mut cx = x;
        for ch in text.chars() {
            self.draw_char(ch, cx, y);
            cx += GLYPH_ADVANCE;
        }
    }
}

const GLYPHS: &[(char, [u8; 7])] = &[
    ('A', [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11]),
    ('B', [0x1e, 0x11, 0x1e, 0x11, 0x11, 0x11, 0x1e]),
    ('C', [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e]),
    ('D', [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c]),
    ('E', [0x1f, 0x10, 0x1e, 0x10, 0x10, 0x10, 0x1f]),
    ('F', [0x1f, 0x10, 0x1e, 0x10, 0x10, 0x10, 0x10]),
    ('G', [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0e]),
    ('H', [0x11, 0x11, 0x1f, 0x11, 0x11, 0x11, 0x11]),
    ('I', [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1f]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x12, 0x12, 0x0c]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f]),
    ('M', [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e]),
    ('P', [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10]),
    ('Q', [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d]),
    ('R', [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11]),
    ('S', [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e]),
    ('T', [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x1b, 0x11]),
    ('X', [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f]),
    ('0', [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e]),
    ('1', [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e]),
    ('2', [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f]),
    ('3', [0x1e, 0x01, 0x01, 0x0e, 0x01, 0x01, 0x1e]),
    ('4', [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02]),
    ('5', [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e]),
    ('6', [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e]),
    ('7', [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e]),
    ('9', [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c]),
    (':', [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00]),
    ('<', [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02]),
    ('>', [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
];

/// 5x7 bitmap for a character; lowercase shares the uppercase glyphs.
/// Space and unknown characters draw nothing.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, rows)| *rows)
}
