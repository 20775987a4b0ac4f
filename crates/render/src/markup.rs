//! Inline color markup rendering.
//!
//! Text may embed `[fg:#RRGGBB]`, `[fg:none]`, `[bg:#RRGGBB]`, `[bg:none]`
//! tags. State threads left to right: `fg:` swaps the active foreground
//! (`none` resets to the caller's default), `bg:` paints subsequent segments
//! over a filled rectangle (`none` clears it). Tag-shaped substrings that do
//! not parse stay literal text.

use crate::font::Font;
use crate::text::{draw_text, fill_rect, measure_text};
use crate::traits::Surface;
use marquee_types::Color;
use std::collections::HashMap;

/// Padding around background rectangles, in pixels. Tunable; nothing
/// downstream depends on the exact value.
pub const BG_PAD: i32 = 2;

/// Memoizes hex tag strings to parsed colors for the lifetime of one layout
/// load, so per-frame markup never re-parses the same `#RRGGBB`.
#[derive(Debug, Default)]
pub struct ColorCache {
    map: HashMap<String, Color>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, hex: &str) -> Option<Color> {
        if let Some(color) = self.map.get(hex) {
            return Some(*color);
        }
        let color = Color::from_hex(hex).ok()?;
        self.map.insert(hex.to_string(), color);
        Some(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment<'a> {
    Text(&'a str),
    /// `None` resets to the default foreground.
    Fg(Option<Color>),
    /// `None` clears the background.
    Bg(Option<Color>),
}

/// Try to read one markup tag at the start of `tail` (which begins with `[`).
/// Returns the segment and the tag's byte length.
fn parse_tag<'a>(tail: &'a str, colors: &mut ColorCache) -> Option<(Segment<'a>, usize)> {
    let is_fg = tail.starts_with("[fg:");
    let is_bg = tail.starts_with("[bg:");
    if !is_fg && !is_bg {
        return None;
    }
    let close = tail.find(']')?;
    let value = &tail[4..close];
    let color = match value {
        "none" => None,
        hex => Some(colors.resolve(hex)?),
    };
    let segment = if is_fg {
        Segment::Fg(color)
    } else {
        Segment::Bg(color)
    };
    Some((segment, close + 1))
}

fn tokenize<'a>(text: &'a str, colors: &mut ColorCache) -> Vec<Segment<'a>> {
    if !text.contains('[') {
        return vec![Segment::Text(text)];
    }

    let mut segments = Vec::new();
    let mut rest = text;
    let mut run_start = 0usize;
    while let Some(open) = rest[run_start..].find('[') {
        let open = run_start + open;
        match parse_tag(&rest[open..], colors) {
            Some((segment, len)) => {
                if open > 0 {
                    segments.push(Segment::Text(&rest[..open]));
                }
                segments.push(segment);
                rest = &rest[open + len..];
                run_start = 0;
            }
            None => {
                // Not a tag: keep the '[' literal and scan on.
                run_start = open + 1;
            }
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

/// Draw marked-up `text` with the pen starting at `origin_x`, baseline at
/// `baseline_y`. Returns the summed advance width of all plain segments.
pub fn draw_markup(
    surface: &mut dyn Surface,
    font: &dyn Font,
    origin_x: i32,
    baseline_y: i32,
    default_fg: Color,
    text: &str,
    colors: &mut ColorCache,
) -> i32 {
    let mut fg = default_fg;
    let mut bg: Option<Color> = None;
    let mut cursor = origin_x;

    for segment in tokenize(text, colors) {
        match segment {
            Segment::Fg(color) => fg = color.unwrap_or(default_fg),
            Segment::Bg(color) => bg = color,
            Segment::Text(run) => {
                let width = measure_text(font, run);
                if let Some(bg_color) = bg {
                    fill_rect(
                        surface,
                        cursor - 1,
                        baseline_y - font.height(),
                        width + BG_PAD,
                        font.height() + BG_PAD,
                        bg_color,
                    );
                }
                draw_text(surface, font, cursor, baseline_y, fg, run);
                cursor += width;
            }
        }
    }
    cursor - origin_x
}

/// Width of the plain segments of `text`, with tags stripped: the markup
/// twin of [`measure_text`].
pub fn measure_markup(font: &dyn Font, text: &str, colors: &mut ColorCache) -> i32 {
    tokenize(text, colors)
        .iter()
        .map(|segment| match segment {
            Segment::Text(run) => measure_text(font, run),
            _ => 0,
        })
        .sum()
}

/// Per-drawable memo of the last measured text width.
///
/// Rendered width must be computed at most once per distinct resolved string
/// per frame; since a drawable shows one string at a time, one entry per
/// index (keyed by the resolved text) is exactly that.
#[derive(Debug, Default)]
pub struct WidthCache {
    entries: HashMap<usize, (String, i32)>,
}

impl WidthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(
        &mut self,
        index: usize,
        text: &str,
        font: &dyn Font,
        colors: &mut ColorCache,
    ) -> i32 {
        if let Some((cached_text, width)) = self.entries.get(&index) {
            if cached_text == text {
                return *width;
            }
        }
        let width = measure_markup(font, text, colors);
        self.entries.insert(index, (text.to_string(), width));
        width
    }

    /// Drop everything; used on layout reload.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedAdvanceFont;
    use crate::sim::SimSurface;

    fn font() -> FixedAdvanceFont {
        FixedAdvanceFont::new(4, 6)
    }

    #[test]
    fn plain_text_has_a_single_segment_fast_path() {
        let mut colors = ColorCache::new();
        assert_eq!(tokenize("hello", &mut colors), vec![Segment::Text("hello")]);
    }

    #[test]
    fn tags_split_text_and_carry_colors() {
        let mut colors = ColorCache::new();
        let segments = tokenize("a[fg:#FF0000]b[fg:none]c", &mut colors);
        assert_eq!(
            segments,
            vec![
                Segment::Text("a"),
                Segment::Fg(Some(Color::new(255, 0, 0))),
                Segment::Text("b"),
                Segment::Fg(None),
                Segment::Text("c"),
            ]
        );
    }

    #[test]
    fn malformed_tags_stay_literal() {
        let mut colors = ColorCache::new();
        assert_eq!(
            tokenize("[fg:red]x", &mut colors),
            vec![Segment::Text("[fg:red]x")]
        );
        assert_eq!(
            tokenize("[sup] [fg:#ZZZZZZ]", &mut colors),
            vec![Segment::Text("[sup] [fg:#ZZZZZZ]")]
        );
    }

    #[test]
    fn returned_width_sums_all_plain_segments() {
        let mut colors = ColorCache::new();
        let mut surface = SimSurface::new(128, 16);
        let font = font();
        let text = "[bg:#FF0000][fg:#000000]ALERT[bg:none][fg:none] ok";
        let drawn = draw_markup(&mut surface, &font, 0, 10, Color::WHITE, text, &mut colors);
        // "ALERT" is 5 chars, " ok" is 3 chars, 4px advance each.
        assert_eq!(drawn, 32);
        assert_eq!(measure_markup(&font, text, &mut colors), 32);
    }

    #[test]
    fn background_paints_behind_the_tagged_segment_only() {
        let mut colors = ColorCache::new();
        let mut surface = SimSurface::new(128, 16);
        let font = font();
        let red = Color::new(255, 0, 0);
        draw_markup(
            &mut surface,
            &font,
            10,
            10,
            Color::WHITE,
            "[bg:#FF0000][fg:#000000]AL[bg:none][fg:none] ok",
            &mut colors,
        );
        // Inside "AL": glyph pixels are black over the red field.
        assert_eq!(surface.pixel(10, 10), Color::BLACK);
        // The padding column just left of the segment is red.
        assert_eq!(surface.pixel(9, 10), red);
        // One row below the baseline falls inside the padded rectangle.
        assert_eq!(surface.pixel(9, 11), red);
        // The " ok" segment carries no background; between its glyphs stays dark.
        // " " occupies x 18..22 with no glyph and no background.
        assert_eq!(surface.pixel(19, 10), Color::BLACK);
    }

    #[test]
    fn width_cache_recomputes_only_on_text_change() {
        let mut colors = ColorCache::new();
        let mut cache = WidthCache::new();
        let font = font();
        assert_eq!(cache.width(0, "abc", &font, &mut colors), 12);
        assert_eq!(cache.width(0, "abc", &font, &mut colors), 12);
        assert_eq!(cache.width(0, "abcd", &font, &mut colors), 16);
        // Independent per index.
        assert_eq!(cache.width(1, "x", &font, &mut colors), 4);
    }
}
