//! Drawing columns onto a host surface.

use crate::config::VisConfig;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the background.
    pub const BLACK: Rgba = Rgba::from_u32(0x0000_00FF);
    /// Opaque white, the column color.
    pub const WHITE: Rgba = Rgba::from_u32(0xFFFF_FFFF);

    /// Create a color from individual channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a color packed as `0xRRGGBBAA`.
    pub const fn from_u32(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }
}

/// Axis-aligned rectangle in canvas pixels, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// A drawable surface provided by the host.
///
/// Drawing calls are buffered until [`present`](Canvas::present).
pub trait Canvas {
    /// Error reported when a frame cannot be shown.
    type Error;

    /// Set the color used by subsequent `clear` and `fill_rect` calls.
    fn set_draw_color(&mut self, color: Rgba);

    /// Fill the whole surface with the draw color.
    fn clear(&mut self);

    /// Fill `rect` with the draw color.
    fn fill_rect(&mut self, rect: Rect);

    /// Show everything drawn since the last present.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Draw one frame: columns left to right, bottom aligned, no gaps.
pub fn draw_columns<C: Canvas>(
    canvas: &mut C,
    columns: &[u32],
    config: &VisConfig,
) -> Result<(), C::Error> {
    canvas.set_draw_color(Rgba::BLACK);
    canvas.clear();

    canvas.set_draw_color(Rgba::WHITE);

    let bottom = i32::try_from(config.window_height).unwrap_or(i32::MAX);
    let mut x = 0i32;
    for &height in columns {
        canvas.fill_rect(Rect::new(
            x,
            bottom.saturating_sub_unsigned(height),
            config.column_width,
            height,
        ));
        x = x.saturating_add_unsigned(config.column_width);
    }

    canvas.present()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every drawing call for inspection.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub color: Option<Rgba>,
        pub clears: Vec<Rgba>,
        pub rects: Vec<(Rgba, Rect)>,
        pub presents: usize,
    }

    impl Canvas for RecordingCanvas {
        type Error = std::convert::Infallible;

        fn set_draw_color(&mut self, color: Rgba) {
            self.color = Some(color);
        }

        fn clear(&mut self) {
            self.clears.push(self.color.unwrap());
            self.rects.clear();
        }

        fn fill_rect(&mut self, rect: Rect) {
            self.rects.push((self.color.unwrap(), rect));
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.presents += 1;
            Ok(())
        }
    }

    #[test]
    fn decodes_packed_colors() {
        assert_eq!(Rgba::from_u32(0x1122_3344), Rgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
    }

    #[test]
    fn columns_are_bottom_aligned_without_gaps() {
        let config = VisConfig {
            window_width: 6,
            window_height: 30,
            column_width: 2,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();

        draw_columns(&mut canvas, &[20, 10, 30], &config).unwrap();

        assert_eq!(canvas.clears, vec![Rgba::BLACK]);
        assert_eq!(
            canvas.rects,
            vec![
                (Rgba::WHITE, Rect::new(0, 10, 2, 20)),
                (Rgba::WHITE, Rect::new(2, 20, 2, 10)),
                (Rgba::WHITE, Rect::new(4, 0, 2, 30)),
            ]
        );
        assert_eq!(canvas.presents, 1);
    }

    #[test]
    fn oversized_geometry_saturates_instead_of_wrapping() {
        let config = VisConfig {
            window_width: u32::MAX,
            window_height: u32::MAX,
            column_width: u32::MAX,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();

        draw_columns(&mut canvas, &[1, 1], &config).unwrap();

        assert_eq!(
            canvas.rects,
            vec![
                (Rgba::WHITE, Rect::new(0, i32::MAX - 1, u32::MAX, 1)),
                (Rgba::WHITE, Rect::new(i32::MAX, i32::MAX - 1, u32::MAX, 1)),
            ]
        );
    }

    #[test]
    fn empty_row_still_clears_and_presents() {
        let mut canvas = RecordingCanvas::default();
        draw_columns(&mut canvas, &[], &VisConfig::default()).unwrap();

        assert_eq!(canvas.clears.len(), 1);
        assert!(canvas.rects.is_empty());
        assert_eq!(canvas.presents, 1);
    }
}
