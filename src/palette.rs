//! Defines the fixed mapping from indexed color codes to RGB values
//!
//! The `xterm-256color` palette is partitioned into three contiguous
//! [`Band`]s: the 16 basic system colors, a 6×6×6 RGB cube, and a 24-step
//! grayscale ramp. Cube and ramp values follow fixed arithmetic
//! progressions; the basic colors have no fixed value.

use std::fmt;
use std::ops::Range;

const BASIC_COLORS: u8 = 16;

const CUBE_SIDE: u8 = 6;
const CUBE_COLORS: u8 = CUBE_SIDE * CUBE_SIDE * CUBE_SIDE;
const CUBE_BASE: u8 = 55;
const CUBE_STEP: u8 = 40;

const GRAY_OFFSET: u8 = BASIC_COLORS + CUBE_COLORS;
const GRAY_COLORS: u8 = 24;
const GRAY_BASE: u8 = 8;
const GRAY_STEP: u8 = 10;

/// Represents the approximate RGB value of a palette color.
///
/// # Notes
///
/// Values are derived from the default `xterm-256color` palette.
/// Because users may reconfigure the set of colors available in their
/// terminal, these values may differ from actual displayed colors.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl fmt::LowerHex for Rgb {
    /// Formats the value as six hexadecimal digits, `rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags!{
    /// Represents a set of palette bands selected for display.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Bands: u8 {
        /// The basic system colors
        const BASIC = 1 << 0;
        /// The RGB cube
        const CUBE  = 1 << 1;
        /// The grayscale ramp
        const GRAY  = 1 << 2;
    }
}

/// Represents one of the three contiguous bands of the palette.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Band {
    /// The 16 basic system colors; indices `0 ..= 15`
    Basic,
    /// The 6×6×6 RGB cube; indices `16 ..= 231`
    Cube,
    /// The 24-step grayscale ramp; indices `232 ..= 255`
    Gray,
}

impl Band {
    /// Returns all palette bands, in ascending index order.
    pub fn all() -> [Band; 3] {
        [Band::Basic, Band::Cube, Band::Gray]
    }

    /// Returns the range of indexed color codes belonging to this band.
    pub fn indices(&self) -> Range<u16> {
        match *self {
            Band::Basic => 0..BASIC_COLORS as u16,
            Band::Cube => BASIC_COLORS as u16..GRAY_OFFSET as u16,
            Band::Gray => GRAY_OFFSET as u16..GRAY_OFFSET as u16 + GRAY_COLORS as u16,
        }
    }

    /// Returns an iterator over the colors of this band.
    pub fn colors(&self) -> BandColors {
        BandColors{
            indices: self.indices(),
        }
    }

    /// Returns the `Bands` flag corresponding to this band.
    pub fn flag(&self) -> Bands {
        match *self {
            Band::Basic => Bands::BASIC,
            Band::Cube => Bands::CUBE,
            Band::Gray => Bands::GRAY,
        }
    }
}

/// Iterator over the colors of a palette band.
///
/// Yields `(index, rgb)` pairs in ascending index order. The RGB value
/// is `None` for colors of the basic band.
///
/// An instance of this type is returned by [`Band::colors`].
#[derive(Clone, Debug)]
pub struct BandColors {
    indices: Range<u16>,
}

impl Iterator for BandColors {
    type Item = (u8, Option<Rgb>);

    fn next(&mut self) -> Option<(u8, Option<Rgb>)> {
        self.indices.next().map(|idx| (idx as u8, rgb(idx as u8)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Returns the approximate RGB value of the given indexed color code.
///
/// Returns `None` for the basic band, indices `0 ..= 15`; those colors
/// are commonly redefined by terminal configuration and have no fixed
/// value.
///
/// # Examples
///
/// ```
/// # use swatch::palette::{rgb, Rgb};
/// assert_eq!(rgb(3), None);
/// assert_eq!(rgb(196), Some(Rgb{r: 255, g: 0, b: 0}));
/// assert_eq!(rgb(255), Some(Rgb{r: 238, g: 238, b: 238}));
/// ```
pub fn rgb(index: u8) -> Option<Rgb> {
    if index < BASIC_COLORS {
        None
    } else if index < GRAY_OFFSET {
        let n = index - BASIC_COLORS;

        let r = n / (CUBE_SIDE * CUBE_SIDE);
        let g = n / CUBE_SIDE % CUBE_SIDE;
        let b = n % CUBE_SIDE;

        Some(Rgb{
            r: cube_level(r),
            g: cube_level(g),
            b: cube_level(b),
        })
    } else {
        let level = gray_level(index - GRAY_OFFSET);

        Some(Rgb{r: level, g: level, b: level})
    }
}

/// Returns the channel value for an RGB cube coordinate.
///
/// Coordinate `0` maps to channel value `0`; coordinates `1 ..= 5` are
/// spaced 40 apart, beginning at 95.
///
/// If `coord` is not a valid cube coordinate, the result is unspecified.
///
/// # Examples
///
/// ```
/// # use swatch::palette::cube_level;
/// assert_eq!(cube_level(0), 0);
/// assert_eq!(cube_level(1), 95);
/// assert_eq!(cube_level(5), 255);
/// ```
#[inline]
pub fn cube_level(coord: u8) -> u8 {
    if coord == 0 {
        0
    } else {
        coord * CUBE_STEP + CUBE_BASE
    }
}

/// Returns the brightness level for a grayscale ramp step.
///
/// Steps `0 ..= 23` are spaced 10 apart, beginning at 8.
///
/// If `step` is not a valid ramp step, the result is unspecified.
///
/// # Examples
///
/// ```
/// # use swatch::palette::gray_level;
/// assert_eq!(gray_level(0), 8);
/// assert_eq!(gray_level(23), 238);
/// ```
#[inline]
pub fn gray_level(step: u8) -> u8 {
    step * GRAY_STEP + GRAY_BASE
}

/// Returns the indexed color code for the given RGB cube coordinates.
///
/// If any coordinate is not a valid cube coordinate, the result is
/// unspecified.
///
/// # Examples
///
/// ```
/// # use swatch::palette::cube_index;
/// assert_eq!(cube_index(0, 0, 0), 16);
/// assert_eq!(cube_index(5, 0, 0), 196);
/// assert_eq!(cube_index(5, 5, 5), 231);
/// ```
#[inline]
pub fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    BASIC_COLORS + (CUBE_SIDE * CUBE_SIDE) * r + CUBE_SIDE * g + b
}

#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};

    use super::{cube_index, cube_level, gray_level, rgb, Band, Rgb};

    #[test]
    fn test_band_partition() {
        let mut next = 0;

        for band in Band::all() {
            let range = band.indices();

            assert_eq!(range.start, next);
            next = range.end;
        }

        assert_eq!(next, 256);
    }

    #[test]
    fn test_basic_band() {
        for idx in 0..16 {
            assert_eq!(rgb(idx), None);
        }

        for (idx, rgb) in Band::Basic.colors() {
            assert!(idx < 16);
            assert_eq!(rgb, None);
        }
    }

    #[test]
    fn test_cube_values() {
        assert_eq!(rgb(16), Some(Rgb{r: 0, g: 0, b: 0}));
        assert_eq!(rgb(21), Some(Rgb{r: 0, g: 0, b: 255}));
        assert_eq!(rgb(46), Some(Rgb{r: 0, g: 255, b: 0}));
        assert_eq!(rgb(59), Some(Rgb{r: 95, g: 95, b: 95}));
        assert_eq!(rgb(196), Some(Rgb{r: 255, g: 0, b: 0}));
        assert_eq!(rgb(231), Some(Rgb{r: 255, g: 255, b: 255}));
    }

    #[test]
    fn test_cube_round_trip() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            let r = rng.gen_range(0..6);
            let g = rng.gen_range(0..6);
            let b = rng.gen_range(0..6);

            let value = rgb(cube_index(r, g, b)).unwrap();

            assert_eq!(value.r, cube_level(r));
            assert_eq!(value.g, cube_level(g));
            assert_eq!(value.b, cube_level(b));
        }
    }

    #[test]
    fn test_gray_ramp() {
        let mut prev = None;

        for (_, rgb) in Band::Gray.colors() {
            let rgb = rgb.unwrap();

            assert_eq!(rgb.r, rgb.g);
            assert_eq!(rgb.g, rgb.b);

            if let Some(prev) = prev {
                assert!(rgb.r > prev);
            }

            prev = Some(rgb.r);
        }

        assert_eq!(gray_level(0), 8);
        assert_eq!(gray_level(23), 238);
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(format!("{:x}", Rgb{r: 0x5f, g: 0, b: 0xd7}), "5f00d7");
        assert_eq!(format!("{:x}", Rgb::default()), "000000");
    }
}
