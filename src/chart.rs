//! Renders palette colors as rows of escape-coded swatches
//!
//! Each color becomes one `xx#rrggbb` label, wrapped in the SGR sequence
//! selecting that indexed color, so the label displays in the color it
//! names. Labels are grouped into fixed-width rows per band.

use std::io;

use log::debug;
use smallstr::SmallString;

use crate::palette::{Band, Bands, Rgb};

// Clears all character attributes
const SGR_RESET: &str = "\x1b[m";

// Shown in place of an RGB value for the basic band
const NO_RGB: &str = "******";

/// Writes a reference chart of the `xterm-256color` palette.
///
/// Bands are written in palette order, one space-separated row of
/// swatches per line.
///
/// # Examples
///
/// ```no_run
/// # use std::io;
/// use swatch::{Bands, Chart};
///
/// # fn main() -> io::Result<()> {
/// let mut stdout = io::stdout();
///
/// Chart::with_bands(Bands::GRAY).write(&mut stdout)?;
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Chart {
    bands: Bands,
}

impl Chart {
    /// Creates a `Chart` displaying all three palette bands.
    pub fn new() -> Chart {
        Chart{bands: Bands::all()}
    }

    /// Creates a `Chart` displaying only the given bands.
    ///
    /// Bands are written in palette order, regardless of how the
    /// selection was assembled.
    pub fn with_bands(bands: Bands) -> Chart {
        Chart{bands}
    }

    /// Returns the set of bands the chart displays.
    pub fn bands(&self) -> Bands {
        self.bands
    }

    /// Writes the chart to the given writer.
    ///
    /// An empty band selection writes nothing.
    pub fn write<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        debug!("writing chart for bands {:?}", self.bands);

        for band in Band::all() {
            if self.bands.contains(band.flag()) {
                write_band(w, band)?;
            }
        }

        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Chart {
        Chart::new()
    }
}

fn write_band<W: io::Write>(w: &mut W, band: Band) -> io::Result<()> {
    let width = row_width(band);
    let count = write_cells(w, band.colors(), width)?;

    debug!("{:?} band: {} colors in rows of {}", band, count, width);

    Ok(())
}

// Writes space-separated swatches in rows of `width`, each row ending
// in a newline. A remainder becomes a final shorter row.
fn write_cells<W, I>(w: &mut W, cells: I, width: usize) -> io::Result<usize>
        where W: io::Write, I: Iterator<Item=(u8, Option<Rgb>)> {
    let mut count = 0;

    for (index, rgb) in cells {
        if count % width != 0 {
            w.write_all(b" ")?;
        }

        let text = label(index, rgb);

        // SGR 38;5;n selects foreground color n of the 256-color palette
        write!(w, "\x1b[38;5;{}m{}{}", index, &text[..], SGR_RESET)?;
        count += 1;

        if count % width == 0 {
            w.write_all(b"\n")?;
        }
    }

    if count % width != 0 {
        w.write_all(b"\n")?;
    }

    Ok(count)
}

fn label(index: u8, rgb: Option<Rgb>) -> SmallString<[u8; 16]> {
    use std::fmt::Write;

    let mut text = SmallString::new();

    // Writing to a SmallString cannot fail
    match rgb {
        Some(rgb) => { let _ = write!(text, "{:02x}#{:x}", index, rgb); }
        None => { let _ = write!(text, "{:02x}#{}", index, NO_RGB); }
    }

    text
}

fn row_width(band: Band) -> usize {
    match band {
        Band::Basic | Band::Gray => 8,
        Band::Cube => 6,
    }
}
