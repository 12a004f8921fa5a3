//! Reference chart of the `xterm-256color` terminal palette
//!
//! The 256 indexed colors form three fixed bands: 16 basic system
//! colors, a 6×6×6 RGB cube, and a 24-step grayscale ramp.
//!
//! The [`palette`] module maps each indexed color code to its
//! approximate RGB value. The [`chart`] module renders the mapping as
//! rows of escape-coded swatches, written to any [`io::Write`] target.
//!
//! ```no_run
//! # use std::io;
//! use swatch::Chart;
//!
//! # fn main() -> io::Result<()> {
//! Chart::new().write(&mut io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! [`io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html

#![deny(missing_docs)]

#[macro_use] extern crate bitflags;
extern crate log;
extern crate smallstr;

pub use crate::chart::Chart;
pub use crate::palette::{Band, BandColors, Bands, Rgb};

pub mod chart;
pub mod palette;

#[cfg(test)]
mod test {
    use crate::chart::Chart;

    fn assert_has_traits<T: 'static + Send + Sync>() {}

    #[test]
    fn test_traits() {
        assert_has_traits::<Chart>();
    }
}
