//! Prints a reference chart of the `xterm-256color` palette

extern crate swatch;

use std::io::{self, BufWriter, Write};

use clap::Parser;

use swatch::{Bands, Chart};

const AFTER_HELP: &str = "\
Each swatch takes the form 'xx#rrggbb': 'xx' is an indexed color code
and 'rrggbb' is its approximate RGB value, both in hexadecimal. The 16
basic colors have no fixed RGB value and show '******' instead.

Note: if the terminal's color palette has been reconfigured, indexed
color codes and RGB color codes will not correspond.";

/// Show the default colors of 'xterm-256color'.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about, after_help = AFTER_HELP)]
struct Args {
    /// Show the 16 basic system colors
    #[arg(short, long)]
    basic: bool,

    /// Show the 216 colors of the 6x6x6 RGB cube
    #[arg(short, long)]
    colorful: bool,

    /// Show the 24-step grayscale ramp
    #[arg(short, long)]
    gray: bool,
}

impl Args {
    // With no selection flags given, every band is shown.
    fn bands(&self) -> Bands {
        let mut bands = Bands::empty();

        if self.basic {
            bands |= Bands::BASIC;
        }
        if self.colorful {
            bands |= Bands::CUBE;
        }
        if self.gray {
            bands |= Bands::GRAY;
        }

        if bands.is_empty() {
            Bands::all()
        } else {
            bands
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    Chart::with_bands(args.bands()).write(&mut out)?;
    out.flush()
}
