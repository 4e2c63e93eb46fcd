use anyhow::Result;
use clap::Parser;

use wallscheme::cli::Args;
use wallscheme::pipeline::extract_scheme;
use wallscheme::{logging, preview};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let scheme = extract_scheme(&args.image)?;
    scheme.write_to(&args.output)?;
    log::info!("wrote {}", args.output.display());

    if args.preview {
        eprint!("{}", preview::render(&scheme));
    }
    println!("{}", scheme.serialize()?);
    Ok(())
}
