use anyhow::{bail, Result};
use clap::Parser;
use dialoguer::Confirm;

use wallscheme::cli::{LibraryArgs, LibraryCommand};
use wallscheme::library::WallpaperLibrary;
use wallscheme::scheme::Scheme;
use wallscheme::{logging, tui};

fn main() -> Result<()> {
    let args = LibraryArgs::parse();
    logging::init(args.verbose);

    let library = WallpaperLibrary::open(&args.dir)?;

    match args.command {
        LibraryCommand::List => {
            for name in library.list()? {
                println!("{name}");
            }
        }
        LibraryCommand::Add { file } => {
            let name = library.add(&file)?;
            println!("Added: {name}");
        }
        LibraryCommand::Remove { name, yes } => {
            library.path_of(&name)?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Remove {name}?"))
                    .default(false)
                    .interact()?;
            if !confirmed {
                bail!("removal of {name} cancelled");
            }
            library.remove(&name)?;
            println!("Removed: {name}");
        }
        LibraryCommand::Set { name } => {
            let scheme = library.apply(&name, &args.output)?;
            println!("{}", scheme.serialize()?);
        }
        LibraryCommand::Show => {
            if !args.output.exists() {
                bail!("no colors loaded yet: {} does not exist", args.output.display());
            }
            println!("{}", Scheme::load(&args.output)?.serialize()?);
        }
        LibraryCommand::Browse => {
            let app = tui::App::new(library, args.output)?;
            tui::run(app)?;
        }
    }

    Ok(())
}
