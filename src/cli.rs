use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::library::DEFAULT_LIBRARY_DIR;
use crate::scheme::DEFAULT_OUTPUT;

/// Extract a background/foreground color scheme from a wallpaper image.
#[derive(Parser, Debug)]
#[command(name = "wallscheme", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Write the scheme document to this file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print a colored terminal preview of the scheme to stderr
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Manage the wallpaper library and apply wallpaper color schemes.
#[derive(Parser, Debug)]
#[command(name = "wallpapers", version, about)]
pub struct LibraryArgs {
    /// Wallpaper library directory
    #[arg(short, long, default_value = DEFAULT_LIBRARY_DIR, global = true)]
    pub dir: PathBuf,

    /// Scheme document written by `set` and read by `show`
    #[arg(short, long, default_value = DEFAULT_OUTPUT, global = true)]
    pub output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: LibraryCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LibraryCommand {
    /// List wallpapers in the library
    List,
    /// Copy an image file into the library
    Add {
        /// Image file to add
        file: PathBuf,
    },
    /// Delete a wallpaper from the library
    Remove {
        /// Wallpaper file name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Extract a wallpaper's scheme and write the scheme document
    Set {
        /// Wallpaper file name
        name: String,
    },
    /// Print the current scheme document
    Show,
    /// Browse the library interactively
    Browse,
}
