//! Command-line flags.

use crate::config::{DEFAULT_CONFIG_PATH, ENV_TXTMANIP_CONFIG};
use clap::Parser;
use std::path::PathBuf;

const KEY_BINDINGS: &str = "\
Key bindings:
  Esc, Ctrl+C        quit and print the replay line
  Enter              run the input line against the text
  Ctrl+Z             undo the last successful command
  Up, Down           browse previously run lines
  Ctrl+A, Home       move to the start of the line
  Ctrl+E, End        move to the end of the line
  Left, Ctrl+B       move one character left
  Right, Ctrl+F      move one character right
  Backspace          delete the character before the cursor
  Delete, Ctrl+D     delete the character under the cursor";

/// Manipulate text interactively by piping it through shell commands.
///
/// The initial content is the named FILE or standard input. On quit the
/// equivalent shell pipeline is printed to standard output.
#[derive(Debug, Clone, Parser)]
#[command(name = "txtmanip", version, about, long_about, after_help = KEY_BINDINGS)]
pub struct Args {
    /// File to edit; standard input when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file listing the allowed commands.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = ENV_TXTMANIP_CONFIG,
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Write diagnostics to this file (filter with RUST_LOG).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
