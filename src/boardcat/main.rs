//! # Boardcat CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into an exit code.
//!
//! The CLI plays the part a documentation page plays for the library: it
//! builds a `FacetEngine` from a catalog file, feeds it the changes given on
//! the command line, and prints the visible cards, the count line and the
//! fragment a page would write into its URL.
//!
//! Setup failures (missing or malformed catalog, unreadable config) are the
//! only errors: they print a diagnostic to stderr and exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
