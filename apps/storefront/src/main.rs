//! # Storefront Entry Point
//!
//! ```text
//! $ storefront increase 1        # add a Book
//! $ storefront increase 3        # add a Banana
//! $ storefront page /store       # store page, quantities shown per item
//! $ storefront cart              # open the cart panel over the store
//! $ storefront decrease 3        # last Banana leaves the cart
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use clap::Parser;
use storefront_app::cli::Cli;

fn main() -> ExitCode {
    storefront_app::init_tracing();

    match storefront_app::run(Cli::parse()) {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
