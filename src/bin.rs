use clap::Parser;
use nullable::cli::Cli;
use nullable::error::Error;

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    println!("{}", cli.run()?);
    Ok(())
}
