//! FizzBuzz teaching example

use clap::Parser;

use scribe_fizzbuzz::fizzbuzz;

/// Print the FizzBuzz sequence
#[derive(Debug, Parser)]
#[command(name = "fizzbuzz")]
#[command(version, about, long_about = None)]
struct Args {
    /// Upper limit of the sequence (inclusive)
    #[arg(default_value_t = 100)]
    limit: u64,
}

fn main() {
    let args = Args::parse();

    println!("=== FizzBuzz Generator (1 to {}) ===", args.limit);
    for value in fizzbuzz(args.limit) {
        println!("{}", value);
    }
}
