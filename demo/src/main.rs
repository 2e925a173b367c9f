//! Generate a keypair, sign a message, and then verify the signature.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --bin curvesig-demo -- --message "Hello world"
//! ```
//!
//! Pass `--seed <u64>` to derive the keypair deterministically (insecure, for reproducible
//! output only) and `--verbose` to enable debug logs.

use clap::{value_parser, Arg, ArgAction, Command};
use curvesig_cryptography::{
    engine::KeyBytes, EntropySource, Error, KeyEngine, KEY_LENGTH,
};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Generates a keypair from `engine`, signs `message`, and checks the signature.
fn run<E: EntropySource>(mut engine: KeyEngine<E>, message: &[u8]) -> Result<bool, Error> {
    println!("Curvesig (v{})", engine.version());

    let keypair = engine.random_keypair()?;
    let mut private: KeyBytes = [0u8; KEY_LENGTH];
    private.copy_from_slice(keypair.private_key().as_ref());
    let mut public: KeyBytes = [0u8; KEY_LENGTH];
    public.copy_from_slice(keypair.public_key().as_ref());
    println!("Keys generated");
    println!("{}", hex::encode(private));
    println!("{}", hex::encode(public));

    let (r, s) = engine.sign(&private, message)?;
    info!(public = %hex::encode(public), len = message.len(), "signed message");
    println!("Signed message");
    println!("{}", hex::encode(r));
    println!("{}", hex::encode(s));

    Ok(engine.verify(&public, message, &r, &s))
}

fn main() -> ExitCode {
    // Parse arguments
    let matches = Command::new("curvesig-demo")
        .about("generate a keypair, sign a message, and verify the signature")
        .arg(
            Arg::new("message")
                .long("message")
                .required(false)
                .default_value("Hello world"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Create logger
    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse args
    let message = matches
        .get_one::<String>("message")
        .map(String::as_bytes)
        .unwrap_or(&b"Hello world"[..]);
    let result = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            info!(seed, "using seeded keypair (insecure)");
            run(KeyEngine::with_source(StdRng::seed_from_u64(*seed)), message)
        }
        None => run(KeyEngine::new(), message),
    };

    // Report outcome
    match result {
        Ok(valid) => {
            print!("Check signature: ");
            if valid {
                println!("SUCCESS");
                ExitCode::SUCCESS
            } else {
                println!("FAILED");
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!(?err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
