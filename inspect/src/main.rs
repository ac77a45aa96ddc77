//! List registered objwire entities and decode hex-encoded objects.
//!
//! # Usage
//!
//! ## Print every built-in entity
//!
//! ```sh
//! cargo run --release --bin objwire-inspect -- schema
//! ```
//!
//! ## Produce a sample
//!
//! ```sh
//! cargo run --release --bin objwire-inspect -- encode-float64 3.14159
//! ```
//!
//! ```txt
//! e1a2184dfdabdcbedf299632499fed70eb1bbf8c400921f9f01b866e
//! ```
//!
//! ## Decode it
//!
//! ```sh
//! cargo run --release --bin objwire-inspect -- --log-level trace decode e1a2184dfdabdcbedf299632499fed70eb1bbf8c400921f9f01b866e
//! ```

use clap::{value_parser, Arg, ArgMatches, Command};
use objwire_binary::{
    any::{self, Float64, Scalar},
    stream, Object, Registry,
};
use objwire_schema::id::{from_hex, hex};
use std::process::exit;
use tracing::{error, info, Level};

fn main() {
    // Parse arguments
    let matches = Command::new("objwire-inspect")
        .about("list registered entities and decode hex-encoded objects")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .value_parser(value_parser!(Level))
                .help("Maximum level of emitted logs"),
        )
        .subcommand(Command::new("schema").about("print every registered entity"))
        .subcommand(
            Command::new("decode")
                .about("decode a hex-encoded object")
                .arg(Arg::new("hex").required(true)),
        )
        .subcommand(
            Command::new("encode-float64")
                .about("print the encoding of a boxed float64")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                ),
        )
        .get_matches();

    // Create logger
    let level = matches
        .get_one::<Level>("log-level")
        .copied()
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    // Register built-in types
    let registry = Registry::default();
    any::register(&registry).expect("failed to register built-in types");
    registry.seal();
    info!(classes = registry.len(), "loaded registry");

    match matches.subcommand() {
        Some(("schema", _)) => schema(&registry),
        Some(("decode", sub)) => decode(&registry, sub),
        Some(("encode-float64", sub)) => {
            let value = *sub.get_one::<f64>("value").expect("missing value");
            println!("{}", hex(&stream::encode(&Float64(value))));
        }
        _ => unreachable!("subcommand required"),
    }
}

fn schema(registry: &Registry) {
    for class in registry.classes() {
        println!("{} {}", class.id(), class.entity());
    }
}

fn decode(registry: &Registry, matches: &ArgMatches) {
    let input = matches.get_one::<String>("hex").expect("missing hex");
    let Some(bytes) = from_hex(input) else {
        error!("input is not valid hex");
        exit(1);
    };
    let object = match stream::decode(bytes.as_slice(), registry) {
        Ok(object) => object,
        Err(err) => {
            error!(?err, "failed to decode");
            exit(1);
        }
    };

    let entity = object.descriptor();
    println!("{} ({})", entity.qualified_name(), object.id());
    match Scalar::from_object(object.as_ref()) {
        Some(scalar) => println!("{scalar:?}"),
        None => println!("{object:#?}"),
    }
}
