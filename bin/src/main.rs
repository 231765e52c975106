use std::{process::exit, sync::Arc, time::Instant};

use classifier::{train, ClassifierConfig};
use config::{get_config_location, read_config};
use log::info;
use persistance::fs::table_location;
use www::server;

mod config;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    for arg in args.iter() {
        match arg.as_ref() {
            "-v" | "--version" => return print_version(),
            "-h" | "--help" => return print_help(),
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown option: {}", arg);
                    exit(1);
                }
            }
        }
    }
    let config = read_config();
    let classifier = ClassifierConfig {
        corpus_location: config.corpus_location.into(),
        model_location: config.model_location.into(),
        class: config.class,
        chunk_count: config.chunk_count,
    };
    // serving without a trained table for the configured class would make
    // every /send fail, so train before binding the port
    if !table_location(&classifier.model_location, &classifier.class).exists() {
        info!("no trained model for {}, training", classifier.class);
        let now = Instant::now();
        if let Err(err) = train(&classifier).await {
            eprintln!("training failed: {}", err);
            exit(1);
        }
        info!(
            "trained {} in: {}ms",
            classifier.class,
            now.elapsed().as_millis()
        );
    }
    server(config.port, Arc::new(classifier)).await;
}

fn print_version() {
    println!("newswire v{}", env!("CARGO_PKG_VERSION"),);
}

fn print_help() {
    println!(
        "\nConfig file found at {}\n",
        format!("\x1b[38;5;47m{:#?}\x1b[0m", get_config_location().1)
    );
    print!(
        "Usage: newswire [options]
        Options:
        -v, --version                Print version.
        -h, --help                   Show this message.
        ",
    );
}
