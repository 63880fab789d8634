//! # Maquette CLI
//!
//! Usage:
//!   maquette document.json --page 2 -o updated.json
//!   maquette document.json --all -o updated.json
//!   echo '{ ... }' | maquette --all
//!   maquette --example > document.json

use std::env;
use std::fs;
use std::io::{self, Read};

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_document_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).expect("Failed to read stdin");
        buf
    };

    // `--page N` targets one page; `--all` (the default) targets every page.
    let page: Option<usize> = args
        .windows(2)
        .find(|w| w[0] == "--page")
        .map(|w| w[1].parse().expect("--page expects a 1-based page index"));

    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone());

    match maquette::layout_document_json(&input, page) {
        Ok(json) => match output_path {
            Some(path) => {
                fs::write(&path, &json).expect("Failed to write output file");
                eprintln!("✓ Written {} bytes to {}", json.len(), path);
            }
            None => println!("{json}"),
        },
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn example_document_json() -> &'static str {
    r#"{
  "config": {
    "totalPages": 3,
    "pageWidthPx": 600.0,
    "pageGapPx": 50.0,
    "marginWidthPx": 600.0
  },
  "layoutMode": "insertion",
  "items": [
    {
      "id": "prod-001",
      "x": 24.0, "y": 18.0,
      "width": 180.0, "height": 220.0,
      "page": 1,
      "imageUrl": "images/espresso-machine.png",
      "title": "Espresso Machine X200",
      "brand": "BaristaPro",
      "hasBorder": true,
      "percentages": [15]
    },
    {
      "id": "prod-002",
      "x": 230.0, "y": 18.0,
      "width": 160.0, "height": 200.0,
      "page": 1,
      "imageUrl": "images/grinder.png",
      "title": "Burr Grinder",
      "brand": "BaristaPro"
    },
    {
      "id": "prod-003",
      "x": 24.0, "y": 260.0,
      "width": 300.0, "height": 180.0,
      "page": 1,
      "imageUrl": "images/kettle.png",
      "title": "Gooseneck Kettle",
      "brand": "Pourtek",
      "percentages": [10, 20]
    },
    {
      "id": "prod-004",
      "x": 24.0, "y": 18.0,
      "width": 540.0, "height": 320.0,
      "page": 2,
      "imageUrl": "images/banner.png",
      "title": "Spring Promotion Banner"
    }
  ]
}"#
}
