use clap::Parser;
use course_finder::{CannedText, CourseFinder, FinderConfig};
use std::error::Error;
use std::io::Read;
use std::path::Path;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FinderConfig::from_file(path)?,
        None => FinderConfig::default(),
    };
    config.filters.extend(args.criteria());
    if let Some(count) = args.count {
        config.course_count = count;
    }

    if args.print_query {
        let finder = CourseFinder::from_config(CannedText::default(), &config);
        println!("{}", finder.search_query(&args.topic, &config.filters));
        return Ok(());
    }

    let raw = read_input(args.input.as_deref())?;
    ::log::info!("Read {} bytes of generator output", raw.len());

    let finder = CourseFinder::from_config(CannedText::new(raw), &config);
    let response = finder
        .respond(&args.topic, &config.filters)
        .await
        .map_err(|e| e as Box<dyn Error>)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}

/// Read generator output from a file, or stdin for "-" or no path
fn read_input(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
