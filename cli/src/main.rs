use clap::Parser;
use log::LevelFilter;
use pdf_book_data::data_dir::default_data_dir;

/// Extract the text of the first PDF in the data folder into
/// `processed_book_data.json`.
#[derive(Parser)]
#[command(name = "process-book")]
#[command(version, long_about = None)]
struct Args {
    /// Log extraction progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let data_dir = match default_data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error locating the data folder: {}", e);
            std::process::exit(1);
        }
    };

    match pdf_book_data::process_data_dir(&data_dir) {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
