use clap::Parser;
use docxtract::{Cli, Docxtract, DocxtractError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match Docxtract::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    if cli.dry_run {
        return handle_dry_run(&app);
    }

    match app.convert_documents() {
        Ok(report) => {
            app.output_formatter().print_conversion_report(&report);
            // Individual file failures never change the exit status; the
            // batch completing at all is success.
            0
        }
        Err(e) => {
            app.handle_error(&e);
            1
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "docxtract.toml".to_string());

    match Docxtract::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nEdit the file to point directories.source and");
            println!("directories.destination at real paths, then run:");
            println!("  docxtract --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(app: &Docxtract) -> i32 {
    let formatter = app.output_formatter();
    let config = app.config();

    formatter.print_header("DRY RUN - no files will be written");

    println!("  Source:          {}", config.directories.source.display());
    println!(
        "  Destination:     {}",
        config.directories.destination.display()
    );
    println!("  Document suffix: {}", config.conversion.document_suffix);
    println!("  Output suffix:   {}", config.conversion.output_suffix);
    println!("  Sorted:          {}", config.conversion.sort_entries);

    formatter.print_separator();

    let documents = match app.scan_source() {
        Ok(documents) => documents,
        Err(e) => {
            app.handle_error(&e);
            return 1;
        }
    };

    println!("Would convert {} documents:", documents.len());
    for document in &documents {
        println!("  {} ({})", document.filename, document.format_size());
    }

    0
}

fn print_startup_error(error: &DocxtractError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
