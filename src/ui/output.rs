use crate::converter::ConversionReport;
use crate::error::{DocxtractError, UserFriendlyError};
use console::{style, Emoji, Term};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        }
    }
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Per-file and summary lines. These are the program's primary output and
    // print even in quiet mode.

    pub fn file_converted(&self, filename: &str) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "file",
                "status": "ok",
                "file": filename,
            })),
            _ => {
                if self.use_colors {
                    println!("{} Extracted: {}", style("[OK]").green().bold(), filename);
                } else {
                    println!("[OK] Extracted: {}", filename);
                }
            }
        }
    }

    pub fn file_failed(&self, filename: &str, description: &str) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "file",
                "status": "error",
                "file": filename,
                "error": description,
            })),
            _ => {
                if self.use_colors {
                    println!(
                        "{} Error extracting {}: {}",
                        style("[ERROR]").red().bold(),
                        filename,
                        description
                    );
                } else {
                    println!("[ERROR] Error extracting {}: {}", filename, description);
                }
            }
        }
    }

    pub fn conversion_summary(&self, destination: &Path) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "summary",
                "destination": destination.display().to_string(),
            })),
            _ => {
                println!();
                println!("All extracted files saved to: {}", destination.display());
            }
        }
    }

    // Ambient messaging, gated by verbosity.

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    eprintln!("{}{}", CROSS, style(message).red().bold());
                } else {
                    eprintln!("✗ {}", message);
                }
            }
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", WARNING, style(message).yellow().bold());
                    } else {
                        println!("! {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", INFO, style(message).cyan());
                    } else {
                        println!("i {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &DocxtractError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    println!();
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    /// Prints the end-of-run report. JSON mode always emits it; the other
    /// modes show it only at -v and above, since the per-file lines already
    /// told the story.
    pub fn print_conversion_report(&self, report: &ConversionReport) {
        match self.mode {
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            _ => {
                if !self.should_show_message(1) {
                    return;
                }

                self.print_header("Conversion Report");
                println!("Source:      {}", report.source_directory);
                println!("Destination: {}", report.destination_directory);
                println!("Documents:   {}", report.summary.total_documents);
                println!("Converted:   {}", report.summary.converted);
                println!("Failed:      {}", report.summary.failed);

                if !report.files.is_empty() {
                    println!();
                    for file in &report.files {
                        match (&file.output_file, &file.error) {
                            (Some(output), _) => println!("  {} -> {}", file.filename, output),
                            (None, Some(error)) => println!("  {} !! {}", file.filename, error),
                            (None, None) => {}
                        }
                    }
                }
            }
        }
    }

    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                println!();
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
                println!();
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {}
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }
}
