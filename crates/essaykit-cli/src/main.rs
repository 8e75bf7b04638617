//! Essaykit CLI - list and read essays from the terminal

use clap::{Parser, Subcommand, ValueEnum};
use essaykit::{catalog, DetailState, DetailView, EssayRef, FormattedEssay, Reader, ESSAYS};
use std::io::{self, Write};

/// Author shown in the metadata panel
const AUTHOR: &str = "Paul Graham";

/// Fixed topic tags shown in the metadata panel
const TOPICS: &[&str] = &["Startups", "Technology", "Philosophy"];

/// Output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Markdown
    #[default]
    Md,
    /// JSON format
    Json,
}

/// Essaykit - read essays in your terminal
#[derive(Parser, Debug)]
#[command(name = "essaykit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the essays in the catalog
    List {
        /// Output format
        #[arg(long, short, default_value = "md")]
        output: OutputFormat,
    },
    /// Fetch an essay and render it
    Read {
        /// Catalog index (1-based), exact URL, or title
        essay: String,

        /// Output format
        #[arg(long, short, default_value = "md")]
        output: OutputFormat,

        /// Copy the rendered markdown to the clipboard
        #[arg(long)]
        copy: bool,

        /// Open the source URL in the default browser
        #[arg(long)]
        open: bool,

        /// Custom User-Agent
        #[arg(long)]
        user_agent: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { output } => run_list(output),
        Commands::Read {
            essay,
            output,
            copy,
            open,
            user_agent,
        } => run_read(&essay, output, copy, open, user_agent).await,
    }
}

fn run_list(output: OutputFormat) {
    match output {
        OutputFormat::Md => writeln_safe(&format_list(ESSAYS)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(ESSAYS).unwrap_or_else(|e| {
                eprintln!("Error serializing catalog: {}", e);
                std::process::exit(1);
            });
            writeln_safe(&json);
        }
    }
}

async fn run_read(
    key: &str,
    output: OutputFormat,
    copy: bool,
    open: bool,
    user_agent: Option<String>,
) {
    let Some(essay) = catalog::find(key) else {
        eprintln!("Unknown essay: {}", key);
        eprintln!("Run `essaykit list` to see the catalog.");
        std::process::exit(2);
    };

    let mut builder = Reader::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    let reader = builder.build();

    // Loading placeholder while the one suspension point resolves
    eprintln!("Loading {}...", essay.title);

    let mut view = DetailView::new(*essay);
    match view.resolve(&reader).await {
        DetailState::Loaded(content) => {
            let rendered = match output {
                OutputFormat::Md => format_detail(content),
                OutputFormat::Json => serde_json::to_string_pretty(content).unwrap_or_else(|e| {
                    eprintln!("Error serializing essay: {}", e);
                    std::process::exit(1);
                }),
            };
            writeln_safe(&rendered);

            if copy {
                copy_to_clipboard(&content.markdown);
            }
            if open {
                open_in_browser(&content.url);
            }
        }
        DetailState::Failed(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        DetailState::Loading => unreachable!("resolve settles the view"),
    }
}

/// Format the list view: one row per essay, keyed by URL, in catalog order
fn format_list(essays: &[EssayRef]) -> String {
    essays
        .iter()
        .enumerate()
        .map(|(i, essay)| format!("{}. {} ({})", i + 1, essay.title, essay.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the detail view: metadata panel as frontmatter, then the content
fn format_detail(essay: &FormattedEssay) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("author: {}\n", AUTHOR));
    output.push_str(&format!("topics: {}\n", TOPICS.join(", ")));
    output.push_str(&format!("source: {}\n", essay.url));
    output.push_str(&format!("words: {}\n", essay.word_count));
    output.push_str(&format!("read_minutes: {}\n", essay.read_minutes));
    output.push_str("---\n");
    output.push_str(&essay.markdown);

    output
}

fn copy_to_clipboard(content: &str) {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            eprintln!("Clipboard unavailable: {}", e);
            return;
        }
    };
    match clipboard.set_text(content) {
        Ok(()) => eprintln!("Copied essay to clipboard."),
        Err(e) => eprintln!("Clipboard error: {}", e),
    }
}

fn open_in_browser(url: &str) {
    match open::that(url) {
        Ok(()) => eprintln!("Opened {} in the browser.", url),
        Err(e) => eprintln!("Failed to open browser: {}", e),
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_one_row_per_essay() {
        let output = format_list(ESSAYS);
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), ESSAYS.len());

        for (i, essay) in ESSAYS.iter().enumerate() {
            assert!(rows[i].starts_with(&format!("{}. ", i + 1)));
            assert!(rows[i].contains(essay.title));
            assert!(rows[i].contains(essay.url));
        }
    }

    #[test]
    fn test_format_detail_metadata_panel() {
        let essay = FormattedEssay {
            title: "How to Start a Startup".to_string(),
            url: "http://www.paulgraham.com/start.html".to_string(),
            markdown: "# How to Start a Startup\n\n> *Want to start one?*".to_string(),
            word_count: 4,
            read_minutes: 1,
        };

        let output = format_detail(&essay);

        assert!(output.starts_with("---\n"));
        assert!(output.contains("author: Paul Graham\n"));
        assert!(output.contains("topics: Startups, Technology, Philosophy\n"));
        assert!(output.contains("source: http://www.paulgraham.com/start.html\n"));
        assert!(output.contains("words: 4\n"));
        assert!(output.contains("read_minutes: 1\n"));
        assert!(output.ends_with("---\n# How to Start a Startup\n\n> *Want to start one?*"));
    }

    #[test]
    fn test_list_json_round_trips() {
        let json = serde_json::to_string_pretty(ESSAYS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), ESSAYS.len());
        assert_eq!(value[0]["url"], ESSAYS[0].url);
    }
}
