//! mushaf - Mushaf layout inspector

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mushaf::{Corpus, LayoutIndex, SurahCatalog, VerseKey, WordStore};

#[derive(Parser)]
#[command(name = "mushaf")]
#[command(version, about = "Inspect a Mushaf layout corpus", long_about = None)]
#[command(after_help = "EXAMPLES:
    mushaf corpus.json info            Show layout metadata
    mushaf corpus.json page 1          Render page 1
    mushaf corpus.json locate 2:255    Find the page holding a verse
    mushaf corpus.json word 104        Show a word's verse and page")]
struct Cli {
    /// Corpus document (JSON)
    #[arg(value_name = "CORPUS")]
    corpus: String,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show layout metadata and table sizes
    Info,
    /// Render a page document
    Page {
        #[arg(value_name = "NUMBER")]
        number: u16,
    },
    /// Locate a verse
    Locate {
        #[arg(value_name = "SURAH:AYAH", value_parser = parse_verse)]
        verse: VerseKey,

        /// List every line the verse spans, not just the first
        #[arg(long)]
        all: bool,
    },
    /// Show a word's text, verse, and containing page
    Word {
        #[arg(value_name = "ID")]
        id: u32,
    },
}

fn parse_verse(s: &str) -> Result<VerseKey, String> {
    s.parse()
        .map_err(|_| format!("expected SURAH:AYAH, got {s:?}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mushaf::Result<()> {
    let corpus = Corpus::load(&cli.corpus)?;

    match cli.command {
        Command::Info => {
            let info = corpus.info();
            if cli.json {
                let value = serde_json::json!({
                    "layout": info,
                    "words": corpus.word_store().len(),
                    "surahs": corpus.surahs().len(),
                    "pages": corpus.layout_index().page_numbers().count(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                if !info.name.is_empty() {
                    println!("Layout: {}", info.name);
                }
                println!("Pages: {}", info.total_pages);
                println!("Lines per page: {}", info.lines_per_page);
                println!("Words: {}", corpus.word_store().len());
                println!("Surahs: {}", corpus.surahs().len());
            }
        }

        Command::Page { number } => {
            let page = corpus.renderer().render_page(number)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                for line in &page.lines {
                    println!("{:2}  {}", line.line, line.content);
                }
            }
        }

        Command::Locate { verse, all } => {
            let resolver = corpus.resolver();
            if all {
                let locations = resolver.locate_verse_all(verse)?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&locations)?);
                } else {
                    for location in locations {
                        println!("{verse} page {} line {}", location.page, location.line);
                    }
                }
            } else {
                let location = resolver.locate_verse(verse)?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&location)?);
                } else {
                    println!("{verse} page {} line {}", location.page, location.line);
                }
            }
        }

        Command::Word { id } => {
            let word = corpus.word(id)?;
            let page = corpus.resolver().locate_word(id)?;
            if cli.json {
                let value = serde_json::json!({
                    "word": word,
                    "page": page,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}  ({} word {}, page {page})", word.text, word.key, word.position);
            }
        }
    }

    Ok(())
}
