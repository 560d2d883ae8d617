//! MysTeX CLI - escape text for LaTeX output

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use mystex::{
    add_index_entries, escape_with, latex_image_width, parse_index_entries, ConversionError,
    ConversionResult, EscapeMode, EscapeOptions, ImageWidth, IndexTarget,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mystex")]
#[command(version)]
#[command(about = "MysTeX - Unicode-aware text and math escaping for LaTeX output", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Escaping mode (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// TOML file with escaping options
    #[arg(short, long, global = true)]
    config: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Escape prose, switching to inline math where needed
    Text {
        /// Input file path
        input: Option<String>,
    },
    /// Escape content of a math environment
    Math {
        /// Input file path
        input: Option<String>,
    },
    /// Escape a literal link target
    Href {
        /// Input file path
        input: Option<String>,
    },
    /// Replace no-break spaces and remove zero-width characters
    Whitespace {
        /// Input file path
        input: Option<String>,

        /// Replacement for no-break spaces
        #[arg(long)]
        nbsp: Option<String>,
    },
    /// Print \index directives for a JSON array of index entries
    Index {
        /// Input file path
        input: Option<String>,
    },
    /// Convert an image width (e.g. 50, 0.5, 50%, 400px) to a \linewidth fraction
    Width {
        /// Width value
        value: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Text,
    Math,
    Href,
    Whitespace,
}

#[cfg(feature = "cli")]
impl From<ModeArg> for EscapeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => EscapeMode::Text,
            ModeArg::Math => EscapeMode::Math,
            ModeArg::Href => EscapeMode::Href,
            ModeArg::Whitespace => EscapeMode::Whitespace,
        }
    }
}

/// Collects each `\index` directive on its own line.
#[cfg(feature = "cli")]
#[derive(Default)]
struct DirectiveLines {
    lines: Vec<String>,
    has_index: bool,
}

#[cfg(feature = "cli")]
impl IndexTarget for DirectiveLines {
    fn write(&mut self, latex: &str) {
        self.lines.push(latex.to_string());
    }

    fn set_has_index(&mut self) {
        self.has_index = true;
    }
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> ConversionResult<()> {
    let mut options = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => EscapeOptions::default(),
    };

    let (input_file, result) = match cli.command {
        None => {
            if let Some(mode) = cli.mode {
                options.mode = mode.into();
            }
            (cli.input_file, None)
        }
        Some(Commands::Text { input }) => {
            options.mode = EscapeMode::Text;
            (input, None)
        }
        Some(Commands::Math { input }) => {
            options.mode = EscapeMode::Math;
            (input, None)
        }
        Some(Commands::Href { input }) => {
            options.mode = EscapeMode::Href;
            (input, None)
        }
        Some(Commands::Whitespace { input, nbsp }) => {
            options.mode = EscapeMode::Whitespace;
            if let Some(nbsp) = nbsp {
                options.nbsp = nbsp;
            }
            (input, None)
        }
        Some(Commands::Index { input }) => {
            let entries = parse_index_entries(&read_input(input.as_deref())?)?;
            let mut directives = DirectiveLines::default();
            add_index_entries(&entries, &mut directives);
            log::info!("index package needed: {}", directives.has_index);
            (None, Some(directives.lines.join("\n")))
        }
        Some(Commands::Width { value }) => {
            let width = match value.parse::<f64>() {
                Ok(n) => ImageWidth::Number(n),
                Err(_) => ImageWidth::Text(value),
            };
            (None, Some(latex_image_width(Some(&width))))
        }
    };

    let result = match result {
        Some(result) => result,
        None => {
            let input = read_input(input_file.as_deref())?;
            escape_with(strip_line_ending(&input), &options)
        }
    };

    write_output(cli.output.as_deref(), &result)
}

/// Drop the single line ending an editor or `echo` adds.
#[cfg(feature = "cli")]
fn strip_line_ending(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

#[cfg(feature = "cli")]
fn load_config(path: &str) -> ConversionResult<EscapeOptions> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| ConversionError::Config {
        message: e.to_string(),
        path: Some(path.to_string()),
    })
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ConversionResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> ConversionResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mystex --features cli");
    eprintln!("  mystex [OPTIONS] [INPUT_FILE]");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("a_b\n"), "a_b");
        assert_eq!(strip_line_ending("a_b\r\n"), "a_b");
        assert_eq!(strip_line_ending("a_b"), "a_b");
        // only one line ending is removed
        assert_eq!(strip_line_ending("a\n\n"), "a\n");
    }

    #[test]
    fn test_crlf_input_escapes_cleanly() {
        let options = EscapeOptions::text();
        assert_eq!(escape_with(strip_line_ending("\u{03B1}\r\n"), &options), "$\\alpha$");
    }
}
