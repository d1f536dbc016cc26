use std::fs::File;
use std::io::{self, prelude::*, stdin, BufReader};
use std::path::PathBuf;

use acscan::{AcTrie, AcTrieBuilder, Match};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgColor {
    Never,
    Always,
    Auto,
}

impl From<ArgColor> for ColorChoice {
    fn from(color: ArgColor) -> Self {
        match color {
            ArgColor::Never => Self::Never,
            ArgColor::Always => Self::Always,
            ArgColor::Auto => Self::Auto,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "acfind",
    about = "Prints lines containing any of the given patterns.",
    disable_help_flag = true
)]
struct Opt {
    /// Match patterns separated with new lines.
    #[arg(short)]
    patterns: Option<String>,

    /// A filename containing patterns, one per line.
    #[arg(short = 'f')]
    pattern_file: Option<PathBuf>,

    /// Ignores case distinctions in patterns and input.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Suppresses printing filenames.
    #[arg(short = 'h', long)]
    no_filename: bool,

    /// Prints line numbers.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Highlights the first match of each line.
    #[arg(long, value_enum, default_value_t = ArgColor::Never)]
    color: ArgColor,

    /// Prints help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// File paths. Reads the standard input when omitted.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// Searches `line` with the given automaton and prints it to `stream` when a
/// pattern occurs. Lines without a match print nothing.
fn find_and_output(
    trie: &AcTrie,
    line: &[u8],
    filename: Option<&str>,
    line_no: Option<usize>,
    color: ArgColor,
    stream: &mut StandardStream,
) -> io::Result<()> {
    let Some(m) = trie.find(line) else {
        return Ok(());
    };
    if let Some(filename) = filename {
        write!(stream, "{filename}:")?;
    }
    if let Some(line_no) = line_no {
        write!(stream, "{line_no}:")?;
    }
    match color {
        ArgColor::Never => stream.write_all(line)?,
        ArgColor::Always | ArgColor::Auto => write_highlighted(line, m, stream)?,
    }
    writeln!(stream)
}

fn write_highlighted(line: &[u8], m: Match, stream: &mut StandardStream) -> io::Result<()> {
    stream.write_all(&line[..m.start()])?;
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    stream.write_all(&line[m.start()..m.end()])?;
    stream.reset()?;
    stream.write_all(&line[m.end()..])
}

/// Collects patterns from `-f` and `-p`, skipping empty lines.
fn load_patterns(opt: &Opt) -> Result<Vec<String>> {
    let mut patterns = vec![];
    if let Some(path) = &opt.pattern_file {
        let file = File::open(path)
            .with_context(|| format!("cannot open pattern file {}", path.display()))?;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("cannot read {}", path.display()))?;
            if !line.is_empty() {
                patterns.push(line);
            }
        }
    }
    if let Some(pats_string) = &opt.patterns {
        for pattern in pats_string.split('\n') {
            if !pattern.is_empty() {
                patterns.push(pattern.to_string());
            }
        }
    }
    Ok(patterns)
}

fn search_reader<R>(
    trie: &AcTrie,
    reader: R,
    filename: Option<&str>,
    opt: &Opt,
    stdout: &mut StandardStream,
) -> Result<()>
where
    R: BufRead,
{
    for (i, line) in reader.split(b'\n').enumerate() {
        let line_number = opt.line_number.then_some(i + 1);
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(file = filename.unwrap_or("(standard input)"), %err, "read failed");
                break;
            }
        };
        find_and_output(trie, &line, filename, line_number, opt.color, stdout)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acfind=info,acscan=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let opt = Opt::parse();

    let patterns = load_patterns(&opt)?;
    if patterns.is_empty() {
        info!("no patterns given; nothing can match");
    }
    let trie = AcTrieBuilder::new()
        .case_insensitive(opt.ignore_case)
        .build(&patterns)
        .context("cannot build the automaton")?;
    debug!(
        num_patterns = trie.num_patterns(),
        num_states = trie.num_states(),
        heap_bytes = trie.heap_bytes(),
        "automaton ready"
    );

    let mut stdout = StandardStream::stdout(opt.color.into());

    if opt.files.is_empty() {
        search_reader(&trie, stdin().lock(), None, &opt, &mut stdout)?;
    }

    for path in &opt.files {
        match File::open(path) {
            Ok(file) => {
                let filename = path.to_str().filter(|_| !opt.no_filename);
                search_reader(&trie, BufReader::new(file), filename, &opt, &mut stdout)?;
            }
            Err(err) => {
                error!(file = %path.display(), %err, "cannot open");
            }
        }
    }

    Ok(())
}
