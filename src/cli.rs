// Command line front end for chardiff.
//
// Each input side comes from a file or an inline string; a side given
// neither way is absent, which the engine treats differently from empty.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::engine::{self, DiffOptions};
use crate::io::{self as file_io, ReadError};
use crate::render::{self, Mode};
use crate::segment::Segments;

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Character-level diff with bracket-notation output.
#[derive(Parser, Debug)]
#[command(
    name = "chardiff",
    version,
    about = "Character-level diff engine",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output diff stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Render the diff in bracket notation.
    Render(RenderArgs),
    /// Print the diff segments as JSON.
    Segments(SegmentsArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// First (old) file.
    #[arg(long, value_hint = clap::ValueHint::FilePath, conflicts_with = "old_text")]
    old: Option<PathBuf>,

    /// First (old) sequence given inline.
    #[arg(long = "old-text")]
    old_text: Option<String>,

    /// Second (new) file.
    #[arg(long, value_hint = clap::ValueHint::FilePath, conflicts_with = "new_text")]
    new: Option<PathBuf>,

    /// Second (new) sequence given inline.
    #[arg(long = "new-text")]
    new_text: Option<String>,

    /// Compare with a full LCS table instead of stripping the shared
    /// prefix and suffix first.
    #[arg(long = "no-strip")]
    no_strip: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Rendering mode: full, compact or full:N.
    #[arg(long, short = 'm', default_value = "full")]
    mode: String,

    /// Output file (default: stdout).
    #[arg(long, short = 'o', value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SegmentsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Render,
    Segments,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Absent,
    File(PathBuf),
    Inline(String),
}

impl Source {
    fn from_args(path: Option<PathBuf>, text: Option<String>) -> Self {
        match (path, text) {
            (Some(p), _) => Self::File(p),
            (None, Some(t)) => Self::Inline(t),
            (None, None) => Self::Absent,
        }
    }

    fn load(&self) -> Result<Option<String>, ReadError> {
        match self {
            Self::Absent => Ok(None),
            Self::File(p) => file_io::read_sequence(Some(p.as_path())),
            Self::Inline(t) => Ok(Some(t.clone())),
        }
    }
}

struct Options {
    command: Command,
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    old: Source,
    new: Source,
    mode: String,
    output_file: Option<PathBuf>,
    pretty: bool,
    strip_affixes: bool,
}

fn resolve_options(cli: Cli) -> Options {
    let base = |command| Options {
        command,
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
        old: Source::Absent,
        new: Source::Absent,
        mode: Mode::Full.to_string(),
        output_file: None,
        pretty: false,
        strip_affixes: true,
    };

    match cli.command {
        Cmd::Render(args) => Options {
            old: Source::from_args(args.input.old, args.input.old_text),
            new: Source::from_args(args.input.new, args.input.new_text),
            mode: args.mode,
            output_file: args.output,
            strip_affixes: !args.input.no_strip,
            ..base(Command::Render)
        },
        Cmd::Segments(args) => Options {
            old: Source::from_args(args.input.old, args.input.old_text),
            new: Source::from_args(args.input.new, args.input.new_text),
            pretty: args.pretty,
            strip_affixes: !args.input.no_strip,
            ..base(Command::Segments)
        },
        Cmd::Config => base(Command::Config),
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("chardiff".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn load_inputs(opts: &Options) -> Result<(Option<String>, Option<String>), i32> {
    let load = |src: &Source| {
        src.load().map_err(|e| {
            eprintln!("chardiff: {e}");
            1
        })
    };
    Ok((load(&opts.old)?, load(&opts.new)?))
}

fn diff_options(opts: &Options) -> DiffOptions {
    DiffOptions {
        strip_affixes: opts.strip_affixes,
    }
}

fn print_stats(opts: &Options, segments: &Segments) {
    let stats = segments.stats();
    if opts.json_output {
        let json = serde_json::json!({
            "unchanged": stats.unchanged,
            "deleted": stats.deleted,
            "inserted": stats.inserted,
            "segments": stats.segments,
            "edit_distance": stats.edit_distance(),
        });
        match serde_json::to_string_pretty(&json) {
            Ok(s) => eprintln!("{s}"),
            Err(e) => eprintln!("chardiff: stats: {e}"),
        }
    } else if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "chardiff: {} segments, {} unchanged, {} deleted, {} inserted",
            stats.segments, stats.unchanged, stats.deleted, stats.inserted
        );
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, i32> {
    match &opts.output_file {
        None => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        Some(path) => {
            if path.exists() && !opts.force {
                eprintln!(
                    "chardiff: output file exists, use -f to overwrite: {}",
                    path.display()
                );
                return Err(1);
            }
            match File::create(path) {
                Ok(f) => Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f))),
                Err(e) => {
                    eprintln!("chardiff: output file: {}: {e}", path.display());
                    Err(1)
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Render command
// ---------------------------------------------------------------------------

fn cmd_render(opts: &Options) -> i32 {
    let mode = match opts.mode.parse::<Mode>() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("chardiff: {e}");
            return 1;
        }
    };
    let (old, new) = match load_inputs(opts) {
        Ok(v) => v,
        Err(code) => return code,
    };
    if old.is_none() && new.is_none() {
        eprintln!("chardiff: nothing to compare (no --old/--old-text and no --new/--new-text)");
        return 1;
    }

    let segments =
        engine::diff_segments_with_options(old.as_deref(), new.as_deref(), &diff_options(opts));
    let rendered = render::render(segments.as_slice(), mode);

    let mut out = match open_output(opts) {
        Ok(w) => w,
        Err(code) => return code,
    };
    if let Err(e) = writeln!(out, "{rendered}").and_then(|_| out.flush()) {
        eprintln!("chardiff: write: {e}");
        return 1;
    }

    print_stats(opts, &segments);
    0
}

// ---------------------------------------------------------------------------
// Segments command
// ---------------------------------------------------------------------------

fn segments_json(segments: &Segments) -> serde_json::Value {
    serde_json::Value::Array(
        segments
            .iter()
            .map(|s| {
                serde_json::json!({
                    "kind": s.kind().as_str(),
                    "position": s.position(),
                    "length": s.len(),
                    "text": s.text(),
                })
            })
            .collect(),
    )
}

fn cmd_segments(opts: &Options) -> i32 {
    let (old, new) = match load_inputs(opts) {
        Ok(v) => v,
        Err(code) => return code,
    };
    let segments =
        engine::diff_segments_with_options(old.as_deref(), new.as_deref(), &diff_options(opts));

    let json = segments_json(&segments);
    let text = if opts.pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    let text = match text {
        Ok(t) => t,
        Err(e) => {
            eprintln!("chardiff: segments: {e}");
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "{text}") {
        eprintln!("chardiff: write: {e}");
        return 1;
    }

    print_stats(opts, &segments);
    0
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("chardiff version {version} (Rust)");

    let parallel = cfg!(feature = "parallel") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("PARALLEL={parallel}");
    eprintln!("DEFAULT_MODE={}", Mode::default());
    eprintln!("STRIP_AFFIXES={}", DiffOptions::default().strip_affixes as u8);
    eprintln!("UNIT=unicode-scalar");
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn log_filter(opts: &Options) -> &'static str {
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(&opts)))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match opts.command {
        Command::Render => cmd_render(&opts),
        Command::Segments => cmd_segments(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_opts(args: &[&str]) -> Options {
        let argv: Vec<String> = std::iter::once("chardiff".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let cli = Cli::try_parse_from(argv).expect("cli parse failed");
        resolve_options(cli)
    }

    #[test]
    fn render_subcommand_maps_correctly() {
        let opts = parse_opts(&[
            "render",
            "--old",
            "a.txt",
            "--new-text",
            "hello",
            "--mode",
            "full:3",
            "--output",
            "out.txt",
        ]);
        assert_eq!(opts.command, Command::Render);
        assert_eq!(opts.old, Source::File(PathBuf::from("a.txt")));
        assert_eq!(opts.new, Source::Inline("hello".to_string()));
        assert_eq!(opts.mode, "full:3");
        assert_eq!(opts.output_file, Some(PathBuf::from("out.txt")));
        assert!(opts.strip_affixes);
    }

    #[test]
    fn missing_side_is_absent() {
        let opts = parse_opts(&["render", "--new-text", "x"]);
        assert_eq!(opts.old, Source::Absent);
        assert_eq!(opts.mode, "full");
    }

    #[test]
    fn file_and_text_conflict() {
        let argv = ["chardiff", "render", "--old", "a", "--old-text", "b"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn segments_subcommand_maps_correctly() {
        let opts = parse_opts(&[
            "segments",
            "--old-text",
            "a",
            "--new",
            "b.txt",
            "--pretty",
            "--no-strip",
        ]);
        assert_eq!(opts.command, Command::Segments);
        assert!(opts.pretty);
        assert!(!opts.strip_affixes);
        assert_eq!(opts.new, Source::File(PathBuf::from("b.txt")));
    }

    #[test]
    fn global_flags() {
        let opts = parse_opts(&["--force", "--json", "render", "--old-text", "a"]);
        assert!(opts.force);
        assert!(opts.json_output);
    }

    #[test]
    fn verbose_is_capped() {
        let opts = parse_opts(&["-v", "-v", "-v", "config"]);
        assert_eq!(opts.verbose, 2);
        assert_eq!(log_filter(&opts), "debug");
    }

    #[test]
    fn quiet_lowers_filter() {
        let opts = parse_opts(&["--quiet", "config"]);
        assert_eq!(log_filter(&opts), "error");
    }

    #[test]
    fn config_command_maps() {
        assert_eq!(parse_opts(&["config"]).command, Command::Config);
    }

    #[test]
    fn segments_json_shape() {
        let segs = engine::diff_segments(Some("ab"), Some("ac"));
        let json = segments_json(&segs);
        assert_eq!(
            json,
            serde_json::json!([
                {"kind": "unchanged", "position": 0, "length": 1, "text": "a"},
                {"kind": "deleted", "position": 1, "length": 1, "text": "b"},
                {"kind": "inserted", "position": 1, "length": 1, "text": "c"},
            ])
        );
    }

    #[test]
    fn fuzz_entry_tolerates_garbage() {
        fuzz_try_parse_args(&["--bogus".to_string()]);
        fuzz_try_parse_args(&["render".to_string(), "--mode".to_string()]);
    }
}
