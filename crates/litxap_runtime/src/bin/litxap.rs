//! litxap CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use litxap_lexicon::MapDictionary;
use litxap_runtime::{Annotator, AnnotatorConfig, OutputFormat, Repl, load_dictionary};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    format: Option<OutputFormat>,
    names: Vec<String>,
    no_numbers: bool,
    no_light_verbs: bool,
    eval: Vec<String>,
    // Logging flags
    verbose: bool,
    trace: bool,
}

impl CliConfig {
    fn log_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    fn annotator_config(&self) -> AnnotatorConfig {
        AnnotatorConfig::new()
            .with_format(self.format.unwrap_or_default())
            .with_numbers(!self.no_numbers)
            .with_light_verbs(!self.no_light_verbs)
            .with_custom_words(self.names.iter().cloned())
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--trace" => config.trace = true,
            "--no-numbers" => config.no_numbers = true,
            "--no-light-verbs" => config.no_light_verbs = true,
            flag @ ("-f" | "--format") => {
                config.format = Some(value(args, &mut i, flag)?.parse()?);
            }
            flag @ ("-n" | "--names") => {
                config.names.extend(
                    value(args, &mut i, flag)?
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(String::from),
                );
            }
            flag @ ("-e" | "--eval") => config.eval.push(value(args, &mut i, flag)?.to_string()),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("litxap {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut dictionary = MapDictionary::new();
    for file in &config.files {
        dictionary.extend(&load_dictionary(file)?);
    }

    let annotator = Annotator::new(config.annotator_config(), [dictionary]);

    if !config.eval.is_empty() {
        for line in &config.eval {
            println!("{}", annotator.annotate(line)?);
        }
        return Ok(());
    }

    let mut repl = Repl::new(annotator)?;
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mlitxap\x1b[0m - Stress and syllable annotation for Na'vi text

\x1b[1mUSAGE:\x1b[0m
    litxap [OPTIONS] [DICTIONARY FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [DICTIONARY FILES...]    Dictionaries to load, one KEY = NOTATION per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -f, --format FMT       Output format: bbcode, html, discord or json
    -n, --names LIST       Comma-separated proper names (ta-*mu, -nor)
    --no-numbers           Do not recognize numerals
    --no-light-verbs       Do not destress si in light verbs
    -e, --eval LINE        Annotate LINE and exit (repeatable)

\x1b[1mLOGGING:\x1b[0m
    -v, --verbose          Log dictionary loading and destressing
    --trace                Log every alignment attempt

\x1b[1mEXAMPLES:\x1b[0m
    litxap words.txt                          Start the REPL
    litxap -f html -e \"Kaltxì, ma tsmukan!\" words.txt
    litxap -n \"Ney-*ti-ri,Tsu-*'tey\" words.txt more.txt

\x1b[1mREPL COMMANDS:\x1b[0m
    :format [FMT]          Show or set the output format
    :lookup WORD           List every entry for a word
    :help                  Show help
    Ctrl+D                 Exit"
    );
}
