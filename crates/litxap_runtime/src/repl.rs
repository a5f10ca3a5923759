//! The interactive annotation loop.

use std::io::{self, Write};

use crate::annotator::Annotator;
use crate::config::OutputFormat;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Error, Result};

const COMMANDS: &[&str] = &[":format", ":lookup", ":help"];

const HELP: &str = "\
Type a line of Na'vi to annotate it.

Commands:
    :format [FMT]   Show or set the output format (bbcode, html, discord, json)
    :lookup WORD    List every entry for a word
    :help           Show this help
    Ctrl+D          Exit";

/// What the REPL has to say about one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Empty,
    /// Output for stdout, such as an annotated line.
    Output(String),
    /// A problem with the input, for stderr.
    Invalid(String),
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Annotates lines and answers lookups.
    annotator: Annotator,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(annotator: Annotator) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, annotator))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, annotator: Annotator) -> Self {
        let keywords = COMMANDS
            .iter()
            .copied()
            .chain(OutputFormat::ALL.iter().map(|f| f.name()))
            .map(String::from)
            .collect();
        editor.set_keywords(keywords);

        Self {
            editor,
            annotator,
            show_banner: true,
            prompt: "litxap> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the annotator.
    #[must_use]
    pub const fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    /// Returns the line editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!();
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Empty) => {}
            Ok(Reply::Output(text)) => println!("{text}"),
            Ok(Reply::Invalid(message)) => eprintln!("\x1b[33m{message}\x1b[0m"),
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line: a command, or text to annotate.
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary fails.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Reply::Empty);
        }
        if !input.starts_with(':') {
            return self.annotator.annotate(input).map(Reply::Output);
        }

        let (command, argument) = match input.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        match command {
            ":help" => Ok(Reply::Output(HELP.to_string())),
            ":format" if argument.is_empty() => Ok(Reply::Output(format!(
                "format: {}",
                self.annotator.config().format
            ))),
            ":format" => match argument.parse::<OutputFormat>() {
                Ok(format) => {
                    self.annotator.set_format(format);
                    Ok(Reply::Output(format!("format: {format}")))
                }
                Err(message) => Ok(Reply::Invalid(message)),
            },
            ":lookup" if argument.is_empty() => Ok(Reply::Invalid("usage: :lookup WORD".to_string())),
            ":lookup" => self.lookup(argument),
            _ => Ok(Reply::Invalid(format!(
                "unknown command: {command} (try :help)"
            ))),
        }
    }

    fn lookup(&self, word: &str) -> Result<Reply> {
        let entries = self.annotator.lookup(word)?;
        if entries.is_empty() {
            return Ok(Reply::Invalid(format!("no entries for \"{word}\"")));
        }

        let lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
        Ok(Reply::Output(lines.join("\n")))
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mlitxap\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a line to annotate it, :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}
