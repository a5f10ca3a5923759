//! Annotating lines with a configured dictionary chain.

use litxap_annotate::{BbCode, CompactHtml, DiscordMarkdown, Line, LineFormatter, run_line};
use litxap_lexicon::{CustomWords, Dictionary, Entry, MultiDictionary, NumberDictionary};
use tracing::debug;

use crate::config::{AnnotatorConfig, OutputFormat};
use crate::error::Result;

/// Runs lines through the dictionaries and renders them in the configured
/// format.
///
/// The dictionary chain is the loaded dictionaries in order, then the
/// configured proper names, then numerals.
#[derive(Debug)]
pub struct Annotator {
    dictionary: MultiDictionary,
    config: AnnotatorConfig,
}

impl Annotator {
    /// Creates an annotator over `dictionaries`.
    pub fn new<I, D>(config: AnnotatorConfig, dictionaries: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Dictionary + 'static,
    {
        let mut dictionary = MultiDictionary::new();
        for source in dictionaries {
            dictionary.push(source);
        }
        if !config.custom_words.is_empty() {
            dictionary.push(CustomWords::new(config.custom_words.as_slice()));
        }
        if config.numbers {
            dictionary.push(NumberDictionary::new());
        }

        debug!(
            sources = dictionary.len(),
            format = %config.format,
            light_verbs = config.light_verbs,
            "created annotator"
        );
        Self { dictionary, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Returns the dictionary chain.
    #[must_use]
    pub const fn dictionary(&self) -> &MultiDictionary {
        &self.dictionary
    }

    /// Changes the output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.config.format = format;
    }

    /// Looks up every sense of `word`. Unknown words have none.
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary fails.
    pub fn lookup(&self, word: &str) -> Result<Vec<Entry>> {
        let word = word.to_lowercase();
        match self.dictionary.lookup(&word) {
            Ok(entries) => Ok(entries),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(litxap_annotate::Error::lookup(word, err).into()),
        }
    }

    /// Splits and annotates `text`, destressing light verbs if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary fails.
    pub fn annotate_line(&self, text: &str) -> Result<Line> {
        let line = run_line(text, &self.dictionary)?;
        if !self.config.light_verbs {
            return Ok(line);
        }
        Ok(line.unstress_light_verbs(&self.dictionary)?.into_owned())
    }

    /// Renders an annotated line in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render(&self, line: &Line) -> Result<String> {
        let formatter: &dyn LineFormatter = match self.config.format {
            OutputFormat::BbCode => &BbCode,
            OutputFormat::Html => &CompactHtml,
            OutputFormat::Discord => &DiscordMarkdown,
            OutputFormat::Json => return Ok(serde_json::to_string(line)?),
        };
        Ok(line.format(formatter, &self.config.selections))
    }

    /// Annotates and renders `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary fails or JSON encoding fails.
    pub fn annotate(&self, text: &str) -> Result<String> {
        let line = self.annotate_line(text)?;
        self.render(&line)
    }
}
