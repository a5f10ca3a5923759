//! Configuration for the annotator.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How annotated lines are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// BBCode for forums: `[u]` around stressed syllables.
    #[default]
    BbCode,
    /// Compact HTML with `<span>` classes and `<u>` around stressed syllables.
    Html,
    /// Discord markdown: `__` around stressed syllables.
    Discord,
    /// The annotated line itself, as JSON.
    Json,
}

impl OutputFormat {
    /// Every format, in the order they are listed in help output.
    pub const ALL: [Self; 4] = [Self::BbCode, Self::Html, Self::Discord, Self::Json];

    /// Returns the name the format is selected by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BbCode => "bbcode",
            Self::Html => "html",
            Self::Discord => "discord",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| format!("unknown format: {s} (expected bbcode, html, discord or json)"))
    }
}

/// Configuration for an [`Annotator`](crate::Annotator).
///
/// Controls which dictionaries are chained, whether light verbs are
/// destressed and how lines are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Output format for annotated lines.
    pub format: OutputFormat,

    /// Destress *si* in light-verb constructions.
    pub light_verbs: bool,

    /// Answer numeral words after the loaded dictionaries.
    pub numbers: bool,

    /// Proper names to recognize, in the custom-name notation
    /// (`-` separates syllables, a leading `-` means unstressed).
    pub custom_words: Vec<String>,

    /// Stress selections by part index, for words with several matches.
    pub selections: HashMap<usize, usize>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::BbCode,
            light_verbs: true,
            numbers: true,
            custom_words: Vec::new(),
            selections: HashMap::new(),
        }
    }
}

impl AnnotatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that only consults the loaded dictionaries,
    /// without numerals or light-verb destressing.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            light_verbs: false,
            numbers: false,
            ..Self::default()
        }
    }

    /// Creates a configuration rendering compact HTML.
    #[must_use]
    pub fn html() -> Self {
        Self {
            format: OutputFormat::Html,
            ..Self::default()
        }
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables light-verb destressing.
    #[must_use]
    pub const fn with_light_verbs(mut self, enabled: bool) -> Self {
        self.light_verbs = enabled;
        self
    }

    /// Enables or disables the numeral dictionary.
    #[must_use]
    pub const fn with_numbers(mut self, enabled: bool) -> Self {
        self.numbers = enabled;
        self
    }

    /// Adds proper names.
    #[must_use]
    pub fn with_custom_words<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_words.extend(names.into_iter().map(Into::into));
        self
    }

    /// Selects match `selection` for the part at `part`.
    #[must_use]
    pub fn with_selection(mut self, part: usize, selection: usize) -> Self {
        self.selections.insert(part, selection);
        self
    }
}
