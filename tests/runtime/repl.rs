//! Integration tests for the REPL driven by a scripted editor

use litxap_lexicon::MapDictionary;
use litxap_runtime::{
    Annotator, AnnotatorConfig, LineEditor, OutputFormat, ReadResult, Reply, Repl, Result,
};

struct Script {
    lines: std::vec::IntoIter<String>,
    history: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn annotator() -> Annotator {
    let dictionary = MapDictionary::from_entries([
        ("kaltxì", "kal.*txì: : hello"),
        ("ma", "ma"),
        ("tsamsiyu", "tsam.*s··i: -yu: warrior"),
    ])
    .unwrap();
    Annotator::new(AnnotatorConfig::default(), [dictionary])
}

#[test]
fn session_changes_format() {
    let mut repl = Repl::with_editor(Script::new(&[]), annotator()).without_banner();

    assert_eq!(
        repl.eval("Kaltxì, ma tsamsiyu!").unwrap(),
        Reply::Output("Kal[u]txì[/u], ma tsam[u]si[/u]yu!".to_string())
    );
    repl.eval(":format discord").unwrap();
    assert_eq!(
        repl.eval("Kaltxì, ma tsamsiyu!").unwrap(),
        Reply::Output("Kal__txì__, ma tsam__si__yu!".to_string())
    );
}

#[test]
fn lookup_lists_senses() {
    let mut repl = Repl::with_editor(Script::new(&[]), annotator());
    assert_eq!(
        repl.eval(":lookup tsamsiyu").unwrap(),
        Reply::Output("tsam.*s··i: -yu: warrior".to_string())
    );
}

#[test]
fn run_reads_until_end_of_input() {
    let script = Script::new(&["Kaltxì", ":format json", "", "ma"]);
    let mut repl = Repl::with_editor(script, annotator()).without_banner();
    repl.run().unwrap();

    assert_eq!(repl.editor().history, ["Kaltxì", ":format json", "ma"]);
    assert_eq!(repl.annotator().config().format, OutputFormat::Json);
}
