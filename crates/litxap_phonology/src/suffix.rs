//! Suffix application.
//!
//! Suffixes are attached one at a time to the end of a syllable sequence.
//! How a suffix joins the word depends on its shape: a vowel-initial suffix
//! takes the final consonant of the word as its onset (`uran` + `it` =
//! `ura.nit`), a lone consonant fuses into the last syllable (`po` + `r` =
//! `por`) and everything else becomes new syllables.
//!
//! Verbs built on the helper verb *si* keep their case suffixes in front of
//! *si*, while the participle and agent suffixes go after it.

use tracing::debug;

use crate::syllables::coda_of;

/// How a suffix joins the last syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reanalysis {
    /// New syllables after the word.
    Append,
    /// The final coda becomes the onset of the suffix.
    TakeCoda,
    /// A single consonant fused onto the last syllable.
    Fuse,
}

/// Where a suffix goes relative to the helper verb *si*.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiPlacement {
    /// In front of *si* (case endings, adpositions and most others).
    Before,
    /// After *si*.
    After,
    /// In place of *si*.
    Replace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SoundChange {
    None,
    /// A final `a` turns into `e` (nga + yä = nge.yä).
    Genitive,
    /// A final `i.a` takes the genitive as `i.ä`.
    IaGenitive,
    /// An `a` is inserted after a closed syllable (oeng + l = oe.ngal).
    Epenthesis,
}

/// A suffix and the way it attaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suffix {
    pieces: &'static [&'static str],
    reanalysis: Reanalysis,
    placement: SiPlacement,
    change: SoundChange,
}

impl Suffix {
    const fn new(pieces: &'static [&'static str], reanalysis: Reanalysis) -> Self {
        Self {
            pieces,
            reanalysis,
            placement: SiPlacement::Before,
            change: SoundChange::None,
        }
    }

    const fn placed(mut self, placement: SiPlacement) -> Self {
        self.placement = placement;
        self
    }

    const fn changing(mut self, change: SoundChange) -> Self {
        self.change = change;
        self
    }

    /// Looks up a known suffix by name.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        SUFFIXES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, suffix)| *suffix)
    }

    /// Returns where this suffix goes relative to *si*.
    #[must_use]
    pub const fn placement(&self) -> SiPlacement {
        self.placement
    }

    /// Attaches the suffix to the end of `syllables`.
    ///
    /// # Panics
    ///
    /// Panics if `syllables` is empty.
    pub fn apply(&self, syllables: &mut Vec<String>) {
        let mut stress = None;
        self.attach(syllables, &mut stress);
    }

    fn attach(&self, syllables: &mut Vec<String>, stress: &mut Option<usize>) {
        let n = syllables.len();
        assert!(n > 0, "cannot attach a suffix to an empty word");
        let last_index = n - 1;

        match self.change {
            SoundChange::None => {}
            SoundChange::Genitive => {
                if let Some(stem) = syllables[last_index].strip_suffix('a') {
                    syllables[last_index] = format!("{stem}e");
                }
            }
            SoundChange::IaGenitive => {
                if n >= 2 && syllables[last_index] == "a" && syllables[n - 2].ends_with('i') {
                    syllables[last_index] = "ä".to_string();
                    return;
                }
            }
            SoundChange::Epenthesis => {
                if let Some(coda) = coda_of(&syllables[last_index]) {
                    let last = &mut syllables[last_index];
                    last.truncate(last.len() - coda.len());
                    syllables.push(format!("{coda}a{}", self.pieces.concat()));
                    if *stress == Some(last_index) {
                        *stress = Some(last_index + 1);
                    }
                    return;
                }
            }
        }

        let mut pieces: Vec<String> = self.pieces.iter().map(|p| (*p).to_string()).collect();
        match self.reanalysis {
            Reanalysis::Append => {}
            Reanalysis::Fuse => {
                let first = pieces.remove(0);
                syllables[last_index].push_str(&first);
            }
            Reanalysis::TakeCoda => {
                if let Some(coda) = coda_of(&syllables[last_index]) {
                    let last = &mut syllables[last_index];
                    last.truncate(last.len() - coda.len());
                    pieces[0].insert_str(0, coda);
                }
            }
        }

        syllables.extend(pieces);
    }
}

const fn append(pieces: &'static [&'static str]) -> Suffix {
    Suffix::new(pieces, Reanalysis::Append)
}

const fn take_coda(pieces: &'static [&'static str]) -> Suffix {
    Suffix::new(pieces, Reanalysis::TakeCoda)
}

const fn fuse(pieces: &'static [&'static str]) -> Suffix {
    Suffix::new(pieces, Reanalysis::Fuse)
}

const SUFFIXES: &[(&str, Suffix)] = &[
    // Case
    ("l", fuse(&["l"]).changing(SoundChange::Epenthesis)),
    ("ìl", take_coda(&["ìl"])),
    ("t", fuse(&["t"])),
    ("ti", append(&["ti"])),
    ("it", take_coda(&["it"])),
    ("r", fuse(&["r"])),
    ("ru", append(&["ru"])),
    ("ur", take_coda(&["ur"])),
    ("ri", append(&["ri"])),
    ("ìri", take_coda(&["ì", "ri"])),
    ("yä", append(&["yä"]).changing(SoundChange::Genitive)),
    ("ye", append(&["ye"]).changing(SoundChange::Genitive)),
    ("y", fuse(&["y"]).changing(SoundChange::Genitive)),
    ("ä", take_coda(&["ä"]).changing(SoundChange::IaGenitive)),
    // Derivation and particles
    ("o", take_coda(&["o"])),
    ("pe", append(&["pe"])),
    ("sì", append(&["sì"])),
    ("to", append(&["to"])),
    ("ve", append(&["ve"])),
    ("tsyìp", append(&["tsyìp"])),
    ("fkeyk", append(&["fkeyk"])),
    ("tswo", append(&["tswo"]).placed(SiPlacement::Replace)),
    ("yu", append(&["yu"]).placed(SiPlacement::After)),
    ("a", take_coda(&["a"]).placed(SiPlacement::After)),
    // Adpositions
    ("äo", append(&["äo"])),
    ("eo", append(&["eo"])),
    ("fa", append(&["fa"])),
    ("few", append(&["few"])),
    ("fkip", append(&["fkip"])),
    ("fpi", append(&["fpi"])),
    ("ftu", append(&["ftu"])),
    ("ftumfa", append(&["ftum", "fa"])),
    ("ftuopa", append(&["ftu", "o", "pa"])),
    ("hu", append(&["hu"])),
    ("io", append(&["i", "o"])),
    ("ìlä", append(&["ì", "lä"])),
    ("ka", append(&["ka"])),
    ("kam", append(&["kam"])),
    ("kay", append(&["kay"])),
    ("ken", append(&["ken"])),
    ("kip", append(&["kip"])),
    ("krrka", append(&["krr", "ka"])),
    ("kxamlä", append(&["kxam", "lä"])),
    ("lisre", append(&["li", "sre"])),
    ("lok", append(&["lok"])),
    ("luke", append(&["lu", "ke"])),
    ("maw", append(&["maw"])),
    ("mì", append(&["mì"])),
    ("mìkam", append(&["mì", "kam"])),
    ("mungwrr", append(&["mung", "wrr"])),
    ("na", append(&["na"])),
    ("ne", append(&["ne"])),
    ("nemfa", append(&["nem", "fa"])),
    ("nuä", append(&["nu", "ä"])),
    ("pximaw", append(&["pxi", "maw"])),
    ("pxisre", append(&["pxi", "sre"])),
    ("pxaw", append(&["pxaw"])),
    ("pxel", append(&["pxel"])),
    ("raw", append(&["raw"])),
    ("ro", append(&["ro"])),
    ("rofa", append(&["ro", "fa"])),
    ("sìn", append(&["sìn"])),
    ("sko", append(&["sko"])),
    ("sre", append(&["sre"])),
    ("ta", append(&["ta"])),
    ("takip", append(&["ta", "kip"])),
    ("tafkip", append(&["ta", "fkip"])),
    ("talun", append(&["ta", "lun"])),
    ("teri", append(&["te", "ri"])),
    ("uo", append(&["u", "o"])),
    ("vay", append(&["vay"])),
    ("wä", append(&["wä"])),
    ("yoa", append(&["yo", "a"])),
];

/// Returns the known suffix. Unknown names resolve to a suffix without pieces.
fn resolve(name: &str) -> Suffix {
    Suffix::find(name).unwrap_or(Suffix::new(&[], Reanalysis::Append))
}

/// Attaches suffix `name`, falling back to a literal syllable for unknown names.
fn attach_named(name: &str, syllables: &mut Vec<String>, stress: &mut Option<usize>) {
    let suffix = resolve(name);
    if suffix.pieces.is_empty() {
        debug!(suffix = name, "unknown suffix attached before si as a literal syllable");
        syllables.push(name.to_string());
    } else if syllables.is_empty() {
        syllables.extend(suffix.pieces.iter().map(|p| (*p).to_string()));
    } else {
        suffix.attach(syllables, stress);
    }
}

/// Applies suffixes innermost first.
///
/// # Panics
///
/// Panics if `syllables` is empty.
#[must_use]
pub fn apply_suffixes<S: AsRef<str>>(
    syllables: Vec<String>,
    names: &[S],
    is_verb_root: bool,
) -> Vec<String> {
    apply_suffixes_with_stress(syllables, names, is_verb_root, 0).0
}

/// Applies suffixes innermost first while following the stressed syllable.
///
/// `is_verb_root` enables the placement rules around a final *si*.
///
/// # Panics
///
/// Panics if `syllables` is empty.
#[must_use]
pub fn apply_suffixes_with_stress<S: AsRef<str>>(
    mut syllables: Vec<String>,
    names: &[S],
    is_verb_root: bool,
    stress: usize,
) -> (Vec<String>, usize) {
    assert!(
        !syllables.is_empty(),
        "cannot attach suffixes to an empty word"
    );

    let mut stress = Some(stress);
    if names.is_empty() {
        return (syllables, stress.unwrap_or_default());
    }

    contract_pronoun(&mut syllables, &mut stress);

    let last_index = syllables.len() - 1;
    if !(is_verb_root && syllables[last_index] == "si") {
        for name in names {
            attach_named(name.as_ref(), &mut syllables, &mut stress);
        }
        return (syllables, stress.unwrap_or_default());
    }

    syllables.pop();
    let stress_on_si = stress == Some(last_index);
    if stress_on_si {
        stress = None;
    }

    let mut si_placed = false;
    for name in names {
        let name = name.as_ref();
        if si_placed {
            attach_named(name, &mut syllables, &mut stress);
            continue;
        }

        match resolve(name).placement {
            SiPlacement::Before => attach_named(name, &mut syllables, &mut stress),
            SiPlacement::After => {
                place_si(&mut syllables, &mut stress, stress_on_si);
                si_placed = true;
                attach_named(name, &mut syllables, &mut stress);
            }
            SiPlacement::Replace => {
                let replaced_at = syllables.len();
                attach_named(name, &mut syllables, &mut stress);
                if stress_on_si {
                    stress = Some(replaced_at.min(syllables.len() - 1));
                }
                si_placed = true;
            }
        }
    }

    if !si_placed {
        place_si(&mut syllables, &mut stress, stress_on_si);
    }

    (syllables, stress.unwrap_or_default())
}

fn place_si(syllables: &mut Vec<String>, stress: &mut Option<usize>, stress_on_si: bool) {
    syllables.push("si".to_string());
    if stress_on_si {
        *stress = Some(syllables.len() - 1);
    }
}

/// o.e + suffix = oe, o.eng + suffix = oeng.
fn contract_pronoun(syllables: &mut Vec<String>, stress: &mut Option<usize>) {
    let n = syllables.len();
    if n < 2 || syllables[n - 2] != "o" || !syllables[n - 1].starts_with('e') {
        return;
    }

    if let Some(last) = syllables.pop() {
        syllables[n - 2].push_str(&last);
    }
    if *stress == Some(n - 1) {
        *stress = Some(n - 2);
    }
}
