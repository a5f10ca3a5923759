//! Aligning a spelling found in text with an entry's citation form.
//!
//! The citation form is generated from the entry, then matched letter by
//! letter against the text. The text may differ from the citation form in
//! case and in a small set of accepted spelling variants:
//!
//! | citation | text        |
//! |----------|-------------|
//! | px tx kx | b d g       |
//! | tx px kx | t p k       |
//! | tsy sy   | ch sh       |
//! | ä        | e           |
//! | u        | ù           |
//! | '        | (dropped)   |
//!
//! A doubled consonant across a syllable boundary may be written once, and
//! spaces or hyphens may separate syllables. A vowel that ends one syllable
//! and starts the next may be written once, joining the two (*pxe.ey.lan*
//! as *pxeylan*). The `ä` or `ì` ending an unstressed open syllable may be
//! dropped (*säkeynven* as *skeynven*), in which case what is left of that
//! syllable joins the next one. A syllable closed by `ng` may be followed
//! by an extra `a`, which splits it in two (*pxo.eng.ru* as *pxoengaru*,
//! stressed on *nga*). Anything else fails.

use std::collections::HashSet;

use tracing::trace;

use crate::entry::Entry;

const ELIDABLE: &[char] = &['ä', 'ì'];
const VOWELS: &[char] = &['a', 'ä', 'e', 'é', 'i', 'ì', 'o', 'u', 'ù'];

const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("px", "b"),
    ("tx", "d"),
    ("kx", "g"),
    ("tx", "t"),
    ("px", "p"),
    ("kx", "k"),
    ("tsy", "ch"),
    ("sy", "sh"),
    ("ä", "e"),
    ("u", "ù"),
    ("'", ""),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Owner {
    Syllable(usize),
    /// The split-off end of a syllable closed by `ng`.
    Tail(usize),
    Separator,
}

struct Aligner<'a> {
    generated: &'a [(char, usize)],
    raw: &'a [char],
    stress: usize,
    syllable_count: usize,
    owners: Vec<Owner>,
    elided: Vec<bool>,
    merged: Vec<bool>,
    failed: HashSet<(usize, usize)>,
}

impl Aligner<'_> {
    fn align(&mut self, gi: usize, ri: usize) -> bool {
        if gi == self.generated.len() && ri == self.raw.len() {
            return true;
        }
        if self.failed.contains(&(gi, ri)) {
            return false;
        }

        if self.try_direct(gi, ri)
            || self.try_substitutions(gi, ri)
            || self.try_vowel_merge(gi, ri)
            || self.try_geminate(gi, ri)
            || self.try_elision(gi, ri)
            || self.try_epenthesis(gi, ri)
            || self.try_separator(gi, ri)
        {
            return true;
        }

        self.failed.insert((gi, ri));
        false
    }

    fn try_direct(&mut self, gi: usize, ri: usize) -> bool {
        match (self.generated.get(gi), self.raw.get(ri)) {
            (Some(&(g, syllable)), Some(&r)) if g == r => {
                self.owners[ri] = Owner::Syllable(syllable);
                self.align(gi + 1, ri + 1)
            }
            _ => false,
        }
    }

    fn try_substitutions(&mut self, gi: usize, ri: usize) -> bool {
        for (from, to) in SUBSTITUTIONS {
            let Some(syllable) = self.generated_run(gi, from) else {
                continue;
            };
            let to_len = to.chars().count();
            if !self.raw_run(ri, to) {
                continue;
            }

            for owner in &mut self.owners[ri..ri + to_len] {
                *owner = Owner::Syllable(syllable);
            }
            if self.align(gi + from.chars().count(), ri + to_len) {
                return true;
            }
        }

        false
    }

    fn try_vowel_merge(&mut self, gi: usize, ri: usize) -> bool {
        let (Some(&(vowel, left)), Some(&(next, right))) =
            (self.generated.get(gi), self.generated.get(gi + 1))
        else {
            return false;
        };
        if vowel != next
            || left == right
            || !VOWELS.contains(&vowel)
            || self.raw.get(ri) != Some(&vowel)
        {
            return false;
        }

        self.owners[ri] = Owner::Syllable(left);
        self.merged[right] = true;
        if self.align(gi + 2, ri + 1) {
            return true;
        }
        self.merged[right] = false;
        false
    }

    fn try_geminate(&mut self, gi: usize, ri: usize) -> bool {
        match (self.generated.get(gi), self.generated.get(gi + 1)) {
            (Some(a), Some(b)) if a.0 == b.0 && a.1 != b.1 && !VOWELS.contains(&a.0) => {
                self.align(gi + 1, ri)
            }
            _ => false,
        }
    }

    fn try_elision(&mut self, gi: usize, ri: usize) -> bool {
        let Some(&(vowel, syllable)) = self.generated.get(gi) else {
            return false;
        };
        let has_onset = gi > 0 && self.generated[gi - 1].1 == syllable;
        let ends_syllable = self.generated.get(gi + 1).is_none_or(|next| next.1 != syllable);
        if !ELIDABLE.contains(&vowel)
            || !has_onset
            || !ends_syllable
            || syllable == self.stress
            || syllable + 1 >= self.syllable_count
        {
            return false;
        }

        self.elided[syllable] = true;
        if self.align(gi + 1, ri) {
            return true;
        }
        self.elided[syllable] = false;
        false
    }

    fn try_epenthesis(&mut self, gi: usize, ri: usize) -> bool {
        let Some(syllable) = self.generated_run(gi, "ng") else {
            return false;
        };
        let closes_before_consonant = self
            .generated
            .get(gi + 2)
            .is_some_and(|&(c, next)| next != syllable && !VOWELS.contains(&c));
        if !closes_before_consonant || !self.raw_run(ri, "nga") {
            return false;
        }

        for owner in &mut self.owners[ri..ri + 3] {
            *owner = Owner::Tail(syllable);
        }
        self.align(gi + 2, ri + 3)
    }

    /// Returns the syllable a raw letter is shown in, following merged and
    /// elided syllables.
    fn display_owner(&self, syllable: usize) -> usize {
        let mut syllable = syllable;
        while syllable > 0 && self.merged.get(syllable).copied().unwrap_or(false) {
            syllable -= 1;
        }
        while self.elided.get(syllable).copied().unwrap_or(false) {
            syllable += 1;
        }
        syllable
    }

    fn try_separator(&mut self, gi: usize, ri: usize) -> bool {
        let at_boundary = gi > 0
            && gi < self.generated.len()
            && self.generated[gi - 1].1 != self.generated[gi].1;
        if !at_boundary {
            return false;
        }

        let run = self.raw[ri..]
            .iter()
            .take_while(|c| c.is_whitespace() || **c == '-')
            .count();
        if run == 0 {
            return false;
        }

        for owner in &mut self.owners[ri..ri + run] {
            *owner = Owner::Separator;
        }
        self.align(gi, ri + run)
    }

    /// Returns the syllable `pattern` sits in if it starts at `gi` without crossing a boundary.
    fn generated_run(&self, gi: usize, pattern: &str) -> Option<usize> {
        let syllable = self.generated.get(gi)?.1;
        let mut chars = self.generated[gi..].iter();
        for expected in pattern.chars() {
            match chars.next() {
                Some(&(c, s)) if c == expected && s == syllable => {}
                _ => return None,
            }
        }
        Some(syllable)
    }

    fn raw_run(&self, ri: usize, pattern: &str) -> bool {
        let mut chars = self.raw[ri..].iter();
        pattern.chars().all(|expected| chars.next() == Some(&expected))
    }
}

/// Splits `raw` along the syllables of `entry`'s citation form.
///
/// Returns the syllables in the original spelling and case, with spaces
/// between words kept as syllables of their own, and the index of the
/// stressed syllable (`None` for unstressed entries). Returns `None` if the
/// spelling cannot be matched with the entry.
#[must_use]
pub fn run_word(raw: &str, entry: &Entry) -> Option<(Vec<String>, Option<usize>)> {
    let (syllables, stress, _) = entry.generate_syllables();

    let generated: Vec<(char, usize)> = syllables
        .iter()
        .enumerate()
        .flat_map(|(i, s)| s.chars().map(move |c| (c, i)))
        .collect();
    let original: Vec<char> = raw.chars().collect();
    let lowered: Vec<char> = original
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    if generated.is_empty() || lowered.is_empty() {
        return None;
    }

    let mut aligner = Aligner {
        generated: &generated,
        raw: &lowered,
        stress,
        syllable_count: syllables.len(),
        owners: vec![Owner::Separator; lowered.len()],
        elided: vec![false; syllables.len()],
        merged: vec![false; syllables.len()],
        failed: HashSet::new(),
    };
    if !aligner.align(0, 0) {
        trace!(raw, citation = %syllables.join("."), "spelling does not match entry");
        return None;
    }

    let mut shown: Vec<String> = Vec::with_capacity(syllables.len() + 1);
    let mut positions = vec![None; syllables.len()];
    let mut tails = vec![None; syllables.len()];
    let mut pending = String::new();
    let mut current: Option<Owner> = None;

    for (c, owner) in original.iter().zip(&aligner.owners) {
        let owner = match *owner {
            Owner::Syllable(index) => Owner::Syllable(aligner.display_owner(index)),
            owner => owner,
        };
        match owner {
            Owner::Separator => {
                if current != Some(Owner::Separator) {
                    pending.clear();
                }
                pending.push(*c);
            }
            Owner::Syllable(index) | Owner::Tail(index) => {
                if current == Some(Owner::Separator) && pending.chars().any(char::is_whitespace) {
                    shown.push(std::mem::take(&mut pending));
                }
                if current != Some(owner) {
                    let slots = match owner {
                        Owner::Tail(_) => &mut tails,
                        _ => &mut positions,
                    };
                    slots[index] = Some(shown.len());
                    shown.push(std::mem::take(&mut pending));
                }
                if let Some(last) = shown.last_mut() {
                    last.push(*c);
                }
            }
        }
        current = Some(owner);
    }

    let stress = if entry.no_stress {
        None
    } else {
        tails
            .get(stress)
            .copied()
            .flatten()
            .or_else(|| positions.get(aligner.display_owner(stress)).copied().flatten())
    };

    trace!(raw, syllables = %shown.join("."), ?stress, "aligned");
    Some((shown, stress))
}
