//! Octal numerals.
//!
//! Numbers below eight are plain roots (*mune*, *pukap*). Larger numbers are
//! built from the places *vol* (8), *zam* (64), *vozam* (512) and *zazam*
//! (4096), each preceded by a multiplier when the digit is two or more, and
//! closed by a units suffix that replaces the final consonant of the last
//! place: `mrr.vo.mrr` is 5 × 8 + 5.
//!
//! Both directions are table driven, and [`parse`] accepts exactly what
//! [`generate`] produces, plus lenited first parts and the shorthand forms
//! `45`, `°55` and `0o55` (optionally followed by `ve` for ordinals).

/// The largest number the place system can express.
pub const MAX_NUMBER: u32 = 0o77777;

const ROOTS: [&[&str]; 8] = [
    &["kew"],
    &["'aw"],
    &["mu", "ne"],
    &["pxey"],
    &["tsìng"],
    &["mrr"],
    &["pu", "kap"],
    &["ki", "nä"],
];
const ROOTS_ORDINAL: [&[&str]; 8] = [
    &[],
    &["'aw", "ve"],
    &["mu", "ve"],
    &["pxey", "ve"],
    &["tsì", "ve"],
    &["mrr", "ve"],
    &["pu", "ve"],
    &["ki", "ve"],
];
const ROOTS_LENITED: [&str; 8] = ["hew", "aw", "mune", "pey", "sìng", "mrr", "fukap", "hinä"];
const ROOTS_ORDINAL_LENITED: [&str; 8] = ["", "awve", "muve", "peyve", "sìve", "mrrve", "fuve", "hive"];

const MULTIPLIERS: [&str; 8] = ["", "", "me", "pxe", "tsì", "mrr", "pu", "ki"];
const MULTIPLIERS_LENITED: [&str; 8] = ["", "", "me", "pe", "sì", "mrr", "fu", "hi"];

/// Place values from the highest down, with their syllables.
const PLACES: [(u32, &[&str]); 4] = [
    (0o10000, &["za", "zam"]),
    (0o1000, &["vo", "zam"]),
    (0o100, &["zam"]),
    (0o10, &["vol"]),
];
/// Place names as they appear in running text, longest first.
const PLACE_NAMES: [(&str, u32); 4] = [("zaza", 0o10000), ("voza", 0o1000), ("za", 0o100), ("vo", 0o10)];

const UNITS: [&[&str]; 8] = [
    &[],
    &[],
    &["mun"],
    &["pey"],
    &["sìng"],
    &["mrr"],
    &["fu"],
    &["hin"],
];
const UNITS_ORDINAL: [&[&str]; 8] = [
    &[],
    &[],
    &["mu", "ve"],
    &["pey", "ve"],
    &["sì", "ve"],
    &["mrr", "ve"],
    &["fu", "ve"],
    &["hi", "ve"],
];

const ENDINGS_VOL: [&str; 8] = ["l", "law", "mun", "pey", "sìng", "mrr", "fu", "hin"];
const ENDINGS_VOL_ORDINAL: [&str; 8] = ["lve", "lawve", "muve", "peyve", "sìve", "mrrve", "fuve", "hive"];
const ENDINGS_ZAM: [&str; 8] = ["m", "maw", "mun", "pey", "sìng", "mrr", "fu", "hin"];
const ENDINGS_ZAM_ORDINAL: [&str; 8] = ["ve", "mawve", "muve", "peyve", "sìve", "mrrve", "fuve", "hive"];

/// Generates the syllables and stressed syllable of a number.
///
/// Returns `None` for zero and for numbers above [`MAX_NUMBER`].
#[must_use]
pub fn generate(number: u32, ordinal: bool) -> Option<(Vec<String>, usize)> {
    if number == 0 || number > MAX_NUMBER {
        return None;
    }

    let own = |pieces: &[&str]| pieces.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();

    if number < 0o10 {
        let index = number as usize;
        let root = if ordinal { ROOTS_ORDINAL[index] } else { ROOTS[index] };
        return Some((own(root), 0));
    }

    let mut syllables = Vec::with_capacity(12);
    let mut rest = number;
    for (value, names) in PLACES {
        let digit = (rest / value) as usize;
        rest %= value;
        if digit == 0 {
            continue;
        }
        if digit >= 2 {
            syllables.push(MULTIPLIERS[digit].to_string());
        }
        syllables.extend(own(names));
    }

    let units = rest as usize;
    if units == 0 {
        if ordinal {
            if syllables.last().is_some_and(|last| last == "zam") {
                syllables.pop();
                syllables.push("za".to_string());
            }
            syllables.push("ve".to_string());
        }
        return Some((syllables, 0));
    }

    let last = syllables.pop()?;
    let (stem, closing) = last.split_at(last.len() - 1);
    let stem = stem.to_string();
    syllables.push(stem);
    let stress = syllables.len();

    if units == 1 {
        syllables.push(format!("{closing}aw"));
        if ordinal {
            syllables.push("ve".to_string());
        }
    } else {
        let table = if ordinal { UNITS_ORDINAL } else { UNITS };
        syllables.extend(own(table[units]));
    }

    Some((syllables, stress))
}

/// One place parsed out of a numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberPart {
    /// The digit in front of the place.
    pub multiplier: u32,
    /// The place value, 1 for a bare root.
    pub power: u32,
    /// Units added by a closing suffix.
    pub remainder: u32,
    /// Whether the part ended in an ordinal suffix.
    pub ordinal: bool,
    /// Whether the first consonant was lenited.
    pub lenited: bool,
}

impl NumberPart {
    /// The value this part contributes.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.multiplier * self.power + self.remainder
    }
}

/// Parses the leading place of a numeral.
///
/// Returns the part and the text after it. When nothing can be parsed the
/// part is `None` and the input is returned unchanged.
#[must_use]
pub fn parse_number_part(s: &str) -> (Option<NumberPart>, &str) {
    if let Some(part) = parse_root(s) {
        return (Some(part), "");
    }

    let (multiplier, lenited, after_multiplier) = split_multiplier(s);

    let Some((power, after_power)) = PLACE_NAMES
        .iter()
        .find_map(|(name, power)| after_multiplier.strip_prefix(name).map(|rest| (*power, rest)))
    else {
        return (None, s);
    };

    let mut part = NumberPart {
        multiplier,
        power,
        lenited,
        ..NumberPart::default()
    };

    let (endings, endings_ordinal, closing) = if power == 0o10 {
        (ENDINGS_VOL, ENDINGS_VOL_ORDINAL, "l")
    } else {
        (ENDINGS_ZAM, ENDINGS_ZAM_ORDINAL, "m")
    };

    if let Some(units) = endings.iter().position(|e| *e == after_power) {
        part.remainder = units as u32;
        return (Some(part), "");
    }
    if let Some(units) = endings_ordinal.iter().position(|e| *e == after_power) {
        part.remainder = units as u32;
        part.ordinal = true;
        return (Some(part), "");
    }

    match after_power.strip_prefix(closing) {
        Some(rest) => (Some(part), rest),
        None => (None, s),
    }
}

fn parse_root(s: &str) -> Option<NumberPart> {
    let root = |multiplier: usize, ordinal: bool, lenited: bool| NumberPart {
        multiplier: multiplier as u32,
        power: 1,
        ordinal,
        lenited,
        ..NumberPart::default()
    };

    if let Some(n) = ROOTS.iter().position(|r| r.concat() == s) {
        return Some(root(n, false, false));
    }
    if let Some(n) = ROOTS_ORDINAL
        .iter()
        .position(|r| !r.is_empty() && r.concat() == s)
    {
        return Some(root(n, true, false));
    }
    if let Some(n) = ROOTS_LENITED.iter().position(|r| *r == s) {
        return Some(root(n, false, true));
    }
    if let Some(n) = ROOTS_ORDINAL_LENITED
        .iter()
        .position(|r| !r.is_empty() && *r == s)
    {
        return Some(root(n, true, true));
    }

    None
}

/// Splits off a multiplier, but only if a place name follows it.
fn split_multiplier(s: &str) -> (u32, bool, &str) {
    let followed_by_place =
        |rest: &str| PLACE_NAMES.iter().any(|(name, _)| rest.starts_with(name));

    for (lenited, table) in [(false, MULTIPLIERS), (true, MULTIPLIERS_LENITED)] {
        for (digit, prefix) in table.iter().enumerate().skip(2) {
            if let Some(rest) = s.strip_prefix(prefix) {
                if followed_by_place(rest) {
                    let lenited = lenited && MULTIPLIERS[digit] != *prefix;
                    return (digit as u32, lenited, rest);
                }
            }
        }
    }

    (1, false, s)
}

/// Where the attributive `a` was attached to a numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attributive {
    /// No attributive marker.
    #[default]
    None,
    /// `a-` in front of the number.
    Prefix,
    /// `-a` after the number.
    Suffix,
}

/// A fully parsed numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseNumberResult {
    /// The numeric value.
    pub value: u32,
    /// Whether this is an ordinal (*mrrve*, "fifth").
    pub ordinal: bool,
    /// The attributive marker, if any.
    pub attributive: Attributive,
}

impl ParseNumberResult {
    /// Generates the syllables of this numeral.
    ///
    /// With `affixed` set the attributive `a` is included as its own
    /// syllable and the stressed index accounts for it.
    #[must_use]
    pub fn generate_syllables(&self, affixed: bool) -> Option<(Vec<String>, usize)> {
        let (mut syllables, mut stress) = generate(self.value, self.ordinal)?;

        if affixed {
            match self.attributive {
                Attributive::None => {}
                Attributive::Prefix => {
                    syllables.insert(0, "a".to_string());
                    stress += 1;
                }
                Attributive::Suffix => syllables.push("a".to_string()),
            }
        }

        Some((syllables, stress))
    }
}

/// Parses a lowercase numeral word.
#[must_use]
pub fn parse(s: &str) -> Option<ParseNumberResult> {
    let mut result = ParseNumberResult::default();
    let mut s = s;

    if let Some(rest) = s.strip_prefix('a').filter(|_| !s.starts_with("aw")) {
        result.attributive = Attributive::Prefix;
        s = rest;
    } else if let Some(rest) = s.strip_suffix('a') {
        result.attributive = Attributive::Suffix;
        s = rest;
    }

    if let Some((value, ordinal)) = parse_shorthand(s) {
        result.value = value;
        result.ordinal = ordinal;
        return Some(result);
    }

    let mut previous_power = u32::MAX;
    let mut first = true;
    while !s.is_empty() {
        let (part, rest) = parse_number_part(s);
        let part = part?;

        if part.power >= previous_power
            || (!first && part.power == 1)
            || (part.lenited && (!first || result.attributive == Attributive::Prefix))
        {
            return None;
        }

        result.value += part.value();
        result.ordinal = part.ordinal;
        previous_power = part.power;
        first = false;
        s = rest;
    }

    if first { None } else { Some(result) }
}

/// Parses `45`, `45ve`, `°55`, `0o55` and `°55ve`.
fn parse_shorthand(s: &str) -> Option<(u32, bool)> {
    let (digits, radix) = match s.strip_prefix('°').or_else(|| s.strip_prefix("0o")) {
        Some(rest) => (rest, 8),
        None => (s, 10),
    };

    let (digits, ordinal) = match digits.strip_suffix("ve") {
        Some(rest) => (rest, true),
        None => (digits, false),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let value = u32::from_str_radix(digits, radix).ok()?;
    (1..=MAX_NUMBER)
        .contains(&value)
        .then_some((value, ordinal))
}
