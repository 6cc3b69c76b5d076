use itertools::{Itertools, MinMaxResult};
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::SolveError;

pub type Symbol = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair(pub Symbol, pub Symbol);

/// Insertion rules. A pair without an entry is never split.
#[derive(Debug, Default)]
pub struct Rules(FxHashMap<Pair, Symbol>);

impl Rules {
    /// Parses `XY -> Z` lines; each line comes with its 1-based line number for diagnostics.
    pub fn parse<'a>(lines: impl IntoIterator<Item = (usize, &'a str)>) -> Result<Rules, SolveError> {
        let rule_re = Regex::new(r"^([[:alnum:]])([[:alnum:]])\s*->\s*([[:alnum:]])$").unwrap();
        lines.into_iter().map(|(line, text)| -> Result<(Pair, Symbol), SolveError> {
            let caps = rule_re.captures(text.trim()).ok_or_else(||
                SolveError::BadRule {line, text: text.to_owned()}
            )?;
            let [a, b, c] = [&caps[1], &caps[2], &caps[3]].map(|s| s.as_bytes()[0]);
            Ok((Pair(a, b), c))
        }).collect()
    }

    pub fn insertion(&self, pair: Pair) -> Option<Symbol> {
        self.0.get(&pair).copied()
    }
}

impl FromIterator<(Pair, Symbol)> for Rules {
    fn from_iter<I: IntoIterator<Item = (Pair, Symbol)>>(iter: I) -> Self {
        Rules(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts(FxHashMap<Symbol, u64>);

impl Counts {
    pub fn add(&mut self, symbol: Symbol, n: u64) {
        *self.0.entry(symbol).or_insert(0) += n;
    }

    pub fn merge(&mut self, other: &Counts) {
        for (&symbol, &n) in &other.0 {self.add(symbol, n)}
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.0.get(&symbol).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most common count minus least common count.
    pub fn spread(&self) -> Option<u64> {
        match self.0.values().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(_) => Some(0),
            MinMaxResult::MinMax(min, max) => Some(max - min),
        }
    }
}

impl FromIterator<Symbol> for Counts {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut counts = Counts::default();
        for symbol in iter {counts.add(symbol, 1)}
        counts
    }
}

/// Counts the symbols a pair grows into without building the polymer.
///
/// The memo is keyed by `(steps remaining, pair)` and lives only as long as this value,
/// so two runs with different rule tables never share entries.
pub struct PairGrowth<'r> {
    rules: &'r Rules,
    memo: Option<FxHashMap<(usize, Pair), Counts>>,
}

impl<'r> PairGrowth<'r> {
    pub fn new(rules: &'r Rules) -> Self {
        PairGrowth {rules, memo: Some(FxHashMap::default())}
    }

    /// Recomputes every expansion from scratch. Exponential in `steps`.
    pub fn without_memo(rules: &'r Rules) -> Self {
        PairGrowth {rules, memo: None}
    }

    pub fn memo_len(&self) -> usize {
        self.memo.as_ref().map_or(0, |memo| memo.len())
    }

    /// Symbols inserted between the endpoints of `pair` over `steps` rounds.
    /// The endpoints themselves are not counted.
    pub fn expand(&mut self, steps: usize, pair: Pair) -> Counts {
        if let Some(hit) = self.memo.as_ref().and_then(|memo| memo.get(&(steps, pair))) {
            return hit.clone();
        }
        let Some(inserted) = self.rules.insertion(pair).filter(|_| steps > 0) else {
            return Counts::default();
        };

        let mut counts = self.expand(steps - 1, Pair(pair.0, inserted));
        counts.merge(&self.expand(steps - 1, Pair(inserted, pair.1)));
        counts.add(inserted, 1);
        if let Some(memo) = &mut self.memo {
            memo.insert((steps, pair), counts.clone());
        }
        counts
    }

    pub fn final_frequencies(&mut self, template: &[Symbol], steps: usize) -> Result<Counts, SolveError> {
        if template.len() < 2 {
            return Err(SolveError::TemplateTooShort(String::from_utf8_lossy(template).into_owned()));
        }
        let mut counts: Counts = template.iter().copied().collect();
        for (&a, &b) in template.iter().tuple_windows() {
            counts.merge(&self.expand(steps, Pair(a, b)));
        }
        Ok(counts)
    }
}

pub fn compute_final_frequencies(template: &[Symbol], rules: &Rules, steps: usize) -> Result<Counts, SolveError> {
    let mut growth = PairGrowth::new(rules);
    let counts = growth.final_frequencies(template, steps)?;
    tracing::debug!(steps, memo_entries = growth.memo_len(), "pair growth finished");
    Ok(counts)
}

/// Builds the polymer step by step. Only usable for small step counts.
pub fn simulate(template: &[Symbol], rules: &Rules, steps: usize) -> Vec<Symbol> {
    let mut polymer = template.to_vec();
    for _ in 0 .. steps {
        let mut next = Vec::with_capacity(2 * polymer.len());
        next.extend(polymer.first());
        for (&a, &b) in polymer.iter().tuple_windows() {
            next.extend(rules.insertion(Pair(a, b)));
            next.push(b);
        }
        polymer = next;
    }
    polymer
}

#[derive(Debug)]
pub struct Polymer {
    pub template: Vec<Symbol>,
    pub rules: Rules,
}

impl Polymer {
    pub fn parse(input: &str) -> Result<Polymer, SolveError> {
        let mut lines = input.trim_end().lines();
        let template = lines.next().map(str::trim).unwrap_or("");
        if template.is_empty() {return Err(SolveError::EmptyInput)}
        if let Some((ci, found)) = template.chars().enumerate().find(|(_, c)| !c.is_ascii_alphanumeric()) {
            return Err(SolveError::BadChar {row: 1, col: ci + 1, found});
        }
        if template.len() < 2 {return Err(SolveError::TemplateTooShort(template.to_owned()))}

        match lines.next() {
            Some(line) if !line.trim().is_empty() => return Err(SolveError::MissingSeparator(line.to_owned())),
            _ => ()
        }
        let rules = Rules::parse(lines.enumerate().map(|(ix, line)| (ix + 3, line)))?;
        Ok(Polymer {template: template.as_bytes().to_vec(), rules})
    }
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let steps = match part {
        1 => 10,
        2 => 40,
        _ => return Err(SolveError::BadPart(part))
    };
    let polymer = Polymer::parse(input)?;
    let counts = compute_final_frequencies(&polymer.template, &polymer.rules, steps)?;
    Ok(counts.spread().unwrap_or(0).to_string())
}
