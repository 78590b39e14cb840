//! The string-rewriting engine: production table, axiom and memoized
//! generations.
//!
//! Grammars are plain text, one directive per line. A line containing `->`
//! defines a production (`F->FF+[+F-F-F]`); any other non-blank line sets
//! the axiom. All whitespace is stripped before parsing, and later
//! directives overwrite earlier ones.

use crate::error::VerdureError;
use std::collections::HashMap;
use std::path::Path;

/// Caps on grammar expansion.
///
/// Repeated rewriting grows strings geometrically for most interesting
/// grammars, so both the generation index and the resulting symbol count
/// are bounded. Hitting a cap is recoverable: the cache keeps every
/// generation computed before the offending step.
#[derive(Clone, Copy, Debug)]
pub struct GrowthLimits {
    /// Highest generation index that may be requested.
    pub max_generation: usize,
    /// Largest symbol count a single generation may reach.
    pub max_symbols: usize,
}

impl Default for GrowthLimits {
    fn default() -> Self {
        Self {
            max_generation: 64,
            max_symbols: 1 << 20,
        }
    }
}

/// A context-free L-System grammar with memoized generations.
///
/// Generation 0 is the axiom; generation i+1 rewrites generation i symbol
/// by symbol. Generations are computed lazily and cached append-only, so
/// repeated or incremental requests cost one rewrite per missing step and
/// nothing for steps already taken.
#[derive(Clone, Debug, Default)]
pub struct LsysGrammar {
    productions: HashMap<char, String>,
    axiom: String,
    source: String,
    generations: Vec<String>,
    limits: GrowthLimits,
}

impl LsysGrammar {
    /// Creates an empty grammar with default expansion caps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grammar with custom expansion caps.
    pub fn with_limits(limits: GrowthLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Loads a grammar from text, replacing all prior state.
    ///
    /// The raw text is kept verbatim and can be read back with
    /// [`source`](Self::source). Parsing is best-effort: blank lines and
    /// rule heads that are empty or longer than one symbol are skipped
    /// (a multi-symbol head could never match during rewriting).
    pub fn load_str(&mut self, text: &str) {
        self.reset();
        self.source = text.to_owned();
        for line in text.lines() {
            self.add_directive(line);
        }
    }

    /// Loads a grammar from a file, replacing all prior state.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), VerdureError> {
        let text = std::fs::read_to_string(path)?;
        self.load_str(&text);
        Ok(())
    }

    /// Clears productions, axiom, cached generations and the stored source.
    pub fn reset(&mut self) {
        self.productions.clear();
        self.axiom.clear();
        self.source.clear();
        self.generations.clear();
    }

    fn add_directive(&mut self, line: &str) {
        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return;
        }
        match stripped.find("->") {
            Some(split) => {
                let mut head = stripped[..split].chars();
                let replacement = &stripped[split + 2..];
                if let (Some(symbol), None) = (head.next(), head.next()) {
                    self.productions.insert(symbol, replacement.to_owned());
                }
            }
            None => self.axiom = stripped,
        }
    }

    /// Applies one rewrite step to `input`.
    ///
    /// Every symbol with a production is replaced by its replacement; every
    /// other symbol stands for itself. Pure: consults nothing but the
    /// production table.
    pub fn rewrite(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for symbol in input.chars() {
            match self.productions.get(&symbol) {
                Some(replacement) => output.push_str(replacement),
                None => output.push(symbol),
            }
        }
        output
    }

    /// Returns the generation-`n` string, computing and caching any
    /// generations not yet taken.
    ///
    /// With no axiom loaded every generation is the empty string.
    pub fn generation(&mut self, n: usize) -> Result<&str, VerdureError> {
        if n > self.limits.max_generation {
            return Err(VerdureError::GenerationLimit {
                requested: n,
                limit: self.limits.max_generation,
            });
        }
        if self.generations.is_empty() {
            self.generations.push(self.axiom.clone());
        }
        while self.generations.len() <= n {
            let step = self.generations.len();
            let current = &self.generations[step - 1];
            // Predict the grown length from the replacement table before
            // materializing the string.
            let next_len: usize = current
                .chars()
                .map(|c| self.productions.get(&c).map_or(1, |r| r.chars().count()))
                .sum();
            if next_len > self.limits.max_symbols {
                return Err(VerdureError::SymbolLimit {
                    generation: step,
                    length: next_len,
                    limit: self.limits.max_symbols,
                });
            }
            let next = self.rewrite(current);
            self.generations.push(next);
        }
        Ok(&self.generations[n])
    }

    /// The grammar text exactly as last loaded.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The generation-0 string.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The replacement registered for `symbol`, if any.
    pub fn production(&self, symbol: char) -> Option<&str> {
        self.productions.get(&symbol).map(String::as_str)
    }

    /// Number of registered productions.
    pub fn production_count(&self) -> usize {
        self.productions.len()
    }

    /// The active expansion caps.
    pub fn limits(&self) -> GrowthLimits {
        self.limits
    }

    /// Replaces the expansion caps. Already-cached generations are kept.
    pub fn set_limits(&mut self, limits: GrowthLimits) {
        self.limits = limits;
    }
}
