//! Load-time assembly: source lines → label table + program.

use crate::error::AsmError;
use crate::registry::Registry;
use sml_common::{LabelTable, Program};

/// The result of a successful load: the label table and program for one
/// source, plus the per-line errors that were recovered from by
/// skipping the offending line.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub labels: LabelTable,
    pub program: Program,
    pub diagnostics: Vec<AsmError>,
}

impl Listing {
    /// Whether every source line translated cleanly.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Translates SML source text into a [`Listing`], one line at a time.
///
/// Line grammar: `[label:] opcode operand...`, whitespace-separated,
/// with `#` starting a comment that runs to end of line. Blank lines
/// produce nothing.
#[derive(Clone, Default)]
pub struct Translator {
    registry: Registry,
}

impl Translator {
    /// A translator over the built-in instruction set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A translator over a caller-supplied registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry, for registering extension opcodes before a load.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Translate `source` into a fresh listing.
    ///
    /// Per-line build failures skip that line (binding no label) and
    /// are recorded in [`Listing::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::DuplicateLabel`] if a label name is bound on
    /// two lines; the whole load is abandoned.
    pub fn translate(&self, source: &str) -> Result<Listing, AsmError> {
        let mut listing = Listing::default();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let text = strip_comment(raw);
            let mut tokens = text.split_whitespace();

            let Some(first) = tokens.next() else {
                continue;
            };

            // A first token ending in ':' labels this line; the rest of
            // the tokens are the instruction proper. A lone label with
            // no instruction binds nothing, like a blank line.
            let (label, keyword) = match first.strip_suffix(':').filter(|name| !name.is_empty()) {
                Some(name) => match tokens.next() {
                    Some(keyword) => (Some(name), keyword),
                    None => continue,
                },
                None => (None, first),
            };

            let instruction = match self.registry.build(line, label, keyword, &mut tokens) {
                Ok(instruction) => instruction,
                Err(error) => {
                    listing.diagnostics.push(error);
                    continue;
                }
            };

            if let Some(extra) = tokens.next() {
                listing.diagnostics.push(AsmError::TrailingOperand {
                    line,
                    token: extra.to_string(),
                });
                continue;
            }

            // The label's address is the program length before this
            // instruction is appended, i.e. its own address.
            if let Some(name) = label {
                if listing.labels.insert(name, listing.program.len()).is_err() {
                    return Err(AsmError::DuplicateLabel {
                        line,
                        label: name.to_string(),
                    });
                }
            }
            listing.program.push(instruction);
        }

        Ok(listing)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
