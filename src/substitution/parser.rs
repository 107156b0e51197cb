// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text syntax for substitutions.
//!
//! ```text
//! input     := (text | "\$" | subst)*
//! subst     := "$(" ws* kind (ws+ argument)* ws* ")"
//! argument  := (char | quoted | "\$" | subst)+     ; ends at ws or ')'
//! quoted    := "'" (char | "\$" | subst)* "'"  |  '"' ... '"'
//! ```

use super::{Substitution, SubstitutionList};
use crate::error::SubstitutionError;

type ParseResult<T> = std::result::Result<T, SubstitutionError>;

/// Parses text containing `$(...)` substitutions.
///
/// # Errors
///
/// Returns `SubstitutionError::Syntax` for malformed input and
/// `UnknownSubstitution` / `InvalidArgumentCount` for unsupported expressions.
pub fn parse(input: &str) -> ParseResult<SubstitutionList> {
    let mut parser = TextParser { input, pos: 0 };
    let mut builder = ListBuilder::default();

    while let Some(c) = parser.peek() {
        if !parser.parse_special(&mut builder)? {
            parser.pos += c.len_utf8();
            builder.push_char(c);
        }
    }

    Ok(builder.finish())
}

/// Accumulates adjacent literal characters into a single text token.
#[derive(Default)]
struct ListBuilder {
    tokens: Vec<Substitution>,
    text: String,
}

impl ListBuilder {
    fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    fn push_substitution(&mut self, substitution: Substitution) {
        self.flush();
        self.tokens.push(substitution);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.tokens
                .push(Substitution::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> SubstitutionList {
        self.flush();
        SubstitutionList::new(self.tokens)
    }
}

struct TextParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TextParser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> SubstitutionError {
        SubstitutionError::Syntax {
            input: self.input.to_string(),
            offset,
            message: message.into(),
        }
    }

    /// Consumes an escape or a nested substitution at the cursor.
    ///
    /// Returns `false` when the cursor is on an ordinary character.
    fn parse_special(&mut self, builder: &mut ListBuilder) -> ParseResult<bool> {
        let rest = self.rest();
        if rest.starts_with("$(") {
            builder.push_substitution(self.parse_substitution()?);
            Ok(true)
        } else if rest.starts_with("\\$") {
            self.pos += 2;
            builder.push_char('$');
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Skips whitespace, returning whether any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
        self.pos > start
    }

    fn parse_kind(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self
            .peek()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        {
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn parse_substitution(&mut self) -> ParseResult<Substitution> {
        let start = self.pos;
        self.pos += 2;
        self.skip_whitespace();

        let kind = self.parse_kind();
        if kind.is_empty() {
            return Err(match self.peek() {
                None => self.error(start, "unterminated substitution, expected ')'"),
                Some(')') => self.error(start, "empty substitution"),
                Some(c) => self.error(self.pos, format!("unexpected character '{c}'")),
            });
        }

        let mut arguments = Vec::new();
        loop {
            let separated = self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error(start, "unterminated substitution, expected ')'")),
                Some(')') => {
                    self.pos += 1;
                    break;
                }
                Some(_) if separated => arguments.push(self.parse_argument(start)?),
                Some(c) => {
                    return Err(self.error(
                        self.pos,
                        format!("unexpected character '{c}' after '{kind}'"),
                    ));
                }
            }
        }

        build_substitution(kind, arguments)
    }

    fn parse_argument(&mut self, substitution_start: usize) -> ParseResult<SubstitutionList> {
        let mut builder = ListBuilder::default();
        loop {
            match self.peek() {
                None => {
                    return Err(self.error(
                        substitution_start,
                        "unterminated substitution, expected ')'",
                    ));
                }
                Some(c) if c.is_whitespace() || c == ')' => break,
                Some(quote @ ('\'' | '"')) => {
                    self.pos += 1;
                    self.parse_quoted(quote, &mut builder)?;
                }
                Some(c) => {
                    if !self.parse_special(&mut builder)? {
                        self.pos += c.len_utf8();
                        builder.push_char(c);
                    }
                }
            }
        }
        Ok(builder.finish())
    }

    fn parse_quoted(&mut self, quote: char, builder: &mut ListBuilder) -> ParseResult<()> {
        let start = self.pos - 1;
        loop {
            match self.peek() {
                None => return Err(self.error(start, format!("unterminated quote {quote}"))),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(c) => {
                    if !self.parse_special(builder)? {
                        self.pos += c.len_utf8();
                        builder.push_char(c);
                    }
                }
            }
        }
    }
}

fn build_substitution(kind: &str, arguments: Vec<SubstitutionList>) -> ParseResult<Substitution> {
    let count = arguments.len();
    let check_count = |min: usize, max: usize| {
        if (min..=max).contains(&count) {
            Ok(())
        } else {
            Err(SubstitutionError::InvalidArgumentCount {
                name: kind.to_string(),
                expected: format!("{min}..={max}"),
                got: count,
            })
        }
    };

    let mut arguments = arguments.into_iter();
    match kind {
        "env" => {
            check_count(1, 2)?;
            Ok(Substitution::EnvironmentVariable {
                name: arguments.next().unwrap_or_default(),
                default: arguments.next(),
            })
        }
        "optenv" => {
            check_count(1, 2)?;
            Ok(Substitution::EnvironmentVariable {
                name: arguments.next().unwrap_or_default(),
                default: Some(arguments.next().unwrap_or_default()),
            })
        }
        "var" => {
            check_count(1, 2)?;
            Ok(Substitution::LaunchConfiguration {
                name: arguments.next().unwrap_or_default(),
                default: arguments.next(),
            })
        }
        _ => Err(SubstitutionError::UnknownSubstitution {
            name: kind.to_string(),
        }),
    }
}
