//! Component value parsing.
//!
//! Handles the five component shapes:
//! - Label sets: `{q0,q1}` (states, accept_states)
//! - Symbol sets: `{0,1}` (alphabet)
//! - Transition functions: `{(q0,0):q1, ...}`
//! - Single labels: `q0` (start_state)

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use automa_core::{Label, Symbol, TransitionKey};
use indexmap::IndexMap;
use std::collections::HashSet;

impl<'t> Parser<'t> {
    /// Parse a states set. Labels keep declaration order; duplicates are rejected.
    pub fn parse_states(&mut self) -> ParseResult<Vec<Label>> {
        self.parse_label_set("state")
    }

    /// Parse an accept states set. May be empty.
    pub fn parse_accept_states(&mut self) -> ParseResult<Vec<Label>> {
        self.parse_label_set("accept state")
    }

    /// Parse an alphabet. Every symbol is a single character.
    pub fn parse_alphabet(&mut self) -> ParseResult<Vec<Symbol>> {
        let mut seen = HashSet::new();
        self.parse_braced_list("symbol", |p| {
            let (symbol, span) = p.expect_symbol()?;
            if !seen.insert(symbol) {
                return Err(p.fail(ParseError::duplicate("symbol", symbol.to_string(), span)));
            }
            Ok(symbol)
        })
    }

    /// Parse a transition function. Each `(state,symbol)` key may appear only
    /// once, even when both entries agree on the target.
    pub fn parse_transitions(&mut self) -> ParseResult<IndexMap<TransitionKey, Label>> {
        let mut transitions = IndexMap::new();
        self.parse_braced_list("transition", |p| {
            let start = p.expect(&TokenKind::LParen)?.span;
            let (state, _) = p.expect_word("state label")?;
            p.expect(&TokenKind::Comma)?;
            let (symbol, _) = p.expect_symbol()?;
            p.expect(&TokenKind::RParen)?;
            p.expect(&TokenKind::Colon)?;
            let (target, _) = p.expect_word("target state label")?;

            let key = TransitionKey::new(state, symbol);
            if transitions.contains_key(&key) {
                return Err(p.fail(ParseError::duplicate(
                    "transition key",
                    key.to_string(),
                    start,
                )));
            }
            transitions.insert(key, Label::new(target));
            Ok(())
        })?;
        Ok(transitions)
    }

    /// Parse a start state: exactly one label and nothing else.
    pub fn parse_start_state(&mut self) -> ParseResult<Label> {
        if self.peek().kind.is_delimiter() {
            let token = self.peek();
            return Err(self.fail(
                ParseError::malformed(
                    format!(
                        "start state must be a single state label, found {}",
                        token.kind.describe()
                    ),
                    token.span,
                )
                .with_found(token.kind.describe()),
            ));
        }
        let (label, _) = self.expect_word("state label")?;
        self.expect_end("start state (a single state label)")?;
        Ok(Label::new(label))
    }

    // ==================== SHARED SHAPES ====================

    fn parse_label_set(&mut self, what: &str) -> ParseResult<Vec<Label>> {
        let mut seen = HashSet::new();
        let expected = format!("{} label", what);
        self.parse_braced_list(what, |p| {
            let (label, span) = p.expect_word(&expected)?;
            if !seen.insert(label.clone()) {
                return Err(p.fail(ParseError::duplicate(what, label, span)));
            }
            Ok(Label::new(label))
        })
    }

    /// Parse `{ item, item, ... }` followed by the end of the component.
    /// `{}` is an empty list; leading or trailing commas are malformed.
    fn parse_braced_list<T>(
        &mut self,
        what: &str,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect(&TokenKind::LBrace)?;

        let mut items = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                items.push(item(self)?);
                if self.check(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if !self.check(&TokenKind::RBrace) {
            return Err(self.unexpected(&format!("',' or '}}' after {}", what)));
        }
        self.advance();
        self.expect_end("component")?;
        Ok(items)
    }

    fn expect_symbol(&mut self) -> ParseResult<(Symbol, crate::Span)> {
        let (text, span) = self.expect_word("symbol")?;
        match Symbol::from_text(&text) {
            Some(symbol) => Ok((symbol, span)),
            None => Err(self.fail(
                ParseError::malformed(
                    format!("symbol '{}' must be a single character", text),
                    span,
                )
                .with_found(text),
            )),
        }
    }
}
