//! Parser for automaton source text.
//!
//! This module is organized into submodules by parsing category:
//! - `split`: Header and body parsing, partitioning the body into components
//! - `component`: The five per-component parsers

mod component;
mod split;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{join_words, Lexer, Token, TokenKind};
use automa_core::{Label, Symbol, TransitionKey};
use indexmap::IndexMap;

// ==================== PARSER STATE ====================

/// Parser state over a slice of tokens.
///
/// The slice need not end with `Eof`: a component's value tokens are parsed
/// in isolation, and reading past the end yields a synthetic `Eof`.
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    eof: Token,
    component: Option<ComponentKind>,
}

impl<'t> Parser<'t> {
    /// Create a new parser over a token slice.
    pub fn new(tokens: &'t [Token]) -> Self {
        let eof = match tokens.last() {
            Some(token) if token.kind == TokenKind::Eof => token.clone(),
            Some(token) => Token::eof(
                token.span.end,
                token.span.line,
                token.span.column + token.kind.text().chars().count(),
            ),
            None => Token::eof(0, 1, 1),
        };
        Self {
            tokens,
            pos: 0,
            eof,
            component: None,
        }
    }

    /// Create a parser over one component's value tokens.
    pub fn for_component(component: &'t Component) -> Self {
        Self::new(&component.tokens).in_component(component.kind)
    }

    /// Attribute errors raised by this parser to a component.
    pub fn in_component(mut self, kind: ComponentKind) -> Self {
        self.component = Some(kind);
        self
    }
}

// ==================== TOKEN HELPERS ====================

impl<'t> Parser<'t> {
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_word(&self, word: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Word(w) if w == word)
    }

    /// Tag an error with the component being parsed.
    pub(crate) fn fail(&self, err: ParseError) -> ParseError {
        match self.component {
            Some(kind) => err.with_component(kind),
            None => err,
        }
    }

    /// Build an error for the current token not being `expected`.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        let err = if token.kind == TokenKind::Eof {
            ParseError::unexpected_eof(token.span, expected)
        } else {
            ParseError::unexpected_token(token.span, expected, &token.kind.describe())
        };
        self.fail(err)
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Expect a word, describing it as `what` in errors.
    pub(crate) fn expect_word(&mut self, what: &str) -> ParseResult<(String, Span)> {
        match &self.peek().kind {
            TokenKind::Word(word) => {
                let word = word.clone();
                let span = self.advance().span;
                Ok((word, span))
            }
            _ => Err(self.unexpected(what)),
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        if self.check_word(keyword) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("'{}'", keyword)))
        }
    }

    /// Expect that every token has been consumed.
    pub(crate) fn expect_end(&mut self, what: &str) -> ParseResult<()> {
        if self.check(&TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("end of {}", what)))
        }
    }
}

// ==================== PUBLIC API ====================

/// Split source text into the automaton name and its five components.
pub fn split(source: &str) -> ParseResult<SplitSource> {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(&tokens).parse_split()
}

/// Split source text and parse every component, in canonical order.
pub fn parse_automaton(source: &str) -> ParseResult<ParsedAutomaton> {
    let SplitSource { name, components } = split(source)?;

    Ok(ParsedAutomaton {
        name,
        states: Parser::for_component(&components.states).parse_states()?,
        alphabet: Parser::for_component(&components.alphabet).parse_alphabet()?,
        transitions: Parser::for_component(&components.transition_func).parse_transitions()?,
        start_state: Parser::for_component(&components.start_state).parse_start_state()?,
        accept_states: Parser::for_component(&components.accept_states)
            .parse_accept_states()?,
    })
}

/// Lex a component value, joining words split by whitespace.
fn value_tokens(text: &str) -> Vec<Token> {
    join_words(Lexer::new(text).tokenize())
}

/// Parse a states value such as `{q0,q1}`.
pub fn parse_states(text: &str) -> ParseResult<Vec<Label>> {
    let tokens = value_tokens(text);
    Parser::new(&tokens)
        .in_component(ComponentKind::States)
        .parse_states()
}

/// Parse an alphabet value such as `{0,1}`.
pub fn parse_alphabet(text: &str) -> ParseResult<Vec<Symbol>> {
    let tokens = value_tokens(text);
    Parser::new(&tokens)
        .in_component(ComponentKind::Alphabet)
        .parse_alphabet()
}

/// Parse a transition function value such as `{(q0,0):q1,(q1,0):q0}`.
pub fn parse_transitions(text: &str) -> ParseResult<IndexMap<TransitionKey, Label>> {
    let tokens = value_tokens(text);
    Parser::new(&tokens)
        .in_component(ComponentKind::TransitionFunc)
        .parse_transitions()
}

/// Parse a start state value such as `q0`.
pub fn parse_start_state(text: &str) -> ParseResult<Label> {
    let tokens = value_tokens(text);
    Parser::new(&tokens)
        .in_component(ComponentKind::StartState)
        .parse_start_state()
}

/// Parse an accept states value such as `{q1}`.
pub fn parse_accept_states(text: &str) -> ParseResult<Vec<Label>> {
    let tokens = value_tokens(text);
    Parser::new(&tokens)
        .in_component(ComponentKind::AcceptStates)
        .parse_accept_states()
}

// ==================== TESTS ====================
