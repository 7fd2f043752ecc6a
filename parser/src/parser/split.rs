//! Header and body parsing.
//!
//! Partitions `automaton <name> { key = value; ... }` into its five named
//! components without interpreting the values. Components may appear in any
//! order; all five are required.

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{join_words, TokenKind};

impl<'t> Parser<'t> {
    /// Parse a complete automaton definition into its name and raw components.
    pub fn parse_split(&mut self) -> ParseResult<SplitSource> {
        self.expect_keyword("automaton")?;
        let (name, _) = self.expect_word("automaton name")?;
        self.expect(&TokenKind::LBrace)?;

        let mut found: [Option<Component>; 5] = Default::default();
        let close = loop {
            if self.check(&TokenKind::RBrace) {
                break self.advance().span;
            }
            let component = self.parse_component_entry()?;
            let slot = &mut found[component.kind.index()];
            if slot.is_some() {
                return Err(ParseError::duplicate(
                    "component",
                    component.kind.key(),
                    component.span,
                ));
            }
            *slot = Some(component);
        };
        self.expect_end("automaton definition")?;

        match found {
            [Some(states), Some(alphabet), Some(transition_func), Some(start_state), Some(accept_states)] => {
                Ok(SplitSource {
                    name,
                    components: Components {
                        states,
                        alphabet,
                        transition_func,
                        start_state,
                        accept_states,
                    },
                })
            }
            found => {
                let missing: Vec<ComponentKind> = ComponentKind::ALL
                    .into_iter()
                    .filter(|kind| found[kind.index()].is_none())
                    .collect();
                Err(ParseError::missing_components(&missing, close))
            }
        }
    }

    /// Parse one `key = value ;` entry. The value runs up to the next `;`.
    fn parse_component_entry(&mut self) -> ParseResult<Component> {
        let (key, key_span) = self.expect_word("component name or '}'")?;
        let kind = ComponentKind::from_key(&key).ok_or_else(|| {
            ParseError::malformed(format!("unknown component '{}'", key), key_span)
                .with_expected(
                    ComponentKind::ALL
                        .iter()
                        .map(|k| k.key().to_string())
                        .collect(),
                )
                .with_found(key.clone())
        })?;
        self.expect(&TokenKind::Eq)
            .map_err(|e| e.with_component(kind))?;

        let mut tokens = Vec::new();
        while !self.check(&TokenKind::Semi) {
            if self.check(&TokenKind::Eof) {
                return Err(self.unexpected("';'").with_component(kind));
            }
            tokens.push(self.advance());
        }
        let semi = self.advance().span;

        if tokens.is_empty() {
            return Err(ParseError::malformed(
                format!("component '{}' has no value", key),
                semi,
            )
            .with_component(kind));
        }

        let tokens = join_words(tokens);
        let text = tokens.iter().map(|t| t.kind.text()).collect();
        Ok(Component {
            kind,
            tokens,
            text,
            span: Span::new(key_span.start, semi.end, key_span.line, key_span.column),
        })
    }
}
