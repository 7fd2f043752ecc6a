//! Lexer (tokenizer) for automaton source text.
//!
//! Whitespace separates tokens and is otherwise discarded. Every run of
//! characters that are neither whitespace nor punctuation becomes a single
//! `Word`; keywords are plain words recognised by the parser in context.
//! Component values go through [`join_words`], so inside a value only
//! punctuation gives structure.

use crate::Span;

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Symbols
    LBrace, // {
    RBrace, // }
    LParen, // (
    RParen, // )
    Comma,  // ,
    Colon,  // :
    Semi,   // ;
    Eq,     // =

    /// A label, symbol, name or keyword.
    Word(String),

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",
            TokenKind::Eq => "'='",
            TokenKind::Word(_) => "identifier",
            TokenKind::Eof => "end of input",
        }
    }

    /// Human-readable description of this particular token, for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Word(w) => format!("'{}'", w),
            other => other.name().to_string(),
        }
    }

    /// The source text of the token (empty for end of input).
    pub fn text(&self) -> &str {
        match self {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semi => ";",
            TokenKind::Eq => "=",
            TokenKind::Word(w) => w,
            TokenKind::Eof => "",
        }
    }

    /// Returns true if this token is one of the structural delimiters.
    pub fn is_delimiter(&self) -> bool {
        !matches!(self, TokenKind::Word(_) | TokenKind::Eof)
    }
}

/// A token with its span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

fn is_punct(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | ',' | ':' | ';' | '=')
}

/// Lexer state.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens ending with `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Token::eof(self.pos, self.line, self.column);
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semi,
            '=' => TokenKind::Eq,
            _ => self.scan_word(c),
        };

        Token::new(kind, self.span_from(start, start_line, start_col))
    }

    fn scan_word(&mut self, first: char) -> TokenKind {
        let mut word = String::new();
        word.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || is_punct(c) {
                break;
            }
            word.push(c);
            self.next_char();
        }

        TokenKind::Word(word)
    }
}

/// Merge each run of adjacent words into a single word.
///
/// Whitespace inside a component value is not significant, so `q 0` reads as
/// `q0`. Only delimiters give a value its structure.
pub fn join_words(tokens: Vec<Token>) -> Vec<Token> {
    let mut joined: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let (Some(prev), TokenKind::Word(next)) = (joined.last_mut(), &token.kind) {
            if let TokenKind::Word(word) = &mut prev.kind {
                word.push_str(next);
                prev.span.end = token.span.end;
                continue;
            }
        }
        joined.push(token);
    }
    joined
}
