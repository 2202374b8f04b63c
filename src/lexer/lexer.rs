use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer<'_>, &Captures<'_>);

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: PatternHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("scanner pattern must compile"),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins, so two
    // character operators precede their one character forms and numbers
    // precede the standalone dot.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^[ \t]+", skip_handler),
        RegexPattern::new(r"^\n", skip_handler),
        RegexPattern::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)", number_handler),
        RegexPattern::new(r#"^"((?s:[^"\\]|\\.?)*)"?"#, string_handler),
        RegexPattern::new(r"^'((?s:[^'\\]|\\.?)*)'?", string_handler),
        RegexPattern::new(r"^[a-zA-Z][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new(r"^\+\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        RegexPattern::new(r"^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new(r"^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
    ];
}

/// Scanner cursor over one source string.
///
/// `line` and `column` always describe the cursor, not the token being
/// built; token positions are derived from them after the lexeme is consumed.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
    column: i32,
    skipped: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            skipped: 0,
        }
    }

    /// Moves the cursor `n` bytes forward, one column per byte.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for byte in &self.source.as_bytes()[self.pos..end] {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    /// Emits a token whose lexeme has just been consumed. The column is the
    /// cursor column minus the lexeme length, so for string literals (whose
    /// quotes are consumed but not kept) it lands two columns right of the
    /// opening quote.
    pub fn add_token(&mut self, kind: TokenKind, value: &str) {
        let position = Position {
            line: self.line,
            column: self.column - value.len() as i32,
        };
        self.push(MK_TOKEN!(kind, String::from(value), position));
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Bytes dropped because no pattern recognised them.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    // Skips a whole character so the cursor stays on a UTF-8 boundary; the
    // column still moves once per byte.
    fn skip_unrecognised(&mut self) {
        let width = self.remainder().chars().next().map_or(1, char::len_utf8);
        self.skipped += width;
        self.advance_n(width);
    }

    fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

fn skip_handler(lexer: &mut Lexer, captures: &Captures) {
    lexer.advance_n(captures[0].len());
}

fn number_handler(lexer: &mut Lexer, captures: &Captures) {
    let matched = &captures[0];
    lexer.advance_n(matched.len());

    if matched.contains('.') {
        lexer.add_token(TokenKind::Float, matched);
    } else {
        lexer.add_token(TokenKind::Int, matched);
    }
}

fn string_handler(lexer: &mut Lexer, captures: &Captures) {
    // Escapes are kept verbatim; only the surrounding quotes are dropped.
    lexer.advance_n(captures[0].len());
    lexer.add_token(TokenKind::String, &captures[1]);
}

fn symbol_handler(lexer: &mut Lexer, captures: &Captures) {
    let value = &captures[0];
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_n(value.len());
    lexer.add_token(kind, value);
}

/// Splits `source` into tokens. Never fails: characters no pattern
/// recognises are skipped without a diagnostic.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(captures) = pattern.regex.captures(remainder) {
                (pattern.handler)(&mut lex, &captures);
                matched = true;
                break;
            }
        }

        if !matched {
            lex.skip_unrecognised();
        }
    }

    debug!(
        "tokenized {} bytes into {} tokens ({} bytes skipped)",
        source.len(),
        lex.tokens.len(),
        lex.skipped()
    );

    lex.into_tokens()
}
