use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Type(DataType::Int));
        map.insert("float", TokenKind::Type(DataType::Float));
        map.insert("double", TokenKind::Type(DataType::Double));
        map.insert("char", TokenKind::Type(DataType::Char));
        map.insert("string", TokenKind::Type(DataType::String));
        map.insert("bool", TokenKind::Type(DataType::Bool));
        map.insert("void", TokenKind::Type(DataType::Void));
        // `main` stays an identifier so the syntax checker can find the entry point
        map.insert("main", TokenKind::Identifier);
        map.insert("if", TokenKind::Reserved);
        map.insert("else", TokenKind::Reserved);
        map.insert("while", TokenKind::Reserved);
        map.insert("for", TokenKind::Reserved);
        map.insert("do", TokenKind::Reserved);
        map.insert("return", TokenKind::Reserved);
        map.insert("break", TokenKind::Reserved);
        map.insert("continue", TokenKind::Reserved);
        map
    };
}

/// The built-in types a declaration can name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum DataType {
    Int,
    Float,
    Double,
    Char,
    String,
    Bool,
    Void,
}

impl DataType {
    /// Whether a value token of kind `value` may be assigned to a variable of this type.
    pub fn accepts(&self, value: TokenKind) -> bool {
        match self {
            DataType::Int => matches!(value, TokenKind::Int | TokenKind::Type(DataType::Int)),
            DataType::Float | DataType::Double => matches!(
                value,
                TokenKind::Int
                    | TokenKind::Float
                    | TokenKind::Type(DataType::Float)
                    | TokenKind::Type(DataType::Double)
            ),
            DataType::String => {
                matches!(value, TokenKind::String | TokenKind::Type(DataType::String))
            }
            DataType::Char => matches!(value, TokenKind::String | TokenKind::Type(DataType::Char)),
            DataType::Bool | DataType::Void => true,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Char => "char",
            DataType::String => "string",
            DataType::Bool => "bool",
            DataType::Void => "void",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    Type(DataType),
    Reserved,
    Identifier,

    Int,
    Float,
    String,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Colon,
    Comma,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
}

impl TokenKind {
    pub fn is_type(&self) -> bool {
        matches!(self, TokenKind::Type(_))
    }

    /// Stable category name used in reports and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Type(DataType::Int) => "TYPE_INT",
            TokenKind::Type(DataType::Float) => "TYPE_FLOAT",
            TokenKind::Type(DataType::Double) => "TYPE_DOUBLE",
            TokenKind::Type(DataType::Char) => "TYPE_CHAR",
            TokenKind::Type(DataType::String) => "TYPE_STRING",
            TokenKind::Type(DataType::Bool) => "TYPE_BOOL",
            TokenKind::Type(DataType::Void) => "TYPE_VOID",
            TokenKind::Reserved => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenCurly => "OPEN_CURLY",
            TokenKind::CloseCurly => "CLOSE_CURLY",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Equals => "EQUALS",
            TokenKind::Not => "NOT",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Less => "LESS",
            TokenKind::LessEquals => "LESS_EQUALS",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEquals => "GREATER_EQUALS",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::PlusPlus => "PLUS_PLUS",
            TokenKind::MinusMinus => "MINUS_MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "DASH",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Percent => "PERCENT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.value, self.position)
    }
}

impl Token {
    pub fn is_type(&self) -> bool {
        self.kind.is_type()
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

/// If the token at `index` is a type keyword, returns the declared type and
/// the token right after it (the would-be declared name).
pub fn declaration_at(tokens: &[Token], index: usize) -> Option<(DataType, Option<&Token>)> {
    match tokens.get(index)?.kind {
        TokenKind::Type(data_type) => Some((data_type, tokens.get(index + 1))),
        _ => None,
    }
}
