use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Slice of the source exactly as written. Empty for `Eof`.
    pub lexeme: &'src str,
    pub literal: Option<Literal<'src>>,
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, line: usize) -> Token<'src> {
        Token {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Literal<'src>,
        line: usize,
    ) -> Token<'src> {
        Token {
            kind,
            lexeme,
            literal: Some(literal),
            line,
        }
    }

    pub fn eof(line: usize) -> Token<'static> {
        Token::new(TokenKind::Eof, "", line)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token {} '{}' on line {}", self.kind, self.lexeme, self.line)?;
        match &self.literal {
            Some(Literal::Text(text)) => write!(f, " -> '{text}'"),
            Some(literal) => write!(f, " -> {literal}"),
            None => Ok(()),
        }
    }
}

/// Decoded value of a number or string token.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal<'src> {
    Integer(i64),
    Float(f64),
    /// Text between the quotes, no escape processing.
    Text(&'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Float(value) => write!(f, "{value}"),
            Literal::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Identifier,
    String,
    Number,
    Keyword(Keyword),

    Eof,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "Keyword({})", keyword.as_str()),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    And,
    Class,
    Else,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    Var,
    While,
}

impl Keyword {
    pub const ALL: [Keyword; 14] = [
        Keyword::And,
        Keyword::Class,
        Keyword::Else,
        Keyword::For,
        Keyword::Fun,
        Keyword::If,
        Keyword::Nil,
        Keyword::Or,
        Keyword::Print,
        Keyword::Return,
        Keyword::Super,
        Keyword::This,
        Keyword::Var,
        Keyword::While,
    ];

    /// Exact, case-sensitive match against the reserved words.
    pub fn from_lexeme(input: &str) -> Option<Keyword> {
        match input {
            "and" => Some(Keyword::And),
            "class" => Some(Keyword::Class),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "fun" => Some(Keyword::Fun),
            "if" => Some(Keyword::If),
            "nil" => Some(Keyword::Nil),
            "or" => Some(Keyword::Or),
            "print" => Some(Keyword::Print),
            "return" => Some(Keyword::Return),
            "super" => Some(Keyword::Super),
            "this" => Some(Keyword::This),
            "var" => Some(Keyword::Var),
            "while" => Some(Keyword::While),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Class => "class",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::Fun => "fun",
            Keyword::If => "if",
            Keyword::Nil => "nil",
            Keyword::Or => "or",
            Keyword::Print => "print",
            Keyword::Return => "return",
            Keyword::Super => "super",
            Keyword::This => "this",
            Keyword::Var => "var",
            Keyword::While => "while",
        }
    }
}
