use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub line: usize,
    pub position: usize,
}

impl Token {
    pub fn new(kind: Kind, text: impl Into<String>, line: usize, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            position,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Kind {
    // Control
    Eof,
    Newline,

    // Literals
    Number,
    Identifier,
    String,

    // Keywords
    Print,
    Input,
    Declare,
    If,
    Then,        // reserved
    EndIf,       // reserved
    While,
    Repeat,      // reserved
    EndWhile,    // reserved

    // Operators
    Eq,          // =
    Plus,        // +
    Minus,       // -
    Asterisk,    // *
    Slash,       // /
    EqEq,        // ==
    NotEq,       // !=
    Lt,          // <
    LtEq,        // <=
    Gt,          // >
    GtEq,        // >=

    // Delimiters
    LBrace,      // {
    RBrace,      // }
}

impl Kind {
    /// Exact, case-sensitive lookup of a reserved word.
    pub fn keyword(text: &str) -> Option<Kind> {
        match text {
            "print" => Some(Kind::Print),
            "input" => Some(Kind::Input),
            "declare" => Some(Kind::Declare),
            "if" => Some(Kind::If),
            "then" => Some(Kind::Then),
            "endif" => Some(Kind::EndIf),
            "while" => Some(Kind::While),
            "repeat" => Some(Kind::Repeat),
            "endwhile" => Some(Kind::EndWhile),
            _ => None,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Kind::EqEq | Kind::NotEq | Kind::Lt | Kind::LtEq | Kind::Gt | Kind::GtEq
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Eof => "EOF",
            Kind::Newline => "NEWLINE",
            Kind::Number => "NUMBER",
            Kind::Identifier => "IDENT",
            Kind::String => "STRING",
            Kind::Print => "PRINT",
            Kind::Input => "INPUT",
            Kind::Declare => "DECLARE",
            Kind::If => "IF",
            Kind::Then => "THEN",
            Kind::EndIf => "ENDIF",
            Kind::While => "WHILE",
            Kind::Repeat => "REPEAT",
            Kind::EndWhile => "ENDWHILE",
            Kind::Eq => "EQ",
            Kind::Plus => "PLUS",
            Kind::Minus => "MINUS",
            Kind::Asterisk => "ASTERISK",
            Kind::Slash => "SLASH",
            Kind::EqEq => "EQEQ",
            Kind::NotEq => "NOTEQ",
            Kind::Lt => "LT",
            Kind::LtEq => "LTEQ",
            Kind::Gt => "GT",
            Kind::GtEq => "GTEQ",
            Kind::LBrace => "LBRACE",
            Kind::RBrace => "RBRACE",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(Kind::keyword("while"), Some(Kind::While));
        assert_eq!(Kind::keyword("endwhile"), Some(Kind::EndWhile));
        assert_eq!(Kind::keyword("While"), None);
        assert_eq!(Kind::keyword("whil"), None);
        assert_eq!(Kind::keyword("whiles"), None);
        assert_eq!(Kind::keyword("enter"), None);
    }

    #[test]
    fn comparison_operators() {
        for kind in [Kind::EqEq, Kind::NotEq, Kind::Lt, Kind::LtEq, Kind::Gt, Kind::GtEq] {
            assert!(kind.is_comparison());
        }
        assert!(!Kind::Eq.is_comparison());
        assert!(!Kind::Plus.is_comparison());
    }
}
