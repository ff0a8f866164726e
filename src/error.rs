use crate::token::{Kind, Token};
use std::error::Error;
use std::fmt;

pub type CompileResult<T> = Result<T, CompilerError>;

#[derive(Debug)]
pub enum CompilerError {
    FileNotFound(String),
    IO(std::io::Error),
    Lexing(LexingError),
    Syntax(SyntaxError),
}

impl Error for CompilerError {}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::IO(err) => write!(f, "IOError: {}", err),
            CompilerError::FileNotFound(err) => write!(f, "FileNotFoundError: {}", err),
            CompilerError::Lexing(err) => write!(f, "{}", err),
            CompilerError::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IO(err)
    }
}

impl From<LexingError> for CompilerError {
    fn from(err: LexingError) -> Self {
        CompilerError::Lexing(err)
    }
}

impl From<SyntaxError> for CompilerError {
    fn from(err: SyntaxError) -> Self {
        CompilerError::Syntax(err)
    }
}

#[derive(Debug, PartialEq)]
pub struct LexingError {
    pub message: String,
    pub character: char,
    pub line: usize,
    pub position: usize,
}

impl Error for LexingError {}

impl LexingError {
    pub fn new(message: String, character: char, line: usize, position: usize) -> Self {
        Self {
            message,
            character,
            line,
            position,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub text: String,
    pub kind: Kind,
    pub line: usize,
    pub position: usize,
}

impl Error for SyntaxError {}

impl SyntaxError {
    pub fn from_token(token: &Token, message: String) -> Self {
        Self {
            message,
            text: token.text.clone(),
            kind: token.kind,
            line: token.line,
            position: token.position,
        }
    }
}

impl fmt::Display for LexingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LexingError: {}\n  --> {}:{}",
            self.message, self.line, self.position,
        )
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SyntaxError: {}\n  --> {}:{}",
            self.message, self.line, self.position,
        )
    }
}
