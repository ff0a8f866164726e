//! Lightweight compiler: translates a small imperative scripting language
//! into C++ in a single pass.
//!
//! - `lexer` turns source text into tokens on demand.
//! - `parser` recognizes the grammar and emits C++ while it parses.
//! - `emitter` accumulates the header and body and writes the output file.

pub mod config;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use config::Config;
pub use emitter::{Emitter, OUTPUT_FILE};
pub use error::{CompileResult, CompilerError, LexingError, SyntaxError};
pub use lexer::Lexer;
pub use parser::{translate, Parser};
pub use token::{Kind, Token};

pub fn read_source(path: &Path) -> CompileResult<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            CompilerError::FileNotFound(format!("Cannot read {}: {}", path.display(), e))
        }
        _ => CompilerError::IO(e),
    })
}

/// Compiles `input` and writes the translation to `output`. Nothing is
/// written when translation fails.
pub fn compile_file(input: &Path, output: &Path, verbose: bool) -> CompileResult<PathBuf> {
    let source = read_source(input)?;

    let mut parser = Parser::new(&source, Emitter::new(output))?.with_trace(verbose);
    parser.program()?;

    let emitter = parser.into_emitter();
    emitter.write_file()?;
    Ok(emitter.path().to_path_buf())
}
