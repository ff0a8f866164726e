use crate::emitter::Emitter;
use crate::error::{CompileResult, CompilerError, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Kind, Token};
use std::collections::HashSet;
use std::mem;

const INDENT: &str = "    ";

/// C++ keywords and names the generated file relies on. Script variables
/// with these names get a trailing `_`, which script identifiers never
/// contain.
const RESERVED_NAMES: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "cin", "class", "const",
    "continue", "cout", "default", "delete", "do", "double", "else", "endl",
    "enum", "explicit", "export", "extern", "false", "float", "for", "friend",
    "goto", "inline", "int", "long", "main", "mutable", "namespace", "new",
    "not", "nullptr", "operator", "or", "and", "private", "protected", "public",
    "register", "return", "short", "signed", "sizeof", "static", "std", "struct",
    "switch", "template", "this", "throw", "true", "try", "typedef", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "xor",
];

/// Name under which a script variable appears in the generated C++.
fn cpp_name(name: &str) -> String {
    if RESERVED_NAMES.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Numbers are always `double` literals so integer division never happens.
fn cpp_number(text: &str) -> String {
    if text.contains('.') {
        text.to_string()
    } else {
        format!("{}.0", text)
    }
}

/// Recursive-descent parser that translates while it recognizes: every rule
/// writes its C++ fragment to the emitter as soon as it has matched.
pub struct Parser {
    lexer: Lexer,
    emitter: Emitter,
    symbols: HashSet<String>,
    current: Token,
    peek: Token,
    depth: usize,
    trace: bool,
}

/// Translates a whole program and returns the generated C++ source.
pub fn translate(source: &str) -> CompileResult<String> {
    let mut parser = Parser::new(source, Emitter::default())?;
    parser.program()?;
    Ok(parser.into_emitter().output())
}

impl Parser {
    pub fn new(source: &str, emitter: Emitter) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Self {
            lexer,
            emitter,
            symbols: HashSet::new(),
            current,
            peek,
            depth: 1,
            trace: false,
        })
    }

    /// Prints the name of every grammar rule as it is entered.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn symbols(&self) -> &HashSet<String> {
        &self.symbols
    }

    pub fn into_emitter(self) -> Emitter {
        self.emitter
    }

    fn at(&self) -> &Token {
        &self.current
    }

    fn check(&self, kind: Kind) -> bool {
        self.current.kind == kind
    }

    /// Shifts the lookahead window and returns the token that was current.
    fn next_token(&mut self) -> CompileResult<Token> {
        let next = self.lexer.next_token()?;
        let peek = mem::replace(&mut self.peek, next);
        Ok(mem::replace(&mut self.current, peek))
    }

    fn eat(&mut self, expecting: Kind) -> CompileResult<Token> {
        if !self.check(expecting) {
            return Err(self.error(format!(
                "Expected {}, got {} {:?}",
                expecting,
                self.at().kind,
                self.at().text
            )));
        }

        self.next_token()
    }

    fn error(&self, message: String) -> CompilerError {
        SyntaxError::from_token(self.at(), message).into()
    }

    fn trace(&self, rule: &str) {
        if self.trace {
            println!("{}", rule);
        }
    }

    fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }

    // program ::= NEWLINE* statement* EOF
    pub fn program(&mut self) -> CompileResult<()> {
        self.trace("PROGRAM");

        self.emitter.header_line("#include<iostream>");
        self.emitter.header_line("using namespace std;");
        self.emitter.header_line("");
        self.emitter.header_line("int main() {");

        while self.check(Kind::Newline) {
            self.next_token()?;
        }

        while !self.check(Kind::Eof) {
            self.statement()?;
        }

        self.emitter.emit_line("");
        self.emitter.emit_line(&format!("{}return 0;", INDENT));
        self.emitter.emit_line("}");
        Ok(())
    }

    fn statement(&mut self) -> CompileResult<()> {
        match self.at().kind {
            // "print" (STRING | expression)
            Kind::Print => {
                self.trace("STATEMENT-PRINT");
                self.next_token()?;

                if self.check(Kind::String) {
                    let text = self.next_token()?.text;
                    let line = format!("{}cout << \"{}\" << endl;", self.indent(), text);
                    self.emitter.emit_line(&line);
                } else {
                    let open = format!("{}cout << (double)(", self.indent());
                    self.emitter.emit(&open);
                    self.expression()?;
                    self.emitter.emit_line(") << endl;");
                }
            }
            // "if" comparison "{" nl statement* "}"
            // "while" comparison "{" nl statement* "}"
            Kind::If | Kind::While => {
                let keyword = if self.check(Kind::If) { "if" } else { "while" };
                self.trace(&format!("STATEMENT-{}", keyword.to_uppercase()));
                self.next_token()?;

                let open = format!("{}{}(", self.indent(), keyword);
                self.emitter.emit(&open);
                self.comparison()?;

                self.eat(Kind::LBrace)?;
                self.emitter.emit_line(") {");
                self.nl()?;

                self.depth += 1;
                while !self.check(Kind::RBrace) && !self.check(Kind::Eof) {
                    self.statement()?;
                }
                self.depth -= 1;

                self.eat(Kind::RBrace)?;
                let close = format!("{}}}", self.indent());
                self.emitter.emit_line(&close);
            }
            // "declare" IDENT "=" expression
            Kind::Declare => {
                self.trace("STATEMENT-DECLARE");
                self.next_token()?;

                let name = self.eat(Kind::Identifier)?.text;
                // Only the first declaration carries the type.
                let target = if self.symbols.insert(name.clone()) {
                    format!("{}double {} = ", self.indent(), cpp_name(&name))
                } else {
                    format!("{}{} = ", self.indent(), cpp_name(&name))
                };

                self.eat(Kind::Eq)?;
                self.emitter.emit(&target);
                self.expression()?;
                self.emitter.emit_line(";");
            }
            // IDENT "=" expression
            Kind::Identifier => {
                self.trace("STATEMENT-ASSIGN");

                if !self.symbols.contains(&self.at().text) {
                    return Err(self.error(format!(
                        "Cannot use variable {} without declaration",
                        self.at().text
                    )));
                }

                let name = self.next_token()?.text;
                self.eat(Kind::Eq)?;

                let target = format!("{}{} = ", self.indent(), cpp_name(&name));
                self.emitter.emit(&target);
                self.expression()?;
                self.emitter.emit_line(";");
            }
            // "input" IDENT
            Kind::Input => {
                self.trace("STATEMENT-INPUT");
                self.next_token()?;

                // Registers the name only; no read is emitted.
                let name = self.eat(Kind::Identifier)?.text;
                self.symbols.insert(name);
            }
            _ => {
                return Err(self.error(format!(
                    "Invalid syntax at {:?} ({})",
                    self.at().text,
                    self.at().kind
                )));
            }
        }

        self.nl()
    }

    // comparison ::= expression comparisonOp expression (comparisonOp expression)*
    fn comparison(&mut self) -> CompileResult<()> {
        self.trace("COMPARISON");

        self.expression()?;
        if !self.at().kind.is_comparison() {
            return Err(self.error(format!(
                "Expected comparison operator, got {} {:?}",
                self.at().kind,
                self.at().text
            )));
        }

        while self.at().kind.is_comparison() {
            let operator = self.next_token()?.text;
            self.emitter.emit(&format!(" {} ", operator));
            self.expression()?;
        }

        Ok(())
    }

    // expression ::= term (("+" | "-") term)*
    fn expression(&mut self) -> CompileResult<()> {
        self.trace("EXPRESSION");

        self.term()?;
        while self.check(Kind::Plus) || self.check(Kind::Minus) {
            let operator = self.next_token()?.text;
            self.emitter.emit(&format!(" {} ", operator));
            self.term()?;
        }

        Ok(())
    }

    // term ::= unary (("*" | "/") unary)*
    fn term(&mut self) -> CompileResult<()> {
        self.trace("TERM");

        self.unary()?;
        while self.check(Kind::Asterisk) || self.check(Kind::Slash) {
            let operator = self.next_token()?.text;
            self.emitter.emit(&format!(" {} ", operator));
            self.unary()?;
        }

        Ok(())
    }

    // unary ::= ("+" | "-")? primary
    fn unary(&mut self) -> CompileResult<()> {
        self.trace("UNARY");

        if self.check(Kind::Plus) || self.check(Kind::Minus) {
            let sign = self.next_token()?.text;
            self.emitter.emit(&sign);
        }

        self.primary()
    }

    // primary ::= NUMBER | IDENT
    fn primary(&mut self) -> CompileResult<()> {
        self.trace(&format!("PRIMARY ({})", self.at().text));

        match self.at().kind {
            Kind::Number => {}
            Kind::Identifier => {
                if !self.symbols.contains(&self.at().text) {
                    return Err(self.error(format!(
                        "Referencing variable before assignment: {}",
                        self.at().text
                    )));
                }
            }
            _ => {
                return Err(self.error(format!(
                    "Unexpected token at {:?} ({})",
                    self.at().text,
                    self.at().kind
                )));
            }
        }

        let token = self.next_token()?;
        let code = match token.kind {
            Kind::Number => cpp_number(&token.text),
            _ => cpp_name(&token.text),
        };
        self.emitter.emit(&code);
        Ok(())
    }

    // nl ::= NEWLINE+
    fn nl(&mut self) -> CompileResult<()> {
        self.trace("NEWLINE");

        self.eat(Kind::Newline)?;
        while self.check(Kind::Newline) {
            self.next_token()?;
        }

        Ok(())
    }
}
