use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE: &str = "output.cpp";

/// Accumulates translated code. The header is written once before any
/// statement, the body grows as statements are parsed.
#[derive(Debug)]
pub struct Emitter {
    path: PathBuf,
    header: String,
    code: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::new(OUTPUT_FILE)
    }
}

impl Emitter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            header: String::new(),
            code: String::from("\n"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    pub fn header_line(&mut self, header: &str) {
        self.header.push_str(header);
        self.header.push('\n');
    }

    pub fn output(&self) -> String {
        format!("{}{}", self.header, self.code)
    }

    pub fn write_file(&self) -> io::Result<()> {
        fs::write(&self.path, self.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn header_precedes_body() {
        let mut emitter = Emitter::default();
        emitter.emit("x");
        emitter.header_line("first");
        emitter.emit_line(" = 1;");
        emitter.header_line("second");

        assert_eq!(emitter.output(), "first\nsecond\n\nx = 1;\n");
        assert_eq!(emitter.path(), Path::new(OUTPUT_FILE));
    }

    #[test]
    fn write_file_persists_output() {
        let path = env::temp_dir().join(format!("lwc-emitter-{}.cpp", std::process::id()));
        let mut emitter = Emitter::new(&path);
        emitter.header_line("int main() {");
        emitter.emit_line("}");
        emitter.write_file().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, emitter.output());
    }

    #[test]
    fn write_file_reports_io_errors() {
        let path = env::temp_dir()
            .join("lwc-missing-directory")
            .join("nested")
            .join(OUTPUT_FILE);
        assert!(Emitter::new(path).write_file().is_err());
    }
}
