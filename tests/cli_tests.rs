use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lwc-cli-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn lwc(dir: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lwc"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .env("LWC_ENV", "test")
        .env_remove("LWC_VERBOSE")
        .output()
        .expect("lwc should start")
}

#[test]
fn missing_source_file_argument() {
    let dir = workdir("noargs");
    let output = lwc(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: compiler needs source file as argument."));
    assert!(!dir.join("output.cpp").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn compiles_to_output_cpp() {
    let dir = workdir("compile");
    fs::write(dir.join("hello.lw"), "declare x = 5\nprint x\n").unwrap();

    let output = lwc(&dir, &["hello.lw"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Parsing completed."));

    let cpp = fs::read_to_string(dir.join("output.cpp")).unwrap();
    assert!(cpp.contains("    double x = 5.0;\n"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn compile_error_exits_with_failure() {
    let dir = workdir("error");
    fs::write(dir.join("bad.lw"), "print y\n").unwrap();

    let output = lwc(&dir, &["bad.lw"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Referencing variable before assignment: y"));
    assert!(!dir.join("output.cpp").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn tokens_lists_kind_and_text() {
    let dir = workdir("tokens");
    fs::write(dir.join("hello.lw"), "print \"hello\"\n").unwrap();

    let output = lwc(&dir, &["tokens", "hello.lw"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("PRINT") && lines[0].contains("\"print\""));
    assert!(lines[1].contains("STRING") && lines[1].contains("\"hello\""));
    assert!(lines[4].contains("EOF"));
    assert!(!dir.join("output.cpp").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn tokens_json_dump() {
    let dir = workdir("tokens-json");
    fs::write(dir.join("hello.lw"), "declare a = 1.5\n").unwrap();

    let output = lwc(&dir, &["tokens", "hello.lw", "--json"]);
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0]["kind"], "Declare");
    assert_eq!(tokens[3]["kind"], "Number");
    assert_eq!(tokens[3]["text"], "1.5");
    assert_eq!(tokens[3]["line"], 1);
    fs::remove_dir_all(&dir).unwrap();
}
