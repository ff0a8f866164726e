use clap::{Parser as ClapParser, Subcommand};
use lightweight::{compile_file, read_source, CompilerError, Config, Lexer, OUTPUT_FILE};
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser)]
#[command(author, version, about = "Lightweight compiler: translates scripts to C++")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source file to compile into output.cpp
    file: Option<PathBuf>,

    /// Print each grammar rule as it is parsed
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a source file
    Tokens {
        file: PathBuf,
        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Manage compiler configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Write a config file with defaults
    Init,
}

fn compile(file: &Path, config: &Config) -> Result<(), CompilerError> {
    if config.banner {
        println!("-------------------Light weight compiler-------------------");
    }

    compile_file(file, Path::new(OUTPUT_FILE), config.verbose)?;
    println!("Parsing completed.");
    Ok(())
}

fn dump_tokens(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(file)?;
    let tokens = Lexer::new(&source).tokenize()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{:>4}:{:<3} {:<10} {:?}", token.line, token.position, token.kind, token.text);
        }
    }

    Ok(())
}

fn run(cli: Cli, mut config: Config) -> Result<(), Box<dyn std::error::Error>> {
    config.verbose |= cli.verbose;

    match cli.command {
        Some(Commands::Tokens { file, json }) => dump_tokens(&file, json)?,
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                println!("{}", config.to_json()?);
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                } else {
                    Config::default().save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
        },
        None => match cli.file {
            Some(file) => compile(&file, &config)?,
            None => return Err("compiler needs source file as argument.".into()),
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load();

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
