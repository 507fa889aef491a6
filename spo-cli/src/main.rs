//! spo CLI - コマンドラインインターフェース
//!
//! テーブル駆動のフレームに対して `spo` コマンドを試すためのREPL

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use spo_core::po::{PO_HELP, SPO_HELP};
use spo_core::{register_po_commands, Command, CommandTable, InvocationContext, PoConfig};
use spo_host::{FixtureFrame, Language};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// spo - language-aware `po` for debugger frames
#[derive(Parser)]
#[command(name = "spo")]
#[command(version = "0.1.0")]
#[command(about = "Language-aware substitute for the debugger's po command", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: SpoCommand,
}

#[derive(Subcommand)]
enum SpoCommand {
    /// Start an interactive session against a fixture frame
    Repl {
        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Describe a single expression and exit
    Eval {
        /// Expression to describe
        expression: String,

        #[command(flatten)]
        frame: FrameArgs,
    },
}

#[derive(Args)]
struct FrameArgs {
    /// Source language reported by the frame
    #[arg(short, long, default_value = "swift")]
    language: Language,

    /// Frame language that gets the spo strategy chain
    #[arg(long, default_value = "swift")]
    specialized_language: Language,

    /// Language forced when describing an address
    #[arg(long, default_value = "objc")]
    address_language: Language,

    /// Define a variable path (repeatable)
    #[arg(long = "var", value_name = "PATH=DESCRIPTION")]
    variables: Vec<String>,

    /// Define an object at an address (repeatable)
    #[arg(long = "object", value_name = "ADDRESS=DESCRIPTION")]
    objects: Vec<String>,

    /// Also send general expressions through variable path lookup
    #[arg(long)]
    no_path_guard: bool,

    /// Do not report errors from the print() fallback
    #[arg(long)]
    quiet_fallback: bool,
}

impl FrameArgs {
    fn build_frame(&self) -> Result<FixtureFrame> {
        let mut frame = FixtureFrame::new(self.language);
        for binding in &self.variables {
            frame.define_variable_binding(binding)?;
        }
        for binding in &self.objects {
            frame.define_object_binding(binding)?;
        }
        Ok(frame)
    }

    fn config(&self) -> PoConfig {
        PoConfig {
            specialized_language: self.specialized_language,
            address_language: self.address_language,
            variable_path_guard: !self.no_path_guard,
            report_fallback_errors: !self.quiet_fallback,
        }
    }
}

fn main() -> Result<()> {
    // RUST_LOG で詳細なログを有効化できる
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        SpoCommand::Repl { frame } => {
            let mut table = CommandTable::new();
            register_po_commands(&mut table, frame.config())?;
            let mut fixture = frame.build_frame()?;
            run_repl(&table, &mut fixture)?;
        }
        SpoCommand::Eval { expression, frame } => {
            let mut table = CommandTable::new();
            register_po_commands(&mut table, frame.config())?;
            let fixture = frame.build_frame()?;
            run_named(&table, &fixture, "spo", &expression);
        }
    }

    Ok(())
}

/// REPLループを実行する
fn run_repl(table: &CommandTable, frame: &mut FixtureFrame) -> Result<()> {
    println!("spo - language-aware po");
    println!("Type 'help' for available commands, 'quit' to exit.");
    println!();

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("(spo) ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match handle_command(table, frame, line) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// コマンドを処理する（falseなら終了）
fn handle_command(table: &CommandTable, frame: &mut FixtureFrame, line: &str) -> Result<bool> {
    match Command::parse(line) {
        Some(Command::Spo(expression)) => run_named(table, frame, "spo", &expression),
        Some(Command::Po(expression)) => run_named(table, frame, "po", &expression),
        Some(Command::Language(name)) => {
            let language: Language = name.parse()?;
            frame.set_language(language);
            println!("Frame language set to {}", language);
        }
        Some(Command::Var(binding)) => frame.define_variable_binding(&binding)?,
        Some(Command::Object(binding)) => frame.define_object_binding(&binding)?,
        Some(Command::Frame) => print_frame(frame),
        Some(Command::Help) => print_help(),
        Some(Command::Quit) => {
            println!("Goodbye!");
            return Ok(false);
        }
        None => {
            println!("Unknown command: {}", line);
            println!("Type 'help' for available commands.");
        }
    }

    Ok(true)
}

/// 登録済みコマンドを実行し、ホスト側の print() 出力も表示する
fn run_named(table: &CommandTable, frame: &FixtureFrame, name: &str, expression: &str) {
    debug!("running '{}' on '{}'", name, expression);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    {
        let mut ctx = InvocationContext::new(expression, frame, &mut out);
        if !table.dispatch(name, &mut ctx) {
            eprintln!("Command '{}' is not registered", name);
        }
    }

    for line in frame.take_console() {
        // 書き込みに失敗してもREPLは続ける
        let _ = writeln!(out, "{}", line);
    }
}

fn print_frame(frame: &FixtureFrame) {
    println!("Language: {}", frame.language());

    println!("Variables:");
    for (path, description) in frame.variables() {
        println!("  {} = {}", path, description);
    }

    println!("Objects:");
    for (address, description) in frame.objects() {
        println!("  0x{:x} = {}", address, description);
    }
}

fn print_help() {
    println!("Available commands:");
    println!();
    println!("  help               - Show this help message");
    println!("  quit/exit/q        - Exit");
    println!();
    println!("  spo <expr>         - {}", SPO_HELP.lines().next().unwrap_or_default());
    println!("  po <expr>          - {}", PO_HELP);
    println!();
    println!("Frame commands:");
    println!("  language <lang>    - Set the frame language (swift, objc, c, c++, rust)");
    println!("  var <path> = <d>   - Define a variable path and its description");
    println!("  object <addr> = <d> - Define an object at an address");
    println!("  frame              - Show the frame contents");
    println!();
    println!("{}", SPO_HELP);
    println!();
    println!("Examples:");
    println!("  var self.title = \"Inbox\"");
    println!("  spo self.title");
    println!("  spo 0x76543210");
    println!("  spo items.count + 1");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_args(args: &[&str]) -> FrameArgs {
        let argv = ["spo", "eval", "x"].iter().chain(args.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            SpoCommand::Eval { frame, .. } => frame,
            SpoCommand::Repl { .. } => panic!("expected eval subcommand"),
        }
    }

    #[test]
    fn test_default_flags_match_default_config() {
        assert_eq!(frame_args(&[]).config(), PoConfig::default());
    }

    #[test]
    fn test_language_flags_feed_config() {
        let args = frame_args(&[
            "--language",
            "rust",
            "--specialized-language",
            "rust",
            "--address-language",
            "c",
            "--no-path-guard",
            "--quiet-fallback",
        ]);
        assert_eq!(
            args.config(),
            PoConfig {
                specialized_language: Language::Rust,
                address_language: Language::C,
                variable_path_guard: false,
                report_fallback_errors: false,
            }
        );
        assert_eq!(args.build_frame().unwrap().language(), Language::Rust);
    }

    #[test]
    fn test_bindings_populate_frame() {
        let frame = frame_args(&["--var", "self.title=Inbox", "--object", "0x10=<Node>"])
            .build_frame()
            .unwrap();
        assert_eq!(frame.variables().collect::<Vec<_>>(), vec![("self.title", "Inbox")]);
        assert_eq!(frame.objects().collect::<Vec<_>>(), vec![(0x10, "<Node>")]);
    }
}
