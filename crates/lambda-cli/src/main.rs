use std::fmt;
use std::io::Write as _;
use std::process::ExitCode;
use std::{env, io};

use lambda_core::ast::Program;
use lambda_core::{debruijn, parse_program, pretty, source, SyntaxError};
use lambda_types::{print_types, Engine};

const ACTION_FLAGS: [&str; 3] = ["test-source-read", "unparse", "type"];

fn main() -> ExitCode {
    let flags = match Flags::parse(env::args().skip(1)) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TestSourceRead,
    Unparse,
    Type,
}

struct Flags {
    action: Action,
}

impl Flags {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut requested = Vec::new();

        for arg in args {
            let Some(name) = arg.strip_prefix("--") else {
                return Err(CliError::UnrecognizedOption(arg));
            };
            // `--name=value` is accepted; the value itself is never meaningful.
            let name = name.split('=').next().unwrap_or(name);

            let (base, disables) = match name.strip_prefix("no-") {
                Some(base) => (base, true),
                None => (name, false),
            };

            if !ACTION_FLAGS.contains(&base) {
                return Err(CliError::UnrecognizedOption(arg));
            }
            if !disables {
                requested.push(base.to_owned());
            }
        }

        requested.dedup();
        let action = match requested.as_slice() {
            [] => Action::Unparse,
            [only] => action_for(only),
            _ => return Err(CliError::ConflictingActions),
        };

        Ok(Self { action })
    }
}

fn action_for(name: &str) -> Action {
    match name {
        "test-source-read" => Action::TestSourceRead,
        "unparse" => Action::Unparse,
        "type" => Action::Type,
        _ => unreachable!("validated against ACTION_FLAGS above"),
    }
}

#[derive(Debug)]
enum CliError {
    UnrecognizedOption(String),
    ConflictingActions,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedOption(arg) => write!(f, "unrecognized option: {arg}"),
            Self::ConflictingActions => write!(
                f,
                "--test-source-read means running exactly one terminal action; \
                 --unparse and --type cannot be combined with it or each other in the same run, \
                 but more than one of those actions was requested"
            ),
        }
    }
}

impl std::error::Error for CliError {}

#[derive(Debug)]
enum RunError {
    Cli(CliError),
    Read(String),
    Syntax(Vec<SyntaxError>),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli(err) => write!(f, "{err}"),
            Self::Read(message) => write!(f, "{message}"),
            Self::Syntax(errors) => {
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<CliError> for RunError {
    fn from(err: CliError) -> Self {
        Self::Cli(err)
    }
}

fn run(flags: Flags) -> Result<(), RunError> {
    let bytes = source::read_stdin().map_err(RunError::Read)?;

    match flags.action {
        Action::TestSourceRead => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write!(out, "{} ", bytes.len()).ok();
            out.write_all(&bytes).ok();
            writeln!(out).ok();
            Ok(())
        }
        Action::Unparse => {
            let program = parse_checked(&bytes)?;
            for expr in &program {
                println!("{}", pretty::canonical(&debruijn::convert(expr)));
            }
            Ok(())
        }
        Action::Type => {
            let program = parse_checked(&bytes)?;
            let mut engine = Engine::new();
            for expr in &program {
                let converted = debruijn::convert(expr);
                engine.infer(&converted);
            }
            for line in print_types(engine.arena_mut()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn parse_checked(bytes: &[u8]) -> Result<Program, RunError> {
    let (program, errors) = parse_program(bytes);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(RunError::Syntax(errors))
    }
}
