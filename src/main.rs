//! minilang runtime host tool entry point.

mod cli;

use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, Command, PolicyArg};
use minilang_runtime::{Console, Primitive, RuntimeConfig, RuntimeResult, render_declarations};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout belongs to the runtime's console output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> RuntimeResult<()> {
    match cli.command {
        Command::Symbols => {
            let mut stdout = io::stdout().lock();
            for primitive in Primitive::ALL {
                let signature = format!("{}/{}", primitive.symbol(), primitive.arity());
                writeln!(stdout, "{signature:<16}{}", primitive.summary())?;
            }
        }
        Command::Header { format } => {
            io::stdout()
                .lock()
                .write_all(render_declarations(format.into()).as_bytes())?;
        }
        Command::Call {
            symbol,
            args,
            print_return,
        } => {
            let config = call_config(cli.malformed_input);
            tracing::debug!(?config, "runtime configuration");

            let primitive = Primitive::resolve(&symbol)?;
            let mut console = Console::with_config(io::stdin().lock(), io::stdout().lock(), config);
            let value = primitive.invoke(&mut console, &args)?;

            if print_return {
                let (_, mut stdout) = console.into_parts();
                writeln!(stdout, "\n= {value}")?;
            }
        }
    }
    Ok(())
}

/// The `--malformed-input` flag wins over the environment. Without it, an
/// unusable environment value is logged and the defaults apply.
fn call_config(policy: Option<PolicyArg>) -> RuntimeConfig {
    match policy {
        Some(policy) => RuntimeConfig {
            malformed_input: policy.into(),
        },
        None => RuntimeConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("{e}; using defaults");
            RuntimeConfig::default()
        }),
    }
}
