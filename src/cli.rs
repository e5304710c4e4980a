//! Command-line interface for the minilang runtime host tool.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use minilang_runtime::{DeclarationFormat, MalformedInputPolicy};

#[derive(Parser)]
#[command(name = "minilang-rt")]
#[command(about = "Inspect and drive the minilang native runtime", long_about = None)]
pub struct Cli {
    /// How `get_input` treats non-integer input (overrides MINILANG_MALFORMED_INPUT)
    #[arg(long, global = true, value_enum)]
    pub malformed_input: Option<PolicyArg>,

    /// Log more to stderr; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the runtime entry points with their arity
    Symbols,
    /// Print declarations for code generators
    Header {
        #[arg(long, value_enum, default_value_t = FormatArg::C)]
        format: FormatArg,
    },
    /// Invoke one entry point against stdin and stdout
    Call {
        /// Exported symbol, e.g. `print_result`
        symbol: String,
        /// Integer arguments
        #[arg(allow_negative_numbers = true)]
        args: Vec<i64>,
        /// Print the returned integer after the call's own output
        #[arg(long)]
        print_return: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    C,
    Llvm,
}

impl From<FormatArg> for DeclarationFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => DeclarationFormat::C,
            FormatArg::Llvm => DeclarationFormat::Llvm,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Zero,
    Skip,
}

impl From<PolicyArg> for MalformedInputPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Zero => MalformedInputPolicy::Zero,
            PolicyArg::Skip => MalformedInputPolicy::Skip,
        }
    }
}
