//! Manifest of the exported entry points.
//!
//! Code generators use this table to declare the runtime imports, check the
//! arity of `extern func` calls, and emit declarations for C or LLVM IR.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{RuntimeError, RuntimeResult};

/// One runtime primitive. Every primitive takes at most one `i64` and
/// returns an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    DisplayMenu,
    ReadInput,
    PrintInputPrompt,
    PrintResult,
    PrintSeparator,
    PrintError,
}

impl Primitive {
    pub const ALL: [Primitive; 6] = [
        Primitive::DisplayMenu,
        Primitive::ReadInput,
        Primitive::PrintInputPrompt,
        Primitive::PrintResult,
        Primitive::PrintSeparator,
        Primitive::PrintError,
    ];

    /// Linker symbol of the exported function.
    pub const fn symbol(self) -> &'static str {
        match self {
            Primitive::DisplayMenu => "show_menu",
            Primitive::ReadInput => "get_input",
            Primitive::PrintInputPrompt => "print_prompt",
            Primitive::PrintResult => "print_result",
            Primitive::PrintSeparator => "print_dash",
            Primitive::PrintError => "print_error",
        }
    }

    pub const fn arity(self) -> usize {
        match self.param_name() {
            Some(_) => 1,
            None => 0,
        }
    }

    const fn param_name(self) -> Option<&'static str> {
        match self {
            Primitive::DisplayMenu | Primitive::ReadInput | Primitive::PrintInputPrompt => None,
            Primitive::PrintResult | Primitive::PrintSeparator => Some("value"),
            Primitive::PrintError => Some("code"),
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Primitive::DisplayMenu => "write the operation menu and choice prompt",
            Primitive::ReadInput => "read the next integer from standard input",
            Primitive::PrintInputPrompt => "write the number prompt",
            Primitive::PrintResult => "write a result line",
            Primitive::PrintSeparator => "write a single dash (argument ignored)",
            Primitive::PrintError => "write the message for a sentinel code",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }

    /// Look up `symbol`, failing with `UnknownPrimitive`.
    pub fn resolve(symbol: &str) -> RuntimeResult<Self> {
        Self::from_symbol(symbol).ok_or_else(|| RuntimeError::unknown_primitive(symbol))
    }

    /// Call this primitive on `console` with positional `args`.
    pub fn invoke<R: BufRead, W: Write>(
        self,
        console: &mut Console<R, W>,
        args: &[i64],
    ) -> RuntimeResult<i64> {
        if args.len() != self.arity() {
            return Err(RuntimeError::arity_mismatch(
                self.symbol(),
                self.arity(),
                args.len(),
            ));
        }

        tracing::debug!(symbol = self.symbol(), ?args, "invoke");
        match (self, args) {
            (Primitive::DisplayMenu, []) => console.display_menu(),
            (Primitive::ReadInput, []) => console.read_input(),
            (Primitive::PrintInputPrompt, []) => console.print_input_prompt(),
            (Primitive::PrintResult, &[value]) => console.print_result(value),
            (Primitive::PrintSeparator, &[value]) => console.print_separator(value),
            (Primitive::PrintError, &[code]) => console.print_error(code),
            _ => unreachable!("arity checked above"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeclarationFormat {
    #[default]
    C,
    Llvm,
}

/// Render declarations for every primitive in [`Primitive::ALL`] order.
pub fn render_declarations(format: DeclarationFormat) -> String {
    let mut out = String::new();
    match format {
        DeclarationFormat::C => {
            out.push_str("/* minilang runtime entry points */\n");
            out.push_str("#ifndef MINILANG_RUNTIME_H\n#define MINILANG_RUNTIME_H\n\n");
            out.push_str("#include <stdint.h>\n\n");
            for primitive in Primitive::ALL {
                let params = match primitive.param_name() {
                    Some(name) => format!("int64_t {name}"),
                    None => "void".to_owned(),
                };
                let _ = writeln!(out, "int64_t {}({params});", primitive.symbol());
            }
            out.push_str("\n#endif /* MINILANG_RUNTIME_H */\n");
        }
        DeclarationFormat::Llvm => {
            for primitive in Primitive::ALL {
                let params = vec!["i64"; primitive.arity()].join(", ");
                let _ = writeln!(out, "declare i64 @{}({params})", primitive.symbol());
            }
        }
    }
    out
}
