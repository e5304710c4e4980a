//! Tests for the primitive manifest and rendered declarations

use std::io::Cursor;

use insta::assert_snapshot;
use minilang_runtime::{
    Console, DeclarationFormat, Primitive, RuntimeErrorKind, render_declarations,
};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_symbols_resolve() {
    for primitive in Primitive::ALL {
        assert_eq!(Primitive::from_symbol(primitive.symbol()), Some(primitive));
    }
    assert_eq!(Primitive::from_symbol("printf"), None);

    let err = Primitive::resolve("show_menus").unwrap_err();
    assert!(matches!(err.kind(), RuntimeErrorKind::UnknownPrimitive(s) if s == "show_menus"));
}

#[test]
fn test_arities() {
    let arities: Vec<_> = Primitive::ALL
        .iter()
        .map(|p| (p.symbol(), p.arity()))
        .collect();
    assert_eq!(
        arities,
        [
            ("show_menu", 0),
            ("get_input", 0),
            ("print_prompt", 0),
            ("print_result", 1),
            ("print_dash", 1),
            ("print_error", 1),
        ]
    );
}

#[test]
fn test_invoke_checks_arity() {
    let mut c = console("");
    let err = Primitive::PrintResult.invoke(&mut c, &[]).unwrap_err();
    assert!(matches!(
        err.kind(),
        RuntimeErrorKind::ArityMismatch {
            symbol: "print_result",
            expected: 1,
            found: 0,
        }
    ));
    assert_eq!(err.to_string(), "print_result expects 1 argument(s), got 0");

    let err = Primitive::DisplayMenu.invoke(&mut c, &[1]).unwrap_err();
    assert!(matches!(err.kind(), RuntimeErrorKind::ArityMismatch { found: 1, .. }));

    let (_, out) = c.into_parts();
    assert!(out.is_empty());
}

#[test]
fn test_invoke_dispatches() {
    let mut c = console("41");
    let value = Primitive::ReadInput.invoke(&mut c, &[]).unwrap();
    assert_eq!(value, 41);
    assert_eq!(Primitive::PrintSeparator.invoke(&mut c, &[-5]).unwrap(), 0);
    assert_eq!(Primitive::PrintResult.invoke(&mut c, &[value + 1]).unwrap(), 0);
    assert_eq!(Primitive::PrintError.invoke(&mut c, &[-222]).unwrap(), 0);

    let (_, out) = c.into_parts();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "->> RISULTATO: 42\nStai chiedendo di uscire"
    );
}

#[test]
fn test_c_header() {
    assert_snapshot!("c_header", render_declarations(DeclarationFormat::C));
}

#[test]
fn test_llvm_declarations() {
    assert_snapshot!("llvm_declarations", render_declarations(DeclarationFormat::Llvm));
}
