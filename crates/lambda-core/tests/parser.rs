use lambda_core::ast::ExprKind;
use lambda_core::parse_program;
use pretty_assertions::assert_eq;

fn parse_ok(src: &str) -> Vec<ExprKind> {
    let (program, errors) = parse_program(src.as_bytes());
    assert!(errors.is_empty(), "expected no errors, got {errors:?}");
    program.into_iter().map(|e| e.kind).collect()
}

fn parse_err(src: &str) -> Vec<String> {
    let (_, errors) = parse_program(src.as_bytes());
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn single_free_variable() {
    let program = parse_ok("x");
    assert_eq!(program, vec![ExprKind::Var(b'x')]);
}

#[test]
fn application_is_left_associative() {
    // f x y -> (f x) y
    let program = parse_ok("f x y");
    assert_eq!(program.len(), 1);
    match &program[0] {
        ExprKind::App(outer_func, outer_arg) => {
            assert_eq!(outer_arg.kind, ExprKind::Var(b'y'));
            match &outer_func.kind {
                ExprKind::App(inner_func, inner_arg) => {
                    assert_eq!(inner_func.kind, ExprKind::Var(b'f'));
                    assert_eq!(inner_arg.kind, ExprKind::Var(b'x'));
                }
                other => panic!("expected nested App, got {other:?}"),
            }
        }
        other => panic!("expected App, got {other:?}"),
    }
}

#[test]
fn lambda_consumes_exactly_one_atom_as_body() {
    // []z y -> ([]z) y
    let program = parse_ok("[]z y");
    match &program[0] {
        ExprKind::App(func, arg) => {
            assert_eq!(arg.kind, ExprKind::Var(b'y'));
            match &func.kind {
                ExprKind::NamedLam(None, body) => assert_eq!(body.kind, ExprKind::Var(b'z')),
                other => panic!("expected NamedLam, got {other:?}"),
            }
        }
        other => panic!("expected App, got {other:?}"),
    }
}

#[test]
fn parenthesised_group_can_be_a_lambda_body() {
    let program = parse_ok("[x](y z)");
    match &program[0] {
        ExprKind::NamedLam(Some(b'x'), body) => {
            assert!(matches!(body.kind, ExprKind::App(_, _)));
        }
        other => panic!("expected NamedLam, got {other:?}"),
    }
}

#[test]
fn multiple_top_level_expressions() {
    let program = parse_ok("x\ny");
    assert_eq!(program.len(), 2);
}

#[test]
fn index_literal() {
    let program = parse_ok("1");
    assert_eq!(program, vec![ExprKind::BoundVar(1)]);
}

#[test]
fn multi_byte_varname_is_rejected() {
    let errors = parse_err("var");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        "STDIN:0: Syntax error: Multi-byte varnames aren't allowed.  'var...'."
    );
}

#[test]
fn multi_byte_varname_prefix_is_truncated_to_three_bytes() {
    let errors = parse_err("alphabet");
    assert_eq!(
        errors[0],
        "STDIN:0: Syntax error: Multi-byte varnames aren't allowed.  'alp...'."
    );
}

#[test]
fn multi_digit_index_is_rejected() {
    let errors = parse_err("12");
    assert_eq!(
        errors[0],
        "STDIN:0: Syntax error: Multi-digit nums aren't allowed.  '12'."
    );
}

#[test]
fn zero_index_is_rejected() {
    let errors = parse_err("0");
    assert_eq!(
        errors[0],
        "STDIN:0: Syntax error: 0 is an invalid debrujin index."
    );
}

#[test]
fn unmatched_open_paren() {
    let errors = parse_err("(x");
    assert_eq!(errors, vec!["STDIN:0: Syntax error: Unmatched '('."]);
}

#[test]
fn unmatched_close_paren_at_top_level() {
    let errors = parse_err(")");
    assert_eq!(errors, vec!["STDIN:0: Syntax error: Expected expr."]);
}

#[test]
fn lambda_header_without_closing_bracket() {
    let errors = parse_err("[xy");
    assert_eq!(
        errors,
        vec!["STDIN:0: Syntax error: Lambda '[xy' doesn't end in ']'."]
    );
}

#[test]
fn lambda_missing_body() {
    let errors = parse_err("[]");
    assert_eq!(
        errors,
        vec!["STDIN:2: Syntax error: Expected lambda body."]
    );
}

#[test]
fn lambda_missing_body_offset_skips_trailing_whitespace() {
    let errors = parse_err("[]   ");
    assert_eq!(
        errors,
        vec!["STDIN:2: Syntax error: Expected lambda body."]
    );
}

#[test]
fn close_then_open_recovers_with_two_diagnostics_in_order() {
    let errors = parse_err(")(");
    assert_eq!(
        errors,
        vec![
            "STDIN:0: Syntax error: Expected expr.",
            "STDIN:1: Syntax error: Unmatched ')'.",
        ]
    );
}

#[test]
fn empty_group_has_no_expression_to_blame() {
    let errors = parse_err("()");
    assert_eq!(errors, vec!["STDIN:0: Syntax error: Unmatched ')'."]);
}

#[test]
fn empty_input_is_a_syntax_error() {
    let (program, errors) = parse_program(b"");
    assert!(program.is_empty());
    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["STDIN:0: Syntax error: Expected expr."]
    );
}
