//! AST round-trip tests — printed source and JSON both rebuild the same tree.

use cppify::lang::{BinaryOperator, Compiler, Expression, Program, Statement};

const SOURCES: &[&str] = &[
    "",
    "let x: number = 50 + 30 - 39 + 15;",
    "let y: number = 10 + 2 * 3;",
    "let z: number = (10 + 2) * 3;",
    "let w: number = 100 / (5 / 5) - (2 - 1);",
    r#"const s: string = 'quoted "text"';"#,
    r#"
function add(a: number, b: number): number {}
function getValue(x: number): number { return x; }
function greet(name: string): string {
    let prefix: string = "hi ";
    return prefix + name;
}
function nothing(): number { return; }
"#,
];

#[test]
fn printed_source_reparses_to_equal_tree() {
    for src in SOURCES {
        let program = Compiler::parse(src).unwrap();
        let printed = program.to_string();
        let reparsed = Compiler::parse(&printed)
            .unwrap_or_else(|e| panic!("reparse of {printed:?} failed: {e}"));
        assert_eq!(program, reparsed, "source: {src}");
    }
}

#[test]
fn printing_is_a_fixed_point() {
    for src in SOURCES {
        let printed = Compiler::parse(src).unwrap().to_string();
        let reprinted = Compiler::parse(&printed).unwrap().to_string();
        assert_eq!(printed, reprinted);
    }
}

#[test]
fn json_round_trip_preserves_tree() {
    for src in SOURCES {
        let program = Compiler::parse(src).unwrap();
        let json = program.to_json().unwrap();
        assert_eq!(Program::from_json(&json).unwrap(), program, "source: {src}");
        assert_eq!(program.to_json().unwrap(), json);
    }
}

#[test]
fn json_keeps_precedence_shape() {
    let program = Compiler::parse("let v: number = 10 + 2 * 3;").unwrap();
    let json: serde_json::Value = serde_json::from_str(&program.to_json().unwrap()).unwrap();
    let value = &json["body"][0]["value"];
    assert_eq!(value["operator"], "+");
    assert_eq!(value["left"]["value"], 10.0);
    assert_eq!(value["right"]["operator"], "*");
}

#[test]
fn hand_built_tree_emits_and_reparses() {
    let program = Program {
        body: vec![Statement::VariableDeclaration(
            cppify::lang::VariableDeclaration {
                identifier: "v".to_string(),
                value_type: "number".to_string(),
                value: Expression::binary(
                    BinaryOperator::Sub,
                    Expression::identifier("a"),
                    Expression::binary(
                        BinaryOperator::Add,
                        Expression::identifier("b"),
                        Expression::identifier("c"),
                    ),
                ),
            },
        )],
    };
    assert_eq!(program.to_string(), "let v: number = a - (b + c);\n");
    assert_eq!(Compiler::emit(&program).unwrap(), "int v = a - (b + c);\n");
    assert_eq!(Compiler::parse(&program.to_string()).unwrap(), program);
}
