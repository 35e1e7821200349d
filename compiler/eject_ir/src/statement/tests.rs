use super::*;
use crate::generator::Value;
use crate::ObjectInfo;

#[test]
fn declarations_are_initialization() {
    let stmt = Statement::declare_object("root", "UIView", vec![]);
    assert_eq!(stmt.phase(), Phase::Initialization);
    assert_eq!(stmt.declares(), Some(&Identifier::from("root")));
    assert!(stmt.is_declaration_of(&Identifier::from("root")));
    assert!(!stmt.is_declaration_of(&Identifier::from("label")));
}

#[test]
fn plain_statements_declare_nothing() {
    let stmt = Statement::new(
        Phase::Configuration,
        CodeGenerator::Assignment {
            target: "root".into(),
            key: "alpha".into(),
            value: Value::literal("0.5"),
        },
    );
    assert_eq!(stmt.declares(), None);
    assert!(!stmt.is_declaration_of(&Identifier::from("root")));
}

#[test]
fn declaration_does_not_depend_on_itself() {
    let stmt = Statement::declare_object(
        "stack",
        "UIStackView",
        vec![Argument::labeled(
            "arrangedSubviews",
            Value::reference("label"),
        )],
    );
    let deps = stmt.dependent_identifiers();
    assert_eq!(deps.as_slice(), [&Identifier::from("label")]);
}

#[test]
fn declaration_renders_the_declared_identifier() {
    let mut doc = Document::new();
    doc.register_object("x", ObjectInfo::new("UIView", "container"));
    let generator = CodeGenerator::Declaration {
        class_name: "UIView".into(),
        arguments: vec![],
    };
    let stmt = Statement::declaration("x", generator);
    assert_eq!(stmt.declares(), Some(&Identifier::from("x")));
    assert_eq!(stmt.render(&doc), "let container = UIView()");
}
