use pretty_assertions::assert_eq;

use super::*;
use crate::generator::{CodeGenerator, Value};
#[cfg(feature = "serde")]
use crate::generator::{Anchor, Argument, Relation};

fn assign(target: &str, key: &str, value: &str) -> Statement {
    Statement::new(
        Phase::Configuration,
        CodeGenerator::Assignment {
            target: target.into(),
            key: key.into(),
            value: Value::literal(value),
        },
    )
}

#[test]
fn add_object_registers_reference_and_name() {
    let mut doc = Document::new();
    doc.add_object("-1", ObjectInfo::new("ViewController", "self"));
    doc.add_object("x1", ObjectInfo::new("UIView", "view"));

    assert_eq!(doc.references().len(), 2);
    assert!(doc.references()[0].is_placeholder());
    assert!(!doc.references()[1].is_placeholder());
    assert_eq!(doc.variable_name(&"-1".into()), "self");
    assert_eq!(doc.variable_name(&"x1".into()), "view");
}

#[test]
fn register_object_leaves_references_alone() {
    let mut doc = Document::new();
    doc.register_object("x1", ObjectInfo::new("UIView", "view"));
    assert!(doc.references().is_empty());
    assert_eq!(
        doc.object(&"x1".into()).map(|info| info.class_name.as_str()),
        Some("UIView")
    );
}

#[test]
fn unregistered_identifier_renders_as_itself() {
    let doc = Document::new();
    assert_eq!(doc.variable_name(&"orphan".into()), "orphan");
}

#[test]
fn code_for_phase_keeps_document_order() {
    let mut doc = Document::new();
    doc.register_object("a", ObjectInfo::new("UIView", "first"));
    doc.register_object("b", ObjectInfo::new("UIView", "second"));
    doc.extend([
        Statement::declare_object("a", "UIView", vec![]),
        assign("a", "alpha", "0.5"),
        Statement::declare_object("b", "UIView", vec![]),
        assign("b", "isHidden", "true"),
    ]);

    assert_eq!(
        doc.code_for_phase(Phase::Configuration),
        vec!["first.alpha = 0.5", "second.isHidden = true"]
    );
    assert_eq!(
        doc.code_for_phase(Phase::Initialization),
        vec!["let first = UIView()", "let second = UIView()"]
    );
    assert!(doc.code_for_phase(Phase::Constraints).is_empty());
}

// Serde roundtrip (serde feature)

#[cfg(feature = "serde")]
#[test]
fn document_roundtrip() {
    let mut doc = Document::new();
    doc.add_object("-1", ObjectInfo::new("ViewController", "self"));
    doc.add_object("v", ObjectInfo::new("UIView", "view"));
    doc.add_object("b", ObjectInfo::new("UIButton", "button"));
    doc.extend([
        Statement::declare_object("v", "UIView", vec![]),
        Statement::declare_object(
            "b",
            "UIButton",
            vec![Argument::labeled("type", Value::literal(".system"))],
        ),
        assign("v", "backgroundColor", ".white"),
        Statement::new(
            Phase::Configuration,
            CodeGenerator::Invocation {
                target: "b".into(),
                method: "setTitle".into(),
                arguments: vec![
                    Argument::positional(Value::literal("\"Go\"")),
                    Argument::labeled("for", Value::literal(".normal")),
                ],
            },
        ),
        Statement::new(
            Phase::Subviews,
            CodeGenerator::AddSubview {
                parent: "v".into(),
                child: "b".into(),
            },
        ),
        Statement::new(
            Phase::Constraints,
            CodeGenerator::Constraint {
                first: Anchor::new("b", "widthAnchor"),
                relation: Relation::GreaterThanOrEqual,
                second: Some(Anchor::new("v", "widthAnchor")),
                multiplier: Some(0.5),
                constant: Some(-4.0),
            },
        ),
        Statement::new(
            Phase::Constraints,
            CodeGenerator::Constraint {
                first: Anchor::new("b", "heightAnchor"),
                relation: Relation::Equal,
                second: None,
                multiplier: None,
                constant: Some(44.0),
            },
        ),
        Statement::new(
            Phase::Configuration,
            CodeGenerator::verbatim("self.view = view", ["-1", "v"]),
        ),
    ]);

    let bytes = bincode::serialize(&doc).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    let deserialized: Document =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));

    assert_eq!(deserialized, doc);
    assert!(deserialized.references()[0].is_placeholder());
    for phase in Phase::ALL {
        assert_eq!(deserialized.code_for_phase(phase), doc.code_for_phase(phase));
    }
}
