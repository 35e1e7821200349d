//! Statement kinds and their code emission.
//!
//! Every statement carries a [`CodeGenerator`]. It answers two questions
//! for the scheduler:
//!
//! - which identifiers must already be declared before its code is valid
//!   ([`CodeGenerator::dependent_identifiers`]), and
//! - what the code looks like ([`CodeGenerator::render`]).
//!
//! Rendering reads the [`Document`] to map identifiers to variable names
//! but never mutates it.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::{Document, Identifier};

/// Identifiers a statement depends on, deduplicated, in first-seen order.
///
/// Nearly every statement depends on one or two objects.
pub type Dependencies<'a> = SmallVec<[&'a Identifier; 2]>;

/// A value appearing on the right-hand side of an assignment or as an argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Source text emitted verbatim (`.white`, `"Hello"`, `12`).
    Literal(String),
    /// Another object, emitted as its variable name.
    Reference(Identifier),
}

impl Value {
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(text.into())
    }

    pub fn reference(identifier: impl Into<Identifier>) -> Self {
        Value::Reference(identifier.into())
    }

    /// The object this value refers to, if any.
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Value::Literal(_) => None,
            Value::Reference(identifier) => Some(identifier),
        }
    }

    fn write_to(&self, out: &mut String, document: &Document) {
        match self {
            Value::Literal(text) => out.push_str(text),
            Value::Reference(identifier) => out.push_str(document.variable_name(identifier)),
        }
    }
}

/// A call argument, optionally labeled (`for: .normal`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    pub label: Option<String>,
    pub value: Value,
}

impl Argument {
    pub fn positional(value: Value) -> Self {
        Argument { label: None, value }
    }

    pub fn labeled(label: impl Into<String>, value: Value) -> Self {
        Argument {
            label: Some(label.into()),
            value,
        }
    }
}

/// A layout anchor on an object (`titleLabel.topAnchor`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub owner: Identifier,
    pub attribute: String,
}

impl Anchor {
    pub fn new(owner: impl Into<Identifier>, attribute: impl Into<String>) -> Self {
        Anchor {
            owner: owner.into(),
            attribute: attribute.into(),
        }
    }

    fn write_to(&self, out: &mut String, document: &Document) {
        out.push_str(document.variable_name(&self.owner));
        out.push('.');
        out.push_str(&self.attribute);
    }
}

/// Relation between the two sides of a constraint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    #[default]
    Equal,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl Relation {
    /// Argument label used when constraining against another anchor.
    pub fn label(self) -> &'static str {
        match self {
            Relation::Equal => "equalTo",
            Relation::LessThanOrEqual => "lessThanOrEqualTo",
            Relation::GreaterThanOrEqual => "greaterThanOrEqualTo",
        }
    }

    /// Argument label used when constraining against a constant.
    pub fn constant_label(self) -> &'static str {
        match self {
            Relation::Equal => "equalToConstant",
            Relation::LessThanOrEqual => "lessThanOrEqualToConstant",
            Relation::GreaterThanOrEqual => "greaterThanOrEqualToConstant",
        }
    }
}

/// Code emission strategy for one statement.
///
/// Closed set of statement kinds; dispatch is by exhaustive `match`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeGenerator {
    /// `let <var> = <Class>(<arguments>)`
    ///
    /// `<var>` is the identifier declared by the owning statement.
    Declaration {
        class_name: String,
        arguments: Vec<Argument>,
    },
    /// `<var>.<key> = <value>`
    Assignment {
        target: Identifier,
        key: String,
        value: Value,
    },
    /// `<var>.<method>(<arguments>)`
    Invocation {
        target: Identifier,
        method: String,
        arguments: Vec<Argument>,
    },
    /// `<parent>.addSubview(<child>)`
    AddSubview { parent: Identifier, child: Identifier },
    /// `<first>.constraint(<relation>: <second>, ...).isActive = true`
    ///
    /// Without a second anchor the constraint is against `constant`.
    Constraint {
        first: Anchor,
        relation: Relation,
        second: Option<Anchor>,
        multiplier: Option<f64>,
        constant: Option<f64>,
    },
    /// Pre-rendered code with explicit dependencies.
    Verbatim {
        code: String,
        dependencies: Vec<Identifier>,
    },
}

impl CodeGenerator {
    /// Pre-rendered code depending on `dependencies`.
    pub fn verbatim<I, D>(code: impl Into<String>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Identifier>,
    {
        CodeGenerator::Verbatim {
            code: code.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }

    /// Identifiers that must be declared before this code is valid.
    ///
    /// A declaration does not depend on the identifier it declares.
    pub fn dependent_identifiers(&self) -> Dependencies<'_> {
        let mut deps = Dependencies::new();
        match self {
            CodeGenerator::Declaration { arguments, .. } => {
                for argument in arguments {
                    push_unique(&mut deps, argument.value.identifier());
                }
            }
            CodeGenerator::Assignment { target, value, .. } => {
                push_unique(&mut deps, Some(target));
                push_unique(&mut deps, value.identifier());
            }
            CodeGenerator::Invocation {
                target, arguments, ..
            } => {
                push_unique(&mut deps, Some(target));
                for argument in arguments {
                    push_unique(&mut deps, argument.value.identifier());
                }
            }
            CodeGenerator::AddSubview { parent, child } => {
                push_unique(&mut deps, Some(parent));
                push_unique(&mut deps, Some(child));
            }
            CodeGenerator::Constraint { first, second, .. } => {
                push_unique(&mut deps, Some(&first.owner));
                push_unique(&mut deps, second.as_ref().map(|anchor| &anchor.owner));
            }
            CodeGenerator::Verbatim { dependencies, .. } => {
                for dependency in dependencies {
                    push_unique(&mut deps, Some(dependency));
                }
            }
        }
        deps
    }

    /// Returns `true` if the dependency set is exactly `{identifier}`.
    pub fn depends_only_on(&self, identifier: &Identifier) -> bool {
        let deps = self.dependent_identifiers();
        deps.len() == 1 && deps[0] == identifier
    }

    /// Render this statement's code.
    ///
    /// `declares` is the identifier the owning statement declares. A
    /// declaration rendered without one binds to `_`.
    pub fn render(&self, declares: Option<&Identifier>, document: &Document) -> String {
        let mut out = String::new();
        match self {
            CodeGenerator::Declaration {
                class_name,
                arguments,
            } => {
                out.push_str("let ");
                let name = declares.map_or("_", |identifier| document.variable_name(identifier));
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(class_name);
                write_arguments(&mut out, arguments, document);
            }
            CodeGenerator::Assignment { target, key, value } => {
                out.push_str(document.variable_name(target));
                out.push('.');
                out.push_str(key);
                out.push_str(" = ");
                value.write_to(&mut out, document);
            }
            CodeGenerator::Invocation {
                target,
                method,
                arguments,
            } => {
                out.push_str(document.variable_name(target));
                out.push('.');
                out.push_str(method);
                write_arguments(&mut out, arguments, document);
            }
            CodeGenerator::AddSubview { parent, child } => {
                out.push_str(document.variable_name(parent));
                out.push_str(".addSubview(");
                out.push_str(document.variable_name(child));
                out.push(')');
            }
            CodeGenerator::Constraint {
                first,
                relation,
                second,
                multiplier,
                constant,
            } => {
                first.write_to(&mut out, document);
                out.push_str(".constraint(");
                if let Some(second) = second {
                    out.push_str(relation.label());
                    out.push_str(": ");
                    second.write_to(&mut out, document);
                    if let Some(multiplier) = multiplier {
                        let _ = write!(out, ", multiplier: {multiplier}");
                    }
                    if let Some(constant) = constant {
                        let _ = write!(out, ", constant: {constant}");
                    }
                } else {
                    let _ = write!(
                        out,
                        "{}: {}",
                        relation.constant_label(),
                        constant.unwrap_or(0.0)
                    );
                }
                out.push_str(").isActive = true");
            }
            CodeGenerator::Verbatim { code, .. } => out.push_str(code),
        }
        out
    }
}

fn push_unique<'a>(deps: &mut Dependencies<'a>, identifier: Option<&'a Identifier>) {
    if let Some(identifier) = identifier {
        if !deps.contains(&identifier) {
            deps.push(identifier);
        }
    }
}

fn write_arguments(out: &mut String, arguments: &[Argument], document: &Document) {
    out.push('(');
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(label) = &argument.label {
            out.push_str(label);
            out.push_str(": ");
        }
        argument.value.write_to(out, document);
    }
    out.push(')');
}
