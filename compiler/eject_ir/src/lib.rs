//! Eject IR - statement model for UI object-graph code generation
//!
//! A front end turns a declarative UI document into a [`Document`]:
//!
//! - [`Statement`]s, each tagged with a [`Phase`] and optionally declaring
//!   an [`Identifier`]
//! - [`Reference`]s naming every object that needs a declaration, with
//!   placeholders for objects the calling environment supplies
//! - an object registry ([`ObjectInfo`]) used to pick variable names
//!
//! Each statement's [`CodeGenerator`] renders its code and reports which
//! identifiers must be declared first. Ordering the statements is the job
//! of `eject_codegen`.

mod document;
pub mod generator;
mod identifier;
mod phase;
mod reference;
mod statement;

pub use document::{Document, ObjectInfo};
pub use generator::{Anchor, Argument, CodeGenerator, Dependencies, Relation, Value};
pub use identifier::Identifier;
pub use phase::Phase;
pub use reference::Reference;
pub use statement::Statement;
