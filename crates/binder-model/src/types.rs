// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::scalar_type::ScalarType;

/// The declared shape an argument is bound into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TargetType {
    Scalar(ScalarType),
    /// A type built by assigning each of its fields from a nested argument object.
    Composite(CompositeType),
    List(Box<TargetType>),
    Optional(Box<TargetType>),
    /// An opaque type that can only be produced through the conversion registry.
    Converted(String),
    /// The raw value, passed through as JSON.
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompositeType {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub typ: TargetType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, typ: TargetType) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }
}

impl TargetType {
    pub fn composite(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Self {
        TargetType::Composite(CompositeType {
            name: name.into(),
            fields: fields.into_iter().collect(),
        })
    }

    pub fn list(element: TargetType) -> Self {
        TargetType::List(Box::new(element))
    }

    pub fn optional(inner: TargetType) -> Self {
        TargetType::Optional(Box::new(inner))
    }

    pub fn converted(name: impl Into<String>) -> Self {
        TargetType::Converted(name.into())
    }

    pub fn name(&self) -> String {
        match self {
            TargetType::Scalar(scalar) => scalar.name().to_string(),
            TargetType::Composite(composite) => composite.name.clone(),
            TargetType::List(element) => format!("Vec<{}>", element.name()),
            TargetType::Optional(inner) => format!("Option<{}>", inner.name()),
            TargetType::Converted(name) => name.clone(),
            TargetType::Json => "Json".to_string(),
        }
    }

    /// Fields assignable from a nested argument object. Empty for anything but a composite.
    pub fn fields(&self) -> &[FieldDescriptor] {
        match self {
            TargetType::Composite(composite) => &composite.fields,
            _ => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().iter().find(|field| field.name == name)
    }

    pub fn has_settable_fields(&self) -> bool {
        !self.fields().is_empty()
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_input() -> TargetType {
        TargetType::composite(
            "BookInput",
            [
                FieldDescriptor::new("name", TargetType::Scalar(ScalarType::String)),
                FieldDescriptor::new("authorId", TargetType::Scalar(ScalarType::I64)),
            ],
        )
    }

    #[test]
    fn names_follow_rust_spelling() {
        assert_eq!(book_input().name(), "BookInput");
        assert_eq!(TargetType::list(book_input()).name(), "Vec<BookInput>");
        assert_eq!(
            TargetType::optional(TargetType::Scalar(ScalarType::I64)).to_string(),
            "Option<i64>"
        );
        assert_eq!(TargetType::converted("Keyword").name(), "Keyword");
    }

    #[test]
    fn fields_are_exposed_only_for_composites() {
        let book = book_input();

        assert!(book.has_settable_fields());
        assert_eq!(
            book.field("authorId").map(|field| &field.typ),
            Some(&TargetType::Scalar(ScalarType::I64))
        );
        assert!(book.field("title").is_none());

        assert!(!TargetType::converted("Keyword").has_settable_fields());
        assert!(!TargetType::list(book_input()).has_settable_fields());
        assert!(!TargetType::composite("Empty", Vec::<FieldDescriptor>::new()).has_settable_fields());
    }

    #[test]
    fn descriptors_survive_serialization() {
        let descriptor = TargetType::list(book_input());
        let serialized = serde_json::to_string(&descriptor).unwrap();

        assert_eq!(
            serde_json::from_str::<TargetType>(&serialized).unwrap(),
            descriptor
        );
    }
}
