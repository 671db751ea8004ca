// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![allow(dead_code)]

use std::{convert::Infallible, str::FromStr, sync::Arc};

use async_graphql_value::ConstValue;
use binder_model::{FieldDescriptor, OperationSignature, TargetType};
use binder_resolver::{
    ArgumentBinder, BindArgument, BinderConfig, BindingContext, BindingError, ConversionRegistry,
    argument_parameter, field, unbound_parameter,
};
use common::value::{ArgumentMap, argument_map_from_json};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub name: Option<String>,
    pub author_id: Option<i64>,
}

impl Book {
    pub fn new(name: &str, author_id: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            author_id: Some(author_id),
        }
    }
}

impl BindArgument for Book {
    fn target_type() -> TargetType {
        TargetType::composite("Book", [field::<String>("name"), field::<i64>("authorId")])
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.composite(value, |fields| {
            Ok(Book {
                name: fields.bind("name")?,
                author_id: fields.bind("authorId")?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookInput {
    pub name: Option<String>,
    pub author_id: Option<i64>,
}

impl BindArgument for BookInput {
    fn target_type() -> TargetType {
        TargetType::composite(
            "BookInput",
            [field::<String>("name"), field::<i64>("authorId")],
        )
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.composite(value, |fields| {
            Ok(BookInput {
                name: fields.bind("name")?,
                author_id: fields.bind("authorId")?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    pub label: Option<String>,
    pub books: Vec<Book>,
}

impl BindArgument for Shelf {
    fn target_type() -> TargetType {
        TargetType::composite(
            "Shelf",
            [field::<String>("label"), field::<Vec<Book>>("books")],
        )
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.composite(value, |fields| {
            Ok(Shelf {
                label: fields.bind("label")?,
                books: fields.bind("books")?.unwrap_or_default(),
            })
        })
    }
}

/// Only ever produced by a converter.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub term: String,
}

impl Keyword {
    pub fn of(term: &str) -> Self {
        Self {
            term: term.to_string(),
        }
    }
}

impl FromStr for Keyword {
    type Err = Infallible;

    fn from_str(term: &str) -> Result<Self, Self::Err> {
        Ok(Keyword::of(term))
    }
}

impl BindArgument for Keyword {
    fn target_type() -> TargetType {
        TargetType::converted("Keyword")
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.convert(value)
    }
}

/// A composite without settable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Isbn(pub String);

impl BindArgument for Isbn {
    fn target_type() -> TargetType {
        TargetType::composite("Isbn", Vec::<FieldDescriptor>::new())
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.composite(value, |_| Ok(Isbn(String::new())))
    }
}

pub fn arguments(payload: serde_json::Value) -> ArgumentMap {
    argument_map_from_json(payload).unwrap()
}

pub fn registry() -> Arc<ConversionRegistry> {
    Arc::new(
        ConversionRegistry::builder()
            .with_defaults()
            .register_from_str::<Keyword>()
            .build(),
    )
}

pub fn binder() -> ArgumentBinder {
    ArgumentBinder::new(registry())
}

pub fn strict_binder(max_depth: usize) -> ArgumentBinder {
    ArgumentBinder::with_config(
        registry(),
        BinderConfig {
            reject_unknown_fields: true,
            max_depth,
        },
    )
}

pub fn empty_binder() -> ArgumentBinder {
    ArgumentBinder::new(Arc::new(ConversionRegistry::empty()))
}

/// Signatures of a book catalog's queries and mutations.
pub struct BookController {
    pub not_supported: OperationSignature,
    pub book_by_id: OperationSignature,
    pub add_book: OperationSignature,
    pub add_books: OperationSignature,
    pub book_by_keyword: OperationSignature,
}

impl BookController {
    pub fn new() -> Self {
        Self {
            not_supported: OperationSignature::new(
                "notSupported",
                vec![unbound_parameter::<String>("param")],
            ),
            book_by_id: OperationSignature::new("bookById", vec![argument_parameter::<i64>("id")]),
            add_book: OperationSignature::new(
                "addBook",
                vec![argument_parameter::<BookInput>("bookInput")],
            ),
            add_books: OperationSignature::new(
                "addBooks",
                vec![argument_parameter::<Vec<Book>>("books")],
            ),
            book_by_keyword: OperationSignature::new(
                "bookByKeyword",
                vec![argument_parameter::<Keyword>("keyword")],
            ),
        }
    }
}
