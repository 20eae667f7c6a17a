//! Per-type field descriptor tables.
//!
//! A [`Schema`] lists the fields of one record type in declaration order,
//! together with their rules and an accessor that lowers the field into a
//! [`FieldValue`]. Tables are normally generated by `#[derive(Validate)]`;
//! [`SchemaBuilder`] covers types that have to register their fields by
//! hand.

use std::borrow::Cow;
use std::fmt;

use crate::error::SchemaError;
use crate::rule::{parse_rules, Rule};
use crate::value::FieldValue;

/// Reads one field of `T`.
pub type Accessor<T> = for<'a> fn(&'a T) -> FieldValue<'a>;

/// Whether a field belongs to the public contract of its record.
///
/// Only [`Visibility::Public`] fields are validated; private fields are
/// skipped even when they declare rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// One row of a descriptor table.
pub struct FieldDescriptor<T> {
    name: Cow<'static, str>,
    visibility: Visibility,
    rules: Vec<Rule>,
    accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        visibility: Visibility,
        rules: Vec<Rule>,
        accessor: Accessor<T>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            rules,
            accessor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Read the current value of this field on `record`.
    pub fn value<'a>(&self, record: &'a T) -> FieldValue<'a> {
        (self.accessor)(record)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Descriptor table for record type `T`.
pub struct Schema<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> Schema<T> {
    pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor<T>>) -> Self {
        Self { type_name, fields }
    }

    /// Start registering fields by hand.
    pub fn builder(type_name: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Explicit registration of a descriptor table.
///
/// Rule declarations are parsed and checked as fields are added, the same
/// way `#[derive(Validate)]` checks them at compile time. A malformed or
/// contradictory declaration (`min=abc`, `max` without a value,
/// `min=10,max=5`, `email,email`) is reported at registration time rather
/// than at validation time.
///
/// ```
/// use shared_core_validation::{AsFieldValue, Schema};
///
/// struct Order {
///     id: String,
///     lines: Vec<u32>,
/// }
///
/// let schema = Schema::<Order>::builder("Order")
///     .field("id", "required", |o| o.id.field_value())?
///     .field("lines", "min=1,max=50", |o| o.lines.field_value())?
///     .build();
/// assert_eq!(schema.len(), 2);
/// # Ok::<(), shared_core_validation::SchemaError>(())
/// ```
pub struct SchemaBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T> SchemaBuilder<T> {
    /// Register a public field.
    pub fn field(
        self,
        name: impl Into<Cow<'static, str>>,
        declaration: &str,
        accessor: Accessor<T>,
    ) -> Result<Self, SchemaError> {
        self.register(name.into(), Visibility::Public, declaration, accessor)
    }

    /// Register a field that is not part of the public contract. It keeps
    /// its rules in the table but the validator never evaluates them.
    pub fn private_field(
        self,
        name: impl Into<Cow<'static, str>>,
        declaration: &str,
        accessor: Accessor<T>,
    ) -> Result<Self, SchemaError> {
        self.register(name.into(), Visibility::Private, declaration, accessor)
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            type_name: self.type_name,
            fields: self.fields,
        }
    }

    fn register(
        mut self,
        name: Cow<'static, str>,
        visibility: Visibility,
        declaration: &str,
        accessor: Accessor<T>,
    ) -> Result<Self, SchemaError> {
        if self.fields.iter().any(|f| f.name == name) {
            return Err(SchemaError::DuplicateField {
                field: name.into_owned(),
            });
        }
        let rules = parse_rules(declaration).map_err(|source| SchemaError::InvalidDeclaration {
            field: name.to_string(),
            source,
        })?;
        self.fields
            .push(FieldDescriptor::new(name, visibility, rules, accessor));
        Ok(self)
    }
}

/// A record type with a static descriptor table.
///
/// Implemented by `#[derive(Validate)]`. Manual implementations usually keep
/// the table in a lazily initialised static built with [`Schema::builder`].
pub trait Record: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

/// A field of a record instance, with its value read out.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub visibility: Visibility,
    pub rules: &'a [Rule],
    pub value: FieldValue<'a>,
}

/// Object-safe view over a record instance.
pub trait Fields {
    fn type_name(&self) -> &'static str;

    /// Every described field, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record> Fields for R {
    fn type_name(&self) -> &'static str {
        R::schema().type_name()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        R::schema()
            .fields()
            .iter()
            .map(|descriptor| Field {
                name: descriptor.name(),
                visibility: descriptor.visibility(),
                rules: descriptor.rules(),
                value: descriptor.value(self),
            })
            .collect()
    }
}
