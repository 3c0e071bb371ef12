//! Per-kind descriptor structs.
//!
//! Each struct carries its own [`Meta`]; containers own their children, so a
//! descriptor tree is always finite and acyclic.

use indexmap::IndexMap;

use super::meta::Meta;
use super::Descriptor;
use crate::constants::Kind;

// -------------------------------------------------------------------------
// NullDescriptor

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullDescriptor {
    pub meta: Meta,
}

impl NullDescriptor {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn kind(&self) -> Kind {
        Kind::Null
    }
}

// -------------------------------------------------------------------------
// BoolDescriptor

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolDescriptor {
    pub meta: Meta,
}

impl BoolDescriptor {
    pub fn kind(&self) -> Kind {
        Kind::Boolean
    }
}

// -------------------------------------------------------------------------
// NumDescriptor

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumDescriptor {
    pub meta: Meta,
}

impl NumDescriptor {
    pub fn kind(&self) -> Kind {
        Kind::Number
    }
}

// -------------------------------------------------------------------------
// StrDescriptor

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrDescriptor {
    pub meta: Meta,
}

impl StrDescriptor {
    pub fn kind(&self) -> Kind {
        Kind::String
    }
}

// -------------------------------------------------------------------------
// ObjDescriptor

/// Object with named fields, kept in declaration order.
///
/// Field names are checked by [`crate::object`]; there is no public way to
/// insert an unchecked field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjDescriptor {
    pub(crate) fields: IndexMap<String, Descriptor>,
    pub meta: Meta,
}

impl ObjDescriptor {
    pub fn kind(&self) -> Kind {
        Kind::Object
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Descriptor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field(&self, name: &str) -> Option<&Descriptor> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// -------------------------------------------------------------------------
// ArrDescriptor

/// Homogeneous array: every element is described by `item`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrDescriptor {
    pub item: Box<Descriptor>,
    pub meta: Meta,
}

impl ArrDescriptor {
    pub fn new(item: Descriptor) -> Self {
        Self {
            item: Box::new(item),
            meta: Meta::default(),
        }
    }
    pub fn kind(&self) -> Kind {
        Kind::Array
    }
}
