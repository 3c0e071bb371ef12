//! Converts descriptors to TypeScript AST.

use super::types::{TsDeclaration, TsMember, TsType};
use crate::descriptor::{Descriptor, ObjDescriptor};

/// The TypeScript type a value accepted by `descriptor` has.
///
/// Modifiers widen the type: optional adds `undefined`, nullable adds
/// `null`, in that order.
pub fn to_typescript_ast(descriptor: &Descriptor) -> TsType {
    let base = match descriptor {
        Descriptor::Null(_) => TsType::Null,
        Descriptor::Boolean(_) => TsType::Boolean,
        Descriptor::Number(_) => TsType::Number,
        Descriptor::String(_) => TsType::String,
        Descriptor::Object(d) => TsType::TypeLiteral {
            members: members(d),
        },
        Descriptor::Array(d) => TsType::Array(Box::new(to_typescript_ast(&d.item))),
    };

    let meta = descriptor.meta();
    let mut variants = vec![base];
    if meta.optional {
        variants.push(TsType::Undefined);
    }
    // `null | null` collapses for the Null kind.
    if meta.nullable && !matches!(descriptor, Descriptor::Null(_)) {
        variants.push(TsType::Null);
    }
    if variants.len() == 1 {
        variants.remove(0)
    } else {
        TsType::Union(variants)
    }
}

fn members(d: &ObjDescriptor) -> Vec<TsMember> {
    d.fields()
        .map(|(name, field)| TsMember {
            name: name.to_string(),
            type_: to_typescript_ast(field),
        })
        .collect()
}

/// A named top-level declaration: an interface for plain object
/// descriptors, a type alias for everything else.
pub fn alias_to_ts(descriptor: &Descriptor, name: &str) -> TsDeclaration {
    match descriptor {
        Descriptor::Object(d) if d.meta.is_required() => TsDeclaration::Interface {
            name: name.to_string(),
            members: members(d),
        },
        _ => TsDeclaration::TypeAlias {
            name: name.to_string(),
            type_: to_typescript_ast(descriptor),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{array, null_, string, Meta};

    #[test]
    fn modifier_order() {
        assert_eq!(
            to_typescript_ast(&string(Some(Meta::OPTIONAL_NULLABLE))),
            TsType::Union(vec![TsType::String, TsType::Undefined, TsType::Null])
        );
        assert_eq!(
            to_typescript_ast(&string(Some(Meta::NULLABLE))),
            TsType::Union(vec![TsType::String, TsType::Null])
        );
    }

    #[test]
    fn nullable_null_is_just_null() {
        assert_eq!(to_typescript_ast(&null_().nullable()), TsType::Null);
    }

    #[test]
    fn array_of_strings() {
        assert_eq!(
            to_typescript_ast(&array(string(None), None)),
            TsType::Array(Box::new(TsType::String))
        );
    }
}
