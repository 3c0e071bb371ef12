//! Converts TypeScript AST nodes to source text.

use super::types::{TsDeclaration, TsMember, TsType};

const TAB: &str = "  ";

fn is_simple_type(t: &TsType) -> bool {
    matches!(
        t,
        TsType::Boolean | TsType::Number | TsType::String | TsType::Null | TsType::Undefined
    )
}

/// Convert a `TsType` to TypeScript source text.
pub fn ts_type_to_text(t: &TsType, indent: &str) -> String {
    match t {
        TsType::Boolean => "boolean".into(),
        TsType::Number => "number".into(),
        TsType::String => "string".into(),
        TsType::Null => "null".into(),
        TsType::Undefined => "undefined".into(),
        TsType::Array(elem) => {
            let inner = ts_type_to_text(elem, indent);
            if is_simple_type(elem) {
                format!("{}[]", inner)
            } else {
                format!("Array<{}>", inner)
            }
        }
        TsType::TypeLiteral { members } => {
            if members.is_empty() {
                return "{}".into();
            }
            let inner_indent = format!("{}{}", indent, TAB);
            let mut out = String::from("{\n");
            for member in members {
                out.push_str(&member_to_text(member, &inner_indent));
            }
            out.push_str(&format!("{}}}", indent));
            out
        }
        TsType::Union(types) => {
            let parts: Vec<String> = types.iter().map(|t| ts_type_to_text(t, indent)).collect();
            parts.join(" | ")
        }
    }
}

fn member_to_text(member: &TsMember, indent: &str) -> String {
    format!(
        "{}{}: {};\n",
        indent,
        member.name,
        ts_type_to_text(&member.type_, indent)
    )
}

/// Convert a top-level `TsDeclaration` to TypeScript source text.
pub fn declaration_to_text(decl: &TsDeclaration, indent: &str) -> String {
    match decl {
        TsDeclaration::Interface { name, members } => {
            let inner_indent = format!("{}{}", indent, TAB);
            let mut out = format!("{}export interface {} {{\n", indent, name);
            for member in members {
                out.push_str(&member_to_text(member, &inner_indent));
            }
            out.push_str(&format!("{}}}\n", indent));
            out
        }
        TsDeclaration::TypeAlias { name, type_ } => format!(
            "{}export type {} = {};\n",
            indent,
            name,
            ts_type_to_text(type_, indent)
        ),
    }
}

pub fn to_text(type_: &TsType) -> String {
    ts_type_to_text(type_, "")
}
