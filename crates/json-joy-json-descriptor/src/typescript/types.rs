//! The small slice of the TypeScript type grammar descriptors map onto.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Boolean,
    Number,
    String,
    Null,
    Undefined,
    Array(Box<TsType>),
    TypeLiteral { members: Vec<TsMember> },
    Union(Vec<TsType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsMember {
    pub name: String,
    pub type_: TsType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsDeclaration {
    Interface { name: String, members: Vec<TsMember> },
    TypeAlias { name: String, type_: TsType },
}
