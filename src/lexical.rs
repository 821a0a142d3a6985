//! Lexical tables for the C# surface
//!
//! Maps semantic concepts (security levels, modifiers, container kinds,
//! well-known types) to their literal spellings. Pure data.

use crate::model::{ContainerType, Security, WellKnownType};

/// Modifier and declaration keywords
pub mod keywords {
    pub const ABSTRACT: &str = "abstract";
    pub const ASYNC: &str = "async";
    pub const CLASS: &str = "class";
    pub const CONST: &str = "const";
    pub const DEFAULT: &str = "default";
    pub const EVENT: &str = "event";
    pub const GET: &str = "get";
    pub const INTERFACE: &str = "interface";
    pub const NEW_CONSTRAINT: &str = "new()";
    pub const NULL: &str = "null";
    pub const OUT: &str = "out";
    pub const OVERRIDE: &str = "override";
    pub const PARAMS: &str = "params";
    pub const READONLY: &str = "readonly";
    pub const RECORD: &str = "record";
    pub const REF: &str = "ref";
    pub const RETURN: &str = "return";
    pub const SEALED: &str = "sealed";
    pub const SET: &str = "set";
    pub const STATIC: &str = "static";
    pub const STRUCT: &str = "struct";
    pub const THIS: &str = "this";
    pub const TYPEOF: &str = "typeof";
    pub const USING: &str = "using";
    pub const VALUE: &str = "value";
    pub const VIRTUAL: &str = "virtual";
    pub const VOID: &str = "void";
    pub const WHERE: &str = "where";
}

/// Punctuation used when assembling declarations
pub mod symbols {
    pub const ATTRIBUTE_OPEN: char = '[';
    pub const ATTRIBUTE_CLOSE: char = ']';
    pub const GENERIC_OPEN: char = '<';
    pub const GENERIC_CLOSE: char = '>';
    pub const ARRAY_OPEN: char = '[';
    pub const ARRAY_CLOSE: char = ']';
    pub const ARRAY_RANK_SEPARATOR: char = ',';
    pub const BLOCK_OPEN: char = '{';
    pub const BLOCK_CLOSE: char = '}';
    pub const STATEMENT_END: char = ';';
    pub const NAMESPACE_SEPARATOR: char = '.';
    pub const LIST_SEPARATOR: &str = ", ";
    pub const ASSIGN: &str = " = ";
    pub const LAMBDA: &str = " => ";
    pub const CONSTRAINT: &str = ": ";
    pub const STRING_QUOTE: char = '"';
    pub const CHAR_QUOTE: char = '\'';
}

/// Well-known runtime types recognized by name
pub mod runtime {
    pub const SYSTEM_NAMESPACE: &str = "System";
    pub const OBJECT_TYPE: &str = "Object";
    pub const TYPE_TYPE: &str = "Type";
    pub const TASK_NAMESPACE: &str = "System.Threading.Tasks";
    pub const TASK_TYPE: &str = "Task";
}

/// Literal spelling of a well-known type, `None` for `NotWellKnown`
pub fn well_known_type_name(kind: WellKnownType) -> Option<&'static str> {
    let name = match kind {
        WellKnownType::Object => "object",
        WellKnownType::Void => "void",
        WellKnownType::Boolean => "bool",
        WellKnownType::Character => "char",
        WellKnownType::SignedByte => "sbyte",
        WellKnownType::UnsignedByte => "byte",
        WellKnownType::Signed16BitInteger => "short",
        WellKnownType::Unsigned16BitInteger => "ushort",
        WellKnownType::Signed32BitInteger => "int",
        WellKnownType::Unsigned32BitInteger => "uint",
        WellKnownType::Signed64BitInteger => "long",
        WellKnownType::Unsigned64BitInteger => "ulong",
        WellKnownType::Decimal => "decimal",
        WellKnownType::Single => "float",
        WellKnownType::Double => "double",
        WellKnownType::Pointer => "IntPtr",
        WellKnownType::PlatformPointer => "UIntPtr",
        WellKnownType::DateTime => "DateTime",
        WellKnownType::String => "string",
        WellKnownType::NotWellKnown => return None,
    };
    Some(name)
}

/// Runtime (metadata) name of a well-known type, as a provider reports it
pub fn runtime_type_name(kind: WellKnownType) -> &'static str {
    match kind {
        WellKnownType::Object => "Object",
        WellKnownType::Void => "Void",
        WellKnownType::Boolean => "Boolean",
        WellKnownType::Character => "Char",
        WellKnownType::SignedByte => "SByte",
        WellKnownType::UnsignedByte => "Byte",
        WellKnownType::Signed16BitInteger => "Int16",
        WellKnownType::Unsigned16BitInteger => "UInt16",
        WellKnownType::Signed32BitInteger => "Int32",
        WellKnownType::Unsigned32BitInteger => "UInt32",
        WellKnownType::Signed64BitInteger => "Int64",
        WellKnownType::Unsigned64BitInteger => "UInt64",
        WellKnownType::Decimal => "Decimal",
        WellKnownType::Single => "Single",
        WellKnownType::Double => "Double",
        WellKnownType::Pointer => "IntPtr",
        WellKnownType::PlatformPointer => "UIntPtr",
        WellKnownType::DateTime => "DateTime",
        WellKnownType::String => "String",
        WellKnownType::NotWellKnown => "",
    }
}

/// Keyword(s) for a security level, `None` for `Unknown`
pub fn security_keyword(security: Security) -> Option<&'static str> {
    match security {
        Security::Public => Some("public"),
        Security::Protected => Some("protected"),
        Security::Internal => Some("internal"),
        Security::Private => Some("private"),
        Security::ProtectedInternal => Some("protected internal"),
        Security::PrivateProtected => Some("private protected"),
        Security::Unknown => None,
    }
}

/// Declaration keyword for a container kind
pub fn container_keyword(kind: ContainerType) -> &'static str {
    match kind {
        ContainerType::Class => keywords::CLASS,
        ContainerType::Interface => keywords::INTERFACE,
        ContainerType::Structure => keywords::STRUCT,
        ContainerType::Record => keywords::RECORD,
        ContainerType::RecordStructure => "record struct",
    }
}

/// Reserved words that cannot be used as a bare identifier (e.g. a using alias)
pub fn is_reserved_word(word: &str) -> bool {
    matches!(
        word,
        "abstract"
            | "as"
            | "base"
            | "bool"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "checked"
            | "class"
            | "const"
            | "continue"
            | "decimal"
            | "default"
            | "delegate"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "event"
            | "explicit"
            | "extern"
            | "false"
            | "finally"
            | "fixed"
            | "float"
            | "for"
            | "foreach"
            | "goto"
            | "if"
            | "implicit"
            | "in"
            | "int"
            | "interface"
            | "internal"
            | "is"
            | "lock"
            | "long"
            | "namespace"
            | "new"
            | "null"
            | "object"
            | "operator"
            | "out"
            | "override"
            | "params"
            | "private"
            | "protected"
            | "public"
            | "readonly"
            | "ref"
            | "return"
            | "sbyte"
            | "sealed"
            | "short"
            | "sizeof"
            | "stackalloc"
            | "static"
            | "string"
            | "struct"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "uint"
            | "ulong"
            | "unchecked"
            | "unsafe"
            | "ushort"
            | "using"
            | "virtual"
            | "void"
            | "volatile"
            | "while"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_well_known_type_has_spelling() {
        for kind in WellKnownType::ALL {
            assert!(
                well_known_type_name(kind).is_some(),
                "missing spelling for {:?}",
                kind
            );
        }
        assert_eq!(well_known_type_name(WellKnownType::NotWellKnown), None);
    }

    #[test]
    fn test_security_keywords() {
        assert_eq!(
            security_keyword(Security::ProtectedInternal),
            Some("protected internal")
        );
        assert_eq!(
            security_keyword(Security::PrivateProtected),
            Some("private protected")
        );
        assert_eq!(security_keyword(Security::Unknown), None);
    }

    #[test]
    fn test_reserved_words_are_case_sensitive() {
        assert!(is_reserved_word("class"));
        assert!(!is_reserved_word("Class"));
        assert!(!is_reserved_word("FB"));
    }
}
