use crate::class_ref::ClassRef;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    pub fn from_descriptor(ch: char) -> Option<Self> {
        Some(match ch {
            'B' => BaseType::Byte,
            'C' => BaseType::Char,
            'D' => BaseType::Double,
            'F' => BaseType::Float,
            'I' => BaseType::Int,
            'J' => BaseType::Long,
            'S' => BaseType::Short,
            'Z' => BaseType::Boolean,
            _ => return None,
        })
    }

    pub fn descriptor(self) -> char {
        match self {
            BaseType::Byte => 'B',
            BaseType::Char => 'C',
            BaseType::Double => 'D',
            BaseType::Float => 'F',
            BaseType::Int => 'I',
            BaseType::Long => 'J',
            BaseType::Short => 'S',
            BaseType::Boolean => 'Z',
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "byte" => BaseType::Byte,
            "char" => BaseType::Char,
            "double" => BaseType::Double,
            "float" => BaseType::Float,
            "int" => BaseType::Int,
            "long" => BaseType::Long,
            "short" => BaseType::Short,
            "boolean" => BaseType::Boolean,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            BaseType::Byte => "byte",
            BaseType::Char => "char",
            BaseType::Double => "double",
            BaseType::Float => "float",
            BaseType::Int => "int",
            BaseType::Long => "long",
            BaseType::Short => "short",
            BaseType::Boolean => "boolean",
        }
    }
}

/// Parse a field descriptor, or `V` for `void`.
pub fn parse_class_descriptor(desc: &str) -> Result<ClassRef> {
    if desc == "V" {
        return Ok(ClassRef::Void);
    }
    let (class, rest) = parse_field_type(desc, desc)?;
    if !rest.is_empty() {
        return Err(Error::InvalidDescriptor(desc.to_string()));
    }
    Ok(class)
}

fn parse_field_type<'a>(input: &'a str, whole: &str) -> Result<(ClassRef, &'a str)> {
    let invalid = || Error::InvalidDescriptor(whole.to_string());
    let first = input.chars().next().ok_or_else(invalid)?;
    match first {
        'L' => {
            let end = input.find(';').ok_or_else(invalid)?;
            let binary_name = input[1..end].replace('/', ".");
            let class = ClassRef::object(binary_name).map_err(|_| invalid())?;
            Ok((class, &input[end + 1..]))
        }
        '[' => {
            let (component, rest) = parse_field_type(&input[1..], whole)?;
            Ok((ClassRef::Array(Box::new(component)), rest))
        }
        other => {
            let base = BaseType::from_descriptor(other).ok_or_else(invalid)?;
            Ok((ClassRef::Primitive(base), &input[1..]))
        }
    }
}
