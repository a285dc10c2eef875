use crate::descriptor::{parse_class_descriptor, BaseType};
use crate::error::{Error, Result};

/// A reference to a loaded class, as the JVM names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassRef {
    Primitive(BaseType),
    Void,
    Array(Box<ClassRef>),
    /// A class or interface by binary name, e.g. `java.util.Map$Entry`.
    Object(String),
}

impl ClassRef {
    /// A class or interface by binary name. Package segments are separated by `.`, nested
    /// classes by `$`.
    pub fn object(binary_name: impl Into<String>) -> Result<Self> {
        let binary_name = binary_name.into();
        let valid = !binary_name.is_empty()
            && !binary_name.contains(['/', ';', '['])
            && binary_name.split('.').all(|segment| !segment.is_empty());
        if !valid {
            return Err(Error::InvalidClassName(binary_name));
        }
        Ok(ClassRef::Object(binary_name))
    }

    /// Parse the name `Class.getName()` reports: a primitive keyword, `void`, an array
    /// descriptor with `.` separators (`[Ljava.lang.String;`, `[I`) or a binary name.
    pub fn for_name(name: &str) -> Result<Self> {
        if name == "void" {
            return Ok(ClassRef::Void);
        }
        if let Some(base) = BaseType::from_keyword(name) {
            return Ok(ClassRef::Primitive(base));
        }
        if name.starts_with('[') {
            if name.contains('/') {
                return Err(Error::InvalidClassName(name.to_string()));
            }
            return parse_class_descriptor(&name.replace('.', "/"))
                .map_err(|_| Error::InvalidClassName(name.to_string()));
        }
        ClassRef::object(name)
    }

    /// The name `Class.getName()` would report.
    pub fn name(&self) -> String {
        match self {
            ClassRef::Primitive(base) => base.keyword().to_string(),
            ClassRef::Void => "void".to_string(),
            ClassRef::Array(_) => self.descriptor().replace('/', "."),
            ClassRef::Object(binary_name) => binary_name.clone(),
        }
    }

    pub fn descriptor(&self) -> String {
        match self {
            ClassRef::Primitive(base) => base.descriptor().to_string(),
            ClassRef::Void => "V".to_string(),
            ClassRef::Array(component) => format!("[{}", component.descriptor()),
            ClassRef::Object(binary_name) => format!("L{};", binary_name.replace('.', "/")),
        }
    }

    pub fn component_type(&self) -> Option<&ClassRef> {
        match self {
            ClassRef::Array(component) => Some(component),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ClassRef::Array(_))
    }

    /// Like `Class.isPrimitive()`, this is true for `void`.
    pub fn is_primitive(&self) -> bool {
        matches!(self, ClassRef::Primitive(_) | ClassRef::Void)
    }
}
