use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::TypeNameError;

/// A fully qualified, named class, interface, enum or annotation type.
///
/// A class name is its package, the chain of enclosing classes (outermost first) and its own
/// simple name. `java.util.Map.Entry` is package `java.util`, enclosing `[Map]`, simple name
/// `Entry`; it is never equal to a top-level `java.util.Entry`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ClassNameRepr")]
pub struct ClassName {
    package_name: String,
    enclosing_simple_names: Vec<String>,
    simple_name: String,
}

#[derive(Deserialize)]
struct ClassNameRepr {
    package_name: String,
    #[serde(default)]
    enclosing_simple_names: Vec<String>,
    simple_name: String,
}

impl TryFrom<ClassNameRepr> for ClassName {
    type Error = TypeNameError;

    fn try_from(repr: ClassNameRepr) -> Result<Self, Self::Error> {
        ClassName::new(repr.package_name, repr.enclosing_simple_names, repr.simple_name)
    }
}

impl ClassName {
    /// Build a class name from its parts.
    ///
    /// `package_name` may be empty (the default package); otherwise every dot-separated segment,
    /// every enclosing name and the simple name must be Java identifiers. Casing is preserved.
    pub fn new<P, E, S>(
        package_name: P,
        enclosing_simple_names: E,
        simple_name: S,
    ) -> Result<Self, TypeNameError>
    where
        P: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        S: Into<String>,
    {
        let package_name = package_name.into();
        let enclosing_simple_names: Vec<String> =
            enclosing_simple_names.into_iter().map(Into::into).collect();
        let simple_name = simple_name.into();

        let class = ClassName {
            package_name,
            enclosing_simple_names,
            simple_name,
        };

        if !class.package_name.is_empty()
            && !class.package_name.split('.').all(is_java_identifier)
        {
            return Err(TypeNameError::malformed(
                class.canonical_name(),
                "package segments must be identifiers",
            ));
        }
        if class.simple_name.is_empty() {
            return Err(TypeNameError::malformed(
                class.canonical_name(),
                "simple name is empty",
            ));
        }
        if !class.simple_names().all(is_java_identifier) {
            return Err(TypeNameError::malformed(
                class.canonical_name(),
                "class names must be identifiers",
            ));
        }

        Ok(class)
    }

    /// Best guess from a canonical name such as `java.util.Map.Entry`.
    ///
    /// Segments before the first capitalized segment form the package and the rest form the
    /// class chain. A name without dots is a class in the default package.
    pub fn parse(canonical_name: &str) -> Result<Self, TypeNameError> {
        if canonical_name.is_empty() {
            return Err(TypeNameError::malformed(canonical_name, "name is empty"));
        }

        let segments: Vec<&str> = canonical_name.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(TypeNameError::malformed(canonical_name, "empty name segment"));
        }

        let first_class = match segments
            .iter()
            .position(|segment| segment.starts_with(char::is_uppercase))
        {
            Some(idx) => idx,
            None if segments.len() == 1 => 0,
            None => {
                return Err(TypeNameError::malformed(
                    canonical_name,
                    "no capitalized class segment",
                ))
            }
        };

        let package_name = segments[..first_class].join(".");
        let (simple_name, enclosing) = segments[first_class..]
            .split_last()
            .ok_or_else(|| TypeNameError::malformed(canonical_name, "no class segment"))?;

        ClassName::new(package_name, enclosing.iter().copied(), *simple_name)
    }

    /// Parse a binary name as reported by `Class.getName()`, e.g. `java.util.Map$Entry`.
    ///
    /// Everything before the last `.` is the package; the remainder is split on `$` into the
    /// enclosing chain and the simple name.
    pub fn from_binary_name(binary_name: &str) -> Result<Self, TypeNameError> {
        let (package_name, classes) = match binary_name.rsplit_once('.') {
            Some((package_name, classes)) => (package_name, classes),
            None => ("", binary_name),
        };

        let mut names: Vec<&str> = classes.split('$').collect();
        let simple_name = names.pop().unwrap_or_default();
        if simple_name.is_empty() {
            return Err(TypeNameError::malformed(binary_name, "simple name is empty"));
        }

        ClassName::new(package_name, names, simple_name).map_err(|err| match err {
            TypeNameError::MalformedName { reason, .. } => {
                TypeNameError::malformed(binary_name, reason)
            }
            other => other,
        })
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::java_lang("Object")
    }

    /// `java.lang.Void`, the boxed counterpart of `void`.
    pub fn void_class() -> Self {
        Self::java_lang("Void")
    }

    pub(crate) fn java_lang(simple_name: &str) -> Self {
        ClassName {
            package_name: "java.lang".to_string(),
            enclosing_simple_names: Vec::new(),
            simple_name: simple_name.to_string(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Enclosing classes, outermost first. Empty for top-level classes.
    pub fn enclosing_simple_names(&self) -> &[String] {
        &self.enclosing_simple_names
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Enclosing names followed by the simple name.
    pub fn simple_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.enclosing_simple_names
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.simple_name.as_str()))
    }

    pub fn is_top_level(&self) -> bool {
        self.enclosing_simple_names.is_empty()
    }

    /// `java.util.Map.Entry`.
    pub fn canonical_name(&self) -> String {
        self.joined('.')
    }

    /// `java.util.Map$Entry`.
    pub fn binary_name(&self) -> String {
        self.joined('$')
    }

    fn joined(&self, nested_separator: char) -> String {
        let mut out = String::new();
        if !self.package_name.is_empty() {
            out.push_str(&self.package_name);
            out.push('.');
        }
        for (idx, name) in self.simple_names().enumerate() {
            if idx > 0 {
                out.push(nested_separator);
            }
            out.push_str(name);
        }
        out
    }

    /// The directly enclosing class, if this is a nested class.
    pub fn enclosing_class(&self) -> Option<ClassName> {
        let (simple_name, enclosing) = self.enclosing_simple_names.split_last()?;
        Some(ClassName {
            package_name: self.package_name.clone(),
            enclosing_simple_names: enclosing.to_vec(),
            simple_name: simple_name.clone(),
        })
    }

    pub fn top_level_class(&self) -> ClassName {
        let simple_name = self
            .enclosing_simple_names
            .first()
            .unwrap_or(&self.simple_name)
            .clone();
        ClassName {
            package_name: self.package_name.clone(),
            enclosing_simple_names: Vec::new(),
            simple_name,
        }
    }

    /// A class nested directly inside this one.
    pub fn nested_class(&self, simple_name: &str) -> Result<ClassName, TypeNameError> {
        let enclosing = self.simple_names().map(str::to_string).collect::<Vec<_>>();
        ClassName::new(self.package_name.clone(), enclosing, simple_name)
    }

    /// A class sharing this class's package and enclosing chain.
    pub fn peer_class(&self, simple_name: &str) -> Result<ClassName, TypeNameError> {
        ClassName::new(
            self.package_name.clone(),
            self.enclosing_simple_names.clone(),
            simple_name,
        )
    }
}

/// Ordered by canonical name so that import lists sort the way they read.
impl Ord for ClassName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_name()
            .cmp(&other.canonical_name())
            .then_with(|| self.package_name.cmp(&other.package_name))
    }
}

impl PartialOrd for ClassName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}
