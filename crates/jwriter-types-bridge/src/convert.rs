use std::collections::HashMap;

use jwriter_types::{
    ArrayTypeName, ClassName, IntersectionTypeName, ParameterizedTypeName, TypeName,
    TypeVariableName,
};

use crate::{
    BoundConvention, BridgeConfig, ConvertError, ElementKind, LiveKind, LiveTypes, ResolvedClass,
    ResolvedKind, Result, TRACE_TARGET,
};

/// Convert a live compiler type using the default [`BridgeConfig`].
pub fn from_live_type<M>(model: &M, ty: &M::Type) -> Result<TypeName>
where
    M: LiveTypes + ?Sized,
{
    from_live_type_with(model, ty, &BridgeConfig::default())
}

pub fn from_live_type_with<M>(model: &M, ty: &M::Type, config: &BridgeConfig) -> Result<TypeName>
where
    M: LiveTypes + ?Sized,
{
    let convention = config.effective_convention(model.bound_convention());
    LiveTypeConverter::new(model, convention).convert(ty)
}

/// Convert a loaded class. Bare classes carry no type arguments or bounds, so the result is a
/// primitive, `void`, an array or a plain [`ClassName`].
pub fn from_resolved_class<C: ResolvedClass>(class: &C) -> Result<TypeName> {
    match class.kind() {
        ResolvedKind::Primitive(p) => Ok(p.into()),
        ResolvedKind::Void => Ok(TypeName::Void),
        ResolvedKind::Array => {
            let component = class.component_type().ok_or_else(|| {
                ConvertError::InvalidInput(format!(
                    "array class `{}` has no component type",
                    class.name()
                ))
            })?;
            Ok(ArrayTypeName::new(from_resolved_class(&component)?).into())
        }
        ResolvedKind::Named => {
            let name = class.name();
            if name.is_empty() {
                return Err(ConvertError::InvalidInput("class reference has no name".into()));
            }
            Ok(ClassName::from_binary_name(&name)?.into())
        }
    }
}

/// One top-level conversion. Lives only as long as that call.
struct LiveTypeConverter<'m, M: LiveTypes + ?Sized> {
    model: &'m M,
    convention: BoundConvention,
    /// Keyed by declaring element, not by structure, so a bound that mentions its own variable
    /// finds the in-progress entry instead of recursing.
    type_vars: HashMap<M::Element, TypeVariableName>,
}

impl<'m, M: LiveTypes + ?Sized> LiveTypeConverter<'m, M> {
    fn new(model: &'m M, convention: BoundConvention) -> Self {
        Self {
            model,
            convention,
            type_vars: HashMap::new(),
        }
    }

    fn convert(&mut self, ty: &M::Type) -> Result<TypeName> {
        let kind = self.model.kind(ty);
        tracing::trace!(target: TRACE_TARGET, %kind, "converting live type");

        match kind {
            LiveKind::Primitive(p) => Ok(p.into()),
            LiveKind::Void => Ok(TypeName::Void),
            LiveKind::Null => Ok(TypeName::Null),
            LiveKind::Array => {
                let component = self.model.component_type(ty).ok_or_else(|| {
                    ConvertError::InvalidInput("array type has no component type".into())
                })?;
                Ok(ArrayTypeName::new(self.convert(&component)?).into())
            }
            LiveKind::Declared => self.declared(ty),
            LiveKind::TypeVariable => Ok(self.type_variable(ty)?.into()),
            LiveKind::Intersection => Ok(self.intersection(ty)?.into()),
            LiveKind::Wildcard
            | LiveKind::Union
            | LiveKind::Executable
            | LiveKind::Package
            | LiveKind::Module
            | LiveKind::Error
            | LiveKind::None => Err(ConvertError::UnsupportedTypeKind(kind.to_string())),
        }
    }

    fn declared(&mut self, ty: &M::Type) -> Result<TypeName> {
        let element = self.model.as_element(ty).ok_or_else(|| {
            ConvertError::InvalidInput("declared type has no element".into())
        })?;
        let raw = self.class_name(&element)?;

        let args = self.model.type_arguments(ty);
        if args.is_empty() {
            return Ok(raw.into());
        }
        let args = args
            .iter()
            .map(|arg| self.convert(arg))
            .collect::<Result<Vec<_>>>()?;
        Ok(ParameterizedTypeName::new(raw, args)?.into())
    }

    /// Walk from a type element out to its package. Names are collected innermost first and
    /// reversed.
    fn class_name(&self, element: &M::Element) -> Result<ClassName> {
        let mut names = vec![self.model.element_name(element)];
        let mut current = self.model.enclosing_element(element);
        let package_name = loop {
            let Some(enclosing) = current else {
                break String::new();
            };
            match self.model.element_kind(&enclosing) {
                ElementKind::Package => break self.model.element_name(&enclosing),
                ElementKind::Type => {
                    names.push(self.model.element_name(&enclosing));
                    current = self.model.enclosing_element(&enclosing);
                }
                ElementKind::TypeParameter | ElementKind::Other => {
                    return Err(ConvertError::InvalidInput(format!(
                        "`{}` is a local or anonymous class and has no canonical name",
                        names[0]
                    )));
                }
            }
        };

        names.reverse();
        let simple_name = names.pop().unwrap_or_default();
        Ok(ClassName::new(package_name, names, simple_name)?)
    }

    fn type_variable(&mut self, ty: &M::Type) -> Result<TypeVariableName> {
        let element = self.model.as_element(ty).ok_or_else(|| {
            ConvertError::InvalidInput("type variable has no declaring element".into())
        })?;

        if let Some(existing) = self.type_vars.get(&element) {
            tracing::debug!(
                target: TRACE_TARGET,
                name = existing.name(),
                "type variable already seen; reusing memoized name"
            );
            return Ok(existing.clone());
        }

        let name = self.model.element_name(&element);
        // Placeholder until the bounds are known; a self-reference inside them resolves to this.
        self.type_vars
            .insert(element.clone(), TypeVariableName::named(name.clone()));

        match self.bounds(ty, &name) {
            Ok(bounds) => {
                let resolved = TypeVariableName::new(name, bounds);
                self.type_vars.insert(element, resolved.clone());
                Ok(resolved)
            }
            Err(err) => {
                self.type_vars.remove(&element);
                Err(err)
            }
        }
    }

    fn bounds(&mut self, ty: &M::Type, name: &str) -> Result<Vec<TypeName>> {
        let bound = self.model.upper_bound(ty).ok_or_else(|| {
            ConvertError::InvalidInput(format!("type variable `{name}` has no upper bound"))
        })?;

        match self.model.kind(&bound) {
            LiveKind::Intersection => {
                let intersection = self.intersection(&bound)?;
                Ok(match self.convention {
                    BoundConvention::Flatten => intersection.into_bounds(),
                    BoundConvention::Wrap => vec![intersection.into()],
                })
            }
            LiveKind::Declared if self.is_object(&bound)? => Ok(Vec::new()),
            _ => Ok(vec![self.convert(&bound)?]),
        }
    }

    fn intersection(&mut self, ty: &M::Type) -> Result<IntersectionTypeName> {
        let bounds = self
            .model
            .intersection_bounds(ty)
            .iter()
            .map(|bound| self.convert(bound))
            .collect::<Result<Vec<_>>>()?;
        IntersectionTypeName::new(bounds).map_err(|err| ConvertError::InvalidInput(err.to_string()))
    }

    /// Whether `ty` is exactly `java.lang.Object`, the implicit bound.
    fn is_object(&self, ty: &M::Type) -> Result<bool> {
        if !self.model.type_arguments(ty).is_empty() {
            return Ok(false);
        }
        let Some(element) = self.model.as_element(ty) else {
            return Ok(false);
        };
        Ok(self.class_name(&element)? == ClassName::object())
    }
}
