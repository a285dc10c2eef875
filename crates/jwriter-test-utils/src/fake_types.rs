use std::collections::HashMap;

use jwriter_types::PrimitiveName;
use jwriter_types_bridge::{BoundConvention, ElementKind, LiveKind, LiveTypes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

#[derive(Debug, Clone)]
enum ElementData {
    Package {
        name: String,
    },
    Type {
        name: String,
        enclosing: ElementId,
    },
    TypeParameter {
        name: String,
        enclosing: ElementId,
        bound: TypeId,
    },
    Method {
        name: String,
        enclosing: ElementId,
    },
}

#[derive(Debug, Clone)]
enum TypeData {
    Primitive(PrimitiveName),
    Void,
    Null,
    Array(TypeId),
    Declared { element: ElementId, args: Vec<TypeId> },
    TypeVar(ElementId),
    Intersection(Vec<TypeId>),
    /// Kinds with no structure the converter looks at.
    Opaque(LiveKind),
}

/// An in-memory type model in the shape `javax.lang.model` exposes.
///
/// Packages and classes are interned by name; every `*_type` call allocates a fresh type handle,
/// like a compiler would. Type parameters are allocated before their bounds are defined so that
/// self-referential bounds (`T extends Comparable<T>`) can be built.
#[derive(Debug, Clone)]
pub struct FakeTypes {
    convention: BoundConvention,
    elements: Vec<ElementData>,
    types: Vec<TypeData>,
    packages: HashMap<String, ElementId>,
    classes: HashMap<(ElementId, String), ElementId>,
}

impl FakeTypes {
    pub fn new(convention: BoundConvention) -> Self {
        Self {
            convention,
            elements: Vec::new(),
            types: Vec::new(),
            packages: HashMap::new(),
            classes: HashMap::new(),
        }
    }

    pub fn set_bound_convention(&mut self, convention: BoundConvention) {
        self.convention = convention;
    }

    /// Package element by qualified name; `""` is the unnamed package.
    pub fn package(&mut self, name: &str) -> ElementId {
        if let Some(id) = self.packages.get(name) {
            return *id;
        }
        let id = self.add_element(ElementData::Package {
            name: name.to_string(),
        });
        self.packages.insert(name.to_string(), id);
        id
    }

    /// Class element for `names` (outermost first) inside `package`.
    pub fn class(&mut self, package: &str, names: &[&str]) -> ElementId {
        let mut enclosing = self.package(package);
        for name in names {
            let key = (enclosing, name.to_string());
            enclosing = match self.classes.get(&key) {
                Some(id) => *id,
                None => {
                    let id = self.add_element(ElementData::Type {
                        name: name.to_string(),
                        enclosing,
                    });
                    self.classes.insert(key, id);
                    id
                }
            };
        }
        enclosing
    }

    /// A class declared inside method `method` of `owner`.
    pub fn local_class(&mut self, owner: ElementId, method: &str, name: &str) -> ElementId {
        let method = self.add_element(ElementData::Method {
            name: method.to_string(),
            enclosing: owner,
        });
        self.add_element(ElementData::Type {
            name: name.to_string(),
            enclosing: method,
        })
    }

    /// `package.Outer.Inner` used without type arguments.
    pub fn class_type(&mut self, package: &str, names: &[&str]) -> TypeId {
        let element = self.class(package, names);
        self.declared(element, Vec::new())
    }

    pub fn object_type(&mut self) -> TypeId {
        self.class_type("java.lang", &["Object"])
    }

    pub fn declared(&mut self, element: ElementId, args: Vec<TypeId>) -> TypeId {
        self.add_type(TypeData::Declared { element, args })
    }

    pub fn primitive(&mut self, primitive: PrimitiveName) -> TypeId {
        self.add_type(TypeData::Primitive(primitive))
    }

    pub fn void_type(&mut self) -> TypeId {
        self.add_type(TypeData::Void)
    }

    pub fn null_type(&mut self) -> TypeId {
        self.add_type(TypeData::Null)
    }

    pub fn array(&mut self, component: TypeId) -> TypeId {
        self.add_type(TypeData::Array(component))
    }

    pub fn intersection(&mut self, bounds: Vec<TypeId>) -> TypeId {
        self.add_type(TypeData::Intersection(bounds))
    }

    /// A handle of a kind the converter does not model, e.g. [`LiveKind::Wildcard`].
    pub fn opaque(&mut self, kind: LiveKind) -> TypeId {
        self.add_type(TypeData::Opaque(kind))
    }

    /// Declare type parameter `name` on `owner`, bounded by `java.lang.Object` until
    /// [`FakeTypes::set_bound`] says otherwise. Returns a type variable handle for it.
    pub fn type_param(&mut self, owner: ElementId, name: &str) -> TypeId {
        let bound = self.object_type();
        let param = self.add_element(ElementData::TypeParameter {
            name: name.to_string(),
            enclosing: owner,
            bound,
        });
        self.type_var(param)
    }

    /// A fresh handle to the type variable declared by `param`.
    pub fn type_var(&mut self, param: ElementId) -> TypeId {
        self.add_type(TypeData::TypeVar(param))
    }

    /// The declaring element behind a type variable handle.
    pub fn type_param_element(&self, var: TypeId) -> Option<ElementId> {
        match self.ty(var) {
            TypeData::TypeVar(param) => Some(*param),
            _ => None,
        }
    }

    pub fn set_bound(&mut self, var: TypeId, new_bound: TypeId) {
        let Some(param) = self.type_param_element(var) else {
            panic!("{var:?} is not a type variable");
        };
        match &mut self.elements[param.0 as usize] {
            ElementData::TypeParameter { bound, .. } => *bound = new_bound,
            other => panic!("{param:?} is not a type parameter: {other:?}"),
        }
    }

    fn add_element(&mut self, data: ElementData) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(data);
        id
    }

    fn add_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    fn ty(&self, id: TypeId) -> &TypeData {
        &self.types[id.0 as usize]
    }

    fn element(&self, id: ElementId) -> &ElementData {
        &self.elements[id.0 as usize]
    }
}

impl LiveTypes for FakeTypes {
    type Type = TypeId;
    type Element = ElementId;

    fn kind(&self, ty: &TypeId) -> LiveKind {
        match self.ty(*ty) {
            TypeData::Primitive(p) => LiveKind::Primitive(*p),
            TypeData::Void => LiveKind::Void,
            TypeData::Null => LiveKind::Null,
            TypeData::Array(_) => LiveKind::Array,
            TypeData::Declared { .. } => LiveKind::Declared,
            TypeData::TypeVar(_) => LiveKind::TypeVariable,
            TypeData::Intersection(_) => LiveKind::Intersection,
            TypeData::Opaque(kind) => *kind,
        }
    }

    fn component_type(&self, ty: &TypeId) -> Option<TypeId> {
        match self.ty(*ty) {
            TypeData::Array(component) => Some(*component),
            _ => None,
        }
    }

    fn as_element(&self, ty: &TypeId) -> Option<ElementId> {
        match self.ty(*ty) {
            TypeData::Declared { element, .. } | TypeData::TypeVar(element) => Some(*element),
            _ => None,
        }
    }

    fn type_arguments(&self, ty: &TypeId) -> Vec<TypeId> {
        match self.ty(*ty) {
            TypeData::Declared { args, .. } => args.clone(),
            _ => Vec::new(),
        }
    }

    fn upper_bound(&self, ty: &TypeId) -> Option<TypeId> {
        let param = self.type_param_element(*ty)?;
        match self.element(param) {
            ElementData::TypeParameter { bound, .. } => Some(*bound),
            _ => None,
        }
    }

    fn intersection_bounds(&self, ty: &TypeId) -> Vec<TypeId> {
        match self.ty(*ty) {
            TypeData::Intersection(bounds) => bounds.clone(),
            _ => Vec::new(),
        }
    }

    fn element_kind(&self, element: &ElementId) -> ElementKind {
        match self.element(*element) {
            ElementData::Package { .. } => ElementKind::Package,
            ElementData::Type { .. } => ElementKind::Type,
            ElementData::TypeParameter { .. } => ElementKind::TypeParameter,
            ElementData::Method { .. } => ElementKind::Other,
        }
    }

    fn element_name(&self, element: &ElementId) -> String {
        match self.element(*element) {
            ElementData::Package { name }
            | ElementData::Type { name, .. }
            | ElementData::TypeParameter { name, .. }
            | ElementData::Method { name, .. } => name.clone(),
        }
    }

    fn enclosing_element(&self, element: &ElementId) -> Option<ElementId> {
        match self.element(*element) {
            ElementData::Package { .. } => None,
            ElementData::Type { enclosing, .. }
            | ElementData::TypeParameter { enclosing, .. }
            | ElementData::Method { enclosing, .. } => Some(*enclosing),
        }
    }

    fn bound_convention(&self) -> BoundConvention {
        self.convention
    }
}
