//! `DescriptorArena` - flat storage for resolved declarations.

use crate::descriptor::{Descriptor, DescriptorId, DescriptorKind, FunctionSpec, Modality, PropertySpec};
use crate::error::DescriptorError;
use jetjs_common::FqName;
use jetjs_common::limits::{MAX_CONTAINING_DECLARATION_DEPTH, TYPICAL_PATH_SEGMENTS};
use serde::{Deserialize, Serialize};

/// Name given to the root namespace descriptor. It never appears in paths.
const ROOT_DESCRIPTOR_NAME: &str = "<root>";

/// Ids created for one property declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyIds {
    pub property: DescriptorId,
    pub getter: DescriptorId,
    pub setter: Option<DescriptorId>,
}

/// Descriptor storage. Slot 0 always holds the root namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Descriptor>", into = "Vec<Descriptor>")]
pub struct DescriptorArena {
    descriptors: Vec<Descriptor>,
}

impl Default for DescriptorArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Descriptor>> for DescriptorArena {
    type Error = DescriptorError;

    fn try_from(descriptors: Vec<Descriptor>) -> Result<Self, Self::Error> {
        match descriptors.first() {
            Some(root) if root.kind == DescriptorKind::Namespace && root.containing.is_none() => {
                Ok(Self { descriptors })
            }
            _ => Err(DescriptorError::MissingRoot),
        }
    }
}

impl From<DescriptorArena> for Vec<Descriptor> {
    fn from(arena: DescriptorArena) -> Self {
        arena.descriptors
    }
}

impl DescriptorArena {
    pub fn new() -> Self {
        Self {
            descriptors: vec![Descriptor {
                name: ROOT_DESCRIPTOR_NAME.to_string(),
                kind: DescriptorKind::Namespace,
                containing: None,
                receiver: false,
                modality: Modality::Final,
                accessor_of: None,
            }],
        }
    }

    #[inline]
    pub const fn root(&self) -> DescriptorId {
        DescriptorId::ROOT
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.len() <= 1
    }

    #[inline]
    pub fn get(&self, id: DescriptorId) -> Option<&Descriptor> {
        self.descriptors.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DescriptorId, &Descriptor)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (DescriptorId(i as u32), d))
    }

    pub fn is_root_namespace(&self, id: DescriptorId) -> bool {
        id == DescriptorId::ROOT
    }

    pub fn name(&self, id: DescriptorId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    pub fn containing_declaration(&self, id: DescriptorId) -> Option<DescriptorId> {
        self.get(id).and_then(|d| d.containing)
    }

    pub fn has_receiver(&self, id: DescriptorId) -> bool {
        self.get(id).is_some_and(Descriptor::is_extension)
    }

    pub fn is_extension(&self, id: DescriptorId) -> bool {
        self.has_receiver(id)
    }

    /// Whether the declaration is a member of a class (not top-level in a namespace).
    pub fn is_class_member(&self, id: DescriptorId) -> bool {
        self.containing_declaration(id)
            .and_then(|owner| self.get(owner))
            .is_some_and(|owner| owner.kind == DescriptorKind::Class)
    }

    /// Property that owns an accessor, or the descriptor itself otherwise.
    pub fn property_of(&self, id: DescriptorId) -> DescriptorId {
        self.get(id).and_then(|d| d.accessor_of).unwrap_or(id)
    }

    /// Iterative walk over the containing declarations of `id`, nearest first.
    pub fn containing_chain(&self, id: DescriptorId) -> ContainingChain<'_> {
        ContainingChain {
            arena: self,
            next: self.containing_declaration(id),
            steps: 0,
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    fn push(&mut self, descriptor: Descriptor) -> DescriptorId {
        let id = DescriptorId(self.descriptors.len() as u32);
        self.descriptors.push(descriptor);
        id
    }

    pub fn add_namespace(&mut self, parent: DescriptorId, name: impl Into<String>) -> DescriptorId {
        self.push(Descriptor {
            name: name.into(),
            kind: DescriptorKind::Namespace,
            containing: Some(parent),
            receiver: false,
            modality: Modality::Final,
            accessor_of: None,
        })
    }

    /// Adds every missing namespace of a dotted path below the root and returns the innermost.
    pub fn ensure_namespace_path(&mut self, dotted: &str) -> DescriptorId {
        let mut current = self.root();
        for segment in dotted.split('.').filter(|s| !s.is_empty()) {
            let existing = self.iter().find_map(|(id, d)| {
                (d.kind == DescriptorKind::Namespace
                    && d.containing == Some(current)
                    && d.name == segment)
                    .then_some(id)
            });
            current = match existing {
                Some(id) => id,
                None => self.add_namespace(current, segment),
            };
        }
        current
    }

    pub fn add_class(&mut self, parent: DescriptorId, name: impl Into<String>) -> DescriptorId {
        self.push(Descriptor {
            name: name.into(),
            kind: DescriptorKind::Class,
            containing: Some(parent),
            receiver: false,
            modality: Modality::Final,
            accessor_of: None,
        })
    }

    pub fn add_function(
        &mut self,
        parent: DescriptorId,
        name: impl Into<String>,
        spec: FunctionSpec,
    ) -> DescriptorId {
        self.push(Descriptor {
            name: name.into(),
            kind: DescriptorKind::Function,
            containing: Some(parent),
            receiver: spec.receiver,
            modality: spec.modality,
            accessor_of: None,
        })
    }

    /// Adds a property with its getter, and a setter when the property is mutable.
    ///
    /// Accessors share the property's name and containing declaration so they
    /// resolve to the same qualified path.
    pub fn add_property(
        &mut self,
        parent: DescriptorId,
        name: impl Into<String>,
        spec: PropertySpec,
    ) -> PropertyIds {
        let name = name.into();
        let property = self.push(Descriptor {
            name: name.clone(),
            kind: DescriptorKind::Property,
            containing: Some(parent),
            receiver: spec.extension,
            modality: spec.modality,
            accessor_of: None,
        });
        let accessor = |kind| Descriptor {
            name: name.clone(),
            kind,
            containing: Some(parent),
            receiver: spec.extension,
            modality: spec.modality,
            accessor_of: Some(property),
        };
        let getter = self.push(accessor(DescriptorKind::PropertyGetter));
        let setter = spec
            .mutable
            .then(|| self.push(accessor(DescriptorKind::PropertySetter)));
        PropertyIds {
            property,
            getter,
            setter,
        }
    }

    // =========================================================================
    // Qualified names
    // =========================================================================

    /// Fully-qualified path of a declaration, walking up to the root namespace.
    ///
    /// Fails for unknown ids, for declarations local to a function body, for
    /// chains that never reach the root, and for chains longer than
    /// `MAX_CONTAINING_DECLARATION_DEPTH`.
    pub fn fq_name(&self, id: DescriptorId) -> Result<FqName, DescriptorError> {
        let mut segments = Vec::with_capacity(TYPICAL_PATH_SEGMENTS);
        let mut current = id;
        for _ in 0..MAX_CONTAINING_DECLARATION_DEPTH {
            if self.is_root_namespace(current) {
                segments.reverse();
                return Ok(FqName::new(segments));
            }
            let descriptor = self
                .get(current)
                .ok_or(DescriptorError::UnknownDescriptor(current))?;
            segments.push(descriptor.name.clone());

            let owner = descriptor.containing.ok_or(DescriptorError::Detached(id))?;
            let owner_descriptor = self
                .get(owner)
                .ok_or(DescriptorError::UnknownDescriptor(owner))?;
            if owner_descriptor.kind.is_callable() {
                return Err(DescriptorError::LocalDeclaration { id, owner });
            }
            current = owner;
        }
        tracing::debug!(?id, "containing chain exceeds depth limit");
        Err(DescriptorError::ChainTooDeep(id))
    }

    /// Looks a declaration up by its dotted path. Accessors are skipped so a
    /// property path resolves to the property itself.
    pub fn find_by_fq_name(&self, dotted: &str) -> Option<DescriptorId> {
        let wanted = FqName::parse(dotted);
        self.iter().skip(1).find_map(|(id, d)| {
            (!d.kind.is_accessor() && self.fq_name(id).is_ok_and(|name| name == wanted))
                .then_some(id)
        })
    }
}

/// Iterator over containing declarations, nearest first.
///
/// Stops at the root namespace (inclusive), at a detached descriptor, or after
/// `MAX_CONTAINING_DECLARATION_DEPTH` steps.
pub struct ContainingChain<'a> {
    arena: &'a DescriptorArena,
    next: Option<DescriptorId>,
    steps: usize,
}

impl Iterator for ContainingChain<'_> {
    type Item = DescriptorId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.steps >= MAX_CONTAINING_DECLARATION_DEPTH {
            self.next = None;
            return None;
        }
        self.steps += 1;
        self.next = if self.arena.is_root_namespace(current) {
            None
        } else {
            self.arena.containing_declaration(current)
        };
        Some(current)
    }
}
