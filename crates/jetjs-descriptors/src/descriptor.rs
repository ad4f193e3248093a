//! Descriptor records.

use serde::{Deserialize, Serialize};

/// Index of a descriptor in a `DescriptorArena`. Index 0 is the root namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorId(pub u32);

impl DescriptorId {
    pub const ROOT: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    Namespace,
    Class,
    Function,
    Property,
    PropertyGetter,
    PropertySetter,
}

impl DescriptorKind {
    pub const fn is_accessor(self) -> bool {
        matches!(self, Self::PropertyGetter | Self::PropertySetter)
    }

    /// Kinds whose body can own local declarations.
    pub const fn is_callable(self) -> bool {
        matches!(
            self,
            Self::Function | Self::PropertyGetter | Self::PropertySetter
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    #[default]
    Final,
    Open,
    Abstract,
}

impl Modality {
    pub const fn is_overridable(self) -> bool {
        !matches!(self, Self::Final)
    }
}

/// A resolved declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub kind: DescriptorKind,
    /// `None` only for the root namespace.
    #[serde(default)]
    pub containing: Option<DescriptorId>,
    /// Whether the declaration has an extension receiver parameter.
    #[serde(default)]
    pub receiver: bool,
    #[serde(default)]
    pub modality: Modality,
    /// For accessors, the property they belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_of: Option<DescriptorId>,
}

impl Descriptor {
    pub fn is_getter(&self) -> bool {
        self.kind == DescriptorKind::PropertyGetter
    }

    pub fn is_extension(&self) -> bool {
        self.receiver
    }
}

/// Shape of a function declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FunctionSpec {
    pub receiver: bool,
    pub modality: Modality,
}

impl FunctionSpec {
    pub const fn member() -> Self {
        Self {
            receiver: false,
            modality: Modality::Final,
        }
    }

    pub const fn extension() -> Self {
        Self {
            receiver: true,
            modality: Modality::Final,
        }
    }

    #[must_use]
    pub const fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }
}

/// Shape of a property declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertySpec {
    pub extension: bool,
    pub mutable: bool,
    pub modality: Modality,
}

impl PropertySpec {
    pub const fn val() -> Self {
        Self {
            extension: false,
            mutable: false,
            modality: Modality::Final,
        }
    }

    pub const fn var() -> Self {
        Self {
            extension: false,
            mutable: true,
            modality: Modality::Final,
        }
    }

    #[must_use]
    pub const fn extension(mut self) -> Self {
        self.extension = true;
        self
    }

    #[must_use]
    pub const fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }
}
