//! Named value slots threaded through query-node processing.
//!
//! An attribute holds one typed value, can be reset to its empty value, and
//! copies its value into another slot of the same kind.

use std::any::Any;
use std::fmt;

use crate::error::AttributeError;

/// A named, clearable, copyable piece of state.
pub trait Attribute: Any + fmt::Debug + fmt::Display {
    /// Reset the held value to its empty default.
    fn clear(&mut self);

    /// Copy the held value into `target`.
    ///
    /// # Errors
    /// [`AttributeError::TypeMismatch`] when `target` is a different kind of slot.
    fn copy_to(&self, target: &mut dyn Attribute) -> Result<(), AttributeError>;

    /// Name of this slot kind, for error messages.
    fn kind(&self) -> &'static str;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The field name every fieldable query node should be set to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UniqueFieldAttribute {
    unique_field: String,
}

impl UniqueFieldAttribute {
    pub fn new(unique_field: impl Into<String>) -> Self {
        UniqueFieldAttribute {
            unique_field: unique_field.into(),
        }
    }

    pub fn unique_field(&self) -> &str {
        &self.unique_field
    }

    pub fn set_unique_field(&mut self, unique_field: impl Into<String>) {
        self.unique_field = unique_field.into();
    }
}

impl Attribute for UniqueFieldAttribute {
    fn clear(&mut self) {
        self.unique_field.clear();
    }

    fn copy_to(&self, target: &mut dyn Attribute) -> Result<(), AttributeError> {
        let got = target.kind();
        match target.as_any_mut().downcast_mut::<UniqueFieldAttribute>() {
            Some(target) => {
                target.unique_field.clone_from(&self.unique_field);
                Ok(())
            }
            None => Err(AttributeError::TypeMismatch {
                expected: self.kind(),
                got,
            }),
        }
    }

    fn kind(&self) -> &'static str {
        "UniqueFieldAttribute"
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Display for UniqueFieldAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<uniqueField uniqueField='{}'/>", self.unique_field)
    }
}
