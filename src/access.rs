//! Typed accessors over any [`Identifier`].
//!
//! [`IdentifierExt`] is implemented for every identifier type, so bringing
//! it into scope is all a runtime binding needs to do.
//!
//! Numeric fields are treated as required schema: a missing or mistyped
//! int/float is an [`Error`]. String and identifier fields are treated as
//! optional: missing or mistyped gives `None`.

use tracing::debug;

use crate::model::{AttributePath, ValueType};
use crate::resolve::resolve_nth;
use crate::wm::{Element, Identifier};
use crate::{ElementSummary, Error, Result};

// ============================================================================
// FromElement
// ============================================================================

/// Mandatory scalar types that can be read out of an element.
pub trait FromElement: Sized {
    /// Name used in [`Error::InvalidElementType`].
    const TYPE_NAME: &'static str;

    fn from_element<E: Element>(element: &E) -> Option<Self>;
}

impl FromElement for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_element<E: Element>(element: &E) -> Option<Self> {
        element.as_int()
    }
}

impl FromElement for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_element<E: Element>(element: &E) -> Option<Self> {
        element.as_float()
    }
}

fn invalid_type<T: FromElement, E: Element>(element: Option<&E>) -> Error {
    Error::InvalidElementType {
        expected: T::TYPE_NAME,
        element: element.map(ElementSummary::of),
    }
}

// ============================================================================
// IdentifierExt
// ============================================================================

pub trait IdentifierExt: Identifier {
    // ========================================================================
    // By attribute
    // ========================================================================

    /// Read a required scalar at `attribute`, ordinal `ordinal`.
    fn find_value_nth<T: FromElement>(&self, attribute: &str, ordinal: usize) -> Result<T> {
        let Some(child) = self.find_by_attribute(attribute, ordinal) else {
            debug!(parent = self.symbol(), attribute, ordinal, "required attribute missing");
            return Err(Error::AttributeNotFound {
                attribute: attribute.to_owned(),
                ordinal,
                parent: self.symbol().to_owned(),
            });
        };
        T::from_element(child).ok_or_else(|| {
            debug!(
                parent = self.symbol(),
                attribute,
                expected = T::TYPE_NAME,
                found = %child.value_type(),
                "required attribute has the wrong type"
            );
            invalid_type::<T, _>(Some(child))
        })
    }

    fn find_int(&self, attribute: &str) -> Result<i64> {
        self.find_value_nth(attribute, 0)
    }

    fn find_int_nth(&self, attribute: &str, ordinal: usize) -> Result<i64> {
        self.find_value_nth(attribute, ordinal)
    }

    fn find_float(&self, attribute: &str) -> Result<f64> {
        self.find_value_nth(attribute, 0)
    }

    fn find_float_nth(&self, attribute: &str, ordinal: usize) -> Result<f64> {
        self.find_value_nth(attribute, ordinal)
    }

    fn find_string(&self, attribute: &str) -> Option<&str> {
        self.find_string_nth(attribute, 0)
    }

    fn find_string_nth(&self, attribute: &str, ordinal: usize) -> Option<&str> {
        self.find_by_attribute(attribute, ordinal)?.as_str()
    }

    fn find_id(&self, attribute: &str) -> Option<&Self> {
        self.find_id_nth(attribute, 0)
    }

    fn find_id_nth(&self, attribute: &str, ordinal: usize) -> Option<&Self> {
        self.find_by_attribute(attribute, ordinal)?.as_identifier()
    }

    // ========================================================================
    // By path
    // ========================================================================

    /// The element at `path`, first ordinal at every step.
    fn child_at_path(&self, path: impl Into<AttributePath>) -> Option<&Self::Element> {
        resolve_nth(self, &path.into(), 0)
    }

    /// The element at `path`, with ordinal `last_index` at the final step.
    fn child_at_path_nth(
        &self,
        path: impl Into<AttributePath>,
        last_index: usize,
    ) -> Option<&Self::Element> {
        resolve_nth(self, &path.into(), last_index)
    }

    /// Read a required scalar at `path`.
    ///
    /// An unresolved path and a mistyped element both give
    /// [`Error::InvalidElementType`]; `element` is `None` in the former case.
    fn value_at_path<T: FromElement>(&self, path: impl Into<AttributePath>) -> Result<T> {
        let path = path.into();
        let element = resolve_nth(self, &path, 0);
        element.and_then(T::from_element).ok_or_else(|| {
            debug!(
                root = self.symbol(),
                %path,
                expected = T::TYPE_NAME,
                resolved = element.is_some(),
                "required path value unavailable"
            );
            invalid_type::<T, _>(element)
        })
    }

    fn int_at_path(&self, path: impl Into<AttributePath>) -> Result<i64> {
        self.value_at_path(path)
    }

    fn float_at_path(&self, path: impl Into<AttributePath>) -> Result<f64> {
        self.value_at_path(path)
    }

    fn string_at_path(&self, path: impl Into<AttributePath>) -> Option<&str> {
        self.child_at_path(path)?.as_str()
    }

    fn id_at_path(&self, path: impl Into<AttributePath>) -> Option<&Self> {
        self.child_at_path(path)?.as_identifier()
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Children of this identifier, collected eagerly.
    ///
    /// With an attribute, ordinals are probed from 0 until the first miss,
    /// so a runtime that skips an ordinal truncates the result there.
    fn children(&self, attribute: Option<&str>) -> Vec<&Self::Element> {
        match attribute {
            None => (0..self.number_of_children())
                .filter_map(|index| self.child_at(index))
                .collect(),
            Some(attribute) => (0..)
                .map_while(|ordinal| self.find_by_attribute(attribute, ordinal))
                .collect(),
        }
    }

    fn int_children(&self, attribute: Option<&str>) -> impl Iterator<Item = i64> {
        self.children(attribute)
            .into_iter()
            .filter(|child| child.value_type() == ValueType::Int)
            .filter_map(Element::as_int)
    }

    fn float_children(&self, attribute: Option<&str>) -> impl Iterator<Item = f64> {
        self.children(attribute)
            .into_iter()
            .filter(|child| child.value_type() == ValueType::Float)
            .filter_map(Element::as_float)
    }

    fn string_children(&self, attribute: Option<&str>) -> impl Iterator<Item = &str> {
        self.children(attribute)
            .into_iter()
            .filter(|child| child.value_type() == ValueType::String)
            .filter_map(Element::as_str)
    }

    fn id_children(&self, attribute: Option<&str>) -> impl Iterator<Item = &Self> {
        self.children(attribute)
            .into_iter()
            .filter(|child| child.is_identifier())
            .filter_map(Element::as_identifier)
    }
}

impl<I: Identifier> IdentifierExt for I {}
