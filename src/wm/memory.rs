//! In-memory working-memory graph.
//!
//! This is the reference implementation of [`Identifier`] and [`Element`].
//! Identifiers own their children outright, so a graph is a plain tree
//! of values built with the `with_*` builders.
//!
//! ## Limitations
//!
//! - **Tree only**: a real runtime lets several parents share one
//!   identifier. Here each identifier has exactly one parent, so shared
//!   substructure must be duplicated.
//! - **No change notification**: mutations (`push`, `remove`) are
//!   immediate and silent.
//!
//! Use this graph for:
//! - Testing accessors without a live reasoning runtime
//! - Embedding in tools that replay captured working-memory snapshots

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::ValueType;
use super::{CommandSource, Element, Identifier};

// ============================================================================
// MemoryValue / MemoryElement
// ============================================================================

/// The value side of an in-memory element.
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryValue {
    Identifier(MemoryIdentifier),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<MemoryIdentifier> for MemoryValue { fn from(v: MemoryIdentifier) -> Self { MemoryValue::Identifier(v) } }
impl From<i32> for MemoryValue { fn from(v: i32) -> Self { MemoryValue::Int(v as i64) } }
impl From<i64> for MemoryValue { fn from(v: i64) -> Self { MemoryValue::Int(v) } }
impl From<f64> for MemoryValue { fn from(v: f64) -> Self { MemoryValue::Float(v) } }
impl From<String> for MemoryValue { fn from(v: String) -> Self { MemoryValue::String(v) } }
impl From<&str> for MemoryValue { fn from(v: &str) -> Self { MemoryValue::String(v.to_owned()) } }

/// One `^attribute value` edge.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement {
    attribute: String,
    value: MemoryValue,
}

impl MemoryElement {
    pub fn new(attribute: impl Into<String>, value: impl Into<MemoryValue>) -> Self {
        Self { attribute: attribute.into(), value: value.into() }
    }

    pub fn value(&self) -> &MemoryValue {
        &self.value
    }
}

impl Element for MemoryElement {
    type Identifier = MemoryIdentifier;

    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn value_type(&self) -> ValueType {
        match self.value {
            MemoryValue::Identifier(_) => ValueType::Identifier,
            MemoryValue::Int(_) => ValueType::Int,
            MemoryValue::Float(_) => ValueType::Float,
            MemoryValue::String(_) => ValueType::String,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self.value {
            MemoryValue::Int(v) => Some(v),
            _ => None,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self.value {
            MemoryValue::Float(v) => Some(v),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match &self.value {
            MemoryValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_identifier(&self) -> Option<&MemoryIdentifier> {
        match &self.value {
            MemoryValue::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// MemoryIdentifier
// ============================================================================

/// An identifier and everything below it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryIdentifier {
    symbol: String,
    children: Vec<MemoryElement>,
    /// attribute → native positions of its children, in ordinal order
    by_attribute: HashMap<String, SmallVec<[usize; 2]>>,
}

impl MemoryIdentifier {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), ..Self::default() }
    }

    /// Append a child. It becomes the last ordinal for its attribute.
    pub fn push(&mut self, attribute: impl Into<String>, value: impl Into<MemoryValue>) {
        let element = MemoryElement::new(attribute, value);
        self.by_attribute
            .entry(element.attribute.clone())
            .or_default()
            .push(self.children.len());
        self.children.push(element);
    }

    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<MemoryValue>) -> Self {
        self.push(attribute, value);
        self
    }

    pub fn with_int(self, attribute: impl Into<String>, value: i64) -> Self {
        self.with(attribute, MemoryValue::Int(value))
    }

    pub fn with_float(self, attribute: impl Into<String>, value: f64) -> Self {
        self.with(attribute, MemoryValue::Float(value))
    }

    pub fn with_string(self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(attribute, MemoryValue::String(value.into()))
    }

    pub fn with_id(self, attribute: impl Into<String>, child: MemoryIdentifier) -> Self {
        self.with(attribute, MemoryValue::Identifier(child))
    }

    /// Remove the `ordinal`-th child with `attribute`.
    ///
    /// Later same-named siblings move down one ordinal.
    pub fn remove(&mut self, attribute: &str, ordinal: usize) -> Option<MemoryElement> {
        let position = *self.by_attribute.get(attribute)?.get(ordinal)?;
        let removed = self.children.remove(position);
        self.reindex();
        Some(removed)
    }

    /// Children in native order.
    pub fn iter(&self) -> std::slice::Iter<'_, MemoryElement> {
        self.children.iter()
    }

    fn reindex(&mut self) {
        self.by_attribute.clear();
        for (position, element) in self.children.iter().enumerate() {
            self.by_attribute
                .entry(element.attribute.clone())
                .or_default()
                .push(position);
        }
    }
}

impl Identifier for MemoryIdentifier {
    type Element = MemoryElement;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn number_of_children(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&MemoryElement> {
        self.children.get(index)
    }

    fn find_by_attribute(&self, attribute: &str, ordinal: usize) -> Option<&MemoryElement> {
        let position = *self.by_attribute.get(attribute)?.get(ordinal)?;
        self.children.get(position)
    }
}

impl<'a> IntoIterator for &'a MemoryIdentifier {
    type Item = &'a MemoryElement;
    type IntoIter = std::slice::Iter<'a, MemoryElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// MemoryAgent
// ============================================================================

/// An agent's I/O links. Commands are the identifier children of the
/// output link.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryAgent {
    name: String,
    input_link: MemoryIdentifier,
    output_link: MemoryIdentifier,
}

impl MemoryAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_link: MemoryIdentifier::new("I2"),
            output_link: MemoryIdentifier::new("I3"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_link(&self) -> &MemoryIdentifier {
        &self.input_link
    }

    pub fn input_link_mut(&mut self) -> &mut MemoryIdentifier {
        &mut self.input_link
    }

    pub fn output_link(&self) -> &MemoryIdentifier {
        &self.output_link
    }

    /// Put a command on the output link, as the reasoner would.
    pub fn issue_command(&mut self, name: impl Into<String>, command: MemoryIdentifier) {
        self.output_link.push(name, command);
    }
}

impl CommandSource for MemoryAgent {
    type Element = MemoryElement;

    fn number_of_commands(&self) -> usize {
        self.output_link.iter().filter(|e| e.is_identifier()).count()
    }

    fn command_at(&self, index: usize) -> Option<&MemoryElement> {
        self.output_link.iter().filter(|e| e.is_identifier()).nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks() -> MemoryIdentifier {
        MemoryIdentifier::new("I2")
            .with_string("block", "A")
            .with_int("count", 3)
            .with_string("block", "B")
            .with_string("block", "C")
    }

    #[test]
    fn test_ordinals_follow_insertion_order() {
        let id = blocks();
        let names: Vec<_> = (0..3)
            .map(|i| id.find_by_attribute("block", i).and_then(Element::as_str).unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(id.find_by_attribute("block", 3).is_none());
    }

    #[test]
    fn test_native_order_is_kept() {
        let id = blocks();
        assert_eq!(id.number_of_children(), 4);
        assert_eq!(id.child_at(1).unwrap().attribute(), "count");
        assert!(id.child_at(4).is_none());
    }

    #[test]
    fn test_remove_shifts_later_ordinals() {
        let mut id = blocks();
        let removed = id.remove("block", 1).unwrap();
        assert_eq!(removed.as_str(), Some("B"));
        assert_eq!(id.find_by_attribute("block", 1).and_then(Element::as_str), Some("C"));
        assert_eq!(id.find_by_attribute("count", 0).and_then(Element::as_int), Some(3));
        assert!(id.remove("block", 5).is_none());
        assert!(id.remove("missing", 0).is_none());
    }

    #[test]
    fn test_value_type_tags() {
        let id = MemoryIdentifier::new("S1")
            .with_int("i", 1)
            .with_float("f", 1.5)
            .with_string("s", "x")
            .with_id("io", MemoryIdentifier::new("I1"));
        let tags: Vec<_> = id.iter().map(Element::value_type).collect();
        assert_eq!(
            tags,
            vec![ValueType::Int, ValueType::Float, ValueType::String, ValueType::Identifier]
        );
    }

    #[test]
    fn test_views_do_not_coerce() {
        let id = MemoryIdentifier::new("S1").with_int("i", 2).with_float("f", 2.0);
        let i = id.find_by_attribute("i", 0).unwrap();
        let f = id.find_by_attribute("f", 0).unwrap();
        assert_eq!(i.as_float(), None);
        assert_eq!(f.as_int(), None);
        assert!(i.as_identifier().is_none());
    }

    #[test]
    fn test_value_as_string() {
        let id = MemoryIdentifier::new("S1")
            .with_int("i", -7)
            .with_string("s", "red")
            .with_id("io", MemoryIdentifier::new("I1"));
        let rendered: Vec<_> = id.iter().map(Element::value_as_string).collect();
        assert_eq!(rendered, vec!["-7", "red", "I1"]);
    }

    #[test]
    fn test_agent_commands_skip_leaves() {
        let mut agent = MemoryAgent::new("soar");
        agent.output_link.push("status", "idle");
        agent.issue_command("move", MemoryIdentifier::new("C1").with_string("direction", "north"));
        agent.issue_command("stop", MemoryIdentifier::new("C2"));

        assert_eq!(agent.number_of_commands(), 2);
        let second = agent.command_at(1).unwrap();
        assert_eq!(agent.command_name(second), "stop");
        assert!(agent.command_at(2).is_none());
    }
}
