//! Minimal in-memory element tree that views render into.
//!
//! Nodes live in an arena and are addressed by `NodeId`. Lookups by id only
//! see nodes reachable from the root. `remove_children` frees the removed
//! subtrees and later elements reuse their slots, so a `NodeId` into a
//! removed subtree must not be used again.

use crate::ElementSpec;

use std::collections::{BTreeMap, BTreeSet, HashMap};

const ROOT_TAG: &str = "body";
const VALUE_ATTRIBUTE: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// Where `insert_adjacent` places a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    templates: HashMap<String, ElementSpec>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_TAG)],
            free: Vec::new(),
            templates: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // ---------------------------------------------------------------------
    // Templates
    // ---------------------------------------------------------------------

    /// Register the element a template produces. Replaces any previous
    /// template with the same id.
    pub fn register_template<S: Into<String>>(&mut self, template_id: S, content: ElementSpec) {
        self.templates.insert(template_id.into(), content);
    }

    pub fn has_template(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }

    /// Deep-copy a template's content into a new, detached element
    pub fn instantiate(&mut self, template_id: &str) -> Option<NodeId> {
        let spec = self.templates.get(template_id)?.clone();
        Some(self.build(&spec))
    }

    fn build(&mut self, spec: &ElementSpec) -> NodeId {
        let node = self.create_element(&spec.tag);
        {
            let n = &mut self.nodes[node.0];
            n.id = spec.id.clone();
            n.classes = spec.classes.iter().cloned().collect();
            n.attributes = spec.attributes.clone();
            n.text = spec.text.clone();
        }
        for child_spec in &spec.children {
            let child = self.build(child_spec);
            self.append_child(node, child);
        }
        node
    }

    // ---------------------------------------------------------------------
    // Tree structure
    // ---------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        match self.free.pop() {
            Some(node) => {
                self.nodes[node.0] = Node::new(tag);
                node
            }
            None => {
                self.nodes.push(Node::new(tag));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_adjacent(parent, InsertPosition::BeforeEnd, child);
    }

    /// Insert `child` as first or last child of `parent`, moving it out of
    /// its current parent if it already has one.
    pub fn insert_adjacent(&mut self, parent: NodeId, position: InsertPosition, child: NodeId) {
        self.detach(child);
        match position {
            InsertPosition::AfterBegin => self.nodes[parent.0].children.insert(0, child),
            InsertPosition::BeforeEnd => self.nodes[parent.0].children.push(child),
        }
        self.nodes[child.0].parent = Some(parent);
    }

    /// Remove every child of `parent` and free their subtrees
    pub fn remove_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.release(child);
        }
    }

    fn release(&mut self, node: NodeId) {
        let freed = std::mem::replace(&mut self.nodes[node.0], Node::new(""));
        for child in freed.children {
            self.release(child);
        }
        self.free.push(node);
    }

    /// Nodes currently in use, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Slots the arena has ever allocated
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Whether `node` is reachable from the root
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root() {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Find a connected element by id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_descendant(self.root(), &|n: &Node| n.id.as_deref() == Some(id))
    }

    /// First descendant of `scope` with the given tag, in document order
    pub fn query_selector(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.find_descendant(scope, &|n: &Node| n.tag == tag)
    }

    /// First descendant of `scope` with the given id, connected or not
    pub fn query_selector_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.find_descendant(scope, &|n: &Node| n.id.as_deref() == Some(id))
    }

    fn find_descendant(&self, scope: NodeId, predicate: &dyn Fn(&Node) -> bool) -> Option<NodeId> {
        for child in &self.nodes[scope.0].children {
            if predicate(&self.nodes[child.0]) {
                return Some(*child);
            }
            if let Some(found) = self.find_descendant(*child, predicate) {
                return Some(found);
            }
        }
        None
    }

    // ---------------------------------------------------------------------
    // Element state
    // ---------------------------------------------------------------------

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].id.as_deref()
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.nodes[node.0].id = Some(id.to_string());
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    /// Own text followed by all descendants' text, in document order
    pub fn text_content(&self, node: NodeId) -> String {
        let mut content = self.nodes[node.0].text.clone();
        for child in &self.nodes[node.0].children {
            content.push_str(&self.text_content(*child));
        }
        content
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.remove(class);
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.contains(class)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Current value of a form field; empty when never set
    pub fn value(&self, node: NodeId) -> &str {
        self.attribute(node, VALUE_ATTRIBUTE).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.set_attribute(node, VALUE_ATTRIBUTE, value);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// The document as shared between views on the single UI thread
pub type SharedDocument = std::rc::Rc<std::cell::RefCell<Document>>;
