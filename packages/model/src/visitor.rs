use crate::ast::*;
use crate::id_generator::IDGenerator;
use std::collections::HashSet;

/// Visitor pattern for traversing the template tree immutably
///
/// Default implementations walk the entire tree. Override specific
/// visit_* methods to act on the nodes you care about.
pub trait Visitor: Sized {
    fn visit_document(&mut self, doc: &Document) {
        walk_document(self, doc);
    }

    fn visit_section(&mut self, section: &Section) {
        walk_section(self, section);
    }

    fn visit_row(&mut self, row: &Row) {
        walk_row(self, row);
    }

    fn visit_column(&mut self, column: &Column) {
        walk_column(self, column);
    }

    fn visit_component(&mut self, _component: &Component) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming the tree in place
pub trait VisitorMut: Sized {
    fn visit_document_mut(&mut self, doc: &mut Document) {
        walk_document_mut(self, doc);
    }

    fn visit_section_mut(&mut self, section: &mut Section) {
        walk_section_mut(self, section);
    }

    fn visit_row_mut(&mut self, row: &mut Row) {
        walk_row_mut(self, row);
    }

    fn visit_column_mut(&mut self, column: &mut Column) {
        walk_column_mut(self, column);
    }

    fn visit_component_mut(&mut self, _component: &mut Component) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_document<V: Visitor>(visitor: &mut V, doc: &Document) {
    for section in &doc.sections {
        visitor.visit_section(section);
    }
}

pub fn walk_section<V: Visitor>(visitor: &mut V, section: &Section) {
    for row in &section.rows {
        visitor.visit_row(row);
    }
}

pub fn walk_row<V: Visitor>(visitor: &mut V, row: &Row) {
    for column in &row.columns {
        visitor.visit_column(column);
    }
}

pub fn walk_column<V: Visitor>(visitor: &mut V, column: &Column) {
    for component in &column.components {
        visitor.visit_component(component);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_document_mut<V: VisitorMut>(visitor: &mut V, doc: &mut Document) {
    for section in &mut doc.sections {
        visitor.visit_section_mut(section);
    }
}

pub fn walk_section_mut<V: VisitorMut>(visitor: &mut V, section: &mut Section) {
    for row in &mut section.rows {
        visitor.visit_row_mut(row);
    }
}

pub fn walk_row_mut<V: VisitorMut>(visitor: &mut V, row: &mut Row) {
    for column in &mut row.columns {
        visitor.visit_column_mut(column);
    }
}

pub fn walk_column_mut<V: VisitorMut>(visitor: &mut V, column: &mut Column) {
    for component in &mut column.components {
        visitor.visit_component_mut(component);
    }
}

/// Collects every node id
#[derive(Debug, Default)]
pub struct IdCollector {
    pub ids: HashSet<NodeId>,
    /// Ids seen more than once
    pub duplicates: Vec<NodeId>,
}

impl IdCollector {
    fn record(&mut self, id: &str) {
        if !self.ids.insert(id.to_string()) {
            self.duplicates.push(id.to_string());
        }
    }
}

impl Visitor for IdCollector {
    fn visit_section(&mut self, section: &Section) {
        self.record(&section.id);
        walk_section(self, section);
    }

    fn visit_row(&mut self, row: &Row) {
        self.record(&row.id);
        walk_row(self, row);
    }

    fn visit_column(&mut self, column: &Column) {
        self.record(&column.id);
        walk_column(self, column);
    }

    fn visit_component(&mut self, component: &Component) {
        self.record(&component.id);
    }
}

/// Replaces every id in a subtree with a freshly minted one
pub struct IdRemapper<'a> {
    ids: &'a mut IDGenerator,
}

impl<'a> IdRemapper<'a> {
    pub fn new(ids: &'a mut IDGenerator) -> Self {
        Self { ids }
    }
}

impl VisitorMut for IdRemapper<'_> {
    fn visit_section_mut(&mut self, section: &mut Section) {
        section.id = self.ids.new_id();
        walk_section_mut(self, section);
    }

    fn visit_row_mut(&mut self, row: &mut Row) {
        row.id = self.ids.new_id();
        walk_row_mut(self, row);
    }

    fn visit_column_mut(&mut self, column: &mut Column) {
        column.id = self.ids.new_id();
        walk_column_mut(self, column);
    }

    fn visit_component_mut(&mut self, component: &mut Component) {
        component.id = self.ids.new_id();
    }
}

/// Node counts for a template
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub sections: usize,
    pub rows: usize,
    pub columns: usize,
    pub components: usize,
}

impl TreeStats {
    pub fn of(doc: &Document) -> Self {
        let mut stats = Self::default();
        stats.visit_document(doc);
        stats
    }
}

impl Visitor for TreeStats {
    fn visit_section(&mut self, section: &Section) {
        self.sections += 1;
        walk_section(self, section);
    }

    fn visit_row(&mut self, row: &Row) {
        self.rows += 1;
        walk_row(self, row);
    }

    fn visit_column(&mut self, column: &Column) {
        self.columns += 1;
        walk_column(self, column);
    }

    fn visit_component(&mut self, _component: &Component) {
        self.components += 1;
    }
}
