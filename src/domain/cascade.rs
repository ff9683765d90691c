// src/domain/cascade.rs

use crate::backend::models::{Category, City, Country, Subcategory};

/// Something that can appear as an `<option>`.
pub trait Choice {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

/// A parent option that owns the dependent options shown once it is picked.
pub trait ChoiceGroup: Choice {
    type Child: Choice;

    fn children(&self) -> &[Self::Child];
}

/// Two linked selects (category→subcategory, country→city).
///
/// The dependent options are always the children of the selected parent, and
/// the dependent selection is always one of those options or nothing.
#[derive(Debug, Clone)]
pub struct Cascade<'a, P> {
    parents: &'a [P],
    parent: Option<i64>,
    child: Option<i64>,
}

impl<'a, P: ChoiceGroup> Cascade<'a, P> {
    pub fn new(parents: &'a [P]) -> Self {
        Self {
            parents,
            parent: None,
            child: None,
        }
    }

    /// A dependent value carried over from before `parent` was picked; it
    /// survives only if `parent` owns it.
    pub fn with_selection(parents: &'a [P], parent: Option<i64>, child: Option<i64>) -> Self {
        let mut cascade = Self {
            child,
            ..Self::new(parents)
        };
        cascade.on_parent_selection_changed(parent);
        cascade
    }

    pub fn on_parent_selection_changed(&mut self, parent: Option<i64>) {
        self.parent = parent;
        self.reset_invalid_child();
    }

    fn reset_invalid_child(&mut self) {
        let options = self.options();
        if let Some(id) = self.child {
            if !options.iter().any(|option| option.id() == id) {
                self.child = None;
            }
        }
    }

    pub fn parents(&self) -> &'a [P] {
        self.parents
    }

    /// Children of the selected parent; empty when nothing (or nothing known) is picked.
    pub fn options(&self) -> &'a [P::Child] {
        self.parent
            .and_then(|id| self.parents.iter().find(|parent| parent.id() == id))
            .map(P::children)
            .unwrap_or(&[])
    }

    pub fn selected_parent(&self) -> Option<i64> {
        self.parent
    }

    pub fn selected_child(&self) -> Option<i64> {
        self.child
    }
}

impl Choice for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ChoiceGroup for Category {
    type Child = Subcategory;

    fn children(&self) -> &[Subcategory] {
        &self.subcategories
    }
}

impl Choice for Subcategory {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Choice for Country {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ChoiceGroup for Country {
    type Child = City;

    fn children(&self) -> &[City] {
        &self.cities
    }
}

impl Choice for City {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
