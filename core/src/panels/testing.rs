//! Shared panel-handle fixture for tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::panels::record::PanelId;
use crate::panels::sources::{HandleRef, PanelHandle};

/// Scriptable panel handle. Interior mutability lets a test mutate the
/// host-side state between polls while the source holds the same `Rc`.
#[derive(Debug)]
pub struct FakePanel {
    pub id: PanelId,
    pub name: String,
    pub alive: Cell<bool>,
    pub active: Cell<bool>,
    pub open: Cell<Option<bool>>,
    pub own_alpha: Cell<Option<f32>>,
    pub ancestor_min_alpha: Cell<Option<f32>>,
}

impl FakePanel {
    pub fn new(id: PanelId, name: &str) -> Rc<Self> {
        Rc::new(Self {
            id,
            name: name.to_string(),
            alive: Cell::new(true),
            active: Cell::new(true),
            open: Cell::new(None),
            own_alpha: Cell::new(None),
            ancestor_min_alpha: Cell::new(None),
        })
    }

    pub fn as_handle(self: &Rc<Self>) -> HandleRef {
        Rc::clone(self) as HandleRef
    }
}

impl PanelHandle for FakePanel {
    fn id(&self) -> PanelId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn is_open(&self) -> Option<bool> {
        self.open.get()
    }

    fn own_alpha(&self) -> Option<f32> {
        self.own_alpha.get()
    }

    fn ancestor_min_alpha(&self) -> Option<f32> {
        self.ancestor_min_alpha.get()
    }
}
