//! Element registry
//!
//! Child elements register their animation targets here by role when they
//! mount, so the orchestrator works from a typed collection of handles rather
//! than looking elements up after the fact.

use atrium_animation::TargetId;
use atrium_core::Rect;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::layers::MAX_LAYERS;

/// What an element is within the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Panel,
    PreLayer,
    EdgeHandle,
    Toggle,
    ItemLabel,
    ItemNumber,
    SocialTitle,
    SocialLink,
}

/// Typed collection of a menu's element handles
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    panel: Option<TargetId>,
    pre_layers: SmallVec<[TargetId; MAX_LAYERS]>,
    edge_handle: Option<TargetId>,
    toggle: Option<TargetId>,
    item_labels: Vec<TargetId>,
    item_numbers: Vec<TargetId>,
    social_title: Option<TargetId>,
    social_links: Vec<TargetId>,
    bounds: FxHashMap<ElementRole, Rect>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element
    ///
    /// Returns the handle the registry let go of, which the caller must
    /// release: the element a single-slot role displaced, or `target` itself
    /// when the pre-layer stack already holds [`MAX_LAYERS`].
    #[must_use]
    pub fn register(&mut self, role: ElementRole, target: TargetId) -> Option<TargetId> {
        match role {
            ElementRole::Panel => self.panel.replace(target),
            ElementRole::EdgeHandle => self.edge_handle.replace(target),
            ElementRole::Toggle => self.toggle.replace(target),
            ElementRole::SocialTitle => self.social_title.replace(target),
            ElementRole::PreLayer if self.pre_layers.len() >= MAX_LAYERS => Some(target),
            ElementRole::PreLayer => {
                self.pre_layers.push(target);
                None
            }
            ElementRole::ItemLabel => {
                self.item_labels.push(target);
                None
            }
            ElementRole::ItemNumber => {
                self.item_numbers.push(target);
                None
            }
            ElementRole::SocialLink => {
                self.social_links.push(target);
                None
            }
        }
    }

    /// Record an element's on-screen bounds for hit-testing
    pub fn set_bounds(&mut self, role: ElementRole, bounds: Rect) {
        self.bounds.insert(role, bounds);
    }

    pub fn bounds(&self, role: ElementRole) -> Option<Rect> {
        self.bounds.get(&role).copied()
    }

    pub fn panel(&self) -> Option<TargetId> {
        self.panel
    }

    pub fn pre_layers(&self) -> &[TargetId] {
        &self.pre_layers
    }

    pub fn edge_handle(&self) -> Option<TargetId> {
        self.edge_handle
    }

    pub fn toggle(&self) -> Option<TargetId> {
        self.toggle
    }

    pub fn item_labels(&self) -> &[TargetId] {
        &self.item_labels
    }

    pub fn item_numbers(&self) -> &[TargetId] {
        &self.item_numbers
    }

    pub fn social_title(&self) -> Option<TargetId> {
        self.social_title
    }

    pub fn social_links(&self) -> &[TargetId] {
        &self.social_links
    }

    /// Pre-layers followed by the panel, in sweep order
    pub fn sweep_targets(&self) -> Vec<TargetId> {
        self.pre_layers.iter().copied().chain(self.panel).collect()
    }

    /// Every registered target
    pub fn all_targets(&self) -> Vec<TargetId> {
        self.sweep_targets()
            .into_iter()
            .chain(self.edge_handle)
            .chain(self.toggle)
            .chain(self.item_labels.iter().copied())
            .chain(self.item_numbers.iter().copied())
            .chain(self.social_title)
            .chain(self.social_links.iter().copied())
            .collect()
    }

    /// Empty the registry, returning every target it held
    pub fn clear(&mut self) -> Vec<TargetId> {
        let targets = self.all_targets();
        *self = Self::default();
        targets
    }
}
