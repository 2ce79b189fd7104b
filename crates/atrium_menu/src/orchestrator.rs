//! Open/close orchestrator
//!
//! Drives one menu through its lifecycle. Opening sweeps the pre-layers and
//! panel in and reveals the content; closing sweeps everything back out and,
//! once offscreen, resets the content to its hidden baseline.
//!
//! The open and close timelines live in private [`TimelineSlot`]s, so
//! starting either kills the other and an interrupted animation continues
//! from the elements' current positions. Timeline completion callbacks hold
//! only a weak reference to the menu and carry a generation number, so a
//! callback from a superseded or unmounted timeline does nothing.
//!
//! Lock order is always menu state, then scheduler. User callbacks run after
//! the menu lock is released.

use std::sync::{Arc, Mutex, Weak};

use atrium_animation::{SchedulerHandle, TargetId, Timeline, TimelineSlot, VisualProps};
use atrium_core::{Navigator, Point, Rect, Route};

use crate::items::{MenuContent, MenuItem, ResolvedSocial, SocialDirectory};
use crate::layers::{self, normalize_layer_colors};
use crate::registry::{ElementRegistry, ElementRole};
use crate::reveal::{self, LABEL_HIDDEN_ROTATE, LABEL_HIDDEN_Y_PERCENT, SOCIAL_LINK_HIDDEN_Y};
use crate::skin::MenuSkin;
use crate::state::{MenuEvent, MenuPhase, MenuState};
use crate::toggle::{ClickAway, IconState, ToggleControl, ToggleGlyph};

/// Callback invoked on a menu transition
pub type MenuCallback = Arc<dyn Fn() + Send + Sync>;

/// Host hooks fired once per transition
#[derive(Clone, Default)]
pub struct MenuCallbacks {
    on_menu_open: Option<MenuCallback>,
    on_menu_close: Option<MenuCallback>,
}

impl MenuCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired when the menu starts opening
    pub fn on_open<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_menu_open = Some(Arc::new(f));
        self
    }

    /// Fired when the menu starts closing, or is unmounted while open
    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_menu_close = Some(Arc::new(f));
        self
    }

    fn fire(&self, phase: MenuPhase) {
        let callback = match phase {
            MenuPhase::Opening => self.on_menu_open.as_ref(),
            MenuPhase::Closing | MenuPhase::Closed => self.on_menu_close.as_ref(),
            MenuPhase::Open => None,
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl std::fmt::Debug for MenuCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuCallbacks")
            .field("on_menu_open", &self.on_menu_open.is_some())
            .field("on_menu_close", &self.on_menu_close.is_some())
            .finish()
    }
}

/// Everything needed to draw the menu's static parts
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView {
    pub state: MenuState,
    pub icon: IconState,
    pub glyph: ToggleGlyph,
    pub toggle_label: &'static str,
    pub items: Vec<MenuItem>,
    /// "01", "02", ... when the skin displays numbering
    pub numbers: Vec<String>,
    pub socials: Vec<ResolvedSocial>,
}

/// Visual props of every registered element, in registry order
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSnapshot {
    pub phase: MenuPhase,
    pub props: Vec<VisualProps>,
}

struct MenuInner {
    handle: SchedulerHandle,
    skin: MenuSkin,
    content: MenuContent,
    directory: SocialDirectory,
    registry: ElementRegistry,
    phase: MenuPhase,
    open_timeline: TimelineSlot,
    close_timeline: TimelineSlot,
    toggle: ToggleControl,
    click_away: ClickAway,
    /// Bumped whenever a timeline is started or abandoned
    generation: u64,
}

impl MenuInner {
    fn baseline(&self, role: ElementRole) -> VisualProps {
        let mut props = VisualProps::default();
        match role {
            ElementRole::Panel => {
                props.x_percent = self.skin.side.hidden_offset();
                props.color = Some(self.skin.panel_color);
            }
            ElementRole::PreLayer => props.x_percent = self.skin.side.hidden_offset(),
            ElementRole::EdgeHandle => props.color = Some(self.skin.panel_color),
            ElementRole::Toggle => props.color = Some(self.skin.toggle_color),
            ElementRole::ItemLabel => {
                props.y_percent = LABEL_HIDDEN_Y_PERCENT;
                props.rotate = LABEL_HIDDEN_ROTATE;
            }
            ElementRole::ItemNumber => {
                props.opacity = Some(0.0);
                props.color = Some(self.skin.accent_color);
            }
            ElementRole::SocialTitle => {
                props.opacity = Some(0.0);
                props.color = Some(self.skin.accent_color);
            }
            ElementRole::SocialLink => {
                props.y = SOCIAL_LINK_HIDDEN_Y;
                props.opacity = Some(0.0);
            }
        }
        props
    }

    fn register(&mut self, role: ElementRole, props: VisualProps) -> Option<TargetId> {
        let base = props.color.unwrap_or(self.skin.panel_color);
        let target = self.handle.register_target_with_base(props, base)?;
        if let Some(released) = self.registry.register(role, target) {
            self.handle.remove_target(released);
            if released == target {
                tracing::debug!("MenuOrchestrator::register - {:?} stack full, ignored", role);
                return None;
            }
            tracing::debug!("MenuOrchestrator::register - replaced {:?}", role);
        }
        Some(target)
    }

    fn mount(&mut self) {
        for color in normalize_layer_colors(&self.skin.layer_colors) {
            let mut props = self.baseline(ElementRole::PreLayer);
            props.color = Some(color);
            self.register(ElementRole::PreLayer, props);
        }
        for role in [ElementRole::Panel, ElementRole::Toggle] {
            self.register(role, self.baseline(role));
        }
        if self.skin.edge_handle.is_some() {
            self.register(ElementRole::EdgeHandle, self.baseline(ElementRole::EdgeHandle));
        }

        for _ in 0..self.content.items.len() {
            self.register(ElementRole::ItemLabel, self.baseline(ElementRole::ItemLabel));
            if self.skin.display_numbering {
                self.register(ElementRole::ItemNumber, self.baseline(ElementRole::ItemNumber));
            }
        }

        if self.skin.display_socials && !self.content.socials.is_empty() {
            self.register(ElementRole::SocialTitle, self.baseline(ElementRole::SocialTitle));
            for _ in 0..self.content.socials.len() {
                self.register(ElementRole::SocialLink, self.baseline(ElementRole::SocialLink));
            }
        }

        tracing::debug!(
            "MenuOrchestrator::mount - {} skin with {} element(s)",
            self.skin.name,
            self.registry.all_targets().len()
        );
    }

    /// Apply `event`; returns the new phase if it caused a transition
    fn request(&mut self, event: MenuEvent, this: &Weak<Mutex<MenuInner>>) -> Option<MenuPhase> {
        if self.registry.panel().is_none() {
            tracing::debug!("MenuOrchestrator - no panel registered, ignoring {:?}", event);
            return None;
        }
        let next = self.phase.on_event(event)?;

        match next {
            MenuPhase::Opening => self.start_open(this),
            MenuPhase::Closing => self.start_close(this),
            MenuPhase::Open | MenuPhase::Closed => return None,
        }

        tracing::debug!(
            "MenuOrchestrator - {:?} -> {:?} on {:?}",
            self.phase,
            next,
            event
        );
        self.phase = next;
        Some(next)
    }

    fn start_open(&mut self, this: &Weak<Mutex<MenuInner>>) {
        self.close_timeline.cancel();
        reveal::reset(&self.handle, &self.registry);

        let mut timeline = Timeline::new();
        let schedule =
            layers::schedule_open(&mut timeline, &self.handle, &self.registry, &self.skin);
        reveal::schedule(
            &mut timeline,
            &self.registry,
            &self.skin,
            schedule.panel_insert_ms,
        );
        self.on_finish(&mut timeline, this);
        self.open_timeline.cancel_and_replace(timeline);

        self.toggle.set_open(true, self.registry.toggle(), &self.skin);
        if self.skin.close_on_click_away {
            self.click_away.attach();
        }
    }

    fn start_close(&mut self, this: &Weak<Mutex<MenuInner>>) {
        self.open_timeline.cancel();
        self.click_away.detach();

        let mut timeline = Timeline::new();
        layers::schedule_close(&mut timeline, &self.registry, &self.skin);
        self.on_finish(&mut timeline, this);
        self.close_timeline.cancel_and_replace(timeline);

        self.toggle.set_open(false, self.registry.toggle(), &self.skin);
    }

    fn on_finish(&mut self, timeline: &mut Timeline, this: &Weak<Mutex<MenuInner>>) {
        self.generation += 1;
        let generation = self.generation;
        let this = this.clone();
        timeline.on_complete(move || {
            if let Some(inner) = this.upgrade() {
                inner.lock().unwrap().finish(generation);
            }
        });
    }

    fn finish(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        let Some(next) = self.phase.on_event(MenuEvent::AnimationComplete) else {
            return;
        };

        if next == MenuPhase::Closed {
            reveal::reset(&self.handle, &self.registry);
            self.close_timeline.release_finished();
        } else {
            self.open_timeline.release_finished();
        }

        tracing::debug!("MenuOrchestrator - {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Tear down; returns true if the menu was open
    fn unmount(&mut self) -> bool {
        let was_open = self.phase.is_open();

        self.generation += 1;
        self.open_timeline.cancel();
        self.close_timeline.cancel();
        self.toggle.cancel();
        self.click_away.detach();

        for target in self.registry.clear() {
            self.handle.remove_target(target);
        }
        self.phase = MenuPhase::Closed;
        was_open
    }
}

/// Coordinates the layer stack, content revealer and toggle of one menu
pub struct MenuOrchestrator {
    inner: Arc<Mutex<MenuInner>>,
    callbacks: MenuCallbacks,
}

impl MenuOrchestrator {
    /// Create an orchestrator with no elements registered yet
    pub fn new(handle: SchedulerHandle, skin: MenuSkin, content: MenuContent) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MenuInner {
                toggle: ToggleControl::new(handle.clone()),
                open_timeline: TimelineSlot::new(handle.clone()),
                close_timeline: TimelineSlot::new(handle.clone()),
                handle,
                skin,
                content,
                directory: SocialDirectory::new(),
                registry: ElementRegistry::new(),
                phase: MenuPhase::Closed,
                click_away: ClickAway::default(),
                generation: 0,
            })),
            callbacks: MenuCallbacks::default(),
        }
    }

    /// Create an orchestrator and register the standard element tree
    ///
    /// Everything starts hidden: layers and panel offscreen, content at its
    /// baseline.
    pub fn mount(handle: SchedulerHandle, skin: MenuSkin, content: MenuContent) -> Self {
        let menu = Self::new(handle, skin, content);
        menu.inner.lock().unwrap().mount();
        menu
    }

    pub fn with_callbacks(mut self, callbacks: MenuCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn with_directory(self, directory: SocialDirectory) -> Self {
        self.inner.lock().unwrap().directory = directory;
        self
    }

    /// Register one element at its hidden baseline
    pub fn register(&self, role: ElementRole) -> Option<TargetId> {
        let mut inner = self.inner.lock().unwrap();
        let props = inner.baseline(role);
        inner.register(role, props)
    }

    /// Record an element's on-screen bounds for click-away hit-testing
    pub fn set_bounds(&self, role: ElementRole, bounds: Rect) {
        self.inner.lock().unwrap().registry.set_bounds(role, bounds);
    }

    pub fn toggle(&self) {
        let open = {
            let inner = self.inner.lock().unwrap();
            matches!(inner.phase, MenuPhase::Closed | MenuPhase::Closing)
        };
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    pub fn open(&self) {
        self.send(MenuEvent::Open);
    }

    pub fn close(&self) {
        self.send(MenuEvent::Close);
    }

    /// Route a pointer-down from anywhere on the page
    ///
    /// Returns true if it dismissed the menu.
    pub fn handle_pointer_down(&self, point: Point) -> bool {
        let dismiss = {
            let inner = self.inner.lock().unwrap();
            inner.click_away.should_dismiss(
                point,
                inner.registry.bounds(ElementRole::Panel),
                inner.registry.bounds(ElementRole::Toggle),
            )
        };
        dismiss && self.send(MenuEvent::ClickAway)
    }

    /// Close the menu and navigate in one step
    pub fn navigate(&self, route: &Route, navigator: &mut dyn Navigator) {
        self.close();
        navigator.navigate(route);
    }

    /// Kill all animations and release every element
    pub fn unmount(&self) {
        let was_open = self.inner.lock().unwrap().unmount();
        if was_open {
            self.callbacks.fire(MenuPhase::Closed);
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.inner.lock().unwrap().phase
    }

    pub fn state(&self) -> MenuState {
        self.phase().into()
    }

    pub fn icon(&self) -> IconState {
        self.inner.lock().unwrap().toggle.icon()
    }

    pub fn skin(&self) -> MenuSkin {
        self.inner.lock().unwrap().skin.clone()
    }

    pub fn is_click_away_attached(&self) -> bool {
        self.inner.lock().unwrap().click_away.is_attached()
    }

    /// Look up a registered element
    pub fn element(&self, role: ElementRole, index: usize) -> Option<TargetId> {
        let inner = self.inner.lock().unwrap();
        let registry = &inner.registry;
        match role {
            ElementRole::Panel => registry.panel(),
            ElementRole::PreLayer => registry.pre_layers().get(index).copied(),
            ElementRole::EdgeHandle => registry.edge_handle(),
            ElementRole::Toggle => registry.toggle(),
            ElementRole::ItemLabel => registry.item_labels().get(index).copied(),
            ElementRole::ItemNumber => registry.item_numbers().get(index).copied(),
            ElementRole::SocialTitle => registry.social_title(),
            ElementRole::SocialLink => registry.social_links().get(index).copied(),
        }
    }

    pub fn view(&self) -> MenuView {
        let inner = self.inner.lock().unwrap();
        let icon = inner.toggle.icon();
        let numbers = if inner.skin.display_numbering {
            (1..=inner.content.items.len())
                .map(|n| format!("{n:02}"))
                .collect()
        } else {
            Vec::new()
        };
        let socials = if inner.skin.display_socials {
            inner
                .content
                .socials
                .iter()
                .map(|social| inner.directory.resolve(social))
                .collect()
        } else {
            Vec::new()
        };

        MenuView {
            state: inner.phase.into(),
            icon,
            glyph: icon.glyph(),
            toggle_label: icon.aria_label(),
            items: inner.content.items.clone(),
            numbers,
            socials,
        }
    }

    pub fn visual_snapshot(&self) -> MenuSnapshot {
        let inner = self.inner.lock().unwrap();
        MenuSnapshot {
            phase: inner.phase,
            props: inner
                .registry
                .all_targets()
                .into_iter()
                .filter_map(|target| inner.handle.props(target))
                .collect(),
        }
    }

    fn send(&self, event: MenuEvent) -> bool {
        let this = Arc::downgrade(&self.inner);
        let transition = self.inner.lock().unwrap().request(event, &this);
        match transition {
            Some(phase) => {
                self.callbacks.fire(phase);
                true
            }
            None => false,
        }
    }
}

impl Drop for MenuOrchestrator {
    fn drop(&mut self) {
        self.unmount();
    }
}
