//! Viewport-driven menu host
//!
//! Mounts exactly one menu variant for the current viewport and swaps it when
//! a resize crosses the narrow breakpoint. The outgoing menu is fully
//! unmounted before the incoming one mounts, so two menus never coexist.

use atrium_animation::SchedulerHandle;
use atrium_core::{Viewport, DEFAULT_NARROW_BREAKPOINT};

use crate::items::{MenuContent, SocialDirectory};
use crate::orchestrator::{MenuCallbacks, MenuOrchestrator};
use crate::skin::MenuSkin;

/// Which menu the viewport calls for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuVariant {
    Desktop,
    Mobile,
}

impl MenuVariant {
    pub fn for_viewport(viewport: Viewport, breakpoint: f32) -> Self {
        if viewport.is_narrow(breakpoint) {
            MenuVariant::Mobile
        } else {
            MenuVariant::Desktop
        }
    }
}

/// Owns the single mounted menu
pub struct MenuHost {
    handle: SchedulerHandle,
    desktop: MenuSkin,
    mobile: MenuSkin,
    content: MenuContent,
    directory: SocialDirectory,
    callbacks: MenuCallbacks,
    breakpoint: f32,
    variant: Option<MenuVariant>,
    menu: Option<MenuOrchestrator>,
}

impl MenuHost {
    pub fn new(handle: SchedulerHandle, content: MenuContent) -> Self {
        Self {
            handle,
            desktop: MenuSkin::staggered(),
            mobile: MenuSkin::mobile(),
            content,
            directory: SocialDirectory::new(),
            callbacks: MenuCallbacks::default(),
            breakpoint: DEFAULT_NARROW_BREAKPOINT,
            variant: None,
            menu: None,
        }
    }

    pub fn desktop_skin(mut self, skin: MenuSkin) -> Self {
        self.desktop = skin;
        self
    }

    pub fn mobile_skin(mut self, skin: MenuSkin) -> Self {
        self.mobile = skin;
        self
    }

    pub fn breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn directory(mut self, directory: SocialDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn callbacks(mut self, callbacks: MenuCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Mount or swap the menu for `viewport`
    ///
    /// Returns true if a different variant was mounted.
    pub fn on_resize(&mut self, viewport: Viewport) -> bool {
        let variant = MenuVariant::for_viewport(viewport, self.breakpoint);
        if self.variant == Some(variant) {
            return false;
        }

        if let Some(old) = self.menu.take() {
            old.unmount();
        }

        let skin = match variant {
            MenuVariant::Desktop => self.desktop.clone(),
            MenuVariant::Mobile => self.mobile.clone(),
        };
        tracing::debug!(
            "MenuHost::on_resize - width {} mounts {:?} menu ({})",
            viewport.width,
            variant,
            skin.name
        );

        let menu = MenuOrchestrator::mount(self.handle.clone(), skin, self.content.clone())
            .with_directory(self.directory.clone())
            .with_callbacks(self.callbacks.clone());
        self.menu = Some(menu);
        self.variant = Some(variant);
        true
    }

    pub fn menu(&self) -> Option<&MenuOrchestrator> {
        self.menu.as_ref()
    }

    pub fn variant(&self) -> Option<MenuVariant> {
        self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MenuPhase;
    use atrium_animation::AnimationScheduler;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_resize_swaps_variant_while_open() {
        let scheduler = AnimationScheduler::new();
        let scroll_locked = Arc::new(AtomicBool::new(false));
        let lock = Arc::clone(&scroll_locked);
        let unlock = Arc::clone(&scroll_locked);

        let mut host = MenuHost::new(scheduler.handle(), MenuContent::studio()).callbacks(
            MenuCallbacks::new()
                .on_open(move || lock.store(true, Ordering::SeqCst))
                .on_close(move || unlock.store(false, Ordering::SeqCst)),
        );

        assert!(host.on_resize(Viewport::new(1024.0)));
        assert_eq!(host.variant(), Some(MenuVariant::Desktop));
        let desktop_targets = scheduler.target_count();

        let menu = host.menu().unwrap();
        menu.open();
        scheduler.run_until_idle(16.0, 5_000.0);
        assert_eq!(menu.phase(), MenuPhase::Open);
        assert!(scroll_locked.load(Ordering::SeqCst));

        assert!(host.on_resize(Viewport::new(600.0)));
        assert_eq!(host.variant(), Some(MenuVariant::Mobile));
        assert!(!scroll_locked.load(Ordering::SeqCst));

        // Only the mobile menu's elements remain
        let menu = host.menu().unwrap();
        assert_eq!(menu.skin().name, "mobile");
        assert_eq!(menu.phase(), MenuPhase::Closed);
        assert_eq!(scheduler.timeline_count(), 0);
        assert_ne!(scheduler.target_count(), desktop_targets);
        assert_eq!(scheduler.target_count(), element_count(&MenuSkin::mobile()));
    }

    #[test]
    fn test_resize_within_variant_keeps_menu() {
        let scheduler = AnimationScheduler::new();
        let mut host = MenuHost::new(scheduler.handle(), MenuContent::studio());
        host.on_resize(Viewport::new(1280.0));
        assert!(!host.on_resize(Viewport::new(1024.0)));
        assert!(host.on_resize(Viewport::new(767.0)));
        assert!(!host.on_resize(Viewport::new(320.0)));
        assert!(host.on_resize(Viewport::new(768.0)));
    }

    fn element_count(skin: &MenuSkin) -> usize {
        let content = MenuContent::studio();
        let layers = crate::layers::normalize_layer_colors(&skin.layer_colors).len();
        let items = content.items.len() * if skin.display_numbering { 2 } else { 1 };
        let socials = if skin.display_socials {
            1 + content.socials.len()
        } else {
            0
        };
        let edge = usize::from(skin.edge_handle.is_some());
        layers + 2 + edge + items + socials
    }
}
