//! Site shell
//!
//! Owns the animation scheduler, the content client and the hosted menu.
//! The menu's open and close hooks drive the page scroll lock, and resizes
//! go to the menu host so the right variant is mounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use atrium_animation::AnimationScheduler;
use atrium_content::ContentClient;
use atrium_core::{Point, Route, Viewport};
use atrium_menu::{MenuCallbacks, MenuContent, MenuHost, MenuOrchestrator};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::pages::{Page, LANDING_STATS};
use crate::widgets::AnimatedCounter;

pub struct Site {
    name: String,
    content: ContentClient,
    counters: Vec<AnimatedCounter>,
    host: MenuHost,
    scroll_locked: Arc<AtomicBool>,
    history: Vec<Route>,
    current: Route,
    scheduler: AnimationScheduler,
}

impl Site {
    /// Build the site for `config` at the given viewport
    pub fn new(config: &SiteConfig, viewport: Viewport) -> Result<Self> {
        let scheduler = AnimationScheduler::new();
        let content = config.content_client()?;

        let scroll_locked = Arc::new(AtomicBool::new(false));
        let lock = Arc::clone(&scroll_locked);
        let unlock = Arc::clone(&scroll_locked);
        let callbacks = MenuCallbacks::new()
            .on_open(move || lock.store(true, Ordering::SeqCst))
            .on_close(move || unlock.store(false, Ordering::SeqCst));

        let mut host = MenuHost::new(scheduler.handle(), MenuContent::studio())
            .desktop_skin(config.menu.desktop_skin()?)
            .mobile_skin(config.menu.mobile_skin()?)
            .breakpoint(config.viewport.narrow_breakpoint)
            .directory(config.social_directory())
            .callbacks(callbacks);
        host.on_resize(viewport);

        let counters = LANDING_STATS
            .iter()
            .map(|stat| {
                AnimatedCounter::new(scheduler.handle(), stat.label, stat.value)
                    .suffix(stat.suffix)
            })
            .collect();

        tracing::info!(
            "Site - {} ready ({} menu, content {})",
            config.site.name,
            host.menu().map(|m| m.skin().name).unwrap_or_default(),
            if content.is_configured() {
                "configured"
            } else {
                "not configured"
            }
        );

        Ok(Self {
            name: config.site.name.clone(),
            content,
            counters,
            host,
            scroll_locked,
            history: vec![Route::Landing],
            current: Route::Landing,
            scheduler,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn content(&self) -> &ContentClient {
        &self.content
    }

    pub fn menu(&self) -> Option<&MenuOrchestrator> {
        self.host.menu()
    }

    pub fn host(&self) -> &MenuHost {
        &self.host
    }

    /// Whether page scrolling is locked behind an open menu
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.load(Ordering::SeqCst)
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    /// Every route navigated to, oldest first
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.host.on_resize(viewport)
    }

    /// Advance animations by `dt_ms`; returns true while any are playing
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.scheduler.tick_ms(dt_ms)
    }

    /// Navigate directly, e.g. from an address bar
    pub fn visit(&mut self, path: &str) -> Page {
        let route = Route::parse(path);
        self.history.push(route.clone());
        self.show(route)
    }

    /// Navigate from a menu item: the menu closes in the same step
    pub fn navigate_from_menu(&mut self, route: Route) -> Page {
        match self.host.menu() {
            Some(menu) => menu.navigate(&route, &mut self.history),
            None => self.history.push(route.clone()),
        }
        self.show(route)
    }

    /// Forward a page pointer-down to the menu for click-away
    pub fn pointer_down(&self, point: Point) -> bool {
        self.host
            .menu()
            .is_some_and(|menu| menu.handle_pointer_down(point))
    }

    /// Report how much of the landing stats block is visible
    pub fn scroll_stats(&mut self, visibility: f32) {
        for counter in &mut self.counters {
            counter.on_visibility(visibility);
        }
    }

    /// Current counter readouts, as displayed
    pub fn stats(&self) -> Vec<(String, String)> {
        self.counters
            .iter()
            .map(|counter| (counter.label().to_string(), counter.display()))
            .collect()
    }

    fn show(&mut self, route: Route) -> Page {
        tracing::debug!("Site - showing {}", route);
        let page = Page::resolve(&route, &self.content);
        self.current = route;
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_content::PageState;
    use atrium_menu::{MenuPhase, MenuVariant};

    fn site(width: f32) -> Site {
        Site::new(&SiteConfig::default(), Viewport::new(width)).unwrap()
    }

    #[test]
    fn test_menu_drives_scroll_lock() {
        let site = site(1280.0);
        let menu = site.menu().unwrap();

        menu.open();
        assert!(site.is_scroll_locked());
        while site.tick(16.0) {}
        assert_eq!(site.menu().unwrap().phase(), MenuPhase::Open);

        site.menu().unwrap().close();
        assert!(!site.is_scroll_locked());
    }

    #[test]
    fn test_menu_navigation_closes_and_routes() {
        let mut site = site(1280.0);
        site.menu().unwrap().open();
        while site.tick(16.0) {}

        let page = site.navigate_from_menu(Route::WorkCategory("residential".into()));
        assert!(matches!(page, Page::Category(PageState::Ready(_))));
        assert_eq!(site.menu().unwrap().phase(), MenuPhase::Closing);
        assert!(!site.is_scroll_locked());
        assert_eq!(
            site.history().last(),
            Some(&Route::WorkCategory("residential".into()))
        );
    }

    #[test]
    fn test_resize_while_open_releases_scroll_lock() {
        let mut site = site(1024.0);
        site.menu().unwrap().open();
        while site.tick(16.0) {}
        assert!(site.is_scroll_locked());

        assert!(site.resize(Viewport::new(600.0)));
        assert_eq!(site.host().variant(), Some(MenuVariant::Mobile));
        assert!(!site.is_scroll_locked());
    }

    #[test]
    fn test_visit_unknown_path() {
        let mut site = site(1280.0);
        let page = site.visit("/no/such/page");
        assert!(matches!(page, Page::NotFound { .. }));
        assert_eq!(site.current_route(), &Route::NotFound);
    }

    #[test]
    fn test_stats_count_up_once_visible() {
        let mut site = site(1280.0);
        assert!(site.stats().iter().all(|(_, shown)| shown.starts_with('0')));

        site.scroll_stats(0.8);
        while site.tick(16.0) {}
        let shown: Vec<String> = site.stats().into_iter().map(|(_, s)| s).collect();
        assert_eq!(shown, ["25", "140+", "32"]);
    }
}
