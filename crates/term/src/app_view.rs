//! Renders whichever screen the app is on.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::SessionSnapshot;
use crate::engine::{App, Screen};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Hud, Viewport};
use crate::menu_view::{render_menu, render_skin_select};

/// Screen renderer with a reusable session snapshot.
#[derive(Debug, Default)]
pub struct AppView {
    snapshot: SessionSnapshot,
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the cached snapshot from the running session, if any.
    pub fn sync(&mut self, app: &App) {
        if let Some(session) = app.session() {
            session.snapshot_into(&mut self.snapshot);
        }
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Hash of everything visible; the clock only counts whole seconds.
    ///
    /// Call after [`AppView::sync`].
    pub fn fingerprint(&self, app: &App, viewport: Viewport) -> u64 {
        let mut h = DefaultHasher::new();
        (viewport.width, viewport.height).hash(&mut h);
        app.is_fullscreen().hash(&mut h);
        app.high_score().hash(&mut h);
        app.current_skin().name.hash(&mut h);
        match app.screen() {
            Screen::Menu { cursor } => (0u8, *cursor).hash(&mut h),
            Screen::SkinSelect { cursor } => (1u8, *cursor).hash(&mut h),
            Screen::Game(_) => {
                let s = &self.snapshot;
                2u8.hash(&mut h);
                s.snake.hash(&mut h);
                s.food.hash(&mut h);
                s.food_color.hash(&mut h);
                s.score.hash(&mut h);
                s.status.hash(&mut h);
                s.accelerating.hash(&mut h);
                s.new_record.hash(&mut h);
                s.episode_id.hash(&mut h);
                (s.elapsed_ms / 1000).hash(&mut h);
            }
        }
        h.finish()
    }

    /// Call after [`AppView::sync`].
    pub fn render_into(&self, app: &App, viewport: Viewport, fb: &mut FrameBuffer) {
        match app.screen() {
            Screen::Menu { cursor } => {
                render_menu(fb, viewport, *cursor, app.high_score(), app.current_skin());
            }
            Screen::SkinSelect { cursor } => {
                render_skin_select(fb, viewport, *cursor, app.current_skin().name);
            }
            Screen::Game(_) => {
                let grid = (self.snapshot.grid_width, self.snapshot.grid_height);
                let view = GameView::fitted(app.is_fullscreen(), grid, viewport);
                let hud = Hud {
                    high_score: app.high_score(),
                    skin_name: app.current_skin().display_name,
                };
                view.render_into(&self.snapshot, &hud, viewport, fb);
            }
        }
    }
}
