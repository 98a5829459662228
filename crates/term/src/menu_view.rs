//! Main menu and skin selection screens.

use crate::engine::store::{Skin, SKINS};
use crate::engine::MenuItem;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::BACKGROUND_COLOR;

const TITLE: &str = "S N A K E";

fn base() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND_COLOR)
}

fn accent() -> CellStyle {
    CellStyle::new(Rgb::new(0, 255, 0), BACKGROUND_COLOR).bold()
}

fn top(viewport: Viewport, content_h: u16) -> u16 {
    viewport.height.saturating_sub(content_h) / 2
}

pub fn render_menu(fb: &mut FrameBuffer, viewport: Viewport, cursor: usize, high_score: u32, skin: &Skin) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(base().into_cell(' '));
    let w = viewport.width;
    let mut y = top(viewport, 16);

    fb.put_str_centered(0, w, y, TITLE, accent());
    y += 3;

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let selected = i == cursor;
        let label = item.label();
        let len = label.chars().count() as u16 + 4;
        let x = w.saturating_sub(len) / 2;
        if selected {
            let style = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(0, 200, 0)).bold();
            fb.fill_rect(x, y, len, 1, ' ', style);
            fb.put_str(x, y, "> ", style);
            fb.put_str(x + 2, y, label, style);
        } else {
            fb.put_str(x + 2, y, label, base());
        }
        y += 2;
    }

    y += 1;
    let label = "High score: ";
    let x = w.saturating_sub(label.len() as u16 + 6) / 2;
    let end = fb.put_str(x, y, label, base());
    fb.put_u32(end, y, high_score, accent());
    y += 1;

    let label = "Skin: ";
    let x = w.saturating_sub(label.len() as u16 + skin.display_name.len() as u16) / 2;
    let end = fb.put_str(x, y, label, base());
    fb.put_str(end, y, skin.display_name, CellStyle::new(skin.head, BACKGROUND_COLOR).bold());
    y += 2;

    let hint = base().dim();
    fb.put_str_centered(0, w, y, "Arrows/WASD move   Hold to speed up", hint);
    fb.put_str_centered(0, w, y + 1, "P pause   M menu   F fullscreen   Q quit", hint);
}

pub fn render_skin_select(fb: &mut FrameBuffer, viewport: Viewport, cursor: usize, current: &str) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(base().into_cell(' '));
    let w = viewport.width;
    let mut y = top(viewport, 12);

    fb.put_str_centered(0, w, y, "CHOOSE SKIN", accent());
    y += 3;

    let Some(skin) = SKINS.get(cursor) else {
        return;
    };
    let name_style = CellStyle::new(skin.head, BACKGROUND_COLOR).bold();
    let len = skin.display_name.chars().count() as u16 + 4;
    let x = w.saturating_sub(len) / 2;
    fb.put_str(x, y, "< ", base());
    let end = fb.put_str(x + 2, y, skin.display_name, name_style);
    fb.put_str(end, y, " >", base());
    y += 2;

    // Preview: head followed by a few body segments.
    let preview_w = 12;
    let x = w.saturating_sub(preview_w) / 2;
    fb.fill_rect(x, y, 2, 1, '█', CellStyle::new(skin.head, BACKGROUND_COLOR));
    fb.fill_rect(x + 2, y, preview_w - 2, 1, '▓', CellStyle::new(skin.body, BACKGROUND_COLOR));
    y += 2;

    fb.put_str_centered(0, w, y, skin.description, base());
    y += 1;
    if skin.name == current {
        fb.put_str_centered(0, w, y, "(current)", base().dim());
    }
    y += 2;

    let hint = base().dim();
    fb.put_str_centered(0, w, y, "Left/Right choose   Enter apply   Esc back", hint);
}
