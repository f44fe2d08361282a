use super::{BoardView, allocate_board};
use crate::registry::{FrameLayout, Mount};

/// Shows one floating window per named board.
///
/// Returns the views of the open boards and the selectors whose windows were
/// closed this frame; closed selectors are removed from `selectors`.
pub fn board_windows(
    ctx: &egui::Context,
    selectors: &mut Vec<String>,
    layout: &mut FrameLayout,
) -> (Vec<BoardView>, Vec<String>) {
    let mut views = Vec::new();
    let mut closed = Vec::new();

    for selector in selectors.iter() {
        let mut open = true;
        let shown = egui::Window::new(selector.as_str())
            .id(egui::Id::new(("board_window", selector.as_str())))
            .open(&mut open)
            .default_size([320.0, 240.0])
            .frame(egui::Frame::window(&ctx.style()).inner_margin(0.0))
            .show(ctx, |ui| {
                allocate_board(ui, Mount::Selector(selector.clone()), layout)
            });

        if !open {
            closed.push(selector.clone());
        } else if let Some(view) = shown.and_then(|response| response.inner) {
            views.push(view);
        }
    }

    selectors.retain(|selector| !closed.contains(selector));
    (views, closed)
}
