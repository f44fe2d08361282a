use super::{BoardView, allocate_board};
use crate::registry::{FrameLayout, Mount};

/// The main drawing area, filling whatever the side panel leaves free
pub fn central_panel(ctx: &egui::Context, layout: &mut FrameLayout) -> BoardView {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| allocate_board(ui, Mount::Root, layout))
        .inner
}
