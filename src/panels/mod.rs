mod board_windows;
mod central_panel;
mod tools_panel;

pub use board_windows::board_windows;
pub use central_panel::central_panel;
pub use tools_panel::tools_panel;

use crate::registry::{Mount, PressTarget};

/// Where a surface was laid out this frame and how to present it
pub struct BoardView {
    pub mount: Mount,
    pub painter: egui::Painter,
    /// Whether the pointer is over this surface and not covered by another layer
    pub contains_pointer: bool,
}

/// The surface a press should go to this frame: the topmost view under the
/// pointer, or none when the pointer is over window chrome or other UI.
///
/// `views` are ordered bottom to top.
pub fn press_target(views: &[BoardView]) -> PressTarget {
    PressTarget::topmost(views.iter().map(|view| (&view.mount, view.contains_pointer)))
}

/// Allocates the drawing area of one surface and records its container box
pub(crate) fn allocate_board(
    ui: &mut egui::Ui,
    mount: Mount,
    layout: &mut crate::registry::FrameLayout,
) -> BoardView {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
    match &mount {
        Mount::Root => layout.set_root(response.rect),
        Mount::Selector(selector) => layout.insert_named(selector.clone(), response.rect),
        Mount::Element(id) => layout.insert_element(*id, response.rect),
    }
    BoardView {
        mount,
        painter,
        contains_pointer: response.contains_pointer(),
    }
}
