use crate::WhiteboardApp;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Brush");

            // Palette
            let palette = app.config().palette.clone();
            ui.horizontal_wrapped(|ui| {
                for color in palette {
                    let selected = app.brush_color() == color;
                    let swatch = egui::Button::new("")
                        .fill(color)
                        .min_size(egui::vec2(22.0, 22.0))
                        .selected(selected);
                    if ui.add(swatch).clicked() {
                        log::info!("Brush color selected: {:?}", color);
                        app.set_brush_color(color);
                    }
                }
            });

            // Brush size slider
            let [min, max] = app.config().brush.size_range;
            let mut size = app.brush_size();
            ui.horizontal(|ui| {
                ui.label("Size:");
                if ui.add(egui::Slider::new(&mut size, min..=max)).changed() {
                    app.set_brush_size(size);
                }
            });

            ui.separator();

            // Undo/Redo section
            let (can_undo, can_redo) = app
                .active_board()
                .map(|board| {
                    let history = board.canvas().history();
                    (history.can_undo(), history.can_redo())
                })
                .unwrap_or((false, false));
            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.weak("Ctrl+Z / Ctrl+R");

            if let Some(board) = app.active_board() {
                let history = board.canvas().history();
                ui.label(format!("Active: {}", board.mount()));
                ui.label(format!("Strokes: {}", history.strokes().len()));
                ui.horizontal(|ui| {
                    ui.label(format!("Undo stack: {}", history.undo_stack().len()));
                    ui.label(format!("Redo stack: {}", history.redo_stack().len()));
                });
            }

            ui.separator();

            if ui.button("New board").clicked() {
                app.add_board();
            }
        });
}
