use crate::PaintApp;
use crate::command::Command;
use crate::raster::ShapeKind;
use crate::tools::ToolType;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.session().tool();
            for tool in ToolType::ALL {
                if ui.selectable_label(active_tool == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {}", tool);
                    app.execute_command(Command::SetTool { name: tool.name().to_owned() });
                }
            }
            ui.separator();

            let selected_shape = app.session().shape();
            egui::ComboBox::from_label("Shape")
                .selected_text(selected_shape.map_or("none", |shape| shape.name()))
                .show_ui(ui, |ui| {
                    for shape in ShapeKind::ALL {
                        let selected = selected_shape == Some(shape);
                        if ui.selectable_label(selected, shape.name()).clicked() {
                            let name = shape.name().to_owned();
                            app.execute_command(Command::SetShape { name });
                            let name = ToolType::Shape.name().to_owned();
                            app.execute_command(Command::SetTool { name });
                        }
                    }
                });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let color = app.session().color();
                let mut rgb = [color.r, color.g, color.b];
                if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                    let hex = format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]);
                    app.execute_command(Command::SetColor { hex });
                }
                ui.monospace(color.to_hex());
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.session().can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.execute_command(Command::Undo);
                }
                if ui.button("Clear").clicked() {
                    app.execute_command(Command::Clear);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Fill canvas").clicked() {
                    app.execute_command(Command::FillCanvas);
                }
                if ui.button("Export").clicked() {
                    app.execute_command(Command::Export);
                }
            });

            ui.separator();
            let history = app.session().history();
            ui.label(format!("Undo steps: {}/{}", history.len(), history.capacity()));
            ui.label(format!("State: {}", app.session().state().name()));
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
