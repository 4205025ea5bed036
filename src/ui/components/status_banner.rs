use eframe::egui;

use crate::common::StatusKind;
use crate::ui::state::StatusMessage;

pub fn render(ui: &mut egui::Ui, status: Option<&StatusMessage>) {
    let Some(status) = status else {
        return;
    };

    let color = match status.kind {
        StatusKind::Success => egui::Color32::from_rgb(46, 125, 50),
        StatusKind::Error => egui::Color32::from_rgb(198, 40, 40),
        StatusKind::Warning => egui::Color32::from_rgb(237, 108, 2),
    };

    ui.colored_label(color, status.text.as_str());
}
