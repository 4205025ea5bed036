use eframe::egui;

use crate::common::{Activity, Enrollment};
use crate::ui::state::ListView;

/// Renders the activity cards. Returns the participant whose remove button
/// was clicked this frame, if any.
pub fn render(ui: &mut egui::Ui, list: &ListView) -> Option<Enrollment> {
    let catalog = match list {
        ListView::Loading => {
            ui.label("Loading activities...");
            return None;
        }
        ListView::Unavailable => {
            ui.colored_label(
                egui::Color32::RED,
                "Failed to load activities. Please try again later.",
            );
            return None;
        }
        ListView::Loaded(catalog) => catalog,
    };

    if catalog.is_empty() {
        ui.label("No activities available");
        return None;
    }

    let mut removed = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for activity in catalog.activities() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                if let Some(email) = card(ui, activity) {
                    removed = Some(Enrollment::new(activity.name.as_str(), email));
                }
            });
            ui.add_space(6.0);
        }
    });

    removed
}

fn card(ui: &mut egui::Ui, activity: &Activity) -> Option<String> {
    ui.label(egui::RichText::new(activity.name.as_str()).heading());
    ui.label(activity.description.as_str());
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Schedule:").strong());
        ui.label(activity.schedule.as_str());
    });
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Availability:").strong());
        ui.label(format!("{} spots left", activity.spots_left()));
    });

    ui.separator();
    ui.label(egui::RichText::new("Participants").strong());

    if activity.participants.is_empty() {
        ui.label(egui::RichText::new("No participants yet").weak());
        return None;
    }

    let mut removed = None;
    for participant in &activity.participants {
        ui.horizontal(|ui| {
            ui.label(participant.as_str());
            if ui
                .small_button("×")
                .on_hover_text("Remove participant")
                .clicked()
            {
                removed = Some(participant.clone());
            }
        });
    }
    removed
}
