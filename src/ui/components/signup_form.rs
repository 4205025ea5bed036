use eframe::egui;

use crate::ui::state::AppState;

const PLACEHOLDER: &str = "Select an activity";

/// Draws the signup form. Returns `true` when the user submitted it.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit = false;

    ui.heading("Sign up for an activity");
    ui.separator();

    ui.label("Activity:");
    let selected_text = if state.selected_activity.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        state.selected_activity.clone()
    };
    let names: Vec<String> = state
        .catalog()
        .map(|catalog| catalog.names().map(str::to_string).collect())
        .unwrap_or_default();
    egui::ComboBox::from_id_salt("activity_select")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.selected_activity, String::new(), PLACEHOLDER);
            for name in names {
                let label = name.clone();
                ui.selectable_value(&mut state.selected_activity, name, label);
            }
        });

    ui.add_space(4.0);
    ui.label("Student email:");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.email_input).hint_text("your-email@mergington.edu"),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    ui.add_space(4.0);
    if ui.button("Sign Up").clicked() {
        submit = true;
    }

    submit
}
