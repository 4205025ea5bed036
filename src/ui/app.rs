use std::time::Duration;

use chrono::Utc;
use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ClientCommand, ClientEvent, Enrollment, StatusUpdate};

use super::components::{activity_list, signup_form, status_banner};
use super::state::AppState;

pub struct ActivityApp {
    state: AppState,
    command_sender: mpsc::Sender<ClientCommand>,
    event_receiver: mpsc::Receiver<ClientEvent>,
}

impl ActivityApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ClientCommand>,
        event_receiver: mpsc::Receiver<ClientEvent>,
    ) -> Self {
        let mut app = Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        };
        app.send_command(ClientCommand::LoadActivities);
        app
    }

    fn handle_client_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event, Utc::now());
        }
        self.state.expire_status(Utc::now());
    }

    fn send_command(&mut self, command: ClientCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
        }
    }

    fn submit_signup(&mut self) {
        match self.state.signup_request() {
            Ok(enrollment) => self.send_command(ClientCommand::Signup(enrollment)),
            Err(err) => self
                .state
                .show_status(StatusUpdate::error(err.to_string()), Utc::now()),
        }
    }

    fn remove_participant(&mut self, enrollment: Enrollment) {
        self.send_command(ClientCommand::Unregister(enrollment));
    }
}

impl eframe::App for ActivityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_client_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_banner::render(ui, self.state.visible_status());
        });

        egui::SidePanel::right("signup_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                if signup_form::render(ui, &mut self.state) {
                    self.submit_signup();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Extracurricular Activities");
            ui.separator();
            if let Some(enrollment) = activity_list::render(ui, &self.state.list) {
                self.remove_participant(enrollment);
            }
        });

        // Keeps worker events and status expiry flowing without user input.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
