use common::validation::{AuthField, ValidationError, validate_login, validate_registration};
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, Page, SharedState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Form state shared by the login and registration pages.
#[derive(Default)]
pub struct AuthPage {
    username: String,
    password: String,
    confirm: String,
    field_error: Option<ValidationError>,
}

impl AuthPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every visit; keeps the username so a fresh registration can
    /// log straight in.
    pub fn reset(&mut self) {
        self.password.clear();
        self.confirm.clear();
        self.field_error = None;
    }

    fn field_error(&self, field: AuthField) -> Option<&'static str> {
        self.field_error
            .as_ref()
            .filter(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Validates and queues the request. Returns false when the form was
    /// rejected locally.
    pub fn submit(
        &mut self,
        mode: AuthMode,
        shared_state: &SharedState,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) -> bool {
        let validated = match mode {
            AuthMode::Login => validate_login(&self.username, &self.password),
            AuthMode::Register => validate_registration(&self.username, &self.password, &self.confirm),
        };

        let credentials = match validated {
            Ok(credentials) => credentials,
            Err(e) => {
                self.field_error = Some(e);
                shared_state.clear_auth_error();
                return false;
            }
        };

        self.field_error = None;
        self.username = credentials.username.clone();
        shared_state.begin_auth();
        let command = match mode {
            AuthMode::Login => ClientCommand::Login(credentials),
            AuthMode::Register => ClientCommand::Register(credentials),
        };
        if command_tx.send(command).is_err() {
            shared_state.finish_auth(Some(common::api::NETWORK_ERROR_MESSAGE.to_string()));
            return false;
        }
        true
    }

    fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool, error: Option<&str>) -> egui::Response {
        ui.label(label);
        let response = ui.add(
            egui::TextEdit::singleline(value)
                .password(password)
                .desired_width(f32::INFINITY),
        );
        if let Some(error) = error {
            ui.colored_label(egui::Color32::from_rgb(0xe1, 0x1d, 0x48), error);
        }
        ui.add_space(4.0);
        response
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        mode: AuthMode,
        shared_state: &SharedState,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) -> Option<Page> {
        let mut navigate = None;
        let status = shared_state.auth_status();
        let (title, action) = match mode {
            AuthMode::Login => ("🔑 Log in", "Log in"),
            AuthMode::Register => ("📝 Register", "Create account"),
        };

        ui.vertical_centered(|ui| {
            ui.set_max_width(320.0);
            ui.heading(title);
            ui.add_space(8.0);

            let username_error = self.field_error(AuthField::Username);
            let password_error = self.field_error(AuthField::Password);
            let confirm_error = self.field_error(AuthField::Confirm);

            let mut enter = Self::labeled_field(ui, "Username", &mut self.username, false, username_error).lost_focus();
            enter |= Self::labeled_field(ui, "Password", &mut self.password, true, password_error).lost_focus();
            if mode == AuthMode::Register {
                enter |= Self::labeled_field(ui, "Confirm password", &mut self.confirm, true, confirm_error).lost_focus();
            }
            let enter = enter && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(error) = &status.error {
                ui.colored_label(egui::Color32::from_rgb(0xe1, 0x1d, 0x48), error.as_str());
            }

            let label = if status.in_flight { "Please wait..." } else { action };
            let clicked = ui.add_enabled(!status.in_flight, egui::Button::new(label)).clicked();
            if (clicked || enter) && !status.in_flight {
                self.submit(mode, shared_state, command_tx);
            }

            ui.add_space(8.0);
            match mode {
                AuthMode::Login => {
                    if ui.link("No account yet? Register").clicked() {
                        navigate = Some(Page::Register);
                    }
                }
                AuthMode::Register => {
                    if ui.link("Already registered? Log in").clicked() {
                        navigate = Some(Page::Login);
                    }
                }
            }
        });

        navigate
    }
}
