use std::process::{Command, Stdio};

use foliotui::pages::Page;
use foliotui::utils;

use crate::App;

impl App {
    /// Hand `target` to the configured open command without waiting for it
    pub(crate) fn open_link(&mut self, target: &str, label: &str) {
        let Some(ref open_cmd) = self.open_command else {
            self.model
                .show_toast("Error: open_command not configured".to_string());
            return;
        };

        // Spawn in background so GUI apps don't block the TUI
        let result = Command::new(open_cmd)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                log::debug!("open_command: spawned {} {}", open_cmd, target);
                self.model.show_toast(format!("Opening {}", label));
            }
            Err(e) => {
                log::warn!("open_command: failed to run '{}': {}", open_cmd, e);
                self.model.show_toast(format!("Error: failed to open: {}", e));
            }
        }
    }

    pub(crate) fn open_selected_project(&mut self) {
        let Some(project) = self.model.projects.selected_project() else {
            return;
        };
        let title = project.title.clone();
        match project.link.clone() {
            Some(link) => self.open_link(&link, &title),
            None => self
                .model
                .show_toast(format!("{} has no public link", title)),
        }
    }

    pub(crate) fn open_selected_post(&mut self) {
        let Some(item) = self.model.feed.selected_item() else {
            return;
        };
        if item.link.is_empty() {
            return;
        }
        let (link, title) = (item.link.clone(), item.title.clone());
        self.open_link(&link, &utils::truncate_to_width(&title, 40));
    }

    pub(crate) fn open_resume(&mut self) {
        let path = self.resume_path.clone();
        self.open_link(&path, Page::Resume.name());
    }

    pub(crate) fn open_contact_link(&mut self) {
        let link = self.contact_link.clone();
        self.open_link(&link, "chat");
    }
}
