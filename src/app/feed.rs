use crate::App;

impl App {
    /// Re-run the feed cycle, keeping the current tiles until it lands
    pub(crate) fn refresh_feed(&mut self) {
        let command = self.model.refresh_feed();
        self.model.show_toast("Refreshing posts...".to_string());
        self.run_command(Some(command));
    }
}
