const COMMANDS: &[&str] = &["record_form_submission"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
