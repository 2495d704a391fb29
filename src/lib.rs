use std::sync::Arc;

use tauri::{
    plugin::{Builder as PluginBuilder, TauriPlugin},
    Manager, Runtime,
};

mod commands;
mod encode;
mod error;
mod inspector;
mod models;
mod script;

pub use encode::MULTIPART_BOUNDARY;
pub use error::{Error, Result};
pub use inspector::FormInspector;
pub use models::{Enctype, FormField, FormSubmission, OnFormSubmitted};

/// Extension to access the form inspector from any `Manager`
pub trait FormInspectorExt<R: Runtime> {
    fn form_inspector(&self) -> &FormInspector;
}

impl<R: Runtime, T: Manager<R>> FormInspectorExt<R> for T {
    fn form_inspector(&self) -> &FormInspector {
        self.state::<FormInspector>().inner()
    }
}

/// Builds the form inspector plugin.
#[derive(Default)]
pub struct Builder {
    handler: Option<Arc<dyn OnFormSubmitted>>,
    extra_script: Option<String>,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the observer invoked for every intercepted submission
    #[must_use]
    pub fn on_form_submitted<H: OnFormSubmitted + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Append host JavaScript after the interception snippet in the
    /// injected init script
    #[must_use]
    pub fn extra_script(mut self, js: impl Into<String>) -> Self {
        self.extra_script = Some(js.into());
        self
    }

    #[must_use]
    pub fn build<R: Runtime>(self) -> TauriPlugin<R> {
        PluginBuilder::new("form-inspector")
            .invoke_handler(tauri::generate_handler![commands::record_form_submission])
            .js_init_script(script::build_init_script(self.extra_script.as_deref()))
            .setup(move |app, _api| {
                app.manage(FormInspector::new(self.handler));
                tracing::info!("Form submission inspection enabled");
                Ok(())
            })
            .build()
    }
}

/// Initializes the plugin without an observer; submissions are only logged.
#[must_use]
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new().build()
}
