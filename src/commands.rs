use tauri::{command, AppHandle, Runtime};

use crate::FormInspectorExt;
use crate::Result;

/// Invoked by the injected page script for every intercepted submission
#[command]
pub(crate) async fn record_form_submission<R: Runtime>(
    app: AppHandle<R>,
    url: String,
    method: String,
    fields: String,
    headers: String,
    trace: String,
    enctype: Option<String>,
) -> Result<()> {
    app.form_inspector()
        .record(url, method, &fields, &headers, trace, enctype)
}
