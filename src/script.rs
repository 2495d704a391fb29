/// JavaScript injected into every page before any of its own scripts run.
/// Saves the native `HTMLFormElement.prototype.submit` as `_submit`, then
/// replaces it with a wrapper that reports the submission over the plugin's
/// invoke bridge before letting the real submit proceed.
const INTERCEPTION_SCRIPT: &str = r#"
(function() {
    function getFullUrl(url) {
        if (url.startsWith("/")) {
            return location.protocol + '//' + location.host + url;
        } else {
            return url;
        }
    }

    function recordFormSubmission(form) {
        var fields = [];
        for (var i = 0; i < form.elements.length; i++) {
            fields.push({
                name: form.elements[i].name,
                value: form.elements[i].value,
                type: form.elements[i].type
            });
        }

        const path = form.attributes['action'] === undefined ? "/" : form.attributes['action'].nodeValue;
        const method = form.attributes['method'] === undefined ? "GET" : form.attributes['method'].nodeValue;
        const enctype = form.attributes['enctype'] === undefined ? "application/x-www-form-urlencoded" : form.attributes['enctype'].nodeValue;
        const err = new Error();
        window.__TAURI_INTERNALS__.invoke('plugin:form-inspector|record_form_submission', {
            url: getFullUrl(path),
            method: method,
            fields: JSON.stringify(fields),
            headers: "{}",
            trace: err.stack,
            enctype: enctype
        });
    }

    function handleFormSubmission(e) {
        const form = e ? e.target : this;
        recordFormSubmission(form);
        form._submit();
    }

    HTMLFormElement.prototype._submit = HTMLFormElement.prototype.submit;
    HTMLFormElement.prototype.submit = handleFormSubmission;
})();
"#;

/// Full init script: the interception snippet plus any host-supplied
/// JavaScript appended after it
pub fn build_init_script(extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{INTERCEPTION_SCRIPT}\n{extra}"),
        None => INTERCEPTION_SCRIPT.to_string(),
    }
}
