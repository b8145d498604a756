//! Multipart body for the comparison endpoint.

use reqwest::multipart::{Form, Part};

use crate::config::parts;
use crate::error::ClientResult;
use crate::models::ComparisonRequest;

/// Build the two-part form: `file1` and `file2`, each the raw PDF bytes.
pub(super) fn build_form(request: ComparisonRequest<'_>) -> ClientResult<Form> {
    let mut form = Form::new();

    for (name, file) in request.parts() {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(parts::PDF_MIME)?;
        form = form.part(name, part);
    }

    Ok(form)
}
