pub mod brief_description;
pub mod product;
pub mod product_description;
pub mod product_details;
pub mod schema;

use catalog_core::patch::{Patch, PatchColumn};

use crate::extract::MultipartForm;
use crate::upload::{StoredUpload, UploadStore};

/// Turn a multipart form into a sparse patch over the allowlist `C`.
///
/// Allowlisted text fields are assigned as-is (an empty string clears the
/// column). Allowlisted files are stored first and their URL is assigned.
/// Everything else in the form is ignored. Returns the stored uploads so the
/// caller can discard them if the update fails.
pub(crate) async fn patch_from_form<C: PatchColumn>(
    form: MultipartForm,
    uploads: &UploadStore,
) -> std::io::Result<(Patch<C>, Vec<StoredUpload>)> {
    let mut patch = Patch::new();
    for (field, value) in form.text_fields() {
        if let Some(column) = C::from_text_field(field) {
            patch.set(column, value);
        }
    }

    let files = form.into_files();
    let accepted: Vec<_> = files
        .iter()
        .filter_map(|f| C::from_file_field(&f.field).map(|column| (column, f)))
        .collect();

    let to_store: Vec<_> = accepted.iter().map(|(_, f)| *f).collect();
    let stored = uploads.save_all(&to_store).await?;
    for ((column, _), upload) in accepted.iter().zip(&stored) {
        patch.set(*column, upload.url.clone());
    }

    Ok((patch, stored))
}
