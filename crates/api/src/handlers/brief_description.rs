//! Handlers for the `brief_description` table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog_core::error::CoreError;
use catalog_core::patch::{BriefDescriptionColumn, PatchColumn};
use catalog_core::types::DbId;
use catalog_core::validation::{require_id, require_text};
use catalog_db::models::brief_description::CreateBriefDescription;
use catalog_db::repositories::BriefDescriptionRepo;

use crate::error::{AppResult, OrFail};
use crate::extract::MultipartForm;
use crate::handlers::patch_from_form;
use crate::state::AppState;

const REQUIRED: &str = "All brief description fields and images are required.";
const NO_CHANGES: &str = "At least one brief description field or image is required.";

/// POST /brief-description
///
/// Multipart form with the ids, four text fields and three image files
/// (`desc_main_image`, `desc_sub_image_one`, `desc_sub_image_two`).
pub async fn create(
    State(state): State<AppState>,
    mut form: MultipartForm,
) -> AppResult<(StatusCode, &'static str)> {
    let brief_description_id = require_id(form.text("brief_description_id"), REQUIRED)?;
    let product_id = require_id(form.text("product_id"), REQUIRED)?;

    let [title, body, sub_one, sub_two] = BriefDescriptionColumn::TEXT
        .map(|column| require_text(form.take_text(column.column_name()), REQUIRED));
    let (title, body, sub_one, sub_two) = (title?, body?, sub_one?, sub_two?);

    let [main_image, sub_image_one, sub_image_two] = BriefDescriptionColumn::IMAGES
        .map(|column| form.take_file(column.column_name()));
    let (Some(main_image), Some(sub_image_one), Some(sub_image_two)) =
        (main_image, sub_image_one, sub_image_two)
    else {
        return Err(CoreError::Validation(REQUIRED.into()).into());
    };

    let stored = state
        .uploads
        .save_all(&[&main_image, &sub_image_one, &sub_image_two])
        .await
        .or_fail("Failed to insert brief description")?;

    let input = CreateBriefDescription {
        brief_description_id,
        product_id,
        brief_description_title: title,
        brief_description: body,
        sub_brief_description_one: sub_one,
        sub_brief_description_two: sub_two,
        desc_main_image: stored[0].url.clone(),
        desc_sub_image_one: stored[1].url.clone(),
        desc_sub_image_two: stored[2].url.clone(),
    };
    let result = BriefDescriptionRepo::create(&state.pool, &input).await;
    let brief = state
        .uploads
        .discard_on_error(&stored, result)
        .await
        .or_fail("Failed to insert brief description")?;

    tracing::info!(
        brief_description_id = brief.brief_description_id,
        product_id = brief.product_id,
        "Brief description inserted"
    );
    Ok((StatusCode::CREATED, "Brief description inserted successfully"))
}

/// PATCH /updateBriefDescription/{product_id}
///
/// Multipart form where every text field and image is optional; JSON and
/// URL-encoded bodies may carry the text fields. At least one must be
/// present; an empty update is rejected before any database work.
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    form: MultipartForm,
) -> AppResult<&'static str> {
    let (patch, stored) = patch_from_form::<BriefDescriptionColumn>(form, &state.uploads)
        .await
        .or_fail("Failed to update brief description")?;
    let patch = patch.require_changes(NO_CHANGES)?;

    let result = BriefDescriptionRepo::update(&state.pool, product_id, &patch).await;
    let rows_affected = state
        .uploads
        .discard_on_error(&stored, result)
        .await
        .or_fail("Failed to update brief description")?;
    if rows_affected == 0 {
        // No row references the new images.
        state.uploads.discard(&stored).await;
    }

    tracing::info!(
        product_id,
        rows_affected,
        columns = ?patch.column_names(),
        "Brief description updated"
    );
    Ok("Brief description updated successfully")
}
