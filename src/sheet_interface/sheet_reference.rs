use crate::sheet_interface::sheet_error::SheetError;

const EDIT_MARKER: &str = "/edit";
const DOCUMENT_MARKER: &str = "/d/";

/// Turns an interactive share link (`.../d/<id>/edit#gid=0`) into the CSV export URL for
/// the same document. Anything that is not an edit link is fetched as given.
pub fn export_url(reference: &str) -> Result<String, SheetError> {
    if !reference.contains(EDIT_MARKER) {
        return Ok(reference.to_string());
    }
    let after_marker = match reference.split_once(DOCUMENT_MARKER) {
        Some((_, after_marker)) => after_marker,
        None => return Err(SheetError::InvalidReference { reference: reference.to_string() }),
    };
    let document_id = match after_marker.split('/').next() {
        Some(document_id) if !document_id.is_empty() => document_id,
        _ => return Err(SheetError::InvalidReference { reference: reference.to_string() }),
    };
    Ok(format!("https://docs.google.com/spreadsheets/d/{document_id}/export?format=csv"))
}
