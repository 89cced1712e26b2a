use crate::consts::SETUP_ID_MARKER;

/// Extract the setup identifier embedded in a context string.
///
/// The identifier is the maximal run of non-hyphen characters immediately
/// following the first `setup-` marker. No marker, or an empty run, means
/// the context does not name a setup; that is a normal outcome, not an
/// error.
pub(crate) fn extract_setup_id(context: &str) -> Option<&str> {
    let start = context.find(SETUP_ID_MARKER)? + SETUP_ID_MARKER.len();
    let rest = &context[start..];
    let id = match rest.find('-') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if id.is_empty() { None } else { Some(id) }
}
