use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::ResolveError;

type HmacSha1 = Hmac<Sha1>;

/// Hex HMAC-SHA1 of the setup identifier under the shared key.
///
/// The service expects this as the second path segment of a lookup. The key
/// ships with the tool, so this shapes the request rather than guarding it.
pub(crate) fn setup_id_digest(key: &[u8], setup_id: &str) -> Result<String, ResolveError> {
    let mut mac = HmacSha1::new_from_slice(key).map_err(|_| ResolveError::InvalidKey)?;
    mac.update(setup_id.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
