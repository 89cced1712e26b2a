//! Context-to-label resolution
//!
//! A context string either names a provisioned setup (it embeds a
//! `setup-<id>` marker) or it does not. Named setups are resolved against
//! the remote setup service; everything else, and every lookup failure,
//! passes the context through unchanged. The printed line is best-effort by
//! design and must never be blocked by a failing stage.

pub(crate) mod cache;
pub(crate) mod digest;
pub(crate) mod extract;
pub(crate) mod fetch;

pub(crate) use cache::LabelCache;
pub(crate) use fetch::{HttpLookup, SetupLookup};

use crate::config::Config;
use crate::error::ResolveError;

pub(crate) struct Resolver<'a> {
    config: &'a Config,
    lookup: &'a dyn SetupLookup,
    debug: bool,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(config: &'a Config, lookup: &'a dyn SetupLookup, debug: bool) -> Self {
        Self {
            config,
            lookup,
            debug,
        }
    }

    /// Resolve a context string to the value to print.
    pub(crate) fn resolve(&self, context: &str) -> String {
        let Some(setup_id) = extract::extract_setup_id(context) else {
            return context.to_string();
        };
        match self.lookup_label(setup_id) {
            Ok(label) => label,
            Err(err) => {
                if self.debug {
                    eprintln!("Setup lookup for '{setup_id}' failed: {err}");
                }
                context.to_string()
            }
        }
    }

    fn lookup_label(&self, setup_id: &str) -> Result<String, ResolveError> {
        let digest = digest::setup_id_digest(self.config.setup_key.as_bytes(), setup_id)?;
        let name = self.lookup.setup_name(setup_id, &digest)?;
        Ok(fetch::format_label(&name))
    }
}
