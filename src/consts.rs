/// Shared secret for setup lookups. Ships with the tool, so it authenticates
/// the request shape, not the caller.
pub(crate) const DEFAULT_SETUP_KEY: &str = "stackrox!";

/// Base URL of the setup-name lookup service
pub(crate) const DEFAULT_SETUP_ENDPOINT: &str = "https://setup.rox.systems";

/// Lifespan (seconds) advertised for provisioned setups: 12 hours
pub(crate) const DEFAULT_SETUP_LIFESPAN_SECS: u64 = 43_200;

/// Prefix attached to every resolved setup label
pub(crate) const SETUP_LABEL_PREFIX: &str = "[SETUP] ";

/// Substring that introduces a setup identifier inside a context string
pub(crate) const SETUP_ID_MARKER: &str = "setup-";

/// Recipes file consulted by `check` when nothing else is configured
pub(crate) const DEFAULT_RECIPES_FILE: &str = ".circleci/roxci.yml";

/// Environment variable overriding the recipes file location
pub(crate) const RECIPES_FILE_ENV: &str = "ROXCI_CONFIG_FILE";

/// Branch that `check` diffs commit messages against
pub(crate) const DEFAULT_BASE_BRANCH: &str = "master";
