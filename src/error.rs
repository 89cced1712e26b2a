use thiserror::Error;

/// One variant per resolution stage, so the fallback policy in the resolver
/// stays auditable instead of hiding behind a blanket catch.
#[derive(Debug, Error)]
pub(crate) enum ResolveError {
    #[error("Digest key rejected by HMAC")]
    InvalidKey,

    #[error("Setup lookup request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Malformed setup response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Setup response is missing general.setupName")]
    MissingName,
}

#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("Cannot list commits: {0}")]
    Git(String),

    #[error("Cannot read recipes file {path}: {source}")]
    RecipesRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse recipes: {0}")]
    RecipesParse(#[from] serde_yaml::Error),

    #[error("recipe found with a missing name")]
    RecipeMissingName,

    #[error("recipe {0} is missing a description")]
    RecipeMissingDescription(String),

    #[error("recipe {0} is missing jobs")]
    RecipeMissingJobs(String),

    #[error("{0} is an unexpected /roxci arg")]
    UnexpectedArg(String),

    #[error("there is no such recipe: {0}")]
    UnknownRecipe(String),
}
