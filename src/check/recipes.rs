use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::CheckError;

/// One CI recipe: a named set of jobs that a `/roxci` directive can select
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Recipe {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) jobs: Vec<String>,
}

/// Load and validate the recipes file. Every recipe needs a name, a
/// description, and at least one job.
pub(crate) fn load_recipes(path: &Path) -> Result<Vec<Recipe>, CheckError> {
    let data = fs::read_to_string(path).map_err(|source| CheckError::RecipesRead {
        path: path.display().to_string(),
        source,
    })?;
    let recipes: Vec<Recipe> = serde_yaml::from_str(&data)?;

    for recipe in &recipes {
        if recipe.name.is_empty() {
            return Err(CheckError::RecipeMissingName);
        }
        if recipe.description.is_empty() {
            return Err(CheckError::RecipeMissingDescription(recipe.name.clone()));
        }
        if recipe.jobs.is_empty() {
            return Err(CheckError::RecipeMissingJobs(recipe.name.clone()));
        }
    }

    Ok(recipes)
}
