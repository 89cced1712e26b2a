//! CI job gating
//!
//! Decides whether a named CI job should run, based on a `/roxci` directive
//! embedded in the unmerged commit messages and the recipes file. The
//! newest directive wins; commits without one leave the job running.

pub(crate) mod recipes;

pub(crate) use recipes::{Recipe, load_recipes};

use std::process::Command;

use crate::error::CheckError;

const ARG_RECIPE: &str = "recipe";
const ARG_EXCLUDE: &str = "exclude";
const ARG_INCLUDE: &str = "include";

const DIRECTIVE_MARKER: &str = "/roxci ";

/// Commit messages not yet on the base branch, newest first
pub(crate) fn list_unmerged_commits(base_branch: &str) -> Result<Vec<String>, CheckError> {
    let output = Command::new("git")
        .args(["cherry", "-v", base_branch])
        .output()
        .map_err(|e| CheckError::Git(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CheckError::Git(stderr.trim().to_string()));
    }

    let mut messages: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    messages.reverse();
    Ok(messages)
}

/// Parsed `/roxci` directive: recipe selections plus per-job overrides
#[derive(Debug, Default, PartialEq)]
struct Directive {
    recipes: Vec<String>,
    exclude: Vec<String>,
    include: Vec<String>,
}

/// First `/roxci` directive found in the messages, lowercased
fn find_directive(messages: &[String]) -> Option<String> {
    for message in messages {
        let lower = message.to_lowercase();
        if let Some(idx) = lower.find(DIRECTIVE_MARKER) {
            return Some(lower[idx + DIRECTIVE_MARKER.len()..].trim().to_string());
        }
    }
    None
}

fn parse_directive(command: &str) -> Result<Directive, CheckError> {
    let mut directive = Directive::default();

    for (idx, piece) in command.split(' ').enumerate() {
        let parts: Vec<&str> = piece.split('=').collect();
        // A bare first token is shorthand for recipe=<list>
        if idx == 0 && parts.len() == 1 {
            directive
                .recipes
                .extend(piece.split(',').map(str::to_string));
            continue;
        }
        if parts.len() != 2 {
            return Err(CheckError::UnexpectedArg(piece.to_string()));
        }
        let values = parts[1].split(',').map(str::to_string);
        match parts[0] {
            ARG_RECIPE => directive.recipes.extend(values),
            ARG_EXCLUDE => directive.exclude.extend(values),
            ARG_INCLUDE => directive.include.extend(values),
            _ => return Err(CheckError::UnexpectedArg(piece.to_string())),
        }
    }

    Ok(directive)
}

/// Decide whether `job` should run given the commit messages and recipes.
///
/// An error means the decision could not be made; callers treat that as
/// "run anyway" with a distinct exit code.
pub(crate) fn should_run(
    job: &str,
    messages: &[String],
    recipes: &[Recipe],
    debug: bool,
) -> Result<bool, CheckError> {
    let Some(command) = find_directive(messages) else {
        return Ok(true);
    };
    if debug {
        eprintln!("Checking against directive: /roxci {command}");
    }
    let directive = parse_directive(&command)?;

    if directive.exclude.iter().any(|excluded| excluded == job) {
        if debug {
            eprintln!("Job '{job}' is explicitly excluded");
        }
        return Ok(false);
    }
    if directive.include.iter().any(|included| included == job) {
        if debug {
            eprintln!("Job '{job}' is explicitly included");
        }
        return Ok(true);
    }

    check_recipes_for_job(job, &directive.recipes, recipes, debug)
}

fn check_recipes_for_job(
    job: &str,
    selected: &[String],
    recipes: &[Recipe],
    debug: bool,
) -> Result<bool, CheckError> {
    for name in selected {
        // "default" selects the full job set
        if name == "default" {
            return Ok(true);
        }
        let Some(recipe) = recipes.iter().find(|recipe| &recipe.name == name) else {
            return Err(CheckError::UnknownRecipe(name.clone()));
        };
        if recipe.jobs.iter().any(|listed| listed == job) {
            if debug {
                eprintln!("Job '{job}' is included in recipe '{name}'");
            }
            return Ok(true);
        }
    }
    if debug {
        eprintln!("Job '{job}' is not included in any selected recipe");
    }
    Ok(false)
}
