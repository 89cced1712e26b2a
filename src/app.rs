use std::path::Path;

use crate::check;
use crate::config::Config;
use crate::resolve::{HttpLookup, LabelCache, Resolver};

/// Run one resolve invocation: consult the cache, fall back to the lookup,
/// print exactly one line, write the cache back when a path was supplied.
pub(crate) fn run_resolve(
    config: &Config,
    context: &str,
    cache_file: Option<&Path>,
    offline: bool,
    debug: bool,
) {
    let mut cache = cache_file.map(|path| LabelCache::load(path.to_path_buf()));

    if let Some(cache) = &cache
        && let Some(hit) = cache.get(context)
    {
        if debug {
            eprintln!("Cache hit for context");
        }
        println!("{hit}");
        return;
    }

    let value = if offline {
        if debug {
            eprintln!("Offline: passing context through");
        }
        context.to_string()
    } else {
        if debug {
            eprintln!(
                "Setup service: {} (setup lifespan {}s)",
                config.setup_endpoint, config.setup_lifespan_secs
            );
        }
        let lookup = HttpLookup::new(config.setup_endpoint.clone());
        Resolver::new(config, &lookup, debug).resolve(context)
    };

    println!("{value}");

    // The printed line is the contract; a failed cache write only warns
    if let Some(cache) = &mut cache
        && let Err(err) = cache.insert_and_save(context, &value)
    {
        eprintln!(
            "Warning: failed to write cache {}: {err}",
            cache.path().display()
        );
    }
}

/// Run one check invocation. Exit codes follow the CI contract:
/// 0 = skip the job, 1 = run it, 2 = error (the job should still run).
pub(crate) fn run_check(config: &Config, job: &str, debug: bool) -> i32 {
    let messages = match check::list_unmerged_commits(&config.base_branch) {
        Ok(messages) => messages,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };

    let recipes_path = config.recipes_file();
    let recipes = match check::load_recipes(&recipes_path) {
        Ok(recipes) => recipes,
        Err(err) => {
            eprintln!("Cannot load recipes: {err}");
            return 2;
        }
    };

    match check::should_run(job, &messages, &recipes, debug) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(err) => {
            eprintln!("Check failed: {err}");
            2
        }
    }
}
