//! Repository hygiene: every entry in `bin/` must resolve to an executable
//! regular file inside `scripts/`.

use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Violation messages for entries of `links_dir` that do not resolve to an
/// executable regular file inside `targets_dir`. Paths in messages are
/// shown relative to `root`.
fn check_links(root: &Path, links_dir: &Path, targets_dir: &Path) -> Vec<String> {
    let targets_real = targets_dir.canonicalize().expect("targets dir must exist");
    let mut violations = Vec::new();

    for entry in fs::read_dir(links_dir).expect("links dir must exist") {
        let link = entry.expect("dir entry").path();
        let resolved = match link.canonicalize() {
            Ok(resolved) => resolved,
            Err(_) => {
                violations.push(format!(
                    "target pointed to by {} not found",
                    rel(root, &link)
                ));
                continue;
            }
        };
        if !resolved.starts_with(&targets_real) {
            violations.push(format!(
                "{} must be in {}",
                rel(root, &resolved),
                rel(root, &targets_real)
            ));
            continue;
        }
        if !resolved.is_file() {
            violations.push(format!(
                "{} pointed to by {} is not a regular file",
                rel(root, &resolved),
                rel(root, &link)
            ));
            continue;
        }
        if !is_executable(&resolved) {
            violations.push(format!("{} not executable", rel(root, &resolved)));
        }
    }

    violations
}

#[test]
fn bin_symlinks_resolve_into_scripts() {
    let root = repo_root();
    let violations = check_links(&root, &root.join("bin"), &root.join("scripts"));
    assert!(
        violations.is_empty(),
        "bin/ symlink violations:\n{}",
        violations.join("\n")
    );
}

#[cfg(unix)]
mod scenarios {
    use super::*;
    use std::os::unix::fs::symlink;
    use std::os::unix::fs::PermissionsExt;

    fn executable_script(path: &Path) {
        fs::write(path, "#!/bin/sh\nexit 0\n").expect("write script");
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }

    // Canonicalized root so relative paths in messages stay stable even
    // when the temp dir itself sits behind a symlink.
    fn layout(dir: &tempfile::TempDir) -> (PathBuf, PathBuf, PathBuf) {
        let root = dir.path().canonicalize().expect("canonical root");
        let links = root.join("bin");
        let targets = root.join("scripts");
        fs::create_dir_all(&links).expect("bin");
        fs::create_dir_all(&targets).expect("scripts");
        (root, links, targets)
    }

    #[test]
    fn links_into_targets_pass() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (root, links, targets) = layout(&dir);
        executable_script(&targets.join("deploy"));
        symlink("../scripts/deploy", links.join("deploy")).expect("symlink");

        assert!(check_links(&root, &links, &targets).is_empty());
    }

    #[test]
    fn link_escaping_targets_dir_is_reported_with_both_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (root, links, targets) = layout(&dir);
        let stray = root.join("elsewhere").join("tool");
        fs::create_dir_all(stray.parent().unwrap()).expect("elsewhere");
        executable_script(&stray);
        symlink(&stray, links.join("tool")).expect("symlink");

        let violations = check_links(&root, &links, &targets);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("elsewhere/tool"));
        assert!(violations[0].contains("must be in scripts"));
    }

    #[test]
    fn dangling_link_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (root, links, targets) = layout(&dir);
        symlink("../scripts/missing", links.join("missing")).expect("symlink");

        let violations = check_links(&root, &links, &targets);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("bin/missing"));
        assert!(violations[0].contains("not found"));
    }

    #[test]
    fn non_executable_target_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (root, links, targets) = layout(&dir);
        let script = targets.join("helper");
        fs::write(&script, "#!/bin/sh\n").expect("write");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).expect("chmod");
        symlink("../scripts/helper", links.join("helper")).expect("symlink");

        let violations = check_links(&root, &links, &targets);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("scripts/helper"));
        assert!(violations[0].contains("not executable"));
    }

    #[test]
    fn link_to_directory_inside_targets_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (root, links, targets) = layout(&dir);
        fs::create_dir_all(targets.join("lib")).expect("subdir");
        symlink("../scripts/lib", links.join("lib")).expect("symlink");

        let violations = check_links(&root, &links, &targets);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("not a regular file"));
    }
}
