use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Locates `name` the way a shell would: names with a directory component are
/// checked as given, bare names are searched for on `PATH`.
pub fn find_executable<P: AsRef<Path>>(name: P) -> Option<PathBuf> {
    let name = name.as_ref();
    if has_directory(name) {
        return is_executable_file(name).then(|| name.to_path_buf());
    }
    let paths = env::var_os("PATH")?;
    find_executable_in(name, &paths)
}

/// Same as [`find_executable`] for bare names, searching `search_path`
/// (a `PATH`-style list) instead of the process environment.
pub fn find_executable_in<P: AsRef<Path>>(name: P, search_path: &OsStr) -> Option<PathBuf> {
    let name = name.as_ref();
    env::split_paths(search_path).find_map(|dir| {
        candidates(&dir, name)
            .into_iter()
            .find(|path| is_executable_file(path))
    })
}

fn has_directory(name: &Path) -> bool {
    name.is_absolute() || name.components().count() > 1
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    let plain = dir.join(name);
    if name.extension().is_some() {
        vec![plain]
    } else {
        vec![plain.with_extension("exe"), plain]
    }
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
