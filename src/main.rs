use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use tabshell::kernel::icons::bundled_icons_dir;
use tabshell::kernel::services::adapters::{ensure_settings_file, load_settings, HeadlessEngine};
use tabshell::kernel::{Action, IconRegistry, Session};
use tabshell::shell::Shell;

mod logging;

fn main() -> ExitCode {
    let _logging_guard = logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "fatal");
            eprintln!("tabshell: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let files = resolve_open_paths(&cwd, &args)?;

    if let Err(error) = ensure_settings_file() {
        tracing::warn!(error = %error, "settings file not created");
    }
    let settings = load_settings();

    let icons_dir = settings.icons_dir.clone().unwrap_or_else(bundled_icons_dir);
    let icons = match IconRegistry::load_all(&icons_dir) {
        Ok(icons) => icons,
        Err(error) => {
            tracing::error!(error = %error, "icons unavailable");
            IconRegistry::empty()
        }
    };

    let session = Session::new(HeadlessEngine::new(), Arc::new(icons), settings.session);
    let mut shell = Shell::new(session);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in files {
        shell.apply(Action::OpenPath(path), &mut out)?;
    }
    shell.run(stdin.lock(), &mut out)
}

/// Resolves command-line file arguments against `cwd`. Every argument must
/// name an existing regular file.
fn resolve_open_paths(cwd: &Path, args: &[String]) -> io::Result<Vec<PathBuf>> {
    args.iter()
        .map(|arg| {
            let raw = PathBuf::from(arg);
            let path = if raw.is_absolute() { raw } else { cwd.join(raw) };
            let meta = std::fs::metadata(&path)?;
            if !meta.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a file: {}", path.display()),
                ));
            }
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
