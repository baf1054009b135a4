//! Linux desktop integration.
//!
//! Writes a freedesktop launcher entry pointing at the running executable
//! and installs the bundled icon into the user's local icon directory. Both
//! operations are re-run safe; a missing icon source is skipped silently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DESKTOP_ENTRY_FILE: &str = "fastmail-desktop.desktop";
pub const ICON_NAME: &str = "fastmail-desktop";

/// Renders the launcher entry for the given executable path.
pub fn desktop_entry(exec: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Name=Fastmail\n\
         Comment=Fastmail Email Client\n\
         Exec={} %U\n\
         Icon={ICON_NAME}\n\
         Type=Application\n\
         Categories=Network;Email;\n\
         MimeType=x-scheme-handler/mailto;\n\
         StartupNotify=true\n\
         StartupWMClass={ICON_NAME}\n",
        exec.display()
    )
}

/// Writes the launcher entry under `applications_dir`, creating the
/// directory if needed. Returns the written path.
pub fn write_desktop_entry(applications_dir: &Path, exec: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(applications_dir)?;
    let path = applications_dir.join(DESKTOP_ENTRY_FILE);
    fs::write(&path, desktop_entry(exec))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(path)
}

/// Copies the icon into `icons_dir`. Returns `Ok(None)` when the source
/// icon does not exist.
pub fn install_icon(source: &Path, icons_dir: &Path) -> io::Result<Option<PathBuf>> {
    if !source.exists() {
        return Ok(None);
    }
    fs::create_dir_all(icons_dir)?;
    let target = icons_dir.join(format!("{ICON_NAME}.png"));
    fs::copy(source, &target)?;
    Ok(Some(target))
}

/// Installs the launcher entry and icon for the current user.
#[cfg(target_os = "linux")]
pub fn install(app: &tauri::AppHandle) -> crate::error::ShellResult<()> {
    use tauri::path::BaseDirectory;
    use tauri::Manager;

    let data_dir = dirs::data_dir()
        .ok_or_else(|| crate::error::ShellError::Other("no user data directory".to_string()))?;
    let exec = std::env::current_exe()?;

    let entry = write_desktop_entry(&data_dir.join("applications"), &exec)?;
    log::info!("desktop entry written to {}", entry.display());

    let icon_source = app
        .path()
        .resolve("icons/icon.png", BaseDirectory::Resource)?;
    match install_icon(&icon_source, &data_dir.join("icons"))? {
        Some(path) => log::info!("icon installed to {}", path.display()),
        None => log::debug!("icon source {} missing, skipped", icon_source.display()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn scratch_dir(label: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "fastmail-desktop-test-{label}-{}-{n}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn entry_contains_required_fields() {
        let entry = desktop_entry(Path::new("/opt/fastmail/fastmail-desktop"));
        assert!(entry.starts_with("[Desktop Entry]\n"));
        assert!(entry.contains("Name=Fastmail\n"));
        assert!(entry.contains("Exec=/opt/fastmail/fastmail-desktop %U\n"));
        assert!(entry.contains("MimeType=x-scheme-handler/mailto;\n"));
        assert!(entry.contains("Categories=Network;Email;\n"));
        assert!(entry.contains("StartupWMClass=fastmail-desktop\n"));
    }

    #[test]
    fn write_is_idempotent() {
        let dir = scratch_dir("entry");
        let exec = Path::new("/usr/bin/fastmail-desktop");

        let first = write_desktop_entry(&dir, exec).unwrap();
        let content_first = fs::read_to_string(&first).unwrap();
        let second = write_desktop_entry(&dir, exec).unwrap();
        let content_second = fs::read_to_string(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(content_first, content_second);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = scratch_dir("nested").join("a").join("b");
        let path = write_desktop_entry(&dir, Path::new("/usr/bin/fm")).unwrap();
        assert!(path.exists());
        fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn entry_is_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = scratch_dir("perms");
        let path = write_desktop_entry(&dir, Path::new("/usr/bin/fm")).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_icon_source_is_skipped() {
        let dir = scratch_dir("icon-missing");
        let result = install_icon(Path::new("/nonexistent/icon.png"), &dir).unwrap();
        assert!(result.is_none());
        assert!(!dir.join("fastmail-desktop.png").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn icon_is_copied_when_present() {
        let dir = scratch_dir("icon");
        let source = dir.join("source.png");
        fs::write(&source, b"\x89PNG").unwrap();

        let target = install_icon(&source, &dir.join("icons")).unwrap().unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"\x89PNG");

        fs::remove_dir_all(&dir).unwrap();
    }
}
