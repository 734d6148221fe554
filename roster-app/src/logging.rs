//! Logger bootstrap and log rotation.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;

use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

/// File the running process logs to.
pub const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to [`LATEST_LOG`].
const KEEP_ARCHIVED: usize = 10;

/// Rotates old logs in `dir` and installs a file logger at `latest.log`.
///
/// Logging is best effort: without a directory, or if the file cannot be
/// created, the process runs without a logger.
pub fn init(dir: Option<&Path>, level: LevelFilter) {
    let Some(dir) = dir else {
        eprintln!("warning: no cache directory, logging disabled");
        return;
    };

    let file = fs::create_dir_all(dir)
        .and_then(|()| rotate(dir, KEEP_ARCHIVED))
        .and_then(|()| File::create(dir.join(LATEST_LOG)));
    match file {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("warning: cannot log to {}: {}", dir.display(), e),
    }
}

/// Archives `latest.log` under a timestamp and prunes `dir` down to `keep`
/// archived logs, oldest first.
fn rotate(dir: &Path, keep: usize) -> io::Result<()> {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(&latest, dir.join(format!("{}.log", stamp)))?;
    }

    let mut archived: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();
    archived.sort();

    let excess = archived.len().saturating_sub(keep);
    for (_, path) in archived.into_iter().take(excess) {
        // a file we cannot delete is retried next start
        let _ = fs::remove_file(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "previous run").unwrap();

        rotate(dir.path(), KEEP_ARCHIVED).unwrap();

        let names = log_names(dir.path());
        assert_eq!(names.len(), 1);
        assert_ne!(names[0], LATEST_LOG);
        assert!(names[0].ends_with(".log"));
    }

    #[test]
    fn test_rotate_prunes_to_limit() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("2026010{i}_000000.log")), "").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        rotate(dir.path(), 2).unwrap();

        let names = log_names(dir.path());
        assert_eq!(names.iter().filter(|n| n.ends_with(".log")).count(), 2);
        assert!(names.contains(&"notes.txt".to_string()));
    }
}
