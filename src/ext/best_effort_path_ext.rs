use std::path::{self, Path, PathBuf};

/// Displays a path as absolute as can be determined: canonical when it exists,
/// otherwise made absolute against the working directory without touching
/// the filesystem.
pub fn best_effort_path_display(path: &Path) -> String {
    path.canonicalize()
        .or_else(|_| path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn existing_path_is_canonical() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let canonical = temp_file.path().canonicalize().expect("Failed to canonicalize");
        assert_eq!(
            temp_file.path().best_effort_path_display(),
            canonical.display().to_string()
        );
    }

    #[test]
    fn missing_relative_path_becomes_absolute() {
        let display = PathBuf::from("missing/paths.txt").best_effort_path_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("paths.txt"));
    }
}
