use std::path::{Path, PathBuf};

/// A project name plus its resolved root directory.
///
/// The root is computed once from an explicit parent directory and reused for
/// every write. The parent is an input rather than an ambient
/// `env::current_dir()` lookup so tests can point a run at a scratch
/// directory. The name is embedded verbatim in the root manifest and the
/// README title; it is not validated against filesystem-illegal characters.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
}

impl Project {
    pub fn new(name: &str, target_dir: &Path) -> Self {
        Self {
            name: name.to_string(),
            root: target_dir.join(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_target_dir_joined_with_name() {
        let project = Project::new("blog", Path::new("/tmp/work"));

        assert_eq!(project.name, "blog");
        assert_eq!(project.root, PathBuf::from("/tmp/work/blog"));
    }
}
