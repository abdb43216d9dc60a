use crate::errors::ManifestError;
use crate::options::Options;
use crate::project::Project;
use crate::templates;
use std::path::{Path, PathBuf};

/// A staged directory or file, addressed relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub path: PathBuf,
    /// `Some` for files, `None` for directories.
    pub content: Option<String>,
}

/// Everything a run will create, staged in memory before anything touches
/// disk. Building a plan is a pure function of the project identity and the
/// option record, which is what makes determinism and flag-additivity
/// checkable without a filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn dir(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry {
            path: path.into(),
            content: None,
        });
    }

    pub fn file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(PlanEntry {
            path: path.into(),
            content: Some(content),
        });
    }

    pub fn dirs(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|entry| entry.content.is_none())
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|entry| entry.content.is_some())
    }

    /// Relative paths of every staged file.
    pub fn file_paths(&self) -> Vec<&Path> {
        self.files().map(|entry| entry.path.as_path()).collect()
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files().any(|entry| entry.path == Path::new(path))
    }

    /// Content of a staged file, if the plan has one at `path`.
    pub fn file_content(&self, path: &str) -> Option<&str> {
        self.files()
            .find(|entry| entry.path == Path::new(path))
            .and_then(|entry| entry.content.as_deref())
    }
}

/// Builds the complete plan for a run. Phases contribute in a fixed order:
/// client, server, shared, then root-level files. Within a phase the fixed
/// directory list comes first, then the files.
pub fn build(project: &Project, options: &Options) -> Result<Plan, ManifestError> {
    let mut plan = Plan::new();

    templates::client::plan(options, &mut plan)?;
    templates::server::plan(options, &mut plan)?;
    templates::shared::plan(options, &mut plan);
    templates::root::plan(project, options, &mut plan)?;

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn blog(options: Options) -> Plan {
        let project = Project::new("blog", Path::new("/tmp"));

        build(&project, &options).expect("plan builds")
    }

    fn file_set(plan: &Plan) -> BTreeSet<PathBuf> {
        plan.file_paths().iter().map(|p| p.to_path_buf()).collect()
    }

    #[test]
    fn plans_are_deterministic() {
        let options = Options {
            typescript: true,
            redux: true,
            socketio: true,
            docker: true,
        };

        assert_eq!(blog(options), blog(options));
    }

    #[test]
    fn default_plan_has_the_baseline_tree() {
        let plan = blog(Options::default());

        assert!(plan.dirs().any(|e| e.path == Path::new("client/public")));
        assert!(plan
            .dirs()
            .any(|e| e.path == Path::new("server/src/controllers")));
        assert!(plan.dirs().any(|e| e.path == Path::new("shared/constants")));
        assert!(plan.contains_file("README.md"));
        assert!(plan.contains_file("package.json"));
        assert!(plan.contains_file("client/src/App.jsx"));
        assert!(!plan.contains_file("client/src/App.tsx"));
        assert!(!plan.contains_file("client/tsconfig.json"));
        assert!(!plan.contains_file("docker-compose.yml"));
    }

    #[test]
    fn typescript_swaps_extensions_and_adds_tsconfig() {
        let plan = blog(Options {
            typescript: true,
            ..Options::default()
        });

        assert!(plan.contains_file("client/src/App.tsx"));
        assert!(!plan.contains_file("client/src/App.jsx"));
        assert!(plan.contains_file("client/tsconfig.json"));
        assert!(plan.contains_file("shared/types/index.ts"));
    }

    #[test]
    fn extensions_never_mix_within_a_run() {
        for typescript in [false, true] {
            let plan = blog(Options {
                typescript,
                redux: true,
                ..Options::default()
            });
            let (wanted, unwanted) = if typescript {
                (["tsx", "ts"], ["jsx", "js"])
            } else {
                (["jsx", "js"], ["tsx", "ts"])
            };

            for path in plan.file_paths() {
                let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                if wanted.contains(&ext) {
                    continue;
                }
                assert!(
                    !unwanted.contains(&ext),
                    "mixed extension {} in {}",
                    ext,
                    path.display()
                );
            }
        }
    }

    #[test]
    fn redux_adds_the_store_files() {
        let with = blog(Options {
            redux: true,
            ..Options::default()
        });
        let without = blog(Options::default());

        assert!(with.contains_file("client/src/store/store.js"));
        assert!(with.contains_file("client/src/store/slices/authSlice.js"));
        assert!(!without.contains_file("client/src/store/store.js"));
        assert!(!without.contains_file("client/src/store/slices/authSlice.js"));
    }

    #[test]
    fn docker_adds_the_compose_file() {
        let with = blog(Options {
            docker: true,
            ..Options::default()
        });

        assert!(with.contains_file("docker-compose.yml"));
    }

    #[test]
    fn each_flag_only_adds_files() {
        let base = Options::default();

        let variants = [
            Options {
                typescript: true,
                ..base
            },
            Options {
                redux: true,
                ..base
            },
            Options {
                socketio: true,
                ..base
            },
            Options {
                docker: true,
                ..base
            },
        ];

        let baseline = file_set(&blog(base));

        for options in variants {
            let enabled = file_set(&blog(options));

            // TypeScript renames source files, so compare with extensions
            // stripped; every other flag must yield a plain superset.
            if options.typescript {
                let strip = |set: &BTreeSet<PathBuf>| -> BTreeSet<PathBuf> {
                    set.iter().map(|p| p.with_extension("")).collect()
                };
                assert!(strip(&enabled).is_superset(&strip(&baseline)));
            } else {
                assert!(enabled.is_superset(&baseline));
            }
        }
    }

    #[test]
    fn project_name_appears_verbatim() {
        let plan = blog(Options::default());

        let manifest = plan.file_content("package.json").expect("root manifest");
        assert!(manifest.contains("\"name\": \"blog\""));

        let readme = plan.file_content("README.md").expect("readme");
        assert!(readme.starts_with("# blog\n"));
    }

    #[test]
    fn socketio_changes_manifests_but_not_the_file_set() {
        let with = blog(Options {
            socketio: true,
            ..Options::default()
        });
        let without = blog(Options::default());

        assert_eq!(file_set(&with), file_set(&without));
        assert!(with
            .file_content("client/package.json")
            .expect("client manifest")
            .contains("socket.io-client"));
        assert!(with
            .file_content("server/package.json")
            .expect("server manifest")
            .contains("\"socket.io\""));
    }
}
