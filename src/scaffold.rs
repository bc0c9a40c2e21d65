//! The scaffold procedure.
//!
//! One strictly sequential pass: guard check, directory creation, file
//! creation, toolchain init, manifest patching, dependency installation.
//! The first error aborts the run; there is no rollback of completed steps.

use crate::error::ScaffoldError;
use crate::manifest;
use crate::templates::{
    ScaffoldEntry, DEV_DEPENDENCIES, GUARD_FILE, INIT_METADATA_FILE, RUNTIME_DEPENDENCIES,
    SCAFFOLD_DIRS, SCAFFOLD_FILES,
};
use crate::toolchain::{self, ToolchainConfig, ToolchainRunner};
use crate::workspace;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// What one run would materialize, for preview without touching the filesystem.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
    pub runtime_dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

/// The fixed plan.
pub fn plan() -> ScaffoldPlan {
    ScaffoldPlan {
        dirs: SCAFFOLD_DIRS.iter().map(|d| d.to_string()).collect(),
        files: SCAFFOLD_FILES.iter().map(|e| e.path.to_string()).collect(),
        runtime_dependencies: RUNTIME_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
        dev_dependencies: DEV_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
    }
}

/// Per-path outcome of one create step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub path: String,
    pub created: bool,
}

/// Summary of one scaffold run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Guard check fired: the workspace was already scaffolded, nothing ran.
    pub skipped: bool,
    pub dirs: Vec<StepOutcome>,
    pub files: Vec<StepOutcome>,
    pub init_ran: bool,
    pub install_ran: bool,
}

impl ScaffoldReport {
    fn skipped(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            skipped: true,
            dirs: Vec::new(),
            files: Vec::new(),
            init_ran: false,
            install_ran: false,
        }
    }

    /// Number of filesystem entries this run created.
    pub fn created_count(&self) -> usize {
        self.dirs
            .iter()
            .chain(self.files.iter())
            .filter(|o| o.created)
            .count()
    }
}

/// Run the scaffold procedure against a workspace root.
///
/// Steps execute strictly in order; re-running against a scaffolded workspace
/// is a no-op reported via `skipped`.
pub fn run(
    root: &Path,
    config: &ToolchainConfig,
    runner: &dyn ToolchainRunner,
) -> Result<ScaffoldReport, ScaffoldError> {
    if workspace::is_scaffolded(root) {
        info!(root = %root.display(), "{} already exists, skipping scaffold", GUARD_FILE);
        return Ok(ScaffoldReport::skipped(root));
    }

    let mut dirs = Vec::with_capacity(SCAFFOLD_DIRS.len());
    for dir in SCAFFOLD_DIRS {
        let created = workspace::ensure_dir(root, dir)?;
        dirs.push(StepOutcome {
            path: (*dir).to_string(),
            created,
        });
    }

    let mut files = Vec::with_capacity(SCAFFOLD_FILES.len());
    for ScaffoldEntry { path, content } in SCAFFOLD_FILES {
        let created = workspace::write_if_missing(root, path, content)?;
        files.push(StepOutcome {
            path: (*path).to_string(),
            created,
        });
    }

    let mut init_ran = false;
    if !config.skip_init {
        toolchain::init_project(runner, config, root)?;
        // Init drops a metadata file the scaffold does not keep.
        workspace::remove_file_if_exists(root, INIT_METADATA_FILE)?;
        manifest::patch_package_manifest(root)?;
        manifest::patch_compiler_config(root)?;
        init_ran = true;
    }

    let mut install_ran = false;
    if init_ran && !config.skip_install {
        toolchain::add_dependencies(runner, config, root, false, RUNTIME_DEPENDENCIES)?;
        toolchain::add_dependencies(runner, config, root, true, DEV_DEPENDENCIES)?;
        install_ran = true;
    }

    Ok(ScaffoldReport {
        root: root.to_path_buf(),
        skipped: false,
        dirs,
        files,
        init_ran,
        install_ran,
    })
}

/// List scaffold entries missing from an existing workspace.
///
/// An empty list means the scaffold is complete. Directories are reported
/// with a trailing slash.
pub fn validate(root: &Path) -> Vec<String> {
    let mut missing = Vec::new();
    if !root.join(GUARD_FILE).exists() {
        missing.push(GUARD_FILE.to_string());
    }
    for dir in SCAFFOLD_DIRS {
        if !root.join(dir).is_dir() {
            missing.push(format!("{}/", dir));
        }
    }
    for entry in SCAFFOLD_FILES {
        if !root.join(entry.path).exists() {
            missing.push(entry.path.to_string());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Runner that records nothing and touches nothing.
    struct NoopRunner;
    impl ToolchainRunner for NoopRunner {
        fn run(&self, _program: &str, _args: &[String], _cwd: &Path) -> Result<(), ScaffoldError> {
            Ok(())
        }
    }

    fn filesystem_only() -> ToolchainConfig {
        ToolchainConfig {
            skip_init: true,
            skip_install: true,
            ..ToolchainConfig::default()
        }
    }

    #[test]
    fn run_materializes_dirs_and_files() {
        let dir = TempDir::new().unwrap();
        let report = run(dir.path(), &filesystem_only(), &NoopRunner).unwrap();

        assert!(!report.skipped);
        assert!(!report.init_ran);
        for d in SCAFFOLD_DIRS {
            assert!(dir.path().join(d).is_dir(), "missing dir {}", d);
        }
        for entry in SCAFFOLD_FILES {
            let written = fs::read_to_string(dir.path().join(entry.path)).unwrap();
            assert_eq!(written, entry.content, "content mismatch for {}", entry.path);
        }
        assert_eq!(
            report.created_count(),
            SCAFFOLD_DIRS.len() + SCAFFOLD_FILES.len()
        );
    }

    #[test]
    fn guard_file_blocks_the_entire_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GUARD_FILE), "not even json").unwrap();

        let report = run(dir.path(), &filesystem_only(), &NoopRunner).unwrap();

        assert!(report.skipped);
        assert!(!dir.path().join("config").exists());
        assert!(!dir.path().join("index.ts").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join(GUARD_FILE)).unwrap(),
            "not even json"
        );
    }

    #[test]
    fn pre_existing_file_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/restful")).unwrap();
        fs::write(dir.path().join("src/restful/index.ts"), "my edits").unwrap();

        let report = run(dir.path(), &filesystem_only(), &NoopRunner).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("src/restful/index.ts")).unwrap(),
            "my edits"
        );
        let outcome = report
            .files
            .iter()
            .find(|o| o.path == "src/restful/index.ts")
            .unwrap();
        assert!(!outcome.created);
    }

    #[test]
    fn failing_toolchain_aborts_the_run() {
        struct FailingRunner;
        impl ToolchainRunner for FailingRunner {
            fn run(
                &self,
                program: &str,
                _args: &[String],
                _cwd: &Path,
            ) -> Result<(), ScaffoldError> {
                Err(ScaffoldError::ToolchainError(format!(
                    "`{}` exited with exit status: 1",
                    program
                )))
            }
        }

        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), &ToolchainConfig::default(), &FailingRunner).unwrap_err();
        assert!(matches!(err, ScaffoldError::ToolchainError(_)));
        // Filesystem half still completed before the toolchain step.
        assert!(dir.path().join("index.ts").exists());
    }

    #[test]
    fn validate_reports_missing_entries() {
        let dir = TempDir::new().unwrap();
        let missing = validate(dir.path());
        assert!(missing.contains(&GUARD_FILE.to_string()));
        assert!(missing.contains(&"config/".to_string()));

        run(dir.path(), &filesystem_only(), &NoopRunner).unwrap();
        let missing = validate(dir.path());
        // Only the guard file remains missing: init was skipped.
        assert_eq!(missing, vec![GUARD_FILE.to_string()]);
    }

    #[test]
    fn plan_never_touches_the_filesystem() {
        let p = plan();
        assert_eq!(p.dirs.len(), SCAFFOLD_DIRS.len());
        assert_eq!(p.files.len(), SCAFFOLD_FILES.len());
        assert!(p.runtime_dependencies.contains(&"react".to_string()));
        assert!(p.dev_dependencies.contains(&"@types/node".to_string()));
    }
}
