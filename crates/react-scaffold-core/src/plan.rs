//! Generation plan: every name, file and path for one run, decided up front

use crate::naming::{custom_filename, join_path, parse_name_and_suffix, to_identifier};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning answers into a plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("component name must not be empty")]
    EmptyName,

    #[error("component name '{0}' does not contain any usable characters")]
    EmptyIdentifier(String),

    #[error("{kind} file name '{answer}' is empty once path separators and leading dots are removed")]
    EmptyCustomFilename { kind: FileKind, answer: String },

    #[error("{kind} file name '{filename}' is already used by another generated file")]
    DuplicateFilename { kind: FileKind, filename: String },
}

/// The kinds of file a plan can produce, in write order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Component,
    Interface,
    Test,
    Controller,
    Index,
}

impl FileKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            FileKind::Component => "component",
            FileKind::Interface => "interface",
            FileKind::Test => "test",
            FileKind::Controller => "controller",
            FileKind::Index => "index",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What an empty answer means for an optional file prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankAnswer {
    /// Blank creates the file with its default name (tests are opt-out)
    Create,
    /// Blank skips the file (controllers are opt-in)
    Skip,
}

/// Resolved answer for an optional file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSpec {
    Skip,
    Default { filename: String },
    Custom { filename: String },
}

impl FileSpec {
    /// Classify a prompt answer
    ///
    /// `y`/`yes` pick the default file name, `n`/`no` skip, blank follows
    /// `blank`, and anything else is taken as a custom base name.
    pub fn resolve(
        kind: FileKind,
        answer: &str,
        blank: BlankAnswer,
        default_filename: &str,
    ) -> Result<Self, PlanError> {
        let normalized = answer.trim().to_lowercase();

        let create_default = || FileSpec::Default {
            filename: default_filename.to_string(),
        };

        match normalized.as_str() {
            "y" | "yes" => Ok(create_default()),
            "n" | "no" => Ok(FileSpec::Skip),
            "" => match blank {
                BlankAnswer::Create => Ok(create_default()),
                BlankAnswer::Skip => Ok(FileSpec::Skip),
            },
            _ => custom_filename(answer)
                .map(|filename| FileSpec::Custom { filename })
                .ok_or_else(|| PlanError::EmptyCustomFilename {
                    kind,
                    answer: answer.trim().to_string(),
                }),
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            FileSpec::Skip => None,
            FileSpec::Default { filename } | FileSpec::Custom { filename } => Some(filename),
        }
    }

    pub fn is_created(&self) -> bool {
        !matches!(self, FileSpec::Skip)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FileSpec::Custom { .. })
    }
}

/// Output paths of a plan; optional entries are `None` when the file is not created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub component: PathBuf,
    pub interface: Option<PathBuf>,
    pub test: Option<PathBuf>,
    pub controller: Option<PathBuf>,
    pub index: PathBuf,
}

/// Everything needed to render and write one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub raw_name: String,
    pub pascal_name: String,
    pub suffix: String,
    pub base_directory: PathBuf,
    pub with_interface: bool,
    pub test: FileSpec,
    pub controller: FileSpec,
    pub paths: OutputPaths,
}

impl GenerationPlan {
    /// Planned files in write order; the index file is always last
    pub fn files(&self) -> Vec<(FileKind, &Path)> {
        let mut files = vec![(FileKind::Component, self.paths.component.as_path())];

        if let Some(path) = &self.paths.interface {
            files.push((FileKind::Interface, path.as_path()));
        }
        if let Some(path) = &self.paths.test {
            files.push((FileKind::Test, path.as_path()));
        }
        if let Some(path) = &self.paths.controller {
            files.push((FileKind::Controller, path.as_path()));
        }

        files.push((FileKind::Index, self.paths.index.as_path()));
        files
    }

    /// File name of the component, e.g. `Card.component.tsx`
    pub fn component_filename(&self) -> String {
        format!("{}.{}.tsx", self.pascal_name, self.suffix)
    }
}

/// Resolve a raw component name into its `(pascal_name, suffix)` pair
pub fn resolve_name(name_input: &str) -> Result<(String, String), PlanError> {
    let raw_name = name_input.trim();
    if raw_name.is_empty() {
        return Err(PlanError::EmptyName);
    }

    let (base, suffix) = parse_name_and_suffix(raw_name);
    let pascal_name = to_identifier(&base);
    if pascal_name.is_empty() {
        return Err(PlanError::EmptyIdentifier(raw_name.to_string()));
    }

    Ok((pascal_name, suffix))
}

pub fn default_test_filename(pascal_name: &str, suffix: &str) -> String {
    format!("{}.{}.test.ts", pascal_name, suffix)
}

pub fn default_controller_filename(pascal_name: &str) -> String {
    format!("{}.controller.ts", pascal_name)
}

/// File names taken by the component, interface (when created) and index
pub fn reserved_filenames(pascal_name: &str, suffix: &str, with_interface: bool) -> Vec<String> {
    let mut names = vec![format!("{}.{}.tsx", pascal_name, suffix)];
    if with_interface {
        names.push(format!("{}.interface.ts", pascal_name));
    }
    names.push("index.ts".to_string());
    names
}

/// Reject a file spec whose name is already in `taken`
///
/// Names are compared ignoring ASCII case, as on case-insensitive filesystems.
pub fn ensure_unique(kind: FileKind, spec: &FileSpec, taken: &[String]) -> Result<(), PlanError> {
    match spec.filename() {
        Some(filename) if taken.iter().any(|t| t.eq_ignore_ascii_case(filename)) => {
            Err(PlanError::DuplicateFilename {
                kind,
                filename: filename.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Build a plan from raw prompt answers
///
/// No I/O happens here. A blank `dir_input` means the current directory, and
/// the component always gets its own `<dir>/<PascalName>` folder. Every
/// planned file name is distinct.
pub fn build_plan(
    name_input: &str,
    dir_input: &str,
    with_interface: bool,
    test_answer: &str,
    controller_answer: &str,
) -> Result<GenerationPlan, PlanError> {
    let raw_name = name_input.trim();
    let (pascal_name, suffix) = resolve_name(raw_name)?;

    let dir = match dir_input.trim() {
        "" => ".",
        dir => dir,
    };
    let base_dir = join_path(&[dir, pascal_name.as_str()]);

    let test = FileSpec::resolve(
        FileKind::Test,
        test_answer,
        BlankAnswer::Create,
        &default_test_filename(&pascal_name, &suffix),
    )?;
    let controller = FileSpec::resolve(
        FileKind::Controller,
        controller_answer,
        BlankAnswer::Skip,
        &default_controller_filename(&pascal_name),
    )?;

    let mut taken = reserved_filenames(&pascal_name, &suffix, with_interface);
    ensure_unique(FileKind::Controller, &controller, &taken)?;
    taken.extend(controller.filename().map(str::to_string));
    ensure_unique(FileKind::Test, &test, &taken)?;

    let in_base = |filename: &str| PathBuf::from(join_path(&[base_dir.as_str(), filename]));

    let paths = OutputPaths {
        component: in_base(&format!("{}.{}.tsx", pascal_name, suffix)),
        interface: with_interface.then(|| in_base(&format!("{}.interface.ts", pascal_name))),
        test: test.filename().map(in_base),
        controller: controller.filename().map(in_base),
        index: in_base("index.ts"),
    };

    log::debug!(
        "planned {} (suffix '{}') in {} with test {:?} and controller {:?}",
        pascal_name,
        suffix,
        base_dir,
        test,
        controller
    );

    Ok(GenerationPlan {
        raw_name: raw_name.to_string(),
        pascal_name,
        suffix,
        base_directory: PathBuf::from(base_dir),
        with_interface,
        test,
        controller,
        paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_scenario_paths() {
        let plan = build_plan("Card", "", true, "y", "n").unwrap();

        assert_eq!(plan.base_directory, PathBuf::from("./Card"));
        assert_eq!(plan.paths.component, PathBuf::from("./Card/Card.component.tsx"));
        assert_eq!(
            plan.paths.interface,
            Some(PathBuf::from("./Card/Card.interface.ts"))
        );
        assert_eq!(
            plan.paths.test,
            Some(PathBuf::from("./Card/Card.component.test.ts"))
        );
        assert_eq!(plan.paths.controller, None);
        assert_eq!(plan.paths.index, PathBuf::from("./Card/index.ts"));
    }

    #[test]
    fn test_files_in_write_order() {
        let plan = build_plan("Card", "", true, "y", "y").unwrap();
        let kinds: Vec<FileKind> = plan.files().iter().map(|(kind, _)| *kind).collect();

        assert_eq!(
            kinds,
            vec![
                FileKind::Component,
                FileKind::Interface,
                FileKind::Test,
                FileKind::Controller,
                FileKind::Index,
            ]
        );
    }

    #[test]
    fn test_index_always_planned() {
        let plan = build_plan("Card", "", false, "n", "n").unwrap();
        let kinds: Vec<FileKind> = plan.files().iter().map(|(kind, _)| *kind).collect();

        assert_eq!(kinds, vec![FileKind::Component, FileKind::Index]);
    }

    #[test]
    fn test_base_directory_always_ends_with_name() {
        for dir in ["", "   ", ".", "src/components", "src/components/", "/tmp/ui"] {
            let plan = build_plan("user-card", dir, true, "", "").unwrap();
            let base = plan.base_directory.to_string_lossy().into_owned();
            assert!(base.ends_with("/UserCard"), "{} -> {}", dir, base);
        }
    }

    #[test]
    fn test_blank_test_answer_creates_default() {
        let plan = build_plan("Dashboard.layout", "src", true, "", "n").unwrap();

        assert_eq!(
            plan.test,
            FileSpec::Default {
                filename: "Dashboard.layout.test.ts".to_string()
            }
        );
    }

    #[test]
    fn test_blank_controller_answer_skips() {
        let plan = build_plan("Card", "src", true, "y", "").unwrap();

        assert_eq!(plan.controller, FileSpec::Skip);
        assert!(plan.paths.controller.is_none());
    }

    #[test]
    fn test_answers_are_case_insensitive() {
        let plan = build_plan("Card", "", true, " NO ", "Yes").unwrap();

        assert_eq!(plan.test, FileSpec::Skip);
        assert_eq!(
            plan.controller,
            FileSpec::Default {
                filename: "Card.controller.ts".to_string()
            }
        );
    }

    #[test]
    fn test_custom_controller_is_sanitized() {
        let plan = build_plan("Card", "", true, "y", "../../evil").unwrap();

        assert_eq!(
            plan.controller,
            FileSpec::Custom {
                filename: "evil.ts".to_string()
            }
        );
        let path = plan.paths.controller.unwrap();
        assert_eq!(path, PathBuf::from("./Card/evil.ts"));
        assert!(path.starts_with(&plan.base_directory));
    }

    #[test]
    fn test_custom_test_keeps_case() {
        let plan = build_plan("UserCard", "", true, "UserCard.test", "n").unwrap();

        assert_eq!(
            plan.paths.test,
            Some(PathBuf::from("./UserCard/UserCard.test.ts"))
        );
        assert!(plan.test.is_custom());
    }

    #[test]
    fn test_empty_custom_filename_rejected() {
        let err = build_plan("Card", "", true, "y", "/").unwrap_err();

        assert_eq!(
            err,
            PlanError::EmptyCustomFilename {
                kind: FileKind::Controller,
                answer: "/".to_string()
            }
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(build_plan("   ", "", true, "", ""), Err(PlanError::EmptyName));
        assert_eq!(
            build_plan("---", "", true, "", ""),
            Err(PlanError::EmptyIdentifier("---".to_string()))
        );
    }

    #[test]
    fn test_suffix_and_pascal_name() {
        let plan = build_plan(" user_profile.page ", "app", false, "n", "n").unwrap();

        assert_eq!(plan.raw_name, "user_profile.page");
        assert_eq!(plan.pascal_name, "UserProfile");
        assert_eq!(plan.suffix, "page");
        assert_eq!(plan.component_filename(), "UserProfile.page.tsx");
        assert_eq!(
            plan.paths.component,
            PathBuf::from("app/UserProfile/UserProfile.page.tsx")
        );
    }

    #[test]
    fn test_separators_in_name_stay_inside_base_directory() {
        for name in ["a/b", "a\\b"] {
            let plan = build_plan(name, "", true, "y", "n").unwrap();

            assert_eq!(plan.pascal_name, "AB");
            assert_eq!(plan.base_directory, PathBuf::from("./AB"));
            assert_eq!(plan.paths.component, PathBuf::from("./AB/AB.component.tsx"));
        }
    }

    #[test]
    fn test_separators_in_suffix_are_dropped() {
        let plan = build_plan("Card.a/b", "", false, "n", "n").unwrap();

        assert_eq!(plan.suffix, "ab");
        assert_eq!(plan.paths.component, PathBuf::from("./Card/Card.ab.tsx"));
    }

    #[test]
    fn test_custom_controller_cannot_reuse_index() {
        for answer in ["index", "INDEX.ts"] {
            let err = build_plan("Card", "", false, "n", answer).unwrap_err();

            assert!(matches!(
                err,
                PlanError::DuplicateFilename {
                    kind: FileKind::Controller,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_custom_test_cannot_reuse_controller() {
        let err = build_plan("Card", "", true, "Card.controller", "y").unwrap_err();

        assert_eq!(
            err,
            PlanError::DuplicateFilename {
                kind: FileKind::Test,
                filename: "Card.controller.ts".to_string()
            }
        );
    }

    #[test]
    fn test_interface_name_reserved_only_when_created() {
        assert!(build_plan("Card", "", false, "n", "Card.interface").is_ok());
        assert_eq!(
            build_plan("Card", "", true, "n", "Card.interface"),
            Err(PlanError::DuplicateFilename {
                kind: FileKind::Controller,
                filename: "Card.interface.ts".to_string()
            })
        );
    }

    #[test]
    fn test_planned_files_are_distinct() {
        let plan = build_plan("Card", "", true, "CardSpec", "CardLogic").unwrap();
        let mut paths: Vec<&Path> = plan.files().iter().map(|(_, p)| *p).collect();
        paths.sort();
        paths.dedup();

        assert_eq!(paths.len(), 5);
    }
}
