//! React Scaffold Core - shared library for component scaffolding CLIs
//!
//! Turns a handful of prompt answers into a React component folder: a
//! component, optional interface, test and controller files, and an index.
//!
//! # Architecture
//!
//! - **Layer 1: Pure rules** - [`naming`], [`plan`] and [`templates`] decide
//!   names, paths and contents without touching the disk
//! - **Layer 2: Capabilities** - [`prompt::Prompter`] and [`writer::FileSystem`]
//!   abstract the terminal and the filesystem; [`session`] drives a whole run
//!   through them
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use react_scaffold_core::{build_plan, session, LocalFs};
//!
//! let plan = build_plan("Card", "src/components", true, "y", "n")?;
//! session::generate(&plan, &LocalFs, &mut my_prompter, |outcome| {
//!     println!("{:?} {}", outcome.outcome, outcome.path.display());
//! })?;
//! ```

pub mod naming;
pub mod plan;
pub mod product;
pub mod prompt;
pub mod session;
pub mod templates;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use plan::{build_plan, FileKind, FileSpec, GenerationPlan, OutputPaths, PlanError};
pub use product::ProductConfig;
pub use prompt::Prompter;
pub use session::{collect_answers, generate, Answers};
pub use templates::{render_plan, RenderedFile};
pub use writer::{
    FileOutcome, FileSystem, LocalFs, OverwriteChoice, OverwritePolicy, WriteError, WriteOutcome,
};

#[cfg(feature = "tui")]
pub use tui::run;
