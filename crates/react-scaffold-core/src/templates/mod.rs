//! Template rendering for planned files
//!
//! Templates are plain `format!` producers in [`react`]. [`render_plan`] pairs
//! each planned path with its content, in write order.

pub mod react;

use crate::naming::module_specifier;
use crate::plan::{FileKind, GenerationPlan};
use std::path::PathBuf;

/// A planned file together with its rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub kind: FileKind,
    pub path: PathBuf,
    pub content: String,
}

/// Render every file of a plan, component first and index last
pub fn render_plan(plan: &GenerationPlan) -> Vec<RenderedFile> {
    let name = plan.pascal_name.as_str();
    let suffix = plan.suffix.as_str();
    let controller_module = plan.controller.filename().map(module_specifier);
    let controller_module = controller_module.as_deref();

    plan.files()
        .into_iter()
        .map(|(kind, path)| {
            let content = match kind {
                FileKind::Component => {
                    react::component(name, plan.with_interface, controller_module)
                }
                FileKind::Interface => react::interface(name),
                FileKind::Test => react::test(name, suffix),
                FileKind::Controller => react::controller(name),
                FileKind::Index => {
                    react::index(name, suffix, plan.with_interface, controller_module)
                }
            };

            RenderedFile {
                kind,
                path: path.to_path_buf(),
                content,
            }
        })
        .collect()
}
