//! Product configuration trait for CLI binaries
//!
//! The core owns the scaffolding rules; a binary supplies its identity and the
//! text shown around the interactive flow.

use crate::naming::DEFAULT_SUFFIX;
use crate::plan::GenerationPlan;

/// Configuration trait for scaffolding products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (binary name)
    fn name(&self) -> &'static str;

    /// Human-readable display name, shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// Instructions printed after the files are written
    fn next_steps(&self, plan: &GenerationPlan) -> Vec<String>;

    /// Naming and prompt rules shown before the first question
    fn usage_notes(&self) -> String {
        format!(
            "Naming\n\
             \x20 ButtonCard        -> ButtonCard.{DEFAULT_SUFFIX}.tsx\n\
             \x20 Dashboard.layout  -> Dashboard.layout.tsx\n\
             \n\
             Files (inside <dir>/<Name>)\n\
             \x20 <Name>.<suffix>.tsx       component            always\n\
             \x20 <Name>.interface.ts       props interface      default yes\n\
             \x20 <Name>.<suffix>.test.ts   render test          default yes\n\
             \x20 <Name>.controller.ts      controller hook      default no\n\
             \x20 index.ts                  re-exports           always\n\
             \n\
             Test/controller answers: y = default name, n = skip, anything else = <custom>.ts\n\
             Existing files: y = overwrite, n = keep, a = overwrite all, s = skip all"
        )
    }
}
