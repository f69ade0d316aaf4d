//! One scaffolding run: collect answers, then render and write the plan

use crate::plan::{
    build_plan, default_controller_filename, default_test_filename, ensure_unique,
    reserved_filenames, resolve_name, BlankAnswer, FileKind, FileSpec, GenerationPlan, PlanError,
};
use crate::prompt::{prompt_optional, prompt_required, Prompter};
use crate::templates::render_plan;
use crate::writer::{ensure_dir, write_all, FileOutcome, FileSystem, WriteError};
use std::io;

pub const NAME_PROMPT: &str =
    "Name of component (use a dot for the suffix, e.g. ButtonCard or Dashboard.layout)";
pub const DIRECTORY_PROMPT: &str = "Target directory (blank defaults to \".\")";
pub const CONTROLLER_PROMPT: &str =
    "Controller file? (y = <Name>.controller.ts, n = skip, <custom> = <custom>.ts)";
pub const TEST_PROMPT: &str =
    "Test file? (y = <Name>.<suffix>.test.ts, n = skip, <custom> = <custom>.ts)";
pub const INTERFACE_PROMPT: &str = "Create interface file and use <Name>Props?";

/// Raw answers, in the order they are asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: String,
    pub directory: String,
    pub controller: String,
    pub test: String,
    pub with_interface: bool,
}

impl Answers {
    pub fn to_plan(&self) -> Result<GenerationPlan, PlanError> {
        build_plan(
            &self.name,
            &self.directory,
            self.with_interface,
            &self.test,
            &self.controller,
        )
    }
}

/// Ask every question of a run
///
/// The name is asked until it yields a usable identifier, and custom file
/// names are asked again when nothing would be left of them or when they
/// clash with another generated file, so the answers always produce a plan.
/// The interface is asked last, so its file name is kept free regardless of
/// the answer.
pub fn collect_answers<P: Prompter + ?Sized>(prompter: &mut P) -> io::Result<Answers> {
    let (name, pascal_name, suffix) = loop {
        let name = prompt_required(prompter, NAME_PROMPT)?;
        match resolve_name(&name) {
            Ok((pascal_name, suffix)) => break (name, pascal_name, suffix),
            Err(err) => prompter.notice(&err.to_string())?,
        }
    };

    let directory = prompt_optional(prompter, DIRECTORY_PROMPT, ".")?;

    let mut taken = reserved_filenames(&pascal_name, &suffix, true);
    let (controller, controller_spec) = prompt_file_answer(
        prompter,
        FileKind::Controller,
        CONTROLLER_PROMPT,
        BlankAnswer::Skip,
        &default_controller_filename(&pascal_name),
        &taken,
    )?;
    taken.extend(controller_spec.filename().map(str::to_string));

    let (test, _) = prompt_file_answer(
        prompter,
        FileKind::Test,
        TEST_PROMPT,
        BlankAnswer::Create,
        &default_test_filename(&pascal_name, &suffix),
        &taken,
    )?;
    let with_interface = prompter.confirm(INTERFACE_PROMPT, true)?;

    Ok(Answers {
        name,
        directory,
        controller,
        test,
        with_interface,
    })
}

fn prompt_file_answer<P: Prompter + ?Sized>(
    prompter: &mut P,
    kind: FileKind,
    message: &str,
    blank: BlankAnswer,
    default_filename: &str,
    taken: &[String],
) -> io::Result<(String, FileSpec)> {
    let default = match blank {
        BlankAnswer::Create => "y",
        BlankAnswer::Skip => "n",
    };

    loop {
        let answer = prompt_optional(prompter, message, default)?;
        let resolved = FileSpec::resolve(kind, &answer, blank, default_filename)
            .and_then(|spec| ensure_unique(kind, &spec, taken).map(|()| spec));

        match resolved {
            Ok(spec) => return Ok((answer, spec)),
            Err(err) => prompter.notice(&err.to_string())?,
        }
    }
}

/// Create the component folder, then render and write every planned file
///
/// A directory failure aborts before anything is written.
pub fn generate<F, P, O>(
    plan: &GenerationPlan,
    fs: &F,
    prompter: &mut P,
    observe: O,
) -> Result<Vec<FileOutcome>, WriteError>
where
    F: FileSystem,
    P: Prompter + ?Sized,
    O: FnMut(&FileOutcome),
{
    ensure_dir(fs, &plan.base_directory)?;

    let files = render_plan(plan);
    log::debug!(
        "writing {} files into {}",
        files.len(),
        plan.base_directory.display()
    );

    write_all(fs, prompter, &files, observe)
}
