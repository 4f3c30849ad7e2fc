use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use utgen_core::gradle::{self, BuildFileKind};
use utgen_core::layout;
use utgen_core::render;
use utgen_core::signature::{self, FunctionSignature};

#[derive(Debug, clap::Args, Clone)]
pub struct GenerateOptions {
    /// Annotation marking the functions to test, without the `@` (e.g. "Testable")
    #[clap(env = "UTGEN_ANNOTATION")]
    pub annotation: String,

    /// Path to the source file (e.g. "app/src/main/kotlin/com/x/Calc.kt")
    #[clap(env = "UTGEN_FILE")]
    pub path: String,

    /// Print the generated test file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// The source file being scanned.
#[derive(Debug, Clone)]
pub struct SourceReference {
    pub path: String,
    pub content: String,
}

/// The build file governing the source's module.
#[derive(Debug, Clone)]
pub struct BuildDescriptor {
    pub path: PathBuf,
    pub kind: BuildFileKind,
}

/// A rendered test file and where it belongs.
#[derive(Debug, Clone)]
pub struct TestFile {
    pub dir: PathBuf,
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub test_file: String,
    pub package: String,
    pub build_file: String,
    pub functions: Vec<String>,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

/// Module entry point
pub fn run(options: GenerateOptions, _global: crate::Global) -> Result<()> {
    let progress = shows_progress(&options);

    let output = generate(&options, |message| {
        if progress {
            println!("{message}");
        }
    })?;

    anstream::print!("{}", format_output(&options, &output)?);

    Ok(())
}

/// Progress lines would corrupt JSON and dry-run output, so they only show
/// in the default mode.
pub fn shows_progress(options: &GenerateOptions) -> bool {
    !options.json && !options.dry_run
}

/// Final text printed on stdout once the pipeline succeeded.
pub fn format_output(options: &GenerateOptions, output: &GenerateOutput) -> Result<String> {
    if options.json {
        return Ok(f!("{}\n", serde_json::to_string_pretty(output)?));
    }

    if let Some(contents) = &output.contents {
        return Ok(contents.clone());
    }

    Ok(f!(
        "Test file created at: {}\n",
        output.test_file.as_str().green().bold()
    ))
}

/// Run the whole pipeline, reporting progress through `progress`.
///
/// With `dry_run` set nothing is written and the rendered file is returned in
/// [`GenerateOutput::contents`].
pub fn generate(
    options: &GenerateOptions,
    mut progress: impl FnMut(&str),
) -> Result<GenerateOutput> {
    let annotation = validate_input(&options.annotation, &options.path)?;
    let source = load_source(&options.path)?;

    let build = locate_build_file(&source.path)?;
    log::debug!("Using build file {} ({})", build.path.display(), build.kind);

    check_dependencies(&build)?;

    let package = layout::package_name(&source.path)?;
    log::debug!("Resolved package '{package}'");

    progress("Finding functions...");
    let signatures = signature::extract_signatures(&source.content, annotation)?;
    log::info!(
        "Found {} function(s) annotated with @{annotation}",
        signatures.len()
    );

    progress("Generating Unit Tests...");
    let test_file = build_test_file(&source, &package, &signatures)?;

    let (test_file_path, contents) = if options.dry_run {
        (test_file.path.clone(), Some(test_file.contents))
    } else {
        (write_test_file(&test_file)?, None)
    };

    Ok(GenerateOutput {
        test_file: test_file_path.display().to_string(),
        package,
        build_file: build.path.display().to_string(),
        functions: signatures.into_iter().map(|s| s.name).collect(),
        written: !options.dry_run,
        contents,
    })
}

/// Check the arguments and that the source file exists.
///
/// Returns the annotation name with any leading `@` removed.
pub fn validate_input<'a>(annotation: &'a str, path: &str) -> Result<&'a str, Error> {
    if path.is_empty() {
        return Err(Error::Usage("Invalid path".to_string()));
    }

    let annotation = annotation.trim().trim_start_matches('@');
    if annotation.is_empty() {
        return Err(Error::Usage(
            "<annotation_name> <path_to_class>: annotation name is empty".to_string(),
        ));
    }

    if !Path::new(path).exists() {
        return Err(Error::NotFound(path.to_string()));
    }

    Ok(annotation)
}

pub fn load_source(path: &str) -> Result<SourceReference> {
    let content =
        fs::read_to_string(path).with_context(|| f!("Failed to read source file {path}"))?;

    Ok(SourceReference {
        path: path.to_string(),
        content,
    })
}

/// Find the build file at the module root derived from `path`.
///
/// Only the directory before the first `/src` is inspected.
pub fn locate_build_file(path: &str) -> Result<BuildDescriptor, Error> {
    let root = Path::new(layout::module_root(path)?);
    let missing = || {
        Error::ConfigResolution(f!(
            "Cannot determine gradle file of the provided module ({})",
            root.display()
        ))
    };

    if !root.is_dir() {
        return Err(missing());
    }

    let names = fs::read_dir(root)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
                .collect::<std::io::Result<Vec<String>>>()
        })
        .map_err(|_| missing())?;

    let kind = gradle::select_build_file(&names).ok_or_else(missing)?;

    Ok(BuildDescriptor {
        path: root.join(kind.file_name()),
        kind,
    })
}

/// An unreadable build file counts as missing the test dependencies.
pub fn check_dependencies(build: &BuildDescriptor) -> Result<(), Error> {
    let content = fs::read_to_string(&build.path).unwrap_or_default();

    if !gradle::has_test_dependency(&content) {
        return Err(Error::Dependency(f!(
            "Required dependencies for unit testing are not added to {}",
            build.path.display()
        )));
    }

    Ok(())
}

pub fn build_test_file(
    source: &SourceReference,
    package: &str,
    signatures: &[FunctionSignature],
) -> Result<TestFile, Error> {
    let file_name = layout::test_file_name(&source.path)?;
    let dir = PathBuf::from(layout::test_dir(&source.path)?);

    let contents = render::render_test_file(
        package,
        &file_name,
        &layout::test_class_name(&source.path)?,
        &render::render_stubs(signatures),
    );

    Ok(TestFile {
        path: dir.join(&file_name),
        dir,
        contents,
    })
}

/// Write the test file, creating its directory first.
///
/// Any existing file is overwritten. Returns the absolute path written.
pub fn write_test_file(test_file: &TestFile) -> Result<PathBuf> {
    fs::create_dir_all(&test_file.dir)
        .with_context(|| f!("Failed to create directory {}", test_file.dir.display()))?;

    fs::write(&test_file.path, &test_file.contents)
        .with_context(|| f!("Failed to write {}", test_file.path.display()))?;

    log::debug!("Wrote {} bytes", test_file.contents.len());

    std::path::absolute(&test_file.path).context("Failed to resolve test file path")
}
