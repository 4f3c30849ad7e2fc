//! Source tree layout derivations
//!
//! Pure string transformations over a Gradle-style source path:
//! `<module>/src/main/<kotlin|java>/<package dirs>/<File>.<ext>`.
//!
//! Paths are treated as `/`-separated text on purpose. The test directory is
//! derived with a literal substring replacement, so a `main` appearing before
//! the `src/main` segment (e.g. `/home/maintenance/app/...`) is the one that
//! gets rewritten.

use std::path::Path;

use crate::Error;

/// Segment that separates the module root from its sources.
pub const SRC_SEGMENT: &str = "/src";

/// Suffix appended to the source stem for test files, classes and functions.
pub const TEST_SUFFIX: &str = "Test";

/// Recognized source-root layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRoot {
    Kotlin,
    Java,
}

impl SourceRoot {
    pub fn marker(&self) -> &'static str {
        match self {
            SourceRoot::Kotlin => "src/main/kotlin",
            SourceRoot::Java => "src/main/java",
        }
    }

    /// Detect the layout of a path. Kotlin is checked first.
    pub fn detect(path: &str) -> Option<SourceRoot> {
        [SourceRoot::Kotlin, SourceRoot::Java]
            .into_iter()
            .find(|root| path.contains(root.marker()))
    }
}

/// Last `/`-separated segment of the path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// File name without its extension.
pub fn file_stem(path: &str) -> Result<&str, Error> {
    Path::new(file_name(path))
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| Error::Usage(format!("Invalid source file name: {path}")))
}

/// Derive the dotted package name from a source path.
///
/// `/app/src/main/kotlin/com/x/Calc.kt` becomes `com.x`.
pub fn package_name(path: &str) -> Result<String, Error> {
    let root = SourceRoot::detect(path).ok_or_else(|| {
        Error::ConfigResolution("file path should contain src/main/java(or kotlin)".to_string())
    })?;

    let package_path = path.split(root.marker()).nth(1).unwrap_or_default();
    let trailing_file = format!("/{}", file_name(path));
    let package_dirs = package_path
        .strip_suffix(&trailing_file)
        .unwrap_or(package_path);

    let dotted = package_dirs.replace('/', ".");

    Ok(dotted.strip_prefix('.').unwrap_or(dotted.as_str()).to_string())
}

/// The module root: everything before the first `/src` segment.
pub fn module_root(path: &str) -> Result<&str, Error> {
    let root = path.split(SRC_SEGMENT).next().unwrap_or_default();

    if root.is_empty() {
        return Err(Error::ConfigResolution(
            "file path should contain /src".to_string(),
        ));
    }

    Ok(root)
}

/// Name of the generated test file: `Calc.kt` becomes `CalcTest.kt`.
pub fn test_file_name(path: &str) -> Result<String, Error> {
    let stem = file_stem(path)?;

    Ok(match Path::new(file_name(path)).extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{stem}{TEST_SUFFIX}.{extension}"),
        None => format!("{stem}{TEST_SUFFIX}"),
    })
}

/// Name of the generated test class: `Calc.kt` becomes `CalcTest`.
pub fn test_class_name(path: &str) -> Result<String, Error> {
    Ok(format!("{}{TEST_SUFFIX}", file_stem(path)?))
}

/// Directory the test file goes into.
///
/// Takes the path prefix before the source file name and replaces the first
/// `main` with `test`.
pub fn test_dir(path: &str) -> Result<String, Error> {
    let name = file_name(path);
    let prefix = match path.find(name) {
        Some(index) if !name.is_empty() => &path[..index],
        _ => "",
    };

    let dir = prefix.replacen("main", "test", 1);

    if dir.is_empty() {
        return Err(Error::Write("cannot create test file".to_string()));
    }

    Ok(dir)
}
