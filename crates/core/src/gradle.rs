//! Gradle build descriptor helpers
//!
//! Pure functions for picking the module's build file out of a directory
//! listing and checking it declares test dependencies.

use std::fmt;

/// Substring that marks a build file as declaring test dependencies.
pub const TEST_DEPENDENCY_MARKER: &str = "testImplementation";

/// The two build descriptor names recognized at a module root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFileKind {
    /// `build.gradle`
    Groovy,
    /// `build.gradle.kts`
    Kotlin,
}

impl BuildFileKind {
    /// Lookup order: the plain Groovy name wins over the Kotlin DSL variant.
    pub const LOOKUP_ORDER: [BuildFileKind; 2] = [BuildFileKind::Groovy, BuildFileKind::Kotlin];

    pub fn file_name(&self) -> &'static str {
        match self {
            BuildFileKind::Groovy => "build.gradle",
            BuildFileKind::Kotlin => "build.gradle.kts",
        }
    }
}

impl fmt::Display for BuildFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Select the build file out of the names found in a module root.
///
/// Returns `None` when neither recognized name is present.
pub fn select_build_file<S: AsRef<str>>(entries: &[S]) -> Option<BuildFileKind> {
    BuildFileKind::LOOKUP_ORDER
        .into_iter()
        .find(|kind| entries.iter().any(|name| name.as_ref() == kind.file_name()))
}

/// Whether the build file text declares a test dependency.
///
/// Plain substring match; versions and configurations are not inspected.
pub fn has_test_dependency(build_file: &str) -> bool {
    build_file.contains(TEST_DEPENDENCY_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // select_build_file tests
    // ============================================================================

    #[test]
    fn test_select_build_file_groovy() {
        let entries = vec!["src", "build.gradle", "README.md"];
        assert_eq!(select_build_file(&entries), Some(BuildFileKind::Groovy));
    }

    #[test]
    fn test_select_build_file_kotlin_only() {
        let entries = vec!["src", "build.gradle.kts"];
        assert_eq!(select_build_file(&entries), Some(BuildFileKind::Kotlin));
    }

    #[test]
    fn test_select_build_file_prefers_groovy() {
        let entries = vec!["build.gradle.kts", "build.gradle"];
        assert_eq!(select_build_file(&entries), Some(BuildFileKind::Groovy));
    }

    #[test]
    fn test_select_build_file_none() {
        let entries = vec!["src", "pom.xml", "settings.gradle"];
        assert_eq!(select_build_file(&entries), None);
    }

    #[test]
    fn test_select_build_file_empty() {
        let entries: Vec<String> = Vec::new();
        assert_eq!(select_build_file(&entries), None);
    }

    // ============================================================================
    // has_test_dependency tests
    // ============================================================================

    #[test]
    fn test_has_test_dependency_present() {
        let build = r#"
dependencies {
    implementation("org.jetbrains.kotlin:kotlin-stdlib")
    testImplementation("junit:junit:4.13.2")
}
"#;
        assert!(has_test_dependency(build));
    }

    #[test]
    fn test_has_test_dependency_missing() {
        let build = "dependencies {\n    implementation 'com.squareup:okio:3.0.0'\n}\n";
        assert!(!has_test_dependency(build));
    }

    #[test]
    fn test_has_test_dependency_is_case_sensitive() {
        assert!(!has_test_dependency("TESTIMPLEMENTATION 'junit:junit:4.13.2'"));
    }

    #[test]
    fn test_build_file_kind_display() {
        assert_eq!(BuildFileKind::Kotlin.to_string(), "build.gradle.kts");
    }
}
