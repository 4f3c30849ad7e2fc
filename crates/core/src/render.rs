//! JUnit test file rendering
//!
//! Plain text templating over extracted signatures. Names are emitted as-is;
//! nothing is escaped.

use std::fmt::Write;

use crate::layout::TEST_SUFFIX;
use crate::signature::FunctionSignature;

/// One level of indentation inside the test class.
pub const INDENT: &str = "    ";

/// Lower-case the first character, leaving the rest untouched.
///
/// `AddNumbers` becomes `addNumbers`; `addNumbers` is unchanged.
pub fn camelcase(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the test function generated for `name`.
pub fn test_function_name(name: &str) -> String {
    format!("{}{TEST_SUFFIX}", camelcase(name))
}

/// Render the stub test function for one signature.
///
/// The block has no trailing newline.
pub fn render_stub(signature: &FunctionSignature) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{INDENT}@Test");
    let _ = writeln!(
        output,
        "{INDENT}fun {}() {{",
        test_function_name(&signature.name)
    );
    let _ = writeln!(
        output,
        "{INDENT}{INDENT}//TODO: val result = {}({})",
        signature.name,
        signature.parameter_names()
    );
    let _ = writeln!(output, "{INDENT}{INDENT}//TODO: Add logic for your test");
    let _ = writeln!(output, "{INDENT}{INDENT}//TODO: Assert the result is expected");
    let _ = write!(output, "{INDENT}}}");

    output
}

/// Render every stub, separated by a blank line.
pub fn render_stubs(signatures: &[FunctionSignature]) -> String {
    signatures
        .iter()
        .map(render_stub)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the complete test file.
///
/// An empty `package` (sources in the default package) omits the package
/// declaration.
pub fn render_test_file(
    package: &str,
    test_file_name: &str,
    class_name: &str,
    stubs: &str,
) -> String {
    let mut output = String::new();

    if !package.is_empty() {
        let _ = writeln!(output, "package {package}\n");
    }

    output.push_str("import org.junit.After\n");
    output.push_str("import org.junit.Before\n");
    output.push_str("import org.junit.Test\n\n");

    output.push_str("/**\n");
    let _ = writeln!(
        output,
        " * Unit tests for {test_file_name}, which will execute on the development machine (host)."
    );
    output.push_str(" *\n");
    output.push_str(" * See [testing documentation](http://d.android.com/tools/testing).\n");
    output.push_str(" */\n\n");

    let _ = writeln!(output, "class {class_name} {{");
    let _ = writeln!(output, "{INDENT}@Before");
    let _ = writeln!(output, "{INDENT}fun setup() {{");
    let _ = writeln!(output, "{INDENT}{INDENT}//TODO: setup prerequisites for tests");
    let _ = writeln!(output, "{INDENT}}}\n");
    let _ = writeln!(output, "{INDENT}@After");
    let _ = writeln!(output, "{INDENT}fun tearDown() {{");
    let _ = writeln!(output, "{INDENT}{INDENT}//TODO: clear resources after test");
    let _ = writeln!(output, "{INDENT}}}\n");
    let _ = writeln!(output, "{stubs}");
    output.push_str("}\n");

    output
}
