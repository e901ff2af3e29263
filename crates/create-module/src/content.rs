//! Generated file content
//!
//! Every function here is pure: it takes file names and returns the text to
//! append. The license block is handled separately in [`crate::license`].

use std::path::Path;

/// Greeting printed by the generated smoke test
pub const TEST_GREETING: &str = "Hello, World!";

/// Invert the case of every letter, leaving everything else untouched.
///
/// Letters whose case mapping expands (e.g. `ß`) expand in the output too.
pub fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Include guard for a header, derived from its file name.
///
/// `foo.h` becomes `FOO_H`; `Widget.h` becomes `wIDGET_H`.
pub fn include_guard(header_file_name: &str) -> String {
    swap_case(header_file_name).replace('.', "_")
}

/// Include-guard skeleton for a header. No trailing newline.
pub fn header_file(header_file_name: &str) -> String {
    let guard = include_guard(header_file_name);
    format!("#ifndef {guard}\n#define {guard}\n\n#endif")
}

/// Smoke test that includes the module header by its bare file name.
///
/// Starts with a newline so the code is separated from the license block.
pub fn test_file(header_file_name: &str) -> String {
    [
        String::new(),
        "#include <stdio.h>".to_string(),
        String::new(),
        format!("#include \"{}\"", header_file_name),
        String::new(),
        "int main() {".to_string(),
        format!("  printf(\"{}\\n\");", TEST_GREETING),
        "  return 0;".to_string(),
        "}".to_string(),
    ]
    .join("\n")
}

/// Per-module Makefile building the test binary into `$(ROOT)/bin`.
///
/// `ROOT` points two levels up, from `src/<module>` to the project root.
/// Recipe lines are tab-indented as make requires.
pub fn make_file(module_name: &str, test_file_name: &str, source_file_name: &str) -> String {
    let test_obj = object_name(test_file_name);
    let source_obj = object_name(source_file_name);
    let test_bin = file_stem(test_file_name);

    format!(
        "CC=gcc\n\
         CFLAGS=-g -Wall\n\
         \n\
         ROOT=../..\n\
         OBJ=$(ROOT)/obj/{module_name}\n\
         BIN=$(ROOT)/bin\n\
         \n\
         OBJS=$(OBJ)/{test_obj} $(OBJ)/{source_obj}\n\
         BINS=$(BIN)/{test_bin}\n\
         \n\
         all: $(BINS)\n\
         \n\
         $(BINS): $(OBJS) | $(BIN)\n\
         \t$(CC) $(CFLAGS) -o $@ $^\n\
         \n\
         $(OBJ)/%.o: %.c | $(OBJ)\n\
         \t$(CC) $(CFLAGS) -c $< -o $@\n\
         \n\
         $(OBJ):\n\
         \tmkdir -p $@\n\
         \n\
         $(BIN):\n\
         \tmkdir -p $@\n\
         \n\
         clean:\n\
         \trm -rf $(OBJ) $(BINS)"
    )
}

/// `footest.c` -> `footest.o`
fn object_name(file_name: &str) -> String {
    Path::new(file_name)
        .with_extension("o")
        .to_string_lossy()
        .into_owned()
}

/// `footest.c` -> `footest`
fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lowercase_name() {
        assert_eq!(include_guard("foo.h"), "FOO_H");
        assert_eq!(include_guard("widget.h"), "WIDGET_H");
    }

    #[test]
    fn test_guard_swaps_rather_than_uppercases() {
        assert_eq!(include_guard("Widget.h"), "wIDGET_H");
        assert_eq!(include_guard("myList.h"), "MYlIST_H");
        assert_ne!(include_guard("Widget.h"), "WIDGET_H");
    }

    #[test]
    fn test_guard_replaces_every_dot() {
        assert_eq!(include_guard("a.b.h"), "A_B_H");
        assert_eq!(include_guard("vec_2.h"), "VEC_2_H");
    }

    #[test]
    fn test_swap_case_non_ascii() {
        assert_eq!(swap_case("ÄbC"), "äBc");
        assert_eq!(swap_case("123-_"), "123-_");
    }

    #[test]
    fn test_header_shape() {
        assert_eq!(header_file("foo.h"), "#ifndef FOO_H\n#define FOO_H\n\n#endif");
    }

    #[test]
    fn test_test_file_includes_bare_header_name() {
        let text = test_file("widget.h");
        assert!(text.starts_with("\n#include <stdio.h>\n"));
        assert!(text.contains("#include \"widget.h\"\n"));
        assert!(text.contains("printf(\"Hello, World!\\n\");"));
        assert!(text.contains("return 0;"));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn test_make_file_variables() {
        let text = make_file("foo", "footest.c", "foo.c");
        assert!(text.starts_with("CC=gcc\nCFLAGS=-g -Wall\n\nROOT=../..\n"));
        assert!(text.contains("OBJ=$(ROOT)/obj/foo\n"));
        assert!(text.contains("BIN=$(ROOT)/bin\n"));
        assert!(text.contains("OBJS=$(OBJ)/footest.o $(OBJ)/foo.o\n"));
        assert!(text.contains("BINS=$(BIN)/footest\n"));
        assert!(text.ends_with("clean:\n\trm -rf $(OBJ) $(BINS)"));
    }

    #[test]
    fn test_make_file_recipes_use_tabs() {
        let text = make_file("foo", "footest.c", "foo.c");
        let recipes: Vec<_> = text
            .lines()
            .filter(|line| line.starts_with(char::is_whitespace))
            .collect();

        assert_eq!(recipes.len(), 5);
        assert!(recipes.iter().all(|line| line.starts_with('\t') && !line.starts_with("\t ")));
        assert!(!text.contains("    "));
    }

    #[test]
    fn test_make_file_rules() {
        let text = make_file("foo", "footest.c", "foo.c");
        assert!(text.contains("all: $(BINS)\n"));
        assert!(text.contains("$(BINS): $(OBJS) | $(BIN)\n\t$(CC) $(CFLAGS) -o $@ $^\n"));
        assert!(text.contains("$(OBJ)/%.o: %.c | $(OBJ)\n\t$(CC) $(CFLAGS) -c $< -o $@\n"));
        assert!(text.contains("$(OBJ):\n\tmkdir -p $@\n"));
    }
}
