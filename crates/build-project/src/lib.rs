//! build-project - The c-datastructures build graph
//!
//! Declares the project's libraries and test executables. Building is left
//! to whichever [`BuildGraph`] the caller passes in.

use depgraph::BuildGraph;

/// Static library bundling every data structure
pub const STATIC_LIBRARY: &str = "libcdatastructures.a";
/// Shared library bundling every data structure
pub const SHARED_LIBRARY: &str = "libcdatastructures.so";

/// Objects that make up both libraries
pub const LIBRARY_OBJECTS: &[&str] = &["vector.o", "llist.o"];

/// Test executables: name, then inputs
pub const TEST_EXECUTABLES: &[(&str, &[&str])] = &[
    ("vectortest", &["vector.o", "vectortest.c"]),
    ("llisttest", &["llist.o", "llisttest.c"]),
];

/// Declare the libraries, then the test executables.
pub fn declare<G: BuildGraph>(graph: &mut G) -> &mut G {
    graph
        .add_static_library(STATIC_LIBRARY, LIBRARY_OBJECTS)
        .add_shared_library(SHARED_LIBRARY, LIBRARY_OBJECTS);

    for (name, inputs) in TEST_EXECUTABLES {
        graph.add_executable(name, inputs);
    }
    graph
}
