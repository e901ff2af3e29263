//! License comment block prepended to generated C files

/// MIT license text, one entry per line. Empty entries become bare comment lines.
const LICENSE_LINES: &[&str] = &[
    "MIT License",
    "",
    "Copyright (c) 2022 Mathias Estrup",
    "",
    "Permission is hereby granted, free of charge, to any person obtaining a copy",
    "of this software and associated documentation files (the \"Software\"), to deal",
    "in the Software without restriction, including without limitation the rights",
    "to use, copy, modify, merge, publish, distribute, sublicense, and/or sell",
    "copies of the Software, and to permit persons to whom the Software is",
    "furnished to do so, subject to the following conditions:",
    "",
    "The above copyright notice and this permission notice shall be included in",
    "all copies or substantial portions of the Software.",
    "",
    "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR",
    "IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,",
    "FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE",
    "AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER",
    "LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,",
    "OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE",
    "SOFTWARE.",
];

/// Line-comment token for C sources and headers
pub const C_COMMENT: &str = "//";

/// Render the license as a block of line comments ending in a single newline
pub fn license_comment(comment_token: &str) -> String {
    let mut block = LICENSE_LINES
        .iter()
        .map(|line| {
            if line.is_empty() {
                comment_token.to_string()
            } else {
                format!("{} {}", comment_token, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    block.push('\n');
    block
}
