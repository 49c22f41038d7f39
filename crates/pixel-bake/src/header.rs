//! The fixed C++ header template and the filename-derived naming scheme.

/// Derive the symbol prefix for the generated constants from a filename
/// stem.
///
/// This is only an uppercase of the stem. No identifier sanitization is
/// performed: stems with leading digits or non-identifier characters
/// produce headers that will not compile, and callers own their filenames.
pub fn array_symbol(stem: &str) -> String {
    stem.to_uppercase()
}

/// Derive the output file name: lowercased stem plus the `.h` extension.
pub fn header_file_name(stem: &str) -> String {
    format!("{}.h", stem.to_lowercase())
}

/// Render the complete header for one image.
///
/// `red`, `green` and `blue` must each hold the encoded literals of a
/// `width * height` plane; the renderer substitutes them into the template
/// verbatim and validates nothing.
pub fn render_header(
    symbol: &str,
    width: u32,
    height: u32,
    red: &str,
    green: &str,
    blue: &str,
) -> String {
    format!(
        "
#pragma once

namespace images
{{

constexpr int {symbol}_HEIGHT = {height};
constexpr int {symbol}_WIDTH = {width};

constexpr float {symbol}_RED[]
{{
    {red}
}};

constexpr float {symbol}_GREEN[]
{{
    {green}
}};

constexpr float {symbol}_BLUE[]
{{
    {blue}
}};

}}
"
    )
}
