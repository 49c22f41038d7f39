//! Rendering channel samples as C++ float literals.

use std::fmt::Write;

use crate::plane::ChannelPlane;

/// Render one channel plane as a comma-separated list of C++ `float`
/// literals.
///
/// Samples are visited in row-major order and normalized as
/// `sample / 255.0` in f32. Each value is printed as the shortest decimal
/// that parses back to the same f32, suffixed with `f`, so `255` becomes
/// `1.0f` and `0` becomes `0.0f`. No separator trails the last value; an
/// empty plane encodes to the empty string.
pub fn encode_channel(plane: &ChannelPlane) -> String {
    // Longest literal is "0.003921569f," at 13 bytes.
    let mut out = String::with_capacity(plane.len().saturating_mul(13));
    for (i, &sample) in plane.data.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let value = f32::from(sample) / 255.0;
        let _ = write!(out, "{value:?}f");
    }
    out
}
