//! Decode one rotation with every decoder and print the CSS each would emit.
//!
//! Usage: cargo run -p uigeom --example decode_rotation

use uigeom::prelude::*;

fn main() -> Result<(), GeometryError> {
    let m = CssMatrix::rotate_z(30.0)
        .multiply(&CssMatrix::rotate_x(45.0))
        .multiply(&CssMatrix::rotate_y(-10.0));
    for decoder in RotationDecoder::ALL {
        let angles = decoder.decode(&m)?;
        let rebuilt = decoder.compose(&angles);
        println!(
            "{:<13} alpha={:>9.4} beta={:>9.4} gamma={:>9.4} rebuilt={} css={}",
            decoder.name(),
            angles.alpha,
            angles.beta,
            angles.gamma,
            rebuilt.approx_eq(&m, 1e-4),
            angles.to_css_rotation_string()
        );
    }
    Ok(())
}
