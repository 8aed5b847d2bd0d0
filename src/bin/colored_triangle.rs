//! A second vertex attribute carrying a color per corner.
//!
//! The vertex shader forwards the color and the rasterizer interpolates it
//! across the triangle, so the fragment shader sees a blend of all three.

use hello_world_graphics::{
    GfxError,
    abs::{App, Mesh},
    config::WindowConfig,
    geometry, shader_program,
};

fn run() -> Result<(), GfxError> {
    let mut app = App::new(&WindowConfig::bundled()?.with_title("Colored Triangle"))?;

    let program = shader_program!(app.gl, "vertex_color")?;
    let triangle = Mesh::new(&app.gl, &geometry::COLORED_TRIANGLE)?;

    app.run(|_| {
        program.use_program();
        triangle.draw();
    });
    Ok(())
}

fn main() {
    hello_world_graphics::launch("colored_triangle", run)
}
