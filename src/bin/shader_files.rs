//! Shaders loaded from files at runtime, driven by uniforms.

use std::path::Path;

use glam::Vec4;
use hello_world_graphics::{
    GfxError,
    abs::{App, Mesh, ShaderProgram},
    config::WindowConfig,
    geometry,
};

fn run() -> Result<(), GfxError> {
    let mut app = App::new(&WindowConfig::bundled()?.with_title("Shader Files"))?;

    let shader_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders/uniform_color");
    let program = ShaderProgram::from_files(
        &app.gl,
        shader_dir.join("vert.glsl"),
        shader_dir.join("frag.glsl"),
    )?;
    let triangle = Mesh::new(&app.gl, &geometry::TRIANGLE)?;

    app.run(|time| {
        let green = time.sin() / 2.0 + 0.5;

        program.use_program();
        program.set_uniform("u_color", Vec4::new(0.0, green, 0.0, 1.0));
        program.set_uniform("u_time", time);
        triangle.draw();
    });
    Ok(())
}

fn main() {
    hello_world_graphics::launch("shader_files", run)
}
