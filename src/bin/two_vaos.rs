//! Two triangles, each with its own vertex array, buffer and shader program.

use hello_world_graphics::{
    GfxError,
    abs::{App, Mesh},
    config::WindowConfig,
    geometry, shader_program,
};

fn run() -> Result<(), GfxError> {
    let mut app = App::new(&WindowConfig::bundled()?.with_title("Two VAOs"))?;

    let orange = shader_program!(app.gl, "solid_orange")?;
    let yellow = shader_program!(app.gl, "solid_yellow")?;
    let left = Mesh::new(&app.gl, &geometry::LEFT_TRIANGLE)?;
    let right = Mesh::new(&app.gl, &geometry::RIGHT_TRIANGLE)?;

    app.run(|_| {
        orange.use_program();
        left.draw();

        yellow.use_program();
        right.draw();
    });
    Ok(())
}

fn main() {
    hello_world_graphics::launch("two_vaos", run)
}
