//! One vertex buffer, one position attribute, one `glDrawArrays`.

use hello_world_graphics::{
    GfxError,
    abs::{App, Mesh},
    config::WindowConfig,
    geometry, shader_program,
};

fn run() -> Result<(), GfxError> {
    let mut app = App::new(&WindowConfig::bundled()?.with_title("Hello Triangle"))?;

    let program = shader_program!(app.gl, "solid_orange")?;
    let triangle = Mesh::new(&app.gl, &geometry::TRIANGLE)?;

    app.run(|_| {
        program.use_program();
        triangle.draw();
    });
    Ok(())
}

fn main() {
    hello_world_graphics::launch("hello_triangle", run)
}
