//! A rectangle from four vertices and six indices drawn with `glDrawElements`.
//!
//! Drawn in wireframe so the shared diagonal is visible.

use hello_world_graphics::{
    GfxError,
    abs::{App, Mesh},
    config::WindowConfig,
    geometry, shader_program,
};

fn run() -> Result<(), GfxError> {
    let config = WindowConfig::bundled()?
        .with_title("Indexed Rectangle")
        .with_wireframe(true);
    let mut app = App::new(&config)?;

    let program = shader_program!(app.gl, "solid_orange")?;
    let rectangle = Mesh::indexed(&app.gl, &geometry::RECTANGLE, &geometry::RECTANGLE_INDICES)?;
    log::debug!("rectangle draws with {:?}", rectangle.draw_call());

    app.run(|_| {
        program.use_program();
        rectangle.draw();
    });
    Ok(())
}

fn main() {
    hello_world_graphics::launch("indexed_rectangle", run)
}
