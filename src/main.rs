//! The first lesson: open a window and clear it every frame.

use hello_world_graphics::{abs::App, config::WindowConfig};

fn main() {
    hello_world_graphics::launch("hello-world-graphics", || {
        let mut app = App::new(&WindowConfig::bundled()?)?;
        log::debug!("clear color {:?}", app.config().clear_color);

        app.run(|_| {});
        Ok(())
    })
}
