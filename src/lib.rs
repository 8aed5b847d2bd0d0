//! Shared setup for the hello-world-graphics lessons.
//!
//! Each binary opens a window through [`abs::App`], builds its shaders and
//! meshes, and hands a draw closure to [`abs::App::run`]. The lessons only
//! share this plumbing; their vertex data lives in [`geometry`].

pub mod abs;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;

pub use error::GfxError;

/// Runs a lesson and terminates the process with its exit code.
///
/// Errors are logged before exiting with [`error::FAILURE_EXIT_CODE`].
pub fn launch(lesson: &str, run: impl FnOnce() -> Result<(), GfxError>) -> ! {
    logging::init(logging::default_level());
    log::info!("starting {}", lesson);

    let result = run();
    if let Err(e) = &result {
        log::error!("{}: {}", lesson, e);
    }
    std::process::exit(error::exit_code(&result))
}
