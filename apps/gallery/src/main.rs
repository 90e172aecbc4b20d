#![windows_subsystem = "windows"]

use glint_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    glint_gallery::GalleryApp::new()
        .with_title("Glint component gallery")
        .with_size(900.0, 600.0)
        .launch(glint_gallery::app);

    Ok(())
}
