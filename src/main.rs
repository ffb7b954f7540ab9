use spinpick::{app::App, plain, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Second frontend over the same core, no terminal takeover
    if std::env::args().any(|arg| arg == "--plain") {
        return plain::run().await;
    }

    let mut app = App::new()?;
    app.init()?;
    let result = app.run().await;

    // Dropping the app restores the terminal before anything prints
    drop(app);
    if let Err(e) = result {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
