use levelctl::app;
use levelctl::error::LevelCtlError;

#[tokio::main]
async fn main() -> Result<(), LevelCtlError> {
    app::run().await
}
