mod cli;
mod infra;
mod report;
mod routes;
mod server;

use rent_right::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
