mod cli;
mod infra;
mod review;
mod routes;
mod server;

use quote_guard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
