mod cli;
mod commands;
mod infra;
mod page;
mod routes;
mod server;

use flames::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
