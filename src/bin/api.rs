pub use contact_form::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    contact_form::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
