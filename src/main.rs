#[tokio::main]
async fn main() {
    let exit_code = fsconform::app::startup::startup().await;
    std::process::exit(exit_code);
}
