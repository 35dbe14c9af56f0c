use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = bookmarks::cli::Cli::parse();

    if let Err(err) = bookmarks::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
