use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the quiz API
    #[arg(short, long, default_value = "http://localhost:5000/api")]
    api_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = quizdesk::run(args.api_url).await {
        eprintln!("Error running quizdesk: {}", e);
        std::process::exit(1);
    }
}
