pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log collectors render ANSI color codes as noise.
        .with_ansi(false)
        // collectors stamp their own ingestion time.
        .without_time()
        .json()
        .init();
}
