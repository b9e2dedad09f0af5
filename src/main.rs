use guess_tally::collector;
use guess_tally::config::{Config, ConfigError, CREDENTIAL_VARS};
use guess_tally::output;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingCredentials(missing)) => {
            output::missing_credentials(&CREDENTIAL_VARS, &missing);
            std::process::exit(2);
        }
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(2);
        }
    };

    output::banner();
    output::config_item("API", &config.api_base);
    output::config_item("Query", &config.search_query);
    output::config_item(
        "Target posts",
        &config
            .tweet_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::config_item("Search limit", &config.search_limit.to_string());
    output::section("Collecting guesses");
    output::info("Replies without a readable guess will be shown here for manual entry.");

    match collector::run(&config).await {
        Ok(summary) => output::run_summary(&summary),
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
