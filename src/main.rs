// Tapfarmer - Main Entry Point
use clap::Parser;
use tapfarmer::auth::provider::LaunchUrlProvider;
use tapfarmer::auth::session::AuthSession;
use tapfarmer::client::GameApiClient;
use tapfarmer::config::TapfarmerConfig;
use tapfarmer::storage::UserAgentStore;
use tapfarmer::{Agent, LAUNCH_URL_FILE, USER_AGENTS_FILE, o_error, o_info, output_broker, transport};

#[derive(Parser, Debug)]
#[command(name = "tapfarmer", about = "Single-account automation agent for a Telegram clicker game")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config/tapfarmer.toml")]
    config: String,

    /// Output verbosity (0=actions only, 1=cycle progress, 2=request detail)
    #[arg(short, long, default_value_t = 1)]
    verbosity: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    output_broker::set_verbosity_level(cli.verbosity);

    let config = TapfarmerConfig::load_or_create(&cli.config)?;
    config.validate()?;
    config.print_summary();

    let session_name = config.account.session_name.clone();

    let mut agent_store = UserAgentStore::new(USER_AGENTS_FILE);
    let user_agent = agent_store.get_or_create(&session_name)?;

    let http_client = transport::build_client(&user_agent, config.account.proxy.as_deref())?;
    if let Some(proxy) = &config.account.proxy {
        transport::check_proxy(&http_client, &session_name, proxy).await;
    }

    let client = GameApiClient::new(http_client, &session_name);

    let launch_url_path = config
        .account
        .launch_url_file
        .clone()
        .unwrap_or_else(|| LAUNCH_URL_FILE.to_string());
    let provider = Box::new(LaunchUrlProvider::new(&launch_url_path));
    let auth = AuthSession::new(provider, &session_name);

    let mut agent = Agent::new(client, auth, config);

    tokio::select! {
        result = agent.run() => {
            if let Err(e) = result {
                o_error!("{} | Invalid session: {}", session_name, e);
                // Give the output broker a beat to drain before exit.
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            o_info!("{} | Shutdown requested, stopping", session_name);
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    }

    Ok(())
}
