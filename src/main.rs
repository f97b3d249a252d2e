use campus_helper::config::HelperConfig;
use campus_helper::error::Result;
use campus_helper::{check_for_applicable_wizard, wizard_name};
use dotenv::dotenv;
use log::{error, info};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = HelperConfig::new()?;
    env_logger::Builder::new()
        .filter_level(config.log.level_filter()?)
        .init();

    let navigatum = config.navigatum_client()?;
    let http_client = config.http_client()?;
    info!("Searching rooms at {}.", navigatum.search_url());

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    while let Some(message) = lines.next_line().await? {
        let mut reply = String::new();

        if let Some(name) = check_for_applicable_wizard(&message).and_then(wizard_name) {
            reply.push_str(&format!("wizard: {}\n", name));
        }

        match navigatum.find_room_id(&http_client, &message).await {
            Ok(Some(room_id)) => reply.push_str(&format!("room: {}\n", room_id)),
            Ok(None) => {}
            Err(e) => {
                error!("Room lookup failed: {}", e);
                reply.push_str("error: room lookup failed\n");
            }
        }

        if reply.is_empty() {
            reply.push_str("nothing found\n");
        }
        stdout.write_all(reply.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
