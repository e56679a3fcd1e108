use std::path::Path;

use structopt::StructOpt;
use tokio::io::AsyncReadExt;

mod error;

use error::Error;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mailjet-send",
    about = "Send a plain-text email through Mailjet. The body is read from stdin."
)]
struct Opt {
    #[structopt(short, long)]
    from: String,

    #[structopt(long)]
    from_name: Option<String>,

    #[structopt(short, long)]
    to: String,

    #[structopt(long)]
    to_name: Option<String>,

    #[structopt(short, long)]
    reply_to: Option<String>,

    #[structopt(short, long, default_value = "")]
    subject: String,

    /// Validate the message without delivering it
    #[structopt(long)]
    sandbox: bool,

    /// Path to a TOML settings file
    #[structopt(short, long)]
    config: Option<String>,

    /// Files to attach. JPEGs are sent as-is, everything else is zipped.
    attachments: Vec<String>,
}

async fn read_attachment(path: &str) -> Result<mailjet::NamedFile, Error> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Attachment(path.to_string(), e))?;

    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    Ok(mailjet::NamedFile::new(name, data)?)
}

async fn process(opt: Opt) -> Result<(), Error> {
    let settings = mailjet::config::load_settings(opt.config.as_deref())?;
    let client = mailjet::Client::from_settings(&settings)?;

    let mut body = String::new();
    tokio::io::stdin()
        .read_to_string(&mut body)
        .await
        .map_err(Error::Stdin)?;

    let mut message = mailjet::Message::new(opt.from, opt.to, opt.subject, body)
        .with_sandbox(opt.sandbox || settings.sandbox);

    if let Some(name) = opt.from_name {
        message = message.with_from_name(name);
    }
    if let Some(name) = opt.to_name {
        message = message.with_to_name(name);
    }
    if let Some(address) = opt.reply_to {
        message = message.with_reply_to(address);
    }

    for path in &opt.attachments {
        message = message.with_attachment(read_attachment(path).await?);
    }

    log::info!(
        "Sending message to {} with {} attachment(s)",
        message.to,
        message.attachments.len()
    );

    client.send(message).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // Init logger
    env_logger::builder().format_timestamp_micros().init();

    let opt = Opt::from_args();

    match process(opt).await {
        Ok(()) => log::info!("Message sent"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
