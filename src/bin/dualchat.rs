#[path = "dualchat/app/mod.rs"]
mod app;
#[path = "dualchat/args.rs"]
mod args;
#[path = "dualchat/attachments.rs"]
mod attachments;
#[path = "dualchat/config/mod.rs"]
mod config;
#[path = "dualchat/logging.rs"]
mod logging;
#[path = "dualchat/render.rs"]
mod render;
#[path = "dualchat/repl.rs"]
mod repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
