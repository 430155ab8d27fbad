//! Lists a directory in a bucket and stats each file entry.
//!
//! ```sh
//! cargo run --example ls -- \
//!     --endpoint http://localhost:9000 \
//!     --access-key-id minioadmin \
//!     --secret-access-key minioadmin \
//!     --bucket blog \
//!     blog/
//! ```

use objfs::ObjectFs;
use objfs_aws::{AwsStore, Config};

use clap::Parser;
use tracing::debug;

#[derive(Debug, Parser)]
struct Opt {
    #[arg(long)]
    endpoint: String,

    #[arg(long)]
    access_key_id: String,

    #[arg(long)]
    secret_access_key: String,

    #[arg(long)]
    bucket: String,

    #[arg(long)]
    region: Option<String>,

    /// Directory to list; empty means the bucket root.
    #[arg(default_value = "")]
    path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opt = Opt::parse();
    debug!(?opt, "starting");

    let mut config = Config::new()
        .endpoint(opt.endpoint)
        .access_key_id(opt.access_key_id)
        .secret_access_key(opt.secret_access_key)
        .bucket(opt.bucket);
    if let Some(region) = opt.region {
        config = config.region(region);
    }

    let fs = ObjectFs::new(AwsStore::new(config)?);

    for entry in fs.read_dir(&opt.path).await? {
        if entry.is_dir() {
            println!("{}/", entry.name());
            continue;
        }
        let file = fs.open(entry.key()).await?;
        let meta = file.stat().await?;
        match meta.modified() {
            Some(modified) => println!("{}\t{}\t{}", entry.name(), meta.size(), modified),
            None => println!("{}\t{}", entry.name(), meta.size()),
        }
    }
    Ok(())
}
