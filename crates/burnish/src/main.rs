//! Headless driver: load a page, install the enhancer, run population and
//! print the resulting DOM snapshot.

use anyhow::{Error, anyhow};
use enhancer::{EnhanceConfig, Page};
use log::info;
use std::env;
use tokio::runtime::Runtime;
use url::Url;

fn main() -> Result<(), Error> {
    env_logger::init();

    let arg = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: burnish <url-or-path>"))?;
    let url = parse_target(&arg)?;

    let runtime = Runtime::new()?;
    let mut page = runtime.block_on(Page::load(url, EnhanceConfig::from_env()))?;
    page.enhance()?;
    runtime.block_on(page.populate_from_data());

    info!("enhanced {}", page.url());
    println!("{}", page.dom().to_json_string());
    Ok(())
}

/// Accept full URLs or bare filesystem paths.
fn parse_target(arg: &str) -> Result<Url, Error> {
    if let Ok(url) = Url::parse(arg) {
        return Ok(url);
    }
    let path = env::current_dir()?.join(arg);
    Url::from_file_path(&path).map_err(|()| anyhow!("not a loadable path: {}", path.display()))
}
