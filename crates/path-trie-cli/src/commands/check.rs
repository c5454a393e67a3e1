use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let router = config.build_router()?;

    println!("{}", "Route table is valid".green().bold());
    println!();
    println!("Routes: {}", router.routes_defined().to_string().cyan());
    println!("Trie nodes: {}", router.node_count().to_string().cyan());
    println!();
    print!("{}", router.root());

    Ok(())
}
