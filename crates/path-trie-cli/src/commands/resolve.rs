use anyhow::Result;
use path_trie::Router;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Config;

/// One line of `match` output
#[derive(Debug, Serialize, PartialEq)]
pub struct Resolution<'a> {
    pub path: &'a str,
    pub matched: bool,
    pub handler: Option<&'a str>,
    pub params: BTreeMap<String, String>,
}

pub fn execute(config: &Config, paths: &[String]) -> Result<()> {
    let router = config.build_router()?;

    for path in paths {
        println!("{}", serde_json::to_string(&resolve(&router, path))?);
    }

    Ok(())
}

/// Resolves a path; params are sorted for stable output
pub fn resolve<'a>(router: &'a Router<String>, path: &'a str) -> Resolution<'a> {
    match router.match_route(path) {
        Some(route_match) => Resolution {
            path,
            matched: true,
            handler: Some(route_match.payload.as_str()),
            params: route_match.params.into_iter().collect(),
        },
        None => Resolution {
            path,
            matched: false,
            handler: None,
            params: BTreeMap::new(),
        },
    }
}
