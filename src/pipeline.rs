use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::llm::call_openai;
use crate::models::ScrapeRequest;
use crate::output::write_result;
use crate::proxy::{fetch_proxy, to_transport_proxy};
use crate::scraper::{build_client, extract_content, fetch_html, parse_target};

/// Runs one scrape: optional proxy lookup, page fetch, extraction, completion, write.
///
/// Each stage only starts once the previous one has succeeded. `request.url` is
/// updated to the URL the page was finally served from.
pub async fn run(config: &Config, request: &mut ScrapeRequest, output: &Path) -> Result<()> {
    let direct = build_client(None)?;

    let target = parse_target(&request.url)?;
    request.url = target.to_string();

    let page_client = if request.use_proxy {
        let candidate = fetch_proxy(&direct, &config.proxy_list_url).await?;
        let proxy = to_transport_proxy(&candidate)?;
        println!("Proxy set to: {}", candidate.address);
        build_client(Some(proxy))?
    } else {
        direct.clone()
    };

    println!("Visiting: {}", request.url);
    let page = fetch_html(&page_client, target).await?;
    if page.url.as_str() != request.url {
        tracing::info!(from = %request.url, to = %page.url, "request was redirected");
        request.url = page.url.to_string();
    }

    let content = extract_content(&page.html);
    tracing::info!(fragments = content.len(), url = %request.url, "page extracted");
    println!("Website scraped!");

    println!("Analysing with AI ...");
    let reply = call_openai(&direct, config, &content, &request.instruction).await?;

    write_result(output, reply.as_bytes())?;
    println!("Writing result to {}", output.display());

    Ok(())
}
