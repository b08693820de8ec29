//! Short link commands

use colored::Colorize;

use tinysrc::client::models::DATE_FORMAT;
use tinysrc::error::Result;
use tinysrc::{
    LinkActivationRequest, LinkApi, LinkRequest, LinkResponse, LinkUserResponse, ListUrlsRequest,
};

use crate::cli::stat::parse_time;
use crate::cli::{OutputFormat, PaginationArgs};
use crate::models::{LinkDisplay, LinkSummaryDisplay};
use crate::output;

/// Run `link create`.
pub async fn create<C: LinkApi + ?Sized>(
    api: &C,
    url: &str,
    password: Option<&str>,
    expires: Option<&str>,
    auth_required: bool,
    format: OutputFormat,
) -> Result<String> {
    let mut request = LinkRequest::new(url);
    if auth_required {
        request = request.auth_required();
    }
    if let Some(password) = password {
        request = request.password(password);
    }
    if let Some(expires) = expires {
        let expires = parse_time(expires, true)?;
        request = request.expiration_time(expires.format(DATE_FORMAT).to_string());
    }

    let link = api.create_short_link(&request).await?;
    log::debug!("Created short link {}", link.url);
    output::render_one::<LinkResponse, LinkSummaryDisplay>(&link, format)
}

/// Run `link list`.
pub async fn list<C: LinkApi + ?Sized>(
    api: &C,
    query: Option<&str>,
    pagination: &PaginationArgs,
    default_limit: u32,
    format: OutputFormat,
) -> Result<String> {
    let mut params = ListUrlsRequest::new(pagination.limit_or(default_limit), pagination.page);
    if let Some(query) = query {
        params = params.query(query);
    }

    let page = api.list_links(&params).await?;
    let mut out = output::render_list::<LinkUserResponse, LinkDisplay>(&page.data, format)?;
    if format == OutputFormat::Table && !page.is_empty() {
        out.push_str(&format!(
            "\nPage {}: {} of {} links",
            params.page,
            page.len(),
            page.total
        ));
    }
    Ok(out)
}

/// Run `link get`.
pub async fn get<C: LinkApi + ?Sized>(api: &C, hash: &str, format: OutputFormat) -> Result<String> {
    let link = api.get_link(hash).await?;
    output::render_one::<LinkUserResponse, LinkDisplay>(&link, format)
}

/// Run `link enable` or `link disable`.
pub async fn set_active<C: LinkApi + ?Sized>(api: &C, hash: &str, active: bool) -> Result<String> {
    api.set_active(hash, &LinkActivationRequest::new(active))
        .await?;

    let state = if active { "enabled" } else { "disabled" };
    Ok(format!("{} Link {} {}", "✓".green(), hash.bold(), state))
}
