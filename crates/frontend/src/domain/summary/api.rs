//! HTTP-вызовы сводной страницы портфеля.

use crate::shared::api_utils::fetch_json;
use contracts::PortfolioItem;

pub async fn fetch_portfolio() -> Result<Vec<PortfolioItem>, String> {
    fetch_json("/api/portfolio").await
}
