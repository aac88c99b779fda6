//! HTTP-вызовы страницы продаж.

use crate::shared::api_utils::{fetch_json, put_json};
use contracts::sales::SaleId;
use contracts::{Sale, SaleCalculation, SaleUpdate};

pub async fn fetch_sales() -> Result<Vec<Sale>, String> {
    fetch_json("/api/sales").await
}

pub async fn update_sale(id: SaleId, update: &SaleUpdate) -> Result<Sale, String> {
    put_json(&format!("/api/sale/{}", id), update).await
}

pub async fn fetch_sale_calculation(id: SaleId) -> Result<SaleCalculation, String> {
    fetch_json(&format!("/sale-calculation/{}", id)).await
}
