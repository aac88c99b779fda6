use serde::{Deserialize, Serialize};

/// Уникальный идентификатор продажи (целочисленный, выдаётся бэкендом)
pub type SaleId = i64;

/// Полная запись о продаже, как её возвращает `PUT /api/sale/{id}`
/// и `GET /api/sales`.
///
/// `sale_date` приходит строкой `DD MMM YYYY` — это формат отображения,
/// фронтенд конвертирует его только на границе формы редактирования.
/// Вычисляемые поля (`total_sale_value`, `performance`, `profit`)
/// считает бэкенд, фронтенд их не пересчитывает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub ticker: String,
    pub ticker_id: i64,
    pub sale_date: String,
    pub shares: f64,
    pub sale_price: f64,
    pub operation_cost: f64,
    pub withheld_tax: f64,
    pub total_sale_value: f64,
    pub performance: f64,
    pub profit: f64,
}

/// Тело запроса `PUT /api/sale/{id}`.
///
/// `sale_date` здесь уже в ISO-формате `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleUpdate {
    pub ticker_id: i64,
    pub sale_date: String,
    pub shares: f64,
    pub sale_price: f64,
    pub operation_cost: f64,
    pub withheld_tax: f64,
}

/// Одна партия покупки, участвующая в расчёте средневзвешенной цены.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLot {
    pub date: String,
    pub shares: f64,
    pub price: f64,
    pub total: f64,
}

/// Ответ `GET /sale-calculation/{id}`: разбор расчёта прибыли продажи
/// по средневзвешенной цене покупки (WAC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCalculation {
    pub ticker: String,
    pub sale_date: String,
    pub shares: f64,
    pub sale_price: f64,
    pub purchases: Vec<PurchaseLot>,
    pub total_capital: f64,
    pub total_shares: f64,
    pub wac: f64,
    pub profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Имена полей — это контракт с бэкендом, фиксируем их явно.
    #[test]
    fn sale_wire_field_names() {
        let json = r#"{
            "id": 7,
            "ticker": "AAPL",
            "ticker_id": 3,
            "sale_date": "10 Jan 2023",
            "shares": 2.5,
            "sale_price": 150.0,
            "operation_cost": 1.5,
            "withheld_tax": 0.0,
            "total_sale_value": 373.5,
            "performance": 12.34,
            "profit": 41.2
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.id, 7);
        assert_eq!(sale.ticker, "AAPL");
        assert_eq!(sale.sale_date, "10 Jan 2023");
        assert_eq!(sale.total_sale_value, 373.5);
    }

    #[test]
    fn sale_update_serializes_iso_date() {
        let update = SaleUpdate {
            ticker_id: 3,
            sale_date: "2023-01-10".to_string(),
            shares: 2.5,
            sale_price: 150.0,
            operation_cost: 0.0,
            withheld_tax: 0.0,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["ticker_id"], 3);
        assert_eq!(json["sale_date"], "2023-01-10");
    }

    #[test]
    fn calculation_with_empty_purchases() {
        let json = r#"{
            "ticker": "MSFT",
            "sale_date": "02 Mar 2023",
            "shares": 1.0,
            "sale_price": 300.0,
            "purchases": [],
            "total_capital": 0.0,
            "total_shares": 0.0,
            "wac": 0.0,
            "profit": 0.0
        }"#;
        let calc: SaleCalculation = serde_json::from_str(json).unwrap();
        assert!(calc.purchases.is_empty());
    }
}
