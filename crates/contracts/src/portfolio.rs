use serde::{Deserialize, Serialize};

/// Строка сводной таблицы портфеля (`GET /api/portfolio`).
///
/// Все денежные поля считает бэкенд по текущей котировке.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub capital_invested: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub profit_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_wire_field_names() {
        let json = r#"{
            "symbol": "GOOGL",
            "shares": 5.0,
            "purchase_price": 2800.0,
            "capital_invested": 14000.0,
            "current_price": 2900.0,
            "current_value": 14500.0,
            "profit_loss": 500.0
        }"#;
        let item: PortfolioItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.symbol, "GOOGL");
        assert_eq!(item.profit_loss, 500.0);
    }
}
