//! Утилиты форматирования чисел для таблиц
//!
//! Денежные значения рендерятся с фиксированным числом знаков и суффиксом
//! `€` — ровно так же их потом обратно разбирает числовая ветка сортировки.

/// Форматирует число с указанным количеством знаков после запятой
pub fn format_decimals(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Денежное значение: фиксированные знаки + суффикс `€`
///
/// # Примеры
///
/// ```
/// let formatted = frontend::shared::number_format::format_eur(150.0, 2);
/// assert_eq!(formatted, "150.00€");
/// ```
pub fn format_eur(value: f64, decimals: usize) -> String {
    format!("{}€", format_decimals(value, decimals))
}

/// Процентное значение, 2 знака + суффикс `%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Количество акций: 6 знаков, дробные доли значимы
pub fn format_shares(value: f64) -> String {
    format_decimals(value, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(150.0, 4), "150.0000€");
        assert_eq!(format_eur(1234.567, 2), "1234.57€");
        assert_eq!(format_eur(-12.5, 2), "-12.50€");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345), "12.35%");
        assert_eq!(format_percent(-3.0), "-3.00%");
    }

    #[test]
    fn test_format_shares() {
        assert_eq!(format_shares(2.5), "2.500000");
        assert_eq!(format_shares(0.000001), "0.000001");
    }
}
