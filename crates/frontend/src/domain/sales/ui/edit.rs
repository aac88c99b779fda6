use crate::domain::sales::api;
use crate::shared::alerts::report_error;
use crate::shared::date_utils::{display_to_input_date, input_to_iso_date, is_valid_input_date};
use contracts::{Sale, SaleUpdate};
use leptos::prelude::*;

/// Пустое или нечитаемое поле стоимости трактуется как ноль —
/// так же вела себя исходная форма.
fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

fn parse_positive(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Some(v),
        _ => None,
    }
}

/// Форма редактирования продажи.
///
/// Дата вводится как `DD/MM/YYYY` и конвертируется в ISO на отправке.
/// При ошибке бэкенда модал остаётся открытым, состояние строки
/// не меняется; `on_saved` получает уже пересчитанную запись.
#[component]
#[allow(non_snake_case)]
pub fn SaleEditForm(
    sale: Sale,
    on_saved: Callback<Sale>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let sale_id = sale.id;
    let ticker_id = sale.ticker_id;
    let ticker = sale.ticker.clone();

    let date_input = RwSignal::new(display_to_input_date(&sale.sale_date));
    let shares_input = RwSignal::new(sale.shares.to_string());
    let price_input = RwSignal::new(sale.sale_price.to_string());
    let cost_input = RwSignal::new(sale.operation_cost.to_string());
    let tax_input = RwSignal::new(sale.withheld_tax.to_string());
    let saving = RwSignal::new(false);

    let submit = move |_| {
        if saving.get() {
            return;
        }

        let date = date_input.get();
        if !is_valid_input_date(&date) {
            report_error("Fecha inválida (DD/MM/YYYY)", &date);
            return;
        }
        let shares = match parse_positive(&shares_input.get()) {
            Some(v) => v,
            None => {
                report_error("Valor inválido", "participaciones");
                return;
            }
        };
        let sale_price = match parse_positive(&price_input.get()) {
            Some(v) => v,
            None => {
                report_error("Valor inválido", "precio de venta");
                return;
            }
        };

        let update = SaleUpdate {
            ticker_id,
            sale_date: input_to_iso_date(&date),
            shares,
            sale_price,
            operation_cost: parse_or_zero(&cost_input.get()),
            withheld_tax: parse_or_zero(&tax_input.get()),
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_sale(sale_id, &update).await {
                Ok(updated) => on_saved.run(updated),
                Err(e) => {
                    // модал остаётся открытым, можно поправить и повторить
                    report_error("Error al actualizar la venta", &e);
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal__content">
            <h2 class="modal__title">{format!("Editar venta — {}", ticker)}</h2>

            <div class="form">
                <div class="form__group">
                    <label class="form__label">{"Fecha de venta (DD/MM/YYYY)"}</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=date_input
                        on:input=move |ev| date_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Participaciones"}</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=shares_input
                        on:input=move |ev| shares_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Precio de venta"}</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=price_input
                        on:input=move |ev| price_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Coste de operación"}</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=cost_input
                        on:input=move |ev| cost_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Retención fiscal"}</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=tax_input
                        on:input=move |ev| tax_input.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="modal__actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=submit
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_costs_default_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("  "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("1.5"), 1.5);
    }

    #[test]
    fn shares_and_price_must_be_positive() {
        assert_eq!(parse_positive("2.5"), Some(2.5));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive(""), None);
    }
}
