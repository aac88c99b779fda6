use crate::domain::sales::api;
use crate::domain::sales::ui::calculation::SaleCalculationDetail;
use crate::domain::sales::ui::edit::SaleEditForm;
use crate::shared::components::table::{
    apply_permutation, sort_permutation, SortableHeaderCell, TableSort,
};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_eur, format_percent, format_shares};
use contracts::Sale;
use leptos::prelude::*;

/// Индекс колонки "Fecha venta" — по ней таблица сортируется при загрузке.
const SALE_DATE_COLUMN: usize = 1;

/// Отображаемый текст ячеек строки, в порядке колонок таблицы.
/// Сортировка работает ровно по этим строкам, как по содержимому DOM.
fn sale_cells(sale: &Sale) -> Vec<String> {
    vec![
        sale.ticker.clone(),
        sale.sale_date.clone(),
        format_shares(sale.shares),
        format_eur(sale.sale_price, 4),
        format_eur(sale.operation_cost, 2),
        format_eur(sale.withheld_tax, 2),
        format_eur(sale.total_sale_value, 2),
        format_percent(sale.performance),
        format_eur(sale.profit, 2),
    ]
}

fn signed_cell_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "table__cell table__cell--positive"
    } else {
        "table__cell table__cell--negative"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SalesPage() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Sale>::new());
    let sort = RwSignal::new(None::<TableSort>);
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let resort = move |next: TableSort| {
        sort.set(Some(next));
        rows.update(|items| {
            let cells: Vec<Vec<String>> = items.iter().map(sale_cells).collect();
            let order = sort_permutation(&cells, &next);
            *items = apply_permutation(items, &order);
        });
    };

    let handle_sort = move |column: usize| {
        resort(TableSort::toggle(sort.get(), column));
    };

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_sales().await {
                Ok(v) => {
                    rows.set(v);
                    set_error.set(None);
                    // то же, что два клика по заголовку даты: свежие продажи сверху
                    handle_sort(SALE_DATE_COLUMN);
                    handle_sort(SALE_DATE_COLUMN);
                }
                Err(e) => {
                    log::error!("fetch_sales: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let open_edit_modal = move |sale: Sale| {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("sale-edit-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |updated: Sale| {
                        // обновляем строку на месте, без перезагрузки и пересортировки
                        rows.update(|items| {
                            if let Some(row) = items.iter_mut().find(|r| r.id == updated.id) {
                                *row = updated.clone();
                            }
                        });
                        handle.close();
                    }
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <SaleEditForm
                        sale=sale.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let open_calculation_modal = move |sale_id: i64| {
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            Some("sale-calculation-modal".to_string()),
            move |handle| {
                let on_close = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! { <SaleCalculationDetail sale_id=sale_id on_close=on_close /> }.into_any()
            },
        );
    };

    fetch();

    let on_sort = Callback::new(handle_sort);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Ventas"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell label="Ticker" column=0 sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Fecha venta" column=1 sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Participaciones" column=2 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Precio venta" column=3 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Coste operación" column=4 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Retención" column=5 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Valor total" column=6 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Rendimiento" column=7 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Beneficio" column=8 sort=sort on_sort=on_sort align="right" />
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let sale_for_edit = row.clone();
                            let sale_id = row.id;
                            let cells = sale_cells(&row);
                            view! {
                                <tr class="table__row" data-id=row.id.to_string()>
                                    <td class="table__cell"><strong>{cells[0].clone()}</strong></td>
                                    <td class="table__cell">{cells[1].clone()}</td>
                                    <td class="table__cell">{cells[2].clone()}</td>
                                    <td class="table__cell">{cells[3].clone()}</td>
                                    <td class="table__cell">{cells[4].clone()}</td>
                                    <td class="table__cell">{cells[5].clone()}</td>
                                    <td class="table__cell">{cells[6].clone()}</td>
                                    <td class=signed_cell_class(row.performance)>{cells[7].clone()}</td>
                                    <td class=signed_cell_class(row.profit)>{cells[8].clone()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| open_edit_modal(sale_for_edit.clone())
                                        >
                                            {"Editar"}
                                        </button>
                                        <button
                                            class="button button--small button--secondary"
                                            on:click=move |_| open_calculation_modal(sale_id)
                                        >
                                            {"Detalle"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sale() -> Sale {
        Sale {
            id: 1,
            ticker: "AAPL".to_string(),
            ticker_id: 3,
            sale_date: "10 Jan 2023".to_string(),
            shares: 2.5,
            sale_price: 150.0,
            operation_cost: 1.5,
            withheld_tax: 0.0,
            total_sale_value: 373.5,
            performance: 12.34,
            profit: 41.2,
        }
    }

    #[test]
    fn cells_render_like_the_table() {
        let cells = sale_cells(&sample_sale());
        assert_eq!(cells[0], "AAPL");
        assert_eq!(cells[1], "10 Jan 2023");
        assert_eq!(cells[2], "2.500000");
        assert_eq!(cells[3], "150.0000€");
        assert_eq!(cells[7], "12.34%");
        assert_eq!(cells[8], "41.20€");
    }

    // Первая загрузка имитирует двойной клик по колонке даты:
    // asc, потом desc — свежая продажа оказывается первой.
    #[test]
    fn double_toggle_on_date_column_is_descending() {
        let first = TableSort::toggle(None, SALE_DATE_COLUMN);
        let second = TableSort::toggle(Some(first), SALE_DATE_COLUMN);
        assert!(!second.ascending);
        assert_eq!(second.column, SALE_DATE_COLUMN);

        let mut newer = sample_sale();
        newer.id = 2;
        newer.sale_date = "02 Mar 2023".to_string();
        let cells: Vec<Vec<String>> =
            [sample_sale(), newer].iter().map(sale_cells).collect();
        assert_eq!(sort_permutation(&cells, &second), vec![1, 0]);
    }
}
