use crate::domain::summary::api;
use crate::shared::components::table::{
    apply_permutation, sort_permutation, SortableHeaderCell, TableSort,
};
use crate::shared::number_format::{format_decimals, format_eur};
use contracts::PortfolioItem;
use leptos::prelude::*;

/// Индекс колонки "Beneficio/Pérdida" — по ней сводка сортируется при загрузке.
const PROFIT_COLUMN: usize = 6;

fn portfolio_cells(item: &PortfolioItem) -> Vec<String> {
    vec![
        item.symbol.clone(),
        format_decimals(item.shares, 0),
        format_eur(item.purchase_price, 2),
        format_eur(item.capital_invested, 2),
        format_eur(item.current_price, 2),
        format_eur(item.current_value, 2),
        format_eur(item.profit_loss, 2),
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
pub fn HomePage() -> impl IntoView {
    let rows = RwSignal::new(Vec::<PortfolioItem>::new());
    let sort = RwSignal::new(None::<TableSort>);
    let (error, set_error) = signal::<Option<String>>(None);

    let resort = move |next: TableSort| {
        sort.set(Some(next));
        rows.update(|items| {
            let cells: Vec<Vec<String>> = items.iter().map(portfolio_cells).collect();
            let order = sort_permutation(&cells, &next);
            *items = apply_permutation(items, &order);
        });
    };

    let handle_sort = move |column: usize| {
        resort(TableSort::toggle(sort.get(), column));
    };

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_portfolio().await {
                Ok(v) => {
                    rows.set(v);
                    set_error.set(None);
                    // два клика по колонке прибыли: сначала лидеры портфеля
                    handle_sort(PROFIT_COLUMN);
                    handle_sort(PROFIT_COLUMN);
                }
                Err(e) => {
                    log::error!("fetch_portfolio: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    fetch();

    let total_capital = move || {
        let total: f64 = rows.get().iter().map(|i| i.capital_invested).sum();
        format_eur(total, 2)
    };

    let on_sort = Callback::new(handle_sort);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Resumen del portafolio"}</h1>
                    <p class="header__subtitle">
                        {"Capital invertido: "}<strong>{total_capital}</strong>
                    </p>
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
                            <SortableHeaderCell label="Símbolo" column=0 sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Participaciones" column=1 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Precio compra" column=2 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Capital invertido" column=3 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Precio actual" column=4 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Valor actual" column=5 sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Beneficio/Pérdida" column=6 sort=sort on_sort=on_sort align="right" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|item| {
                            let cells = portfolio_cells(&item);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell"><strong>{cells[0].clone()}</strong></td>
                                    <td class="table__cell">{cells[1].clone()}</td>
                                    <td class="table__cell">{cells[2].clone()}</td>
                                    <td class="table__cell">{cells[3].clone()}</td>
                                    <td class="table__cell">{cells[4].clone()}</td>
                                    <td class="table__cell">{cells[5].clone()}</td>
                                    <td class=signed_cell_class(item.profit_loss)>{cells[6].clone()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
