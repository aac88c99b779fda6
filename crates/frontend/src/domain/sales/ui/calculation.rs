use crate::domain::sales::api;
use crate::shared::alerts::report_error;
use crate::shared::number_format::{format_eur, format_shares};
use contracts::sales::SaleId;
use contracts::SaleCalculation;
use leptos::prelude::*;

fn signed_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "calc__value calc__value--positive"
    } else {
        "calc__value calc__value--negative"
    }
}

/// Детализация расчёта прибыли продажи по средневзвешенной цене (WAC).
///
/// Открывается сразу со строкой "Cargando...", данные подтягиваются
/// следом; при ошибке показываем alert и модал закрывается сам.
#[component]
#[allow(non_snake_case)]
pub fn SaleCalculationDetail(sale_id: SaleId, on_close: Callback<()>) -> impl IntoView {
    let data = RwSignal::new(None::<SaleCalculation>);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_sale_calculation(sale_id).await {
            Ok(calc) => data.set(Some(calc)),
            Err(e) => {
                report_error("Error al cargar los detalles del cálculo", &e);
                on_close.run(());
            }
        }
    });

    view! {
        <div class="modal__content">
            <h2 class="modal__title">{"Detalle del cálculo"}</h2>

            {move || match data.get() {
                None => view! {
                    <p class="calc__loading">{"Cargando..."}</p>
                }
                .into_any(),
                Some(calc) => {
                    let diff_per_share = calc.sale_price - calc.wac;
                    view! {
                        <div class="calc">
                            <section class="calc__section">
                                <h3 class="calc__section-title">{"Venta"}</h3>
                                <dl class="calc__grid">
                                    <dt>{"Ticker"}</dt>
                                    <dd><strong>{calc.ticker.clone()}</strong></dd>
                                    <dt>{"Fecha"}</dt>
                                    <dd>{calc.sale_date.clone()}</dd>
                                    <dt>{"Participaciones"}</dt>
                                    <dd>{format_shares(calc.shares)}</dd>
                                    <dt>{"Precio de venta"}</dt>
                                    <dd>{format_eur(calc.sale_price, 4)}</dd>
                                </dl>
                            </section>

                            <section class="calc__section">
                                <h3 class="calc__section-title">{"Compras anteriores"}</h3>
                                <table class="table__data">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Fecha"}</th>
                                            <th class="table__header-cell">{"Participaciones"}</th>
                                            <th class="table__header-cell">{"Precio"}</th>
                                            <th class="table__header-cell">{"Total"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {if calc.purchases.is_empty() {
                                            view! {
                                                <tr>
                                                    <td class="table__cell" colspan="4">
                                                        {"No hay compras registradas antes de esta fecha"}
                                                    </td>
                                                </tr>
                                            }
                                            .into_any()
                                        } else {
                                            calc.purchases.iter().map(|p| view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{p.date.clone()}</td>
                                                    <td class="table__cell">{format_shares(p.shares)}</td>
                                                    <td class="table__cell">{format_eur(p.price, 4)}</td>
                                                    <td class="table__cell">{format_eur(p.total, 2)}</td>
                                                </tr>
                                            }).collect_view().into_any()
                                        }}
                                    </tbody>
                                </table>
                            </section>

                            <section class="calc__section">
                                <h3 class="calc__section-title">{"Precio medio ponderado"}</h3>
                                <dl class="calc__grid">
                                    <dt>{"Capital total"}</dt>
                                    <dd>{format_eur(calc.total_capital, 4)}</dd>
                                    <dt>{"Participaciones totales"}</dt>
                                    <dd>{format_shares(calc.total_shares)}</dd>
                                    <dt>{"WAC"}</dt>
                                    <dd><strong>{format_eur(calc.wac, 4)}</strong></dd>
                                </dl>
                            </section>

                            <section class="calc__section">
                                <h3 class="calc__section-title">{"Beneficio"}</h3>
                                <dl class="calc__grid">
                                    <dt>{"Precio de venta"}</dt>
                                    <dd>{format_eur(calc.sale_price, 4)}</dd>
                                    <dt>{"WAC"}</dt>
                                    <dd>{format_eur(calc.wac, 4)}</dd>
                                    <dt>{"Diferencia por acción"}</dt>
                                    <dd class=signed_class(diff_per_share)>
                                        {format_eur(diff_per_share, 4)}
                                    </dd>
                                    <dt>{"Participaciones"}</dt>
                                    <dd>{format_shares(calc.shares)}</dd>
                                    <dt>{"Beneficio total"}</dt>
                                    <dd class=signed_class(calc.profit)>
                                        <strong>{format_eur(calc.profit, 4)}</strong>
                                    </dd>
                                </dl>
                            </section>
                        </div>
                    }
                    .into_any()
                }
            }}

            <div class="modal__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {"Cerrar"}
                </button>
            </div>
        </div>
    }
}
