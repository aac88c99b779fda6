//! Компонент сортируемой ячейки заголовка таблицы
//!
//! Рендерит обычный `<th>` с индикатором направления (▲/▼/⇅);
//! клик отдаёт индекс колонки наверх, состояние сортировки живёт
//! в странице-владельце таблицы.

use crate::shared::components::table::sort::TableSort;
use leptos::prelude::*;

/// Индикатор для заголовка: стрелка для активной колонки, ⇅ для остальных.
pub fn sort_indicator(sort: Option<TableSort>, column: usize) -> &'static str {
    match sort {
        Some(s) if s.column == column => {
            if s.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Индекс колонки среди заголовков таблицы
    column: usize,

    /// Текущая сортировка таблицы из state страницы
    #[prop(into)]
    sort: Signal<Option<TableSort>>,

    /// Callback при клике на заголовок
    on_sort: Callback<usize>,

    /// Выравнивание (left/right — right для числовых колонок)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; text-align: right;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            style=header_style
            on:click=move |_| on_sort.run(column)
        >
            {label}
            <span class="table__sort-indicator">
                {move || sort_indicator(sort.get(), column)}
            </span>
        </th>
    }
}
