use crate::domain::sales::ui::SalesPage;
use crate::domain::summary::HomePage;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Provide the modal stack to the whole app via context.
    provide_context(ModalStackService::new());

    view! {
        <Router>
            <nav class="nav">
                <span class="nav__brand">{"Cartera"}</span>
                <A href="/">{"Resumen"}</A>
                <A href="/ventas">{"Ventas"}</A>
            </nav>
            <main class="main">
                <Routes fallback=|| view! { <p>{"Página no encontrada"}</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/ventas") view=SalesPage />
                </Routes>
            </main>
            <ModalHost />
        </Router>
    }
}
