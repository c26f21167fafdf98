//! Application components.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use shop_core::SessionId;
use shop_data::ReqwestTransport;
use shop_observability::StructuredLogger;
use shop_view::{ProductCard, Screen, StoreView, Storefront, STORE_TITLE};

use crate::host::{load_config, AlertNotifier, ConsoleSink};

type Controller = StoreView<ReqwestTransport, AlertNotifier>;
type ControllerHandle = StoredValue<Rc<Controller>, LocalStorage>;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let logger = StructuredLogger::from_config(SessionId::generate(), &config.logging)
        .with_component("store-view")
        .with_sink(ConsoleSink);

    let store = Rc::new(StoreView::new(
        ReqwestTransport::new(),
        AlertNotifier,
        &config,
        logger,
    ));

    let screen = RwSignal::new(store.screen());
    let currency = config.display.currency;
    store.subscribe(move |state| screen.set(Screen::project(state, currency)));

    let mounting = store.clone();
    spawn_local(async move {
        mounting.mount().await;
    });

    let controller: ControllerHandle = StoredValue::new_local(store);
    on_cleanup(move || {
        controller.try_with_value(|store| store.unmount());
    });

    view! {
        <Title text=STORE_TITLE/>
        {move || match screen.get() {
            Screen::Loading { message } => view! {
                <div class="loading">{message}</div>
            }.into_any(),
            Screen::Ready(storefront) => view! {
                <StorefrontView storefront=storefront controller=controller/>
            }.into_any(),
        }}
    }
}

// ============================================================================
// Storefront Components
// ============================================================================

#[component]
fn StorefrontView(storefront: Storefront, controller: ControllerHandle) -> impl IntoView {
    let recent_orders = storefront.recent_orders_label();

    view! {
        <div class="App">
            <header class="App-header">
                <h1>{storefront.title}</h1>
            </header>
            <main>
                <h2>{storefront.heading}</h2>
                {storefront.warning.map(|warning| view! {
                    <div class="error">{warning}</div>
                })}
                <div class="products-grid">
                    {storefront.cards.into_iter().map(|card| view! {
                        <ProductCardView card=card controller=controller/>
                    }).collect_view()}
                </div>
                {recent_orders.map(|label| view! {
                    <div class="orders-section">
                        <h3>{label}</h3>
                    </div>
                })}
            </main>
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard, controller: ControllerHandle) -> impl IntoView {
    let product_id = card.id;
    let price = card.price_label();
    let label = card.button_label();

    let on_buy = move |_: leptos::ev::MouseEvent| {
        if let Some(store) = controller.try_get_value() {
            spawn_local(async move {
                store.buy(product_id).await;
            });
        }
    };

    view! {
        <div class="product-card" data-product-id=product_id.to_string()>
            <h3>{card.name}</h3>
            <p class="price">{price}</p>
            <button class="buy-button" disabled=card.pending on:click=on_buy>
                {label}
            </button>
        </div>
    }
}
