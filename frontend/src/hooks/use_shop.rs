use shared::{CartRepository, CartService, ProductCatalog, WidgetConfig};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::DataClient;
use crate::services::dialogs::alert;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStore;

const COMPONENT: &str = "shop";

pub struct UseShopResult {
    pub catalog: ProductCatalog,
    pub category: String,
    pub cart_count: u32,
    pub on_filter: Callback<String>,
    pub on_add_to_cart: Callback<String>,
}

fn cart_service(cart_key: &str) -> CartService<BrowserStore> {
    CartService::new(CartRepository::new(BrowserStore, cart_key))
}

#[hook]
pub fn use_shop(config: &WidgetConfig) -> UseShopResult {
    let catalog = use_state(ProductCatalog::default);
    let category = use_state(String::new);
    let cart_count = {
        let cart_key = config.cart_key.clone();
        use_state(move || cart_service(&cart_key).cart_count())
    };

    {
        let catalog = catalog.clone();
        let client = DataClient::from_config(config);
        let fallback = config.catalog_fallback;

        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = match client.fetch_catalog().await {
                    Ok(data) => ProductCatalog::from(data),
                    Err(e) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!(
                                "Could not load products, using {:?} fallback: {:#}",
                                fallback, e
                            ),
                        );
                        fallback.catalog()
                    }
                };
                Logger::info_with_component(
                    COMPONENT,
                    &format!(
                        "{} product(s) in {} categories loaded",
                        loaded.products().len(),
                        loaded.categories().len()
                    ),
                );
                catalog.set(loaded);
            });
            || ()
        });
    }

    let on_filter = {
        let category = category.clone();
        Callback::from(move |value: String| category.set(value))
    };

    let on_add_to_cart = {
        let cart_count = cart_count.clone();
        let cart_key = config.cart_key.clone();
        let added_message = config.labels.added_to_cart.clone();

        Callback::from(move |product_id: String| {
            let service = cart_service(&cart_key);
            match service.add_to_cart(&product_id) {
                Ok(count) => {
                    cart_count.set(count);
                    alert(&added_message);
                }
                Err(e) => {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Could not add '{}' to cart: {:#}", product_id, e),
                    );
                    cart_count.set(service.cart_count());
                }
            }
        })
    };

    UseShopResult {
        catalog: (*catalog).clone(),
        category: (*category).clone(),
        cart_count: *cart_count,
        on_filter,
        on_add_to_cart,
    }
}
